// Chat Infrastructure - Repositories
//
// 日志实现：
// - InMemoryMessageLog: 内存日志，用于开发和测试
// - FileMessageLog: 文件持久化日志，用于生产环境

mod file_message_log;
mod in_memory_message_log;

pub use file_message_log::*;
pub use in_memory_message_log::*;

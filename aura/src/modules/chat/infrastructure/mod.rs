// Chat Infrastructure Layer
// 基础设施层包含端口的具体实现

pub mod random;
pub mod repositories;

// 重导出常用类型
pub use random::ThreadRngSource;
pub use repositories::{FileMessageLog, InMemoryMessageLog};

// Chat Ports Layer
// 端口定义了模块与外部世界的接口

mod message_log;
mod random_source;

pub use message_log::*;
pub use random_source::*;

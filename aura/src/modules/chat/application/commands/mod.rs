// Chat Commands - 命令定义和处理器

mod clear_conversation;
mod send_message;

pub use clear_conversation::*;
pub use send_message::*;

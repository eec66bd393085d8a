// Chat Queries - 查询定义和处理器

mod export_transcript;
mod list_messages;
mod recent_history;

pub use export_transcript::*;
pub use list_messages::*;
pub use recent_history::*;

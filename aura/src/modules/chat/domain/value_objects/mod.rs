// Chat Domain - Value Objects
// 值对象是不可变的，通过值而非标识来比较

mod detection;
mod emotion;
mod message_id;
mod typing_delay;

pub use detection::*;
pub use emotion::*;
pub use message_id::*;
pub use typing_delay::*;

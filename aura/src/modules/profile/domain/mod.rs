// Profile Domain Layer
// 领域层包含档案实体、值对象和领域事件

pub mod entities;
pub mod events;
pub mod value_objects;

pub use entities::UserProfile;
pub use events::{ProfileClearedEvent, ProfileSavedEvent};
pub use value_objects::{Age, DisplayName};

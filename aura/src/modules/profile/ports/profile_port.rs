// Profile Port
//
// 档案服务端口定义

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::profile::domain::UserProfile;

/// 档案错误类型
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("No profile stored, login required")]
    NotLoggedIn,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {errors:?}")]
    ValidationError { errors: Vec<String> },
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::SerializationError(err.to_string())
    }
}

/// 档案端口 - 定义档案的读写操作
#[async_trait]
pub trait ProfilePort: Send + Sync {
    /// 获取档案（未登录时为 None）
    async fn get(&self) -> Result<Option<UserProfile>, ProfileError>;

    /// 获取档案，缺失时报 NotLoggedIn
    async fn require(&self) -> Result<UserProfile, ProfileError>;

    /// 保存档案（登录）
    async fn save(&self, name: &str, age: u32) -> Result<UserProfile, ProfileError>;

    /// 清除档案（登出）
    async fn clear(&self) -> Result<(), ProfileError>;

    /// 获取用户称呼（未登录时为 None）
    async fn display_name(&self) -> Result<Option<String>, ProfileError>;

    /// 是否已登录
    async fn is_logged_in(&self) -> Result<bool, ProfileError>;
}

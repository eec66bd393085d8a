// Profile Repository Port
//
// 档案存储仓储端口定义

use async_trait::async_trait;

use super::ProfileError;
use crate::modules::profile::domain::UserProfile;

/// 档案仓储端口 - 定义档案持久化抽象
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// 加载档案（不存在时为 None）
    async fn load(&self) -> Result<Option<UserProfile>, ProfileError>;

    /// 保存档案
    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileError>;

    /// 清除档案
    async fn clear(&self) -> Result<(), ProfileError>;

    /// 检查档案是否存在
    async fn exists(&self) -> Result<bool, ProfileError>;
}

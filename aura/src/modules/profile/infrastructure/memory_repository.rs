// In-Memory Profile Repository
//
// 内存档案仓储实现，用于开发和测试

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::profile::domain::UserProfile;
use crate::modules::profile::ports::{ProfileError, ProfileRepository};

/// 内存档案仓储
pub struct InMemoryProfileRepository {
    profile: RwLock<Option<UserProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profile: RwLock::new(None),
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load(&self) -> Result<Option<UserProfile>, ProfileError> {
        let profile = self.profile.read().await;
        Ok(profile.clone())
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let mut stored = self.profile.write().await;
        *stored = Some(profile.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ProfileError> {
        let mut stored = self.profile.write().await;
        *stored = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ProfileError> {
        let profile = self.profile.read().await;
        Ok(profile.is_some())
    }
}

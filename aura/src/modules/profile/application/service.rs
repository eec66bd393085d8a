// Profile Service
//
// 档案服务门面，提供统一的 API

use async_trait::async_trait;
use std::sync::Arc;

use super::{
    ClearProfileCommand, ClearProfileHandler, CommandHandler, DisplayNameHandler,
    DisplayNameQuery, GetProfileHandler, GetProfileQuery, QueryHandler, SaveProfileCommand,
    SaveProfileHandler,
};
use crate::modules::profile::domain::UserProfile;
use crate::modules::profile::ports::{ProfileError, ProfilePort, ProfileRepository};

/// 档案服务实现
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    // Handlers
    get_handler: GetProfileHandler,
    display_name_handler: DisplayNameHandler,
    save_handler: SaveProfileHandler,
    clear_handler: ClearProfileHandler,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            get_handler: GetProfileHandler::new(repository.clone()),
            display_name_handler: DisplayNameHandler::new(repository.clone()),
            save_handler: SaveProfileHandler::new(repository.clone()),
            clear_handler: ClearProfileHandler::new(repository.clone()),
            repository,
        }
    }

    /// 获取仓储引用
    pub fn repository(&self) -> &Arc<dyn ProfileRepository> {
        &self.repository
    }
}

#[async_trait]
impl ProfilePort for ProfileService {
    async fn get(&self) -> Result<Option<UserProfile>, ProfileError> {
        let response = self.get_handler.handle(GetProfileQuery).await?;
        Ok(response.profile)
    }

    async fn require(&self) -> Result<UserProfile, ProfileError> {
        self.get().await?.ok_or(ProfileError::NotLoggedIn)
    }

    async fn save(&self, name: &str, age: u32) -> Result<UserProfile, ProfileError> {
        let response = self
            .save_handler
            .handle(SaveProfileCommand::new(name, age))
            .await?;
        Ok(response.profile)
    }

    async fn clear(&self) -> Result<(), ProfileError> {
        self.clear_handler.handle(ClearProfileCommand).await?;
        Ok(())
    }

    async fn display_name(&self) -> Result<Option<String>, ProfileError> {
        let response = self.display_name_handler.handle(DisplayNameQuery).await?;
        Ok(response.display_name)
    }

    async fn is_logged_in(&self) -> Result<bool, ProfileError> {
        self.repository.exists().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::infrastructure::InMemoryProfileRepository;

    #[tokio::test]
    async fn test_profile_service_roundtrip() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let service = ProfileService::new(repo);

        // 未登录
        assert!(!service.is_logged_in().await.unwrap());
        assert!(matches!(
            service.require().await,
            Err(ProfileError::NotLoggedIn)
        ));

        // 登录
        let profile = service.save("Mei", 25).await.unwrap();
        assert_eq!(profile.name().as_str(), "Mei");
        assert!(service.is_logged_in().await.unwrap());
        assert_eq!(service.display_name().await.unwrap().as_deref(), Some("Mei"));

        // 登出
        service.clear().await.unwrap();
        assert!(service.get().await.unwrap().is_none());
    }
}

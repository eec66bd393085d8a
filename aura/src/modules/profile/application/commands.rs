// Profile Commands
//
// 档案相关的命令处理器

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::profile::domain::UserProfile;
use crate::modules::profile::ports::{ProfileError, ProfileRepository};

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler<C> {
    type Output;
    type Error;

    async fn handle(&self, command: C) -> Result<Self::Output, Self::Error>;
}

// ============================================================================
// Save Profile Command
// ============================================================================

/// 保存档案命令（登录）
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub name: String,
    pub age: u32,
}

impl SaveProfileCommand {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// 保存档案响应
#[derive(Debug, Clone)]
pub struct SaveProfileResponse {
    pub profile: UserProfile,
}

/// 保存档案命令处理器
pub struct SaveProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl SaveProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<SaveProfileCommand> for SaveProfileHandler {
    type Output = SaveProfileResponse;
    type Error = ProfileError;

    async fn handle(&self, command: SaveProfileCommand) -> Result<Self::Output, Self::Error> {
        let profile = UserProfile::new(command.name, command.age);

        // 验证档案
        profile
            .validate()
            .map_err(|errors| ProfileError::ValidationError { errors })?;

        // 保存档案
        self.repository.save(&profile).await?;
        tracing::info!("Profile saved for {}", profile.name());

        Ok(SaveProfileResponse { profile })
    }
}

// ============================================================================
// Clear Profile Command
// ============================================================================

/// 清除档案命令（登出）
#[derive(Debug, Clone, Default)]
pub struct ClearProfileCommand;

/// 清除档案响应
#[derive(Debug, Clone)]
pub struct ClearProfileResponse {
    /// 清除前是否存在档案
    pub existed: bool,
}

/// 清除档案命令处理器
pub struct ClearProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl ClearProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<ClearProfileCommand> for ClearProfileHandler {
    type Output = ClearProfileResponse;
    type Error = ProfileError;

    async fn handle(&self, _command: ClearProfileCommand) -> Result<Self::Output, Self::Error> {
        let existed = self.repository.exists().await?;
        self.repository.clear().await?;

        Ok(ClearProfileResponse { existed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::infrastructure::InMemoryProfileRepository;

    #[tokio::test]
    async fn test_save_profile() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let handler = SaveProfileHandler::new(repo.clone());

        let response = handler
            .handle(SaveProfileCommand::new("Mei", 25))
            .await
            .unwrap();

        assert_eq!(response.profile.name().as_str(), "Mei");
        assert!(repo.exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_save_invalid_profile() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let handler = SaveProfileHandler::new(repo.clone());

        let result = handler.handle(SaveProfileCommand::new("  ", 0)).await;

        assert!(matches!(
            result,
            Err(ProfileError::ValidationError { .. })
        ));
        assert!(!repo.exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_profile() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let save = SaveProfileHandler::new(repo.clone());
        let clear = ClearProfileHandler::new(repo.clone());

        save.handle(SaveProfileCommand::new("Mei", 25))
            .await
            .unwrap();

        let response = clear.handle(ClearProfileCommand).await.unwrap();
        assert!(response.existed);
        assert!(!repo.exists().await.unwrap());

        let again = clear.handle(ClearProfileCommand).await.unwrap();
        assert!(!again.existed);
    }
}

// Profile Queries
//
// 档案相关的查询处理器

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::profile::domain::UserProfile;
use crate::modules::profile::ports::{ProfileError, ProfileRepository};

/// 查询处理器 trait
#[async_trait]
pub trait QueryHandler<Q> {
    type Output;
    type Error;

    async fn handle(&self, query: Q) -> Result<Self::Output, Self::Error>;
}

// ============================================================================
// Get Profile Query
// ============================================================================

/// 获取档案查询
#[derive(Debug, Clone, Default)]
pub struct GetProfileQuery;

/// 获取档案响应
#[derive(Debug, Clone)]
pub struct GetProfileResponse {
    pub profile: Option<UserProfile>,
}

/// 获取档案查询处理器
pub struct GetProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetProfileQuery> for GetProfileHandler {
    type Output = GetProfileResponse;
    type Error = ProfileError;

    async fn handle(&self, _query: GetProfileQuery) -> Result<Self::Output, Self::Error> {
        let profile = self.repository.load().await?;
        Ok(GetProfileResponse { profile })
    }
}

// ============================================================================
// Display Name Query
// ============================================================================

/// 获取称呼查询
#[derive(Debug, Clone, Default)]
pub struct DisplayNameQuery;

/// 获取称呼响应（未登录时为 None，回退由回复选择器负责）
#[derive(Debug, Clone)]
pub struct DisplayNameResponse {
    pub display_name: Option<String>,
}

/// 获取称呼查询处理器
pub struct DisplayNameHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl DisplayNameHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<DisplayNameQuery> for DisplayNameHandler {
    type Output = DisplayNameResponse;
    type Error = ProfileError;

    async fn handle(&self, _query: DisplayNameQuery) -> Result<Self::Output, Self::Error> {
        let profile = self.repository.load().await?;
        Ok(DisplayNameResponse {
            display_name: profile.map(|p| p.name().as_str().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::infrastructure::InMemoryProfileRepository;

    #[tokio::test]
    async fn test_get_profile_when_absent() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let handler = GetProfileHandler::new(repo);

        let response = handler.handle(GetProfileQuery).await.unwrap();
        assert!(response.profile.is_none());
    }

    #[tokio::test]
    async fn test_display_name() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let handler = DisplayNameHandler::new(repo.clone());

        let response = handler.handle(DisplayNameQuery).await.unwrap();
        assert!(response.display_name.is_none());

        repo.save(&UserProfile::new("Mei", 25)).await.unwrap();
        let response = handler.handle(DisplayNameQuery).await.unwrap();
        assert_eq!(response.display_name.as_deref(), Some("Mei"));
    }
}

// Profile Module
//
// 用户档案模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含档案实体、值对象和领域事件
// - ports: 端口层，定义档案读写的抽象接口
// - infrastructure: 基础设施层，实现具体的档案存储适配器
// - application: 应用层，实现命令、查询处理器与服务门面

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{Age, DisplayName, ProfileClearedEvent, ProfileSavedEvent, UserProfile};

// Ports
pub use ports::{ProfileError, ProfilePort, ProfileRepository};

// Application
pub use application::{ProfileService, SaveProfileCommand, SaveProfileResponse};

// Infrastructure
pub use infrastructure::{InMemoryProfileRepository, StoreProfileRepository};

use std::sync::Arc;

/// Profile 模块容器
///
/// 管理模块内的依赖注入
pub struct ProfileModule {
    service: Arc<ProfileService>,
}

impl ProfileModule {
    /// 创建新的 ProfileModule 实例（内存存储，用于开发测试）
    pub fn new() -> Self {
        let repository: Arc<dyn ProfileRepository> = Arc::new(InMemoryProfileRepository::new());
        Self {
            service: Arc::new(ProfileService::new(repository)),
        }
    }

    /// 创建带文件存储的 ProfileModule 实例（生产环境推荐）
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    pub fn new_with_store(data_dir: std::path::PathBuf) -> Self {
        let repository: Arc<dyn ProfileRepository> =
            Arc::new(StoreProfileRepository::new(data_dir));
        Self {
            service: Arc::new(ProfileService::new(repository)),
        }
    }

    /// 使用自定义仓储创建 ProfileModule
    pub fn with_repository(repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            service: Arc::new(ProfileService::new(repository)),
        }
    }

    /// 获取档案服务
    pub fn service(&self) -> &Arc<ProfileService> {
        &self.service
    }
}

impl Default for ProfileModule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_profile_module_integration() {
        let module = ProfileModule::new();
        let service = module.service();

        assert!(!service.is_logged_in().await.unwrap());

        service.save("Mei", 25).await.unwrap();
        let profile = service.require().await.unwrap();
        assert_eq!(profile.name().as_str(), "Mei");

        service.clear().await.unwrap();
        assert!(matches!(
            service.require().await,
            Err(ProfileError::NotLoggedIn)
        ));
    }
}

// Store-based Profile Repository
//
// 基于 JSON 文件的档案仓储实现

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::profile::domain::UserProfile;
use crate::modules::profile::ports::{ProfileError, ProfileRepository};

const PROFILE_FILE_NAME: &str = "profile.json";

/// 文件档案仓储
///
/// 将档案持久化到应用数据目录下的 JSON 文件，带内存缓存
pub struct StoreProfileRepository {
    /// 档案文件路径
    profile_path: PathBuf,
    /// 内存缓存
    cache: Arc<RwLock<Option<UserProfile>>>,
}

impl StoreProfileRepository {
    /// 创建新的文件档案仓储
    ///
    /// # Arguments
    /// * `app_data_dir` - 应用数据目录
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            profile_path: app_data_dir.join(PROFILE_FILE_NAME),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// 从文件加载档案
    async fn load_from_file(&self) -> Result<Option<UserProfile>, ProfileError> {
        if !self.profile_path.exists() {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.profile_path)
            .await
            .map_err(|e| ProfileError::StorageError(e.to_string()))?;

        let profile: UserProfile = serde_json::from_str(&content)?;

        Ok(Some(profile))
    }

    /// 保存档案到文件
    async fn save_to_file(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        // 确保目录存在
        if let Some(parent) = self.profile_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ProfileError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(profile)?;

        tokio::fs::write(&self.profile_path, content)
            .await
            .map_err(|e| ProfileError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for StoreProfileRepository {
    async fn load(&self) -> Result<Option<UserProfile>, ProfileError> {
        // 先检查缓存
        {
            let cache = self.cache.read().await;
            if let Some(ref profile) = *cache {
                return Ok(Some(profile.clone()));
            }
        }

        // 从文件加载
        let profile = self.load_from_file().await?;

        // 更新缓存
        if let Some(ref loaded) = profile {
            let mut cache = self.cache.write().await;
            *cache = Some(loaded.clone());
        }

        Ok(profile)
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        // 保存到文件
        self.save_to_file(profile).await?;

        // 更新缓存
        {
            let mut cache = self.cache.write().await;
            *cache = Some(profile.clone());
        }

        Ok(())
    }

    async fn clear(&self) -> Result<(), ProfileError> {
        // 删除文件
        if self.profile_path.exists() {
            tokio::fs::remove_file(&self.profile_path)
                .await
                .map_err(|e| ProfileError::StorageError(e.to_string()))?;
        }

        // 清除缓存
        {
            let mut cache = self.cache.write().await;
            *cache = None;
        }

        Ok(())
    }

    async fn exists(&self) -> Result<bool, ProfileError> {
        Ok(self.profile_path.exists())
    }
}

// 文件持久化对话日志实现
//
// 使用 JSON 文件存储消息数据，提供简单的持久化方案

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::modules::chat::domain::ChatMessage;
use crate::modules::chat::ports::{MessageLog, RepositoryError};

const LOG_FILE_NAME: &str = "messages.json";

/// 持久化数据结构
#[derive(Debug, Serialize, Deserialize, Default)]
struct MessageStore {
    messages: Vec<ChatMessage>,
}

/// 文件持久化对话日志
///
/// 将消息按追加顺序存储到 JSON 文件中，重启后恢复历史
pub struct FileMessageLog {
    store: RwLock<MessageStore>,
    file_path: PathBuf,
}

impl FileMessageLog {
    /// 创建新的文件日志
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    pub async fn new(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let file_path = data_dir.join(LOG_FILE_NAME);

        // 确保目录存在
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        }

        // 尝试加载现有数据
        let store = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

            serde_json::from_str(&content).unwrap_or_default()
        } else {
            MessageStore::default()
        };

        Ok(Self {
            store: RwLock::new(store),
            file_path,
        })
    }

    /// 将数据持久化到文件
    async fn persist(&self) -> Result<(), RepositoryError> {
        let store = self.store.read().await;
        let content = serde_json::to_string_pretty(&*store)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&self.file_path, content)
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl MessageLog for FileMessageLog {
    async fn append(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            store.messages.push(message.clone());
        }
        self.persist().await
    }

    async fn read_all(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.messages.clone())
    }

    async fn last(&self) -> Result<Option<ChatMessage>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.messages.last().cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.messages.len())
    }

    async fn clear(&self) -> Result<usize, RepositoryError> {
        let removed;
        {
            let mut store = self.store.write().await;
            removed = store.messages.len();
            store.messages.clear();
        }
        self.persist().await?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_append_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let log = FileMessageLog::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        log.append(&ChatMessage::new_user("Hello")).await.unwrap();

        let messages = log.read_all().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "Hello");
    }

    #[tokio::test]
    async fn test_reload_from_disk() {
        let temp_dir = TempDir::new().unwrap();

        {
            let log = FileMessageLog::new(temp_dir.path().to_path_buf())
                .await
                .unwrap();
            for i in 0..3 {
                log.append(&ChatMessage::new_user(format!("Message {}", i)))
                    .await
                    .unwrap();
            }
        }

        // 重新打开，历史应当还在
        let reopened = FileMessageLog::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();
        assert_eq!(reopened.count().await.unwrap(), 3);
        assert_eq!(
            reopened.last().await.unwrap().unwrap().content(),
            "Message 2"
        );
    }

    #[tokio::test]
    async fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let log = FileMessageLog::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        for _ in 0..2 {
            log.append(&ChatMessage::new_user("Test")).await.unwrap();
        }

        let removed = log.clear().await.unwrap();
        assert_eq!(removed, 2);

        let reopened = FileMessageLog::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();
        assert_eq!(reopened.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_corrupted_file_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "not json").await.unwrap();

        let log = FileMessageLog::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();
        assert_eq!(log.count().await.unwrap(), 0);
    }
}

use async_trait::async_trait;
use thiserror::Error;

use super::super::domain::ChatMessage;

/// 仓储错误类型
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 对话日志端口
///
/// 追加式日志：消息只能按序追加或整体清空，不支持单条修改与删除
#[async_trait]
pub trait MessageLog: Send + Sync {
    /// 追加一条消息
    async fn append(&self, message: &ChatMessage) -> Result<(), RepositoryError>;

    /// 按追加顺序读取全部消息
    async fn read_all(&self) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// 获取最后一条消息
    async fn last(&self) -> Result<Option<ChatMessage>, RepositoryError>;

    /// 获取消息数量
    async fn count(&self) -> Result<usize, RepositoryError>;

    /// 清空日志，返回被移除的消息数
    async fn clear(&self) -> Result<usize, RepositoryError>;
}

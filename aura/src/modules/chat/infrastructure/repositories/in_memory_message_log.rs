use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::chat::domain::ChatMessage;
use crate::modules::chat::ports::{MessageLog, RepositoryError};

/// 内存对话日志
///
/// 用于开发和测试，进程退出即丢失
pub struct InMemoryMessageLog {
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryMessageLog {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMessageLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageLog for InMemoryMessageLog {
    async fn append(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.read().await;
        Ok(messages.clone())
    }

    async fn last(&self) -> Result<Option<ChatMessage>, RepositoryError> {
        let messages = self.messages.read().await;
        Ok(messages.last().cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let messages = self.messages.read().await;
        Ok(messages.len())
    }

    async fn clear(&self) -> Result<usize, RepositoryError> {
        let mut messages = self.messages.write().await;
        let removed = messages.len();
        messages.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_and_read() {
        let log = InMemoryMessageLog::new();

        log.append(&ChatMessage::new_user("Hello")).await.unwrap();
        log.append(&ChatMessage::new_user("World")).await.unwrap();

        let messages = log.read_all().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content(), "Hello");
        assert_eq!(messages[1].content(), "World");
    }

    #[tokio::test]
    async fn test_last_and_count() {
        let log = InMemoryMessageLog::new();
        assert!(log.last().await.unwrap().is_none());

        for i in 0..3 {
            log.append(&ChatMessage::new_user(format!("Message {}", i)))
                .await
                .unwrap();
        }

        assert_eq!(log.count().await.unwrap(), 3);
        assert_eq!(log.last().await.unwrap().unwrap().content(), "Message 2");
    }

    #[tokio::test]
    async fn test_clear() {
        let log = InMemoryMessageLog::new();

        for _ in 0..3 {
            log.append(&ChatMessage::new_user("Test")).await.unwrap();
        }

        let removed = log.clear().await.unwrap();
        assert_eq!(removed, 3);
        assert_eq!(log.count().await.unwrap(), 0);
    }
}

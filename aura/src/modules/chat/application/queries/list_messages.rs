use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::chat::domain::ChatMessage;
use crate::modules::chat::ports::MessageLog;

/// 列出消息查询
///
/// 对话日志是单一扁平序列，整体加载
#[derive(Debug, Clone, Default)]
pub struct ListMessagesQuery;

/// 列出消息响应
#[derive(Debug, Clone)]
pub struct ListMessagesResponse {
    pub messages: Vec<ChatMessage>,
    pub total: usize,
}

/// 列出消息查询处理器
pub struct ListMessagesHandler {
    message_log: Arc<dyn MessageLog>,
}

impl ListMessagesHandler {
    pub fn new(message_log: Arc<dyn MessageLog>) -> Self {
        Self { message_log }
    }
}

#[async_trait]
impl QueryHandler<ListMessagesQuery, ListMessagesResponse> for ListMessagesHandler {
    async fn handle(
        &self,
        _query: ListMessagesQuery,
    ) -> Result<ListMessagesResponse, ApplicationError> {
        let messages = self.message_log.read_all().await?;
        let total = messages.len();

        Ok(ListMessagesResponse { messages, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::infrastructure::InMemoryMessageLog;

    #[tokio::test]
    async fn test_list_messages() {
        let log = Arc::new(InMemoryMessageLog::new());
        let handler = ListMessagesHandler::new(log.clone());

        // 添加消息
        for i in 0..5 {
            log.append(&ChatMessage::new_user(format!("Message {}", i)))
                .await
                .unwrap();
        }

        let response = handler.handle(ListMessagesQuery).await.unwrap();

        assert_eq!(response.messages.len(), 5);
        assert_eq!(response.total, 5);
        assert_eq!(response.messages[0].content(), "Message 0");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let log = Arc::new(InMemoryMessageLog::new());
        let handler = ListMessagesHandler::new(log);

        let response = handler.handle(ListMessagesQuery).await.unwrap();

        assert!(response.messages.is_empty());
        assert_eq!(response.total, 0);
    }
}

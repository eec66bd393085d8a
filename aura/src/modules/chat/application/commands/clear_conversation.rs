use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::chat::domain::{
    ChatDomainEvent, ChatMessage, ConversationClearedEvent, MessageLoggedEvent, WELCOME_MESSAGE,
};
use crate::modules::chat::ports::MessageLog;

/// 清空对话命令
#[derive(Debug, Clone, Default)]
pub struct ClearConversationCommand;

/// 清空对话响应
#[derive(Debug, Clone)]
pub struct ClearConversationResponse {
    /// 被移除的消息数
    pub removed: usize,
    /// 重新写入的开场白
    pub welcome_message: ChatMessage,
}

/// 清空对话命令处理器
///
/// 清空日志后立即写入 Aura 开场白，让新对话从问候开始
pub struct ClearConversationHandler {
    message_log: Arc<dyn MessageLog>,
    event_bus: Option<Arc<EventBus>>,
}

impl ClearConversationHandler {
    pub fn new(message_log: Arc<dyn MessageLog>) -> Self {
        Self {
            message_log,
            event_bus: None,
        }
    }

    /// 挂接事件总线
    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    fn publish(&self, event: ChatDomainEvent) {
        if let Some(bus) = &self.event_bus {
            bus.publish(AppEvent::Chat(event));
        }
    }
}

#[async_trait]
impl CommandHandler<ClearConversationCommand, ClearConversationResponse>
    for ClearConversationHandler
{
    async fn handle(
        &self,
        _command: ClearConversationCommand,
    ) -> Result<ClearConversationResponse, ApplicationError> {
        let removed = self.message_log.clear().await?;
        tracing::info!("Conversation cleared, {} messages removed", removed);
        self.publish(ChatDomainEvent::ConversationCleared(
            ConversationClearedEvent {
                removed,
                timestamp: Utc::now(),
            },
        ));

        // 开场白不携带情感标签
        let welcome_message = ChatMessage::new_assistant(WELCOME_MESSAGE, None);
        self.message_log.append(&welcome_message).await?;
        self.publish(ChatDomainEvent::MessageLogged(MessageLoggedEvent {
            message_id: welcome_message.id(),
            sender: welcome_message.sender(),
            emotion: welcome_message.emotion(),
            timestamp: Utc::now(),
        }));

        Ok(ClearConversationResponse {
            removed,
            welcome_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::Sender;
    use crate::modules::chat::infrastructure::InMemoryMessageLog;

    #[tokio::test]
    async fn test_clear_writes_welcome() {
        let log = Arc::new(InMemoryMessageLog::new());
        for _ in 0..3 {
            log.append(&ChatMessage::new_user("Test")).await.unwrap();
        }

        let handler = ClearConversationHandler::new(log.clone());
        let response = handler.handle(ClearConversationCommand).await.unwrap();

        assert_eq!(response.removed, 3);
        assert_eq!(response.welcome_message.sender(), Sender::Assistant);
        assert!(response.welcome_message.emotion().is_none());

        let messages = log.read_all().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn test_clear_empty_log() {
        let log = Arc::new(InMemoryMessageLog::new());
        let handler = ClearConversationHandler::new(log.clone());

        let response = handler.handle(ClearConversationCommand).await.unwrap();

        assert_eq!(response.removed, 0);
        assert_eq!(log.count().await.unwrap(), 1);
    }
}

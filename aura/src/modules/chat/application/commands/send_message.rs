use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::chat::domain::{
    ChatDomainEvent, ChatMessage, Detection, EmotionDetectedEvent, EmotionDetector,
    MessageLoggedEvent, ResponseSelector, TypingDelay,
};
use crate::modules::chat::ports::{MessageLog, RandomSource};

/// 发送消息命令
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// 用户消息内容
    pub content: String,
    /// 用户称呼（缺省时回退到占位称呼）
    pub display_name: Option<String>,
}

impl SendMessageCommand {
    pub fn new(content: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            content: content.into(),
            display_name,
        }
    }
}

/// 发送消息响应
#[derive(Debug, Clone)]
pub struct SendMessageResponse {
    /// 已入账的用户消息
    pub user_message: ChatMessage,
    /// 已入账的 Aura 回复
    pub assistant_message: ChatMessage,
    /// 本次识别结果
    pub detection: Detection,
}

/// 发送消息命令处理器
///
/// 流程：校验输入 → 记录用户消息 → 情感识别 → 选取回复 →
/// （可选）打字延迟 → 记录回复。识别与选择都是纯函数，
/// 处理器只负责编排与持久化。
pub struct SendMessageHandler {
    message_log: Arc<dyn MessageLog>,
    detector: EmotionDetector,
    selector: ResponseSelector,
    random: Arc<dyn RandomSource>,
    typing_delay: Option<TypingDelay>,
    event_bus: Option<Arc<EventBus>>,
}

impl SendMessageHandler {
    pub fn new(message_log: Arc<dyn MessageLog>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            message_log,
            detector: EmotionDetector::new(),
            selector: ResponseSelector::new(random.clone()),
            random,
            typing_delay: None,
            event_bus: None,
        }
    }

    /// 启用回复前的打字延迟
    pub fn with_typing_delay(mut self, delay: TypingDelay) -> Self {
        self.typing_delay = Some(delay);
        self
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

    fn publish_logged(&self, message: &ChatMessage) {
        self.publish(ChatDomainEvent::MessageLogged(MessageLoggedEvent {
            message_id: message.id(),
            sender: message.sender(),
            emotion: message.emotion(),
            timestamp: Utc::now(),
        }));
    }
}

#[async_trait]
impl CommandHandler<SendMessageCommand, SendMessageResponse> for SendMessageHandler {
    async fn handle(
        &self,
        command: SendMessageCommand,
    ) -> Result<SendMessageResponse, ApplicationError> {
        // 验证输入
        if command.content.trim().is_empty() {
            return Err(ApplicationError::ValidationError(
                "Message content cannot be empty".to_string(),
            ));
        }

        // 记录用户消息
        let user_message = ChatMessage::new_user(&command.content);
        self.message_log.append(&user_message).await?;
        self.publish_logged(&user_message);

        // 情感识别
        let detection = self.detector.detect(&command.content);
        tracing::debug!(
            "Detected emotion {:?} (raw winner {:?}, negated: {})",
            detection.emotion,
            detection.detected,
            detection.negated
        );
        self.publish(ChatDomainEvent::EmotionDetected(EmotionDetectedEvent {
            message_id: user_message.id(),
            detection,
            timestamp: Utc::now(),
        }));

        // 选取回复
        let response = self
            .selector
            .select(&detection, command.display_name.as_deref());

        // 打字延迟
        if let Some(delay) = self.typing_delay {
            tokio::time::sleep(delay.sample(self.random.as_ref())).await;
        }

        // 记录 Aura 回复，情感标签取最终识别结果
        let assistant_message = ChatMessage::new_assistant(response, detection.emotion);
        self.message_log.append(&assistant_message).await?;
        self.publish_logged(&assistant_message);

        Ok(SendMessageResponse {
            user_message,
            assistant_message,
            detection,
        })
    }
}

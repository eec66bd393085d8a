use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::Sender;
use super::value_objects::{Detection, Emotion, MessageId};

/// 领域事件基础 trait
pub trait DomainEvent: Clone + Send + Sync {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> DateTime<Utc>;
}

/// 消息入账事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLoggedEvent {
    pub message_id: MessageId,
    pub sender: Sender,
    pub emotion: Option<Emotion>,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for MessageLoggedEvent {
    fn event_type(&self) -> &'static str {
        "message.logged"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 情感识别事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionDetectedEvent {
    pub message_id: MessageId,
    pub detection: Detection,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for EmotionDetectedEvent {
    fn event_type(&self) -> &'static str {
        "emotion.detected"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 对话清空事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationClearedEvent {
    pub removed: usize,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for ConversationClearedEvent {
    fn event_type(&self) -> &'static str {
        "conversation.cleared"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 聊天领域事件枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChatDomainEvent {
    MessageLogged(MessageLoggedEvent),
    EmotionDetected(EmotionDetectedEvent),
    ConversationCleared(ConversationClearedEvent),
}

impl ChatDomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ChatDomainEvent::MessageLogged(e) => e.event_type(),
            ChatDomainEvent::EmotionDetected(e) => e.event_type(),
            ChatDomainEvent::ConversationCleared(e) => e.event_type(),
        }
    }
}

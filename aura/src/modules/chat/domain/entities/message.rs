use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::{Emotion, MessageId};

/// 消息发送方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// 用户消息
    User,
    /// Aura 回复
    Assistant,
}

impl Sender {
    /// 转换为导出文本中的标签
    pub fn transcript_label(&self) -> &'static str {
        match self {
            Sender::User => "USER",
            Sender::Assistant => "ASSISTANT",
        }
    }
}

/// 消息实体
///
/// 对话日志中的一条记录，按时间顺序追加，写入后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// 消息唯一标识
    id: MessageId,
    /// 发送方
    sender: Sender,
    /// 消息内容
    content: String,
    /// 情感标签（仅 Assistant 回复携带）
    emotion: Option<Emotion>,
    /// 创建时间
    created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// 创建用户消息
    pub fn new_user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender: Sender::User,
            content: content.into(),
            emotion: None,
            created_at: Utc::now(),
        }
    }

    /// 创建 Aura 回复
    pub fn new_assistant(content: impl Into<String>, emotion: Option<Emotion>) -> Self {
        Self {
            id: MessageId::new(),
            sender: Sender::Assistant,
            content: content.into(),
            emotion,
            created_at: Utc::now(),
        }
    }

    // Getters
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn emotion(&self) -> Option<Emotion> {
        self.emotion
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 生成历史侧栏用的内容预览（超过 120 字符截取前 117 个并加省略号）
    pub fn preview(&self) -> String {
        if self.content.chars().count() > 120 {
            let head: String = self.content.chars().take(117).collect();
            format!("{}...", head)
        } else {
            self.content.clone()
        }
    }

    /// 转换为导出文本中的一行
    pub fn transcript_line(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.created_at.to_rfc3339(),
            self.sender.transcript_label(),
            self.content
        )
    }
}

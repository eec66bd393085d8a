use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::chat::ports::MessageLog;

/// 导出对话文本查询
#[derive(Debug, Clone, Default)]
pub struct ExportTranscriptQuery;

/// 导出响应
///
/// `transcript` 为纯文本：每条消息一行 `[时间] 发送方: 内容`，
/// 消息之间以空行分隔
#[derive(Debug, Clone)]
pub struct ExportTranscriptResponse {
    pub transcript: String,
    pub total: usize,
}

/// 导出对话文本查询处理器
pub struct ExportTranscriptHandler {
    message_log: Arc<dyn MessageLog>,
}

impl ExportTranscriptHandler {
    pub fn new(message_log: Arc<dyn MessageLog>) -> Self {
        Self { message_log }
    }
}

#[async_trait]
impl QueryHandler<ExportTranscriptQuery, ExportTranscriptResponse> for ExportTranscriptHandler {
    async fn handle(
        &self,
        _query: ExportTranscriptQuery,
    ) -> Result<ExportTranscriptResponse, ApplicationError> {
        let messages = self.message_log.read_all().await?;
        let total = messages.len();

        let transcript = messages
            .iter()
            .map(|message| message.transcript_line())
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(ExportTranscriptResponse { transcript, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{ChatMessage, Emotion};
    use crate::modules::chat::infrastructure::InMemoryMessageLog;

    #[tokio::test]
    async fn test_export_transcript_format() {
        let log = Arc::new(InMemoryMessageLog::new());
        log.append(&ChatMessage::new_user("I feel sad"))
            .await
            .unwrap();
        log.append(&ChatMessage::new_assistant(
            "I can sense the heaviness.",
            Some(Emotion::Sad),
        ))
        .await
        .unwrap();

        let handler = ExportTranscriptHandler::new(log);
        let response = handler.handle(ExportTranscriptQuery).await.unwrap();

        assert_eq!(response.total, 2);
        let blocks: Vec<&str> = response.transcript.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("] USER: I feel sad"));
        assert!(blocks[1].contains("] ASSISTANT: I can sense the heaviness."));
    }

    #[tokio::test]
    async fn test_export_empty_log() {
        let log = Arc::new(InMemoryMessageLog::new());
        let handler = ExportTranscriptHandler::new(log);

        let response = handler.handle(ExportTranscriptQuery).await.unwrap();

        assert!(response.transcript.is_empty());
        assert_eq!(response.total, 0);
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::chat::domain::Sender;
use crate::modules::chat::ports::MessageLog;

/// 最近历史查询
///
/// 历史侧栏用：取最近 N 条，新消息在前
#[derive(Debug, Clone)]
pub struct RecentHistoryQuery {
    pub limit: usize,
}

impl RecentHistoryQuery {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for RecentHistoryQuery {
    fn default() -> Self {
        Self { limit: 8 }
    }
}

/// 历史条目（内容为截断预览）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub sender: Sender,
    pub preview: String,
    pub timestamp: DateTime<Utc>,
}

/// 最近历史响应
#[derive(Debug, Clone)]
pub struct RecentHistoryResponse {
    pub entries: Vec<HistoryEntry>,
}

/// 最近历史查询处理器
pub struct RecentHistoryHandler {
    message_log: Arc<dyn MessageLog>,
}

impl RecentHistoryHandler {
    pub fn new(message_log: Arc<dyn MessageLog>) -> Self {
        Self { message_log }
    }
}

#[async_trait]
impl QueryHandler<RecentHistoryQuery, RecentHistoryResponse> for RecentHistoryHandler {
    async fn handle(
        &self,
        query: RecentHistoryQuery,
    ) -> Result<RecentHistoryResponse, ApplicationError> {
        let messages = self.message_log.read_all().await?;

        let start = messages.len().saturating_sub(query.limit);
        let entries = messages[start..]
            .iter()
            .rev()
            .map(|message| HistoryEntry {
                sender: message.sender(),
                preview: message.preview(),
                timestamp: message.created_at(),
            })
            .collect();

        Ok(RecentHistoryResponse { entries })
    }
}

// Chat Module - 聊天模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含实体、值对象、领域服务和领域事件
// - ports: 端口层，定义与外部世界的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    // Traits
    ApplicationError,
    ClearConversationCommand,
    ClearConversationHandler,
    ClearConversationResponse,
    CommandHandler,
    ExportTranscriptHandler,
    ExportTranscriptQuery,
    ExportTranscriptResponse,
    HistoryEntry,
    ListMessagesHandler,
    ListMessagesQuery,
    ListMessagesResponse,
    QueryHandler,
    RecentHistoryHandler,
    RecentHistoryQuery,
    RecentHistoryResponse,
    SendMessageCommand,
    SendMessageHandler,
    SendMessageResponse,
};

pub use domain::{
    ChatMessage, Detection, Emotion, EmotionDetector, MessageId, ResponseSelector, Sender,
    TypingDelay, DEFAULT_DISPLAY_NAME, WELCOME_MESSAGE,
};

pub use infrastructure::{FileMessageLog, InMemoryMessageLog, ThreadRngSource};

pub use ports::{MessageLog, RandomSource, RepositoryError};

use std::sync::Arc;

use crate::infrastructure::EventBus;

/// Chat 模块容器
///
/// 管理模块内的依赖注入
pub struct ChatModule {
    // Ports
    message_log: Arc<dyn MessageLog>,
    random: Arc<dyn RandomSource>,
    event_bus: Option<Arc<EventBus>>,
    typing_delay: Option<TypingDelay>,
    // Handlers
    send_message_handler: SendMessageHandler,
    clear_conversation_handler: ClearConversationHandler,
    list_messages_handler: ListMessagesHandler,
    recent_history_handler: RecentHistoryHandler,
    export_transcript_handler: ExportTranscriptHandler,
}

impl ChatModule {
    /// 创建新的 ChatModule 实例（内存日志，用于开发测试）
    pub fn new() -> Self {
        Self::with_components(
            Arc::new(InMemoryMessageLog::new()),
            Arc::new(ThreadRngSource::new()),
        )
    }

    /// 创建带持久化日志的 ChatModule 实例（生产环境推荐）
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    ///
    /// # Errors
    /// 如果无法初始化文件存储，返回错误
    pub async fn new_with_persistence(
        data_dir: std::path::PathBuf,
    ) -> Result<Self, RepositoryError> {
        let message_log: Arc<dyn MessageLog> = Arc::new(FileMessageLog::new(data_dir).await?);

        Ok(Self::with_components(
            message_log,
            Arc::new(ThreadRngSource::new()),
        ))
    }

    /// 使用自定义日志与随机源创建 ChatModule
    pub fn with_components(message_log: Arc<dyn MessageLog>, random: Arc<dyn RandomSource>) -> Self {
        Self::assemble(message_log, random, None, None)
    }

    /// 挂接事件总线
    pub fn attach_event_bus(self, event_bus: Arc<EventBus>) -> Self {
        Self::assemble(
            self.message_log,
            self.random,
            Some(event_bus),
            self.typing_delay,
        )
    }

    /// 启用回复前的打字延迟
    pub fn with_typing_delay(self, delay: TypingDelay) -> Self {
        Self::assemble(self.message_log, self.random, self.event_bus, Some(delay))
    }

    fn assemble(
        message_log: Arc<dyn MessageLog>,
        random: Arc<dyn RandomSource>,
        event_bus: Option<Arc<EventBus>>,
        typing_delay: Option<TypingDelay>,
    ) -> Self {
        let mut send_message_handler =
            SendMessageHandler::new(message_log.clone(), random.clone());
        let mut clear_conversation_handler = ClearConversationHandler::new(message_log.clone());

        if let Some(bus) = &event_bus {
            send_message_handler = send_message_handler.with_event_bus(bus.clone());
            clear_conversation_handler = clear_conversation_handler.with_event_bus(bus.clone());
        }
        if let Some(delay) = typing_delay {
            send_message_handler = send_message_handler.with_typing_delay(delay);
        }

        let list_messages_handler = ListMessagesHandler::new(message_log.clone());
        let recent_history_handler = RecentHistoryHandler::new(message_log.clone());
        let export_transcript_handler = ExportTranscriptHandler::new(message_log.clone());

        Self {
            message_log,
            random,
            event_bus,
            typing_delay,
            send_message_handler,
            clear_conversation_handler,
            list_messages_handler,
            recent_history_handler,
            export_transcript_handler,
        }
    }

    // Command handlers

    /// 发送消息并取得 Aura 回复
    pub async fn send_message(
        &self,
        command: SendMessageCommand,
    ) -> Result<SendMessageResponse, ApplicationError> {
        self.send_message_handler.handle(command).await
    }

    /// 清空对话并重新写入开场白
    pub async fn clear_conversation(
        &self,
    ) -> Result<ClearConversationResponse, ApplicationError> {
        self.clear_conversation_handler
            .handle(ClearConversationCommand)
            .await
    }

    // Query handlers

    /// 列出全部消息
    pub async fn list_messages(&self) -> Result<ListMessagesResponse, ApplicationError> {
        self.list_messages_handler.handle(ListMessagesQuery).await
    }

    /// 获取最近历史（新消息在前）
    pub async fn recent_history(
        &self,
        query: RecentHistoryQuery,
    ) -> Result<RecentHistoryResponse, ApplicationError> {
        self.recent_history_handler.handle(query).await
    }

    /// 导出对话文本
    pub async fn export_transcript(
        &self,
    ) -> Result<ExportTranscriptResponse, ApplicationError> {
        self.export_transcript_handler
            .handle(ExportTranscriptQuery)
            .await
    }

    // Accessors

    /// 获取对话日志
    pub fn message_log(&self) -> &Arc<dyn MessageLog> {
        &self.message_log
    }
}

impl Default for ChatModule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chat_module_integration() {
        let module = ChatModule::new();

        // 发送一条困扰情感消息
        let response = module
            .send_message(SendMessageCommand::new(
                "I feel so stressed and overwhelmed",
                Some("Mei".to_string()),
            ))
            .await
            .unwrap();

        assert_eq!(response.detection.emotion, Some(Emotion::Stressed));
        assert!(response
            .assistant_message
            .content()
            .contains("breathing exercise"));

        // 列出消息
        let list = module.list_messages().await.unwrap();
        assert_eq!(list.total, 2);

        // 最近历史（新消息在前）
        let recent = module
            .recent_history(RecentHistoryQuery::default())
            .await
            .unwrap();
        assert_eq!(recent.entries.len(), 2);
        assert_eq!(recent.entries[0].sender, Sender::Assistant);

        // 导出
        let export = module.export_transcript().await.unwrap();
        assert!(export.transcript.contains("] USER: "));

        // 清空后只剩开场白
        let cleared = module.clear_conversation().await.unwrap();
        assert_eq!(cleared.removed, 2);

        let list = module.list_messages().await.unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.messages[0].content(), WELCOME_MESSAGE);
    }
}

pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;

use infrastructure::{AppEvent, EventBus};
use modules::chat::{
    ChatMessage, ClearConversationResponse, ExportTranscriptResponse, ListMessagesResponse,
    RecentHistoryQuery, RecentHistoryResponse, SendMessageCommand, SendMessageResponse,
    TypingDelay,
};
use modules::profile::{ProfileClearedEvent, ProfilePort, ProfileSavedEvent, UserProfile};
use modules::{ChatModule, ProfileModule};
use shared::AppResult;

/// 初始化日志
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
}

/// Aura 应用门面
///
/// 组装 Profile 与 Chat 两个模块并共享事件总线，
/// 对外提供登录、对话、历史、导出等操作
pub struct Aura {
    profile: ProfileModule,
    chat: ChatModule,
    event_bus: Arc<EventBus>,
}

impl Aura {
    /// 创建内存版实例（开发与测试）
    pub fn new() -> Self {
        let event_bus = Arc::new(EventBus::new());
        Self {
            profile: ProfileModule::new(),
            chat: ChatModule::new().attach_event_bus(event_bus.clone()),
            event_bus,
        }
    }

    /// 创建带持久化存储的实例
    ///
    /// 文件存储初始化失败时回退到内存日志
    pub async fn with_persistence(data_dir: PathBuf) -> Self {
        let event_bus = Arc::new(EventBus::new());

        let chat = match ChatModule::new_with_persistence(data_dir.clone()).await {
            Ok(module) => {
                tracing::info!("Chat module initialized with persistent storage");
                module
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize persistent storage: {}, falling back to memory",
                    e
                );
                ChatModule::new()
            }
        }
        .attach_event_bus(event_bus.clone());

        Self {
            profile: ProfileModule::new_with_store(data_dir),
            chat,
            event_bus,
        }
    }

    /// 启用回复前的打字延迟
    pub fn with_typing_delay(self, delay: TypingDelay) -> Self {
        Self {
            profile: self.profile,
            chat: self.chat.with_typing_delay(delay),
            event_bus: self.event_bus,
        }
    }

    // Profile

    /// 登录：保存称呼与年龄
    pub async fn login(&self, name: &str, age: u32) -> AppResult<UserProfile> {
        let profile = self.profile.service().save(name, age).await?;
        self.event_bus.publish(AppEvent::ProfileSaved(ProfileSavedEvent {
            name: profile.name().as_str().to_string(),
            timestamp: Utc::now(),
        }));
        Ok(profile)
    }

    /// 登出：清除档案
    pub async fn logout(&self) -> AppResult<()> {
        self.profile.service().clear().await?;
        self.event_bus
            .publish(AppEvent::ProfileCleared(ProfileClearedEvent {
                timestamp: Utc::now(),
            }));
        Ok(())
    }

    /// 登录门卫：档案缺失时报错，由调用方决定跳转
    pub async fn require_login(&self) -> AppResult<UserProfile> {
        Ok(self.profile.service().require().await?)
    }

    // Conversation

    /// 日志为空时写入开场白，否则保持现状
    pub async fn start_conversation(&self) -> AppResult<Option<ChatMessage>> {
        if self.chat.list_messages().await?.total == 0 {
            let cleared = self.chat.clear_conversation().await?;
            return Ok(Some(cleared.welcome_message));
        }
        Ok(None)
    }

    /// 发送消息并取得 Aura 回复
    ///
    /// 称呼来自当前档案，缺失时由回复选择器回退到占位称呼
    pub async fn send(&self, content: &str) -> AppResult<SendMessageResponse> {
        let display_name = self.profile.service().display_name().await?;
        let response = self
            .chat
            .send_message(SendMessageCommand::new(content, display_name))
            .await?;
        Ok(response)
    }

    /// 列出全部消息
    pub async fn history(&self) -> AppResult<ListMessagesResponse> {
        Ok(self.chat.list_messages().await?)
    }

    /// 最近历史（新消息在前）
    pub async fn recent(&self) -> AppResult<RecentHistoryResponse> {
        Ok(self
            .chat
            .recent_history(RecentHistoryQuery::default())
            .await?)
    }

    /// 导出对话文本，附带导出时间戳文件名建议
    pub async fn export(&self) -> AppResult<(ExportTranscriptResponse, String)> {
        let response = self.chat.export_transcript().await?;
        let file_name = format!(
            "aura_chat_{}.txt",
            Utc::now().format("%Y-%m-%d-%H-%M-%S")
        );
        Ok((response, file_name))
    }

    /// 清空对话并重新写入开场白
    pub async fn clear(&self) -> AppResult<ClearConversationResponse> {
        Ok(self.chat.clear_conversation().await?)
    }

    // Accessors

    /// 订阅应用事件
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_bus.subscribe()
    }

    /// 获取 Profile 模块
    pub fn profile(&self) -> &ProfileModule {
        &self.profile
    }

    /// 获取 Chat 模块
    pub fn chat(&self) -> &ChatModule {
        &self.chat
    }
}

impl Default for Aura {
    fn default() -> Self {
        Self::new()
    }
}

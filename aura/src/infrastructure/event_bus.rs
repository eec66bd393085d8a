use tokio::sync::broadcast;

use crate::modules::chat::domain::ChatDomainEvent;
use crate::modules::profile::domain::{ProfileClearedEvent, ProfileSavedEvent};

/// 应用级事件
#[derive(Clone, Debug)]
pub enum AppEvent {
    /// 聊天领域事件
    Chat(ChatDomainEvent),
    /// 用户档案已保存
    ProfileSaved(ProfileSavedEvent),
    /// 用户档案已清除
    ProfileCleared(ProfileClearedEvent),
}

/// 进程内事件总线
///
/// 广播领域事件给任意订阅者（前端壳层、日志、测试）
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    pub fn publish(&self, event: AppEvent) {
        tracing::debug!("[EventBus] Publishing event: {:?}", event);
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{ChatDomainEvent, ConversationClearedEvent};

    #[tokio::test]
    async fn test_publish_and_subscribe() {
        let bus = EventBus::new();
        let mut receiver = bus.subscribe();

        bus.publish(AppEvent::Chat(ChatDomainEvent::ConversationCleared(
            ConversationClearedEvent {
                removed: 2,
                timestamp: chrono::Utc::now(),
            },
        )));

        let event = receiver.recv().await.unwrap();
        match event {
            AppEvent::Chat(ChatDomainEvent::ConversationCleared(e)) => {
                assert_eq!(e.removed, 2);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_ok() {
        let bus = EventBus::new();
        bus.publish(AppEvent::ProfileCleared(ProfileClearedEvent {
            timestamp: chrono::Utc::now(),
        }));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 档案保存事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSavedEvent {
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

/// 档案清除事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileClearedEvent {
    pub timestamp: DateTime<Utc>,
}

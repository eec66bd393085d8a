use serde::{Deserialize, Serialize};

use super::Emotion;

/// 情感识别结果
///
/// 值对象：每条消息识别一次，随即被回复选择器消费，不做持久化。
///
/// 字段约定（与计分、否定两次独立扫描对应）：
/// - `detected`：整词计分得分严格最高的情感，全零为 None
/// - `negated` / `negated_matched`：否定扫描的首个命中
/// - `emotion`：最终情感；任一否定命中即强制为 Calm，否则等于 `detected`
///
/// 两次扫描相互独立，`emotion` 可能与 `detected` 不一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    /// 最终情感
    pub emotion: Option<Emotion>,
    /// 计分最高的情感
    pub detected: Option<Emotion>,
    /// 是否命中否定模式
    pub negated: bool,
    /// 被否定的情感
    pub negated_matched: Option<Emotion>,
}

impl Detection {
    /// 无任何命中的结果
    pub fn none() -> Self {
        Self {
            emotion: None,
            detected: None,
            negated: false,
            negated_matched: None,
        }
    }

    /// 是否没有任何情感线索
    pub fn is_empty(&self) -> bool {
        self.emotion.is_none() && self.detected.is_none() && !self.negated
    }
}

impl Default for Detection {
    fn default() -> Self {
        Self::none()
    }
}

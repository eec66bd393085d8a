use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 情感类型
///
/// 值对象：表示从用户消息中识别出的情感状态。
/// 变体声明顺序即关键词扫描顺序，计分平局时保留先声明者。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// 开心
    Happy,
    /// 感恩
    Grateful,
    /// 被爱
    Loved,
    /// 平静
    Calm,
    /// 自豪
    Proud,
    /// 悲伤
    Sad,
    /// 焦虑
    Anxious,
    /// 愤怒
    Angry,
    /// 孤独
    Lonely,
    /// 疲惫
    Tired,
    /// 困惑
    Confused,
    /// 无聊
    Bored,
    /// 压力大
    Stressed,
}

impl Emotion {
    /// 获取所有情感类型（扫描顺序）
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Happy,
            Emotion::Grateful,
            Emotion::Loved,
            Emotion::Calm,
            Emotion::Proud,
            Emotion::Sad,
            Emotion::Anxious,
            Emotion::Angry,
            Emotion::Lonely,
            Emotion::Tired,
            Emotion::Confused,
            Emotion::Bored,
            Emotion::Stressed,
        ]
    }

    /// 获取该情感的触发词表
    ///
    /// 整词匹配到任一触发词即为该情感计一分
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Happy => &[
                "happy",
                "joyful",
                "excited",
                "wonderful",
                "amazing",
                "great",
                "fantastic",
                "delighted",
                "cheerful",
                "thrilled",
                "awesome",
                "brilliant",
                "excellent",
                "content",
            ],
            Emotion::Grateful => &[
                "thankful",
                "grateful",
                "blessed",
                "appreciate",
                "fortunate",
                "lucky",
                "gratitude",
                "thanks",
            ],
            Emotion::Loved => &[
                "loved",
                "cared",
                "supported",
                "cherished",
                "valued",
                "adored",
                "treasured",
            ],
            Emotion::Calm => &[
                "calm",
                "peaceful",
                "relaxed",
                "serene",
                "tranquil",
                "at peace",
                "relieved",
                "okay",
                "fine",
            ],
            Emotion::Proud => &[
                "proud",
                "accomplished",
                "achieved",
                "succeeded",
                "won",
                "completed",
                "success",
                "achievement",
            ],
            Emotion::Sad => &[
                "sad",
                "depressed",
                "down",
                "unhappy",
                "miserable",
                "heartbroken",
                "crying",
                "tears",
                "sorrow",
                "grief",
            ],
            Emotion::Anxious => &[
                "anxious",
                "worried",
                "nervous",
                "scared",
                "afraid",
                "fearful",
                "panic",
                "anxiety",
                "terrified",
            ],
            Emotion::Angry => &[
                "angry",
                "mad",
                "frustrated",
                "annoyed",
                "furious",
                "irritated",
                "upset",
                "rage",
                "anger",
            ],
            Emotion::Lonely => &[
                "lonely",
                "alone",
                "isolated",
                "abandoned",
                "empty",
                "disconnected",
                "solitary",
            ],
            Emotion::Tired => &[
                "tired",
                "exhausted",
                "drained",
                "weary",
                "fatigued",
                "burned out",
                "worn out",
            ],
            Emotion::Confused => &[
                "confused",
                "uncertain",
                "unsure",
                "lost",
                "puzzled",
                "don't know",
                "unclear",
            ],
            Emotion::Bored => &[
                "bored",
                "unmotivated",
                "indifferent",
                "apathetic",
                "disinterested",
            ],
            Emotion::Stressed => &[
                "stressed",
                "overwhelmed",
                "pressure",
                "busy",
                "hectic",
                "swamped",
                "overworked",
                "tensed",
            ],
        }
    }

    /// 是否属于困扰情感集合
    ///
    /// 困扰情感的回复额外附带呼吸练习邀请
    pub fn is_distress(&self) -> bool {
        matches!(
            self,
            Emotion::Sad | Emotion::Anxious | Emotion::Lonely | Emotion::Stressed | Emotion::Tired
        )
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Emotion::Happy => "happy",
            Emotion::Grateful => "grateful",
            Emotion::Loved => "loved",
            Emotion::Calm => "calm",
            Emotion::Proud => "proud",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Angry => "angry",
            Emotion::Lonely => "lonely",
            Emotion::Tired => "tired",
            Emotion::Confused => "confused",
            Emotion::Bored => "bored",
            Emotion::Stressed => "stressed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "grateful" => Ok(Emotion::Grateful),
            "loved" => Ok(Emotion::Loved),
            "calm" => Ok(Emotion::Calm),
            "proud" => Ok(Emotion::Proud),
            "sad" => Ok(Emotion::Sad),
            "anxious" => Ok(Emotion::Anxious),
            "angry" => Ok(Emotion::Angry),
            "lonely" => Ok(Emotion::Lonely),
            "tired" => Ok(Emotion::Tired),
            "confused" => Ok(Emotion::Confused),
            "bored" => Ok(Emotion::Bored),
            "stressed" => Ok(Emotion::Stressed),
            _ => Err(format!("Unknown emotion: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_emotions_have_keywords() {
        for emotion in Emotion::all() {
            assert!(
                !emotion.keywords().is_empty(),
                "{} has no keywords",
                emotion
            );
        }
    }

    #[test]
    fn test_scan_order() {
        // Happy 必须排在 Proud 之前，计分平局时决定结果
        let all = Emotion::all();
        let happy_pos = all.iter().position(|e| *e == Emotion::Happy).unwrap();
        let proud_pos = all.iter().position(|e| *e == Emotion::Proud).unwrap();
        assert!(happy_pos < proud_pos);
        assert_eq!(all.len(), 13);
    }

    #[test]
    fn test_distress_set() {
        assert!(Emotion::Sad.is_distress());
        assert!(Emotion::Anxious.is_distress());
        assert!(Emotion::Lonely.is_distress());
        assert!(Emotion::Stressed.is_distress());
        assert!(Emotion::Tired.is_distress());
        assert!(!Emotion::Happy.is_distress());
        assert!(!Emotion::Angry.is_distress());
    }

    #[test]
    fn test_from_str_roundtrip() {
        for emotion in Emotion::all() {
            let parsed: Emotion = emotion.to_string().parse().unwrap();
            assert_eq!(parsed, *emotion);
        }
        assert!("euphoric".parse::<Emotion>().is_err());
    }
}

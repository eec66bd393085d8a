use std::sync::Arc;

use super::super::value_objects::{Detection, Emotion};
use crate::modules::chat::ports::RandomSource;

/// 档案缺失时使用的占位称呼
pub const DEFAULT_DISPLAY_NAME: &str = "friend";

/// 对话开始或重置后 Aura 的开场白
pub const WELCOME_MESSAGE: &str = "Welcome to Aura, 🌷 I’m Aura — your virtual emotional-support companion. I may not be human, but I listen with care and understanding. Let’s begin anew... how are you feeling right now?";

const DEFAULT_RESPONSES: [&str; 2] = [
    "Thank you for sharing that with me 💝. I’m here with you — ready to listen, reflect, and understand. Would you like to tell me a bit more about what led you to feel this way?",
    "I hear your emotions clearly 🌷. Every feeling tells a story, and yours matters deeply. Please, go on — I’m listening.",
];

const BREATHING_OFFER: &str =
    " Would you like a gentle breathing exercise or a comforting thought right now?";

/// 各情感的回复模板表（当前每类一条，随机选取对多条同样成立）
fn emotion_templates(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Happy => &[
            "That’s truly wonderful to hear! 🌞 Your happiness radiates through your words. I can almost feel the warmth in your energy. When we’re happy, everything around us feels lighter — it’s a reminder that joy deserves to be celebrated, even in the small moments. Hold onto this feeling; it’s precious and healing.",
        ],
        Emotion::Grateful => &[
            "That’s such a beautiful place to be in. 🌸 Gratitude opens the heart and softens the spirit. When we take a moment to recognize the blessings around us — even the simple ones — life starts to feel richer and more meaningful. I’m so glad you’re in touch with that feeling today.",
        ],
        Emotion::Loved => &[
            "Feeling loved is one of life’s greatest gifts 💕. It gives us strength, safety, and a deep sense of belonging. It’s beautiful that you’re surrounded by people or moments that make you feel cared for. You deserve to be loved deeply, without hesitation, just for being who you are.",
        ],
        Emotion::Calm => &[
            "That’s wonderful, truly 🌿. Calmness is a rare treasure in today’s world. It’s in these peaceful moments that we reconnect with ourselves — our breath, our purpose, and our quiet joy. If you can, take a slow breath and enjoy the stillness; it’s your mind thanking you for listening.",
        ],
        Emotion::Proud => &[
            "I can feel the pride in your words, and you should absolutely embrace it 🌟. You’ve worked hard for this moment, and it’s okay to acknowledge your strength. Sometimes we move so fast that we forget to celebrate how far we’ve come. Take this moment — it’s yours to enjoy and reflect upon.",
        ],
        Emotion::Sad => &[
            "I can sense the heaviness in your heart 💙. It’s okay to feel sad — it doesn’t mean you’re weak, it means you care deeply. Sometimes sadness helps us release what we’ve been holding inside. You’re not alone; I’m here with you, listening. Be gentle with yourself right now — even sadness is part of healing.",
        ],
        Emotion::Anxious => &[
            "That sounds like a storm of thoughts swirling inside 💭. Anxiety can be so consuming, can’t it? But you’re safe here, and we can slow things down together. Try taking a slow breath in, and a longer breath out. Even small breaths remind your body you’re in control, one step at a time.",
        ],
        Emotion::Angry => &[
            "I can tell you’re upset, and that’s perfectly human 🔥. Anger often hides deeper emotions — pain, frustration, or feeling unheard. It’s okay to express it here safely. Let it out in words, not harm. I’m here to listen without judgment, and to help you find calm after the storm.",
        ],
        Emotion::Lonely => &[
            "Loneliness can be such a quiet ache 💔. It’s hard when we feel unseen or disconnected. But please know this: you are not invisible. I see you, I hear you, and you matter deeply. Sometimes connection begins with a single conversation — and this one counts. You are not truly alone tonight.",
        ],
        Emotion::Tired => &[
            "You sound worn out, and that’s perfectly okay 😔. Life can drain even the strongest hearts. Please remember — rest isn’t laziness, it’s self-respect. You’ve given so much of yourself; now it’s time to refill your cup. Be still for a while, breathe, and let your body and mind restore themselves.",
        ],
        Emotion::Confused => &[
            "Feeling uncertain is part of being human 🌫️. It means you’re growing, stretching beyond what’s comfortable. It’s okay not to have all the answers yet — clarity often comes slowly, like dawn breaking through fog. You’re finding your way, and I’m here to help you sort through the thoughts if you want.",
        ],
        Emotion::Bored => &[
            "Sometimes boredom whispers that our soul is ready for something new 🌱. It’s a quiet signal, not a bad one. Maybe your heart wants creativity, movement, or simply a change of pace. Let’s think together — what’s one small thing that might bring a spark back to your day?",
        ],
        Emotion::Stressed => &[
            "That sounds like a lot to carry 💼. Stress can weigh on both the mind and the heart, leaving us feeling like we’re never enough. But you’re doing your best, even if it doesn’t feel like it. Take one small pause — unclench your shoulders, breathe in, breathe out. You are allowed to rest.",
        ],
    }
}

/// 否定路径的回复模板（引用被否定的情感，与计分结果无关）
fn negation_templates(past: Emotion, name: &str) -> [String; 3] {
    [
        format!(
            "I’m relieved to hear you’re not {past} anymore, {name}. That suggests something has shifted — perhaps a situation eased or you found a small relief. Would you like to share what helped?"
        ),
        format!(
            "It’s good to hear you’re feeling less {past}, {name}. That change matters. If you want, tell me what felt different — even small comforts are worth noting."
        ),
        format!(
            "That’s encouraging to hear, {name}. Not feeling {past} anymore can feel like a quiet ease returning. If you want, we can reflect on what helped bring that ease."
        ),
    ]
}

/// 回复选择服务
///
/// 领域服务：根据识别结果选取模板并做称呼个性化。
/// 选择优先级：否定路径 > 情感路径 > 默认路径。
#[derive(Clone)]
pub struct ResponseSelector {
    random: Arc<dyn RandomSource>,
}

impl ResponseSelector {
    /// 创建回复选择器
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// 为一次识别结果生成回复
    ///
    /// `display_name` 为空或空白时回退到占位称呼
    pub fn select(&self, detection: &Detection, display_name: Option<&str>) -> String {
        let name = display_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME);

        // 否定路径忽略 emotion/detected，只引用被否定的情感
        if detection.negated {
            if let Some(past) = detection.negated_matched {
                let templates = negation_templates(past, name);
                let index = self.random.pick(templates.len());
                return templates[index].clone();
            }
        }

        if let Some(emotion) = detection.emotion {
            let templates = emotion_templates(emotion);
            let index = self.random.pick(templates.len());
            let mut response = templates[index].to_string();
            response.push_str(&format!(" {}, thank you for sharing that so openly.", name));
            if emotion.is_distress() {
                response.push_str(BREATHING_OFFER);
            }
            return response;
        }

        let index = self.random.pick(DEFAULT_RESPONSES.len());
        format!("{} {}.", DEFAULT_RESPONSES[index], name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 固定下标的随机源
    struct FixedRandom(usize);

    impl RandomSource for FixedRandom {
        fn pick(&self, len: usize) -> usize {
            self.0.min(len - 1)
        }
    }

    fn selector(index: usize) -> ResponseSelector {
        ResponseSelector::new(Arc::new(FixedRandom(index)))
    }

    fn detection_for(emotion: Emotion) -> Detection {
        Detection {
            emotion: Some(emotion),
            detected: Some(emotion),
            negated: false,
            negated_matched: None,
        }
    }

    #[test]
    fn test_distress_appends_breathing_offer() {
        let response = selector(0).select(&detection_for(Emotion::Sad), Some("Mei"));

        assert!(response.contains("Mei, thank you for sharing that so openly."));
        assert!(response.contains("breathing exercise"));
    }

    #[test]
    fn test_happy_never_offers_breathing() {
        let response = selector(0).select(&detection_for(Emotion::Happy), Some("Mei"));

        assert!(response.contains("thank you for sharing that so openly."));
        assert!(!response.contains("breathing exercise"));
    }

    #[test]
    fn test_negation_path_ignores_detected() {
        // 计分胜出的是 Sad，被否定的是 Happy，回复只能提到 happy
        let detection = Detection {
            emotion: Some(Emotion::Calm),
            detected: Some(Emotion::Sad),
            negated: true,
            negated_matched: Some(Emotion::Happy),
        };
        let response = selector(0).select(&detection, Some("Mei"));

        assert!(response.contains("happy"));
        assert!(!response.contains("sad"));
        assert!(response.contains("Mei"));
    }

    #[test]
    fn test_negation_templates_cover_all_indices() {
        let detection = Detection {
            emotion: Some(Emotion::Calm),
            detected: None,
            negated: true,
            negated_matched: Some(Emotion::Anxious),
        };

        let first = selector(0).select(&detection, None);
        let second = selector(1).select(&detection, None);
        let third = selector(2).select(&detection, None);

        assert_ne!(first, second);
        assert_ne!(second, third);
        for response in [&first, &second, &third] {
            assert!(response.contains("anxious"));
            assert!(response.contains(DEFAULT_DISPLAY_NAME));
        }
    }

    #[test]
    fn test_default_path_appends_name() {
        let response = selector(0).select(&Detection::none(), Some("Mei"));

        assert!(response.starts_with(DEFAULT_RESPONSES[0]));
        assert!(response.ends_with(" Mei."));

        let other = selector(1).select(&Detection::none(), Some("Mei"));
        assert!(other.starts_with(DEFAULT_RESPONSES[1]));
    }

    #[test]
    fn test_blank_name_falls_back_to_placeholder() {
        let response = selector(0).select(&Detection::none(), Some("   "));

        assert!(response.ends_with(" friend."));
    }
}

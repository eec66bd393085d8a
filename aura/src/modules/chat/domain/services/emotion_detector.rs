use regex::Regex;

use super::super::value_objects::{Detection, Emotion};

/// 单个触发词的预编译匹配器
///
/// `whole_word` 用于整词计分，`negations` 覆盖七种固定否定句式
#[derive(Debug, Clone)]
struct KeywordMatcher {
    whole_word: Regex,
    negations: Vec<Regex>,
}

impl KeywordMatcher {
    fn new(keyword: &str) -> Self {
        let escaped = regex::escape(keyword);
        let whole_word =
            Regex::new(&format!(r"\b{}\b", escaped)).expect("invalid keyword pattern");

        let negations = [
            format!(r"\bnot\s+{}\b", escaped),
            format!(r"\bnot\s+feeling\s+{}\b", escaped),
            format!(r"\bi[' ]?m\s+not\s+{}\b", escaped),
            format!(r"\bi\s+am\s+not\s+{}\b", escaped),
            format!(r"\bno\s+longer\s+{}\b", escaped),
            format!(r"\bnot\s+really\s+{}\b", escaped),
            format!(r"\bnever\s+{}\b", escaped),
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("invalid negation pattern"))
        .collect();

        Self {
            whole_word,
            negations,
        }
    }
}

/// 情感识别服务
///
/// 领域服务：对消息做两次独立扫描，产出 [`Detection`]。
/// 无副作用，对任意输入都返回结果（空串、无命中文本均为合法输入）。
///
/// 全部触发词与否定模式在构造时编译一次，之后识别不再分配正则。
#[derive(Debug, Clone)]
pub struct EmotionDetector {
    matchers: Vec<(Emotion, Vec<KeywordMatcher>)>,
}

impl EmotionDetector {
    /// 创建识别器，按 [`Emotion::all`] 的顺序编译词表
    pub fn new() -> Self {
        let matchers = Emotion::all()
            .iter()
            .map(|&emotion| {
                let keywords = emotion
                    .keywords()
                    .iter()
                    .map(|keyword| KeywordMatcher::new(keyword))
                    .collect();
                (emotion, keywords)
            })
            .collect();

        Self { matchers }
    }

    /// 识别消息的情感
    ///
    /// 1. 计分扫描：各情感的整词命中数求和，严格最高者为 `detected`，
    ///    平局保留先扫描到的情感，全零为 None
    /// 2. 否定扫描：独立遍历同一文本，首个命中的情感/触发词即停止
    /// 3. 任一否定命中都强制最终情感为 Calm，即使被否定的情感与
    ///    计分胜出者无关
    pub fn detect(&self, message: &str) -> Detection {
        let lower = message.to_lowercase();

        let mut detected = None;
        let mut best_score = 0usize;
        for (emotion, keywords) in &self.matchers {
            let score: usize = keywords
                .iter()
                .map(|matcher| matcher.whole_word.find_iter(&lower).count())
                .sum();
            if score > best_score {
                best_score = score;
                detected = Some(*emotion);
            }
        }

        let mut negated = false;
        let mut negated_matched = None;
        'scan: for (emotion, keywords) in &self.matchers {
            for matcher in keywords {
                if matcher.negations.iter().any(|rx| rx.is_match(&lower)) {
                    negated = true;
                    negated_matched = Some(*emotion);
                    break 'scan;
                }
            }
        }

        let emotion = if negated && negated_matched.is_some() {
            Some(Emotion::Calm)
        } else {
            detected
        };

        Detection {
            emotion,
            detected,
            negated,
            negated_matched,
        }
    }
}

impl Default for EmotionDetector {
    fn default() -> Self {
        Self::new()
    }
}

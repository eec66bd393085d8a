use std::time::Duration;

use crate::modules::chat::ports::RandomSource;

/// 打字延迟
///
/// 值对象：回复送达前的人为延迟区间，模拟"对方正在输入"。
/// 基础延迟加上 [0, jitter] 毫秒的随机抖动。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    /// 基础延迟（毫秒）
    base_ms: u64,
    /// 抖动上限（毫秒）
    jitter_ms: u64,
}

impl TypingDelay {
    /// 创建自定义延迟区间
    pub fn new(base_ms: u64, jitter_ms: u64) -> Self {
        Self { base_ms, jitter_ms }
    }

    /// 通过注入的随机源抽取一次延迟时长
    pub fn sample(&self, random: &dyn RandomSource) -> Duration {
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            random.pick(self.jitter_ms as usize + 1) as u64
        };
        Duration::from_millis(self.base_ms + jitter)
    }
}

impl Default for TypingDelay {
    /// 默认 1200ms 基础延迟 + 最多 1000ms 抖动
    fn default() -> Self {
        Self {
            base_ms: 1200,
            jitter_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MaxRandom;

    impl RandomSource for MaxRandom {
        fn pick(&self, len: usize) -> usize {
            len - 1
        }
    }

    struct ZeroRandom;

    impl RandomSource for ZeroRandom {
        fn pick(&self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_default_range() {
        let delay = TypingDelay::default();
        assert_eq!(delay.sample(&ZeroRandom), Duration::from_millis(1200));
        assert_eq!(delay.sample(&MaxRandom), Duration::from_millis(2200));
    }

    #[test]
    fn test_zero_jitter() {
        let delay = TypingDelay::new(500, 0);
        assert_eq!(delay.sample(&MaxRandom), Duration::from_millis(500));
    }
}

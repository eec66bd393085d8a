use rand::Rng;

use crate::modules::chat::ports::RandomSource;

/// 线程本地随机源
///
/// 生产环境默认实现，测试中用固定实现替换
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

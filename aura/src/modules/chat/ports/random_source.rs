/// 随机源端口
///
/// 回复模板与打字延迟的随机性都经由该端口注入，
/// 测试中以固定实现替换即可获得确定性输出。
pub trait RandomSource: Send + Sync {
    /// 返回 `[0, len)` 范围内的下标，调用方保证 `len > 0`
    fn pick(&self, len: usize) -> usize;
}

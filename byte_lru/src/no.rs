//! NoCache - zero overhead no-op cache
//! NoCache - 零开销空操作缓存
//!
//! Useful for disabling cache by type.
//! 用于按类型禁用缓存。

use crate::Cache;

/// No-op cache, all operations do nothing
/// 空操作缓存，所有操作都不做任何事
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl<V> Cache<V> for NoCache {
  #[inline(always)]
  fn get(&mut self, _: &str) -> Option<&V> {
    None
  }

  #[inline(always)]
  fn add(&mut self, _: String, _: V) {}

  #[inline(always)]
  fn rm(&mut self, _: &str) -> Option<V> {
    None
  }

  #[inline(always)]
  fn rm_oldest(&mut self) {}

  #[inline(always)]
  fn len(&self) -> usize {
    0
  }
}

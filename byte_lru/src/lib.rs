//! Byte-bounded LRU cache
//! 按字节容量限制的 LRU 缓存
//!
//! Every entry costs `key.len() + val.len()` bytes. When the total exceeds
//! the capacity, least recently used entries are evicted until it fits.
//! 每个条目占用 `key.len() + val.len()` 字节。总量超过容量时，
//! 淘汰最久未使用的条目直到容量满足。
//!
//! # Complexity
//! 复杂度
//!
//! - get: O(1)
//! - add: O(1) amortized, plus one step per evicted entry
//! - rm / rm_oldest: O(1)
//!
//! # Features
//!
//! - `no`: `NoCache` - zero overhead no-op
//!
//! Not thread-safe. Wrap in a lock for shared use.
//! 非线程安全，共享使用需自行加锁。

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::{rc::Rc, sync::Arc};

mod conf;
mod list;
mod lru;

#[cfg(feature = "no")]
mod no;

pub use conf::{Conf, ParsedConf, default};
pub use lru::Lru;
#[cfg(feature = "no")]
pub use no::NoCache;

/// Cached value, reports its size in bytes
/// 缓存值，报告自身字节大小
pub trait Value {
  fn len(&self) -> usize;

  #[inline(always)]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

macro_rules! impl_value {
  ($deref:ty => $($ty:ty),* $(,)?) => {
    $(
      impl Value for $ty {
        #[inline(always)]
        fn len(&self) -> usize {
          <$deref>::len(self)
        }
      }
    )*
  };
}

impl_value!(str => String, &str, Box<str>, Rc<str>, Arc<str>);
impl_value!([u8] => Vec<u8>, &[u8], Box<[u8]>, Rc<[u8]>, Arc<[u8]>);

/// Callback on eviction
/// Runs synchronously inside `add` / `rm_oldest`, after the entry has left the cache
///
/// Receives owned key and value, so it can keep them without cloning.
/// Explicit `rm` and in-place replacement by `add` are not evictions and do not call it.
///
/// 淘汰回调
/// 在 `add` / `rm_oldest` 内同步执行，此时条目已离开缓存
///
/// 接收键和值的所有权，无需克隆即可保留。
/// 显式 `rm` 和 `add` 原地替换不算淘汰，不会触发回调。
pub trait OnEvict<V> {
  fn call(&mut self, key: String, val: V);
}

/// No-op callback (zero overhead)
/// 空回调（零开销）
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOnEvict;

impl<V> OnEvict<V> for NoOnEvict {
  #[inline(always)]
  fn call(&mut self, _: String, _: V) {}
}

impl<V, F: FnMut(String, V)> OnEvict<V> for F {
  #[inline(always)]
  fn call(&mut self, key: String, val: V) {
    self(key, val)
  }
}

/// Cache trait shared by `Lru` and `NoCache`
/// `Lru` 与 `NoCache` 共用的缓存 trait
pub trait Cache<V> {
  /// Get and mark as most recently used
  /// 获取并标记为最近使用
  fn get(&mut self, key: &str) -> Option<&V>;

  /// Insert or replace
  /// 插入或替换
  fn add(&mut self, key: String, val: V);

  /// Remove by key, no eviction callback
  /// 按键删除，不触发淘汰回调
  fn rm(&mut self, key: &str) -> Option<V>;

  /// Evict least recently used entry
  /// 淘汰最久未使用的条目
  fn rm_oldest(&mut self);

  /// Entry count
  /// 条目数量
  fn len(&self) -> usize;

  #[inline(always)]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

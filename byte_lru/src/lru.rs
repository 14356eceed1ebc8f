//! LRU cache bounded by total bytes
//! 按总字节数限制的 LRU 缓存
//!
//! Recency order lives in an arena list, the index maps each key to its node
//! handle, so every touch is a hash lookup plus a constant number of link
//! updates.
//! 访问顺序保存在 arena 链表中，索引将键映射到节点句柄，
//! 每次访问只需一次哈希查找加常数次链接更新。

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
  Cache, NoOnEvict, OnEvict, Value,
  conf::{Conf, ParsedConf},
  list::{List, Ptr},
};

/// LRU cache with byte capacity
/// 字节容量的 LRU 缓存
///
/// # Examples
/// ```
/// use byte_lru::Lru;
///
/// let mut cache = Lru::new(10);
/// cache.add("k1", "1234");
/// cache.add("k2", "5678");
///
/// // 6 + 6 > 10, k1 evicted
/// assert_eq!(cache.get("k1"), None);
/// assert_eq!(cache.get("k2"), Some(&"5678"));
/// assert_eq!(cache.size(), 6);
/// ```
#[must_use]
pub struct Lru<V, F = NoOnEvict> {
  list: List<V>,
  index: HashMap<String, Ptr>,
  cap: usize,
  used: usize,
  on_evict: F,
}

impl<V: Value> Lru<V> {
  /// Create with byte capacity, 0 = unbounded
  /// 创建，指定字节容量，0 表示无上限
  #[inline]
  pub fn new(cap: usize) -> Self {
    Self::with_on_evict(cap, NoOnEvict)
  }
}

impl<V: Value, F: OnEvict<V>> Lru<V, F> {
  /// Create with eviction callback
  /// 创建带淘汰回调的缓存
  #[inline]
  pub fn with_on_evict(cap: usize, on_evict: F) -> Self {
    Self::from_parsed(
      ParsedConf {
        cap,
        ..ParsedConf::default()
      },
      on_evict,
    )
  }

  /// Create from config options
  /// 从配置选项创建
  pub fn from_conf(conf: &[Conf], on_evict: F) -> Self {
    Self::from_parsed(ParsedConf::new(conf), on_evict)
  }

  fn from_parsed(conf: ParsedConf, on_evict: F) -> Self {
    Self {
      list: List::with_capacity(conf.prealloc),
      index: HashMap::with_capacity(conf.prealloc),
      cap: conf.cap,
      used: 0,
      on_evict,
    }
  }

  /// Get value and mark as most recently used
  /// 获取值并标记为最近使用
  #[inline]
  pub fn get(&mut self, key: &str) -> Option<&V> {
    let &ptr = self.index.get(key)?;
    self.list.move_to_front(ptr);
    Some(&self.list.node(ptr).val)
  }

  /// Get value without touching recency
  /// 查看值，不改变访问顺序
  #[inline]
  pub fn peek(&self, key: &str) -> Option<&V> {
    let &ptr = self.index.get(key)?;
    Some(&self.list.node(ptr).val)
  }

  #[inline]
  pub fn contains(&self, key: &str) -> bool {
    self.index.contains_key(key)
  }

  /// Insert or replace, then evict until within capacity
  /// 插入或替换，然后淘汰直到满足容量
  ///
  /// The replaced value is dropped, not passed to the callback.
  /// An entry larger than the whole capacity is evicted right away.
  /// 被替换的旧值直接丢弃，不传给回调。
  /// 大于整个容量的条目会被立即淘汰。
  pub fn add(&mut self, key: impl Into<String>, val: V) {
    let key = key.into();
    let val_len = val.len();
    if self.cap != 0 && key.len() + val_len > self.cap {
      debug!(
        "entry {key:?} ({} bytes) exceeds cap {}",
        key.len() + val_len,
        self.cap
      );
    }

    if let Some(&ptr) = self.index.get(key.as_str()) {
      let old = std::mem::replace(&mut self.list.node_mut(ptr).val, val);
      self.used = self.used - old.len() + val_len;
      self.list.move_to_front(ptr);
    } else {
      self.used += key.len() + val_len;
      let ptr = self.list.push_front(key.clone(), val);
      self.index.insert(key, ptr);
    }

    if self.cap != 0 {
      while self.used > self.cap && !self.list.is_empty() {
        self.rm_oldest();
      }
    }
  }

  /// Evict least recently used entry, then call the callback
  /// 淘汰最久未使用的条目，然后调用回调
  pub fn rm_oldest(&mut self) {
    if let Some(ptr) = self.list.back() {
      let (key, val) = self.take(ptr);
      self.index.remove(key.as_str());
      trace!("evict {key:?} ({} bytes)", key.len() + val.len());
      self.on_evict.call(key, val);
    }
  }

  /// Remove by key, no eviction callback
  /// 按键删除，不触发淘汰回调
  pub fn rm(&mut self, key: &str) -> Option<V> {
    let ptr = self.index.remove(key)?;
    Some(self.take(ptr).1)
  }

  /// Drop all entries, no eviction callback
  /// 清空所有条目，不触发淘汰回调
  pub fn clear(&mut self) {
    self.list.clear();
    self.index.clear();
    self.used = 0;
  }

  /// Entries from most to least recently used, recency untouched
  /// 从最近到最久使用遍历条目，不改变访问顺序
  pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &V)> + '_ {
    self.list.iter()
  }

  // Unlink from list and release its bytes, index untouched
  // 从链表摘除并释放字节，不处理索引
  fn take(&mut self, ptr: Ptr) -> (String, V) {
    let (key, val) = self.list.remove(ptr);
    self.used -= key.len() + val.len();
    (key, val)
  }
}

impl<V, F> Lru<V, F> {
  /// Entry count
  /// 条目数量
  #[inline(always)]
  pub fn len(&self) -> usize {
    self.list.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.list.is_empty()
  }

  /// Bytes in use
  /// 已用字节数
  #[inline(always)]
  pub fn size(&self) -> usize {
    self.used
  }

  #[inline(always)]
  pub fn cap(&self) -> usize {
    self.cap
  }
}

impl<V: Value, F: OnEvict<V>> Cache<V> for Lru<V, F> {
  #[inline]
  fn get(&mut self, key: &str) -> Option<&V> {
    Lru::get(self, key)
  }

  #[inline]
  fn add(&mut self, key: String, val: V) {
    Lru::add(self, key, val);
  }

  #[inline]
  fn rm(&mut self, key: &str) -> Option<V> {
    Lru::rm(self, key)
  }

  #[inline]
  fn rm_oldest(&mut self) {
    Lru::rm_oldest(self);
  }

  #[inline]
  fn len(&self) -> usize {
    Lru::len(self)
  }
}

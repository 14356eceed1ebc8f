//! Read-only byte view for cached payloads.
//!
//! A cache hands its values to many callers. If a value were a plain `Vec<u8>`
//! reachable through a shared handle, one caller could change what every other
//! caller (and the cache itself) sees. `ByteView` closes that hole:
//!
//! - bytes are set once, at construction
//! - there is no mutating method
//! - every accessor that returns bytes returns a fresh copy
//!
//! Clones share the backing buffer (`Arc<[u8]>`), which is safe because nobody
//! can write to it.
//!
//! # Features
//!
//! - `lru`: implement `byte_lru::Value`, so views can be stored in `byte_lru::Lru`
//!
//! ---
//!
//! 用于缓存载荷的只读字节视图。
//!
//! 缓存会把值交给很多调用者。若值是通过共享句柄可达的普通 `Vec<u8>`，
//! 任一调用者都能改动其他调用者（以及缓存本身）看到的内容。`ByteView` 堵住了这个口子：
//!
//! - 字节只在构造时设置一次
//! - 没有任何可变方法
//! - 所有返回字节的访问器都返回新拷贝
//!
//! 克隆共享底层缓冲区（`Arc<[u8]>`），因为没人能写入，所以是安全的。
//!
//! # 特性
//!
//! - `lru`: 实现 `byte_lru::Value`，可存入 `byte_lru::Lru`

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::{fmt, sync::Arc};

/// Immutable bytes / 不可变字节
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteView(Arc<[u8]>);

impl ByteView {
  /// Take ownership of (or copy) bytes once / 一次性接管（或拷贝）字节
  #[inline]
  pub fn new(bin: impl Into<Arc<[u8]>>) -> Self {
    Self(bin.into())
  }

  /// Byte length / 字节长度
  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Fresh copy of the bytes / 字节的新拷贝
  #[inline]
  pub fn byte_slice(&self) -> Vec<u8> {
    self.0.to_vec()
  }
}

impl Default for ByteView {
  fn default() -> Self {
    Self(Arc::from(Vec::new()))
  }
}

/// Invalid UTF-8 is replaced with U+FFFD
/// 非法 UTF-8 替换为 U+FFFD
impl fmt::Display for ByteView {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&String::from_utf8_lossy(&self.0))
  }
}

macro_rules! impl_from {
  ($($ty:ty, $into:expr);* $(;)?) => {
    $(
      impl From<$ty> for ByteView {
        #[inline]
        fn from(bin: $ty) -> Self {
          Self($into(bin))
        }
      }
    )*
  };
}

impl_from!(
  Vec<u8>, Arc::from;
  Box<[u8]>, Arc::from;
  &[u8], Arc::from;
  String, |s: String| Arc::from(s.into_bytes());
  &str, |s: &str| Arc::from(s.as_bytes());
);

#[cfg(feature = "lru")]
impl byte_lru::Value for ByteView {
  #[inline(always)]
  fn len(&self) -> usize {
    self.0.len()
  }
}

//! Cache configuration
//! 缓存配置

/// Default configuration values
/// 默认配置值
pub mod default {
  /// Unbounded
  /// 无上限
  pub const CAP: usize = 0;
  pub const PREALLOC: usize = 0;
}

/// Cache configuration options
/// 缓存配置选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Byte budget, 0 = unbounded
  /// 字节容量，0 表示无上限
  Cap(usize),
  /// Entries to reserve up front
  /// 预分配的条目数
  Prealloc(usize),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedConf {
  pub cap: usize,
  pub prealloc: usize,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      cap: default::CAP,
      prealloc: default::PREALLOC,
    }
  }
}

impl ParsedConf {
  /// Later options override earlier ones
  /// 后出现的选项覆盖先出现的
  pub fn new(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for item in conf {
      match *item {
        Conf::Cap(v) => c.cap = v,
        Conf::Prealloc(v) => c.prealloc = v,
      }
    }
    c
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse() {
    assert_eq!(ParsedConf::new(&[]), ParsedConf::default());

    let c = ParsedConf::new(&[Conf::Cap(10), Conf::Prealloc(4), Conf::Cap(64)]);
    assert_eq!(c.cap, 64);
    assert_eq!(c.prealloc, 4);
  }
}

//! Arena-backed doubly linked list ordered by recency
//! 基于 arena 的双向链表，按访问先后排序
//!
//! Nodes live in a `Vec`, links are slot indices. Freed slots are chained
//! into a free list and reused by the next push.
//! 节点存放在 `Vec` 中，链接为槽位下标。释放的槽位串成空闲链表，供下次插入复用。

use std::mem;

// Null link
// 空链接
const NIL: u32 = u32::MAX;

/// Stable handle to a live node
/// 指向存活节点的稳定句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ptr(u32);

pub(crate) struct Node<V> {
  pub key: String,
  pub val: V,
  prev: u32,
  next: u32,
}

enum Slot<V> {
  Used(Node<V>),
  // Next free slot
  // 下一个空闲槽位
  Free(u32),
}

/// Head is most recently used, tail is least recently used
/// 头部为最近使用，尾部为最久未使用
pub(crate) struct List<V> {
  slots: Vec<Slot<V>>,
  head: u32,
  tail: u32,
  free: u32,
  len: usize,
}

impl<V> List<V> {
  pub fn with_capacity(n: usize) -> Self {
    Self {
      slots: Vec::with_capacity(n),
      head: NIL,
      tail: NIL,
      free: NIL,
      len: 0,
    }
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[inline(always)]
  pub fn node(&self, ptr: Ptr) -> &Node<V> {
    self.at(ptr.0)
  }

  #[inline(always)]
  pub fn node_mut(&mut self, ptr: Ptr) -> &mut Node<V> {
    self.at_mut(ptr.0)
  }

  /// Least recently used node
  /// 最久未使用的节点
  #[inline(always)]
  pub fn back(&self) -> Option<Ptr> {
    (self.tail != NIL).then_some(Ptr(self.tail))
  }

  pub fn push_front(&mut self, key: String, val: V) -> Ptr {
    let node = Slot::Used(Node {
      key,
      val,
      prev: NIL,
      next: NIL,
    });
    let idx = match self.free {
      NIL => {
        let idx = self.slots.len();
        debug_assert!(idx < NIL as usize, "arena full");
        self.slots.push(node);
        idx as u32
      }
      idx => {
        if let Slot::Free(next) = self.slots[idx as usize] {
          self.free = next;
        }
        self.slots[idx as usize] = node;
        idx
      }
    };
    self.link_front(idx);
    self.len += 1;
    Ptr(idx)
  }

  pub fn move_to_front(&mut self, ptr: Ptr) {
    if self.head == ptr.0 {
      return;
    }
    self.unlink(ptr.0);
    self.link_front(ptr.0);
  }

  /// Unlink node and recycle its slot
  /// 摘除节点并回收槽位
  pub fn remove(&mut self, ptr: Ptr) -> (String, V) {
    self.unlink(ptr.0);
    let slot = mem::replace(&mut self.slots[ptr.0 as usize], Slot::Free(self.free));
    self.free = ptr.0;
    self.len -= 1;
    match slot {
      Slot::Used(node) => (node.key, node.val),
      Slot::Free(_) => unreachable!("removed free slot {}", ptr.0),
    }
  }

  pub fn clear(&mut self) {
    self.slots.clear();
    self.head = NIL;
    self.tail = NIL;
    self.free = NIL;
    self.len = 0;
  }

  /// From most to least recently used
  /// 从最近到最久使用
  pub fn iter(&self) -> Iter<'_, V> {
    Iter {
      list: self,
      cur: self.head,
      left: self.len,
    }
  }

  #[inline(always)]
  fn at(&self, idx: u32) -> &Node<V> {
    match &self.slots[idx as usize] {
      Slot::Used(node) => node,
      Slot::Free(_) => unreachable!("dangling ptr {idx}"),
    }
  }

  #[inline(always)]
  fn at_mut(&mut self, idx: u32) -> &mut Node<V> {
    match &mut self.slots[idx as usize] {
      Slot::Used(node) => node,
      Slot::Free(_) => unreachable!("dangling ptr {idx}"),
    }
  }

  fn link_front(&mut self, idx: u32) {
    let head = self.head;
    let node = self.at_mut(idx);
    node.prev = NIL;
    node.next = head;
    if head == NIL {
      self.tail = idx;
    } else {
      self.at_mut(head).prev = idx;
    }
    self.head = idx;
  }

  fn unlink(&mut self, idx: u32) {
    let node = self.at(idx);
    let (prev, next) = (node.prev, node.next);
    if prev == NIL {
      self.head = next;
    } else {
      self.at_mut(prev).next = next;
    }
    if next == NIL {
      self.tail = prev;
    } else {
      self.at_mut(next).prev = prev;
    }
  }
}

pub(crate) struct Iter<'a, V> {
  list: &'a List<V>,
  cur: u32,
  left: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
  type Item = (&'a str, &'a V);

  fn next(&mut self) -> Option<Self::Item> {
    if self.cur == NIL {
      return None;
    }
    let node = self.list.at(self.cur);
    self.cur = node.next;
    self.left -= 1;
    Some((node.key.as_str(), &node.val))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.left, Some(self.left))
  }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

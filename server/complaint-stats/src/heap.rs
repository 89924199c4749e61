//! Array-backed binary heap with an injected ordering strategy.
//!
//! One sift-up/sift-down implementation serves both variants; `MinHeap` and
//! `MaxHeap` are the same type with a different zero-sized strategy.

use std::marker::PhantomData;

/// Ordering strategy: decides whether `a` belongs above `b` in the heap.
pub trait HeapOrder<T> {
  fn precedes(a: &T, b: &T) -> bool;
}

/// Root is the minimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

/// Root is the maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl<T: PartialOrd> HeapOrder<T> for MinOrder {
  fn precedes(a: &T, b: &T) -> bool {
    a < b
  }
}

impl<T: PartialOrd> HeapOrder<T> for MaxOrder {
  fn precedes(a: &T, b: &T) -> bool {
    a > b
  }
}

/// Priority queue whose root is whatever `O` says should come first.
///
/// Conceptually one-indexed (children of `i` are `2i` and `2i + 1`); stored
/// zero-indexed, so children of `i` live at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, O> {
  items: Vec<T>,
  order: PhantomData<O>,
}

pub type MinHeap<T> = BinaryHeap<T, MinOrder>;
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

impl<T, O: HeapOrder<T>> BinaryHeap<T, O> {
  pub fn new() -> Self {
    Self::with_capacity(0)
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      items: Vec::with_capacity(capacity),
      order: PhantomData,
    }
  }

  /// Append `value` and sift it toward the root. Equal values never swap.
  pub fn insert(&mut self, value: T) {
    self.items.push(value);
    self.sift_up(self.items.len() - 1);
  }

  /// Remove and return the root, or `None` when empty.
  pub fn extract_root(&mut self) -> Option<T> {
    if self.items.is_empty() {
      return None;
    }
    let root = self.items.swap_remove(0);
    if !self.items.is_empty() {
      self.sift_down(0);
    }
    Some(root)
  }

  pub fn peek_root(&self) -> Option<&T> {
    self.items.first()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Drain the heap in root-first order.
  pub fn into_sorted_vec(mut self) -> Vec<T> {
    let mut out = Vec::with_capacity(self.items.len());
    while let Some(v) = self.extract_root() {
      out.push(v);
    }
    out
  }

  fn sift_up(&mut self, mut i: usize) {
    while i > 0 {
      let parent = (i - 1) / 2;
      if !O::precedes(&self.items[i], &self.items[parent]) {
        break;
      }
      self.items.swap(i, parent);
      i = parent;
    }
  }

  fn sift_down(&mut self, mut i: usize) {
    let len = self.items.len();
    loop {
      let left = 2 * i + 1;
      if left >= len {
        break;
      }
      let child = self.priority_child(left, len);
      // Stop once the node is not outranked by its priority child.
      if !O::precedes(&self.items[child], &self.items[i]) {
        break;
      }
      self.items.swap(i, child);
      i = child;
    }
  }

  /// Child that satisfies the ordering more strongly; left wins ties.
  fn priority_child(&self, left: usize, len: usize) -> usize {
    let right = left + 1;
    if right < len && O::precedes(&self.items[right], &self.items[left]) {
      right
    } else {
      left
    }
  }
}

impl<T, O: HeapOrder<T>> Default for BinaryHeap<T, O> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, O: HeapOrder<T>> Extend<T> for BinaryHeap<T, O> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for v in iter {
      self.insert(v);
    }
  }
}

impl<T, O: HeapOrder<T>> FromIterator<T> for BinaryHeap<T, O> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut heap = Self::new();
    heap.extend(iter);
    heap
  }
}

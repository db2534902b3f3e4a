//! Recursive range-sum segment tree for segsum.
//!
//! This crate provides a segment tree over a fixed sequence of values,
//! built once and then queried and point-updated in place.

use anyhow::{Result, bail};

/// A segment tree for range-sum queries over a fixed-length sequence.
///
/// Supports:
/// - Point updates: O(log n)
/// - Range sum queries: O(log n)
///
/// Storage is a flat 1-indexed array: node `k` covers a contiguous range
/// `[start, end]` of the input, with children `2k` (left half) and
/// `2k + 1` (right half). Index 0 is unused padding.
#[derive(Debug, Clone)]
pub struct SegmentTree<T> {
    tree: Vec<T>,
    len: usize,
}

/// One node reported by [`SegmentTree::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeVisit<T> {
    /// 1-based index of the node in tree storage.
    pub node: usize,
    /// First input index covered by this node.
    pub start: usize,
    /// Last input index covered by this node (inclusive).
    pub end: usize,
    /// The sum stored at this node.
    pub value: T,
}

impl<T> NodeVisit<T> {
    /// Returns true if this node mirrors a single input element.
    pub fn is_leaf(&self) -> bool {
        self.start == self.end
    }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> SegmentTree<T> {
    /// Builds a segment tree over `values`.
    ///
    /// Storage is sized for a complete binary tree of height
    /// `ceil(log2(n)) + 1` and zero-filled before construction, so slots
    /// past the live nodes stay at `T::default()`. An empty input is
    /// rejected: there is no root range to cover.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            bail!("cannot build a segment tree over an empty sequence");
        }
        let len = values.len();
        let height = ceil_log2(len) + 1;
        let mut tree = Self {
            tree: vec![T::default(); 1 << (height + 1)],
            len,
        };
        tree.build(values, 1, 0, len - 1);
        Ok(tree)
    }

    fn build(&mut self, values: &[T], node: usize, start: usize, end: usize) -> T {
        if start == end {
            self.tree[node] = values[start];
            return self.tree[node];
        }
        let mid = (start + end) / 2;
        let left = self.build(values, 2 * node, start, mid);
        let right = self.build(values, 2 * node + 1, mid + 1, end);
        self.tree[node] = left + right;
        self.tree[node]
    }

    /// Adds `diff` to the element at `index`, updating every node whose
    /// range contains it. An out-of-range index is a no-op.
    ///
    /// Only tree storage changes; a caller that keeps its own copy of
    /// the input sequence is responsible for updating that copy too.
    pub fn update(&mut self, index: usize, diff: T) {
        self.update_node(1, 0, self.len - 1, index, diff);
    }

    fn update_node(&mut self, node: usize, start: usize, end: usize, index: usize, diff: T) {
        if index < start || index > end {
            return;
        }
        self.tree[node] = self.tree[node] + diff;
        if start != end {
            // Descend into both halves; the one not covering `index`
            // prunes itself on the range check above.
            let mid = (start + end) / 2;
            self.update_node(2 * node, start, mid, index, diff);
            self.update_node(2 * node + 1, mid + 1, end, index, diff);
        }
    }

    /// Returns the sum of the elements in `[left, right]` (inclusive).
    ///
    /// Parts of the range outside the sequence contribute zero, so a
    /// fully disjoint or inverted range returns `T::default()`.
    pub fn range_sum(&self, left: usize, right: usize) -> T {
        if left > right {
            return T::default();
        }
        self.query_node(1, 0, self.len - 1, left, right)
    }

    fn query_node(&self, node: usize, start: usize, end: usize, left: usize, right: usize) -> T {
        // No overlap: this subtree contributes nothing.
        if right < start || left > end {
            return T::default();
        }
        // Total coverage: the stored sum answers the sub-query exactly.
        if left <= start && end <= right {
            return self.tree[node];
        }
        // Partial overlap: split and combine.
        let mid = (start + end) / 2;
        let left_sum = self.query_node(2 * node, start, mid, left, right);
        let right_sum = self.query_node(2 * node + 1, mid + 1, end, left, right);
        left_sum + right_sum
    }

    /// Returns the sum of the whole sequence (the root node).
    pub fn total(&self) -> T {
        self.tree[1]
    }

    /// Returns the value at `index`, or zero if out of range.
    pub fn get(&self, index: usize) -> T {
        if index >= self.len {
            return T::default();
        }
        self.range_sum(index, index)
    }

    /// Returns the number of elements in the underlying sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree covers no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visits every live node in pre-order, reporting its storage index,
    /// covered range, and stored sum.
    pub fn walk<F: FnMut(NodeVisit<T>)>(&self, visit: &mut F) {
        self.walk_node(1, 0, self.len - 1, visit);
    }

    fn walk_node<F: FnMut(NodeVisit<T>)>(
        &self,
        node: usize,
        start: usize,
        end: usize,
        visit: &mut F,
    ) {
        visit(NodeVisit {
            node,
            start,
            end,
            value: self.tree[node],
        });
        if start != end {
            let mid = (start + end) / 2;
            self.walk_node(2 * node, start, mid, visit);
            self.walk_node(2 * node + 1, mid + 1, end, visit);
        }
    }

    /// The raw 1-indexed tree array. Index 0 is unused; slots past the
    /// live nodes are zero.
    pub fn storage(&self) -> &[T] {
        &self.tree
    }
}

fn ceil_log2(n: usize) -> usize {
    n.next_power_of_two().trailing_zeros() as usize
}

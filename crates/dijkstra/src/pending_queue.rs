//! Indexed binary min-heap over the nodes that are still pending.
//!
//! Entries are ordered by `(key, node)`, so equal keys pop in ascending node
//! order. A side table maps every pending node to its heap slot, which gives
//! `decrease_key` its O(log n) bound without searching the heap.

use crate::error::Error;
use crate::error::Result;
use crate::error::check_node_count;
use crate::shortest_paths::Distance;
use crate::shortest_paths::ShortestPaths;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct Entry {
    key: Distance,
    node: u32,
}

#[derive(Clone, Debug)]
pub struct PendingQueue {
    heap: Vec<Entry>,
    // `None` once the node has been extracted.
    position: Vec<Option<usize>>,
}

impl PendingQueue {
    /// Queue holding every node of `paths`, keyed by its current distance.
    pub fn new(paths: &ShortestPaths) -> Result<Self> {
        Self::from_keys(&paths.distances())
    }

    /// Queue holding nodes `0..keys.len()` with the given keys.
    ///
    /// Fails with [`Error::TooManyNodes`] past `u32::MAX` keys.
    pub fn from_keys(keys: &[Distance]) -> Result<Self> {
        check_node_count(keys.len())?;
        let heap: Vec<Entry> = keys
            .iter()
            .enumerate()
            .map(|(node, &key)| Entry {
                key,
                node: node as u32,
            })
            .collect();
        let position = (0..heap.len()).map(Some).collect();
        let mut queue = Self { heap, position };

        let len = queue.heap.len();
        if len > 1 {
            let mut start = (len - 2) / 2;
            loop {
                queue.sift_down(start);
                if start == 0 {
                    break;
                }
                start -= 1;
            }
        }
        Ok(queue)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn not_empty(&self) -> bool {
        !self.heap.is_empty()
    }

    #[inline]
    pub fn is_pending(&self, node: usize) -> bool {
        matches!(self.position.get(node), Some(Some(_)))
    }

    /// Current key of a pending node.
    pub fn key(&self, node: usize) -> Option<Distance> {
        let pos = (*self.position.get(node)?)?;
        Some(self.heap[pos].key)
    }

    /// Removes and returns the pending node with the smallest key.
    pub fn extract_min(&mut self) -> Result<(usize, Distance)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let top = self.heap.swap_remove(0);
        self.position[top.node as usize] = None;
        if let Some(&moved) = self.heap.first() {
            self.position[moved.node as usize] = Some(0);
            self.sift_down(0);
        }
        Ok((top.node as usize, top.key))
    }

    /// Lowers the key of a pending node to `new_key`.
    ///
    /// Returns `false` and leaves the queue untouched when the node is not
    /// pending or `new_key` does not improve on its current key.
    pub fn decrease_key(&mut self, node: usize, new_key: u64) -> bool {
        let Some(&Some(pos)) = self.position.get(node) else {
            return false;
        };
        let new_key = Distance::Finite(new_key);
        if new_key >= self.heap[pos].key {
            return false;
        }
        self.heap[pos].key = new_key;
        self.sift_up(pos);
        true
    }

    /// Checks the heap order and the position table against each other.
    pub fn is_valid_heap(&self) -> bool {
        for i in 1..self.heap.len() {
            if self.heap[i] < self.heap[(i - 1) / 2] {
                return false;
            }
        }
        let pending = self.position.iter().filter(|p| p.is_some()).count();
        pending == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(i, e)| self.position[e.node as usize] == Some(i))
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i].node as usize] = Some(i);
        self.position[self.heap[j].node as usize] = Some(j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i] >= self.heap[parent] {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = i;
            if self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

//! An indexed binary heap for path searches.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

#[derive(Clone, Copy)]
struct Entry<K, P> {
    key: K,
    priority: P,
}

/// A binary heap keyed by arbitrary values, with a side table tracking where every key lives in the heap array.
///
/// The side table is what makes [`update`](Self::update) `O(log n)`: a key's slot is found directly instead of by scanning.
/// By default the queue pops the lowest priority first; [`PriorityQueue::max`] or [`set_priority_order`](Self::set_priority_order) flips that.
///
/// At most one entry exists per key.
#[derive(Clone)]
pub struct PriorityQueue<K, P> {
    entries: Vec<Entry<K, P>>,
    positions: HashMap<K, usize>,
    inverse: bool,
}

impl<K, P> PriorityQueue<K, P>
where
    K: Copy + Eq + Hash,
    P: Copy + Ord,
{
    /// An empty min-queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An empty min-queue with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            inverse: false,
        }
    }

    /// An empty max-queue, popping the highest priority first.
    pub fn max() -> Self {
        let mut queue = Self::new();
        queue.set_priority_order(true);
        queue
    }

    /// Choose between min-order (`false`, the default) and max-order (`true`).
    ///
    /// Changing the order of a non-empty queue would leave the heap inconsistent, so this must happen before anything is inserted.
    pub fn set_priority_order(&mut self, inverse: bool) {
        debug_assert!(self.entries.is_empty(), "priority order changed on a non-empty queue");
        self.inverse = inverse;
    }

    /// Number of keys currently queued.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is currently queued.
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// The priority `key` is queued with, if any.
    pub fn priority_of(&self, key: &K) -> Option<P> {
        self.positions.get(key).map(|&idx| self.entries[idx].priority)
    }

    /// The entry [`pop`](Self::pop) would return next, without removing it.
    pub fn peek(&self) -> Option<(K, P)> {
        self.entries.first().map(|entry| (entry.key, entry.priority))
    }

    /// Insert `key`, which must not already be queued; use [`update`](Self::update) when that is not known.
    ///
    /// Pushing a key twice leaves the side table pointing at only one of the two entries.
    pub fn push(&mut self, key: K, priority: P) {
        debug_assert!(!self.positions.contains_key(&key), "key pushed twice");

        let idx = self.entries.len();
        self.entries.push(Entry { key, priority });
        self.positions.insert(key, idx);
        self.sift_up(idx);
    }

    /// Bulk-load `entries` and heapify once, in `O(n)` rather than the `O(n log n)` of repeated pushes.
    ///
    /// A key appearing more than once (or already queued) keeps the last priority given.
    pub fn init<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item=(K, P)>,
    {
        for (key, priority) in entries {
            match self.positions.get(&key) {
                Some(&idx) => self.entries[idx].priority = priority,
                None => {
                    self.positions.insert(key, self.entries.len());
                    self.entries.push(Entry { key, priority });
                }
            }
        }

        for idx in (0..self.entries.len() / 2).rev() {
            self.sift_down(idx);
        }
    }

    /// Set the priority of `key`, moving it up or down the heap as needed, or insert it if absent.
    pub fn update(&mut self, key: K, priority: P) {
        match self.positions.get(&key) {
            None => self.push(key, priority),
            Some(&idx) => {
                self.entries[idx].priority = priority;
                // at most one of these moves the entry
                let idx = self.sift_up(idx);
                self.sift_down(idx);
            }
        }
    }

    /// Remove and return the entry with the lowest priority (highest, in max-order).
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap_entries(0, last);

        let entry = self.entries.pop()?;
        self.positions.remove(&entry.key);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((entry.key, entry.priority))
    }

    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        if self.inverse {
            self.entries[a].priority > self.entries[b].priority
        } else {
            self.entries[a].priority < self.entries[b].priority
        }
    }

    /// Returns where the entry came to rest.
    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.precedes(idx, parent) {
                break;
            }

            self.swap_entries(idx, parent);
            idx = parent;
        }

        idx
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut first = idx;

            if left < len && self.precedes(left, first) {
                first = left;
            }
            if right < len && self.precedes(right, first) {
                first = right;
            }

            if first == idx {
                break;
            }

            self.swap_entries(idx, first);
            idx = first;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].key, a);
        self.positions.insert(self.entries[b].key, b);
    }
}

impl<K, P> Default for PriorityQueue<K, P>
where
    K: Copy + Eq + Hash,
    P: Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> FromIterator<(K, P)> for PriorityQueue<K, P>
where
    K: Copy + Eq + Hash,
    P: Copy + Ord,
{
    fn from_iter<T: IntoIterator<Item=(K, P)>>(iter: T) -> Self {
        let mut queue = Self::new();
        queue.init(iter);
        queue
    }
}

impl<K: Debug, P: Debug> Debug for PriorityQueue<K, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.entries.len())
            .field("inverse", &self.inverse)
            .field("head", &self.entries.first().map(|entry| (&entry.key, &entry.priority)))
            .finish()
    }
}

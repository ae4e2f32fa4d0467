// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`QuadTree`] API over the recursive node structure.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::OutOfBounds;
use crate::node::Node;
use crate::types::{Aabb2D, Scalar};

/// Generational handle for indexed objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(u32, u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Index keys are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(slot: usize, generation: u32) -> Self {
        Self(slot as u32, generation)
    }

    const fn slot(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<T, P> {
    generation: u32,
    x: T,
    y: T,
    payload: P,
}

/// A point quadtree index over fixed world bounds.
///
/// Callers keep ownership of their objects; the index stores a `Copy` payload
/// per entry (typically an id) together with the position it was indexed at,
/// and hands back a generational [`Key`] for later relocation or removal.
/// All mutations take effect immediately; there is no batching step.
///
/// Positions outside the world bounds are rejected with [`OutOfBounds`]
/// rather than silently bucketed into a coarser node.
pub struct QuadTree<T: Scalar, P: Copy + Debug> {
    bounds: Aabb2D<T>,
    root: Node<T>,
    entries: Vec<Option<Entry<T, P>>>,
    free_list: Vec<(usize, u32)>,
    len: usize,
}

impl<T: Scalar, P: Copy + Debug> QuadTree<T, P> {
    /// Create an empty index spanning `bounds`.
    ///
    /// No subdivision happens until insertions exceed the leaf threshold.
    /// Inverted bounds are accepted but contain no points, so every insert
    /// into such an index reports [`OutOfBounds`].
    pub fn new(bounds: Aabb2D<T>) -> Self {
        Self {
            bounds,
            root: Node::new(bounds),
            entries: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// The world bounds this index was constructed with.
    pub fn bounds(&self) -> Aabb2D<T> {
        self.bounds
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reserve space for at least `n` entries.
    pub fn reserve(&mut self, n: usize) {
        self.entries.reserve(n);
    }

    /// Insert a payload at `(x, y)`. Returns a stable handle [`Key`].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if the position lies outside the index bounds;
    /// the index is left unchanged.
    pub fn insert(&mut self, x: T, y: T, payload: P) -> Result<Key, OutOfBounds<T>> {
        if !self.bounds.contains_point(x, y) {
            return Err(OutOfBounds {
                x,
                y,
                bounds: self.bounds,
            });
        }
        let entry = Entry {
            generation: 1,
            x,
            y,
            payload,
        };
        let (slot, generation) = match self.free_list.pop() {
            Some((slot, last)) => {
                let generation = last.wrapping_add(1);
                self.entries[slot] = Some(Entry { generation, ..entry });
                (slot, generation)
            }
            None => {
                self.entries.push(Some(entry));
                (self.entries.len() - 1, 1)
            }
        };
        self.root.insert(slot, x, y, 0);
        self.len += 1;
        Ok(Key::new(slot, generation))
    }

    /// Move an existing entry to `(x, y)`.
    ///
    /// The entry is unindexed from its recorded position and re-routed from
    /// the root. A stale key is a silent no-op, matching [`remove`](Self::remove).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if the target position lies outside the index
    /// bounds; the entry stays indexed at its old position.
    pub fn relocate(&mut self, key: Key, x: T, y: T) -> Result<(), OutOfBounds<T>> {
        if !self.bounds.contains_point(x, y) {
            return Err(OutOfBounds {
                x,
                y,
                bounds: self.bounds,
            });
        }
        let slot = key.slot();
        let (old_x, old_y) = match self.entries.get(slot).and_then(Option::as_ref) {
            Some(e) if e.generation == key.1 => (e.x, e.y),
            _ => return Ok(()),
        };
        let found = self.root.remove(slot, old_x, old_y);
        debug_assert!(found, "live entry missing from the tree");
        if let Some(e) = self.entries[slot].as_mut() {
            e.x = x;
            e.y = y;
        }
        self.root.insert(slot, x, y, 0);
        Ok(())
    }

    /// Remove an entry. Stale or already-removed keys are a no-op.
    pub fn remove(&mut self, key: Key) {
        let slot = key.slot();
        let (x, y) = match self.entries.get(slot).and_then(Option::as_ref) {
            Some(e) if e.generation == key.1 => (e.x, e.y),
            _ => return,
        };
        let found = self.root.remove(slot, x, y);
        debug_assert!(found, "live entry missing from the tree");
        self.entries[slot] = None;
        self.free_list.push((slot, key.1));
        self.len -= 1;
    }

    /// Clear the index, keeping the bounds.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.free_list.clear();
        self.root.clear();
        self.len = 0;
    }

    /// Look up an entry's indexed position and payload.
    pub fn get(&self, key: Key) -> Option<(T, T, P)> {
        let e = self.entries.get(key.slot())?.as_ref()?;
        (e.generation == key.1).then_some((e.x, e.y, e.payload))
    }

    /// Whether `key` refers to a live entry.
    pub fn contains_key(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Query for entries whose position lies inside `rect`, inclusive on both
    /// axes.
    ///
    /// Result order follows the tree layout, not insertion order; repeated
    /// queries without intervening mutation return the same set.
    pub fn query_rect(&self, rect: Aabb2D<T>) -> impl Iterator<Item = (Key, P)> + '_ {
        let mut slots = Vec::new();
        self.root.query_rect(&rect, &mut slots);
        let mut out = Vec::with_capacity(slots.len());
        for slot in slots {
            if let Some(Some(e)) = self.entries.get(slot) {
                out.push((Key::new(slot, e.generation), e.payload));
            }
        }
        out.into_iter()
    }

    /// Query for entries positioned exactly at `(x, y)`.
    pub fn query_point(&self, x: T, y: T) -> impl Iterator<Item = (Key, P)> + '_ {
        self.query_rect(Aabb2D::new(x, y, x, y))
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node<T> {
        &self.root
    }
}

impl<T: Scalar, P: Copy + Debug> Debug for QuadTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds)
            .field("len", &self.len)
            .field("total_slots", &self.entries.len())
            .finish_non_exhaustive()
    }
}

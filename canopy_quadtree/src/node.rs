// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive quadtree nodes: subdivision, routing, and collapse.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{Aabb2D, Scalar};

/// A leaf splits the first time an insertion pushes it past this many items.
pub(crate) const SPLIT_THRESHOLD: usize = 4;

/// Depth at which leaves stop splitting and grow unbounded instead.
///
/// Without a cap, coincident points would subdivide forever: every split
/// routes them all into the same child. Thirty-two levels halve each axis
/// down to 2^-32 of the world, far below any useful query resolution.
pub(crate) const MAX_DEPTH: usize = 32;

/// One rectangular cell of the quadtree.
///
/// Either a leaf holding `(slot, x, y)` items directly, or an internal node
/// whose four children partition its bounds at the midpoint. Items carry
/// their position so routing and filtering never consult the entry slab.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    bounds: Aabb2D<T>,
    items: Vec<(usize, T, T)>,
    children: Option<Box<[Node<T>; 4]>>,
}

impl<T: Scalar> Node<T> {
    pub(crate) fn new(bounds: Aabb2D<T>) -> Self {
        Self {
            bounds,
            items: Vec::new(),
            children: None,
        }
    }

    /// Split this leaf into four children at the bounds midpoint.
    ///
    /// Child order is top-left, top-right, bottom-left, bottom-right; a point
    /// on a shared boundary belongs to the first child that contains it, so
    /// this order is part of the routing contract. Items are not moved here;
    /// the caller redistributes them.
    fn subdivide(&mut self) {
        let b = self.bounds;
        let cx = T::mid(b.min_x, b.max_x);
        let cy = T::mid(b.min_y, b.max_y);
        self.children = Some(Box::new([
            Self::new(Aabb2D::new(b.min_x, b.min_y, cx, cy)),
            Self::new(Aabb2D::new(cx, b.min_y, b.max_x, cy)),
            Self::new(Aabb2D::new(b.min_x, cy, cx, b.max_y)),
            Self::new(Aabb2D::new(cx, cy, b.max_x, b.max_y)),
        ]));
    }

    /// Insert `slot` at `(x, y)`, routing into the first child whose bounds
    /// contain the position.
    ///
    /// A position no child covers stays in this node; the public facade
    /// validates against the root bounds, so within the tree that can only
    /// happen for the root itself under float drift. A leaf pushed past
    /// [`SPLIT_THRESHOLD`] subdivides (unless at [`MAX_DEPTH`]) and re-routes
    /// everything it held through this same path.
    pub(crate) fn insert(&mut self, slot: usize, x: T, y: T, depth: usize) {
        if let Some(children) = self.children.as_deref_mut() {
            if let Some(child) = children.iter_mut().find(|c| c.bounds.contains_point(x, y)) {
                child.insert(slot, x, y, depth + 1);
            } else {
                self.items.push((slot, x, y));
            }
            return;
        }
        self.items.push((slot, x, y));
        if self.items.len() > SPLIT_THRESHOLD && depth < MAX_DEPTH {
            self.subdivide();
            let items = core::mem::take(&mut self.items);
            for (s, ix, iy) in items {
                self.insert(s, ix, iy, depth);
            }
        }
    }

    /// Append every slot in this subtree whose position lies inside `rect`.
    ///
    /// Children whose bounds do not intersect `rect` are pruned. Output order
    /// is tree order (children first, in fixed order), not insertion order.
    pub(crate) fn query_rect(&self, rect: &Aabb2D<T>, out: &mut Vec<usize>) {
        if let Some(children) = self.children.as_deref() {
            for child in children {
                if child.bounds.intersects(rect) {
                    child.query_rect(rect, out);
                }
            }
        }
        for &(slot, x, y) in &self.items {
            if rect.contains_point(x, y) {
                out.push(slot);
            }
        }
    }

    /// Remove `slot`, routed by its recorded position. Returns whether it was
    /// found.
    ///
    /// A removal that leaves all four children as empty leaves collapses them
    /// back into this node; collapses then propagate up the return path.
    pub(crate) fn remove(&mut self, slot: usize, x: T, y: T) -> bool {
        if let Some(children) = self.children.as_deref_mut() {
            let removed = match children.iter_mut().find(|c| c.bounds.contains_point(x, y)) {
                Some(child) => child.remove(slot, x, y),
                None => false,
            };
            if removed {
                if children.iter().all(Self::is_empty_leaf) {
                    self.children = None;
                }
                return true;
            }
        }
        if let Some(pos) = self.items.iter().position(|&(s, _, _)| s == slot) {
            self.items.swap_remove(pos);
            return true;
        }
        false
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.children = None;
    }

    fn is_empty_leaf(&self) -> bool {
        self.children.is_none() && self.items.is_empty()
    }
}

#[cfg(test)]
impl<T: Scalar> Node<T> {
    /// Total nodes in this subtree, including self.
    pub(crate) fn node_count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map_or(0, |c| c.iter().map(Self::node_count).sum())
    }

    /// Height of this subtree; a childless node has height 0.
    pub(crate) fn height(&self) -> usize {
        self.children
            .as_deref()
            .map_or(0, |c| 1 + c.iter().map(Self::height).max().unwrap_or(0))
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

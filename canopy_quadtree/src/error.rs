// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type reported for positions outside the index bounds.

use core::fmt::{self, Debug};

use crate::types::Aabb2D;

/// A position passed to [`QuadTree::insert`](crate::QuadTree::insert) or
/// [`QuadTree::relocate`](crate::QuadTree::relocate) lies outside the index
/// bounds.
///
/// The index never silently demotes such a position to a coarser node; the
/// operation is rejected and the tree is left unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OutOfBounds<T> {
    /// The rejected x coordinate.
    pub x: T,
    /// The rejected y coordinate.
    pub y: T,
    /// The bounds the index was constructed with.
    pub bounds: Aabb2D<T>,
}

impl<T: Debug> fmt::Display for OutOfBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position ({:?}, {:?}) lies outside index bounds {:?}",
            self.x, self.y, self.bounds
        )
    }
}

impl<T: Debug> core::error::Error for OutOfBounds<T> {}

// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_quadtree --heading-base-level=0

//! Canopy Quadtree: a recursive point quadtree index.
//!
//! Canopy Quadtree is a reusable building block for spatial queries over
//! point-located objects: game entities, scene markers, map features.
//!
//! - Insert points with user payloads inside fixed world bounds; get a stable
//!   generational [`Key`] back.
//! - Query by rectangle or exact point, inclusive on both edges.
//! - Relocate an entry when its position changes; the tree re-routes it in
//!   O(depth) using the position recorded at insertion.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i64`) and does not
//! depend on any geometry crate. Leaves split at a fixed item threshold, the
//! four children of a node partition it exactly at the midpoint, and subtrees
//! emptied by removals collapse back into leaves, so memory stays bounded
//! under churn. A depth cap keeps coincident points from subdividing forever.
//!
//! Out-of-bounds positions are a typed error ([`OutOfBounds`]), not a silent
//! fallback: an insert or relocate outside the world bounds leaves the index
//! unchanged.
//!
//! # Example
//!
//! ```rust
//! use canopy_quadtree::{Aabb2D, QuadTree};
//!
//! // An index over a 100x100 world.
//! let mut tree: QuadTree<f64, u32> = QuadTree::new(Aabb2D::new(0.0, 0.0, 100.0, 100.0));
//! let a = tree.insert(10.0, 10.0, 1).unwrap();
//! let _b = tree.insert(80.0, 80.0, 2).unwrap();
//!
//! // Range query around the first point.
//! let hits: Vec<_> = tree.query_rect(Aabb2D::new(5.0, 5.0, 15.0, 15.0)).collect();
//! assert_eq!(hits, vec![(a, 1)]);
//!
//! // Relocate it and query again.
//! tree.relocate(a, 50.0, 50.0).unwrap();
//! assert_eq!(tree.query_rect(Aabb2D::new(5.0, 5.0, 15.0, 15.0)).count(), 0);
//! assert_eq!(tree.query_rect(Aabb2D::new(45.0, 45.0, 55.0, 55.0)).count(), 1);
//! ```
//!
//! Out-of-bounds positions are rejected up front:
//!
//! ```rust
//! use canopy_quadtree::{Aabb2D, QuadTree};
//!
//! let mut tree: QuadTree<f64, u32> = QuadTree::new(Aabb2D::new(0.0, 0.0, 100.0, 100.0));
//! let err = tree.insert(200.0, 10.0, 9).unwrap_err();
//! assert_eq!((err.x, err.y), (200.0, 10.0));
//! assert!(tree.is_empty());
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates; a NaN position
//! is never contained by any bounds and is therefore rejected as
//! out-of-bounds.

#![no_std]

extern crate alloc;

pub mod error;
pub mod tree;
pub mod types;

mod node;

pub use error::OutOfBounds;
pub use tree::{Key, QuadTree};
pub use types::{Aabb2D, Scalar};

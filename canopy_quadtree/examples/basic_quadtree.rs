// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Canopy Quadtree: insert, range query, relocate, remove.

use canopy_quadtree::{Aabb2D, QuadTree};

fn main() {
    let mut tree: QuadTree<f64, u32> = QuadTree::new(Aabb2D::new(0.0, 0.0, 100.0, 100.0));
    let a = tree.insert(10.0, 10.0, 1).unwrap();
    let b = tree.insert(80.0, 80.0, 2).unwrap();

    let hits: Vec<_> = tree.query_rect(Aabb2D::new(5.0, 5.0, 15.0, 15.0)).collect();
    println!("hits near (10,10): {:?}", hits);

    // Move object 1 to the middle of the world.
    tree.relocate(a, 50.0, 50.0).unwrap();
    let hits: Vec<_> = tree.query_rect(Aabb2D::new(45.0, 45.0, 55.0, 55.0)).collect();
    println!("hits near (50,50): {:?}", hits);

    // Positions outside the world bounds are rejected.
    let err = tree.insert(250.0, 10.0, 3).unwrap_err();
    println!("rejected: {}", err);

    tree.remove(b);
    println!("{} entries left: {:?}", tree.len(), tree);
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod brute_force;

use crate::error::Result;
use crate::types::vector::Vector;
use core::cmp::Ordering;
use serde::Serialize;

pub use brute_force::BruteForceIndex;

/// One ranked hit: squared L2 distance and zero-based dataset position.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Neighbor {
    // Sort order: distance ascending, then position ascending.
    pub distance: f32,
    pub position: usize,
}

impl Neighbor {
    pub fn new(distance: f32, position: usize) -> Self {
        Self { distance, position }
    }
}

/// NaN of either sign ranks after every number and ties with any other NaN.
/// Numbers compare numerically, so `-0.0 == 0.0`.
fn cmp_distance(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        match cmp_distance(self.distance, other.distance) {
            Ordering::Equal => self.position.cmp(&other.position),
            other_ord => other_ord,
        }
    }
}

pub trait VectorIndex {
    /// Number of indexed rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `k` nearest rows, ascending by distance then position.
    fn search(&self, query: &Vector, k: usize) -> Result<Vec<Neighbor>>;
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Brute-force index.

use std::collections::BinaryHeap;

use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::dataset::FlatDataset;
use crate::error::Result;
use crate::index::{Neighbor, VectorIndex};
use crate::math::l2::l2_sq;
use crate::types::vector::Vector;

/// Exhaustive scan over a borrowed [`FlatDataset`]. Holds no state of its own.
#[derive(Clone, Copy, Debug)]
pub struct BruteForceIndex<'a> {
    dataset: &'a FlatDataset,
    config: SearchConfig,
}

impl<'a> BruteForceIndex<'a> {
    pub fn new(dataset: &'a FlatDataset) -> Self {
        Self::with_config(dataset, SearchConfig::default())
    }

    pub fn with_config(dataset: &'a FlatDataset, config: SearchConfig) -> Self {
        Self { dataset, config }
    }

    fn scan_parallel(&self, query: &[f32], k: usize) -> Vec<Neighbor> {
        let d = self.dataset.dim();
        let chunk_rows = self.config.chunk_rows.max(1);

        self.dataset
            .as_slice()
            .par_chunks(chunk_rows * d)
            .enumerate()
            .map(|(chunk, block)| top_k(query, block, d, chunk * chunk_rows, k))
            .reduce(Vec::new, |a, b| merge(a, b, k))
    }
}

impl VectorIndex for BruteForceIndex<'_> {
    fn len(&self) -> usize {
        self.dataset.len()
    }

    fn search(&self, query: &Vector, k: usize) -> Result<Vec<Neighbor>> {
        self.dataset.check_query(query)?;

        let n = self.dataset.len();
        let k = k.min(n);
        if k == 0 {
            return Ok(Vec::new());
        }

        let results = if self.config.is_parallel_for(n) {
            tracing::debug!(n, k, chunk_rows = self.config.chunk_rows, "parallel scan");
            self.scan_parallel(query.as_slice(), k)
        } else {
            top_k(query.as_slice(), self.dataset.as_slice(), self.dataset.dim(), 0, k)
        };

        Ok(results)
    }
}

/// Keeps the `k` smallest neighbors of `block` in a bounded max-heap.
/// `base` is the dataset position of the block's first row.
fn top_k(query: &[f32], block: &[f32], d: usize, base: usize, k: usize) -> Vec<Neighbor> {
    let mut heap: BinaryHeap<Neighbor> = BinaryHeap::with_capacity(k + 1);

    for (i, row) in block.chunks_exact(d).enumerate() {
        let candidate = Neighbor::new(l2_sq(query, row), base + i);

        if heap.len() < k {
            heap.push(candidate);
        } else if let Some(mut worst) = heap.peek_mut() {
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    heap.into_sorted_vec()
}

/// Merges two ascending lists, keeping the first `k`.
fn merge(a: Vec<Neighbor>, b: Vec<Neighbor>, k: usize) -> Vec<Neighbor> {
    let mut out = Vec::with_capacity(k.min(a.len() + b.len()));
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    while out.len() < k {
        let next = match (a.peek(), b.peek()) {
            (Some(x), Some(y)) => {
                if x <= y {
                    a.next()
                } else {
                    b.next()
                }
            }
            (Some(_), None) => a.next(),
            (None, Some(_)) => b.next(),
            (None, None) => break,
        };
        out.extend(next);
    }

    out
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Dataset position to external identifier mapping.

use serde::Serialize;

use crate::error::{KnnError, Result};
use crate::index::Neighbor;
use crate::types::id::RowId;

/// Identifier plus the distance that ranked it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoredId {
    pub id: RowId,
    pub distance: f32,
}

/// Identifiers in fetch order; entry `i` belongs to dataset row `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierTable {
    ids: Vec<RowId>,
}

impl IdentifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rows: usize) -> Self {
        Self { ids: Vec::with_capacity(rows) }
    }

    pub fn push(&mut self, id: RowId) {
        self.ids.push(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<RowId> {
        self.ids.get(position).copied()
    }

    pub fn remap(&self, neighbors: &[Neighbor]) -> Result<Vec<RowId>> {
        neighbors.iter().map(|nb| self.lookup(nb.position)).collect()
    }

    pub fn remap_scored(&self, neighbors: &[Neighbor]) -> Result<Vec<ScoredId>> {
        neighbors
            .iter()
            .map(|nb| {
                Ok(ScoredId {
                    id: self.lookup(nb.position)?,
                    distance: nb.distance,
                })
            })
            .collect()
    }

    fn lookup(&self, position: usize) -> Result<RowId> {
        self.get(position).ok_or_else(|| out_of_range(position, self.len()))
    }
}

impl FromIterator<RowId> for IdentifierTable {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}

/// Ad-hoc datasets keep positions as identifiers, but every one must still be below `n`.
pub fn check_positions(neighbors: &[Neighbor], n: usize) -> Result<()> {
    match neighbors.iter().find(|nb| nb.position >= n) {
        Some(nb) => Err(out_of_range(nb.position, n)),
        None => Ok(()),
    }
}

fn out_of_range(position: usize, len: usize) -> KnnError {
    tracing::error!(position, len, "search returned a position outside the dataset");
    KnnError::InternalConsistency { position, len }
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! flatknn: exact k-nearest-neighbor search under squared L2 over dense f32 vectors.
//!
//! Two entry points are provided by [`query`]:
//! - `search_flat`: search a caller-supplied flat buffer of `n * d` floats and
//!   return zero-based row positions.
//! - `search_table`: search every row yielded by a [`source::RowSource`] and
//!   return the rows' own identifiers.
//!
//! Every call rebuilds its dataset from scratch; nothing is retained between calls.

pub mod config;
pub mod error;
pub mod types;
pub mod codec;
pub mod math;
pub mod dataset;
pub mod index;
pub mod remap;
pub mod source;
pub mod adapters;
pub mod query;

pub use config::SearchConfig;
pub use error::{ErrorKind, KnnError, Result};
pub use query::{search_flat, search_table, QueryEngine};

#[cfg(test)]
pub mod tests;

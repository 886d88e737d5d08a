// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Row sources: where table-backed searches get their (id, embedding) pairs.

pub mod memory;

use crate::codec::RawArray;
use crate::error::Result;

pub use memory::MemoryRowSource;

/// One row as read from the store. Either column may be missing.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRow {
    pub id: Option<i32>,
    pub embedding: Option<RawArray>,
}

impl SourceRow {
    pub fn new(id: i32, embedding: &[f32]) -> Self {
        Self {
            id: Some(id),
            embedding: Some(RawArray::float4(embedding)),
        }
    }
}

/// A finite, ordered read of every row.
///
/// `fetch` is all-or-nothing: it returns the complete row set or an error,
/// never a prefix. Failures surface as `KnnError::DataSource`.
pub trait RowSource {
    fn fetch(&mut self) -> Result<Vec<SourceRow>>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn fetch(&mut self) -> Result<Vec<SourceRow>> {
        (**self).fetch()
    }
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    fn fetch(&mut self) -> Result<Vec<SourceRow>> {
        (**self).fetch()
    }
}

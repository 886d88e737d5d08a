//! In-memory row source.

use crate::error::Result;
use crate::source::{RowSource, SourceRow};

#[derive(Clone, Debug, Default)]
pub struct MemoryRowSource {
    rows: Vec<SourceRow>,
}

impl MemoryRowSource {
    pub fn new(rows: Vec<SourceRow>) -> Self {
        Self { rows }
    }

    /// Fully populated rows from `(id, embedding)` pairs.
    pub fn from_pairs<V: AsRef<[f32]>>(pairs: impl IntoIterator<Item = (i32, V)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, v)| SourceRow::new(id, v.as_ref()))
                .collect(),
        )
    }

    pub fn push(&mut self, row: SourceRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowSource for MemoryRowSource {
    fn fetch(&mut self) -> Result<Vec<SourceRow>> {
        Ok(self.rows.clone())
    }
}

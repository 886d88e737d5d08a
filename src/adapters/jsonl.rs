// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! JSON-lines row source.
//!
//! One object per line: `{"id": 10, "embedding": [0.0, 1.5]}`. Either field may
//! be `null` or absent; those rows are rejected later by the search, not here.
//! Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::codec::RawArray;
use crate::error::{KnnError, Result};
use crate::source::{RowSource, SourceRow};

#[derive(Deserialize)]
struct JsonRow {
    #[serde(default)]
    id: Option<i32>,
    #[serde(default)]
    embedding: Option<Value>,
}

pub struct JsonLinesSource {
    path: PathBuf,
}

impl JsonLinesSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for JsonLinesSource {
    fn fetch(&mut self) -> Result<Vec<SourceRow>> {
        let file = File::open(&self.path)
            .map_err(|e| KnnError::DataSource(format!("{}: {}", self.path.display(), e)))?;
        let rows = parse_rows(BufReader::new(file))?;
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "read JSON-lines rows");
        Ok(rows)
    }
}

/// Parses every line up front so a bad line fails the whole read.
pub fn parse_rows<R: BufRead>(reader: R) -> Result<Vec<SourceRow>> {
    let mut rows = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let row: JsonRow = serde_json::from_str(trimmed)
            .map_err(|e| KnnError::DataSource(format!("line {}: {}", i + 1, e)))?;

        rows.push(SourceRow {
            id: row.id,
            embedding: row.embedding.as_ref().map(RawArray::from_json).transpose()?,
        });
    }

    Ok(rows)
}

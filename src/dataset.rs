// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Flat, row-major dataset built once per call.

use crate::config::MAX_DIMENSION;
use crate::error::{KnnError, Result};
use crate::types::vector::Vector;

/// Validated `n`, `d`, `k` for an ad-hoc search. `k` is not yet clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub n: usize,
    pub d: usize,
    pub k: usize,
}

impl SearchParams {
    /// Checks positivity in the order n, d, k and reports the first offender.
    /// `d` is also bounded by [`MAX_DIMENSION`].
    pub fn validate(n: i64, d: i64, k: i64) -> Result<Self> {
        let n = positive("n", n)?;
        let d = positive("d", d)?;
        check_max_dim("d", d)?;
        Ok(Self { n, d, k: positive("k", k)? })
    }
}

pub(crate) fn check_max_dim(what: &'static str, d: usize) -> Result<()> {
    if d > MAX_DIMENSION {
        return Err(KnnError::DimensionTooLarge { what, found: d, max: MAX_DIMENSION });
    }
    Ok(())
}

pub(crate) fn positive(name: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(KnnError::InvalidParameter { name, value });
    }
    usize::try_from(value).map_err(|_| KnnError::InvalidParameter { name, value })
}

/// Caps `k` at the dataset size. Asking for more neighbors than rows is not an error.
pub fn clamp_k(k: usize, n: usize) -> usize {
    if k > n {
        tracing::warn!("k={} exceeds dataset size {}; clamping to {}", k, n, n);
        n
    } else {
        k
    }
}

/// `n` vectors of dimension `d`, stored contiguously. Row `i` is `data[i*d..i*d+d]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatDataset {
    n: usize,
    d: usize,
    data: Vec<f32>,
}

impl FlatDataset {
    pub fn new(n: usize, d: usize, data: Vec<f32>) -> Result<Self> {
        if n > 0 && d == 0 {
            return Err(KnnError::InvalidParameter { name: "d", value: 0 });
        }

        let expected = n.checked_mul(d).ok_or(KnnError::InvalidParameter {
            name: "n",
            value: i64::try_from(n).unwrap_or(i64::MAX),
        })?;

        if data.len() != expected {
            return Err(KnnError::LengthMismatch {
                what: "data".to_string(),
                expected,
                found: data.len(),
            });
        }

        Ok(Self { n, d, data })
    }

    pub fn empty(d: usize) -> Self {
        Self { n: 0, d, data: Vec::new() }
    }

    /// The query must have exactly `d` dimensions.
    pub fn check_query(&self, query: &Vector) -> Result<()> {
        check_dim("query vector", self.d, query)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn dim(&self) -> usize {
        self.d
    }

    /// Row `i`, or `None` past the last row.
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i >= self.n {
            return None;
        }
        let start = i.checked_mul(self.d)?;
        self.data.get(start..start.checked_add(self.d)?)
    }

    pub fn rows(&self) -> core::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.d.max(1))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

pub(crate) fn check_dim(what: &str, d: usize, vector: &Vector) -> Result<()> {
    if vector.dim() != d {
        return Err(KnnError::LengthMismatch {
            what: what.to_string(),
            expected: d,
            found: vector.dim(),
        });
    }
    Ok(())
}

/// Accumulates rows one at a time, checking each against the fixed dimension.
#[derive(Debug)]
pub struct DatasetBuilder {
    d: usize,
    n: usize,
    data: Vec<f32>,
}

impl DatasetBuilder {
    pub fn new(d: usize) -> Self {
        Self::with_capacity(d, 0)
    }

    pub fn with_capacity(d: usize, rows: usize) -> Self {
        Self {
            d,
            n: 0,
            data: Vec::with_capacity(rows.saturating_mul(d)),
        }
    }

    /// `row` is only used to label the error.
    pub fn push(&mut self, row: usize, vector: &Vector) -> Result<()> {
        check_dim(&format!("row {} embedding", row), self.d, vector)?;
        self.data.extend_from_slice(vector.as_slice());
        self.n += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn finish(self) -> FlatDataset {
        FlatDataset {
            n: self.n,
            d: self.d,
            data: self.data,
        }
    }
}

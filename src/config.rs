// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants and search tuning.

/// Row count at which the distance scan is split across rayon workers.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 16_384;

/// Rows handed to a single worker per parallel block.
pub const DEFAULT_CHUNK_ROWS: usize = 4_096;

/// Largest vector dimension accepted from a caller or a data file.
pub const MAX_DIMENSION: usize = 65_536;

/// Tuning knobs for the brute-force scan. None of them affect results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub parallel_threshold: usize,
    pub chunk_rows: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_rows: DEFAULT_CHUNK_ROWS,
        }
    }
}

impl SearchConfig {
    /// Never split the scan.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.parallel_threshold = rows;
        self
    }

    /// Zero is treated as one.
    pub fn with_chunk_rows(mut self, rows: usize) -> Self {
        self.chunk_rows = rows.max(1);
        self
    }

    pub fn is_parallel_for(&self, n: usize) -> bool {
        n >= self.parallel_threshold && n > self.chunk_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_never_splits() {
        let cfg = SearchConfig::sequential();
        assert!(!cfg.is_parallel_for(usize::MAX - 1));
    }

    #[test]
    fn test_max_dimension_fits_int4() {
        assert!(i32::try_from(MAX_DIMENSION).is_ok());
    }

    #[test]
    fn test_chunk_rows_floor() {
        let cfg = SearchConfig::default().with_chunk_rows(0);
        assert_eq!(cfg.chunk_rows, 1);
    }

    #[test]
    fn test_small_dataset_stays_sequential() {
        // Threshold met, but a single chunk covers every row.
        let cfg = SearchConfig::default()
            .with_parallel_threshold(1)
            .with_chunk_rows(100);
        assert!(!cfg.is_parallel_for(100));
        assert!(cfg.is_parallel_for(101));
    }
}

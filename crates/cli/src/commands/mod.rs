// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod flat;
pub mod table;

use clap::Args;
use flatknn::config::{SearchConfig, DEFAULT_CHUNK_ROWS, DEFAULT_PARALLEL_THRESHOLD};

/// Scan tuning shared by every command.
#[derive(Args, Clone, Copy, Debug)]
pub struct ScanOpts {
    /// Rows at which the scan is split across worker threads
    #[arg(long, global = true, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    pub parallel_threshold: usize,

    /// Rows per worker block
    #[arg(long, global = true, default_value_t = DEFAULT_CHUNK_ROWS)]
    pub chunk_rows: usize,

    /// Never split the scan
    #[arg(long, global = true)]
    pub sequential: bool,
}

impl Default for ScanOpts {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_rows: DEFAULT_CHUNK_ROWS,
            sequential: false,
        }
    }
}

impl ScanOpts {
    pub fn config(&self) -> SearchConfig {
        let base = if self.sequential {
            SearchConfig::sequential()
        } else {
            SearchConfig::default().with_parallel_threshold(self.parallel_threshold)
        };
        base.with_chunk_rows(self.chunk_rows)
    }
}

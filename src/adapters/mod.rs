// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! File-backed row sources.
pub mod fvecs;
pub mod jsonl;

pub use fvecs::FvecsSource;
pub use jsonl::JsonLinesSource;

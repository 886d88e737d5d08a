// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Command-line arguments to host arrays and row sources.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use flatknn::adapters::fvecs::read_fvecs_flat;
use flatknn::adapters::{FvecsSource, JsonLinesSource};
use flatknn::codec::RawArray;
use flatknn::source::RowSource;

/// A JSON literal, or `@path` to a file holding one.
pub fn parse_array(arg: &str) -> Result<RawArray> {
    let text = match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?,
        None => arg.to_string(),
    };
    let value: serde_json::Value =
        serde_json::from_str(&text).context("Invalid JSON array. Expected [x, y, z]")?;
    Ok(RawArray::from_json(&value)?)
}

pub enum DataInput {
    Json(RawArray),
    /// Shape comes from the file itself.
    Fvecs { n: usize, d: usize, data: RawArray },
}

pub fn load_data(arg: &str) -> Result<DataInput> {
    if is_fvecs(arg) {
        let (n, d, data) = read_fvecs_flat(arg).with_context(|| format!("Failed to load {}", arg))?;
        return Ok(DataInput::Fvecs { n, d, data: RawArray::float4(&data) });
    }
    Ok(DataInput::Json(parse_array(arg)?))
}

/// `.fvecs` files are binary records; anything else is read as JSON lines.
pub fn open_rows(path: &str, first_id: i32) -> Box<dyn RowSource> {
    if is_fvecs(path) {
        Box::new(FvecsSource::with_first_id(path, first_id))
    } else {
        Box::new(JsonLinesSource::new(path))
    }
}

fn is_fvecs(arg: &str) -> bool {
    Path::new(arg)
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("fvecs"))
}

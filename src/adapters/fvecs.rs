// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! `.fvecs` files: per record, a little-endian i32 dimension followed by that
//! many little-endian f32 values.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::codec::RawArray;
use crate::config::MAX_DIMENSION;
use crate::error::{KnnError, Result};
use crate::source::{RowSource, SourceRow};

/// Row source over an `.fvecs` file. Record `i` gets identifier `first_id + i`.
pub struct FvecsSource {
    path: PathBuf,
    first_id: i32,
}

impl FvecsSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_first_id(path, 0)
    }

    pub fn with_first_id(path: impl AsRef<Path>, first_id: i32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            first_id,
        }
    }
}

impl RowSource for FvecsSource {
    fn fetch(&mut self) -> Result<Vec<SourceRow>> {
        let records = read_fvecs(open(&self.path)?)?;

        let mut rows = Vec::with_capacity(records.len());
        for (i, values) in records.iter().enumerate() {
            let id = i32::try_from(i)
                .ok()
                .and_then(|i| self.first_id.checked_add(i))
                .ok_or_else(|| KnnError::DataSource(format!("record {}: identifier overflows int4", i)))?;
            rows.push(SourceRow {
                id: Some(id),
                embedding: Some(RawArray::float4(values)),
            });
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "read fvecs rows");
        Ok(rows)
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| KnnError::DataSource(format!("{}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Reads every record. A record cut short, or a dimension header above
/// [`MAX_DIMENSION`], is an error.
pub fn read_fvecs<R: BufRead>(mut reader: R) -> Result<Vec<Vec<f32>>> {
    let mut records = Vec::new();

    loop {
        if reader.fill_buf()?.is_empty() {
            break;
        }

        let index = records.len();
        let dim = reader
            .read_i32::<LittleEndian>()
            .map_err(|_| KnnError::DataSource(format!("record {}: truncated dimension header", index)))?;
        let dim = usize::try_from(dim)
            .map_err(|_| KnnError::DataSource(format!("record {}: negative dimension {}", index, dim)))?;
        if dim > MAX_DIMENSION {
            return Err(KnnError::DataSource(format!(
                "record {}: dimension {} exceeds maximum {}",
                index, dim, MAX_DIMENSION
            )));
        }

        let mut values = vec![0f32; dim];
        reader
            .read_f32_into::<LittleEndian>(&mut values)
            .map_err(|_| KnnError::DataSource(format!("record {}: truncated after dimension {}", index, dim)))?;
        records.push(values);
    }

    Ok(records)
}

/// Loads a whole file as one flat buffer. Returns `(n, d, data)`.
pub fn read_fvecs_flat(path: impl AsRef<Path>) -> Result<(usize, usize, Vec<f32>)> {
    let records = read_fvecs(open(path.as_ref())?)?;

    let d = records.first().map_or(0, Vec::len);
    let mut data = Vec::with_capacity(records.len() * d);
    for (i, values) in records.iter().enumerate() {
        if values.len() != d {
            return Err(KnnError::DataSource(format!(
                "record {} has dimension {}, expected {}",
                i,
                values.len(),
                d
            )));
        }
        data.extend_from_slice(values);
    }

    Ok((records.len(), d, data))
}

pub fn write_fvecs<W: Write, V: AsRef<[f32]>>(mut writer: W, records: &[V]) -> Result<()> {
    for values in records {
        let values = values.as_ref();
        let dim = i32::try_from(values.len())
            .map_err(|_| KnnError::DataSource(format!("dimension {} overflows i32", values.len())))?;
        writer.write_i32::<LittleEndian>(dim)?;
        for v in values {
            writer.write_f32::<LittleEndian>(*v)?;
        }
    }
    writer.flush()?;
    Ok(())
}

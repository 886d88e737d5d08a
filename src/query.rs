// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The two search operations.
//!
//! Both run synchronously to completion and build everything they need from
//! scratch: validate inputs, build a [`FlatDataset`], scan it, and (for the
//! table flow) translate positions back to row identifiers. Any failure aborts
//! the call before a partial dataset is searched.

use crate::codec::{ArrayCodec, Float4Codec, RawArray};
use crate::config::SearchConfig;
use crate::dataset::{check_dim, check_max_dim, clamp_k, positive, DatasetBuilder, FlatDataset, SearchParams};
use crate::error::{KnnError, Result};
use crate::index::{BruteForceIndex, Neighbor, VectorIndex};
use crate::remap::{check_positions, IdentifierTable, ScoredId};
use crate::source::RowSource;
use crate::types::id::RowId;
use crate::types::vector::Vector;

#[derive(Clone, Debug, Default)]
pub struct QueryEngine<C: ArrayCodec = Float4Codec> {
    config: SearchConfig,
    codec: C,
}

impl QueryEngine<Float4Codec> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_codec(config, Float4Codec)
    }
}

impl<C: ArrayCodec> QueryEngine<C> {
    pub fn with_codec(config: SearchConfig, codec: C) -> Self {
        Self { config, codec }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Ad-hoc search over `data`, an `n * d` row-major buffer.
    /// Returns zero-based row positions, nearest first, `min(k, n)` of them.
    pub fn search_flat(
        &self,
        query: &RawArray,
        data: &RawArray,
        n: i64,
        d: i64,
        k: i64,
    ) -> Result<Vec<usize>> {
        Ok(self
            .search_flat_scored(query, data, n, d, k)?
            .into_iter()
            .map(|nb| nb.position)
            .collect())
    }

    /// Like [`search_flat`](Self::search_flat), keeping distances.
    pub fn search_flat_scored(
        &self,
        query: &RawArray,
        data: &RawArray,
        n: i64,
        d: i64,
        k: i64,
    ) -> Result<Vec<Neighbor>> {
        let query = self.codec.decode_vector(query)?;
        let data = self.codec.decode_vector(data)?;

        let params = SearchParams::validate(n, d, k)?;
        check_dim("query vector", params.d, &query)?;
        let dataset = FlatDataset::new(params.n, params.d, data.into_inner())?;
        let k = clamp_k(params.k, dataset.len());

        tracing::debug!(n = params.n, d = params.d, k, "flat search");

        ranked(&BruteForceIndex::with_config(&dataset, self.config), &query, k)
    }

    /// [`search_flat`](Self::search_flat) encoded back into a host array.
    pub fn search_flat_array(
        &self,
        query: &RawArray,
        data: &RawArray,
        n: i64,
        d: i64,
        k: i64,
    ) -> Result<RawArray> {
        let positions = self.search_flat(query, data, n, d, k)?;
        let ids = positions
            .into_iter()
            .map(|p| i32::try_from(p).map_err(|_| KnnError::InvalidParameter { name: "n", value: n }))
            .collect::<Result<Vec<i32>>>()?;
        Ok(self.codec.encode_ids(&ids))
    }

    /// Searches every row of `source`; the dimension comes from `query`.
    /// Returns row identifiers, nearest first. An empty source yields an empty result.
    pub fn search_table<S: RowSource + ?Sized>(
        &self,
        source: &mut S,
        query: &RawArray,
        k: i64,
    ) -> Result<Vec<RowId>> {
        Ok(self
            .search_table_scored(source, query, k)?
            .into_iter()
            .map(|hit| hit.id)
            .collect())
    }

    pub fn search_table_scored<S: RowSource + ?Sized>(
        &self,
        source: &mut S,
        query: &RawArray,
        k: i64,
    ) -> Result<Vec<ScoredId>> {
        let k = positive("k", k)?;

        let query = self.codec.decode_vector(query)?;
        if query.is_empty() {
            return Err(KnnError::InvalidParameter { name: "query length", value: 0 });
        }
        let d = query.dim();
        check_max_dim("query length", d)?;

        let rows = source.fetch()?;
        tracing::debug!(rows = rows.len(), d, "fetched rows");
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids = IdentifierTable::with_capacity(rows.len());
        let mut builder = DatasetBuilder::with_capacity(d, rows.len());

        for (i, row) in rows.iter().enumerate() {
            let id = row.id.ok_or_else(|| KnnError::NullElement {
                what: format!("row {} id", i),
            })?;
            let embedding = row.embedding.as_ref().ok_or_else(|| KnnError::NullElement {
                what: format!("row {} embedding", i),
            })?;

            let vector = self.codec.decode_vector(embedding)?;
            builder.push(i, &vector)?;
            ids.push(RowId(id));
        }

        let dataset = builder.finish();
        let k = clamp_k(k, dataset.len());

        tracing::debug!(n = dataset.len(), d, k, "table search");

        let neighbors = BruteForceIndex::with_config(&dataset, self.config).search(&query, k)?;
        ids.remap_scored(&neighbors)
    }

    /// [`search_table`](Self::search_table) encoded back into a host array.
    pub fn search_table_array<S: RowSource + ?Sized>(
        &self,
        source: &mut S,
        query: &RawArray,
        k: i64,
    ) -> Result<RawArray> {
        let ids: Vec<i32> = self
            .search_table(source, query, k)?
            .into_iter()
            .map(|id| id.0)
            .collect();
        Ok(self.codec.encode_ids(&ids))
    }
}

/// Searches `index`, then checks every returned position against its length.
fn ranked<I: VectorIndex + ?Sized>(index: &I, query: &Vector, k: usize) -> Result<Vec<Neighbor>> {
    let neighbors = index.search(query, k)?;
    check_positions(&neighbors, index.len())?;
    Ok(neighbors)
}

/// Ad-hoc search with the default engine.
pub fn search_flat(query: &RawArray, data: &RawArray, n: i64, d: i64, k: i64) -> Result<Vec<usize>> {
    QueryEngine::new(SearchConfig::default()).search_flat(query, data, n, d, k)
}

/// Table-backed search with the default engine.
pub fn search_table<S: RowSource + ?Sized>(source: &mut S, query: &RawArray, k: i64) -> Result<Vec<RowId>> {
    QueryEngine::new(SearchConfig::default()).search_table(source, query, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Reports one row but answers with a position past it.
    struct OffByOne;

    impl VectorIndex for OffByOne {
        fn len(&self) -> usize {
            1
        }

        fn search(&self, _query: &Vector, _k: usize) -> Result<Vec<Neighbor>> {
            Ok(vec![Neighbor::new(0.0, 0), Neighbor::new(0.0, 1)])
        }
    }

    #[test]
    fn test_ranked_rejects_out_of_range_position() {
        let err = ranked(&OffByOne, &Vector::new(vec![0.0]), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalConsistency);
        assert!(matches!(err, KnnError::InternalConsistency { position: 1, len: 1 }));
    }

    #[test]
    fn test_ranked_passes_valid_positions() {
        let ds = FlatDataset::new(2, 1, vec![3.0, 1.0]).unwrap();
        let hits = ranked(&BruteForceIndex::new(&ds), &Vector::new(vec![0.0]), 2).unwrap();
        assert_eq!(hits, vec![Neighbor::new(1.0, 1), Neighbor::new(9.0, 0)]);
    }
}

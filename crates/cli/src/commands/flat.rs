use anyhow::Context;
use clap::Args;
use flatknn::query::QueryEngine;

use crate::commands::ScanOpts;
use crate::input::{load_data, parse_array, DataInput};
use crate::output::{render, Hit, OutputFormat};

#[derive(Args, Clone, Debug)]
pub struct FlatArgs {
    /// Query vector as JSON, e.g. '[0.0, 1.5]', or @file.json
    #[arg(long, short)]
    pub query: String,

    /// Flattened dataset as JSON or @file.json, or a path to an .fvecs file
    #[arg(long)]
    pub data: String,

    /// Number of vectors (taken from the file for .fvecs data)
    #[arg(short)]
    pub n: Option<i64>,

    /// Dimension (taken from the file for .fvecs data)
    #[arg(short)]
    pub d: Option<i64>,

    /// Neighbors to return
    #[arg(short, default_value_t = 10)]
    pub k: i64,

    /// Include distances
    #[arg(long)]
    pub scores: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

pub fn execute(args: &FlatArgs, scan: &ScanOpts) -> anyhow::Result<Vec<Hit>> {
    let query = parse_array(&args.query).context("Failed to parse query")?;

    let (n, d, data) = match load_data(&args.data)? {
        DataInput::Json(data) => (
            args.n.context("-n is required for JSON data")?,
            args.d.context("-d is required for JSON data")?,
            data,
        ),
        DataInput::Fvecs { n, d, data } => (
            args.n.unwrap_or(n as i64),
            args.d.unwrap_or(d as i64),
            data,
        ),
    };

    let engine = QueryEngine::new(scan.config());
    let neighbors = engine.search_flat_scored(&query, &data, n, d, args.k)?;

    Ok(neighbors
        .iter()
        .enumerate()
        .map(|(rank, nb)| Hit {
            rank: rank + 1,
            key: nb.position as i64,
            distance: nb.distance,
        })
        .collect())
}

pub fn run(args: &FlatArgs, scan: &ScanOpts) -> anyhow::Result<()> {
    let hits = execute(args, scan)?;
    tracing::info!("{} neighbors", hits.len());
    println!("{}", render(&hits, "index", args.scores, args.format));
    Ok(())
}

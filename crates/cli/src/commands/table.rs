use anyhow::Context;
use clap::Args;
use flatknn::query::QueryEngine;

use crate::commands::ScanOpts;
use crate::input::{open_rows, parse_array};
use crate::output::{render, Hit, OutputFormat};

#[derive(Args, Clone, Debug)]
pub struct TableArgs {
    /// Query vector as JSON, e.g. '[0.0, 1.5]', or @file.json
    #[arg(long, short)]
    pub query: String,

    /// Row file: JSON lines of {"id", "embedding"}, or .fvecs
    #[arg(long)]
    pub rows: String,

    /// Identifier of the first record in an .fvecs file
    #[arg(long, default_value_t = 0)]
    pub first_id: i32,

    /// Neighbors to return
    #[arg(short, default_value_t = 10)]
    pub k: i64,

    /// Include distances
    #[arg(long)]
    pub scores: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

pub fn execute(args: &TableArgs, scan: &ScanOpts) -> anyhow::Result<Vec<Hit>> {
    let query = parse_array(&args.query).context("Failed to parse query")?;
    let mut source = open_rows(&args.rows, args.first_id);

    let engine = QueryEngine::new(scan.config());
    let hits = engine
        .search_table_scored(&mut source, &query, args.k)
        .with_context(|| format!("Search over {} failed", args.rows))?;

    Ok(hits
        .iter()
        .enumerate()
        .map(|(rank, hit)| Hit {
            rank: rank + 1,
            key: i64::from(hit.id.0),
            distance: hit.distance,
        })
        .collect())
}

pub fn run(args: &TableArgs, scan: &ScanOpts) -> anyhow::Result<()> {
    let hits = execute(args, scan)?;
    tracing::info!("{} neighbors", hits.len());
    println!("{}", render(&hits, "id", args.scores, args.format));
    Ok(())
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

/// One ranked result. `key` is a row position or a row identifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hit {
    pub rank: usize,
    pub key: i64,
    pub distance: f32,
}

pub fn render(hits: &[Hit], key_label: &str, scores: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => render_json(hits, key_label, scores),
        OutputFormat::Table => render_table(hits, key_label, scores),
    }
}

fn render_json(hits: &[Hit], key_label: &str, scores: bool) -> String {
    let value = if scores {
        serde_json::Value::Array(
            hits.iter()
                .map(|h| {
                    let mut obj = serde_json::Map::new();
                    obj.insert(key_label.to_string(), serde_json::Value::from(h.key));
                    obj.insert("distance".to_string(), serde_json::Value::from(h.distance));
                    serde_json::Value::Object(obj)
                })
                .collect(),
        )
    } else {
        serde_json::Value::Array(hits.iter().map(|h| serde_json::Value::from(h.key)).collect())
    };
    value.to_string()
}

fn render_table(hits: &[Hit], key_label: &str, scores: bool) -> String {
    let mut header = vec!["Rank".to_string(), key_label.to_string()];
    if scores {
        header.push("Distance".to_string());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for hit in hits {
        let mut row = vec![hit.rank.to_string(), hit.key.to_string()];
        if scores {
            row.push(hit.distance.to_string());
        }
        table.add_row(row);
    }

    table.to_string()
}

use crate::adapters::fvecs::{read_fvecs, read_fvecs_flat, write_fvecs, FvecsSource};
use crate::adapters::jsonl::{parse_rows, JsonLinesSource};
use crate::codec::RawArray;
use crate::error::ErrorKind;
use crate::source::{MemoryRowSource, RowSource, SourceRow};
use std::io::{Cursor, Write};

#[test]
fn test_memory_source_repeatable() {
    let mut src = MemoryRowSource::from_pairs(vec![(10, vec![0.0f32, 0.0]), (20, vec![1.0f32, 1.0])]);
    let first = src.fetch().unwrap();
    let second = src.fetch().unwrap();
    assert_eq!(first, second);
    assert_eq!(first[1], SourceRow::new(20, &[1.0, 1.0]));
}

#[test]
fn test_jsonl_parse() {
    let text = "{\"id\": 1, \"embedding\": [0.5, 1.0]}\n\n{\"id\": null, \"embedding\": [2]}\n{\"id\": 3}\n";
    let rows = parse_rows(Cursor::new(text)).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], SourceRow::new(1, &[0.5, 1.0]));
    assert_eq!(rows[1].id, None);
    assert_eq!(rows[1].embedding, Some(RawArray::float4(&[2.0])));
    assert_eq!(rows[2].embedding, None);
}

#[test]
fn test_jsonl_bad_line_names_line() {
    let text = "{\"id\": 1, \"embedding\": [0.5]}\n{not json}\n";
    let err = parse_rows(Cursor::new(text)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataSource);
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_jsonl_file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{\"id\": 7, \"embedding\": [1, 2, 3]}}").unwrap();
    let mut src = JsonLinesSource::new(file.path());
    let rows = src.fetch().unwrap();
    assert_eq!(rows, vec![SourceRow::new(7, &[1.0, 2.0, 3.0])]);
}

#[test]
fn test_jsonl_missing_file() {
    let mut src = JsonLinesSource::new("/nonexistent/rows.jsonl");
    assert_eq!(src.fetch().unwrap_err().kind(), ErrorKind::DataSource);
}

#[test]
fn test_fvecs_roundtrip_and_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("base.fvecs");
    let records = vec![vec![0.0f32, 0.0], vec![1.0, 1.0], vec![5.0, 5.0]];
    write_fvecs(std::fs::File::create(&path).unwrap(), &records).unwrap();

    let rows = FvecsSource::with_first_id(&path, 100).fetch().unwrap();
    let ids: Vec<Option<i32>> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(100), Some(101), Some(102)]);

    let (n, d, data) = read_fvecs_flat(&path).unwrap();
    assert_eq!((n, d), (3, 2));
    assert_eq!(data, vec![0.0, 0.0, 1.0, 1.0, 5.0, 5.0]);
}

#[test]
fn test_fvecs_truncated() {
    let mut buf = Vec::new();
    write_fvecs(&mut buf, &[vec![1.0f32, 2.0]]).unwrap();
    buf.truncate(buf.len() - 2);
    let err = read_fvecs(Cursor::new(buf)).unwrap_err();
    assert!(err.to_string().contains("record 0"));
}

#[test]
fn test_fvecs_oversized_header_rejected() {
    use crate::config::MAX_DIMENSION;

    // Header claims i32::MAX floats, followed by a single value.
    let mut buf = i32::MAX.to_le_bytes().to_vec();
    buf.extend_from_slice(&1.0f32.to_le_bytes());
    let err = read_fvecs(Cursor::new(buf)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataSource);
    assert!(err.to_string().contains("exceeds maximum"));

    let mut buf = ((MAX_DIMENSION + 1) as i32).to_le_bytes().to_vec();
    buf.extend_from_slice(&[0u8; 8]);
    assert_eq!(read_fvecs(Cursor::new(buf)).unwrap_err().kind(), ErrorKind::DataSource);
}

#[test]
fn test_fvecs_flat_ragged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.fvecs");
    write_fvecs(
        std::fs::File::create(&path).unwrap(),
        &[vec![1.0f32, 2.0], vec![3.0]],
    )
    .unwrap();
    let err = read_fvecs_flat(&path).unwrap_err();
    assert!(err.to_string().contains("record 1 has dimension 1, expected 2"));
}

#[test]
fn test_jsonl_ragged_embedding_is_shape_error() {
    let text = "{\"id\": 1, \"embedding\": [[0.5], [1.0, 2.0]]}\n";
    assert_eq!(parse_rows(Cursor::new(text)).unwrap_err().kind(), ErrorKind::Shape);
}

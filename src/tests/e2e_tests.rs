use crate::codec::RawArray;
use crate::error::ErrorKind;
use crate::query::{search_flat, search_table};
use crate::source::MemoryRowSource;
use crate::types::id::RowId;
use serde_json::json;

#[test]
fn test_flat_example_from_json() {
    // data = [[0,0],[1,1],[5,5]] flattened, query = [0,0], k = 2
    let data = RawArray::from_json(&json!([0, 0, 1, 1, 5, 5])).unwrap();
    let query = RawArray::from_json(&json!([0, 0])).unwrap();
    assert_eq!(search_flat(&query, &data, 3, 2, 2).unwrap(), vec![0, 1]);
}

#[test]
fn test_flat_nested_data_is_rejected() {
    let data = RawArray::from_json(&json!([[0, 0], [1, 1], [5, 5]])).unwrap();
    let query = RawArray::from_json(&json!([0, 0])).unwrap();
    assert_eq!(search_flat(&query, &data, 3, 2, 2).unwrap_err().kind(), ErrorKind::Shape);
}

#[test]
fn test_flat_ragged_query_is_rejected() {
    let data = RawArray::float4(&[1.0, 2.0, 0.0, 0.0]);
    let err = RawArray::from_json(&json!([1, [2]]))
        .and_then(|query| search_flat(&query, &data, 2, 2, 1))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn test_table_example() {
    let mut src = MemoryRowSource::from_pairs(vec![(10, [0.0f32, 0.0]), (20, [1.0f32, 1.0])]);
    let got = search_table(&mut src, &RawArray::float4(&[0.0, 0.0]), 5).unwrap();
    assert_eq!(got, vec![RowId(10), RowId(20)]);
}

#[test]
fn test_identity_query_first() {
    let rows: Vec<(i32, [f32; 3])> = vec![
        (1, [0.3, 0.1, 0.9]),
        (2, [0.5, 0.5, 0.5]),
        (3, [0.9, 0.9, 0.1]),
    ];
    let mut src = MemoryRowSource::from_pairs(rows.clone());
    for (id, v) in rows {
        let got = search_table(&mut src, &RawArray::float4(&v), 1).unwrap();
        assert_eq!(got, vec![RowId(id)]);
    }
}

#[test]
fn test_data_length_error_before_search() {
    let data = RawArray::float4(&[0.0; 5]);
    let err = search_flat(&RawArray::float4(&[0.0, 0.0]), &data, 3, 2, 1).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('5') && msg.contains('6'), "{}", msg);
}

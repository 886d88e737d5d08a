use crate::dataset::{clamp_k, DatasetBuilder, FlatDataset, SearchParams};
use crate::error::{ErrorKind, KnnError};
use crate::types::vector::Vector;

#[test]
fn test_params_positive() {
    let p = SearchParams::validate(3, 2, 5).unwrap();
    assert_eq!(p, SearchParams { n: 3, d: 2, k: 5 });
}

#[test]
fn test_params_name_offender() {
    let cases = [((0, 2, 1), "n"), ((3, -1, 1), "d"), ((3, 2, 0), "k")];
    for ((n, d, k), name) in cases {
        match SearchParams::validate(n, d, k).unwrap_err() {
            KnnError::InvalidParameter { name: got, .. } => assert_eq!(got, name),
            other => panic!("unexpected error {:?}", other),
        }
    }
}

#[test]
fn test_params_checks_n_first() {
    // All three invalid: n is reported.
    let err = SearchParams::validate(0, 0, 0).unwrap_err();
    assert!(err.to_string().starts_with("n must be positive"));
}

#[test]
fn test_params_bound_dimension() {
    use crate::config::MAX_DIMENSION;

    let d = MAX_DIMENSION as i64;
    assert_eq!(SearchParams::validate(1, d, 1).unwrap().d, MAX_DIMENSION);

    let err = SearchParams::validate(1, d + 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert!(matches!(err, KnnError::DimensionTooLarge { what: "d", .. }));
}

#[test]
fn test_clamp_k() {
    assert_eq!(clamp_k(5, 2), 2);
    assert_eq!(clamp_k(2, 2), 2);
    assert_eq!(clamp_k(1, 2), 1);
}

#[test]
fn test_dataset_rows() {
    let ds = FlatDataset::new(3, 2, vec![0.0, 0.0, 1.0, 1.0, 5.0, 5.0]).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.dim(), 2);
    assert_eq!(ds.row(2), Some(&[5.0, 5.0][..]));
    assert_eq!(ds.rows().count(), 3);
}

#[test]
fn test_dataset_row_out_of_range() {
    let ds = FlatDataset::new(3, 2, vec![0.0; 6]).unwrap();
    assert!(ds.row(3).is_none());
    assert!(ds.row(usize::MAX).is_none());
    assert!(FlatDataset::empty(4).row(0).is_none());
}

#[test]
fn test_dataset_length_mismatch_reports_both() {
    let err = FlatDataset::new(3, 2, vec![0.0; 5]).unwrap_err();
    assert!(matches!(
        err,
        KnnError::LengthMismatch { expected: 6, found: 5, .. }
    ));
    assert_eq!(err.to_string(), "data length (5) must equal 6");
}

#[test]
fn test_dataset_rejects_zero_dim_with_rows() {
    assert_eq!(
        FlatDataset::new(2, 0, vec![]).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
}

#[test]
fn test_query_dim_check() {
    let ds = FlatDataset::new(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
    assert!(ds.check_query(&Vector::new(vec![0.0; 3])).is_ok());
    let err = ds.check_query(&Vector::new(vec![0.0; 2])).unwrap_err();
    assert!(matches!(err, KnnError::LengthMismatch { expected: 3, found: 2, .. }));
}

#[test]
fn test_builder_labels_row() {
    let mut b = DatasetBuilder::new(2);
    b.push(0, &Vector::new(vec![1.0, 2.0])).unwrap();
    let err = b.push(1, &Vector::new(vec![1.0])).unwrap_err();
    assert!(err.to_string().contains("row 1 embedding"));
    assert!(err.to_string().contains("(1)"));

    let ds = b.finish();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_empty_dataset() {
    let ds = FlatDataset::empty(4);
    assert!(ds.is_empty());
    assert_eq!(ds.rows().count(), 0);
}

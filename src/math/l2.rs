//! Squared L2 distance.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

/// Computes ||a - b||^2.
///
/// Accumulates in `f32`, one dimension at a time in index order. The order is
/// fixed so the same pair always yields the same bits, whichever worker
/// computes it.
#[inline(always)]
pub fn l2_sq(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimension mismatch");

    let mut sum = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        let diff = x - y;
        sum += diff * diff;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_distance() {
        let a = vec![10.0, 20.0];
        let b = vec![12.0, 18.0];
        // (10-12)^2 + (20-18)^2 = 4 + 4
        assert_eq!(l2_sq(&a, &b), 8.0);
    }

    #[test]
    fn test_same_vector_is_zero() {
        let v = vec![3.0, -4.0, 0.5];
        assert_eq!(l2_sq(&v, &v), 0.0);
    }

    #[test]
    fn test_single_dimension() {
        assert_eq!(l2_sq(&[5.0], &[2.0]), 9.0);
    }

    #[test]
    fn test_symmetric() {
        let a = vec![1.5, -2.25, 7.0];
        let b = vec![-0.5, 3.0, 1.0];
        assert_eq!(l2_sq(&a, &b), l2_sq(&b, &a));
    }
}

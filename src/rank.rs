use log::debug;
use nalgebra::{linalg::SVD, DMatrix};

use crate::error::NumericError;
use crate::finite::NonFinite;

/// Numerical rank: the number of singular values above
/// `σ_max · max(nrows, ncols) · ε`, with ε the f64 machine epsilon. Robust
/// where a determinant sign test is not, e.g. rows that differ by a factor of
/// `1 + ε` from an exact multiple.
pub fn try_rank(a: &DMatrix<f64>) -> Result<usize, NumericError> {
    if let Some((row, col)) = a.non_finite_idx() {
        return Err(NumericError::NonFiniteEntry { row, col });
    }
    if a.nrows() == 0 || a.ncols() == 0 {
        return Ok(0);
    }
    let dim = a.nrows().max(a.ncols());
    let svd = SVD::try_new(a.clone(), false, false, f64::EPSILON, 100 * dim)
        .ok_or(NumericError::NonConvergence)?;
    let svals = &svd.singular_values;
    let tol = svals.max() * dim as f64 * f64::EPSILON;
    Ok(svals.iter().filter(|s| **s > tol).count())
}

/// Sentinel variant of [`try_rank`].
pub fn rank(a: &DMatrix<f64>) -> Option<usize> {
    try_rank(a).map_err(|e| debug!("rank: {}", e)).ok()
}

/// `true` iff the square matrix `a` has full numerical rank.
pub fn try_is_nonsingular(a: &DMatrix<f64>) -> Result<bool, NumericError> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(NumericError::NotSquare { rows, cols });
    }
    Ok(try_rank(a)? == rows)
}

/// Sentinel variant of [`try_is_nonsingular`]: `None` on non-square or
/// non-finite input, or if the singular value iteration fails.
pub fn is_nonsingular(a: &DMatrix<f64>) -> Option<bool> {
    try_is_nonsingular(a).map_err(|e| debug!("is_nonsingular: {}", e)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn non_square() {
        let a = DMatrix::from_row_slice(2, 3, &[1., 2., 3., 4., 5., 6.]);
        assert_eq!(is_nonsingular(&a), None);
        assert_eq!(
            try_is_nonsingular(&a),
            Err(NumericError::NotSquare { rows: 2, cols: 3 }),
        );
    }

    #[test]
    fn non_finite() {
        let a = DMatrix::from_row_slice(2, 2, &[1., 0., f64::NAN, 1.]);
        assert_eq!(is_nonsingular(&a), None);
        assert_eq!(
            try_is_nonsingular(&a),
            Err(NumericError::NonFiniteEntry { row: 1, col: 0 }),
        );
    }

    #[test]
    fn identity() {
        assert_eq!(is_nonsingular(&DMatrix::identity(2, 2)), Some(true));
        assert_eq!(rank(&DMatrix::identity(2, 2)), Some(2));
    }

    #[test]
    fn zeros() {
        assert_eq!(is_nonsingular(&DMatrix::zeros(2, 2)), Some(false));
        assert_eq!(rank(&DMatrix::zeros(2, 2)), Some(0));
    }

    #[test]
    fn scalar() {
        assert_eq!(is_nonsingular(&DMatrix::from_row_slice(1, 1, &[3.])), Some(true));
        assert_eq!(is_nonsingular(&DMatrix::from_row_slice(1, 1, &[0.])), Some(false));
    }

    #[test]
    fn exact_multiple_rows() {
        let a = DMatrix::from_row_slice(2, 2, &[1., 2., 2., 4.]);
        assert_eq!(is_nonsingular(&a), Some(false));
        assert_eq!(rank(&a), Some(1));
    }

    // Second row off an exact multiple of the first by one machine epsilon.
    // The determinant is nonzero, but the rank tolerance treats the smaller
    // singular value as zero.
    #[test]
    fn near_multiple_rows() {
        let ε = f64::EPSILON;
        let a = DMatrix::from_row_slice(2, 2, &[1., 2., 2., 4. + 4. * ε]);
        assert_eq!(is_nonsingular(&a), Some(false));
    }

    #[test]
    fn empty() {
        assert_eq!(is_nonsingular(&DMatrix::zeros(0, 0)), Some(true));
    }
}

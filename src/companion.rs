use log::debug;
use nalgebra::DMatrix;

use crate::error::NumericError;
use crate::finite::NonFinite;

/// Frobenius companion matrix of the polynomial
/// `w(x) = a_n·xⁿ + … + a_1·x + a_0`, coefficients ordered constant-first.
///
/// For `n = len − 1` the result is n×n with ones on the superdiagonal and the
/// monic-normalized, negated coefficients in the last row:
///
/// ```text
/// [        0,        1,   ...,          0 ]
/// [      ...,      ...,   ...,        ... ]
/// [        0,        0,   ...,          1 ]
/// [ -a_0/a_n, -a_1/a_n,   ..., -a_{n-1}/a_n ]
/// ```
///
/// Its eigenvalues are the roots of `w`.
pub fn try_companion(coef: &[f64]) -> Result<DMatrix<f64>, NumericError> {
    if coef.len() <= 1 {
        return Err(NumericError::DegreeTooLow(coef.len()));
    }
    if let Some(idx) = coef.non_finite_idx() {
        return Err(NumericError::NonFiniteCoefficient(idx));
    }
    let n = coef.len() - 1;
    let a_n = coef[n];
    // Exact-zero check only; a_n near zero is allowed and yields large entries.
    if a_n == 0. {
        return Err(NumericError::ZeroLeadingCoefficient);
    }
    let mut f = DMatrix::zeros(n, n);
    for i in 0..n - 1 {
        f[(i, i + 1)] = 1.;
    }
    for j in 0..n {
        f[(n - 1, j)] = -coef[j] / a_n;
    }
    Ok(f)
}

/// Sentinel variant of [`try_companion`]: `None` on any invalid input.
pub fn companion(coef: &[f64]) -> Option<DMatrix<f64>> {
    try_companion(coef).map_err(|e| debug!("companion: {}", e)).ok()
}

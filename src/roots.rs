use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use derive_more::Deref;
use itertools::Itertools;
use log::debug;
use nalgebra::{linalg::Schur, Complex, DVector, Normed};
use ordered_float::OrderedFloat;
use rand::Rng;

use crate::companion::try_companion;
use crate::error::NumericError;
use crate::finite::NonFinite;

/// Magnitude of the random offset added to each coefficient before solving.
/// Breaks exact degeneracies (repeated roots, symmetric coefficient patterns)
/// at the cost of exact reproducibility.
pub const PERTURBATION: f64 = 1e-10;

/// Roots of a real polynomial, in solver order (not sorted).
#[derive(Clone, Debug, Deref, PartialEq)]
pub struct Roots(pub Vec<Complex<f64>>);

impl Roots {
    /// Reorder `self` to minimize total distance to `other`; `None` if the
    /// lengths differ. Root order is solver-defined, so comparisons go through
    /// the best-matching permutation.
    pub fn align(&self, other: &Roots) -> Option<Roots> {
        if self.len() != other.len() {
            None
        } else {
            let permutations = self.iter().permutations(self.len()).map(|perm| {
                let total_distance = perm
                    .iter()
                    .zip(other.iter())
                    .map(|(c0, c1)| (**c0 - *c1).norm())
                    .sum::<f64>();
                (total_distance, perm)
            });
            let min = permutations.min_by_key(|(total_distance, _)| OrderedFloat(*total_distance));
            min.map(|(distance, roots)| {
                debug!("aligned: {}", distance);
                debug!("  {:?}", roots);
                debug!("  {:?}", other);
                Roots(roots.into_iter().copied().collect())
            })
        }
    }
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().map(|c| format!("{:.6} + {:.6}i", c.re, c.im)).join(", "))
    }
}

impl AbsDiffEq for Roots {
    type Epsilon = f64;
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        match self.align(other) {
            None => {
                debug!("abs_diff_eq: roots not aligned: {} vs {}", self.len(), other.len());
                false
            }
            Some(roots) => roots
                .iter()
                .zip(other.iter())
                .all(|(c0, c1)| (*c0 - *c1).norm() <= epsilon),
        }
    }
}

impl RelativeEq for Roots {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        match self.align(other) {
            None => {
                debug!("relative_eq: roots not aligned: {} vs {}", self.len(), other.len());
                false
            }
            Some(roots) => roots.iter().zip(other.iter()).all(|(c0, c1)| {
                let diff = (*c0 - *c1).norm();
                diff <= epsilon || diff <= max_relative * c0.norm().max(c1.norm())
            }),
        }
    }
}

fn perturb(coef: &[f64]) -> DVector<f64> {
    let mut rng = rand::thread_rng();
    DVector::from_iterator(
        coef.len(),
        coef.iter().map(|c| c + rng.gen::<f64>() * PERTURBATION),
    )
}

/// Drop exactly-zero leading coefficients; keeps at least the constant term.
fn effective(coef: &[f64]) -> &[f64] {
    let mut end = coef.len();
    while end > 1 && coef[end - 1] == 0. {
        end -= 1;
    }
    &coef[..end]
}

fn roots_of(coef: &[f64]) -> Result<Roots, NumericError> {
    let coef = effective(coef);
    let n = coef.len() - 1;
    match n {
        0 => Ok(Roots(vec![])),
        1 => Ok(Roots(vec![Complex::new(-coef[0] / coef[1], 0.)])),
        _ => {
            let f = try_companion(coef)?;
            let schur = Schur::try_new(f, f64::EPSILON, 100 * n)
                .ok_or(NumericError::NonConvergence)?;
            Ok(Roots(schur.complex_eigenvalues().iter().copied().collect()))
        }
    }
}

/// Perturb each coefficient by an independent uniform draw from
/// `[0, PERTURBATION)` and solve the perturbed polynomial via companion-matrix
/// eigenvalues. Returns the perturbed vector alongside the roots; two calls on
/// the same input yield different perturbations (and nearby roots).
pub fn try_find_roots(coef: &[f64]) -> Result<(DVector<f64>, Roots), NumericError> {
    if coef.is_empty() {
        return Err(NumericError::EmptyCoefficients);
    }
    if let Some(idx) = coef.non_finite_idx() {
        return Err(NumericError::NonFiniteCoefficient(idx));
    }
    let perturbed = perturb(coef);
    let roots = roots_of(perturbed.as_slice())?;
    Ok((perturbed, roots))
}

/// Sentinel variant of [`try_find_roots`]: `None` on any invalid input or
/// solver failure.
pub fn find_roots(coef: &[f64]) -> Option<(DVector<f64>, Roots)> {
    try_find_roots(coef).map_err(|e| debug!("find_roots: {}", e)).ok()
}

#![allow(mixed_script_confusables)]

//! Numerical primitives for real polynomials and dense real matrices:
//! perturbed root-finding, Frobenius companion matrices, and tolerance-based
//! nonsingularity testing. The three operations are independent; each returns
//! `None` for invalid input instead of panicking or returning an error, with
//! `try_*` variants exposing the underlying [`error::NumericError`].

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod companion;
pub mod error;
pub mod finite;
pub mod rank;
pub mod roots;

pub use companion::{companion, try_companion};
pub use error::NumericError;
pub use rank::{is_nonsingular, rank, try_is_nonsingular, try_rank};
pub use roots::{find_roots, try_find_roots, Roots, PERTURBATION};

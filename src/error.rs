/// Failure causes behind the `None` ("invalid") results of the public API.
///
/// Every variant is collapsed to `None` at the sentinel boundary; the `try_*`
/// functions surface it for callers that want the cause.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NumericError {
    #[error("empty coefficient vector")]
    EmptyCoefficients,

    #[error("coefficient vector of length {0} has no companion matrix")]
    DegreeTooLow(usize),

    #[error("leading coefficient is zero")]
    ZeroLeadingCoefficient,

    #[error("non-finite coefficient at index {0}")]
    NonFiniteCoefficient(usize),

    #[error("non-finite matrix entry at ({row}, {col})")]
    NonFiniteEntry { row: usize, col: usize },

    #[error("matrix is {rows}x{cols}, expected square")]
    NotSquare { rows: usize, cols: usize },

    #[error("iterative decomposition failed to converge")]
    NonConvergence,
}

use thiserror::Error;

use super::InvalidParameter;

/// Errors that can occur while simulating an SX circuit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// An input the correlations cannot absorb (non-finite, or a
    /// non-positive PLS copper assay).
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    /// A derived quantity came out non-finite despite valid inputs.
    #[error("derived quantity `{field}` is not finite: {value}")]
    NonFinite {
        /// Result key of the offending quantity.
        field: &'static str,
        value: f64,
    },
}

impl SimulationError {
    /// True if the failure traces back to the caller's inputs.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::models::hydrometallurgy::sx::core::SimulationError;

/// Errors that can occur while searching for the optimum v/v%.
#[derive(Debug, Error)]
pub enum OptimumError {
    /// A designer evaluation failed.
    #[error("simulation failed")]
    Simulation(#[from] SimulationError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The bracket is empty, reversed or not finite.
    #[error("invalid v/v% bracket [{low}, {high}]")]
    InvalidBracket { low: f64, high: f64 },

    /// The target loading is not reachable anywhere in the bracket.
    #[error(
        "target loaded organic {target} g/L is outside the {low}..{high} g/L reachable in the bracket"
    )]
    TargetOutOfRange {
        /// Requested loaded organic, g/L.
        target: f64,

        /// Loaded organic at the low end of the bracket, g/L.
        low: f64,

        /// Loaded organic at the high end of the bracket, g/L.
        high: f64,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best loaded-organic residual achieved, g/L.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

impl OptimumError {
    /// True if the failure traces back to the caller's inputs.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::Simulation(err) => err.is_caller_error(),
            Self::InvalidBracket { .. } | Self::TargetOutOfRange { .. } => true,
            Self::Bisection(_) | Self::MaxIters { .. } => false,
        }
    }
}

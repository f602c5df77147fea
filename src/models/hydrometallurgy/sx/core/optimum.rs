//! Iterative search for the extractant concentration meeting a target loading.
//!
//! The designer pipeline evaluates a circuit at a given v/v%. This module
//! inverts it: it bisects on v/v% until the loaded organic matches the
//! requested value.

mod config;
mod error;
mod problem;

pub use config::OptimumConfig;
pub use error::OptimumError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;

use crate::support::sx::arrangement::Topology;

use super::{DesignerResults, ParameterSet};

use problem::{LoadingModel, LoadingProblem};

/// Finds the v/v% at which the loaded organic equals `target_loaded_organic`.
///
/// Returns the designer results at that concentration; its
/// `optimum_v_v_percent` carries the solution.
///
/// # Errors
///
/// Returns [`OptimumError`] if the inputs are invalid, the target is not
/// bracketed, or the solver fails to converge.
pub(super) fn optimum(
    topology: &Topology,
    params: &ParameterSet,
    target_loaded_organic: f64,
    config: OptimumConfig,
) -> Result<DesignerResults, OptimumError> {
    let [low, high] = config.bracket;
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(OptimumError::InvalidBracket { low, high });
    }

    params.check_domain().map_err(super::SimulationError::from)?;

    let model = LoadingModel::new(topology, params);
    let problem = LoadingProblem::new(target_loaded_organic);

    let at_low = model.call(&low)?;
    let at_high = model.call(&high)?;
    let (residual_low, residual_high) = (problem.residual(&at_low), problem.residual(&at_high));

    if residual_low == 0.0 {
        return Ok(at_low);
    }
    if residual_high == 0.0 {
        return Ok(at_high);
    }
    if residual_low.signum() == residual_high.signum() || !target_loaded_organic.is_finite() {
        return Err(OptimumError::TargetOutOfRange {
            target: target_loaded_organic,
            low: at_low.loaded_organic,
            high: at_high.loaded_organic,
        });
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [low, high],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Inputs were checked up front, so a model error here means a
            // non-finite loading; steer away from it.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(OptimumError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    debug!(
        target: "sx.optimum",
        target_loaded_organic,
        v_v_percent = solution.snapshot.output.optimum_v_v_percent,
        iters = solution.iters,
        "optimum extractant concentration found"
    );

    Ok(solution.snapshot.output)
}

//! Steady-state copper SX circuit simulation.
//!
//! A run evaluates the loading isotherm at the chosen extractant
//! concentration, pushes the PLS through the configuration's extraction
//! chain, and closes the copper and acid balances. Both modes share one
//! pipeline; the metallurgist mode appends plant-facing fields.
//!
//! Every run is a pure function of its inputs. Nothing is cached between
//! runs, so concurrent runs are independent.

mod chart;
mod error;
mod optimum;
mod params;
mod results;
mod simulate;

pub use chart::{CHART_POINTS, CHART_STEP, ChartPoint, chart_series};
pub use error::SimulationError;
pub use optimum::{OptimumConfig, OptimumError};
pub use params::{InvalidParameter, ParameterSet};
pub use results::{DesignerResults, MetallurgistResults, Mode, SimulationResult};
pub use simulate::STRIPPED_ORGANIC_FRACTION;

use serde::Serialize;
use tracing::debug;

use crate::support::sx::arrangement::ConfigCode;

/// Results and chart series of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    /// Configuration the run was evaluated for.
    pub config: ConfigCode,

    pub results: SimulationResult,

    /// Sweep over `0, 10, …, 100` v/v%.
    pub chart: Vec<ChartPoint>,
}

/// Runs one simulation in the selected mode and builds its chart series.
///
/// # Example
///
/// ```
/// use sx_models::models::hydrometallurgy::sx::{Mode, ParameterSet, SimulationResult, simulate};
/// use sx_models::support::sx::arrangement::ConfigCode;
///
/// let run = simulate(ConfigCode::A, Mode::Designer, &ParameterSet::default()).unwrap();
/// let SimulationResult::Designer(results) = run.results else {
///     unreachable!()
/// };
/// assert!((results.organic_flow - 400.0).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if a parameter is not finite
/// or `PLS_Cu` is not strictly positive, and [`SimulationError::NonFinite`]
/// if a derived quantity is not finite.
pub fn simulate(
    config: ConfigCode,
    mode: Mode,
    params: &ParameterSet,
) -> Result<Run, SimulationError> {
    debug!(
        target: "sx.engine",
        config = %config,
        mode = ?mode,
        v_v_percent = params.v_v_percent,
        "running simulation"
    );

    let topology = &config.configuration().topology;
    let results = match mode {
        Mode::Designer => SimulationResult::Designer(simulate::designer(topology, params)?),
        Mode::Metallurgist => {
            SimulationResult::Metallurgist(simulate::metallurgist(topology, params)?)
        }
    };

    Ok(Run {
        config,
        results,
        chart: chart_series(params)?,
    })
}

/// Finds the v/v% at which the loaded organic equals `target_loaded_organic`.
///
/// This is the designer's inverse question. The returned results are the
/// designer pipeline evaluated at the solution, whose
/// [`optimum_v_v_percent`](DesignerResults::optimum_v_v_percent) is the
/// concentration found. The search ignores `params.v_v_percent`.
///
/// # Errors
///
/// Returns an [`OptimumError`] if the inputs are invalid, the target is not
/// reachable within [`OptimumConfig::bracket`], or the solver fails to
/// converge.
pub fn optimum_v_v_percent(
    config: ConfigCode,
    params: &ParameterSet,
    target_loaded_organic: f64,
    solver: OptimumConfig,
) -> Result<DesignerResults, OptimumError> {
    optimum::optimum(
        &config.configuration().topology,
        params,
        target_loaded_organic,
        solver,
    )
}

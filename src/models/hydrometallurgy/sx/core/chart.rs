//! Extractant-concentration sweep for charting.

use serde::Serialize;
use tracing::trace;

use crate::support::sx::isotherm;

use super::{ParameterSet, SimulationError};

/// Spacing of the sweep, v/v%.
pub const CHART_STEP: f64 = 10.0;

/// Number of points in a sweep (0 to 100 v/v% inclusive).
pub const CHART_POINTS: usize = 11;

/// Ceiling of the extraction efficiency estimate, %.
const EFFICIENCY_CEILING: f64 = 95.0;

/// One row of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub v_v_percent: f64,

    #[serde(rename = "AML")]
    pub aml: f64,

    #[serde(rename = "ML")]
    pub ml: f64,

    pub loaded_organic: f64,

    /// Linear estimate of extraction efficiency, capped at 95 %.
    pub extraction_efficiency: f64,
}

/// Sweeps v/v% over `0, 10, …, 100` at the caller's PLS assay and
/// saturation ratio.
///
/// The grid does not depend on `params.v_v_percent`.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if the inputs fail
/// [`ParameterSet::check_domain`].
pub fn chart_series(params: &ParameterSet) -> Result<Vec<ChartPoint>, SimulationError> {
    params.check_domain()?;

    let series: Vec<_> = (0..CHART_POINTS)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let v_v_percent = i as f64 * CHART_STEP;
            let aml = isotherm::aml(v_v_percent);
            let ml = isotherm::ml(params.pls_ac, params.pls_cu, v_v_percent, aml);

            ChartPoint {
                v_v_percent,
                aml,
                ml,
                loaded_organic: ml * params.saturation_ratio / 100.0,
                extraction_efficiency: extraction_efficiency_estimate(v_v_percent),
            }
        })
        .collect();

    trace!(target: "sx.chart", points = series.len(), "chart series generated");
    Ok(series)
}

fn extraction_efficiency_estimate(v_v_percent: f64) -> f64 {
    (80.0 + v_v_percent * 0.15).min(EFFICIENCY_CEILING)
}

//! Forward pipelines for the designer and metallurgist modes.

use tracing::trace;
use uom::si::{ratio::ratio, volume_rate::cubic_meter_per_hour};

use crate::support::sx::{
    ExtractionChain, StageEfficiencies,
    arrangement::Topology,
    balance::{extraction_recovery, net_transfer, raffinate_acid, stripping_recovery},
    isotherm,
};

use super::{DesignerResults, MetallurgistResults, ParameterSet, SimulationError};

/// Fraction of the loaded-organic copper still on the organic after stripping.
///
/// Stripping is not modeled stage by stage: `Mef1s` and the electrolyte
/// assays are carried but do not enter the balance.
pub const STRIPPED_ORGANIC_FRACTION: f64 = 0.4;

/// Runs the designer pipeline at the parameter set's v/v%.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if the inputs fail
/// [`ParameterSet::check_domain`], or [`SimulationError::NonFinite`] if a
/// derived quantity is not finite.
pub(super) fn designer(
    topology: &Topology,
    params: &ParameterSet,
) -> Result<DesignerResults, SimulationError> {
    params.check_domain()?;
    let results = designer_unchecked(topology, params);
    results.check_finite()?;
    Ok(results)
}

/// Runs the metallurgist pipeline: the designer pipeline plus saturation
/// ratio and extraction-stage efficiency echoes.
///
/// # Errors
///
/// Same as [`designer`].
pub(super) fn metallurgist(
    topology: &Topology,
    params: &ParameterSet,
) -> Result<MetallurgistResults, SimulationError> {
    let shared = designer(topology, params)?;

    let saturation_ratio = if shared.ml > 0.0 {
        shared.loaded_organic / shared.ml * 100.0
    } else {
        0.0
    };

    let results = MetallurgistResults {
        shared,
        saturation_ratio,
        mixer_efficiency_e1: params.mef1e,
        mixer_efficiency_e2: params.mef2e,
    };
    results.check_finite()?;
    Ok(results)
}

fn designer_unchecked(topology: &Topology, params: &ParameterSet) -> DesignerResults {
    let v = params.v_v_percent;

    let aml = isotherm::aml(v);
    let ml = isotherm::ml(params.pls_ac, params.pls_cu, v, aml);
    let loaded_organic = ml * params.saturation_ratio / 100.0;

    let unextracted = topology
        .unextracted_fraction(StageEfficiencies::from_percent(params.mef1e, params.mef2e))
        .get::<ratio>();
    let raffinate_cu = params.pls_cu * unextracted;
    let raffinate_ac = raffinate_acid(params.pls_ac, params.pls_cu, raffinate_cu);

    let stripped_organic = loaded_organic * STRIPPED_ORGANIC_FRACTION;

    let organic_flow = params.pls_flow_rate() * params.ratio_o_a_ext;

    trace!(
        target: "sx.engine",
        v_v_percent = v,
        aml,
        ml,
        loaded_organic,
        raffinate_cu,
        "designer pipeline evaluated"
    );

    DesignerResults {
        optimum_v_v_percent: v,
        aml,
        ml,
        loaded_organic,
        stripped_organic,
        raffinate_cu,
        raffinate_ac,
        extraction_recovery: extraction_recovery(params.pls_cu, raffinate_cu),
        stripping_recovery: stripping_recovery(loaded_organic, stripped_organic),
        net_transfer: net_transfer(loaded_organic, stripped_organic, v),
        organic_flow: organic_flow.get::<cubic_meter_per_hour>(),
    }
}

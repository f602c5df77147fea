//! Copper solvent-extraction circuit models.
//!
//! [`simulate`] answers the designer and metallurgist questions for one of
//! the eighteen catalog configurations, and [`optimum_v_v_percent`] inverts
//! the designer pipeline for a target loading. [`SxCircuit`] wraps a
//! configuration as a [`twine_core::Model`]. The JSON boundary lives in
//! [`service`].
//!
//! The computational core is in the internal `core` module.

mod core;
pub mod service;

pub use self::core::{
    CHART_POINTS, CHART_STEP, ChartPoint, DesignerResults, InvalidParameter, MetallurgistResults,
    Mode, OptimumConfig, OptimumError, ParameterSet, Run, STRIPPED_ORGANIC_FRACTION,
    SimulationError, SimulationResult, chart_series, optimum_v_v_percent, simulate,
};

use twine_core::Model;

use crate::support::sx::arrangement::ConfigCode;

/// Input of an [`SxCircuit`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub mode: Mode,
    pub params: ParameterSet,
}

/// An SX circuit fixed to one catalog configuration.
///
/// # Example
///
/// ```
/// use sx_models::models::hydrometallurgy::sx::{Mode, ParameterSet, Scenario, SxCircuit};
/// use sx_models::support::sx::arrangement::ConfigCode;
/// use twine_core::Model;
///
/// let circuit = SxCircuit::new(ConfigCode::K);
/// let run = circuit
///     .call(&Scenario {
///         mode: Mode::Designer,
///         params: ParameterSet::default(),
///     })
///     .unwrap();
/// assert_eq!(run.config, ConfigCode::K);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SxCircuit {
    config: ConfigCode,
}

impl SxCircuit {
    #[must_use]
    pub fn new(config: ConfigCode) -> Self {
        Self { config }
    }

    /// The configuration this circuit evaluates.
    #[must_use]
    pub fn config(&self) -> ConfigCode {
        self.config
    }
}

impl Model for SxCircuit {
    type Input = Scenario;
    type Output = Run;
    type Error = SimulationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        simulate(self.config, input.mode, &input.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circuit_matches_direct_simulation() {
        let params = ParameterSet::default().with_v_v_percent(15.0);
        for code in ConfigCode::ALL {
            let circuit = SxCircuit::new(code);
            let scenario = Scenario {
                mode: Mode::Metallurgist,
                params,
            };

            let via_model = circuit.call(&scenario).unwrap();
            let direct = simulate(code, Mode::Metallurgist, &params).unwrap();
            assert_eq!(via_model, direct);
            assert_eq!(circuit.config(), code);
        }
    }

    #[test]
    fn circuit_propagates_errors() {
        let circuit = SxCircuit::new(ConfigCode::A);
        let scenario = Scenario {
            mode: Mode::Designer,
            params: ParameterSet {
                pls_cu: f64::NAN,
                ..ParameterSet::default()
            },
        };
        assert!(matches!(
            circuit.call(&scenario),
            Err(SimulationError::InvalidParameter(_))
        ));
    }
}

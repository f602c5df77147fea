//! Result types for SX circuit simulation.

use serde::{Deserialize, Serialize};

use super::SimulationError;

/// Which of the two operating questions a run answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Plant design: loading and recoveries at a chosen extractant strength.
    #[default]
    Designer,

    /// Plant operation: designer results plus saturation and stage echoes.
    Metallurgist,
}

/// Derived quantities shared by both modes.
///
/// Concentrations are g/L, recoveries percent, flows m³/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignerResults {
    /// Extractant concentration the results were evaluated at, v/v%.
    pub optimum_v_v_percent: f64,

    /// Maximum loading at zero free acid.
    #[serde(rename = "AML")]
    pub aml: f64,

    /// Maximum loading at the PLS assay.
    #[serde(rename = "ML")]
    pub ml: f64,

    pub loaded_organic: f64,
    pub stripped_organic: f64,

    #[serde(rename = "raffinate_Cu")]
    pub raffinate_cu: f64,

    #[serde(rename = "raffinate_Ac")]
    pub raffinate_ac: f64,

    pub extraction_recovery: f64,
    pub stripping_recovery: f64,

    /// Copper transferred per v/v% of extractant, g/L.
    pub net_transfer: f64,

    pub organic_flow: f64,
}

/// Designer results plus the fields plant instrumentation reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetallurgistResults {
    #[serde(flatten)]
    pub shared: DesignerResults,

    /// Achieved fraction of ML, %. Zero when ML is not positive.
    pub saturation_ratio: f64,

    #[serde(rename = "mixer_efficiency_E1")]
    pub mixer_efficiency_e1: f64,

    #[serde(rename = "mixer_efficiency_E2")]
    pub mixer_efficiency_e2: f64,
}

/// Results of one run in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimulationResult {
    Designer(DesignerResults),
    Metallurgist(MetallurgistResults),
}

impl SimulationResult {
    /// The mode that produced these results.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Designer(_) => Mode::Designer,
            Self::Metallurgist(_) => Mode::Metallurgist,
        }
    }

    /// Fields common to both modes.
    #[must_use]
    pub fn shared(&self) -> &DesignerResults {
        match self {
            Self::Designer(results) => results,
            Self::Metallurgist(results) => &results.shared,
        }
    }
}

impl DesignerResults {
    /// Every field keyed by its result name.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, f64); 11] {
        [
            ("optimum_v_v_percent", self.optimum_v_v_percent),
            ("AML", self.aml),
            ("ML", self.ml),
            ("loaded_organic", self.loaded_organic),
            ("stripped_organic", self.stripped_organic),
            ("raffinate_Cu", self.raffinate_cu),
            ("raffinate_Ac", self.raffinate_ac),
            ("extraction_recovery", self.extraction_recovery),
            ("stripping_recovery", self.stripping_recovery),
            ("net_transfer", self.net_transfer),
            ("organic_flow", self.organic_flow),
        ]
    }

    /// Checks that every field is finite.
    pub(super) fn check_finite(&self) -> Result<(), SimulationError> {
        check_finite(self.fields())
    }
}

impl MetallurgistResults {
    /// Checks that every field is finite.
    pub(super) fn check_finite(&self) -> Result<(), SimulationError> {
        self.shared.check_finite()?;
        check_finite([
            ("saturation_ratio", self.saturation_ratio),
            ("mixer_efficiency_E1", self.mixer_efficiency_e1),
            ("mixer_efficiency_E2", self.mixer_efficiency_e2),
        ])
    }
}

fn check_finite<const N: usize>(fields: [(&'static str, f64); N]) -> Result<(), SimulationError> {
    match fields.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(SimulationError::NonFinite { field, value }),
        None => Ok(()),
    }
}

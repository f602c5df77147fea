//! Circuit arrangements supported by the SX utilities.
//!
//! An arrangement decides how the PLS is routed through the extraction
//! mixer-settlers. The loading isotherm does not depend on it, but the
//! raffinate copper does: a stage in series sees the raffinate of the stage
//! before it, while a parallel stage sees fresh PLS.

mod registry;
mod topology;

pub use registry::{ConfigCode, Configuration, UnknownConfiguration};
pub use topology::{Layout, Topology};

use uom::si::{
    f64::Ratio,
    ratio::{percent, ratio},
};

/// Trait for computing how much PLS copper survives an extraction circuit.
pub trait ExtractionChain {
    /// Fraction of the PLS copper left in the blended raffinate, given the
    /// mixer-settler [stage efficiencies](StageEfficiencies).
    fn unextracted_fraction(&self, efficiencies: StageEfficiencies) -> Ratio;
}

/// Extraction mixer-settler efficiencies along one aqueous train.
///
/// The first stage a share of PLS meets runs at `first`; every later stage
/// on the same train runs at `subsequent`.
///
/// Values are not range-checked here. Out-of-range efficiencies produce
/// non-physical but finite raffinates; callers that need physical inputs
/// validate with [`MixerEfficiency`](super::MixerEfficiency).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageEfficiencies {
    pub first: Ratio,
    pub subsequent: Ratio,
}

impl StageEfficiencies {
    /// Creates stage efficiencies from percentages (`Mef1e`, `Mef2e`).
    #[must_use]
    pub fn from_percent(first: f64, subsequent: f64) -> Self {
        Self {
            first: Ratio::new::<percent>(first),
            subsequent: Ratio::new::<percent>(subsequent),
        }
    }

    /// Fraction of incoming copper left by the stage at `position` on a train.
    fn pass_through(&self, position: usize) -> f64 {
        let efficiency = if position == 0 {
            self.first
        } else {
            self.subsequent
        };
        1.0 - efficiency.get::<ratio>()
    }

    /// Fraction of incoming copper left by a train of `stages` in series.
    pub(crate) fn train_pass_through(&self, stages: u8) -> f64 {
        (0..usize::from(stages))
            .map(|position| self.pass_through(position))
            .product()
    }
}

//! Stage layouts and their aqueous extraction chains.

use serde::Serialize;
use uom::si::{f64::Ratio, ratio::ratio};

use super::{ExtractionChain, StageEfficiencies};

/// Family of circuit layouts in the configuration catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Series,
    SeriesParallel,
    OptimumSeriesParallel,
    TripleParallel,
    Interlaced,
    DoubleSeriesParallel,
    OptimumTripleParallel,
    OrganicBypass,
}

/// Stage topology of an SX circuit.
///
/// The PLS is split equally between `trains`. Each entry is the number of
/// extraction stages that share of the PLS passes through in series.
/// The organic phase runs through every stage regardless of layout, so the
/// organic routing (including bypass) leaves the aqueous chain unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topology {
    pub layout: Layout,
    pub trains: &'static [u8],
    pub stripping_stages: u8,
}

impl Topology {
    /// Total number of extraction mixer-settlers.
    #[must_use]
    pub const fn extraction_stages(&self) -> u8 {
        let mut total = 0;
        let mut i = 0;
        while i < self.trains.len() {
            total += self.trains[i];
            i += 1;
        }
        total
    }

    /// Number of extraction stages fed with a parallel share of PLS.
    #[must_use]
    pub const fn parallel_stages(&self) -> u8 {
        match self.trains.first() {
            Some(&main) => self.extraction_stages() - main,
            None => 0,
        }
    }

    /// True if part of the loaded organic bypasses the parallel stages.
    #[must_use]
    pub const fn organic_bypass(&self) -> bool {
        matches!(self.layout, Layout::OrganicBypass)
    }
}

impl ExtractionChain for Topology {
    fn unextracted_fraction(&self, efficiencies: StageEfficiencies) -> Ratio {
        #[allow(clippy::cast_precision_loss)]
        let share = 1.0 / self.trains.len() as f64;

        let left: f64 = self
            .trains
            .iter()
            .map(|&stages| share * efficiencies.train_pass_through(stages))
            .sum();

        Ratio::new::<ratio>(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn topology(trains: &'static [u8]) -> Topology {
        Topology {
            layout: Layout::Series,
            trains,
            stripping_stages: 1,
        }
    }

    #[test]
    fn two_stage_series_matches_efficiency_product() {
        let left = topology(&[2]).unextracted_fraction(StageEfficiencies::from_percent(92.0, 95.0));
        assert_relative_eq!(
            left.get::<ratio>(),
            (1.0 - 92.0 / 100.0) * (1.0 - 95.0 / 100.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn parallel_trains_blend_by_equal_split() {
        let eff = StageEfficiencies::from_percent(90.0, 80.0);
        let left = topology(&[2, 1]).unextracted_fraction(eff);
        assert_relative_eq!(
            left.get::<ratio>(),
            0.5 * (0.1 * 0.2) + 0.5 * 0.1,
            epsilon = 1e-12
        );
    }

    #[test]
    fn parallel_extracts_less_than_series() {
        let eff = StageEfficiencies::from_percent(92.0, 95.0);
        let series = topology(&[3]).unextracted_fraction(eff);
        let parallel = topology(&[1, 1, 1]).unextracted_fraction(eff);
        assert!(parallel > series);
    }

    #[test]
    fn stage_counts() {
        let t = topology(&[2, 1, 1]);
        assert_eq!(t.extraction_stages(), 4);
        assert_eq!(t.parallel_stages(), 2);
        assert!(!t.organic_bypass());
    }

    #[test]
    fn no_efficiency_extracts_nothing() {
        let left = topology(&[2, 2]).unextracted_fraction(StageEfficiencies::from_percent(0.0, 0.0));
        assert_relative_eq!(left.get::<ratio>(), 1.0, epsilon = 1e-12);
    }
}

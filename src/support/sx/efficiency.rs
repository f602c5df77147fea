use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};
use uom::si::{f64::Ratio, ratio::percent};

/// Stage efficiency of a mixer-settler.
///
/// The fraction of the copper transfer that would occur at equilibrium which
/// the stage actually achieves. Plant data quotes it in percent.
///
/// The efficiency must be in the interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixerEfficiency(Constrained<Ratio, UnitInterval>);

impl MixerEfficiency {
    /// Create a [`MixerEfficiency`] from a percentage.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside 0–100 %.
    pub fn from_percent(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<percent>(value))
    }

    /// Create a [`MixerEfficiency`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for MixerEfficiency {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

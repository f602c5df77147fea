use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval [0, 1].
///
/// Implementations should ensure that `zero() ≤ one()` under the type's
/// `PartialOrd` so the interval is well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// Mixer-settler efficiencies and saturation ratios are quoted in percent;
/// as a [`Ratio`] they must fall in this interval.
///
/// # Examples
///
/// ```
/// use sx_models::support::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let mef = UnitInterval::new(Ratio::new::<percent>(92.0)).unwrap();
/// assert!((mef.into_inner().get::<ratio>() - 0.92).abs() < 1e-12);
///
/// assert!(UnitInterval::new(Ratio::new::<percent>(101.0)).is_err());
/// assert!(UnitInterval::new(-0.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::ratio::percent;

    #[test]
    fn percent_efficiencies() {
        assert!(UnitInterval::new(Ratio::new::<percent>(0.0)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<percent>(98.0)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<percent>(100.0)).is_ok());

        assert!(matches!(
            UnitInterval::new(Ratio::new::<percent>(100.5)),
            Err(ConstraintError::AboveMaximum)
        ));
        assert!(matches!(
            UnitInterval::new(Ratio::new::<percent>(-1.0)),
            Err(ConstraintError::BelowMinimum)
        ));
    }

    #[test]
    fn floats_out_of_range() {
        assert!(matches!(
            UnitInterval::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        ));
        assert!(matches!(
            UnitInterval::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn ratio_bounds() {
        assert_eq!(<Ratio as UnitBounds>::zero().get::<percent>(), 0.0);
        assert!(UnitInterval::new(<Ratio as UnitBounds>::one()).is_ok());
    }
}

//! Copper and acid balances around extraction and stripping.
//!
//! Concentrations are in g/L and recoveries in percent.

/// Acid (g/L H₂SO₄) regenerated per g/L of copper extracted.
///
/// Extraction releases two protons per copper ion: 98.08 / 63.55 ≈ 1.54.
pub const ACID_PER_COPPER: f64 = 1.54;

/// Copper extraction recovery, in percent of the PLS copper.
///
/// `pls_cu` must be non-zero; the engine rejects a zero assay up front.
#[must_use]
pub fn extraction_recovery(pls_cu: f64, raffinate_cu: f64) -> f64 {
    (pls_cu - raffinate_cu) / pls_cu * 100.0
}

/// Copper stripping recovery, in percent of the loaded-organic copper.
///
/// Returns `0.0` for an unloaded organic (`loaded_organic <= 0`).
#[must_use]
pub fn stripping_recovery(loaded_organic: f64, stripped_organic: f64) -> f64 {
    if loaded_organic <= 0.0 {
        return 0.0;
    }
    (loaded_organic - stripped_organic) / loaded_organic * 100.0
}

/// Net copper transfer (g/L Cu) per v/v% of extractant.
///
/// Shares the isotherm's boundary guard: returns `0.0` for `v_v_percent <= 0`.
#[must_use]
pub fn net_transfer(loaded_organic: f64, stripped_organic: f64, v_v_percent: f64) -> f64 {
    if v_v_percent <= 0.0 {
        return 0.0;
    }
    (loaded_organic - stripped_organic) / v_v_percent
}

/// Raffinate free acid (g/L) after extracting `pls_cu - raffinate_cu` of copper.
#[must_use]
pub fn raffinate_acid(pls_ac: f64, pls_cu: f64, raffinate_cu: f64) -> f64 {
    pls_ac + (pls_cu - raffinate_cu) * ACID_PER_COPPER
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn extraction() {
        assert_relative_eq!(extraction_recovery(2.5, 0.01), 99.6, epsilon = 1e-12);
        assert_relative_eq!(extraction_recovery(2.5, 2.5), 0.0);
        assert_relative_eq!(extraction_recovery(2.5, 0.0), 100.0);
    }

    #[test]
    fn stripping() {
        assert_relative_eq!(stripping_recovery(1.0, 0.4), 60.0, epsilon = 1e-12);
        assert_eq!(stripping_recovery(0.0, 0.0), 0.0);
        assert_eq!(stripping_recovery(-1.0, 0.5), 0.0);
    }

    #[test]
    fn net_transfer_guards_zero_extractant() {
        assert_relative_eq!(net_transfer(1.0, 0.4, 10.0), 0.06, epsilon = 1e-12);
        assert_eq!(net_transfer(1.0, 0.4, 0.0), 0.0);
        assert_eq!(net_transfer(1.0, 0.4, -3.0), 0.0);
    }

    #[test]
    fn acid_generation() {
        assert_relative_eq!(raffinate_acid(1.6, 2.5, 0.5), 1.6 + 2.0 * 1.54, epsilon = 1e-12);
        assert_relative_eq!(raffinate_acid(1.6, 2.5, 2.5), 1.6);
    }
}

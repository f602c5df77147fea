//! Empirical loading isotherm for the copper/oxime system.
//!
//! Both correlations take concentrations in g/L and the extractant
//! concentration in v/v%. They are power laws in v/v%, so every function
//! here returns `0.0` at or below the boundary where a non-integer or
//! negative power of the extractant concentration is undefined.

/// Coefficient of the zero-acid loading power law.
const AML_COEFFICIENT: f64 = 0.4108;

/// Exponent of the zero-acid loading power law.
const AML_EXPONENT: f64 = 1.1;

/// Maximum organic loading (g/L Cu) when the PLS carries no free acid.
///
/// `AML = 0.4108 * v^1.1`, and `0.0` for `v <= 0`.
#[must_use]
pub fn aml(v_v_percent: f64) -> f64 {
    if v_v_percent <= 0.0 {
        return 0.0;
    }
    AML_COEFFICIENT * v_v_percent.powf(AML_EXPONENT)
}

/// Maximum organic loading (g/L Cu) at the actual PLS copper and acid assays.
///
/// The result is `acid² / copper` less an acid-competition term built from
/// two power laws in `v_v_percent`, weighted by `aml` and by
/// `(3.303 v - 3.0842 aml)² / aml`.
///
/// Returns `0.0` whenever `v_v_percent <= 0` or `aml <= 0`; the competition
/// term divides by `aml` and raises `v_v_percent` to negative powers.
///
/// `pls_cu` is not guarded. A zero copper assay yields a non-finite result,
/// so callers reject it before reaching this function.
#[must_use]
pub fn ml(pls_ac: f64, pls_cu: f64, v_v_percent: f64, aml: f64) -> f64 {
    if v_v_percent <= 0.0 || aml <= 0.0 {
        return 0.0;
    }

    let acid_term = pls_ac.powi(2) / pls_cu;

    let weight = -28.511 * v_v_percent.powf(-1.746) * aml + 11.711 * v_v_percent.powf(-0.646);
    let spread = (3.303 * v_v_percent - 3.0842 * aml).powi(2) / aml;

    acid_term - weight * spread
}

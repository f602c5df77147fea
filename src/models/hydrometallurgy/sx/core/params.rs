//! The twelve plant parameters of one simulation run.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Ratio, VolumeRate},
    ratio::percent,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive, UnitInterval},
    sx::MixerEfficiency,
};

/// Assay, flow and equipment inputs for one run.
///
/// Field names follow the plant data sheet on the wire (`PLS_Cu`, `Mef1e`, …).
/// Concentrations are g/L, flows m³/h, efficiencies and ratios percent.
///
/// No field is range-checked on construction. [`ParameterSet::check_domain`]
/// guards what the correlations need; [`ParameterSet::check_physical`] is the
/// stricter check for plant-facing callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSet {
    /// PLS flow rate, m³/h.
    #[serde(rename = "PLS_flow")]
    pub pls_flow: f64,

    /// PLS copper, g/L.
    #[serde(rename = "PLS_Cu")]
    pub pls_cu: f64,

    /// PLS free acid, g/L.
    #[serde(rename = "PLS_Ac")]
    pub pls_ac: f64,

    /// Target saturation ratio, % of ML.
    #[serde(rename = "SR")]
    pub saturation_ratio: f64,

    /// Organic/aqueous ratio in extraction.
    #[serde(rename = "Ratio_O_A_Ext")]
    pub ratio_o_a_ext: f64,

    /// First extraction mixer-settler efficiency, %.
    #[serde(rename = "Mef1e")]
    pub mef1e: f64,

    /// Second extraction mixer-settler efficiency, %.
    #[serde(rename = "Mef2e")]
    pub mef2e: f64,

    /// Spent electrolyte copper, g/L.
    #[serde(rename = "SP_Cu")]
    pub sp_cu: f64,

    /// Spent electrolyte acid, g/L.
    #[serde(rename = "SPAc")]
    pub sp_ac: f64,

    /// Advance electrolyte copper, g/L.
    #[serde(rename = "AD_Cu")]
    pub ad_cu: f64,

    /// Stripping mixer-settler efficiency, %.
    #[serde(rename = "Mef1s")]
    pub mef1s: f64,

    /// Extractant concentration in the organic, v/v%.
    pub v_v_percent: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            pls_flow: 400.0,
            pls_cu: 2.5,
            pls_ac: 1.6,
            saturation_ratio: 92.0,
            ratio_o_a_ext: 1.0,
            mef1e: 92.0,
            mef2e: 95.0,
            sp_cu: 30.0,
            sp_ac: 190.0,
            ad_cu: 50.0,
            mef1s: 98.0,
            v_v_percent: 8.66,
        }
    }
}

/// A parameter rejected by [`ParameterSet::check_domain`] or
/// [`ParameterSet::check_physical`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("parameter `{field}` = {value} is invalid: {source}")]
pub struct InvalidParameter {
    /// Wire name of the parameter.
    pub field: &'static str,
    pub value: f64,
    #[source]
    pub source: ConstraintError,
}

impl ParameterSet {
    /// Returns this parameter set with a different extractant concentration.
    #[must_use]
    pub fn with_v_v_percent(self, v_v_percent: f64) -> Self {
        Self {
            v_v_percent,
            ..self
        }
    }

    /// PLS flow rate as a unit-carrying quantity.
    #[must_use]
    pub fn pls_flow_rate(&self) -> VolumeRate {
        VolumeRate::new::<cubic_meter_per_hour>(self.pls_flow)
    }

    /// Every parameter keyed by its wire name, in data-sheet order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, f64); 12] {
        [
            ("PLS_flow", self.pls_flow),
            ("PLS_Cu", self.pls_cu),
            ("PLS_Ac", self.pls_ac),
            ("SR", self.saturation_ratio),
            ("Ratio_O_A_Ext", self.ratio_o_a_ext),
            ("Mef1e", self.mef1e),
            ("Mef2e", self.mef2e),
            ("SP_Cu", self.sp_cu),
            ("SPAc", self.sp_ac),
            ("AD_Cu", self.ad_cu),
            ("Mef1s", self.mef1s),
            ("v_v_percent", self.v_v_percent),
        ]
    }

    /// Checks the inputs the correlations cannot absorb.
    ///
    /// Every field must be finite and `PLS_Cu` strictly positive, since it
    /// divides the acid term of ML and the extraction recovery. Everything
    /// else, including `v_v_percent <= 0`, is left to the correlation guards.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter.
    pub fn check_domain(&self) -> Result<(), InvalidParameter> {
        for (field, value) in self.fields() {
            if value.is_nan() {
                return Err(invalid(field, value, ConstraintError::NotANumber));
            }
            if value.is_infinite() {
                return Err(invalid(field, value, ConstraintError::NotFinite));
            }
        }

        StrictlyPositive::new(self.pls_cu)
            .map_err(|source| invalid("PLS_Cu", self.pls_cu, source))?;

        Ok(())
    }

    /// Checks that the parameters describe a physically possible plant.
    ///
    /// In addition to [`check_domain`](Self::check_domain): flows, assays
    /// and the O/A ratio must be non-negative, and v/v%, the saturation ratio
    /// and mixer-settler efficiencies must lie within 0–100 %.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter.
    pub fn check_physical(&self) -> Result<(), InvalidParameter> {
        self.check_domain()?;

        NonNegative::new(self.pls_flow_rate())
            .map_err(|source| invalid("PLS_flow", self.pls_flow, source))?;

        for (field, value) in [
            ("PLS_Ac", self.pls_ac),
            ("Ratio_O_A_Ext", self.ratio_o_a_ext),
            ("SP_Cu", self.sp_cu),
            ("SPAc", self.sp_ac),
            ("AD_Cu", self.ad_cu),
        ] {
            NonNegative::new(value).map_err(|source| invalid(field, value, source))?;
        }

        for (field, value) in [
            ("SR", self.saturation_ratio),
            ("v_v_percent", self.v_v_percent),
        ] {
            UnitInterval::new(Ratio::new::<percent>(value))
                .map_err(|source| invalid(field, value, source))?;
        }

        for (field, value) in [
            ("Mef1e", self.mef1e),
            ("Mef2e", self.mef2e),
            ("Mef1s", self.mef1s),
        ] {
            MixerEfficiency::from_percent(value).map_err(|source| invalid(field, value, source))?;
        }

        Ok(())
    }
}

fn invalid(field: &'static str, value: f64, source: ConstraintError) -> InvalidParameter {
    InvalidParameter {
        field,
        value,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_physical() {
        let params = ParameterSet::default();
        assert!(params.check_domain().is_ok());
        assert!(params.check_physical().is_ok());
    }

    #[test]
    fn zero_extractant_is_in_domain() {
        let params = ParameterSet::default().with_v_v_percent(0.0);
        assert!(params.check_domain().is_ok());
        assert!(params.check_physical().is_ok());
    }

    #[test]
    fn copper_assay_must_be_positive() {
        let params = ParameterSet {
            pls_cu: 0.0,
            ..ParameterSet::default()
        };
        let err = params.check_domain().unwrap_err();
        assert_eq!(err.field, "PLS_Cu");
        assert_eq!(err.source, ConstraintError::Zero);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let params = ParameterSet {
            pls_ac: f64::NAN,
            ..ParameterSet::default()
        };
        assert_eq!(
            params.check_domain().unwrap_err().source,
            ConstraintError::NotANumber
        );

        let params = ParameterSet {
            pls_flow: f64::INFINITY,
            ..ParameterSet::default()
        };
        let err = params.check_domain().unwrap_err();
        assert_eq!(err.field, "PLS_flow");
        assert_eq!(err.source, ConstraintError::NotFinite);
    }

    #[test]
    fn domain_check_tolerates_non_physical_values() {
        let params = ParameterSet {
            pls_flow: -10.0,
            mef1e: 120.0,
            v_v_percent: -3.0,
            ..ParameterSet::default()
        };
        assert!(params.check_domain().is_ok());
        assert!(params.check_physical().is_err());
    }

    #[test]
    fn physical_check_names_the_field() {
        let cases = [
            (ParameterSet { pls_flow: -1.0, ..ParameterSet::default() }, "PLS_flow"),
            (ParameterSet { sp_ac: -190.0, ..ParameterSet::default() }, "SPAc"),
            (ParameterSet { saturation_ratio: 105.0, ..ParameterSet::default() }, "SR"),
            (ParameterSet { mef2e: 100.5, ..ParameterSet::default() }, "Mef2e"),
            (ParameterSet { mef1s: -1.0, ..ParameterSet::default() }, "Mef1s"),
            (ParameterSet { v_v_percent: -0.5, ..ParameterSet::default() }, "v_v_percent"),
            (ParameterSet { v_v_percent: 100.5, ..ParameterSet::default() }, "v_v_percent"),
        ];
        for (params, field) in cases {
            assert_eq!(params.check_physical().unwrap_err().field, field);
        }
    }

    #[test]
    fn extractant_concentration_is_a_volume_percent() {
        for v in [0.0, 8.66, 100.0] {
            assert!(ParameterSet::default().with_v_v_percent(v).check_physical().is_ok());
        }

        let err = ParameterSet::default()
            .with_v_v_percent(1e200)
            .check_physical()
            .unwrap_err();
        assert_eq!(err.field, "v_v_percent");
        assert_eq!(err.source, ConstraintError::AboveMaximum);

        // The correlations absorb it, so the domain check lets it through.
        assert!(ParameterSet::default().with_v_v_percent(150.0).check_domain().is_ok());
    }

    #[test]
    fn wire_names() {
        let json = serde_json::to_value(ParameterSet::default()).unwrap();
        for (field, value) in ParameterSet::default().fields() {
            assert_eq!(json[field].as_f64(), Some(value), "{field}");
        }
    }

    #[test]
    fn missing_and_unknown_keys_fail_to_parse() {
        let mut json = serde_json::to_value(ParameterSet::default()).unwrap();
        json.as_object_mut().unwrap().remove("Mef1s");
        assert!(serde_json::from_value::<ParameterSet>(json).is_err());

        let mut json = serde_json::to_value(ParameterSet::default()).unwrap();
        json["Mef3e"] = serde_json::json!(90.0);
        assert!(serde_json::from_value::<ParameterSet>(json).is_err());
    }
}

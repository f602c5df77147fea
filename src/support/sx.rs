//! Copper solvent-extraction toolkit.
//!
//! This module provides the general-purpose pieces of SX circuit analysis:
//! the empirical loading isotherm, stage mass balances, mixer-settler
//! efficiencies and the catalog of circuit arrangements.
//!
//! # Overview
//!
//! Copper is transferred from an aqueous pregnant leach solution (PLS) into an
//! organic phase carrying an oxime extractant. How much copper the organic can
//! hold depends on the extractant concentration (v/v%) and on the free acid in
//! the PLS, which competes for the extractant.
//!
//! - **Isotherm**: [`isotherm::aml`], [`isotherm::ml`]
//! - **Balances**: [`balance::extraction_recovery`], [`balance::stripping_recovery`],
//!   [`balance::net_transfer`], [`balance::raffinate_acid`]
//! - **Efficiencies**: [`MixerEfficiency`], [`StageEfficiencies`]
//! - **Arrangements**: [`arrangement::ConfigCode`], [`arrangement::Configuration`],
//!   [`ExtractionChain`]
//!
//! # Example
//!
//! ```
//! use sx_models::support::sx::{ExtractionChain, StageEfficiencies, isotherm};
//! use sx_models::support::sx::arrangement::ConfigCode;
//! use uom::si::ratio::ratio;
//!
//! let aml = isotherm::aml(8.66);
//! let ml = isotherm::ml(1.6, 2.5, 8.66, aml);
//! assert!(ml > 0.0 && ml.is_finite());
//!
//! let topology = ConfigCode::A.configuration().topology;
//! let left = topology.unextracted_fraction(StageEfficiencies::from_percent(92.0, 95.0));
//! assert!((left.get::<ratio>() - 0.004).abs() < 1e-12);
//! ```

pub mod arrangement;
pub mod balance;
mod efficiency;
mod extractant;
pub mod isotherm;

pub use arrangement::{ExtractionChain, StageEfficiencies};
pub use efficiency::MixerEfficiency;
pub use extractant::Extractant;

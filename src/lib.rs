//! # SX Models
//!
//! Steady-state models of copper solvent-extraction (SX) circuits, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Circuit simulators and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models (correlations,
//!   circuit arrangements, numeric constraints).
//!
//! ## Quick start
//!
//! ```
//! use sx_models::models::hydrometallurgy::sx::{Mode, ParameterSet, simulate};
//! use sx_models::support::sx::arrangement::ConfigCode;
//!
//! let params = ParameterSet::default();
//! let run = simulate(ConfigCode::A, Mode::Metallurgist, &params).unwrap();
//!
//! assert_eq!(run.chart.len(), 11);
//! assert!(run.results.shared().aml > 0.0);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Utility code starts in a model's internal
//! `core` module and moves to [`support`] once more than one model needs it.

pub mod models;
pub mod support;

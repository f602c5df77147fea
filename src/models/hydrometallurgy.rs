//! Hydrometallurgical process models.
//!
//! This module contains models for aqueous metal recovery circuits, starting
//! with copper solvent extraction.

pub mod sx;

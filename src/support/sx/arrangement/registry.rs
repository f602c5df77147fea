//! Static catalog of named SX circuit configurations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Layout, Topology};

/// Code identifying one of the eighteen catalog configurations.
///
/// Codes come in pairs: the first of each pair strips in one stage, the
/// second in two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigCode {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
}

impl ConfigCode {
    /// Every code, in catalog order.
    pub const ALL: [Self; 18] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
    ];

    /// Returns the catalog entry for this code.
    #[must_use]
    pub fn configuration(self) -> &'static Configuration {
        &CATALOG[self as usize]
    }

    /// Single-letter code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        const LETTERS: [&str; 18] = [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
            "R",
        ];
        LETTERS[self as usize]
    }
}

impl fmt::Display for ConfigCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown configuration code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown configuration `{0}`, expected one of A-R")]
pub struct UnknownConfiguration(pub String);

impl FromStr for ConfigCode {
    type Err = UnknownConfiguration;

    /// Parses a code case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownConfiguration(s.to_owned()))
    }
}

/// A named SX circuit configuration.
///
/// Immutable catalog metadata plus the [`Topology`] that selects the
/// extraction chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub code: ConfigCode,
    pub name: &'static str,
    pub description: &'static str,
    pub topology: Topology,
}

impl Configuration {
    /// Iterates the catalog in code order.
    pub fn all() -> impl Iterator<Item = &'static Configuration> {
        CATALOG.iter()
    }
}

const fn entry(
    code: ConfigCode,
    name: &'static str,
    description: &'static str,
    layout: Layout,
    trains: &'static [u8],
    stripping_stages: u8,
) -> Configuration {
    Configuration {
        code,
        name,
        description,
        topology: Topology {
            layout,
            trains,
            stripping_stages,
        },
    }
}

use ConfigCode as C;
use Layout as Lt;

#[rustfmt::skip]
static CATALOG: [Configuration; 18] = [
    entry(C::A, "Series 2Ex1S", "Two extraction stages in series, one stripping stage", Lt::Series, &[2], 1),
    entry(C::B, "Series 2Ex2S", "Two extraction stages in series, two stripping stages", Lt::Series, &[2], 2),
    entry(C::C, "Series 3Ex1S", "Three extraction stages in series, one stripping stage", Lt::Series, &[3], 1),
    entry(C::D, "Series 3Ex2S", "Three extraction stages in series, two stripping stages", Lt::Series, &[3], 2),
    entry(C::E, "Series parallel 2Ex1Px1S", "Two series extraction stages plus one parallel stage, one stripping stage", Lt::SeriesParallel, &[2, 1], 1),
    entry(C::F, "Series parallel 2Ex1Px2S", "Two series extraction stages plus one parallel stage, two stripping stages", Lt::SeriesParallel, &[2, 1], 2),
    entry(C::G, "Optimum series parallel 1Ex1Px1Ex1S", "Parallel stage between the two series stages, one stripping stage", Lt::OptimumSeriesParallel, &[2, 1], 1),
    entry(C::H, "Optimum series parallel 1Ex1Px1Ex2S", "Parallel stage between the two series stages, two stripping stages", Lt::OptimumSeriesParallel, &[2, 1], 2),
    entry(C::I, "Triple parallel 1Ex1Px1Px1S", "Three extraction stages fed in parallel, one stripping stage", Lt::TripleParallel, &[1, 1, 1], 1),
    entry(C::J, "Triple parallel 1Ex1Px1Px2S", "Three extraction stages fed in parallel, two stripping stages", Lt::TripleParallel, &[1, 1, 1], 2),
    entry(C::K, "Interlaced 1Ex1Px1Ex1Px1S", "Two interlaced two-stage trains, one stripping stage", Lt::Interlaced, &[2, 2], 1),
    entry(C::L, "Interlaced 1Ex1Px1Ex1Px2S", "Two interlaced two-stage trains, two stripping stages", Lt::Interlaced, &[2, 2], 2),
    entry(C::M, "Double series parallel 2Ex2Px1S", "Two series extraction stages plus two parallel stages, one stripping stage", Lt::DoubleSeriesParallel, &[2, 1, 1], 1),
    entry(C::N, "Double series parallel 2Ex2Px2S", "Two series extraction stages plus two parallel stages, two stripping stages", Lt::DoubleSeriesParallel, &[2, 1, 1], 2),
    entry(C::O, "Optimum triple parallel 1Ex1Px1Px1Ex1S", "Two parallel stages between the two series stages, one stripping stage", Lt::OptimumTripleParallel, &[2, 1, 1], 1),
    entry(C::P, "Optimum triple parallel 1Ex1Px1Px1Ex2S", "Two parallel stages between the two series stages, two stripping stages", Lt::OptimumTripleParallel, &[2, 1, 1], 2),
    entry(C::Q, "Organic by pass 2Ex2Px1S", "Double series parallel with loaded organic bypassing the parallel stages, one stripping stage", Lt::OrganicBypass, &[2, 1, 1], 1),
    entry(C::R, "Organic by pass 2Ex2Px2S", "Double series parallel with loaded organic bypassing the parallel stages, two stripping stages", Lt::OrganicBypass, &[2, 1, 1], 2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_code() {
        assert_eq!(Configuration::all().count(), 18);
        for (config, code) in Configuration::all().zip(ConfigCode::ALL) {
            assert_eq!(config.code, code);
            assert_eq!(code.configuration().code, code);
        }
    }

    #[test]
    fn names_encode_stripping_stages() {
        for config in Configuration::all() {
            let suffix = format!("{}S", config.topology.stripping_stages);
            assert!(config.name.ends_with(&suffix), "{}", config.name);
        }
    }

    #[test]
    fn parse_codes() {
        assert_eq!("A".parse::<ConfigCode>(), Ok(ConfigCode::A));
        assert_eq!(" r ".parse::<ConfigCode>(), Ok(ConfigCode::R));
        assert_eq!(
            "S".parse::<ConfigCode>(),
            Err(UnknownConfiguration("S".into()))
        );
        assert!("".parse::<ConfigCode>().is_err());
        assert!("AB".parse::<ConfigCode>().is_err());
    }

    #[test]
    fn display_roundtrips() {
        for code in ConfigCode::ALL {
            assert_eq!(code.to_string().parse::<ConfigCode>(), Ok(code));
        }
    }

    #[test]
    fn bypass_only_for_q_and_r() {
        let bypass: Vec<_> = Configuration::all()
            .filter(|c| c.topology.organic_bypass())
            .map(|c| c.code)
            .collect();
        assert_eq!(bypass, [ConfigCode::Q, ConfigCode::R]);
    }

    #[test]
    fn default_is_two_stage_series() {
        let config = ConfigCode::default().configuration();
        assert_eq!(config.topology.trains, &[2]);
        assert_eq!(config.topology.extraction_stages(), 2);
    }
}

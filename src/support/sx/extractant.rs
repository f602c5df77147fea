use serde::Serialize;

/// An oxime extractant the isotherm correlations were fitted for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extractant {
    /// Trade name.
    pub name: &'static str,

    /// Density, g/cm³.
    pub density: f64,

    /// Molecular weight, g/mol.
    pub molecular_weight: f64,
}

impl Extractant {
    /// Ketoxime/aldoxime blend the AML and ML correlations describe.
    pub const LIX_984N: Self = Self {
        name: "Lix984N",
        density: 0.89,
        molecular_weight: 360.0,
    };
}

impl Default for Extractant {
    fn default() -> Self {
        Self::LIX_984N
    }
}

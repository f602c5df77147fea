//! Problem formulation for the optimum v/v% search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::models::hydrometallurgy::sx::core::{
    DesignerResults, ParameterSet, SimulationError, simulate,
};
use crate::support::sx::arrangement::Topology;

/// Model adapter exposing the designer pipeline as a function of v/v% alone.
pub(super) struct LoadingModel<'a> {
    topology: &'a Topology,
    params: &'a ParameterSet,
}

impl<'a> LoadingModel<'a> {
    pub(super) fn new(topology: &'a Topology, params: &'a ParameterSet) -> Self {
        Self { topology, params }
    }
}

impl Model for LoadingModel<'_> {
    type Input = f64;
    type Output = DesignerResults;
    type Error = SimulationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        simulate::designer(self.topology, &self.params.with_v_v_percent(*input))
    }
}

/// Equation problem definition for loading matching.
///
/// Computes the residual as `loaded_organic - target`.
pub(super) struct LoadingProblem {
    target: f64,
}

impl LoadingProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }

    pub(super) fn residual(&self, output: &DesignerResults) -> f64 {
        output.loaded_organic - self.target
    }
}

impl EquationProblem<1> for LoadingProblem {
    type Input = f64;
    type Output = DesignerResults;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}

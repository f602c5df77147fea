use twine_solvers::equation::bisection;

/// Solver configuration for the optimum v/v% search.
#[derive(Debug, Clone, Copy)]
pub struct OptimumConfig {
    /// Extractant concentrations bracketing the search, v/v%.
    ///
    /// Loaded organic rises monotonically with v/v% over the default
    /// bracket. The ML correlation peaks near 45 v/v% and falls beyond it;
    /// the assays only shift it by `PLS_Ac² / PLS_Cu`, so the peak does not
    /// move with them.
    pub bracket: [f64; 2],

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the v/v% search variable.
    pub v_v_tol: f64,

    /// Absolute tolerance on the loaded-organic residual, g/L.
    pub loading_tol: f64,
}

impl Default for OptimumConfig {
    fn default() -> Self {
        Self {
            bracket: [1.0, 40.0],
            max_iters: 100,
            v_v_tol: 1e-12,
            loading_tol: 1e-12,
        }
    }
}

impl OptimumConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.v_v_tol,
            x_rel_tol: 0.0,
            residual_tol: self.loading_tol,
        }
    }
}

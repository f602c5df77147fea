//! JSON request/response boundary for SX circuit runs.
//!
//! A request names the mode, an optional configuration code (default `A`)
//! and the twelve plant parameters. Unlike the library entry points, the
//! service checks parameters with [`ParameterSet::check_physical`] before
//! simulating, and maps every failure to an HTTP-style status code.
//!
//! # Example
//!
//! ```
//! use sx_models::models::hydrometallurgy::sx::service;
//!
//! let body = r#"{
//!     "mode": "designer",
//!     "config": "c",
//!     "params": {
//!         "PLS_flow": 400, "PLS_Cu": 2.5, "PLS_Ac": 1.6, "SR": 92,
//!         "Ratio_O_A_Ext": 1, "Mef1e": 92, "Mef2e": 95, "SP_Cu": 30,
//!         "SPAc": 190, "AD_Cu": 50, "Mef1s": 98, "v_v_percent": 8.66
//!     }
//! }"#;
//!
//! let (status, reply) = service::respond(body);
//! assert_eq!(status, 200);
//! assert!(reply.contains(r#""config":"C""#));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::support::sx::{
    Extractant,
    arrangement::{ConfigCode, UnknownConfiguration},
};

use super::{
    ChartPoint, InvalidParameter, Mode, OptimumConfig, OptimumError, ParameterSet,
    SimulationError, SimulationResult, optimum_v_v_percent, simulate,
};

/// A simulation request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    pub mode: Mode,

    /// Configuration code, case-insensitive. Defaults to `A`.
    #[serde(default)]
    pub config: Option<String>,

    pub params: ParameterSet,

    /// When present, `params.v_v_percent` is replaced by the concentration
    /// at which the loaded organic reaches this value, g/L.
    #[serde(default)]
    pub target_loaded_organic: Option<f64>,
}

/// A successful simulation reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub mode: Mode,
    pub config: ConfigCode,

    /// Catalog name of the configuration.
    pub configuration: &'static str,

    pub extractant: Extractant,
    pub results: SimulationResult,
    pub chart: Vec<ChartPoint>,
}

/// Body returned alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub status: u16,
    pub message: String,
}

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The body is not a well-formed request.
    #[error("malformed request: {0}")]
    Parse(#[source] serde_json::Error),

    /// The reply could not be encoded.
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    UnknownConfiguration(#[from] UnknownConfiguration),

    /// A parameter failed the physical check.
    #[error(transparent)]
    Validation(#[from] InvalidParameter),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Optimum(#[from] OptimumError),
}

impl ServiceError {
    /// HTTP-style status code for this error.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Parse(_) => 400,
            Self::UnknownConfiguration(_) | Self::Validation(_) => 422,
            Self::Simulation(err) if err.is_caller_error() => 422,
            Self::Optimum(err) if err.is_caller_error() => 422,
            Self::Encode(_) | Self::Simulation(_) | Self::Optimum(_) => 500,
        }
    }

    /// The error as a reply body.
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            status: self.status(),
            message: self.to_string(),
        }
    }
}

/// Serves a parsed request.
///
/// # Errors
///
/// Returns a [`ServiceError`] if the configuration is unknown, a parameter
/// is not physical, or the computation fails.
pub fn handle(request: &Request) -> Result<Response, ServiceError> {
    let config = match request.config.as_deref() {
        Some(code) => code.parse::<ConfigCode>()?,
        None => ConfigCode::default(),
    };

    request.params.check_physical()?;

    let params = match request.target_loaded_organic {
        Some(target) => {
            let found =
                optimum_v_v_percent(config, &request.params, target, OptimumConfig::default())?;
            request.params.with_v_v_percent(found.optimum_v_v_percent)
        }
        None => request.params,
    };

    let run = simulate(config, request.mode, &params)?;

    Ok(Response {
        mode: request.mode,
        config,
        configuration: config.configuration().name,
        extractant: Extractant::LIX_984N,
        results: run.results,
        chart: run.chart,
    })
}

/// Serves a JSON request body and returns the JSON reply body.
///
/// # Errors
///
/// Returns [`ServiceError::Parse`] for a malformed body, otherwise the
/// errors of [`handle`].
pub fn handle_json(body: &str) -> Result<String, ServiceError> {
    let request: Request = serde_json::from_str(body).map_err(ServiceError::Parse)?;
    let response = handle(&request)?;
    serde_json::to_string(&response).map_err(ServiceError::Encode)
}

/// Serves a JSON request body, folding failures into an [`ErrorPayload`].
///
/// Returns the status code and the reply body.
#[must_use]
pub fn respond(body: &str) -> (u16, String) {
    match handle_json(body) {
        Ok(reply) => {
            debug!(target: "sx.service", status = 200, "request served");
            (200, reply)
        }
        Err(err) => {
            let payload = err.payload();
            warn!(target: "sx.service", status = payload.status, error = %err, "request failed");
            let reply = serde_json::to_string(&payload).unwrap_or_else(|_| {
                format!(r#"{{"status":{},"message":"unencodable error"}}"#, payload.status)
            });
            (payload.status, reply)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use serde_json::{Value, json};

    fn body(mode: &str, config: Option<&str>) -> Value {
        let mut body = json!({
            "mode": mode,
            "params": serde_json::to_value(ParameterSet::default()).unwrap(),
        });
        if let Some(config) = config {
            body["config"] = json!(config);
        }
        body
    }

    fn request(body: &Value) -> Request {
        serde_json::from_value(body.clone()).unwrap()
    }

    #[test]
    fn config_defaults_to_a() {
        let response = handle(&request(&body("designer", None))).unwrap();
        assert_eq!(response.config, ConfigCode::A);
        assert_eq!(response.configuration, ConfigCode::A.configuration().name);
        assert_eq!(response.extractant.name, "Lix984N");
        assert_eq!(response.chart.len(), 11);
    }

    #[test]
    fn designer_reply_has_result_keys() {
        let reply: Value =
            serde_json::from_str(&handle_json(&body("designer", Some("A")).to_string()).unwrap())
                .unwrap();

        assert_eq!(reply["mode"], "designer");
        assert_eq!(reply["config"], "A");
        for key in [
            "optimum_v_v_percent",
            "AML",
            "ML",
            "loaded_organic",
            "stripped_organic",
            "raffinate_Cu",
            "raffinate_Ac",
            "extraction_recovery",
            "stripping_recovery",
            "net_transfer",
            "organic_flow",
        ] {
            assert!(reply["results"][key].is_number(), "{key}");
        }
        assert!(reply["results"].get("saturation_ratio").is_none());
        assert_eq!(reply["chart"][1]["v_v_percent"], 10.0);
    }

    #[test]
    fn metallurgist_reply_adds_plant_keys() {
        let reply: Value =
            serde_json::from_str(&handle_json(&body("metallurgist", Some("q")).to_string()).unwrap())
                .unwrap();

        assert_eq!(reply["config"], "Q");
        assert!(reply["results"]["AML"].is_number());
        assert!(reply["results"]["saturation_ratio"].is_number());
        assert_eq!(reply["results"]["mixer_efficiency_E1"], 92.0);
        assert_eq!(reply["results"]["mixer_efficiency_E2"], 95.0);
    }

    #[test]
    fn malformed_body_is_400() {
        let (status, reply) = respond("{not json");
        assert_eq!(status, 400);
        let payload: Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(payload["status"], 400);
        assert!(payload["message"].as_str().unwrap().starts_with("malformed request"));
    }

    #[test]
    fn missing_parameter_is_400() {
        let mut body = body("designer", None);
        body["params"].as_object_mut().unwrap().remove("PLS_Cu");
        assert_eq!(respond(&body.to_string()).0, 400);
    }

    #[test]
    fn unknown_mode_is_400() {
        assert_eq!(respond(&body("operator", None).to_string()).0, 400);
    }

    #[test]
    fn unknown_configuration_is_422() {
        let err = handle(&request(&body("designer", Some("Z")))).unwrap_err();
        assert!(matches!(err, ServiceError::UnknownConfiguration(_)));
        assert_eq!(err.status(), 422);
    }

    #[test]
    fn non_physical_parameter_is_422() {
        let mut body = body("metallurgist", None);
        body["params"]["Mef1e"] = json!(140.0);

        let (status, reply) = respond(&body.to_string());
        assert_eq!(status, 422);
        let payload: Value = serde_json::from_str(&reply).unwrap();
        assert!(payload["message"].as_str().unwrap().contains("Mef1e"));
    }

    #[test]
    fn extractant_concentration_above_100_percent_is_422() {
        for v in [150.0, 1e200] {
            let mut body = body("designer", None);
            body["params"]["v_v_percent"] = json!(v);

            let (status, reply) = respond(&body.to_string());
            assert_eq!(status, 422, "v_v_percent = {v}");
            let payload: Value = serde_json::from_str(&reply).unwrap();
            assert!(payload["message"].as_str().unwrap().contains("v_v_percent"));
        }
    }

    #[test]
    fn zero_copper_is_422() {
        let mut body = body("designer", None);
        body["params"]["PLS_Cu"] = json!(0.0);
        let err = handle(&request(&body)).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.status(), 422);
    }

    #[test]
    fn computation_failures_are_500() {
        let err = ServiceError::from(SimulationError::NonFinite {
            field: "ML",
            value: f64::NAN,
        });
        assert_eq!(err.status(), 500);
        assert_eq!(err.payload().status, 500);
    }

    #[test]
    fn target_loading_sets_extractant_concentration() {
        let forward = simulate(
            ConfigCode::A,
            Mode::Designer,
            &ParameterSet::default().with_v_v_percent(20.0),
        )
        .unwrap();

        let mut body = body("metallurgist", None);
        body["target_loaded_organic"] = json!(forward.results.shared().loaded_organic);
        let response = handle(&request(&body)).unwrap();

        assert_eq!(response.results.mode(), Mode::Metallurgist);
        assert_relative_eq!(
            response.results.shared().optimum_v_v_percent,
            20.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn unreachable_target_is_422() {
        let mut body = body("designer", None);
        body["target_loaded_organic"] = json!(50.0);
        let err = handle(&request(&body)).unwrap_err();
        assert!(matches!(err, ServiceError::Optimum(_)));
        assert_eq!(err.status(), 422);
    }
}

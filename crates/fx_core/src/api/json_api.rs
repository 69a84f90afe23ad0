//! Schema-versioned JSON front door for host applications.
//!
//! Errors cross this boundary as `"CODE: message"` strings so callers can
//! branch on the code without parsing prose.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::engine::generate_flying_star;
use crate::error::EngineError;
use crate::models::{ChartConfig, ChartInput, ChartResult, EvaluationProfile};
use crate::SCHEMA_VERSION;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_REQUEST";
    pub const UNSUPPORTED_SCHEMA: &str = "E_SCHEMA";
    pub const INVALID_DATE: &str = "E_DATE";
    pub const INVALID_INPUT: &str = "E_INPUT";
    pub const SERIALIZE_FAILED: &str = "E_SERIALIZE";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    pub schema_version: u8,
    /// Calendar date, `YYYY-MM-DD` or RFC 3339.
    pub observed_at: String,
    /// Facing bearing in degrees, 0 = north, clockwise, within [0, 360).
    pub facing_degrees: f64,
    #[serde(default)]
    pub config: Option<ChartConfigData>,
}

/// Per-call configuration; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChartConfigData {
    pub apply_ti_gua: bool,
    pub apply_fan_gua: bool,
    pub evaluation_profile: Option<EvaluationProfile>,
    pub boundary_tolerance_deg: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub result: ChartResult,
}

/// Accepts a plain date or a full RFC 3339 timestamp (the time of day and
/// zone never change the chart, only the calendar date does).
fn parse_observed_at(raw: &str) -> Result<NaiveDate, EngineError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    Err(EngineError::InvalidDate(format!(
        "expected YYYY-MM-DD or RFC 3339, got '{raw}'"
    )))
}

fn convert_config(data: Option<ChartConfigData>) -> ChartConfig {
    let data = data.unwrap_or_default();
    let defaults = ChartConfig::default();
    ChartConfig {
        apply_ti_gua: data.apply_ti_gua,
        apply_fan_gua: data.apply_fan_gua,
        evaluation_profile: data.evaluation_profile.unwrap_or_default(),
        boundary_tolerance_deg: data
            .boundary_tolerance_deg
            .unwrap_or(defaults.boundary_tolerance_deg),
    }
}

/// Main entry point for the JSON API: generates a chart from a JSON request.
pub fn generate_chart_json(request_json: &str) -> Result<String, String> {
    let request: ChartRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA,
            format!("unsupported schema version: {}", request.schema_version),
        ));
    }

    let observed_at = parse_observed_at(&request.observed_at)
        .map_err(|e| err_code(error_codes::INVALID_DATE, e))?;
    let input = ChartInput {
        observed_at,
        facing_degrees: request.facing_degrees,
        config: convert_config(request.config),
    };

    let result =
        generate_flying_star(&input).map_err(|e| err_code(error_codes::INVALID_INPUT, e))?;

    let response = ChartResponse {
        schema_version: SCHEMA_VERSION,
        result,
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZE_FAILED, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(observed_at: &str, facing: f64) -> String {
        format!(
            r#"{{"schema_version": 1, "observed_at": "{observed_at}", "facing_degrees": {facing}}}"#
        )
    }

    #[test]
    fn round_trips_a_basic_chart() {
        let response = generate_chart_json(&request("2024-06-01", 180.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["period"], 9);
        assert_eq!(value["facing"]["mountain"], "Wu");
        assert_eq!(value["sitting"]["mountain"], "Zi");
        assert_eq!(value["caiwei"], 9);
        assert_eq!(value["plate"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn accepts_rfc3339_timestamps() {
        let a = generate_chart_json(&request("2024-06-01", 180.0)).unwrap();
        let b = generate_chart_json(&request("2024-06-01T14:30:00+08:00", 180.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_malformed_requests_with_codes() {
        let err = generate_chart_json("not json").unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_REQUEST));

        let err = generate_chart_json(
            r#"{"schema_version": 7, "observed_at": "2024-06-01", "facing_degrees": 180}"#,
        )
        .unwrap_err();
        assert!(err.starts_with(error_codes::UNSUPPORTED_SCHEMA));

        let err = generate_chart_json(&request("first of June", 180.0)).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_DATE));

        let err = parse_observed_at("first of June").unwrap_err();
        assert!(matches!(err, EngineError::InvalidDate(_)));

        let err = generate_chart_json(&request("2024-06-01", 400.0)).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_INPUT));
    }

    #[test]
    fn config_block_reaches_the_engine() {
        let json = r#"{
            "schema_version": 1,
            "observed_at": "1948-06-01",
            "facing_degrees": 180.0,
            "config": {"apply_ti_gua": true, "evaluation_profile": "conservative"}
        }"#;
        let response = generate_chart_json(json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["meta"]["rules_applied"][0], "TiGua");
    }
}

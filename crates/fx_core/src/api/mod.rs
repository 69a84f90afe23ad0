pub mod json_api;

pub use json_api::{generate_chart_json, ChartRequest, ChartResponse};

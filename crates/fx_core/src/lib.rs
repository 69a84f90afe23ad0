//! # fx_core - Xuankong Flying-Star Chart Engine
//!
//! Deterministic feng shui chart generation: a calendar date and a facing
//! bearing go in, a complete nine-palace flying-star chart comes out, with
//! per-palace evaluation, classical formation detection and special-position
//! lookup. Equal inputs always produce equal output; there is no clock, no
//! randomness and no I/O anywhere in the pipeline.
//!
//! Entry points:
//! - [`generate_flying_star`] for typed in-process callers.
//! - [`generate_chart_json`] for host applications speaking JSON.

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{generate_chart_json, ChartRequest, ChartResponse};
pub use engine::generate_flying_star;
pub use error::{EngineError, Result};
pub use models::{
    ChartConfig, ChartInput, ChartMeta, ChartResult, Evaluation, EvaluationProfile, Geju, Mountain,
    MountainInfo, PalaceCell, PalaceIndex, Period, Plates, Star, StarPlate,
};

/// Library version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON API schema version.
pub const SCHEMA_VERSION: u8 = 1;

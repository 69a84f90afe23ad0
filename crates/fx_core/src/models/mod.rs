//! Domain models shared across the engine, API and CLI layers.

mod mountain;
mod plate;

pub use mountain::{Mountain, Polarity, Trigram, YuanLong, SECTOR_DEGREES};
pub use plate::{PalaceCell, Plates, StarPlate};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Luoshu palace number, 1..=9 (5 is the center).
pub type PalaceIndex = u8;

/// Flying star number, 1..=9.
pub type Star = u8;

/// Yun period number, 1..=9 (each spans 20 years of the 180-year cycle).
pub type Period = u8;

/// Scoring profile for the evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationProfile {
    /// Classical scoring table as-is.
    #[default]
    Standard,
    /// Penalties weighted 1.5x, bonuses 0.5x.
    Conservative,
}

/// Per-call knobs. Everything defaults to the plain classical reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Apply the Ti-Gua swap when the sitting palace qualifies.
    pub apply_ti_gua: bool,
    /// Apply the Fan-Gua inversion to both star axes.
    pub apply_fan_gua: bool,
    pub evaluation_profile: EvaluationProfile,
    /// Distance from a sector edge (degrees) below which the mountain
    /// reading is flagged ambiguous.
    pub boundary_tolerance_deg: f64,
}

impl Default for ChartConfig {
    fn default() -> ChartConfig {
        ChartConfig {
            apply_ti_gua: false,
            apply_fan_gua: false,
            evaluation_profile: EvaluationProfile::Standard,
            boundary_tolerance_deg: 1.5,
        }
    }
}

/// Validated input for one chart generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// Date the structure is read for (decides the Yun period).
    pub observed_at: NaiveDate,
    /// Facing bearing in degrees, 0 = north, clockwise, within [0, 360).
    pub facing_degrees: f64,
    #[serde(default)]
    pub config: ChartConfig,
}

/// A resolved mountain with its classical attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountainInfo {
    pub mountain: Mountain,
    pub palace: PalaceIndex,
    pub yuan: YuanLong,
    /// Bearing fell within tolerance of a sector edge.
    pub ambiguous: bool,
}

/// Score and qualitative tags for one palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceEvaluation {
    /// Clamped to 0..=100.
    pub score: i32,
    pub tags: Vec<String>,
}

/// Evaluation of the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub palaces: BTreeMap<PalaceIndex, PalaceEvaluation>,
    /// Weighted mean of palace scores (center and facing palace count double).
    pub overall_score: f64,
    pub is_favorable: bool,
}

/// Detected classical formations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geju {
    pub types: Vec<String>,
    pub descriptions: Vec<String>,
    /// At least one favorable formation and no unfavorable one.
    pub is_favorable: bool,
}

/// Audit trail and ambiguity flag for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartMeta {
    /// Names of exception rules that fired, in application order.
    pub rules_applied: Vec<String>,
    /// True when the date sat on a period boundary or the bearing sat on a
    /// sector boundary; the result used the default resolution.
    pub ambiguous: bool,
}

/// Complete output of one chart generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub period: Period,
    pub sitting: MountainInfo,
    pub facing: MountainInfo,
    /// The three axis plates after exception rules.
    pub plates: Plates,
    /// Merged view, sorted by palace 1..=9.
    pub plate: Vec<PalaceCell>,
    pub evaluation: Evaluation,
    pub geju: Geju,
    /// Palace holding the 1-4 / 4-1 academic combination, if any.
    pub wenchangwei: Option<PalaceIndex>,
    /// Palace whose facing star carries the current period, if any.
    pub caiwei: Option<PalaceIndex>,
    pub meta: ChartMeta,
}

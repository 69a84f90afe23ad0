//! Chart generation pipeline.
//!
//! `generate_flying_star` is the single entry point: it validates the
//! input, resolves period and mountains, flies the three plates, applies
//! the configured exception rules and derives every downstream reading
//! from the merged chart.

pub mod evaluate;
pub mod exceptions;
pub mod geju;
pub mod luoshu;
pub mod merge;
pub mod mountains;
pub mod period;
pub mod positions;

use tracing::debug;

use crate::error::Result;
use crate::models::{ChartInput, ChartMeta, ChartResult, Plates};

/// Generates a complete flying-star chart for one date and facing bearing.
///
/// The computation is pure: equal inputs always produce equal results.
/// Invalid bearings, tolerances and dates fail before any plate is built;
/// boundary conditions never fail, they only set `meta.ambiguous`.
pub fn generate_flying_star(input: &ChartInput) -> Result<ChartResult> {
    let (facing, sitting) =
        mountains::resolve_axis(input.facing_degrees, input.config.boundary_tolerance_deg)?;
    let resolved = period::resolve_period(input.observed_at);

    debug!(
        period = resolved.period,
        facing = facing.mountain.name(),
        sitting = sitting.mountain.name(),
        "generating chart"
    );

    let period_plate = luoshu::period_plate(resolved.period);
    let mut mountain_plate = luoshu::direction_plate(&period_plate, sitting.palace);
    let mut facing_plate = luoshu::direction_plate(&period_plate, facing.palace);

    let rules_applied = exceptions::apply_exception_rules(
        &input.config,
        sitting.palace,
        &period_plate,
        &mut mountain_plate,
        &mut facing_plate,
    );

    let plates = Plates {
        period: period_plate,
        mountain: mountain_plate,
        facing: facing_plate,
    };
    let plate = merge::merge_plates(&plates);

    let evaluation = evaluate::evaluate_chart(
        &plate,
        resolved.period,
        facing.palace,
        input.config.evaluation_profile,
    );
    let geju = geju::analyze_geju(&geju::PatternContext {
        cells: &plate,
        period: resolved.period,
        sitting_palace: sitting.palace,
        facing_palace: facing.palace,
    });
    let wenchangwei = positions::find_wenchang(&plate);
    let caiwei = positions::find_caiwei(&plate, resolved.period);

    let meta = ChartMeta {
        rules_applied,
        ambiguous: resolved.is_boundary || facing.ambiguous,
    };

    Ok(ChartResult {
        period: resolved.period,
        sitting,
        facing,
        plates,
        plate,
        evaluation,
        geju,
        wenchangwei,
        caiwei,
        meta,
    })
}

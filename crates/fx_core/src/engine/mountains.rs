//! Bearing to mountain resolution.

use crate::error::{EngineError, Result};
use crate::models::{Mountain, MountainInfo, SECTOR_DEGREES};

/// Outcome of mapping a bearing onto the 24-mountain ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountainResolution {
    pub mountain: Mountain,
    /// Bearing fell within tolerance of a sector edge.
    pub ambiguous: bool,
}

/// Rejects bearings outside [0, 360) or non-finite values.
pub fn validate_bearing(bearing: f64) -> Result<()> {
    if !bearing.is_finite() || !(0.0..360.0).contains(&bearing) {
        return Err(EngineError::InvalidBearing(bearing));
    }
    Ok(())
}

/// Rejects tolerances that are negative, non-finite, or wide enough to make
/// every reading ambiguous (half a sector).
pub fn validate_tolerance(tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || !(0.0..SECTOR_DEGREES / 2.0).contains(&tolerance) {
        return Err(EngineError::InvalidTolerance(tolerance));
    }
    Ok(())
}

/// Maps a validated bearing onto its mountain sector.
///
/// Sector edges sit at 7.5° + k*15°; the Zi sector wraps through 0°. A
/// bearing within `tolerance` degrees of either edge of its sector is
/// resolved to that sector but flagged ambiguous.
pub fn map_bearing(bearing: f64, tolerance: f64) -> MountainResolution {
    // Shift by half a sector so Zi occupies [0, 15) in shifted space.
    let shifted = (bearing + SECTOR_DEGREES / 2.0).rem_euclid(360.0);
    let sector = (shifted / SECTOR_DEGREES) as usize % 24;
    let offset = shifted - sector as f64 * SECTOR_DEGREES;
    let ambiguous = offset <= tolerance || SECTOR_DEGREES - offset <= tolerance;

    MountainResolution {
        mountain: Mountain::ALL[sector],
        ambiguous,
    }
}

/// Resolves a facing bearing into facing and sitting mountain info.
pub fn resolve_axis(
    facing_degrees: f64,
    tolerance: f64,
) -> Result<(MountainInfo, MountainInfo)> {
    validate_bearing(facing_degrees)?;
    validate_tolerance(tolerance)?;

    let res = map_bearing(facing_degrees, tolerance);
    let facing = info(res.mountain, res.ambiguous);
    let sitting = info(res.mountain.opposite(), res.ambiguous);
    Ok((facing, sitting))
}

fn info(mountain: Mountain, ambiguous: bool) -> MountainInfo {
    MountainInfo {
        mountain,
        palace: mountain.palace(),
        yuan: mountain.yuan(),
        ambiguous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_centers_resolve_cleanly() {
        let r = map_bearing(0.0, 1.5);
        assert_eq!(r.mountain, Mountain::Zi);
        assert!(!r.ambiguous);
        assert_eq!(map_bearing(90.0, 1.5).mountain, Mountain::Mao);
        assert_eq!(map_bearing(180.0, 1.5).mountain, Mountain::Wu);
        assert_eq!(map_bearing(270.0, 1.5).mountain, Mountain::You);
        assert_eq!(map_bearing(315.0, 1.5).mountain, Mountain::Qian);
        assert_eq!(map_bearing(345.0, 1.5).mountain, Mountain::Ren);
    }

    #[test]
    fn zi_sector_wraps_through_north() {
        assert_eq!(map_bearing(359.0, 0.5).mountain, Mountain::Zi);
        assert_eq!(map_bearing(352.5, 0.0).mountain, Mountain::Zi);
        assert_eq!(map_bearing(7.4, 0.0).mountain, Mountain::Zi);
        assert_eq!(map_bearing(7.5, 0.0).mountain, Mountain::Gui);
    }

    #[test]
    fn edge_proximity_is_flagged() {
        // 7.5° is the Zi/Gui edge.
        let r = map_bearing(6.5, 1.5);
        assert_eq!(r.mountain, Mountain::Zi);
        assert!(r.ambiguous);
        let r = map_bearing(8.0, 1.5);
        assert_eq!(r.mountain, Mountain::Gui);
        assert!(r.ambiguous);
        // Dead center never flags at the default tolerance.
        assert!(!map_bearing(15.0, 1.5).ambiguous);
        // Tighter tolerance un-flags the same bearing.
        assert!(!map_bearing(6.5, 0.5).ambiguous);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(validate_bearing(-0.1).is_err());
        assert!(validate_bearing(360.0).is_err());
        assert!(validate_bearing(f64::NAN).is_err());
        assert!(validate_bearing(0.0).is_ok());
        assert!(validate_bearing(359.999).is_ok());

        assert!(validate_tolerance(-1.0).is_err());
        assert!(validate_tolerance(7.5).is_err());
        assert!(validate_tolerance(0.0).is_ok());
        assert!(validate_tolerance(1.5).is_ok());
    }

    #[test]
    fn axis_pairs_sitting_opposite_facing() {
        let (facing, sitting) = resolve_axis(180.0, 1.5).unwrap();
        assert_eq!(facing.mountain, Mountain::Wu);
        assert_eq!(facing.palace, 9);
        assert_eq!(sitting.mountain, Mountain::Zi);
        assert_eq!(sitting.palace, 1);
        assert!(!facing.ambiguous && !sitting.ambiguous);
    }
}

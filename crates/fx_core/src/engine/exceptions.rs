//! Ti-Gua and Fan-Gua exception rules.
//!
//! Both rules rewrite only the mountain and facing plates; the period plate
//! is never touched. When both are enabled and applicable, Ti-Gua runs
//! before Fan-Gua.

use crate::models::{ChartConfig, PalaceIndex, Star, StarPlate};

pub const RULE_TI_GUA: &str = "TiGua";
pub const RULE_FAN_GUA: &str = "FanGua";

/// Ti-Gua fires only when the period-plate star seated at the sitting
/// mountain's home palace equals that palace's own Luoshu number.
pub fn ti_gua_applies(period_plate: &StarPlate, sitting_palace: PalaceIndex) -> bool {
    period_plate.star(sitting_palace) == sitting_palace
}

/// Fan-Gua inversion: star s becomes 10 - s, with 5 its own image.
fn invert(star: Star) -> Star {
    10 - star
}

/// Applies the configured exception rules in order, returning the names of
/// the rules that fired.
pub fn apply_exception_rules(
    config: &ChartConfig,
    sitting_palace: PalaceIndex,
    period_plate: &StarPlate,
    mountain: &mut StarPlate,
    facing: &mut StarPlate,
) -> Vec<String> {
    let mut applied = Vec::new();

    if config.apply_ti_gua && ti_gua_applies(period_plate, sitting_palace) {
        for palace in 1..=9 {
            let m = mountain.star(palace);
            let f = facing.star(palace);
            mountain.set_star(palace, f);
            facing.set_star(palace, m);
        }
        applied.push(RULE_TI_GUA.to_string());
    }

    if config.apply_fan_gua {
        for palace in 1..=9 {
            mountain.set_star(palace, invert(mountain.star(palace)));
            facing.set_star(palace, invert(facing.star(palace)));
        }
        applied.push(RULE_FAN_GUA.to_string());
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::luoshu::{direction_plate, period_plate};

    fn config(ti_gua: bool, fan_gua: bool) -> ChartConfig {
        ChartConfig {
            apply_ti_gua: ti_gua,
            apply_fan_gua: fan_gua,
            ..ChartConfig::default()
        }
    }

    #[test]
    fn ti_gua_eligibility_tracks_the_luoshu_resident() {
        // Period 5 yields the Luoshu identity plate, so every palace
        // qualifies.
        let pp = period_plate(5);
        for palace in 1..=9 {
            assert!(ti_gua_applies(&pp, palace));
        }
        // Period 9 seats star 5 at palace 1.
        let pp = period_plate(9);
        assert!(!ti_gua_applies(&pp, 1));
        assert!(!ti_gua_applies(&pp, 9));
    }

    #[test]
    fn ti_gua_swaps_the_two_axes() {
        let pp = period_plate(5);
        let mut mountain = direction_plate(&pp, 1);
        let mut facing = direction_plate(&pp, 9);
        let m0 = mountain;
        let f0 = facing;

        let applied = apply_exception_rules(&config(true, false), 1, &pp, &mut mountain, &mut facing);
        assert_eq!(applied, vec![RULE_TI_GUA.to_string()]);
        for palace in 1..=9 {
            assert_eq!(mountain.star(palace), f0.star(palace));
            assert_eq!(facing.star(palace), m0.star(palace));
        }
    }

    #[test]
    fn ti_gua_stays_silent_when_ineligible() {
        let pp = period_plate(9);
        let mut mountain = direction_plate(&pp, 1);
        let mut facing = direction_plate(&pp, 9);
        let m0 = mountain;

        let applied = apply_exception_rules(&config(true, false), 1, &pp, &mut mountain, &mut facing);
        assert!(applied.is_empty());
        assert_eq!(mountain, m0);
    }

    #[test]
    fn fan_gua_is_an_involution() {
        let pp = period_plate(9);
        let mut mountain = direction_plate(&pp, 1);
        let mut facing = direction_plate(&pp, 9);
        let m0 = mountain;

        let applied = apply_exception_rules(&config(false, true), 1, &pp, &mut mountain, &mut facing);
        assert_eq!(applied, vec![RULE_FAN_GUA.to_string()]);
        assert!(mountain.is_permutation());
        assert!(facing.is_permutation());
        // Star 5 is its own image; the rest pair up across 10.
        assert_eq!(mountain.star(5) + m0.star(5), 10);

        apply_exception_rules(&config(false, true), 1, &pp, &mut mountain, &mut facing);
        assert_eq!(mountain, m0);
    }

    #[test]
    fn both_rules_fire_in_order() {
        let pp = period_plate(5);
        let mut mountain = direction_plate(&pp, 1);
        let mut facing = direction_plate(&pp, 9);

        let applied = apply_exception_rules(&config(true, true), 1, &pp, &mut mountain, &mut facing);
        assert_eq!(
            applied,
            vec![RULE_TI_GUA.to_string(), RULE_FAN_GUA.to_string()]
        );
    }
}

//! Merges the three axis plates into palace-keyed cells.

use crate::models::{PalaceCell, Plates};

/// Stacks the period, mountain and facing stars per palace, sorted by
/// palace number 1..=9.
pub fn merge_plates(plates: &Plates) -> Vec<PalaceCell> {
    (1..=9)
        .map(|palace| PalaceCell {
            palace,
            period_star: plates.period.star(palace),
            mountain_star: plates.mountain.star(palace),
            facing_star: plates.facing.star(palace),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::luoshu::{direction_plate, period_plate};

    fn zi_wu_period_nine() -> Plates {
        let period = period_plate(9);
        Plates {
            period,
            mountain: direction_plate(&period, 1),
            facing: direction_plate(&period, 9),
        }
    }

    #[test]
    fn cells_are_sorted_and_complete() {
        let cells = merge_plates(&zi_wu_period_nine());
        assert_eq!(cells.len(), 9);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.palace as usize, i + 1);
        }
    }

    #[test]
    fn cells_copy_the_axis_plates_verbatim() {
        let plates = zi_wu_period_nine();
        let cells = merge_plates(&plates);
        let center = &cells[4];
        assert_eq!(center.period_star, 9);
        assert_eq!(center.mountain_star, 5);
        assert_eq!(center.facing_star, 4);
        let north = &cells[0];
        assert_eq!(north.period_star, 5);
        assert_eq!(north.mountain_star, 1);
        assert_eq!(north.facing_star, 8);
    }

    #[test]
    fn merge_is_deterministic() {
        let plates = zi_wu_period_nine();
        assert_eq!(merge_plates(&plates), merge_plates(&plates));
    }
}

//! Special-position lookup: Wenchang (academic) and Caiwei (wealth).

use crate::models::{PalaceCell, PalaceIndex, Period};

/// First palace (ascending) whose mountain/facing stars form the 1-4 or 4-1
/// academic combination.
pub fn find_wenchang(cells: &[PalaceCell]) -> Option<PalaceIndex> {
    cells
        .iter()
        .find(|c| {
            (c.mountain_star == 1 && c.facing_star == 4)
                || (c.mountain_star == 4 && c.facing_star == 1)
        })
        .map(|c| c.palace)
}

/// First palace (ascending) whose facing star carries the current period.
pub fn find_caiwei(cells: &[PalaceCell], period: Period) -> Option<PalaceIndex> {
    cells
        .iter()
        .find(|c| c.facing_star == period)
        .map(|c| c.palace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::luoshu::{direction_plate, period_plate};
    use crate::engine::merge::merge_plates;
    use crate::models::Plates;

    fn cell(palace: PalaceIndex, m: u8, f: u8) -> PalaceCell {
        PalaceCell {
            palace,
            period_star: 5,
            mountain_star: m,
            facing_star: f,
        }
    }

    #[test]
    fn wenchang_matches_either_order() {
        let cells = vec![cell(1, 2, 3), cell(2, 1, 4), cell(3, 4, 1)];
        assert_eq!(find_wenchang(&cells), Some(2));
        let cells = vec![cell(1, 4, 1)];
        assert_eq!(find_wenchang(&cells), Some(1));
        let cells = vec![cell(1, 1, 1), cell(2, 4, 4)];
        assert_eq!(find_wenchang(&cells), None);
    }

    #[test]
    fn caiwei_takes_the_lowest_matching_palace() {
        let cells = vec![cell(1, 2, 9), cell(2, 3, 9)];
        assert_eq!(find_caiwei(&cells, 9), Some(1));
        assert_eq!(find_caiwei(&cells, 8), None);
    }

    #[test]
    fn zi_wu_period_nine_positions() {
        let pp = period_plate(9);
        let cells = merge_plates(&Plates {
            period: pp,
            mountain: direction_plate(&pp, 1),
            facing: direction_plate(&pp, 9),
        });
        // Facing stars run 8,7,6,5,4,3,2,1,9 across palaces 1..=9; only
        // palace 9 carries the period.
        assert_eq!(find_caiwei(&cells, 9), Some(9));
        // No palace pairs 1 with 4 on this axis.
        assert_eq!(find_wenchang(&cells), None);
    }
}

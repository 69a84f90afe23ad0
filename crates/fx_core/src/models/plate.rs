//! Star plates and merged palace cells.

use serde::{Deserialize, Serialize};

use super::{PalaceIndex, Star};

/// One axis of star placement: nine stars keyed by palace 1..=9.
/// Serializes as a bare nine-element array, index = palace - 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarPlate {
    stars: [Star; 9],
}

impl StarPlate {
    /// Builds a plate from an array indexed by `palace - 1`.
    pub fn from_palace_array(stars: [Star; 9]) -> StarPlate {
        StarPlate { stars }
    }

    /// Star resident in the given palace. Out-of-range palaces are clamped
    /// into 1..=9 so the accessor is total.
    pub fn star(&self, palace: PalaceIndex) -> Star {
        let idx = (palace.clamp(1, 9) - 1) as usize;
        self.stars[idx]
    }

    /// Replaces the star in the given palace.
    pub fn set_star(&mut self, palace: PalaceIndex, star: Star) {
        let idx = (palace.clamp(1, 9) - 1) as usize;
        self.stars[idx] = star;
    }

    /// `(palace, star)` pairs in palace order.
    pub fn iter(&self) -> impl Iterator<Item = (PalaceIndex, Star)> + '_ {
        self.stars
            .iter()
            .enumerate()
            .map(|(i, &s)| ((i + 1) as PalaceIndex, s))
    }

    /// True when every star 1..=9 appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; 9];
        for &s in &self.stars {
            if !(1..=9).contains(&s) {
                return false;
            }
            let idx = (s - 1) as usize;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

/// The three axis plates of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plates {
    pub period: StarPlate,
    pub mountain: StarPlate,
    pub facing: StarPlate,
}

/// One palace of the merged chart: the three stars stacked together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceCell {
    pub palace: PalaceIndex,
    pub period_star: Star,
    pub mountain_star: Star,
    pub facing_star: Star,
}

//! Luoshu traversal and plate construction.
//!
//! Every plate is built the same way: the seed star lands in the center
//! palace and the remaining stars are dealt along the fixed Luoshu order,
//! stepping forward (shun fei) or backward (ni fei) depending on the seed's
//! polarity.

use crate::models::{PalaceIndex, Period, Star, StarPlate};

/// Palace visiting order of the flight, starting at the center.
pub const LUOSHU_ORDER: [PalaceIndex; 9] = [5, 6, 7, 8, 9, 1, 2, 3, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flight {
    Forward,
    Backward,
}

/// Forward flight: the star after `star`, wrapping 9 -> 1.
pub fn shun_fei(star: Star, steps: u32) -> Star {
    ((star as u32 - 1 + steps % 9) % 9 + 1) as Star
}

/// Backward flight: the star before `star`, wrapping 1 -> 9.
pub fn ni_fei(star: Star, steps: u32) -> Star {
    let s = (star as i64 - 1 - (steps % 9) as i64).rem_euclid(9);
    (s + 1) as Star
}

/// Flight direction from seed parity: odd seeds are yang and fly forward,
/// even seeds are yin and fly backward. 5 counts as yang.
pub fn flight_for_seed(seed: Star) -> Flight {
    if seed % 2 == 1 {
        Flight::Forward
    } else {
        Flight::Backward
    }
}

/// Seeds the center palace and deals the rest along the Luoshu order.
pub fn fly(seed: Star, flight: Flight) -> StarPlate {
    let mut stars = [0 as Star; 9];
    let mut current = seed;
    stars[(LUOSHU_ORDER[0] - 1) as usize] = current;
    for &palace in &LUOSHU_ORDER[1..] {
        current = match flight {
            Flight::Forward => shun_fei(current, 1),
            Flight::Backward => ni_fei(current, 1),
        };
        stars[(palace - 1) as usize] = current;
    }
    StarPlate::from_palace_array(stars)
}

/// Period plate: the period star seeds the center and always flies forward.
pub fn period_plate(period: Period) -> StarPlate {
    fly(period, Flight::Forward)
}

/// Mountain or facing plate for a direction whose home palace is
/// `direction_palace`: the period-plate star resident there becomes the
/// seed, and its parity decides the flight.
pub fn direction_plate(period_plate: &StarPlate, direction_palace: PalaceIndex) -> StarPlate {
    let seed = period_plate.star(direction_palace);
    fly(seed, flight_for_seed(seed))
}

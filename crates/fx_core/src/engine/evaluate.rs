//! Per-palace scoring and the overall verdict.

use std::collections::BTreeMap;

use crate::models::{
    Evaluation, EvaluationProfile, PalaceCell, PalaceEvaluation, PalaceIndex, Period, Star,
};

/// Star pairs read as auspicious, in either order.
const AUSPICIOUS_PAIRS: [(Star, Star); 4] = [(6, 8), (1, 4), (1, 6), (4, 9)];

/// Star pairs read as inauspicious, in either order.
const INAUSPICIOUS_PAIRS: [(Star, Star); 4] = [(2, 5), (2, 3), (6, 7), (9, 5)];

const BASE_SCORE: i32 = 50;

fn pair_matches(table: &[(Star, Star)], a: Star, b: Star) -> bool {
    table.iter().any(|&(x, y)| (a, b) == (x, y) || (a, b) == (y, x))
}

/// Star that the current period generates (the next one, wrapping 9 -> 1).
fn generating_star(period: Period) -> Star {
    period % 9 + 1
}

/// Star of the period just past (wrapping 1 -> 9).
fn declining_star(period: Period) -> Star {
    if period == 1 {
        9
    } else {
        period - 1
    }
}

/// Timeliness class of a star relative to the current period.
fn timeliness(star: Star, period: Period) -> &'static str {
    if star == period {
        "timely"
    } else if star == generating_star(period) {
        "generating"
    } else if star == declining_star(period) {
        "declining"
    } else {
        "dead"
    }
}

struct Scorer {
    score: i32,
    bonus_scale: f64,
    penalty_scale: f64,
    tags: Vec<String>,
}

impl Scorer {
    fn new(profile: EvaluationProfile) -> Scorer {
        let (bonus_scale, penalty_scale) = match profile {
            EvaluationProfile::Standard => (1.0, 1.0),
            EvaluationProfile::Conservative => (0.5, 1.5),
        };
        Scorer {
            score: BASE_SCORE,
            bonus_scale,
            penalty_scale,
            tags: Vec::new(),
        }
    }

    fn bonus(&mut self, points: i32, tag: &str) {
        self.score += (points as f64 * self.bonus_scale) as i32;
        self.tags.push(tag.to_string());
    }

    fn penalty(&mut self, points: i32, tag: &str) {
        self.score -= (points as f64 * self.penalty_scale) as i32;
        self.tags.push(tag.to_string());
    }

    fn tag(&mut self, tag: String) {
        self.tags.push(tag);
    }

    fn finish(self) -> PalaceEvaluation {
        PalaceEvaluation {
            score: self.score.clamp(0, 100),
            tags: self.tags,
        }
    }
}

/// Scores one palace cell against the current period.
pub fn evaluate_palace(
    cell: &PalaceCell,
    period: Period,
    profile: EvaluationProfile,
) -> PalaceEvaluation {
    let mut scorer = Scorer::new(profile);
    let m = cell.mountain_star;
    let f = cell.facing_star;
    let gen = generating_star(period);

    if m == period {
        scorer.bonus(15, "mountain-star-timely");
    } else if m == gen {
        scorer.bonus(10, "mountain-star-generating");
    }
    if f == period {
        scorer.bonus(15, "facing-star-timely");
    } else if f == gen {
        scorer.bonus(10, "facing-star-generating");
    }

    if m == 2 || m == 5 {
        scorer.penalty(20, "mountain-sick-star");
    }
    if f == 2 || f == 5 {
        scorer.penalty(20, "facing-sick-star");
    }

    if m + f == 10 {
        scorer.bonus(5, "sum-of-ten");
    }

    if pair_matches(&AUSPICIOUS_PAIRS, m, f) {
        scorer.bonus(10, "auspicious-pair");
    }
    if pair_matches(&INAUSPICIOUS_PAIRS, m, f) {
        scorer.penalty(10, "inauspicious-pair");
    }

    scorer.tag(format!("period-star-{}", timeliness(cell.period_star, period)));

    scorer.finish()
}

/// Evaluates the whole chart. The center palace and the facing direction's
/// palace weigh double in the overall score.
pub fn evaluate_chart(
    cells: &[PalaceCell],
    period: Period,
    facing_palace: PalaceIndex,
    profile: EvaluationProfile,
) -> Evaluation {
    let mut palaces = BTreeMap::new();
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for cell in cells {
        let eval = evaluate_palace(cell, period, profile);
        let weight = if cell.palace == 5 || cell.palace == facing_palace {
            2.0
        } else {
            1.0
        };
        weighted_sum += eval.score as f64 * weight;
        weight_total += weight;
        palaces.insert(cell.palace, eval);
    }

    let overall_score = if weight_total > 0.0 {
        weighted_sum / weight_total
    } else {
        0.0
    };

    Evaluation {
        palaces,
        overall_score,
        is_favorable: overall_score >= 50.0,
    }
}

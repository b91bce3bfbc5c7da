//! Forced-choice preference scoring.
//!
//! The instrument presents 225 paired statements; the respondent marks `A`
//! or `B` for each. Scoring follows the instrument's item grid: each of the
//! 15 traits owns a direct set of 14 positions (where choosing `A` credits
//! the trait) and a complementary set of 14 positions drawn from the other
//! traits' items (where choosing `B` credits it). The raw total per trait is
//! the sum of those two counts, then mapped through the trait's cumulative
//! threshold table into a weighted score.
//!
//! Fifteen items appear twice in the sequence; agreeing with oneself on a
//! repeated item bumps the consistency count, a data-quality signal the
//! report carries verbatim.
//!
//! The index sets, repeat pairs and threshold tables are the instrument's
//! scoring key. They are fixed data; do not derive or "simplify" them.

use serde::Serialize;

/// Number of scored preference traits.
pub const PREFERENCE_TRAITS: usize = 15;

/// Maximum possible consistency count (one per repeated item pair).
pub const MAX_CONSISTENCY: u32 = 15;

/// The 15 preference traits, in instrument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PreferenceTrait {
    Achievement,
    Deference,
    Order,
    Exhibition,
    Autonomy,
    Affiliation,
    Intraception,
    Succorance,
    Dominance,
    Abasement,
    Nurturance,
    Change,
    Endurance,
    Heterosexuality,
    Aggression,
}

impl PreferenceTrait {
    pub const ALL: [PreferenceTrait; PREFERENCE_TRAITS] = [
        PreferenceTrait::Achievement,
        PreferenceTrait::Deference,
        PreferenceTrait::Order,
        PreferenceTrait::Exhibition,
        PreferenceTrait::Autonomy,
        PreferenceTrait::Affiliation,
        PreferenceTrait::Intraception,
        PreferenceTrait::Succorance,
        PreferenceTrait::Dominance,
        PreferenceTrait::Abasement,
        PreferenceTrait::Nurturance,
        PreferenceTrait::Change,
        PreferenceTrait::Endurance,
        PreferenceTrait::Heterosexuality,
        PreferenceTrait::Aggression,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PreferenceTrait::Achievement => "Achievement",
            PreferenceTrait::Deference => "Deference",
            PreferenceTrait::Order => "Order",
            PreferenceTrait::Exhibition => "Exhibition",
            PreferenceTrait::Autonomy => "Autonomy",
            PreferenceTrait::Affiliation => "Affiliation",
            PreferenceTrait::Intraception => "Intraception",
            PreferenceTrait::Succorance => "Succorance",
            PreferenceTrait::Dominance => "Dominance",
            PreferenceTrait::Abasement => "Abasement",
            PreferenceTrait::Nurturance => "Nurturance",
            PreferenceTrait::Change => "Change",
            PreferenceTrait::Endurance => "Endurance",
            PreferenceTrait::Heterosexuality => "Heterosexuality",
            PreferenceTrait::Aggression => "Aggression",
        }
    }
}

/// Per-trait scoring key: (direct positions counted on `A`, complementary
/// positions counted on `B`). Instrument order, 0-based item indices.
static SCORING_KEY: [(&[usize], &[usize]); PREFERENCE_TRAITS] = [
    // Achievement
    (
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
        &[15, 30, 45, 60, 75, 90, 105, 120, 135, 150, 165, 180, 195, 210],
    ),
    // Deference
    (
        &[15, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29],
        &[1, 31, 46, 61, 76, 91, 106, 121, 136, 151, 166, 181, 196, 211],
    ),
    // Order
    (
        &[30, 31, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44],
        &[2, 17, 47, 62, 77, 92, 107, 122, 137, 152, 167, 182, 197, 212],
    ),
    // Exhibition
    (
        &[45, 46, 47, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59],
        &[3, 18, 33, 63, 78, 93, 108, 123, 138, 153, 168, 183, 198, 213],
    ),
    // Autonomy
    (
        &[60, 61, 62, 63, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74],
        &[4, 19, 34, 49, 79, 94, 109, 124, 139, 154, 169, 184, 199, 214],
    ),
    // Affiliation
    (
        &[75, 76, 77, 78, 79, 81, 82, 83, 84, 85, 86, 87, 88, 89],
        &[5, 20, 35, 50, 65, 95, 110, 125, 140, 155, 170, 185, 200, 215],
    ),
    // Intraception
    (
        &[90, 91, 92, 93, 94, 95, 97, 98, 99, 100, 101, 102, 103, 104],
        &[6, 21, 36, 51, 66, 81, 111, 126, 141, 156, 171, 186, 201, 216],
    ),
    // Succorance
    (
        &[105, 106, 107, 108, 109, 110, 111, 113, 114, 115, 116, 117, 118, 119],
        &[7, 22, 37, 52, 67, 82, 97, 127, 142, 157, 172, 187, 202, 217],
    ),
    // Dominance
    (
        &[120, 121, 122, 123, 124, 125, 126, 127, 129, 130, 131, 132, 133, 134],
        &[8, 23, 38, 53, 68, 83, 98, 113, 143, 158, 173, 188, 203, 218],
    ),
    // Abasement
    (
        &[135, 136, 137, 138, 139, 140, 141, 142, 143, 145, 146, 147, 148, 149],
        &[9, 24, 39, 54, 69, 84, 99, 114, 129, 159, 174, 189, 204, 219],
    ),
    // Nurturance
    (
        &[150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 161, 162, 163, 164],
        &[10, 25, 40, 55, 70, 85, 100, 115, 130, 145, 175, 190, 205, 220],
    ),
    // Change
    (
        &[165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, 177, 178, 179],
        &[11, 26, 41, 56, 71, 86, 101, 116, 131, 146, 161, 191, 206, 221],
    ),
    // Endurance
    (
        &[180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, 193, 194],
        &[12, 27, 42, 57, 72, 87, 102, 117, 132, 147, 162, 177, 207, 222],
    ),
    // Heterosexuality
    (
        &[195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207, 209],
        &[13, 28, 43, 58, 73, 88, 103, 118, 133, 148, 163, 178, 193, 223],
    ),
    // Aggression
    (
        &[210, 211, 212, 213, 214, 215, 216, 217, 218, 219, 220, 221, 222, 223],
        &[14, 29, 44, 59, 74, 89, 104, 119, 134, 149, 164, 179, 194, 209],
    ),
];

/// The 15 repeated-item pairs used for the consistency count.
static CONSISTENCY_PAIRS: [(usize, usize); 15] = [
    (0, 150),
    (6, 156),
    (12, 162),
    (18, 168),
    (24, 174),
    (25, 175),
    (31, 181),
    (37, 187),
    (43, 193),
    (49, 199),
    (50, 200),
    (56, 206),
    (62, 212),
    (68, 218),
    (74, 224),
];

/// Cumulative threshold tables, one per trait in instrument order. Scanned
/// top-down; the first threshold the raw total meets or exceeds supplies the
/// weighted score. A raw total below every threshold scores 0.
static THRESHOLDS: [&[(u32, u32)]; PREFERENCE_TRAITS] = [
    // Achievement
    &[
        (26, 97),
        (23, 92),
        (20, 84),
        (17, 73),
        (14, 58),
        (11, 42),
        (8, 27),
        (5, 14),
        (2, 6),
    ],
    // Deference
    &[
        (25, 96),
        (22, 90),
        (19, 81),
        (16, 70),
        (13, 55),
        (10, 39),
        (7, 24),
        (4, 12),
        (1, 5),
    ],
    // Order
    &[
        (26, 97),
        (23, 91),
        (20, 83),
        (17, 71),
        (14, 56),
        (11, 40),
        (8, 25),
        (5, 13),
        (2, 5),
    ],
    // Exhibition
    &[
        (25, 95),
        (22, 89),
        (19, 80),
        (16, 68),
        (13, 53),
        (10, 37),
        (7, 23),
        (4, 11),
        (1, 4),
    ],
    // Autonomy
    &[
        (26, 96),
        (23, 90),
        (20, 82),
        (17, 70),
        (14, 54),
        (11, 38),
        (8, 24),
        (5, 12),
        (2, 5),
    ],
    // Affiliation
    &[
        (25, 97),
        (22, 92),
        (19, 84),
        (16, 72),
        (13, 57),
        (10, 41),
        (7, 26),
        (4, 13),
        (1, 5),
    ],
    // Intraception
    &[
        (26, 95),
        (23, 89),
        (20, 81),
        (17, 69),
        (14, 53),
        (11, 37),
        (8, 23),
        (5, 11),
        (2, 4),
    ],
    // Succorance
    &[
        (25, 96),
        (22, 91),
        (19, 82),
        (16, 70),
        (13, 54),
        (10, 38),
        (7, 24),
        (4, 12),
        (1, 4),
    ],
    // Dominance
    &[
        (26, 97),
        (23, 92),
        (20, 85),
        (17, 74),
        (14, 59),
        (11, 43),
        (8, 28),
        (5, 15),
        (2, 6),
    ],
    // Abasement
    &[
        (25, 95),
        (22, 90),
        (19, 81),
        (16, 69),
        (13, 52),
        (10, 36),
        (7, 22),
        (4, 10),
        (1, 4),
    ],
    // Nurturance
    &[
        (26, 96),
        (23, 91),
        (20, 83),
        (17, 71),
        (14, 55),
        (11, 39),
        (8, 25),
        (5, 12),
        (2, 5),
    ],
    // Change
    &[
        (25, 96),
        (22, 90),
        (19, 82),
        (16, 71),
        (13, 56),
        (10, 40),
        (7, 25),
        (4, 13),
        (1, 5),
    ],
    // Endurance
    &[
        (26, 97),
        (23, 92),
        (20, 84),
        (17, 72),
        (14, 57),
        (11, 41),
        (8, 26),
        (5, 13),
        (2, 5),
    ],
    // Heterosexuality
    &[
        (25, 94),
        (22, 88),
        (19, 79),
        (16, 67),
        (13, 51),
        (10, 35),
        (7, 21),
        (4, 10),
        (1, 3),
    ],
    // Aggression
    &[
        (26, 95),
        (23, 90),
        (20, 82),
        (17, 70),
        (14, 54),
        (11, 38),
        (8, 24),
        (5, 12),
        (2, 4),
    ],
];

/// Scoring result for the full choice sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceScores {
    /// Raw totals per trait, instrument order.
    pub raw: [u32; PREFERENCE_TRAITS],
    /// Weighted scores per trait, instrument order.
    pub weighted: [u32; PREFERENCE_TRAITS],
    /// Repeated-item agreement count, 0-15.
    pub consistency: u32,
}

impl PreferenceScores {
    pub fn weighted_for(&self, t: PreferenceTrait) -> u32 {
        self.weighted[t.index()]
    }
}

fn token(choices: &[String], index: usize) -> &str {
    choices.get(index).map(String::as_str).unwrap_or("")
}

/// Map a raw total through a trait's threshold table.
pub fn weighted_score(t: PreferenceTrait, raw_total: u32) -> u32 {
    THRESHOLDS[t.index()]
        .iter()
        .find(|&&(threshold, _)| raw_total >= threshold)
        .map(|&(_, weight)| weight)
        .unwrap_or(0)
}

/// Count repeated-item agreements: both positions present and equal.
pub fn consistency_count(choices: &[String]) -> u32 {
    CONSISTENCY_PAIRS
        .iter()
        .filter(|&&(a, b)| {
            let (first, second) = (token(choices, a), token(choices, b));
            !first.is_empty() && first == second
        })
        .count() as u32
}

/// Score a full choice sequence. Positions past the end of the sequence, or
/// holding anything other than `A`/`B`, never match.
pub fn score_choices(choices: &[String]) -> PreferenceScores {
    let mut raw = [0u32; PREFERENCE_TRAITS];
    let mut weighted = [0u32; PREFERENCE_TRAITS];
    for t in PreferenceTrait::ALL {
        let (direct, complementary) = SCORING_KEY[t.index()];
        let a_count = direct.iter().filter(|&&i| token(choices, i) == "A").count();
        let b_count = complementary
            .iter()
            .filter(|&&i| token(choices, i) == "B")
            .count();
        raw[t.index()] = (a_count + b_count) as u32;
        weighted[t.index()] = weighted_score(t, raw[t.index()]);
    }
    PreferenceScores {
        raw,
        weighted,
        consistency: consistency_count(choices),
    }
}

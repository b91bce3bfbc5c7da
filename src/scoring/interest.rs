//! Vocational interest scoring.
//!
//! The inventory's eight rating blocks concatenate into a 96-item sequence
//! of rank values. Each of the 12 interest categories sums a fixed set of 8
//! positions (one per block, rotated so the sets are disjoint and cover the
//! whole sequence). Lower totals mean stronger fit; the assembler ranks
//! ascending.

use serde::Serialize;

/// Number of interest categories.
pub const INTEREST_CATEGORIES: usize = 12;

/// The 12 interest categories, in instrument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InterestCategory {
    Outdoor,
    Mechanical,
    Computational,
    Scientific,
    Persuasive,
    Aesthetic,
    Literary,
    Musical,
    SocialService,
    Clerical,
    Practical,
    Medical,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; INTEREST_CATEGORIES] = [
        InterestCategory::Outdoor,
        InterestCategory::Mechanical,
        InterestCategory::Computational,
        InterestCategory::Scientific,
        InterestCategory::Persuasive,
        InterestCategory::Aesthetic,
        InterestCategory::Literary,
        InterestCategory::Musical,
        InterestCategory::SocialService,
        InterestCategory::Clerical,
        InterestCategory::Practical,
        InterestCategory::Medical,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Short category code carried in the report record.
    pub fn code(self) -> &'static str {
        match self {
            InterestCategory::Outdoor => "OUT",
            InterestCategory::Mechanical => "ME",
            InterestCategory::Computational => "COMP",
            InterestCategory::Scientific => "SCI",
            InterestCategory::Persuasive => "PERS",
            InterestCategory::Aesthetic => "AESTH",
            InterestCategory::Literary => "LIT",
            InterestCategory::Musical => "MUS",
            InterestCategory::SocialService => "SOS",
            InterestCategory::Clerical => "CLER",
            InterestCategory::Practical => "PRAC",
            InterestCategory::Medical => "MED",
        }
    }
}

/// Rating positions summed per category, instrument order. One position per
/// block of 12, rotated one step per block.
static RATING_KEY: [&[usize; 8]; INTEREST_CATEGORIES] = [
    &[0, 13, 26, 39, 52, 65, 78, 91],  // Outdoor
    &[1, 14, 27, 40, 53, 66, 79, 92],  // Mechanical
    &[2, 15, 28, 41, 54, 67, 80, 93],  // Computational
    &[3, 16, 29, 42, 55, 68, 81, 94],  // Scientific
    &[4, 17, 30, 43, 56, 69, 82, 95],  // Persuasive
    &[5, 18, 31, 44, 57, 70, 83, 84],  // Aesthetic
    &[6, 19, 32, 45, 58, 71, 72, 85],  // Literary
    &[7, 20, 33, 46, 59, 60, 73, 86],  // Musical
    &[8, 21, 34, 47, 48, 61, 74, 87],  // SocialService
    &[9, 22, 35, 36, 49, 62, 75, 88],  // Clerical
    &[10, 23, 24, 37, 50, 63, 76, 89], // Practical
    &[11, 12, 25, 38, 51, 64, 77, 90], // Medical
];

/// Category totals over a rating sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestTotals {
    totals: [f64; INTEREST_CATEGORIES],
}

impl InterestTotals {
    pub fn total(&self, category: InterestCategory) -> f64 {
        self.totals[category.index()]
    }

    /// `(category, total)` pairs in instrument order.
    pub fn entries(&self) -> Vec<(InterestCategory, f64)> {
        InterestCategory::ALL
            .iter()
            .map(|&c| (c, self.totals[c.index()]))
            .collect()
    }
}

/// Sum each category's positions over the rating sequence. Positions past
/// the end of the sequence contribute 0.
pub fn score_ratings(ratings: &[f64]) -> InterestTotals {
    let mut totals = [0.0; INTEREST_CATEGORIES];
    for category in InterestCategory::ALL {
        totals[category.index()] = RATING_KEY[category.index()]
            .iter()
            .map(|&i| ratings.get(i).copied().unwrap_or(0.0))
            .sum();
    }
    InterestTotals { totals }
}

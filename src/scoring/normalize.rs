//! Piecewise normalization onto the report's common 1-10 band.
//!
//! Every metric family carries its own ascending ceiling table: the score of
//! the first ceiling at or above the value wins, and a value above every
//! ceiling lands on 10. Tables are authored so the result is monotonic
//! non-decreasing in the input and always within [1, 10].

use serde::{Deserialize, Serialize};

/// Metric family selecting the ceiling table. [`MetricKind::Preference`] is
/// the generic family and the documented fallback, hence `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetricKind {
    Iq,
    /// A single aptitude subtest raw total.
    Cfit,
    /// The two-subtest logical-reasoning average.
    Logic,
    /// Verbal-reasoning raw score.
    Verbal,
    /// Numeric-reasoning raw score.
    Numeric,
    /// Preference weighted scores and their composites.
    #[default]
    Preference,
}

const IQ_BANDS: &[(f64, i32)] = &[
    (69.0, 1),
    (79.0, 2),
    (89.0, 3),
    (94.0, 4),
    (99.0, 5),
    (104.0, 6),
    (109.0, 7),
    (114.0, 8),
    (124.0, 9),
];

const CFIT_BANDS: &[(f64, i32)] = &[
    (2.0, 1),
    (3.0, 2),
    (4.0, 3),
    (5.0, 4),
    (6.0, 5),
    (7.0, 6),
    (8.0, 7),
    (10.0, 8),
    (12.0, 9),
];

const LOGIC_BANDS: &[(f64, i32)] = &[
    (2.0, 1),
    (4.0, 2),
    (5.0, 3),
    (6.0, 4),
    (7.0, 5),
    (8.0, 6),
    (9.0, 7),
    (11.0, 8),
    (13.0, 9),
];

const VERBAL_BANDS: &[(f64, i32)] = &[
    (4.0, 1),
    (8.0, 2),
    (12.0, 3),
    (16.0, 4),
    (20.0, 5),
    (24.0, 6),
    (28.0, 7),
    (32.0, 8),
    (36.0, 9),
];

const NUMERIC_BANDS: &[(f64, i32)] = &[
    (2.0, 1),
    (4.0, 2),
    (6.0, 3),
    (8.0, 4),
    (10.0, 5),
    (12.0, 6),
    (14.0, 7),
    (16.0, 8),
    (18.0, 9),
];

const PREFERENCE_BANDS: &[(f64, i32)] = &[
    (9.0, 1),
    (19.0, 2),
    (29.0, 3),
    (39.0, 4),
    (49.0, 5),
    (59.0, 6),
    (69.0, 7),
    (79.0, 8),
    (89.0, 9),
];

fn bands_for(kind: MetricKind) -> &'static [(f64, i32)] {
    match kind {
        MetricKind::Iq => IQ_BANDS,
        MetricKind::Cfit => CFIT_BANDS,
        MetricKind::Logic => LOGIC_BANDS,
        MetricKind::Verbal => VERBAL_BANDS,
        MetricKind::Numeric => NUMERIC_BANDS,
        MetricKind::Preference => PREFERENCE_BANDS,
    }
}

/// Map a raw value onto the 1-10 band for its metric family.
pub fn scale(value: f64, kind: MetricKind) -> i32 {
    bands_for(kind)
        .iter()
        .find(|&&(ceiling, _)| value <= ceiling)
        .map(|&(_, score)| score)
        .unwrap_or(10)
}

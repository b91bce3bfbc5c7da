//! Report assembly: the final stage of the scoring pipeline.
//!
//! Takes the independently computed scorer outputs, normalizes them onto the
//! 1-10 band in the fixed 14-slot trait order, applies the operator override
//! rules, and derives the ranked views the renderer consumes. The whole
//! stage is a pure function of the intake record.

pub mod catalog;

pub use catalog::{interest_info, InterestInfo, TraitInfo, INTEREST_CATALOG, TRAIT_CATALOG};

use std::cmp::Ordering;

use crate::core::{
    override_groups, AptitudeVector, InterestEntry, ManualOverrides, RankedScore, RawRecord,
    ResultRecord, TRAIT_COUNT,
};
use crate::parse::{parse_aptitude, parse_identity, parse_inventory, parse_overrides};
use crate::scoring::{
    raw_iq, scale, score_choices, score_ratings, InterestTotals, MetricKind, PreferenceScores,
    PreferenceTrait,
};

/// Number of ranked interest entries carried in the report.
const TOP_INTERESTS: usize = 3;

/// Number of positional free-text override slots per note group.
const NOTE_SLOTS: usize = 3;

/// Run the full pipeline: parse the four raw fields, score, normalize,
/// merge overrides and rank. Total — every malformed input degrades to a
/// documented default instead of failing.
pub fn generate_report(record: &RawRecord) -> ResultRecord {
    let identity = parse_identity(&record.identity);
    let aptitude = parse_aptitude(&record.aptitude);
    let inventory = parse_inventory(&record.inventory);
    let overrides = parse_overrides(&record.manual_overrides);

    let preferences = score_choices(&inventory.choice_tokens());
    let interests = score_ratings(&inventory.ratings());

    let computed_iq = raw_iq(aptitude.subtest_total(), identity.age);
    let iq = overrides
        .nonzero_cell(override_groups::GENERAL, 2)
        .unwrap_or(computed_iq);

    let mut trait_scores = computed_trait_scores(&aptitude, iq, &preferences);
    merge_trait_overrides(&mut trait_scores, &overrides);

    ResultRecord {
        name: overrides
            .text_cell(override_groups::GENERAL, 0)
            .unwrap_or(identity.name),
        age: identity.age,
        sex: identity.sex,
        report_date: overrides.text_cell(override_groups::GENERAL, 1),
        iq,
        consistency: preferences.consistency,
        strengths: rank_descending(&trait_scores),
        weaknesses: rank_ascending(&trait_scores),
        interests: top_interests(&interests, &overrides),
        strength_notes: note_overrides(&overrides, override_groups::STRENGTHS),
        weakness_notes: note_overrides(&overrides, override_groups::WEAKNESSES),
        recommendation_notes: note_overrides(&overrides, override_groups::RECOMMENDATIONS),
        trait_scores,
    }
}

/// The 14 computed scores in catalog slot order.
///
/// Slots 7 (stress tolerance) and 12 (initiative) intentionally share the
/// same dominance/achievement/autonomy composite; the legacy instrument
/// scores both report traits from one drive measure.
fn computed_trait_scores(
    aptitude: &AptitudeVector,
    iq: i32,
    preferences: &PreferenceScores,
) -> Vec<i32> {
    let w = |t: PreferenceTrait| preferences.weighted_for(t) as f64;
    let drive_composite = (w(PreferenceTrait::Dominance)
        + w(PreferenceTrait::Achievement)
        + w(PreferenceTrait::Autonomy))
        / 3.0;
    let logic_average = (aptitude.subtest(2) + aptitude.subtest(3)) / 2.0;

    vec![
        scale(iq as f64, MetricKind::Iq),                           // general ability
        scale(aptitude.subtest(1), MetricKind::Cfit),               // visual perception
        scale(logic_average, MetricKind::Logic),                    // logical reasoning
        scale(aptitude.subtest(4), MetricKind::Cfit),               // abstract reasoning
        scale(aptitude.verbal(), MetricKind::Verbal),               // verbal reasoning
        scale(aptitude.numeric(), MetricKind::Numeric),             // numeric reasoning
        scale(w(PreferenceTrait::Achievement), MetricKind::Preference), // achievement drive
        scale(drive_composite, MetricKind::Preference),             // stress tolerance
        scale(w(PreferenceTrait::Dominance), MetricKind::Preference), // self-confidence
        scale(w(PreferenceTrait::Affiliation), MetricKind::Preference), // social relations
        scale(w(PreferenceTrait::Nurturance), MetricKind::Preference), // cooperation
        scale(w(PreferenceTrait::Order), MetricKind::Preference),   // work systematics
        scale(drive_composite, MetricKind::Preference),             // initiative
        scale(w(PreferenceTrait::Autonomy), MetricKind::Preference), // independence
    ]
}

/// Apply the trait-score override group. Only a non-blank cell parsing to a
/// non-zero integer replaces the computed value; see
/// [`ManualOverrides::nonzero_cell`] for the zero quirk.
fn merge_trait_overrides(scores: &mut [i32], overrides: &ManualOverrides) {
    for (slot, score) in scores.iter_mut().enumerate().take(TRAIT_COUNT) {
        if let Some(value) = overrides.nonzero_cell(override_groups::TRAITS, slot) {
            *score = value;
        }
    }
}

/// Descending stable ranking of the score sequence; ties keep their
/// original slot order.
pub fn rank_descending(scores: &[i32]) -> Vec<RankedScore> {
    let mut ranked = indexed(scores);
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Ascending stable ranking of the score sequence.
pub fn rank_ascending(scores: &[i32]) -> Vec<RankedScore> {
    let mut ranked = indexed(scores);
    ranked.sort_by(|a, b| a.score.cmp(&b.score));
    ranked
}

fn indexed(scores: &[i32]) -> Vec<RankedScore> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| RankedScore { score, index })
        .collect()
}

/// Rank interest totals ascending (lower total = stronger fit) and keep the
/// top three, attaching the positional label/description overrides.
fn top_interests(totals: &InterestTotals, overrides: &ManualOverrides) -> Vec<InterestEntry> {
    let mut entries = totals.entries();
    entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    entries
        .iter()
        .take(TOP_INTERESTS)
        .enumerate()
        .map(|(rank, &(category, _))| InterestEntry {
            code: category.code().to_string(),
            label: overrides.text_cell(override_groups::INTEREST_LABELS, rank),
            description: overrides.text_cell(override_groups::INTEREST_DESCRIPTIONS, rank),
        })
        .collect()
}

fn note_overrides(overrides: &ManualOverrides, group: usize) -> Vec<Option<String>> {
    (0..NOTE_SLOTS)
        .map(|slot| overrides.text_cell(group, slot))
        .collect()
}

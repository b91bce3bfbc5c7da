//! Common type definitions used across the scoring pipeline

use serde::{Deserialize, Serialize};

/// Number of slots in an aptitude vector, regardless of wire format.
pub const APTITUDE_SLOTS: usize = 20;

/// Number of slots in an inventory vector, regardless of wire format.
pub const INVENTORY_SLOTS: usize = 10;

/// Length of the forced-choice sequence. Shorter sequences are treated as
/// padded with empty tokens; positions past the end simply never match.
pub const CHOICE_ITEMS: usize = 225;

/// Length of the concatenated interest rating sequence (8 blocks of 12).
pub const RATING_ITEMS: usize = 96;

/// Number of trait slots in the final report, order fixed by the catalog.
pub const TRAIT_COUNT: usize = 14;

/// Raw intake payload: four opaque strings as delivered by the test client.
///
/// `aptitude` and `inventory` may arrive in either the legacy delimited
/// format or the newer keyed JSON-object format; the parser resolves that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub identity: String,
    pub aptitude: String,
    pub inventory: String,
    #[serde(default)]
    pub manual_overrides: String,
}

/// Subject identity extracted from the first identity group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub age: f64,
    pub sex: String,
}

/// Fixed 20-slot view of the aptitude field.
///
/// Slot layout is shared by both wire formats: 0-3 hold the four subtest
/// raw totals, 15 the verbal-reasoning score, 17 the numeric-reasoning
/// score. Unused slots stay at their fill value.
#[derive(Debug, Clone, PartialEq)]
pub struct AptitudeVector {
    slots: Vec<String>,
}

impl AptitudeVector {
    /// Build a vector from decoded slots, padding or truncating to exactly
    /// [`APTITUDE_SLOTS`] entries.
    pub fn from_slots(mut slots: Vec<String>, fill: &str) -> Self {
        slots.resize(APTITUDE_SLOTS, fill.to_string());
        Self { slots }
    }

    pub fn slot(&self, index: usize) -> &str {
        self.slots.get(index).map(String::as_str).unwrap_or("")
    }

    /// Slot content as a number; unparsable or empty slots count as 0.
    pub fn numeric_slot(&self, index: usize) -> f64 {
        self.slot(index).trim().parse().unwrap_or(0.0)
    }

    /// Raw total of subtest `n` (1-4).
    pub fn subtest(&self, n: usize) -> f64 {
        debug_assert!((1..=4).contains(&n));
        self.numeric_slot(n - 1)
    }

    /// Sum of the four subtest totals, the IQ table lookup key.
    pub fn subtest_total(&self) -> f64 {
        (1..=4).map(|n| self.subtest(n)).sum()
    }

    pub fn verbal(&self) -> f64 {
        self.numeric_slot(15)
    }

    pub fn numeric(&self) -> f64 {
        self.numeric_slot(17)
    }
}

/// Fixed 10-slot view of the inventory field.
///
/// Slot 0 carries the semicolon-joined forced-choice tokens; slots 2-9
/// carry the eight interest rating blocks, concatenated in order.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryVector {
    slots: Vec<String>,
}

impl InventoryVector {
    /// Build a vector from decoded slots, padding or truncating to exactly
    /// [`INVENTORY_SLOTS`] entries.
    pub fn from_slots(mut slots: Vec<String>, fill: &str) -> Self {
        slots.resize(INVENTORY_SLOTS, fill.to_string());
        Self { slots }
    }

    pub fn slot(&self, index: usize) -> &str {
        self.slots.get(index).map(String::as_str).unwrap_or("")
    }

    /// The forced-choice tokens from slot 0, trimmed, in item order.
    ///
    /// The returned sequence may be shorter than [`CHOICE_ITEMS`]; scorers
    /// index it with `get` so missing positions never match anything.
    pub fn choice_tokens(&self) -> Vec<String> {
        let raw = self.slot(0);
        if raw.trim().is_empty() {
            return Vec::new();
        }
        raw.split(';').map(|t| t.trim().to_string()).collect()
    }

    /// The rating sequence: slots 2-9 split and concatenated in order,
    /// each entry parsed as a number with unparsable entries counting as 0.
    pub fn ratings(&self) -> Vec<f64> {
        (2..INVENTORY_SLOTS)
            .flat_map(|i| {
                self.slot(i)
                    .split(';')
                    .map(|t| t.trim().parse().unwrap_or(0.0))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Group indices within the manual override block.
pub mod override_groups {
    /// Name / report date / IQ override cells.
    pub const GENERAL: usize = 0;
    /// Up to 14 trait-score override cells, one per catalog slot.
    pub const TRAITS: usize = 1;
    pub const STRENGTHS: usize = 2;
    pub const WEAKNESSES: usize = 3;
    pub const RECOMMENDATIONS: usize = 4;
    pub const INTEREST_LABELS: usize = 5;
    pub const INTEREST_DESCRIPTIONS: usize = 6;
}

/// Operator-supplied corrections, parts-of-parts as delivered on the wire.
///
/// Cell lookups are positional and total: a missing group or cell is simply
/// absent, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualOverrides {
    groups: Vec<Vec<String>>,
}

impl ManualOverrides {
    pub fn from_groups(groups: Vec<Vec<String>>) -> Self {
        Self { groups }
    }

    /// The cell at `(group, index)`, if the block carries one.
    pub fn cell(&self, group: usize, index: usize) -> Option<&str> {
        self.groups.get(group)?.get(index).map(String::as_str)
    }

    /// A free-text override: present and non-blank, else `None`.
    pub fn text_cell(&self, group: usize, index: usize) -> Option<String> {
        let cell = self.cell(group, index)?.trim();
        if cell.is_empty() {
            None
        } else {
            Some(cell.to_string())
        }
    }

    /// A numeric override: present, non-blank and parsing to a NON-ZERO
    /// integer. A cell holding `"0"` counts as "no override" — an operator
    /// cannot force a computed value to exactly 0. Legacy quirk, kept as is.
    pub fn nonzero_cell(&self, group: usize, index: usize) -> Option<i32> {
        let value: i32 = self.cell(group, index)?.trim().parse().ok()?;
        if value == 0 {
            None
        } else {
            Some(value)
        }
    }
}

/// One entry of a ranked view over the trait-score sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedScore {
    pub score: i32,
    /// Index into the canonical 14-slot score sequence.
    pub index: usize,
}

/// One of the top-ranked interest categories, with any operator overrides
/// attached positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestEntry {
    /// Category code from the interest catalog (e.g. `ME`, `SOS`).
    pub code: String,
    pub label: Option<String>,
    pub description: Option<String>,
}

/// Final report record. Immutable once assembled; the renderer merges it
/// with the static catalogs to produce the human-readable report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    pub age: f64,
    pub sex: String,
    /// Operator-supplied report date; `None` leaves the choice of a default
    /// to the renderer.
    pub report_date: Option<String>,
    pub iq: i32,
    /// Exactly [`TRAIT_COUNT`] scores on the 1-10 band, catalog order.
    pub trait_scores: Vec<i32>,
    /// Repeated-item agreement count, 0-15.
    pub consistency: u32,
    /// Descending stable ranking of `trait_scores`.
    pub strengths: Vec<RankedScore>,
    /// Ascending stable ranking of `trait_scores`.
    pub weaknesses: Vec<RankedScore>,
    /// Up to 3 interest categories, strongest fit first.
    pub interests: Vec<InterestEntry>,
    /// Positional free-text overrides; `None` slots fall back to catalog text.
    pub strength_notes: Vec<Option<String>>,
    pub weakness_notes: Vec<Option<String>>,
    pub recommendation_notes: Vec<Option<String>>,
}

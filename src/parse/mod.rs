//! Wire-format decoding for the four intake fields.
//!
//! The identity and override fields only ever arrive in the legacy delimited
//! layout: groups separated by `|`, cells within a group by `;`. The aptitude
//! and inventory fields additionally support a keyed JSON-object encoding;
//! see [`vectors`] for the format detection and fallback rules.
//!
//! Nothing in this module returns an error. Every degraded input condition
//! resolves to a documented default so the pipeline stays total.

pub mod vectors;

pub use vectors::{parse_aptitude, parse_inventory, WireFormat, APTITUDE_KEYS, INVENTORY_KEYS};

use crate::core::{Identity, ManualOverrides};

/// Separator between groups (parts) of a delimited field.
pub const PART_DELIMITER: char = '|';

/// Separator between cells within a group.
pub const FIELD_DELIMITER: char = ';';

pub(crate) fn split_parts(raw: &str) -> Vec<String> {
    raw.split(PART_DELIMITER).map(|p| p.trim().to_string()).collect()
}

fn split_fields(part: &str) -> Vec<String> {
    part.split(FIELD_DELIMITER).map(|f| f.trim().to_string()).collect()
}

/// Extract the subject identity from the identity block.
///
/// Only the first group is used: name at cell 0, age at cell 4, sex at
/// cell 8. A missing or unparsable age becomes 0, which the IQ scorer
/// buckets into the adult band.
pub fn parse_identity(raw: &str) -> Identity {
    let first = raw.split(PART_DELIMITER).next().unwrap_or("");
    let fields = split_fields(first);
    let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");
    Identity {
        name: field(0).to_string(),
        age: field(4).parse().unwrap_or(0.0),
        sex: field(8).to_string(),
    }
}

/// Decode the manual override block into its positional groups.
pub fn parse_overrides(raw: &str) -> ManualOverrides {
    if raw.trim().is_empty() {
        return ManualOverrides::default();
    }
    let groups = raw.split(PART_DELIMITER).map(split_fields).collect();
    ManualOverrides::from_groups(groups)
}

//! Dual-format decoding of the aptitude and inventory fields.
//!
//! Clients send these fields either as the legacy `|`-delimited slot list or
//! as a keyed JSON object. Format detection is a single look at the first
//! non-whitespace character: `{` selects the keyed decode, anything else the
//! legacy split. A keyed payload that fails to decode is logged and falls
//! back to the legacy split of the same string, so the caller always gets a
//! usable fixed-size vector.

use serde_json::{Map, Value};

use crate::core::{AptitudeVector, InventoryVector};
use crate::parse::split_parts;

/// Which wire encoding a field was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    KeyedObject,
    LegacyDelimited,
}

/// Key→slot mapping for the keyed aptitude encoding. Both wire formats
/// resolve through this one table; keep it in sync with the accessors on
/// [`AptitudeVector`].
pub const APTITUDE_KEYS: [(&str, usize); 6] = [
    ("cfit1", 0),
    ("cfit2", 1),
    ("cfit3", 2),
    ("cfit4", 3),
    ("verbal", 15),
    ("numeric", 17),
];

/// Key→slot mapping for the keyed inventory encoding.
pub const INVENTORY_KEYS: [(&str, usize); 9] = [
    ("epps", 0),
    ("rmib1", 2),
    ("rmib2", 3),
    ("rmib3", 4),
    ("rmib4", 5),
    ("rmib5", 6),
    ("rmib6", 7),
    ("rmib7", 8),
    ("rmib8", 9),
];

/// Detect the wire format of a raw field.
pub fn detect_format(raw: &str) -> WireFormat {
    if raw.trim_start().starts_with('{') {
        WireFormat::KeyedObject
    } else {
        WireFormat::LegacyDelimited
    }
}

/// Decode the aptitude field into its fixed 20-slot vector.
///
/// Keyed path: slots named in [`APTITUDE_KEYS`] are filled from the object,
/// missing keys default to `"0"`. Legacy path: the `|`-split parts are used
/// positionally as-is.
pub fn parse_aptitude(raw: &str) -> AptitudeVector {
    match decode_keyed(raw, "aptitude") {
        Some(object) => {
            AptitudeVector::from_slots(slots_from_object(&object, &APTITUDE_KEYS, "0"), "0")
        }
        None => AptitudeVector::from_slots(split_parts(raw), ""),
    }
}

/// Decode the inventory field into its fixed 10-slot vector.
///
/// Same rules as [`parse_aptitude`], with `""` as the keyed default.
pub fn parse_inventory(raw: &str) -> InventoryVector {
    match decode_keyed(raw, "inventory") {
        Some(object) => {
            InventoryVector::from_slots(slots_from_object(&object, &INVENTORY_KEYS, ""), "")
        }
        None => InventoryVector::from_slots(split_parts(raw), ""),
    }
}

/// Attempt the keyed-object decode of a field. `None` means "use the legacy
/// branch": either the field never looked like an object, or it did and
/// failed to decode (warned, never raised).
fn decode_keyed(raw: &str, field: &str) -> Option<Map<String, Value>> {
    if detect_format(raw) != WireFormat::KeyedObject {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(object)) => Some(object),
        Ok(other) => {
            log::warn!(
                "{field} field decoded to non-object JSON ({}), falling back to delimited parse",
                json_kind(&other)
            );
            None
        }
        Err(e) => {
            log::warn!("{field} field is not valid JSON ({e}), falling back to delimited parse");
            None
        }
    }
}

fn slots_from_object(
    object: &Map<String, Value>,
    keys: &[(&str, usize)],
    default: &str,
) -> Vec<String> {
    let width = keys.iter().map(|&(_, slot)| slot + 1).max().unwrap_or(0);
    let mut slots = vec![default.to_string(); width];
    for &(key, slot) in keys {
        if let Some(value) = object.get(key) {
            slots[slot] = value_to_slot(value, default);
        }
    }
    slots
}

/// Keyed values may arrive as JSON strings or bare numbers; anything else
/// takes the slot default.
fn value_to_slot(value: &Value, default: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => default.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_keyed_object_by_leading_brace() {
        assert_eq!(detect_format("  {\"cfit1\": 1}"), WireFormat::KeyedObject);
        assert_eq!(detect_format("1|2|3"), WireFormat::LegacyDelimited);
        assert_eq!(detect_format(""), WireFormat::LegacyDelimited);
    }

    #[test]
    fn keyed_aptitude_defaults_missing_slots_to_zero() {
        let v = parse_aptitude(r#"{"cfit1": "10", "cfit2": 8}"#);
        assert_eq!(v.slot(0), "10");
        assert_eq!(v.slot(1), "8");
        assert_eq!(v.slot(2), "0");
        assert_eq!(v.slot(3), "0");
        assert_eq!(v.slot(15), "0");
        assert_eq!(v.slot(17), "0");
        assert_eq!(v.subtest_total(), 18.0);
    }

    #[test]
    fn keyed_and_legacy_aptitude_agree_on_same_values() {
        let keyed = parse_aptitude(
            r#"{"cfit1": "10", "cfit2": "8", "cfit3": "9", "cfit4": "7", "verbal": "25", "numeric": "12"}"#,
        );
        let legacy =
            parse_aptitude("10|8|9|7|0|0|0|0|0|0|0|0|0|0|0|25|0|12|0|0");
        for slot in 0..crate::core::APTITUDE_SLOTS {
            assert_eq!(keyed.slot(slot), legacy.slot(slot), "slot {slot}");
        }
    }

    #[test]
    fn malformed_keyed_aptitude_falls_back_to_delimited() {
        // looks like an object but is not valid JSON
        let v = parse_aptitude("{not json");
        assert_eq!(v.slot(0), "{not json");
        assert_eq!(v.slot(1), "");
    }

    #[test]
    fn empty_object_is_a_valid_keyed_payload() {
        let v = parse_aptitude("{}");
        assert_eq!(v.slot(0), "0");
    }

    #[test]
    fn non_object_input_takes_the_delimited_branch() {
        let arrayish = parse_inventory("[1,2]");
        assert_eq!(arrayish.slot(0), "[1,2]");
    }

    #[test]
    fn keyed_inventory_maps_epps_and_rating_blocks() {
        let v = parse_inventory(r#"{"epps": "A;B;A", "rmib1": "1;2", "rmib8": "3;4"}"#);
        assert_eq!(v.slot(0), "A;B;A");
        assert_eq!(v.slot(1), "");
        assert_eq!(v.slot(2), "1;2");
        assert_eq!(v.slot(9), "3;4");
        assert_eq!(v.choice_tokens(), vec!["A", "B", "A"]);
    }

    #[test]
    fn legacy_inventory_uses_parts_positionally() {
        let v = parse_inventory("A;B|x|1;2;3|4|5|6|7|8|9;9|10");
        assert_eq!(v.choice_tokens(), vec!["A", "B"]);
        assert_eq!(v.slot(1), "x");
        assert_eq!(&v.ratings()[..3], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn keyed_number_values_are_stringified() {
        let v = parse_aptitude(r#"{"cfit1": 10.5, "verbal": 25}"#);
        assert_eq!(v.slot(0), "10.5");
        assert_eq!(v.slot(15), "25");
    }
}

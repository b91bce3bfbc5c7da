//! Wire-format equivalence and fallback behavior over the public API.

use indoc::indoc;
use pretty_assertions::assert_eq;
use traitmap::{generate_report, parse_aptitude, parse_inventory, RawRecord};

#[test]
fn keyed_and_legacy_aptitude_produce_identical_reports() {
    let identity = "Jane Doe;;;;20;;;;F".to_string();
    let keyed = RawRecord {
        identity: identity.clone(),
        aptitude: indoc! {r#"
            {
              "cfit1": "10",
              "cfit2": "8",
              "cfit3": "9",
              "cfit4": "7",
              "verbal": "25",
              "numeric": "12"
            }
        "#}
        .to_string(),
        ..Default::default()
    };
    let legacy = RawRecord {
        identity,
        aptitude: "10|8|9|7|0|0|0|0|0|0|0|0|0|0|0|25|0|12|0|0".to_string(),
        ..Default::default()
    };
    assert_eq!(generate_report(&keyed), generate_report(&legacy));
}

#[test]
fn keyed_and_legacy_inventory_produce_identical_reports() {
    let choices = vec!["B"; 225].join(";");
    let block = "1;2;3;4;5;6;7;8;9;10;11;12";
    let keyed_inventory = format!(
        r#"{{"epps": "{choices}", "rmib1": "{block}", "rmib2": "{block}", "rmib3": "{block}", "rmib4": "{block}", "rmib5": "{block}", "rmib6": "{block}", "rmib7": "{block}", "rmib8": "{block}"}}"#
    );
    let legacy_inventory = format!("{choices}||{}", vec![block; 8].join("|"));

    let keyed = parse_inventory(&keyed_inventory);
    let legacy = parse_inventory(&legacy_inventory);
    assert_eq!(keyed.choice_tokens(), legacy.choice_tokens());
    assert_eq!(keyed.ratings(), legacy.ratings());
}

#[test]
fn partial_keyed_aptitude_defaults_the_remaining_slots() {
    let vector = parse_aptitude(r#"{"cfit1": "12", "cfit2": "11"}"#);
    for slot in [2, 3, 15, 17] {
        assert_eq!(vector.slot(slot), "0", "slot {slot}");
    }
    assert_eq!(vector.subtest_total(), 23.0);
}

#[test]
fn malformed_keyed_input_degrades_instead_of_failing() {
    let record = RawRecord {
        identity: "X;;;;20;;;;M".to_string(),
        aptitude: "{\"cfit1\": ".to_string(), // truncated JSON
        inventory: "{oops".to_string(),
        ..Default::default()
    };
    // falls back to the delimited parse of the same strings
    let report = generate_report(&record);
    assert_eq!(report.iq, 35); // subtest total 0, adult row 0
    assert_eq!(report.consistency, 0);
}

#[test]
fn whitespace_before_brace_still_selects_keyed_decode() {
    let vector = parse_aptitude("   {\"cfit1\": \"5\"}");
    assert_eq!(vector.slot(0), "5");
    assert_eq!(vector.slot(1), "0");
}

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod io;
pub mod parse;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AptitudeVector, Identity, InterestEntry, InventoryVector, ManualOverrides, RankedScore,
    RawRecord, ResultRecord,
};

pub use crate::parse::{parse_aptitude, parse_identity, parse_inventory, parse_overrides};

pub use crate::report::{generate_report, INTEREST_CATALOG, TRAIT_CATALOG};

pub use crate::scoring::{
    raw_iq, scale, score_choices, score_ratings, InterestCategory, InterestTotals, MetricKind,
    PreferenceScores, PreferenceTrait,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

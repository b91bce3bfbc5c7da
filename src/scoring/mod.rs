//! The four independent scorers. Each reads only its slice of the parsed
//! intake and returns a fresh value; they share no state and may run in any
//! order.

pub mod intelligence;
pub mod interest;
pub mod normalize;
pub mod preference;

pub use intelligence::raw_iq;
pub use interest::{score_ratings, InterestCategory, InterestTotals};
pub use normalize::{scale, MetricKind};
pub use preference::{score_choices, PreferenceScores, PreferenceTrait};

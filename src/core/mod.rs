pub mod types;

pub use types::{
    AptitudeVector, Identity, InterestEntry, InventoryVector, ManualOverrides, RankedScore,
    RawRecord, ResultRecord,
};

pub use types::{
    override_groups, APTITUDE_SLOTS, CHOICE_ITEMS, INVENTORY_SLOTS, RATING_ITEMS, TRAIT_COUNT,
};

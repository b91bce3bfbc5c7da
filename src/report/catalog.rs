//! Static reference catalogs the renderer merges with a report record.
//!
//! The scoring pipeline never reads these; it only emits indices and codes
//! that resolve against them. Order is load-bearing: the trait catalog fixes
//! the meaning of the 14 score slots and the interest catalog is indexed by
//! category position.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::TRAIT_COUNT;
use crate::scoring::interest::{InterestCategory, INTEREST_CATEGORIES};

/// One trait slot: display name plus the default report text used when the
/// operator supplies no override.
#[derive(Debug, Clone, Copy)]
pub struct TraitInfo {
    pub name: &'static str,
    pub strength: &'static str,
    pub weakness: &'static str,
    pub recommendation: &'static str,
}

/// The 14 report traits, slot order. Do not reorder.
pub static TRAIT_CATALOG: [TraitInfo; TRAIT_COUNT] = [
    TraitInfo {
        name: "General Ability",
        strength: "Grasps new material quickly and reasons well across domains.",
        weakness: "Needs more time and repetition to absorb new material.",
        recommendation: "Provide structured learning material and allow time to consolidate.",
    },
    TraitInfo {
        name: "Visual Perception",
        strength: "Reads diagrams, patterns and spatial layouts accurately.",
        weakness: "Misses detail in visual and spatial material.",
        recommendation: "Support visual tasks with written or verbal walkthroughs.",
    },
    TraitInfo {
        name: "Logical Reasoning",
        strength: "Draws sound conclusions from incomplete information.",
        weakness: "Struggles to chain premises into conclusions under pressure.",
        recommendation: "Practice stepwise problem decomposition on worked examples.",
    },
    TraitInfo {
        name: "Abstract Reasoning",
        strength: "Handles symbols and unfamiliar rule systems comfortably.",
        weakness: "Prefers concrete material over abstract rule systems.",
        recommendation: "Introduce abstractions through concrete cases first.",
    },
    TraitInfo {
        name: "Verbal Reasoning",
        strength: "Precise with language; argues and summarizes clearly.",
        weakness: "Finds nuanced verbal material hard to unpack.",
        recommendation: "Encourage regular reading and written summaries.",
    },
    TraitInfo {
        name: "Numeric Reasoning",
        strength: "Works with quantities and numeric relations confidently.",
        weakness: "Slow or error-prone with numeric material.",
        recommendation: "Rehearse estimation and mental arithmetic routines.",
    },
    TraitInfo {
        name: "Achievement Drive",
        strength: "Sets demanding goals and pursues them persistently.",
        weakness: "Settles for adequate results when goals are not imposed.",
        recommendation: "Agree on explicit, measurable targets with deadlines.",
    },
    TraitInfo {
        name: "Stress Tolerance",
        strength: "Keeps performance stable under pressure and setbacks.",
        weakness: "Performance degrades noticeably under sustained pressure.",
        recommendation: "Build recovery routines and stage workloads to limit peaks.",
    },
    TraitInfo {
        name: "Self-Confidence",
        strength: "Takes positions and decisions without undue reassurance.",
        weakness: "Hesitates to commit to a position without external backing.",
        recommendation: "Assign visible responsibilities with clear mandates.",
    },
    TraitInfo {
        name: "Social Relations",
        strength: "Builds and maintains working relationships easily.",
        weakness: "Invests little in contact beyond the task at hand.",
        recommendation: "Schedule collaborative work with rotating partners.",
    },
    TraitInfo {
        name: "Cooperation",
        strength: "Supports others readily and shares credit.",
        weakness: "Prefers solitary work and guards own territory.",
        recommendation: "Pair on shared deliverables with joint accountability.",
    },
    TraitInfo {
        name: "Work Systematics",
        strength: "Plans, orders and finishes work methodically.",
        weakness: "Works ad hoc; structure must come from outside.",
        recommendation: "Use checklists and fixed review points.",
    },
    TraitInfo {
        name: "Initiative",
        strength: "Starts and drives work without waiting for direction.",
        weakness: "Waits for explicit direction before acting.",
        recommendation: "Delegate open-ended problems with room to define the approach.",
    },
    TraitInfo {
        name: "Independence",
        strength: "Forms own judgments and works self-directed.",
        weakness: "Leans on guidance for decisions within own remit.",
        recommendation: "Widen decision scope gradually and review outcomes, not steps.",
    },
];

/// One interest category: display name, wire code, default description.
#[derive(Debug, Clone, Copy)]
pub struct InterestInfo {
    pub name: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

/// The 12 interest categories, instrument order.
pub static INTEREST_CATALOG: [InterestInfo; INTEREST_CATEGORIES] = [
    InterestInfo {
        name: "Outdoor",
        code: "OUT",
        description: "Work in the open: agriculture, surveying, field operations.",
    },
    InterestInfo {
        name: "Mechanical",
        code: "ME",
        description: "Machines, tools and technical construction work.",
    },
    InterestInfo {
        name: "Computational",
        code: "COMP",
        description: "Figures, records and systematic numeric work.",
    },
    InterestInfo {
        name: "Scientific",
        code: "SCI",
        description: "Analysis, research and experimentation.",
    },
    InterestInfo {
        name: "Persuasive",
        code: "PERS",
        description: "Influencing people: sales, negotiation, advocacy.",
    },
    InterestInfo {
        name: "Aesthetic",
        code: "AESTH",
        description: "Design, visual arts and creative composition.",
    },
    InterestInfo {
        name: "Literary",
        code: "LIT",
        description: "Reading, writing and editorial work.",
    },
    InterestInfo {
        name: "Musical",
        code: "MUS",
        description: "Performing, listening to and studying music.",
    },
    InterestInfo {
        name: "Social Service",
        code: "SOS",
        description: "Helping, teaching and advising people.",
    },
    InterestInfo {
        name: "Clerical",
        code: "CLER",
        description: "Administrative routine requiring precision.",
    },
    InterestInfo {
        name: "Practical",
        code: "PRAC",
        description: "Hands-on crafts and practical problem solving.",
    },
    InterestInfo {
        name: "Medical",
        code: "MED",
        description: "Treatment, care and the medical professions.",
    },
];

/// Lookup from wire code to catalog entry, built once at first use.
pub static INTEREST_BY_CODE: Lazy<HashMap<&'static str, &'static InterestInfo>> =
    Lazy::new(|| INTEREST_CATALOG.iter().map(|info| (info.code, info)).collect());

/// Catalog entry for a category.
pub fn interest_info(category: InterestCategory) -> &'static InterestInfo {
    &INTEREST_CATALOG[category.index()]
}

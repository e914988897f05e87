//! Growth stage display table
//!
//! The contract's `stage` field (0-4) is the single source of truth for how
//! far a tree has grown. Earlier client builds also recomputed a stage from
//! the raw day count with their own thresholds; that recompute could disagree
//! with the contract and is deliberately not carried here. This module only
//! maps the authoritative stage number to a name and emoji.

use serde::Serialize;

/// Display metadata for one growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageInfo {
    pub stage: u8,
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const STAGES: [StageInfo; 5] = [
    StageInfo {
        stage: 0,
        name: "Seed",
        emoji: "\u{1F331}",
    },
    StageInfo {
        stage: 1,
        name: "Sprout",
        emoji: "\u{1F33F}",
    },
    StageInfo {
        stage: 2,
        name: "Young Tree",
        emoji: "\u{1F333}",
    },
    StageInfo {
        stage: 3,
        name: "Mature Tree",
        emoji: "\u{1F332}",
    },
    StageInfo {
        stage: 4,
        name: "Forest Tree",
        emoji: "\u{1F333}\u{1F332}\u{1F333}",
    },
];

/// Resolve a contract stage to its display entry, falling back to stage 0
/// for values outside the table (same defensive rule as title lookups).
pub fn stage_info(stage: u8) -> &'static StageInfo {
    STAGES.get(stage as usize).unwrap_or(&STAGES[0])
}

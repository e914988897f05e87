//! Title rank table and next-title progress
//!
//! Five named achievement tiers, keyed by the contract's `titleRank` field.
//! The contract is the only thing that promotes a tree to a new rank; this
//! module just resolves rank numbers to display metadata and computes how far
//! a tree is from the next tier. Lookups never fail: an unknown rank resolves
//! to rank 0 so a malformed value can never take down a progress display.

use serde::{Deserialize, Serialize};

/// Requirement for the tier above a given title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextRank {
    pub name: &'static str,
    /// Minimum cumulative water count to hold the next rank
    pub required_days: u32,
}

/// One entry of the static title table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleInfo {
    pub rank: u8,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Minimum cumulative water count to hold this rank
    pub required_days: u32,
    /// Absent on the terminal rank
    pub next_rank: Option<NextRank>,
}

/// The five title tiers. `required_days` is strictly increasing by rank;
/// `next_rank` of each entry mirrors the entry above it.
pub const TITLE_RANKS: [TitleInfo; 5] = [
    TitleInfo {
        rank: 0,
        name: "Seedling Keeper",
        emoji: "\u{1F331}",
        required_days: 0,
        next_rank: Some(NextRank {
            name: "Novice Gardener",
            required_days: 7,
        }),
    },
    TitleInfo {
        rank: 1,
        name: "Novice Gardener",
        emoji: "\u{1F33F}",
        required_days: 7,
        next_rank: Some(NextRank {
            name: "Expert Gardener",
            required_days: 30,
        }),
    },
    TitleInfo {
        rank: 2,
        name: "Expert Gardener",
        emoji: "\u{1F333}",
        required_days: 30,
        next_rank: Some(NextRank {
            name: "Master Gardener",
            required_days: 100,
        }),
    },
    TitleInfo {
        rank: 3,
        name: "Master Gardener",
        emoji: "\u{1F3C6}",
        required_days: 100,
        next_rank: Some(NextRank {
            name: "Forest Guardian",
            required_days: 365,
        }),
    },
    TitleInfo {
        rank: 4,
        name: "Forest Guardian",
        emoji: "\u{1F451}",
        required_days: 365,
        next_rank: None,
    },
];

/// Progress toward the next title tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TitleProgress {
    /// Days watered so far
    pub current: u32,
    /// Days required for the next rank
    pub total: u32,
    /// 0.0..=100.0, clamped at 100 even when `current` overshoots `total`
    pub percentage: f64,
}

/// Resolve a contract `titleRank` to its table entry.
///
/// Ranks without a table entry resolve to rank 0. The contract stores the
/// rank as a uint8, so anything above 4 is either a stale client or a future
/// contract version; either way the display must keep working.
pub fn title_info(rank: u8) -> &'static TitleInfo {
    TITLE_RANKS.get(rank as usize).unwrap_or(&TITLE_RANKS[0])
}

/// Progress from `water_count` toward the rank above `rank`.
///
/// Returns `None` at the terminal rank. The percentage is clamped to 100:
/// a water count past the threshold (stale snapshot, or a rank-up the
/// contract has not yet recorded) must never render an over-full bar.
pub fn progress_to_next_title(water_count: u32, rank: u8) -> Option<TitleProgress> {
    let next = title_info(rank).next_rank?;

    let current = water_count;
    let total = next.required_days;
    let percentage = (f64::from(current) / f64::from(total) * 100.0).min(100.0);

    Some(TitleProgress {
        current,
        total,
        percentage,
    })
}

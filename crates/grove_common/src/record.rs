//! Watering record snapshots
//!
//! `WateringRecord` is the parsed shape of the contract's `getTreeData`
//! tuple, as exported by the chain reader. A record is a point-in-time
//! snapshot: immutable once parsed, replaced wholesale on refetch. The
//! contract owns every counter in it - in particular `stage` and
//! `titleRank` are never recomputed client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Field count of the raw `getTreeData` tuple.
pub const RAW_FIELDS: usize = 8;

/// Older contract builds returned the tuple without `titleRank`.
pub const LEGACY_RAW_FIELDS: usize = 7;

const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("raw tree data has {got} fields, expected {LEGACY_RAW_FIELDS} or {RAW_FIELDS}")]
    WrongLength { got: usize },

    #[error("field `{field}` value {value} does not fit its type")]
    FieldOutOfRange { field: &'static str, value: u64 },
}

/// One tree's on-chain state, as last fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringRecord {
    /// Cumulative successful daily waterings
    pub water_count: u32,
    /// Day index (UTC days since epoch) of the last successful watering
    pub last_watered_day: u64,
    /// Consecutive-day counter, reset by the contract on a missed day
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Bonus watering credits from social actions
    pub extra_water: u32,
    /// Authoritative growth stage, 0-4
    pub stage: u8,
    /// Authoritative title rank, 0-4
    #[serde(default)]
    pub title_rank: u8,
    /// Whether this wallet has minted a tree at all
    pub exists: bool,
}

impl WateringRecord {
    /// Parse the raw integer tuple returned by `getTreeData`.
    ///
    /// Layout: `[waterCount, lastWateredDay, currentStreak, longestStreak,
    /// extraWater, stage, titleRank, exists]`, booleans encoded as 0/1.
    /// The legacy 7-field layout (no `titleRank`) is also accepted, with
    /// the rank defaulting to 0 - same leniency the JSON form gets from
    /// `#[serde(default)]`.
    pub fn from_raw(raw: &[u64]) -> Result<Self, RecordError> {
        let title_rank = match raw.len() {
            RAW_FIELDS => narrow("titleRank", raw[6])?,
            LEGACY_RAW_FIELDS => 0,
            got => return Err(RecordError::WrongLength { got }),
        };

        let record = Self {
            water_count: narrow("waterCount", raw[0])?,
            last_watered_day: raw[1],
            current_streak: narrow("currentStreak", raw[2])?,
            longest_streak: narrow("longestStreak", raw[3])?,
            extra_water: narrow("extraWater", raw[4])?,
            stage: narrow("stage", raw[5])?,
            title_rank,
            exists: *raw.last().unwrap_or(&0) != 0,
        };

        debug!(
            water_count = record.water_count,
            stage = record.stage,
            title_rank = record.title_rank,
            "parsed tree record"
        );

        Ok(record)
    }

    /// Whether the last watering happened on the given day index.
    ///
    /// The contract's own `canWaterToday` is authoritative for gating the
    /// action; this only drives display ("watered today" badge) between
    /// refetches.
    pub fn watered_on(&self, day: u64) -> bool {
        self.exists && self.water_count > 0 && self.last_watered_day == day
    }

    /// Whether redeeming a bonus credit is worth offering in the UI.
    pub fn has_extra_water(&self) -> bool {
        self.exists && self.extra_water > 0
    }
}

/// The contract's day index for a given instant: UTC days since the epoch.
pub fn day_index(at: DateTime<Utc>) -> u64 {
    let secs = at.timestamp();
    if secs <= 0 {
        0
    } else {
        secs as u64 / SECONDS_PER_DAY
    }
}

fn narrow<T: TryFrom<u64>>(field: &'static str, value: u64) -> Result<T, RecordError> {
    T::try_from(value).map_err(|_| RecordError::FieldOutOfRange { field, value })
}

//! Grove Common - Shared types and progression logic for the Grove tree game
//!
//! Everything here is pure derivation over state owned by the Grove contract:
//! the contract decides streaks, cooldowns, stages and title ranks; this crate
//! only turns those raw counters into display-ready data. No chain I/O lives
//! here - records arrive as snapshots from a chain reader and are replaced
//! wholesale on refetch.

pub mod config;
pub mod display;
pub mod metadata;
pub mod milestones;
pub mod record;
pub mod stages;
pub mod titles;

pub use config::GroveConfig;
pub use metadata::{parse_token_uri, MetadataError, NftMetadata, TokenUri};
pub use milestones::{milestone_for, Milestone};
pub use record::{RecordError, WateringRecord};
pub use stages::{stage_info, StageInfo};
pub use titles::{progress_to_next_title, title_info, NextRank, TitleInfo, TitleProgress};

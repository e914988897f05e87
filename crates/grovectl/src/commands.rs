//! Command implementations for grovectl

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;
use tracing::debug;

use grove_common::record::day_index;
use grove_common::titles::TITLE_RANKS;
use grove_common::{display, GroveConfig, TokenUri, WateringRecord};

fn load_record(path: &Path) -> Result<WateringRecord> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading record file {}", path.display()))?;
    let record: WateringRecord = serde_json::from_str(&json)
        .with_context(|| format!("parsing record file {}", path.display()))?;

    debug!(
        path = %path.display(),
        water_count = record.water_count,
        title_rank = record.title_rank,
        "loaded tree record"
    );

    Ok(record)
}

pub fn status(record_path: &Path) -> Result<()> {
    let record = load_record(record_path)?;
    let today = day_index(Utc::now());
    println!("{}", display::render_status(&record, today));
    Ok(())
}

pub fn titles() -> Result<()> {
    println!("{}", "Title Ranks".bold());
    for info in &TITLE_RANKS {
        let requirement = match info.required_days {
            0 => "start".to_string(),
            days => format!("{days} days"),
        };
        println!(
            "  {} {}  {} ({})",
            info.rank,
            info.emoji,
            info.name,
            requirement
        );
    }
    Ok(())
}

pub fn progress(water_count: u32, rank: u8) -> Result<()> {
    println!("{}", display::title_badge(rank));
    println!("{}", display::title_progress_block(water_count, rank));
    Ok(())
}

pub fn metadata(uri: &str) -> Result<()> {
    match grove_common::parse_token_uri(uri).context("decoding tokenURI")? {
        TokenUri::Inline(meta) => {
            println!("{}", meta.name.bold());
            if !meta.description.is_empty() {
                println!("{}", meta.description);
            }
            if !meta.image.is_empty() {
                println!("image: {}", meta.image.dimmed());
            }
            for attr in &meta.attributes {
                println!("  {}: {}", attr.trait_type, attr.value);
            }
        }
        TokenUri::Remote(url) => {
            println!("metadata is remote: {url}");
        }
    }
    Ok(())
}

pub fn config() -> Result<()> {
    let config = GroveConfig::load()?;

    println!("{}", "Grove configuration".bold());
    let address = if config.contract_address.is_empty() {
        "(unset)".to_string()
    } else {
        config.contract_address.clone()
    };
    println!("  contract address   {address}");
    println!("  explorer           {}", config.explorer_url());
    println!("  polling interval   {} ms", config.polling_interval_ms);
    println!("  stale time         {} ms", config.stale_time_ms);
    println!("  cache time         {} ms", config.cache_time_ms);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_record_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"waterCount": 9, "lastWateredDay": 20454, "currentStreak": 9,
                "longestStreak": 9, "extraWater": 0, "stage": 2,
                "titleRank": 1, "exists": true}}"#
        )
        .unwrap();

        let record = load_record(file.path()).unwrap();
        assert_eq!(record.water_count, 9);
        assert_eq!(record.title_rank, 1);
    }

    #[test]
    fn bad_record_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_record(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing record file"));
    }
}

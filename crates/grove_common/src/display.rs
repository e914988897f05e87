//! Terminal rendering of tree state
//!
//! String-building only; nothing here prints. Mirrors what the web client
//! shows: a title badge, a stage line, the stat cards, and the next-title
//! progress bar (or the terminal "maximum rank" state).

use owo_colors::OwoColorize;

use crate::milestones::milestone_for;
use crate::record::WateringRecord;
use crate::stages::stage_info;
use crate::titles::{progress_to_next_title, title_info};

const BAR_WIDTH: usize = 28;

/// A fixed-width progress bar, `percentage` in 0..=100.
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * width as f64).round() as usize;
    let filled = filled.min(width);

    format!(
        "{}{}",
        "\u{2588}".repeat(filled).green(),
        "\u{2591}".repeat(width - filled).dimmed()
    )
}

/// `🌱 Seedling Keeper` style badge for a title rank.
pub fn title_badge(rank: u8) -> String {
    let info = title_info(rank);
    format!("{} {}", info.emoji, info.name.bold())
}

/// The next-title progress block, or the maximum-rank banner.
pub fn title_progress_block(water_count: u32, rank: u8) -> String {
    match progress_to_next_title(water_count, rank) {
        Some(progress) => {
            // progress exists, so the resolved rank is non-terminal and the
            // next title is the table entry above it
            let next = title_info(title_info(rank).rank + 1);
            format!(
                "Next Title: {}\n{}\n{} / {} days  {}%",
                next.name.cyan(),
                progress_bar(progress.percentage, BAR_WIDTH),
                progress.current,
                progress.total,
                // floor, matching the web client's percentage label
                progress.percentage.floor() as u32
            )
        }
        None => format!(
            "\u{1F451} {}",
            "Maximum Rank Achieved!".yellow().bold()
        ),
    }
}

/// Full status card for one record. `today` is the current contract day
/// index (see [`crate::record::day_index`]).
pub fn render_status(record: &WateringRecord, today: u64) -> String {
    if !record.exists {
        return format!(
            "{}\nMint a tree to start your grove.",
            "No tree yet".bold()
        );
    }

    let stage = stage_info(record.stage);
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", stage.emoji, stage.name.bold().green()));
    out.push_str(&format!("{}\n\n", title_badge(record.title_rank)));

    out.push_str(&format!(
        "Days Watered    {}\nCurrent Streak  {}\nLongest Streak  {}\nExtra Water     {}\n\n",
        record.water_count,
        record.current_streak,
        record.longest_streak,
        record.extra_water
    ));

    if record.watered_on(today) {
        out.push_str(&format!("{}\n", "Watered today - come back tomorrow".dimmed()));
    } else {
        out.push_str(&format!("{}\n", "Water available!".blue().bold()));
    }

    out.push('\n');
    out.push_str(&title_progress_block(record.water_count, record.title_rank));

    if let Some(milestone) = milestone_for(record.water_count) {
        out.push_str(&format!(
            "\n\n{} {}\n{}",
            "\u{1F389}",
            milestone.label.yellow().bold(),
            milestone.message
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RAW_FIELDS;

    fn record(water: u64, stage: u64, rank: u64) -> WateringRecord {
        let raw: [u64; RAW_FIELDS] = [water, 20_454, water, water, 1, stage, rank, 1];
        WateringRecord::from_raw(&raw).unwrap()
    }

    #[test]
    fn bar_width_is_respected() {
        for pct in [0.0, 33.3, 50.0, 99.9, 100.0] {
            let bar = progress_bar(pct, 10);
            let cells = bar.chars().filter(|c| *c == '\u{2588}' || *c == '\u{2591}').count();
            assert_eq!(cells, 10, "pct {pct}");
        }
    }

    #[test]
    fn empty_and_full_bars() {
        assert!(!progress_bar(0.0, 8).contains('\u{2588}'));
        assert!(!progress_bar(100.0, 8).contains('\u{2591}'));
    }

    #[test]
    fn max_rank_shows_banner() {
        let block = title_progress_block(400, 4);
        assert!(block.contains("Maximum Rank Achieved"));
    }

    #[test]
    fn out_of_range_rank_block_matches_rank_zero() {
        // unknown ranks resolve to rank 0, so the next title is rank 1's
        assert_eq!(title_progress_block(3, 9), title_progress_block(3, 0));
        assert!(title_progress_block(3, 9).contains("Novice Gardener"));
    }

    #[test]
    fn progress_block_names_next_title() {
        let block = title_progress_block(3, 0);
        assert!(block.contains("Novice Gardener"));
        assert!(block.contains("3 / 7 days"));
        assert!(block.contains("42%"), "floor of 3/7 is 42, got: {block}");
    }

    #[test]
    fn status_for_missing_tree() {
        let record = WateringRecord::from_raw(&[0; RAW_FIELDS]).unwrap();
        assert!(render_status(&record, 0).contains("Mint a tree"));
    }

    #[test]
    fn status_reflects_watering_state() {
        let r = record(5, 1, 0);
        assert!(render_status(&r, 20_454).contains("come back tomorrow"));
        assert!(render_status(&r, 20_455).contains("Water available"));
    }

    #[test]
    fn milestone_banner_appears_on_exact_day() {
        let status = render_status(&record(7, 2, 1), 0);
        assert!(status.contains("Week Streak"));
    }
}

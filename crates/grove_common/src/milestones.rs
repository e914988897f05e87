//! Celebration milestones
//!
//! Fixed day counts at which the app celebrates (confetti modal in the web
//! client, a banner in grovectl). A milestone fires on the exact day count,
//! once; replays are the caller's problem since records carry no history.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Cumulative water count that triggers this milestone
    pub days: u32,
    pub label: &'static str,
    pub message: &'static str,
}

pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        days: 1,
        label: "First Watering",
        message: "Your journey begins! The seed has been watered for the first time.",
    },
    Milestone {
        days: 3,
        label: "Sprout",
        message: "Three days strong. A sprout is pushing through the soil!",
    },
    Milestone {
        days: 7,
        label: "Week Streak",
        message: "A full week of care. Your tree is taking root.",
    },
    Milestone {
        days: 14,
        label: "Mature Tree",
        message: "Two weeks of watering. Your tree stands tall!",
    },
    Milestone {
        days: 30,
        label: "Forest Guardian",
        message: "Thirty days! You are growing a forest.",
    },
];

/// The milestone reached at exactly `water_count`, if any.
pub fn milestone_for(water_count: u32) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.days == water_count)
}

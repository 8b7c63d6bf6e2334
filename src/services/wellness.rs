//! Wellness scoring and the statistics derived from the mood log.
//!
//! Everything here is a pure function of the entries passed in. The per-entry
//! trend series and the aggregate wellness card share [`wellness_score`] so the
//! two displays never disagree.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::mood_entry::MoodEntry;

/// Rounds half-way values up (towards positive infinity): 7.5 -> 8, -0.5 -> 0.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Unrounded score, clamped at zero.
pub fn wellness_progress(energy: i32, stress: i32) -> f64 {
    let raw = f64::from(energy * 10 - stress * 5) / 1.5;
    raw.max(0.0)
}

/// `max(0, round((energy * 10 - stress * 5) / 1.5))`.
///
/// No upper clamp: over the accepted 1-10 inputs the score tops out at 63.
pub fn wellness_score(energy: i32, stress: i32) -> i32 {
    round_half_up(wellness_progress(energy, stress))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub average_energy: i32,
    pub average_stress: i32,
    pub entry_count: usize,
}

impl AggregateStats {
    /// Means over the whole log. An empty log yields zeros.
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let count = entries.len() as f64;
        let energy_sum: i64 = entries.iter().map(|e| i64::from(e.energy)).sum();
        let stress_sum: i64 = entries.iter().map(|e| i64::from(e.stress)).sum();

        Self {
            average_energy: round_half_up(energy_sum as f64 / count),
            average_stress: round_half_up(stress_sum as f64 / count),
            entry_count: entries.len(),
        }
    }

    pub fn wellness_score(&self) -> i32 {
        wellness_score(self.average_energy, self.average_stress)
    }

    pub fn wellness_progress(&self) -> f64 {
        wellness_progress(self.average_energy, self.average_stress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Short axis label, e.g. "Sep 10".
    pub label: String,
    pub energy: i32,
    pub stress: i32,
    pub wellness: i32,
}

pub fn trend_series(entries: &[MoodEntry]) -> Vec<TrendPoint> {
    entries
        .iter()
        .map(|entry| TrendPoint {
            date: entry.date,
            label: entry.date.format("%b %-d").to_string(),
            energy: entry.energy,
            stress: entry.stress,
            wellness: wellness_score(entry.energy, entry.stress),
        })
        .collect()
}

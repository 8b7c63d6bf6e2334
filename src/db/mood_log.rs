use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::mood::Mood;
use crate::models::mood_entry::MoodEntry;

/// Append-only, submission-ordered log of check-ins.
#[derive(Debug, Clone, Default)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: MoodEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently submitted entry dated `today`, if any.
    pub fn today_entry(&self, today: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().rev().find(|e| e.date == today)
    }
}

/// Everything the dashboard needs between requests.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub log: MoodLog,
    pub show_check_in: bool,
}

pub type SharedDashboard = Arc<RwLock<DashboardState>>;

impl DashboardState {
    pub fn new(log: MoodLog) -> Self {
        Self {
            log,
            show_check_in: false,
        }
    }

    pub fn into_shared(self) -> SharedDashboard {
        Arc::new(RwLock::new(self))
    }

    /// Opens the check-in prompt. Only offered while today has no entry.
    pub fn open_check_in(&mut self, today: NaiveDate) -> AppResult<()> {
        if self.log.today_entry(today).is_some() {
            return Err(AppError::Conflict(
                "Today's check-in is already completed".into(),
            ));
        }
        self.show_check_in = true;
        Ok(())
    }

    pub fn close_check_in(&mut self) {
        self.show_check_in = false;
    }

    /// Records a submission and dismisses the prompt.
    pub fn submit(&mut self, entry: MoodEntry) {
        self.log.append(entry);
        self.show_check_in = false;
    }
}

/// The three check-ins a fresh dashboard starts with.
pub fn sample_log() -> MoodLog {
    let samples = [
        ((2025, 9, 10), Mood::Happy, 8, 3),
        ((2025, 9, 11), Mood::Calm, 7, 2),
        ((2025, 9, 12), Mood::Energetic, 9, 4),
    ];

    let mut log = MoodLog::new();
    for ((y, m, d), mood, energy, stress) in samples {
        let Some(created_at) = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single() else {
            continue;
        };
        log.append(MoodEntry {
            id: Uuid::new_v4(),
            date: created_at.date_naive(),
            mood,
            energy,
            stress,
            notes: None,
            created_at,
        });
    }
    log
}

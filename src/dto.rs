//! # Mood Log: Response DTOs
//!
//! Read models returned by the dashboard endpoints. Request bodies live next
//! to their models (`models::mood_entry::CheckInRequest`).
//!
//! Conventions:
//! - `*Response` → serialized to client JSON
//! - Derived values are recomputed from the full log on every request

use serde::Serialize;

use crate::db::mood_log::DashboardState;
use crate::models::mood::Mood;
use crate::models::mood_entry::MoodEntry;
use crate::models::recommendation::Recommendation;
use crate::services::clock::Clock;
use crate::services::recommendations::recommend;
use crate::services::wellness::{trend_series, AggregateStats, TrendPoint};

// ============================================================================
// Cards
// ============================================================================

/// Energy or stress card: `value`/10 with a 0-100 progress bar.
#[derive(Debug, Serialize, PartialEq)]
pub struct LevelCard {
    pub value: i32,
    pub max: i32,
    pub progress: i32,
}

impl LevelCard {
    fn out_of_ten(value: i32) -> Self {
        Self {
            value,
            max: 10,
            progress: value * 10,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct WellnessCard {
    pub score: i32,
    pub progress: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DashboardCards {
    pub energy: LevelCard,
    pub stress: LevelCard,
    pub wellness: WellnessCard,
}

impl From<&AggregateStats> for DashboardCards {
    fn from(stats: &AggregateStats) -> Self {
        Self {
            energy: LevelCard::out_of_ten(stats.average_energy),
            stress: LevelCard::out_of_ten(stats.average_stress),
            wellness: WellnessCard {
                score: stats.wellness_score(),
                progress: stats.wellness_progress(),
            },
        }
    }
}

// ============================================================================
// Endpoints
// ============================================================================

/// GET /api/stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: AggregateStats,
    pub wellness_score: i32,
}

impl From<AggregateStats> for StatsResponse {
    fn from(stats: AggregateStats) -> Self {
        Self {
            wellness_score: stats.wellness_score(),
            stats,
        }
    }
}

/// POST /api/check-in/open, POST /api/check-in/close
#[derive(Debug, Serialize)]
pub struct CheckInStatusResponse {
    pub show_check_in: bool,
    pub checked_in_today: bool,
}

/// GET /api/dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: AggregateStats,
    pub cards: DashboardCards,
    pub checked_in_today: bool,
    pub show_check_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_entry: Option<MoodEntry>,
    pub recommendations: Vec<Recommendation>,
    pub trend: Vec<TrendPoint>,
}

/// Snapshot of everything derived from the log for one read.
pub struct DashboardView<'a> {
    pub state: &'a DashboardState,
    pub stats: AggregateStats,
    pub today_entry: Option<&'a MoodEntry>,
    pub local_hour: u32,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a DashboardState, clock: &dyn Clock) -> Self {
        Self {
            state,
            stats: AggregateStats::from_entries(state.log.entries()),
            today_entry: state.log.today_entry(clock.today()),
            local_hour: clock.local_hour(),
        }
    }

    pub fn current_mood(&self) -> Option<Mood> {
        self.today_entry.map(|e| e.mood)
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommend(&self.stats, self.current_mood(), self.local_hour)
    }

    pub fn check_in_status(&self) -> CheckInStatusResponse {
        CheckInStatusResponse {
            show_check_in: self.state.show_check_in,
            checked_in_today: self.today_entry.is_some(),
        }
    }

    pub fn into_dashboard(self) -> DashboardResponse {
        DashboardResponse {
            cards: DashboardCards::from(&self.stats),
            checked_in_today: self.today_entry.is_some(),
            show_check_in: self.state.show_check_in,
            recommendations: self.recommendations(),
            trend: trend_series(self.state.log.entries()),
            today_entry: self.today_entry.cloned(),
            stats: self.stats,
        }
    }
}

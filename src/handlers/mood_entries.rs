use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::models::mood_entry::{CheckInRequest, MoodEntry};
use crate::AppState;

pub async fn submit_check_in(
    State(state): State<AppState>,
    Json(body): Json<CheckInRequest>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let check_in = body.into_check_in()?;
    let entry = MoodEntry::from_check_in(check_in, state.clock.now());

    let mut dashboard = state.dashboard.write().await;
    if dashboard.log.today_entry(entry.date).is_some() {
        tracing::debug!(date = %entry.date, "Additional check-in recorded for today");
    }
    dashboard.submit(entry.clone());

    tracing::info!(
        entry_id = %entry.id,
        mood = %entry.mood,
        energy = entry.energy,
        stress = entry.stress,
        total_entries = dashboard.log.len(),
        "Mood check-in recorded"
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.log.entries().to_vec())
}

use axum::Json;

use crate::models::mood::{mood_options, MoodOption};

pub async fn list_moods() -> Json<Vec<MoodOption>> {
    Json(mood_options())
}

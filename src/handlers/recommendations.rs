use axum::{extract::State, Json};

use crate::dto::DashboardView;
use crate::models::recommendation::Recommendation;
use crate::AppState;

pub async fn get_recommendations(State(state): State<AppState>) -> Json<Vec<Recommendation>> {
    let dashboard = state.dashboard.read().await;
    let view = DashboardView::new(&dashboard, state.clock.as_ref());
    let recs = view.recommendations();

    tracing::debug!(
        average_energy = view.stats.average_energy,
        average_stress = view.stats.average_stress,
        current_mood = ?view.current_mood(),
        count = recs.len(),
        "Recommendations generated"
    );

    Json(recs)
}

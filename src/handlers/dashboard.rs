use axum::{extract::State, Json};

use crate::dto::{CheckInStatusResponse, DashboardResponse, DashboardView, StatsResponse};
use crate::error::AppResult;
use crate::services::wellness::{trend_series, AggregateStats, TrendPoint};
use crate::AppState;

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let dashboard = state.dashboard.read().await;
    Json(DashboardView::new(&dashboard, state.clock.as_ref()).into_dashboard())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let dashboard = state.dashboard.read().await;
    Json(AggregateStats::from_entries(dashboard.log.entries()).into())
}

pub async fn get_trends(State(state): State<AppState>) -> Json<Vec<TrendPoint>> {
    let dashboard = state.dashboard.read().await;
    Json(trend_series(dashboard.log.entries()))
}

pub async fn open_check_in(State(state): State<AppState>) -> AppResult<Json<CheckInStatusResponse>> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.open_check_in(state.clock.today())?;
    tracing::debug!("Check-in prompt opened");

    Ok(Json(
        DashboardView::new(&dashboard, state.clock.as_ref()).check_in_status(),
    ))
}

pub async fn close_check_in(State(state): State<AppState>) -> Json<CheckInStatusResponse> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.close_check_in();
    tracing::debug!("Check-in prompt closed");

    Json(DashboardView::new(&dashboard, state.clock.as_ref()).check_in_status())
}

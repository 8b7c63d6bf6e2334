use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod dto;
mod error;
mod handlers;
mod models;
mod services;

use config::Config;
use db::mood_log::{sample_log, DashboardState, MoodLog, SharedDashboard};
use services::clock::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub dashboard: SharedDashboard,
    pub config: Arc<Config>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        let log = if config.seed_sample_entries {
            sample_log()
        } else {
            MoodLog::new()
        };

        Self {
            dashboard: DashboardState::new(log).into_shared(),
            config: Arc::new(config),
            clock,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodlog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let state = AppState::new(Config::from_env(), Arc::new(SystemClock));
    {
        let dashboard = state.dashboard.read().await;
        if dashboard.log.is_empty() {
            tracing::info!("Mood log initialized empty");
        } else {
            tracing::info!(entries = dashboard.log.len(), "Mood log seeded with sample entries");
        }
    }

    let cors = cors_layer(&state.config)?;
    let addr = state.config.listen_addr();

    let app = build_router(state)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Check-ins
        .route("/api/moods", get(handlers::moods::list_moods))
        .route(
            "/api/mood-entries",
            get(handlers::mood_entries::list_entries).post(handlers::mood_entries::submit_check_in),
        )
        .route("/api/check-in/open", post(handlers::dashboard::open_check_in))
        .route("/api/check-in/close", post(handlers::dashboard::close_check_in))
        // Dashboard read models
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/stats", get(handlers::dashboard::get_stats))
        .route("/api/trends", get(handlers::dashboard::get_trends))
        .route(
            "/api/recommendations",
            get(handlers::recommendations::get_recommendations),
        )
        .fallback(handlers::health::not_found)
        .with_state(state)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = vec![config
        .frontend_url
        .parse::<axum::http::HeaderValue>()
        .context("FRONTEND_URL is not a valid origin")?];
    // In dev, also allow LAN access (e.g. testing from another device)
    for o in &config.cors_extra_origins {
        match o.parse::<axum::http::HeaderValue>() {
            Ok(hv) => origins.push(hv),
            Err(_) => tracing::warn!(origin = %o, "Ignoring invalid CORS origin"),
        }
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use crate::services::clock::FixedClock;
    use tower::ServiceExt;

    fn test_state(seed: bool, local_hour: u32) -> AppState {
        let config = Config {
            seed_sample_entries: seed,
            ..Config::default()
        };
        AppState::new(config, Arc::new(FixedClock::at(2026, 2, 10, local_hour)))
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn rec_ids(body: &Value) -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    }

    // ── health ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(build_router(test_state(false, 9)), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "moodlog-api");
    }

    #[tokio::test]
    async fn test_readyz_reports_entries() {
        let (status, body) = send(build_router(test_state(true, 9)), get("/readyz")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entries"], 3);
    }

    // ── check-in submission ──────────────────────────────────────────────

    #[tokio::test]
    async fn test_submit_check_in_appends_entry() {
        let state = test_state(true, 9);
        let (status, body) = send(
            build_router(state.clone()),
            post_json(
                "/api/mood-entries",
                json!({"mood": "sad", "energy": 3, "stress": 8, "notes": "  rough day "}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["mood"], "sad");
        assert_eq!(body["date"], "2026-02-10");
        assert_eq!(body["notes"], "rough day");

        let (_, entries) = send(build_router(state), get("/api/mood-entries")).await;
        let entries = entries.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[3]["mood"], "sad");
    }

    #[tokio::test]
    async fn test_submit_without_mood_rejected() {
        let state = test_state(false, 9);
        let (status, body) = send(
            build_router(state.clone()),
            post_json("/api/mood-entries", json!({"energy": 5, "stress": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["message"], "Mood is required");
        assert_eq!(body["error"]["code"], 422);
        assert!(state.dashboard.read().await.log.is_empty());
    }

    #[tokio::test]
    async fn test_submit_out_of_range_rejected() {
        let state = test_state(false, 9);
        let (status, _) = send(
            build_router(state.clone()),
            post_json(
                "/api/mood-entries",
                json!({"mood": "happy", "energy": 11, "stress": 5}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.dashboard.read().await.log.is_empty());
    }

    // ── dashboard ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_dashboard_sample_log() {
        let (status, body) = send(build_router(test_state(true, 9)), get("/api/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cards"]["energy"]["value"], 8);
        assert_eq!(body["cards"]["stress"]["value"], 3);
        assert_eq!(body["cards"]["wellness"]["score"], 43);
        assert_eq!(body["checked_in_today"], false);
        assert_eq!(body["show_check_in"], false);
        assert_eq!(body["trend"].as_array().unwrap().len(), 3);
        assert_eq!(body["trend"][0]["label"], "Sep 10");
    }

    #[tokio::test]
    async fn test_dashboard_empty_log() {
        let (status, body) = send(build_router(test_state(false, 9)), get("/api/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["average_energy"], 0);
        assert_eq!(body["stats"]["average_stress"], 0);
        assert_eq!(
            rec_ids(&body["recommendations"]),
            vec!["walk", "hydrate", "self-care"]
        );
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let (_, body) = send(build_router(test_state(true, 9)), get("/api/stats")).await;
        assert_eq!(body["average_energy"], 8);
        assert_eq!(body["average_stress"], 3);
        assert_eq!(body["entry_count"], 3);
        assert_eq!(body["wellness_score"], 43);
    }

    #[tokio::test]
    async fn test_trends_endpoint() {
        let (_, body) = send(build_router(test_state(true, 9)), get("/api/trends")).await;
        let points = body.as_array().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2]["date"], "2025-09-12");
        assert_eq!(points[2]["wellness"], 47);
    }

    #[tokio::test]
    async fn test_moods_catalog() {
        let (_, body) = send(build_router(test_state(false, 9)), get("/api/moods")).await;
        assert_eq!(body.as_array().unwrap().len(), 8);
        assert_eq!(body[4]["id"], "sad");
    }

    // ── recommendations ──────────────────────────────────────────────────

    #[tokio::test]
    async fn test_recommendations_use_todays_mood() {
        let state = test_state(false, 9);
        send(
            build_router(state.clone()),
            post_json(
                "/api/mood-entries",
                json!({"mood": "sad", "energy": 3, "stress": 3}),
            ),
        )
        .await;

        let (_, body) = send(build_router(state), get("/api/recommendations")).await;
        assert_eq!(rec_ids(&body), vec!["walk", "hydrate", "music", "journal"]);
    }

    #[tokio::test]
    async fn test_recommendations_evening_adds_sleep() {
        let state = test_state(false, 20);
        send(
            build_router(state.clone()),
            post_json(
                "/api/mood-entries",
                json!({"mood": "calm", "energy": 6, "stress": 2}),
            ),
        )
        .await;

        let (_, body) = send(build_router(state), get("/api/recommendations")).await;
        assert_eq!(rec_ids(&body), vec!["self-care", "sleep"]);
    }

    // ── check-in prompt ──────────────────────────────────────────────────

    #[tokio::test]
    async fn test_check_in_prompt_lifecycle() {
        let state = test_state(true, 9);

        let (status, body) = send(build_router(state.clone()), post_empty("/api/check-in/open")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["show_check_in"], true);
        assert_eq!(body["checked_in_today"], false);

        send(
            build_router(state.clone()),
            post_json(
                "/api/mood-entries",
                json!({"mood": "happy", "energy": 8, "stress": 2}),
            ),
        )
        .await;

        let (_, body) = send(build_router(state.clone()), get("/api/dashboard")).await;
        assert_eq!(body["show_check_in"], false);
        assert_eq!(body["checked_in_today"], true);
        assert_eq!(body["today_entry"]["mood"], "happy");

        let (status, body) = send(build_router(state), post_empty("/api/check-in/open")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], 409);
    }

    #[tokio::test]
    async fn test_close_check_in() {
        let state = test_state(false, 9);
        send(build_router(state.clone()), post_empty("/api/check-in/open")).await;
        let (status, body) = send(build_router(state), post_empty("/api/check-in/close")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["show_check_in"], false);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = send(build_router(test_state(false, 9)), get("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 404);
    }

    #[test]
    fn test_cors_layer_rejects_bad_frontend_url() {
        let config = Config {
            frontend_url: "bad\norigin".into(),
            ..Config::default()
        };
        assert!(cors_layer(&config).is_err());
    }
}

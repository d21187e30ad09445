use axum::{
    extract::{Query, State},
    response::Html,
    routing::{get, post},
    Router,
};
use std::{collections::HashMap, sync::Arc};
use tower_http::cors::CorsLayer;

use scrimboard::{StatsClient, StatsView};

#[derive(Clone)]
struct AppState {
    view: Arc<StatsView>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrimboard=info,server=info".into()),
        )
        .init();

    let client = StatsClient::from_env()?;
    tracing::info!(base_url = client.base_url(), "scoring service");
    let state = AppState {
        view: Arc::new(StatsView::new(client)),
    };

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/view/current", get(current_handler))
        .route("/view/scoreboard", get(scoreboard_handler))
        .route("/view/role_leaderboard", get(role_leaderboard_handler))
        .route("/view/stats", get(player_stats_handler))
        .route("/view/compare", get(compare_handler))
        .route("/view/progress", get(progress_handler))
        .route("/view/update", post(update_handler))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let bind = std::env::var("SCRIMBOARD_BIND").unwrap_or_else(|_| "127.0.0.1:9000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "serving scrim scoreboard");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn current_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.view.region().content())
}

async fn scoreboard_handler(State(state): State<AppState>) -> Html<String> {
    state.view.show_scoreboard().await;
    Html(state.view.region().content())
}

async fn role_leaderboard_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let role = params.get("role").map(String::as_str).unwrap_or_default();
    state.view.show_role_leaderboard(role).await;
    Html(state.view.region().content())
}

async fn player_stats_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let name = params
        .get("player_name")
        .map(String::as_str)
        .unwrap_or_default();
    state.view.show_player_stats(name).await;
    Html(state.view.region().content())
}

async fn compare_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let first = params.get("player1").map(String::as_str).unwrap_or_default();
    let second = params.get("player2").map(String::as_str).unwrap_or_default();
    state.view.show_comparison(first, second).await;
    Html(state.view.region().content())
}

async fn progress_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let name = params
        .get("player_name")
        .map(String::as_str)
        .unwrap_or_default();
    state.view.show_progress(name).await;
    Html(state.view.region().content())
}

async fn update_handler(State(state): State<AppState>) -> Html<String> {
    state.view.run_update().await;
    Html(state.view.region().content())
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Scrim Scoreboard</title></head>
<body>
<h1>Scrim Scoreboard</h1>
<button onclick="load('/view/scoreboard')">Scoreboard</button>
<button onclick="loadRole()">Role Leaderboard</button>
<button onclick="loadPlayer('/view/stats')">Player Stats</button>
<button onclick="loadCompare()">Compare Players</button>
<button onclick="loadPlayer('/view/progress')">Progress</button>
<div id="content"></div>
<script>
async function load(url, opts) {
    const resp = await fetch(url, opts);
    document.getElementById('content').innerHTML = await resp.text();
}
function loadRole() {
    const role = prompt("Enter role (e.g., TOP, JUNGLE):");
    if (role === null) return;
    load('/view/role_leaderboard?role=' + encodeURIComponent(role));
}
function loadPlayer(path) {
    const name = prompt("Enter player name:");
    if (name === null) return;
    load(path + '?player_name=' + encodeURIComponent(name));
}
function loadCompare() {
    const p1 = prompt("Enter the first player's name:");
    const p2 = prompt("Enter the second player's name:");
    if (p1 === null || p2 === null) return;
    load('/view/compare?player1=' + encodeURIComponent(p1) + '&player2=' + encodeURIComponent(p2));
}
</script>
</body>
</html>
"#;

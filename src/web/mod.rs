mod assets;

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::Serialize;
use tokio::net::TcpListener;

use crate::{
    config::AppConfig,
    dataset::DinoLoader,
    human::HumanForm,
    rng,
    tiles::{self, Tile},
};

struct AppState {
    data_file: PathBuf,
    images_dir: PathBuf,
    seed: Option<u64>,
}

pub async fn run(config: AppConfig) -> Result<()> {
    let state = Arc::new(AppState {
        data_file: config.data_file,
        images_dir: config.images_dir,
        seed: config.seed,
    });

    let router = Router::new()
        .route("/", get(index))
        .route("/styles.css", get(styles))
        .route("/app.js", get(script))
        .route("/images/:name", get(image))
        .route("/api/infographic", post(infographic))
        .with_state(state);

    println!(
        "🦕 dinograph UI live at http://{}:{} (Ctrl+C to stop)",
        config.host, config.port
    );

    let listener = TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("Shutting down dinograph UI...");
}

async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::STYLES_CSS,
    )
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        assets::APP_JS,
    )
}

async fn image(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> Response {
    // Flat file names only.
    if name.contains(['/', '\\']) || name.contains("..") {
        return StatusCode::NOT_FOUND.into_response();
    }
    match tokio::fs::read(state.images_dir.join(&name)).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "image/png")],
            Bytes::from(bytes),
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

#[derive(Serialize)]
struct InfographicResponse {
    tiles: Vec<Tile>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// One submission: validate the form, load the dataset, build the tiles.
/// Validation problems come back as 422 with the accumulated message; data
/// and selection problems as 500. Nothing partial is ever returned.
async fn infographic(
    State(state): State<Arc<AppState>>,
    Json(form): Json<HumanForm>,
) -> Response {
    let human = match form.validate() {
        Ok(human) => human,
        Err(err) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
    };

    let data_file = state.data_file.clone();
    let dinos =
        match tokio::task::spawn_blocking(move || DinoLoader::new(".").load(data_file)).await {
            Ok(Ok(dinos)) => dinos,
            Ok(Err(err)) => {
                eprintln!("[web] dino data load failed: {err}");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
            }
            Err(err) => {
                eprintln!("[web] dino data load task failed: {err}");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "dino data load task failed".to_string(),
                );
            }
        };

    let mut rng = rng::infographic_rng(state.seed);
    match tiles::build_tiles(&dinos, &human, &mut rng) {
        Ok(tiles) => Json(InfographicResponse { tiles }).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pages::{AssetError, AssetStore, PageRouter};
use serde::Deserialize;
use shared::{
    domain::{AppConfig, PageId},
    error::{ApiError, ErrorCode},
    protocol::{PagePayload, PageSummary},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod html;

use app_state::AppState;
use config::load_settings;
use html::{render_document, PageBody};

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let assets = AssetStore::new(settings.asset_root());
    if !assets.root().is_dir() {
        warn!(
            asset_dir = %assets.root().display(),
            "asset directory does not exist; pages with images will fail to render"
        );
    }

    let state = AppState {
        config: settings.app_config(),
        router: PageRouter::new(),
        assets,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, title = %settings.page_title, "showcase listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let static_assets = ServeDir::new(state.assets.root());
    Router::new()
        .route("/", get(show_page))
        .route("/healthz", get(healthz))
        .route("/api/config", get(api_config))
        .route("/api/pages", get(api_list_pages))
        .route("/api/pages/:page", get(api_render_page))
        .nest_service("/assets", static_assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// One UI interaction: read the sidebar selection and render that page.
async fn show_page(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PageQuery>,
) -> Response {
    let selection = q
        .page
        .unwrap_or_else(|| PageId::default().label().to_string());
    let pages = state.router.pages();

    match state.router.dispatch(&selection, &state.assets) {
        Ok(Some(rendered)) => {
            let document = render_document(
                &state.config,
                pages,
                Some(rendered.page),
                PageBody::Blocks(&rendered.blocks),
            );
            Html(document.into_string()).into_response()
        }
        Ok(None) => {
            let document = render_document(&state.config, pages, None, PageBody::Empty);
            Html(document.into_string()).into_response()
        }
        Err(err) => {
            warn!(%selection, asset = err.path(), "page failed to render");
            let document = render_document(
                &state.config,
                pages,
                PageId::from_selection(&selection),
                PageBody::Failed(&err),
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(document.into_string()),
            )
                .into_response()
        }
    }
}

async fn api_config(State(state): State<Arc<AppState>>) -> Json<AppConfig> {
    Json(state.config.clone())
}

async fn api_list_pages(State(state): State<Arc<AppState>>) -> Json<Vec<PageSummary>> {
    Json(state.router.pages().map(PageSummary::from).collect())
}

async fn api_render_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Result<Json<PagePayload>, (StatusCode, Json<ApiError>)> {
    let rendered = state
        .router
        .dispatch(&page, &state.assets)
        .map_err(|err| {
            warn!(%page, asset = err.path(), "page failed to render");
            asset_error(&err)
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(
                    ErrorCode::NotFound,
                    format!("unknown page '{page}'"),
                )),
            )
        })?;
    Ok(Json(rendered.into()))
}

fn asset_error(err: &AssetError) -> (StatusCode, Json<ApiError>) {
    let code = match err {
        AssetError::Missing { .. } => ErrorCode::MissingAsset,
        AssetError::EscapesRoot { .. } | AssetError::Read { .. } => ErrorCode::Internal,
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(code, err.to_string())),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;

use super::*;
use axum::{body, body::Body, http::Request};
use std::{
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

fn shipped_asset_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets")
}

fn test_app_with(asset_root: PathBuf) -> Router {
    build_router(Arc::new(AppState {
        config: AppConfig::default(),
        router: PageRouter::new(),
        assets: AssetStore::new(asset_root),
    }))
}

fn test_app() -> Router {
    test_app_with(shipped_asset_root())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get(&test_app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn root_defaults_to_introduction() {
    let (status, body) = get(&test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>MLOps Accidents Project</title>"));
    assert!(body.contains("<h1>MLOps Accidents Pipeline Project</h1>"));
    assert!(body.contains("value=\"Introduction\" checked"));
}

#[tokio::test]
async fn sidebar_selection_picks_the_page() {
    let app = test_app();
    let (status, body) = get(&app, "/?page=Phase+2+%28Tracking%29").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Tracking &amp; Versioning</h1>"));
    assert!(body.contains("value=\"Phase 2 (Tracking)\" checked"));
    assert!(!body.contains("<h1>MLOps Accidents Pipeline Project</h1>"));

    let (_, by_slug) = get(&app, "/?page=phase-2").await;
    assert_eq!(by_slug, body);
}

#[tokio::test]
async fn switching_back_renders_identical_documents() {
    let app = test_app();
    let (_, first) = get(&app, "/?page=demo").await;
    let (_, other) = get(&app, "/?page=phase-1").await;
    let (_, again) = get(&app, "/?page=demo").await;
    assert_ne!(first, other);
    assert_eq!(first, again);
}

#[tokio::test]
async fn unknown_selection_renders_only_the_sidebar() {
    let (status, body) = get(&test_app(), "/?page=Phase+9").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<div class=\"content\"></div>"));
    assert!(!body.contains(" checked"));
}

#[tokio::test]
async fn missing_asset_is_a_visible_failure() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let root = env::temp_dir().join(format!("mlops_showcase_server_{suffix}"));
    fs::create_dir_all(&root).expect("temp root");
    let app = test_app_with(root.clone());

    let (status, body) = get(&app, "/?page=Demo").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("class=\"asset-error\""));
    assert!(body.contains("images/rocket.png"));
    assert!(body.contains("value=\"Demo\" checked"));

    let (status, body) = get(&app, "/api/pages/demo").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let err: ApiError = serde_json::from_str(&body).expect("json");
    assert_eq!(err.code, ErrorCode::MissingAsset);

    fs::remove_dir_all(root).expect("cleanup");
}

#[tokio::test]
async fn api_lists_pages_in_menu_order() {
    let (status, body) = get(&test_app(), "/api/pages").await;
    assert_eq!(status, StatusCode::OK);
    let pages: Vec<PageSummary> = serde_json::from_str(&body).expect("json");
    let labels: Vec<_> = pages.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Introduction",
            "Phase 1 (Data)",
            "Phase 2 (Tracking)",
            "Phase 3 (Orchestration)",
            "Phase 4 (Monitoring)",
            "Demo",
        ]
    );
}

#[tokio::test]
async fn api_page_returns_blocks_and_embeds_report_verbatim() {
    let (status, body) = get(&test_app(), "/api/pages/phase-4").await;
    assert_eq!(status, StatusCode::OK);
    let payload: PagePayload = serde_json::from_str(&body).expect("json");
    assert_eq!(payload.label, "Phase 4 (Monitoring)");

    let report =
        fs::read_to_string(shipped_asset_root().join("reports/data_drift_report.html"))
            .expect("report");
    let embedded = payload.blocks.iter().find_map(|block| match block {
        shared::domain::ContentBlock::EmbeddedHtml { content, .. } => Some(content),
        _ => None,
    });
    assert_eq!(embedded, Some(&report));
}

#[tokio::test]
async fn api_unknown_page_is_not_found() {
    let (status, body) = get(&test_app(), "/api/pages/phase-9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let err: ApiError = serde_json::from_str(&body).expect("json");
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn api_config_exposes_page_metadata() {
    let (status, body) = get(&test_app(), "/api/config").await;
    assert_eq!(status, StatusCode::OK);
    let config: AppConfig = serde_json::from_str(&body).expect("json");
    assert_eq!(config, AppConfig::default());
}

#[tokio::test]
async fn images_are_served_from_the_asset_root() {
    let app = test_app();
    let request = Request::get("/assets/images/pipeline.png")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("content type"),
        "image/png"
    );

    let (status, _) = get(&app, "/assets/images/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use common::{candidate_json, spawn_backend};
use hrtist_admin::routes;
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let backend = spawn_backend(Router::new()).await;
    let app = routes::router(backend.app_state());

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "hrtist-admin");

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/pages/candidates/search"]["post"].is_object());
    assert!(doc["paths"]["/api/pages/rejection-email/generate"]["post"].is_object());
    assert!(doc["components"]["schemas"]["Candidate"].is_object());

    assert!(backend.hits().is_empty());
}

#[tokio::test]
async fn candidate_search_returns_toast_and_view() {
    let router = Router::new().route(
        "/candidates/search/:name",
        get(|| async {
            Json(json!([candidate_json(1, "Dupont", "Jean"), candidate_json(2, "Dupont", "Marie")]))
        }),
    );
    let backend = spawn_backend(router).await;
    let app = routes::router(backend.app_state());

    let (status, body) = send(
        &app,
        "POST",
        "/api/pages/candidates/search",
        Some(json!({ "name": "Dupont" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["toast"]["variant"], "default");
    assert_eq!(body["toast"]["description"], "2 candidate(s) found");
    assert_eq!(body["view"]["candidates"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["view"]["cards"][1]["first_name"], "Marie");
    assert_eq!(body["view"]["pending"], json!([]));

    let (_, page) = send(&app, "GET", "/api/pages/candidates", None).await;
    assert_eq!(page["candidates"][0]["nom"], "Dupont");
    assert_eq!(page["last_toast"]["description"], "2 candidate(s) found");
}

#[tokio::test]
async fn lookup_accepts_numeric_or_text_ids() {
    let router = Router::new().route(
        "/candidates/:id",
        get(|| async { Json(candidate_json(12, "Martin", "Claire")) }),
    );
    let backend = spawn_backend(router).await;
    let app = routes::router(backend.app_state());

    let (_, body) = send(
        &app,
        "POST",
        "/api/pages/candidates/by-id",
        Some(json!({ "candidate_id": 12 })),
    )
    .await;
    assert_eq!(body["toast"]["description"], "Candidate Martin Claire found");

    let (_, body) = send(
        &app,
        "POST",
        "/api/pages/candidates/by-id",
        Some(json!({ "candidate_id": "12" })),
    )
    .await;
    assert_eq!(body["view"]["candidates"][0]["id"], 12);

    let paths: Vec<String> = backend.hits().into_iter().map(|hit| hit.path).collect();
    assert_eq!(paths, vec!["/candidates/12", "/candidates/12"]);
}

#[tokio::test]
async fn validation_failures_are_destructive_toasts() {
    let backend = spawn_backend(Router::new()).await;
    let app = routes::router(backend.app_state());

    let (status, body) = send(
        &app,
        "POST",
        "/api/pages/candidates",
        Some(json!({ "nom": "", "email": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["toast"]["title"], "Error");
    assert_eq!(body["toast"]["variant"], "destructive");
    assert_eq!(
        body["toast"]["description"],
        "Email is required; Last name is required"
    );

    let (_, body) = send(&app, "POST", "/api/pages/rejection-email/copy", None).await;
    assert_eq!(body["toast"]["variant"], "destructive");

    assert!(backend.hits().is_empty());
}

#[tokio::test]
async fn malformed_payloads_get_an_error_body() {
    let backend = spawn_backend(Router::new()).await;
    let app = routes::router(backend.app_state());

    let (status, body) = send(
        &app,
        "POST",
        "/api/pages/rejection-email/generate",
        Some(json!({ "candidate_id": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("candidate_id")));

    let req = Request::builder()
        .method("POST")
        .uri("/api/pages/candidates/search")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    let req = Request::builder()
        .method("POST")
        .uri("/api/pages/recruiters")
        .body(Body::from("{\"nom\": \"Martin\"}"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    assert!(backend.hits().is_empty());
}

#[tokio::test]
async fn rejection_email_endpoints_drive_the_flow() {
    let router = Router::new()
        .route(
            "/candidates/search/:name",
            get(|| async { Json(json!([candidate_json(5, "Dupont", "Jean")])) }),
        )
        .route(
            "/feedback/rejection-email",
            post(|| async { Json(json!({ "subject": "Votre candidature", "body": "Bonjour Jean," })) }),
        );
    let backend = spawn_backend(router).await;
    let app = routes::router(backend.app_state());

    let (_, body) = send(
        &app,
        "POST",
        "/api/pages/rejection-email/search",
        Some(json!({ "term": "Dupont" })),
    )
    .await;
    assert_eq!(body["view"]["candidates"][0]["id"], 5);

    let (_, body) = send(
        &app,
        "POST",
        "/api/pages/rejection-email/generate",
        Some(json!({ "candidate_id": 5 })),
    )
    .await;
    assert_eq!(body["toast"]["description"], "The rejection email template was generated");
    assert_eq!(body["view"]["generated"]["subject"], "Votre candidature");
    assert_eq!(body["view"]["generating_for"], JsonValue::Null);
    assert_eq!(body["view"]["copied"], JsonValue::Null);

    let (_, body) = send(&app, "POST", "/api/pages/rejection-email/copy", None).await;
    assert_eq!(body["toast"]["title"], "Copied");
    assert_eq!(body["view"]["copied"], "Bonjour Jean,");

    let (_, body) = send(
        &app,
        "POST",
        "/api/pages/rejection-email/search",
        Some(json!({ "term": "Dupont" })),
    )
    .await;
    assert_eq!(body["view"]["copied"], JsonValue::Null);
}

#[tokio::test]
async fn recruiter_and_process_pages_are_routed() {
    let router = Router::new()
        .route(
            "/recruiters",
            post(|Json(mut body): Json<JsonValue>| async move {
                body["id"] = json!(3);
                Json(body)
            }),
        )
        .route(
            "/processes",
            get(|| async { Json(json!([{ "id": 1, "name_process": "Backend Engineer" }])) }),
        );
    let backend = spawn_backend(router).await;
    let app = routes::router(backend.app_state());

    let (_, body) = send(
        &app,
        "POST",
        "/api/pages/recruiters",
        Some(json!({ "nom": "Martin" })),
    )
    .await;
    assert_eq!(body["toast"]["description"], "Recruiter created");
    assert_eq!(body["view"]["last_created"], json!({ "nom": "Martin", "id": 3 }));

    let (_, body) = send(&app, "POST", "/api/pages/processes/load", None).await;
    assert_eq!(body["view"]["processes"][0]["name_process"], "Backend Engineer");

    let (_, page) = send(&app, "GET", "/api/pages/processes", None).await;
    assert_eq!(page["last_toast"]["description"], "1 process(es) loaded");
}

/// HTTP-level tests: full request/response cycles through the API router,
/// backed by real stores and a stub generator.
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use draftsmith_api::AppStateInner;
use draftsmith_db::{Database, MemoryStore, Store};
use draftsmith_generator::{DesignGenerator, GenerateError};
use draftsmith_types::api::GenerationOptions;
use draftsmith_types::models::GeneratedDesignResponse;

const DESIGN_JSON: &str = r#"{"html":"<div>Hi</div>","css":"","jsx":"","tailwind":"","suggestions":["use semantic tags"]}"#;

/// Records every call and answers from a fixed script.
struct StubGenerator {
    fail: bool,
    calls: Mutex<Vec<(String, GenerationOptions)>>,
}

impl StubGenerator {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            fail,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DesignGenerator for StubGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GeneratedDesignResponse, GenerateError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), options.clone()));

        if self.fail {
            Err(GenerateError::EmptyResponse)
        } else {
            Ok(serde_json::from_str(DESIGN_JSON).unwrap())
        }
    }
}

fn app_with(store: Store, generator: Arc<StubGenerator>) -> Router {
    draftsmith_api::router(AppStateInner::new(store, generator))
}

fn app() -> (Router, Arc<StubGenerator>) {
    let generator = StubGenerator::new(false);
    (app_with(MemoryStore::new().into(), generator.clone()), generator)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, text) = send(app, request).await;
    (status, serde_json::from_str(&text).unwrap())
}

// -- Designs --

#[tokio::test]
async fn list_starts_empty() {
    let (app, _) = app();
    let (status, body) = send_json(&app, get("/api/designs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn created_design_can_be_fetched() {
    let (app, _) = app();

    let (status, created) = send_json(
        &app,
        post_json("/api/designs", &json!({ "name": "Hero", "prompt": "a hero banner" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Hero");
    assert_eq!(created["userId"], Value::Null);
    assert_eq!(created["generatedDesign"], Value::Null);

    let created_at = created["createdAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    assert!(created_at.ends_with('Z'));

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send_json(&app, get(&format!("/api/designs/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn caller_metadata_is_overridden() {
    let (app, _) = app();

    let (status, created) = send_json(
        &app,
        post_json(
            "/api/designs",
            &json!({
                "name": "Nav",
                "prompt": "a navbar",
                "userId": 9,
                "createdAt": "1999-12-31T23:59:59.000Z"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["userId"], Value::Null);
    assert_ne!(created["createdAt"], "1999-12-31T23:59:59.000Z");
}

#[tokio::test]
async fn missing_name_is_rejected_without_writing() {
    let (app, _) = app();

    let (status, body) =
        send_json(&app, post_json("/api/designs", &json!({ "prompt": "orphan" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid design data");
    assert_eq!(body["errors"][0]["path"], json!(["name"]));
    assert_eq!(body["errors"][0]["message"], "Required");

    let (_, list) = send_json(&app, get("/api/designs")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn unparseable_body_is_rejected() {
    let (app, _) = app();

    let (status, body) = send_json(&app, post_raw("/api/designs", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid design data");
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn non_integer_id_is_bad_request() {
    let (app, _) = app();

    for uri in ["/api/designs/abc", "/api/designs/12abc", "/api/designs/1.5"] {
        let (status, body) = send_json(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "Invalid design ID");
    }
}

#[tokio::test]
async fn unknown_design_is_not_found() {
    let (app, _) = app();
    let (status, body) = send_json(&app, get("/api/designs/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Design not found");
}

#[tokio::test]
async fn every_backend_lists_all_creations() {
    let backends: Vec<Store> = vec![
        MemoryStore::new().into(),
        Database::open_in_memory().unwrap().into(),
    ];

    for store in backends {
        let app = app_with(store, StubGenerator::new(false));
        let mut last_id = 0;
        for i in 0..3 {
            let (status, created) = send_json(
                &app,
                post_json("/api/designs", &json!({ "name": format!("d{i}"), "prompt": "p" })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            let id = created["id"].as_i64().unwrap();
            assert!(id > last_id);
            last_id = id;
        }

        let (_, list) = send_json(&app, get("/api/designs")).await;
        assert_eq!(list.as_array().unwrap().len(), 3);
    }
}

// -- Storage failures --

/// A file database whose only design row holds unparseable JSON.
fn corrupt_database(dir: &tempfile::TempDir) -> Database {
    let db = Database::open(&dir.path().join("corrupt.db")).unwrap();
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO designs (name, prompt, generated_design, created_at)
             VALUES ('a', 'b', '{bad', 't')",
            [],
        )?;
        Ok(())
    })
    .unwrap();
    db
}

/// Storage errors expose only the generic message.
fn assert_generic_500(status: StatusCode, body: &Value, message: &str) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, &json!({ "message": message }));
}

#[tokio::test]
async fn corrupt_rows_hide_storage_detail() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(corrupt_database(&dir).into(), StubGenerator::new(false));

    let (status, body) = send_json(&app, get("/api/designs")).await;
    assert_generic_500(status, &body, "Failed to fetch designs");

    let (status, body) = send_json(&app, get("/api/designs/1")).await;
    assert_generic_500(status, &body, "Failed to fetch design");
}

#[tokio::test]
async fn failed_write_hides_storage_detail() {
    let db = Database::open_in_memory().unwrap();
    db.with_conn(|conn| {
        conn.execute_batch("DROP TABLE designs;")?;
        Ok(())
    })
    .unwrap();
    let app = app_with(db.into(), StubGenerator::new(false));

    let (status, body) = send_json(
        &app,
        post_json("/api/designs", &json!({ "name": "n", "prompt": "p" })),
    )
    .await;
    assert_generic_500(status, &body, "Failed to create design");
}

// -- Generation --

#[tokio::test]
async fn empty_prompt_never_reaches_provider() {
    let (app, generator) = app();

    for body in [
        json!({ "prompt": "" }),
        json!({}),
        json!({ "prompt": 12 }),
        json!({ "prompt": null, "options": {} }),
    ] {
        let (status, resp) = send_json(&app, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp["message"], "Prompt is required");
    }

    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn invalid_options_never_reach_provider() {
    let (app, generator) = app();

    let (status, body) = send_json(
        &app,
        post_json(
            "/api/generate",
            &json!({ "prompt": "a form", "options": { "darkModeSupport": "yes" } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid generation options");
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn generation_returns_provider_output_verbatim() {
    let (app, generator) = app();

    let (status, text) = send(
        &app,
        post_json(
            "/api/generate",
            &json!({ "prompt": "a greeting", "options": { "colorTheme": "sunset" } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, DESIGN_JSON);

    let calls = generator.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "a greeting");
    assert_eq!(calls[0].1.color_theme.as_deref(), Some("sunset"));
    assert_eq!(calls[0].1.layout_style, None);
}

#[tokio::test]
async fn generation_failure_is_server_error() {
    let generator = StubGenerator::new(true);
    let app = app_with(MemoryStore::new().into(), generator);

    let (status, body) =
        send_json(&app, post_json("/api/generate", &json!({ "prompt": "a table" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to generate design");
    assert_eq!(body["error"], "Empty response from provider");
}

#[tokio::test]
async fn generated_design_roundtrips_through_storage() {
    let app = app_with(
        Database::open_in_memory().unwrap().into(),
        StubGenerator::new(false),
    );

    let (_, generated) = send(&app, post_json("/api/generate", &json!({ "prompt": "hi" }))).await;
    let generated: Value = serde_json::from_str(&generated).unwrap();

    let (status, created) = send_json(
        &app,
        post_json(
            "/api/designs",
            &json!({ "name": "Greeting", "prompt": "hi", "generatedDesign": generated }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    let (_, fetched) = send_json(&app, get(&format!("/api/designs/{id}"))).await;
    assert_eq!(fetched["generatedDesign"].to_string(), DESIGN_JSON);
}

#[tokio::test]
async fn unknown_api_path_is_json_404() {
    let (app, _) = app();
    let (status, body) = send_json(&app, get("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");
}

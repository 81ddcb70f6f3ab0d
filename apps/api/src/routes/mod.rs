pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::brief::handlers as briefs;
use crate::session::handlers as sessions;
use crate::state::AppState;
use crate::tags::handlers as tags;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/presets", get(tags::handle_presets))
        // Stateless brief construction
        .route("/api/v1/briefs", post(briefs::handle_build_brief))
        .route(
            "/api/v1/briefs/download",
            post(briefs::handle_download_brief),
        )
        // Form sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session)
                .patch(sessions::handle_patch_session)
                .delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/tags/:field/keys",
            post(sessions::handle_key_press),
        )
        .route(
            "/api/v1/sessions/:id/tags/:field/suggestions",
            post(sessions::handle_pick_suggestion),
        )
        .route(
            "/api/v1/sessions/:id/tags/:field/remove",
            post(sessions::handle_remove_tag),
        )
        .route(
            "/api/v1/sessions/:id/brief",
            get(sessions::handle_download_session_brief),
        )
        .route(
            "/api/v1/sessions/:id/export",
            post(sessions::handle_export_session),
        )
        .route(
            "/api/v1/sessions/:id/match",
            post(sessions::handle_match_session),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, HeaderMap, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::brief::RoleBrief;
    use crate::config::Config;
    use crate::match_client::{CandidateMatcher, MatchError, MatchResponse};
    use crate::session::SessionStore;

    /// Matcher that records every brief it receives.
    struct FakeMatcher {
        fail: bool,
        seen: Mutex<Vec<RoleBrief>>,
    }

    #[async_trait]
    impl CandidateMatcher for FakeMatcher {
        async fn find_matches(&self, brief: &RoleBrief) -> Result<MatchResponse, MatchError> {
            self.seen.lock().unwrap().push(brief.clone());
            if self.fail {
                return Err(MatchError::Status {
                    status: 503,
                    message: "index offline".to_string(),
                });
            }
            Ok(MatchResponse {
                matches: vec![json!({"id": "c1"}), json!({"id": "c2"})],
            })
        }
    }

    fn test_app(fail: bool, export_dir: PathBuf) -> (Router, Arc<FakeMatcher>) {
        let matcher = Arc::new(FakeMatcher {
            fail,
            seen: Mutex::new(Vec::new()),
        });
        let state = AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                match_endpoint_url: "http://matcher.invalid/match".to_string(),
                export_dir,
            },
            sessions: SessionStore::new(),
            matcher: matcher.clone(),
        };
        (build_router(state), matcher)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, HeaderMap, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, bytes.to_vec())
    }

    async fn send_json(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, _, bytes) = send(app, method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn open_session(app: &Router) -> String {
        let (status, body) = send_json(app, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let (status, body) = send_json(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["sessions"], 0);
    }

    #[tokio::test]
    async fn test_presets() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let (status, body) = send_json(&app, Method::GET, "/api/v1/presets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tools"][0], "PyTorch");
        assert_eq!(body["nice_to_have"], json!([]));
    }

    #[tokio::test]
    async fn test_new_session_has_defaults_and_summary() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let (_, body) = send_json(&app, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(body["form"]["title"], "Machine Learning Engineer");
        assert_eq!(body["inputs"]["tools"]["pending"], "");
        assert_eq!(
            body["summary"],
            "Machine Learning Engineer focused on Generative AI, LLMs. You will build, \
             evaluate, and deploy scalable AI/ML systems, partnering cross-functionally \
             to deliver measurable impact."
        );
    }

    #[tokio::test]
    async fn test_enter_adds_tag_and_duplicate_is_silent() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let id = open_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/tags/tools/keys");

        let (status, body) = send_json(
            &app,
            Method::POST,
            &uri,
            Some(json!({"pending": "MLflow ", "key": "Enter"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], true);
        assert_eq!(body["default_prevented"], true);
        assert_eq!(body["pending"], "");
        assert_eq!(body["values"], json!(["Hugging Face", "MLflow"]));

        let (status, body) = send_json(
            &app,
            Method::POST,
            &uri,
            Some(json!({"pending": "MLflow", "key": ","})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], false);
        assert_eq!(body["default_prevented"], true);
        assert_eq!(body["pending"], "MLflow");
        assert_eq!(body["values"], json!(["Hugging Face", "MLflow"]));
    }

    #[tokio::test]
    async fn test_backspace_on_empty_input_removes_last_tag() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let id = open_session(&app).await;

        let (_, body) = send_json(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/tags/domains/keys"),
            Some(json!({"key": "Backspace"})),
        )
        .await;
        assert_eq!(body["changed"], true);
        assert_eq!(body["default_prevented"], false);
        assert_eq!(body["values"], json!(["Generative AI"]));
    }

    #[tokio::test]
    async fn test_suggestion_and_remove() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let id = open_session(&app).await;

        let (_, body) = send_json(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/tags/core_skills/suggestions"),
            Some(json!({"suggestion": "SQL"})),
        )
        .await;
        assert_eq!(body["values"], json!(["Python", "PyTorch", "SQL"]));

        let (_, body) = send_json(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/tags/core_skills/remove"),
            Some(json!({"value": "Python"})),
        )
        .await;
        assert_eq!(body["changed"], true);
        assert_eq!(body["values"], json!(["PyTorch", "SQL"]));

        let (_, body) = send_json(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/tags/core_skills/remove"),
            Some(json!({"value": "Python"})),
        )
        .await;
        assert_eq!(body["changed"], false);
    }

    #[tokio::test]
    async fn test_unknown_tag_field_is_rejected() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let id = open_session(&app).await;
        let (status, _, _) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/tags/hobbies/keys"),
            Some(json!({"key": "Enter"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let uri = format!("/api/v1/sessions/{}", uuid::Uuid::new_v4());
        let (status, body) = send_json(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_patch_then_download() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let id = open_session(&app).await;

        let (status, body) = send_json(
            &app,
            Method::PATCH,
            &format!("/api/v1/sessions/{id}"),
            Some(json!({
                "title": "Senior ML Engineer!!",
                "seniority": "senior",
                "years_experience": "7",
                "responsibilities": "Own training pipelines\r\n\nShip models "
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["form"]["years_experience"], 7);

        let (status, headers, bytes) = send(
            &app,
            Method::GET,
            &format!("/api/v1/sessions/{id}/brief"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"senior-ml-engineer.json\""
        );

        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("{\n  \"meta\""));
        let brief: RoleBrief = serde_json::from_str(&text).unwrap();
        assert_eq!(brief.ats.title_normalized, "Senior ML Engineer!! (senior, 7+ yrs)");
        assert_eq!(brief.responsibilities, vec!["Own training pipelines", "Ship models"]);
    }

    #[tokio::test]
    async fn test_stateless_brief() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/v1/briefs",
            Some(json!({"title": "", "location": "Paris", "domains": []})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"]["location"], "Paris");
        assert_eq!(body["meta"]["version"], 1);
        assert_eq!(body["ats"]["keywords"], json!(["Python", "PyTorch", "Hugging Face"]));
    }

    #[tokio::test]
    async fn test_stateless_download_falls_back_to_default_slug() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let (status, headers, _) = send(
            &app,
            Method::POST,
            "/api/v1/briefs/download",
            Some(json!({"title": "???"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"ai-ml-role.json\""
        );
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = test_app(false, dir.path().to_path_buf());
        let id = open_session(&app).await;

        let (status, body) = send_json(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/export"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "machine-learning-engineer.json");
        assert_eq!(body["notice"]["title"], "Job JSON downloaded");
        assert!(dir.path().join("machine-learning-engineer.json").exists());
    }

    #[tokio::test]
    async fn test_match_reports_candidate_count() {
        let (app, matcher) = test_app(false, std::env::temp_dir());
        let id = open_session(&app).await;

        let (status, body) = send_json(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/match"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matches"].as_array().unwrap().len(), 2);
        assert_eq!(body["notice"]["description"], "Retrieved 2 candidates");

        let seen = matcher.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].role.title, "Machine Learning Engineer");
    }

    #[tokio::test]
    async fn test_match_failure_is_generic_and_leaves_session() {
        let (app, _) = test_app(true, std::env::temp_dir());
        let id = open_session(&app).await;
        let (_, before) =
            send_json(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;

        let (status, body) = send_json(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/match"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "MATCH_FAILED");
        assert_eq!(body["error"]["message"], "Could not match candidates");
        assert_eq!(body["notice"]["variant"], "destructive");

        let (_, after) =
            send_json(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let (app, _) = test_app(false, std::env::temp_dir());
        let id = open_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}");

        let (status, _, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

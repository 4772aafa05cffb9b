pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Writer page
        .route("/", get(ui::handle_index))
        .route("/authenticate", post(ui::handle_authenticate))
        .route("/skeleton", post(ui::handle_generate_skeleton))
        .route("/blogpost", post(ui::handle_generate_blogpost))
        // Generation API
        .route("/api/v1/skeleton", post(handlers::handle_skeleton))
        .route("/api/v1/blogpost", post(handlers::handle_blogpost))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::generation::tone::JOE_GUAY;
    use crate::llm_client::testing::RecordingGenerator;
    use crate::llm_client::LlmError;
    use crate::session::SessionStore;
    use crate::ui::pages::INCORRECT_PASSCODE;

    const PASSCODE: &str = "letmein";

    fn test_app(llm: Arc<RecordingGenerator>) -> Router {
        let state = AppState {
            llm,
            sessions: SessionStore::new(),
            config: Config {
                openai_api_key: "sk-test".to_string(),
                openai_base_url: "http://localhost:0".to_string(),
                app_passcode: PASSCODE.to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
        };
        build_router(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    fn get_page(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn form_post(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn json_post(uri: &str, passcode: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(passcode) = passcode {
            builder = builder.header(handlers::PASSCODE_HEADER, passcode);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    /// The `name=value` part of the response's session cookie.
    fn session_cookie(response: &Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn login(app: &Router) -> String {
        let response = send(app, get_page(None)).await;
        let cookie = session_cookie(&response);
        let body = format!("passcode={PASSCODE}");
        let response = send(app, form_post("/authenticate", Some(&cookie), &body)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        cookie
    }

    #[tokio::test]
    async fn test_first_visit_gets_cookie_and_passcode_form() {
        let app = test_app(Arc::new(RecordingGenerator::default()));

        let response = send(&app, get_page(None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::SET_COOKIE));
        let html = body_text(response).await;
        assert!(html.contains("Enter Passcode"));
        assert!(!html.contains("Field of Work"));
    }

    #[tokio::test]
    async fn test_wrong_passcode_shows_inline_error_and_stays_locked() {
        let app = test_app(Arc::new(RecordingGenerator::default()));
        let cookie = session_cookie(&send(&app, get_page(None)).await);

        let response = send(&app, form_post("/authenticate", Some(&cookie), "passcode=wrong")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(INCORRECT_PASSCODE));

        let html = body_text(send(&app, get_page(Some(&cookie))).await).await;
        assert!(html.contains("Enter Passcode"));
        assert!(!html.contains(INCORRECT_PASSCODE));
    }

    #[tokio::test]
    async fn test_correct_passcode_unlocks_writer_form() {
        let app = test_app(Arc::new(RecordingGenerator::default()));
        let cookie = login(&app).await;

        let html = body_text(send(&app, get_page(Some(&cookie))).await).await;

        assert!(!html.contains("Enter Passcode"));
        assert!(html.contains("Field of Work"));
        assert!(html.contains("Generate Blogpost"));
    }

    #[tokio::test]
    async fn test_authentication_does_not_leak_across_sessions() {
        let app = test_app(Arc::new(RecordingGenerator::default()));
        let _ = login(&app).await;

        let html = body_text(send(&app, get_page(None)).await).await;

        assert!(html.contains("Enter Passcode"));
    }

    #[tokio::test]
    async fn test_unauthenticated_generation_is_refused() {
        let llm = Arc::new(RecordingGenerator::replying(vec![Ok("nope".to_string())]));
        let app = test_app(llm.clone());

        let response = send(&app, form_post("/skeleton", None, "field_of_work=bakery")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_skeleton_then_ai_written_blogpost_uses_edited_skeleton() {
        let llm = Arc::new(RecordingGenerator::replying(vec![
            Ok("generated outline".to_string()),
            Ok("full article".to_string()),
        ]));
        let app = test_app(llm.clone());
        let cookie = login(&app).await;

        let response = send(
            &app,
            form_post(
                "/skeleton",
                Some(&cookie),
                "field_of_work=artisan+bakery&example_posts=old+post",
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let html = body_text(send(&app, get_page(Some(&cookie))).await).await;
        assert!(html.contains("generated outline"));
        assert!(html.contains(r#"value="artisan bakery""#));

        let response = send(
            &app,
            form_post(
                "/blogpost",
                Some(&cookie),
                "skeleton=edited+outline&tone=AI+written",
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let html = body_text(send(&app, get_page(Some(&cookie))).await).await;
        assert!(html.contains(">full article</textarea>"));
        assert!(html.contains(">edited outline</textarea>"));

        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].user_content, "artisan bakery");
        assert_eq!(calls[1].user_content, "edited outline");
    }

    #[tokio::test]
    async fn test_author_tone_restyles_with_style_model() {
        let llm = Arc::new(RecordingGenerator::replying(vec![
            Ok("outline".to_string()),
            Ok("raw draft".to_string()),
            Ok("styled article".to_string()),
        ]));
        let app = test_app(llm.clone());
        let cookie = login(&app).await;

        send(&app, form_post("/skeleton", Some(&cookie), "field_of_work=law")).await;
        send(&app, form_post("/blogpost", Some(&cookie), "tone=Joe+Guay")).await;

        let html = body_text(send(&app, get_page(Some(&cookie))).await).await;
        assert!(html.contains("styled article"));
        let calls = llm.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1].user_content, "outline");
        assert_eq!(calls[2].model, JOE_GUAY.model);
        assert_eq!(calls[2].user_content, "raw draft");
    }

    #[tokio::test]
    async fn test_blogpost_without_skeleton_makes_no_call() {
        let llm = Arc::new(RecordingGenerator::default());
        let app = test_app(llm.clone());
        let cookie = login(&app).await;

        let response = send(&app, form_post("/blogpost", Some(&cookie), "tone=AI+written")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(llm.calls().is_empty());
        let html = body_text(send(&app, get_page(Some(&cookie))).await).await;
        assert!(html.contains(r#"value="AI written" checked"#));
        assert!(!html.contains(r#"id="blogpost""#));
    }

    #[tokio::test]
    async fn test_remote_failure_is_shown_in_place_of_skeleton() {
        let llm = Arc::new(RecordingGenerator::replying(vec![Err(LlmError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        })]));
        let app = test_app(llm);
        let cookie = login(&app).await;

        let response = send(&app, form_post("/skeleton", Some(&cookie), "field_of_work=x")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let html = body_text(send(&app, get_page(Some(&cookie))).await).await;
        assert!(html.contains("Error: API error (status 401): Incorrect API key provided"));
    }

    #[tokio::test]
    async fn test_api_requires_passcode_header() {
        let llm = Arc::new(RecordingGenerator::default());
        let app = test_app(llm.clone());

        let missing = send(
            &app,
            json_post("/api/v1/skeleton", None, serde_json::json!({"field_of_work": "x"})),
        )
        .await;
        let wrong = send(
            &app,
            json_post(
                "/api/v1/skeleton",
                Some("guess"),
                serde_json::json!({"field_of_work": "x"}),
            ),
        )
        .await;

        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_api_skeleton_and_blogpost() {
        let llm = Arc::new(RecordingGenerator::replying(vec![
            Ok("outline".to_string()),
            Ok("article".to_string()),
        ]));
        let app = test_app(llm.clone());

        let response = send(
            &app,
            json_post(
                "/api/v1/skeleton",
                Some(PASSCODE),
                serde_json::json!({"field_of_work": "dentistry", "example_posts": "ignored"}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["skeleton"], "outline");

        let response = send(
            &app,
            json_post(
                "/api/v1/blogpost",
                Some(PASSCODE),
                serde_json::json!({"skeleton": "outline", "tone": "AI written"}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["blogpost"], "article");
        assert_eq!(json["tone"], "AI written");
        assert_eq!(llm.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_api_rejects_empty_input() {
        let app = test_app(Arc::new(RecordingGenerator::default()));

        let response = send(
            &app,
            json_post(
                "/api/v1/blogpost",
                Some(PASSCODE),
                serde_json::json!({"skeleton": "   "}),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_generation_failure_is_bad_gateway_with_error_prefix() {
        let llm = Arc::new(RecordingGenerator::replying(vec![Err(LlmError::EmptyContent)]));
        let app = test_app(llm);

        let response = send(
            &app,
            json_post(
                "/api/v1/skeleton",
                Some(PASSCODE),
                serde_json::json!({"field_of_work": "x"}),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "GENERATION_ERROR");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(Arc::new(RecordingGenerator::default()));
        let response = send(
            &app,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }
}

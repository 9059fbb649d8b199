//! Router-level tests for the auth crate

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use kernel::identity::CurrentUser;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::{AccessTokenService, AuthConfig};
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::middleware::require_access_token;
    use crate::presentation::router::auth_router;

    fn tokens() -> Arc<AccessTokenService> {
        Arc::new(AccessTokenService::new(&AuthConfig::development()))
    }

    fn app(tokens: Arc<AccessTokenService>) -> Router {
        auth_router(InMemoryUserRepository::new(), tokens)
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn signup_body() -> Value {
        json!({
            "username": "Linus",
            "full_name": "Linus Torvalds",
            "email": "linus@example.com",
            "password": "Penguin-Kernel-91"
        })
    }

    #[tokio::test]
    async fn test_signup_returns_profile_and_token() {
        let app = app(tokens());
        let response = post_json(&app, "/auth/signup", signup_body()).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["username"], "Linus");
        assert_eq!(json["full_name"], "Linus Torvalds");
        assert_eq!(json["email"], "linus@example.com");
        assert_eq!(json["token_type"], "Bearer");
        assert!(json["access_token"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_signup_duplicate_is_conflict() {
        let app = app(tokens());
        post_json(&app, "/auth/signup", signup_body()).await;

        let response = post_json(&app, "/auth/signup", signup_body()).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = body_json(response).await;
        assert_eq!(
            json["status_code"],
            "409: Conflict, Duplicate Value. Username already exists"
        );
    }

    #[tokio::test]
    async fn test_signup_missing_field() {
        let app = app(tokens());
        let response = post_json(
            &app,
            "/auth/signup",
            json!({ "username": "linus", "password": "Penguin-Kernel-91" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["status_code"],
            "400: Bad Request, Request must contain 'email' data"
        );
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let app = app(tokens());
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["status_code"], "400: Bad Request, Malformed request body");
    }

    #[tokio::test]
    async fn test_login() {
        let app = app(tokens());
        post_json(&app, "/auth/signup", signup_body()).await;

        let response = post_json(
            &app,
            "/auth/login",
            json!({ "username": "linus", "password": "Penguin-Kernel-91" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["access_token"].is_string());

        let response = post_json(
            &app,
            "/auth/login",
            json!({ "username": "linus", "password": "Penguin-Kernel-92" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await["status_code"],
            "403: Forbidden, Invalid Login Credentials"
        );
    }

    #[tokio::test]
    async fn test_signup_invalid_email_carries_action() {
        let app = app(tokens());
        let mut body = signup_body();
        body["email"] = json!("linus-at-example");

        let response = post_json(&app, "/auth/signup", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["status_code"], "400: Bad Request, Invalid email format");
        assert_eq!(json["action"], "Use an address like name@example.com");
    }

    // ------------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------------

    async fn get_me(app: &Router, token: Option<&str>) -> Response {
        let mut builder = Request::builder().uri("/auth/me");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        app.clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_me_returns_caller_profile() {
        let app = app(tokens());
        let signed_up = body_json(post_json(&app, "/auth/signup", signup_body()).await).await;
        let token = signed_up["access_token"].as_str().unwrap();

        let response = get_me(&app, Some(token)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["user_id"], signed_up["user_id"]);
        assert_eq!(json["username"], "Linus");
        assert_eq!(json["email"], "linus@example.com");
        assert!(json.get("access_token").is_none());
    }

    #[tokio::test]
    async fn test_me_requires_token() {
        let tokens = tokens();
        let app = app(tokens.clone());

        let response = get_me(&app, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // valid signature, but the user was never stored
        let orphan = tokens.issue(kernel::id::UserId::from_raw(42)).unwrap().token;
        let response = get_me(&app, Some(&orphan)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["status_code"],
            "404: Not Found, User with id:42 does not exist"
        );
    }

    // ------------------------------------------------------------------------
    // Middleware
    // ------------------------------------------------------------------------

    async fn whoami(Extension(user): Extension<CurrentUser>) -> String {
        user.user_id.to_string()
    }

    fn protected(tokens: Arc<AccessTokenService>) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn_with_state(tokens, require_access_token))
    }

    async fn get_with_auth(app: &Router, authorization: Option<&str>) -> Response {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        app.clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_middleware_accepts_valid_token() {
        let tokens = tokens();
        let token = tokens.issue(kernel::id::UserId::from_raw(7)).unwrap().token;

        let response = get_with_auth(&protected(tokens), Some(&format!("Bearer {token}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"7");
    }

    #[tokio::test]
    async fn test_middleware_rejections() {
        let app = protected(tokens());

        let response = get_with_auth(&app, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["status_code"],
            "401: Unauthorized, Missing Authorization Header"
        );

        let foreign = tokens().issue(kernel::id::UserId::from_raw(7)).unwrap().token;
        let response = get_with_auth(&app, Some(&format!("Bearer {foreign}"))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["status_code"],
            "401: Unauthorized, Signature verification failed"
        );

        let response = get_with_auth(&app, Some("Token abc")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

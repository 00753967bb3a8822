//! Login, guarded navigation, and logout through the full router.

use axum::http::StatusCode;
use serde_json::json;

use dossier_portal_integration_tests::{
    TestContext, body_json, location, token, valid_token,
};

#[tokio::test]
async fn test_login_sets_identity_cookies_and_session() {
    let mut ctx = TestContext::new();
    let body = ctx
        .login("admin", Some(json!({"id": 7, "is_superadmin": "1"})))
        .await;

    assert_eq!(body["role"], "superadmin");
    assert_eq!(body["redirect"], "/fr/superadmin/dashboard");

    assert_eq!(ctx.cookie("token"), Some(valid_token("admin").as_str()));
    assert_eq!(ctx.cookie("userType"), Some("admin"));
    assert_eq!(ctx.cookie("isSuperAdmin"), Some("true"));
    assert!(ctx.cookie("dp_session").is_some());
}

#[tokio::test]
async fn test_login_cookie_attributes() {
    let mut ctx = TestContext::new();
    let response = ctx
        .post_json(
            "/api/session",
            &json!({
                "access_token": valid_token("client"),
                "user_type": "client",
                "expires_in": 900,
            }),
        )
        .await;

    let token_cookie = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("token="))
        .expect("token cookie is set")
        .to_string();
    assert!(token_cookie.contains("Max-Age=900"));
    assert!(token_cookie.contains("Path=/"));
    assert!(token_cookie.contains("SameSite=Strict"));
    assert!(ctx.cookie("isSuperAdmin").is_none());
}

#[tokio::test]
async fn test_login_honors_locale() {
    let mut ctx = TestContext::new();
    let response = ctx
        .post_json(
            "/api/session",
            &json!({
                "access_token": valid_token("client"),
                "user_type": "client",
                "expires_in": 3600,
                "locale": "ar",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["role"], "client");
    assert_eq!(body["redirect"], "/ar/user/dashboard");
}

#[tokio::test]
async fn test_admin_without_marker_stays_admin() {
    let mut ctx = TestContext::new();
    let body = ctx
        .login("admin", Some(json!({"id": 3, "is_superadmin": 0})))
        .await;

    assert_eq!(body["role"], "admin");
    assert!(ctx.cookie("isSuperAdmin").is_none());
}

#[tokio::test]
async fn test_expired_login_is_rejected() {
    let mut ctx = TestContext::new();
    let response = ctx
        .post_json(
            "/api/session",
            &json!({
                "access_token": token(&json!({"exp": 1_000, "type": "admin"})),
                "user_type": "admin",
                "expires_in": 3600,
                "user": {"is_superadmin": 1},
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(ctx.cookie("token").is_none());
    assert!(ctx.cookie("isSuperAdmin").is_none());
}

#[tokio::test]
async fn test_opaque_token_is_rejected() {
    let mut ctx = TestContext::new();
    let response = ctx
        .post_json(
            "/api/session",
            &json!({
                "access_token": "opaque-token",
                "user_type": "client",
                "expires_in": 3600,
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_superadmin_reaches_shell_with_menu() {
    let mut ctx = TestContext::new();
    ctx.login("admin", Some(json!({"is_superadmin": true})))
        .await;

    let response = ctx.get("/fr/superadmin/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let view = body_json(response).await;
    assert_eq!(view["locale"], "fr");
    assert_eq!(view["role"], "superadmin");
    assert_eq!(view["partition"], "superadmin");
    assert_eq!(view["path"], "/fr/superadmin/users");

    let navigation = view["navigation"].as_array().expect("navigation is a list");
    assert_eq!(navigation.len(), 7);
    assert_eq!(navigation[0]["href"], "/fr/superadmin/dashboard");
}

#[tokio::test]
async fn test_client_navigation_round_trip() {
    let mut ctx = TestContext::new();
    ctx.login("client", None).await;

    let response = ctx.get("/en/user/nouveau-dossier").await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;
    assert_eq!(view["role"], "client");
    assert_eq!(view["navigation"].as_array().map(Vec::len), Some(5));

    let response = ctx.get("/en/admin/dossiers").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/en/user/dashboard");
}

#[tokio::test]
async fn test_logout_clears_identity() {
    let mut ctx = TestContext::new();
    ctx.login("client", None).await;
    assert_eq!(
        ctx.get("/fr/user/dashboard").await.status(),
        StatusCode::OK
    );

    let response = ctx.delete("/api/session").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(ctx.cookie("token").is_none());
    assert!(ctx.cookie("userType").is_none());

    let response = ctx.get("/fr/user/dashboard").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

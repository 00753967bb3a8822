//! Edge and app-shell guard behavior over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use dossier_portal_core::Locale;
use dossier_portal_integration_tests::{
    TestContext, body_bytes, location, token, valid_token,
};

#[tokio::test]
async fn test_anonymous_is_denied_everywhere() {
    let mut ctx = TestContext::new();
    for path in [
        "/fr",
        "/fr/user/dashboard",
        "/en/admin/dossiers",
        "/ar/superadmin/users",
        "/de/anything",
    ] {
        let response = ctx.get(path).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/login", "{path}");
    }
}

#[tokio::test]
async fn test_public_paths_need_no_identity() {
    let mut ctx = TestContext::new();
    for path in ["/", "/login"] {
        assert_eq!(ctx.get(path).await.status(), StatusCode::OK, "{path}");
    }

    let response = ctx.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

#[tokio::test]
async fn test_edge_redirects_to_dashboards() {
    let cases = [
        ("admin", None, "/en/superadmin/users", "/en/admin/dashboard"),
        ("client", None, "/fr/superadmin/messages", "/fr/user/dashboard"),
        (
            "admin",
            Some(json!({"is_superadmin": 1})),
            "/ar/user/dashboard",
            "/ar/superadmin/dashboard",
        ),
    ];

    for (user_type, profile, path, expected) in cases {
        let mut ctx = TestContext::new();
        ctx.login(user_type, profile).await;

        let response = ctx.get(path).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), expected, "{path}");
    }
}

#[tokio::test]
async fn test_superadmin_is_steered_from_admin_dashboard() {
    let mut ctx = TestContext::new();
    ctx.login("admin", Some(json!({"is_superadmin": "true"})))
        .await;

    let response = ctx.get("/fr/admin/dashboard").await;
    assert_eq!(location(&response), "/fr/superadmin/dashboard");

    let response = ctx.get("/fr/admin/dossiers").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_app_shell_sends_client_to_dossier_list() {
    // Cookies claim an admin, but the server session holds a client.
    let mut ctx = TestContext::new();
    ctx.login("client", None).await;
    ctx.set_cookie("token", &valid_token("admin"));
    ctx.set_cookie("userType", "admin");

    let response = ctx.get("/fr/admin/dossiers").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/fr/user/consulter-dossier");
}

#[tokio::test]
async fn test_app_shell_uses_working_page_targets() {
    let mut ctx = TestContext::new();
    ctx.login("admin", None).await;
    ctx.set_cookie("isSuperAdmin", "true");

    let response = ctx.get("/en/superadmin/users").await;
    assert_eq!(location(&response), "/en/admin/dossiers");
}

#[tokio::test]
async fn test_cookies_without_session_fall_back_to_login() {
    let mut ctx = TestContext::new();
    ctx.set_cookie("token", &valid_token("client"));
    ctx.set_cookie("userType", "client");

    let response = ctx.get("/fr/user/dashboard").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_expired_cookie_overrides_superadmin_flag() {
    let mut ctx = TestContext::new();
    ctx.set_cookie("token", &token(&json!({"exp": 1_000, "type": "admin"})));
    ctx.set_cookie("userType", "admin");
    ctx.set_cookie("isSuperAdmin", "true");

    let response = ctx.get("/fr/superadmin/dashboard").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_unknown_locale_is_not_found_when_authenticated() {
    let mut ctx = TestContext::new();
    ctx.login("admin", None).await;

    let response = ctx.get("/de/admin/dossiers").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_every_locale_has_a_home() {
    for locale in Locale::ALL {
        let mut ctx = TestContext::new();
        ctx.login("client", None).await;

        let path = locale.path("user/dashboard");
        assert_eq!(ctx.get(&path).await.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_redirects_carry_security_headers_and_request_id() {
    let mut ctx = TestContext::new();
    let response = ctx.get("/fr/admin/dossiers").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let headers = response.headers();
    assert_eq!(headers.get("x-frame-options").map(|v| v.as_bytes()), Some(&b"DENY"[..]));
    assert!(headers.get("x-request-id").is_some());
    assert!(headers.get("content-security-policy").is_some());
}

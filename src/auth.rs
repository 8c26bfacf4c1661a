//! Auth Forms
//!
//! Registration, login and logout. A successful exchange stores the issued
//! token, role and username and sends the user to their dashboard; a failed
//! one alerts the server's reason.

use crate::api::{AuthResponse, LoginPayload, RegisterPayload};
use crate::app::AppContext;
use crate::routes::Route;
use crate::session::Session;

pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful! Redirecting to dashboard...";

/// Create an account and sign in as it.
///
/// Returns `true` when the user was signed in and redirected.
pub async fn register(ctx: &AppContext, payload: &RegisterPayload) -> bool {
    match ctx.client.register(payload).await {
        Ok(response) => {
            let role = response.role.or(Some(payload.role));
            let username = response
                .username
                .clone()
                .unwrap_or_else(|| payload.username.clone());
            let session = Session {
                token: Some(response.access),
                role,
                username: Some(username),
            };
            establish(ctx, session);
            ctx.alert(REGISTRATION_SUCCEEDED);
            ctx.navigate(Route::dashboard_for(role));
            true
        }
        Err(e) => {
            ctx.alert(&e.message_or(REGISTRATION_FAILED));
            false
        }
    }
}

/// Exchange credentials for a token.
///
/// Returns `true` when the user was signed in and redirected.
pub async fn login(ctx: &AppContext, payload: &LoginPayload) -> bool {
    match ctx.client.login(payload).await {
        Ok(AuthResponse {
            access,
            role,
            username,
        }) => {
            let session = Session {
                token: Some(access),
                role,
                username: Some(username.unwrap_or_default()),
            };
            establish(ctx, session);
            ctx.navigate(Route::dashboard_for(role));
            true
        }
        Err(e) => {
            ctx.alert(&e.message_or(LOGIN_FAILED));
            false
        }
    }
}

/// Forget the session and return to the login page.
///
/// Purely local: the token is not revoked server-side.
pub fn logout(ctx: &AppContext) {
    if let Err(e) = ctx.session.sign_out() {
        tracing::warn!("Failed to clear stored session: {}", e);
    }
    tracing::info!("Signed out");
    ctx.navigate(Route::Login);
}

fn establish(ctx: &AppContext, session: Session) {
    let username = session.username.clone().unwrap_or_default();
    let role = session.role;
    if let Err(e) = ctx.session.sign_in(session) {
        tracing::warn!("Failed to persist session: {}", e);
    }
    tracing::info!(username = %username, role = ?role, "Signed in");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::session::{Role, SessionStore, ROLE_KEY, TOKEN_KEY, USERNAME_KEY};
    use crate::testing::TestApp;
    use serde_json::json;

    fn login_payload() -> LoginPayload {
        LoginPayload {
            email: "inv@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    fn register_payload(role: Role) -> RegisterPayload {
        RegisterPayload {
            username: "newbie".to_string(),
            email: "newbie@example.com".to_string(),
            password: "secret".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_login_stores_session_and_navigates() {
        let app = TestApp::signed_out();
        app.transport
            .respond(200, r#"{"access": "t1", "role": "investor", "username": "inv"}"#);

        assert!(login(&app.ctx, &login_payload()).await);

        assert_eq!(app.store.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(app.store.get(ROLE_KEY).as_deref(), Some("investor"));
        assert_eq!(app.store.get(USERNAME_KEY).as_deref(), Some("inv"));
        assert_eq!(app.navigator.routes(), vec![Route::InvestorDashboard]);
        assert!(app.notifier.messages().is_empty());

        let sent = app.transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert!(sent.url.ends_with("/auth/login/"));
        assert_eq!(
            app.transport.last_json_body(),
            json!({"email": "inv@example.com", "password": "secret"})
        );
    }

    #[tokio::test]
    async fn test_login_session_is_used_by_later_requests() {
        let app = TestApp::signed_out();
        app.transport
            .respond(200, r#"{"access": "t1", "role": "entrepreneur", "username": "ent"}"#);
        app.transport.respond(200, "[]");

        login(&app.ctx, &login_payload()).await;
        app.ctx.client.requests().await.unwrap();

        assert_eq!(app.transport.last_request().unwrap().header("Authorization"), Some("Bearer t1"));
        assert_eq!(app.navigator.routes(), vec![Route::EntrepreneurDashboard]);
    }

    #[tokio::test]
    async fn test_login_with_blank_role_lands_on_entrepreneur_dashboard() {
        let app = TestApp::signed_out();
        app.transport
            .respond(200, r#"{"access": "t9", "role": "", "username": "admin"}"#);

        assert!(login(&app.ctx, &login_payload()).await);

        assert_eq!(app.store.get(TOKEN_KEY).as_deref(), Some("t9"));
        assert_eq!(app.store.get(ROLE_KEY), None);
        assert_eq!(app.store.get(USERNAME_KEY).as_deref(), Some("admin"));
        assert_eq!(app.navigator.routes(), vec![Route::EntrepreneurDashboard]);
        assert!(app.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_alerts_detail() {
        let app = TestApp::signed_out();
        app.transport.respond(401, r#"{"detail": "Invalid credentials"}"#);

        assert!(!login(&app.ctx, &login_payload()).await);

        assert_eq!(app.notifier.messages(), vec!["Invalid credentials"]);
        assert_eq!(app.store.get(TOKEN_KEY), None);
        assert!(app.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_without_detail() {
        let app = TestApp::signed_out();
        app.transport.respond(500, "oops");

        login(&app.ctx, &login_payload()).await;

        assert_eq!(app.notifier.messages(), vec![LOGIN_FAILED]);
    }

    #[tokio::test]
    async fn test_register_falls_back_to_submitted_username() {
        let app = TestApp::signed_out();
        app.transport.respond(201, r#"{"access": "t2", "role": "entrepreneur"}"#);

        assert!(register(&app.ctx, &register_payload(Role::Entrepreneur)).await);

        assert_eq!(app.store.get(USERNAME_KEY).as_deref(), Some("newbie"));
        assert_eq!(app.notifier.messages(), vec![REGISTRATION_SUCCEEDED]);
        assert_eq!(app.navigator.routes(), vec![Route::EntrepreneurDashboard]);
        assert_eq!(
            app.transport.last_json_body(),
            json!({
                "username": "newbie",
                "email": "newbie@example.com",
                "password": "secret",
                "role": "entrepreneur"
            })
        );
    }

    #[tokio::test]
    async fn test_register_failure() {
        let app = TestApp::signed_out();
        app.transport.respond(400, r#"{"detail": "Username already exists"}"#);

        assert!(!register(&app.ctx, &register_payload(Role::Investor)).await);
        assert_eq!(app.notifier.messages(), vec!["Username already exists"]);

        app.transport.respond(400, "{}");
        register(&app.ctx, &register_payload(Role::Investor)).await;
        assert_eq!(app.notifier.messages()[1], REGISTRATION_FAILED);
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let app = TestApp::signed_in(Role::Investor);

        logout(&app.ctx);

        assert_eq!(app.store.get(TOKEN_KEY), None);
        assert_eq!(app.store.get(ROLE_KEY), None);
        assert_eq!(app.navigator.routes(), vec![Route::Login]);
    }
}

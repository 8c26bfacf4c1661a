//! Auth Guard
//!
//! Client-side check run before a role-gated view renders. The server
//! still authorizes every call.

use crate::app::AppContext;
use crate::routes::Route;
use crate::session::{Role, Session};

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

/// Decide whether `session` may open a view requiring `required`.
///
/// No token sends the user to login. A required role that the session does
/// not hold (including a session with no role) sends the user home.
pub fn check(session: &Session, required: Option<Role>) -> Access {
    if !session.is_authenticated() {
        return Access::Redirect(Route::Login);
    }
    match required {
        Some(role) if session.role != Some(role) => Access::Redirect(Route::Home),
        _ => Access::Granted,
    }
}

/// Check access and perform the redirect when denied.
///
/// Returns `false` when the caller must stop without rendering anything.
pub fn require_auth(ctx: &AppContext, required: Option<Role>) -> bool {
    match check(&ctx.session.current(), required) {
        Access::Granted => true,
        Access::Redirect(route) => {
            tracing::warn!(
                required = ?required,
                redirect = %route.path(),
                "Access denied"
            );
            ctx.navigate(route);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestApp;

    fn session(token: Option<&str>, role: Option<Role>) -> Session {
        Session {
            token: token.map(str::to_string),
            role,
            username: None,
        }
    }

    #[test]
    fn test_check_matrix() {
        assert_eq!(check(&session(None, None), None), Access::Redirect(Route::Login));
        assert_eq!(
            check(&session(None, Some(Role::Investor)), Some(Role::Investor)),
            Access::Redirect(Route::Login)
        );
        assert_eq!(
            check(&session(Some("t"), Some(Role::Entrepreneur)), Some(Role::Investor)),
            Access::Redirect(Route::Home)
        );
        assert_eq!(
            check(&session(Some("t"), None), Some(Role::Investor)),
            Access::Redirect(Route::Home)
        );
        assert_eq!(check(&session(Some("t"), None), None), Access::Granted);
        assert_eq!(
            check(&session(Some("t"), Some(Role::Investor)), Some(Role::Investor)),
            Access::Granted
        );
    }

    #[test]
    fn test_require_auth_without_token_redirects_to_login() {
        let app = TestApp::signed_out();
        assert!(!require_auth(&app.ctx, None));
        assert_eq!(app.navigator.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_require_auth_role_mismatch_redirects_home() {
        let app = TestApp::signed_in(Role::Entrepreneur);
        assert!(!require_auth(&app.ctx, Some(Role::Investor)));
        assert_eq!(app.navigator.routes(), vec![Route::Home]);
    }

    #[test]
    fn test_require_auth_granted_does_not_navigate() {
        let app = TestApp::signed_in(Role::Investor);
        assert!(require_auth(&app.ctx, Some(Role::Investor)));
        assert!(require_auth(&app.ctx, None));
        assert!(app.navigator.routes().is_empty());
    }
}

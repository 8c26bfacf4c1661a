//! Role dashboards
//!
//! Each dashboard is two regions behind one access check.

use super::{entrepreneurs, incoming, investors, outgoing, Surface};
use crate::app::AppContext;
use crate::guard::require_auth;
use crate::session::Role;

/// Entrepreneur list plus the investor's sent requests
pub async fn investor(ctx: &AppContext, list: &dyn Surface, requests: &dyn Surface) {
    if !require_auth(ctx, Some(Role::Investor)) {
        return;
    }
    entrepreneurs::refresh(ctx, list).await;
    outgoing::refresh(ctx, requests).await;
}

/// Incoming requests plus the investor directory
pub async fn entrepreneur(ctx: &AppContext, requests: &dyn Surface, directory: &dyn Surface) {
    if !require_auth(ctx, Some(Role::Entrepreneur)) {
        return;
    }
    incoming::refresh(ctx, requests).await;
    investors::refresh(ctx, directory).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use crate::testing::{RecordingSurface, TestApp};
    use crate::views::ViewState;

    #[tokio::test]
    async fn test_investor_dashboard_fills_both_regions() {
        let app = TestApp::signed_in(Role::Investor);
        app.transport.respond(200, r#"[{"user": {"id": 5, "username": "ent"}}]"#);
        app.transport.respond(500, "<html>boom</html>");
        let list = RecordingSurface::default();
        let requests = RecordingSurface::default();

        investor(&app.ctx, &list, &requests).await;

        assert_eq!(list.rendered().len(), 1);
        assert_eq!(requests.last(), Some(ViewState::Error("Request failed".to_string())));

        let urls: Vec<String> = app.transport.requests().into_iter().map(|r| r.url).collect();
        assert!(urls[0].ends_with("/api/entrepreneurs/"));
        assert!(urls[1].ends_with("/api/requests/"));
    }

    #[tokio::test]
    async fn test_entrepreneur_dashboard() {
        let app = TestApp::signed_in(Role::Entrepreneur);
        app.transport.respond(200, "[]");
        app.transport.respond(200, r#"[{"user": {"id": 1, "username": "inv"}}]"#);
        let requests = RecordingSurface::default();
        let directory = RecordingSurface::default();

        entrepreneur(&app.ctx, &requests, &directory).await;

        assert!(requests.rendered().is_empty());
        assert_eq!(directory.rendered()[0].find_all(&|e| e.tag == "h3")[0].text_content(), "inv");
    }

    #[tokio::test]
    async fn test_wrong_dashboard_redirects_once() {
        let app = TestApp::signed_in(Role::Entrepreneur);
        let list = RecordingSurface::default();
        let requests = RecordingSurface::default();

        investor(&app.ctx, &list, &requests).await;

        assert_eq!(app.navigator.routes(), vec![Route::Home]);
        assert!(list.states().is_empty() && requests.states().is_empty());
    }
}

//! Profile detail
//!
//! Common fields first, then the fields of the *viewed* user's role, then
//! the recent visitors when the server sent any.

use super::{card, or_dash, run, viewer_row, Surface};
use crate::api::Profile;
use crate::app::AppContext;
use crate::dom::{build_element, Node};
use crate::guard::require_auth;
use crate::session::Role;

pub async fn load(ctx: &AppContext, surface: &dyn Surface, user_id: u64) {
    if !require_auth(ctx, None) {
        return;
    }
    refresh(ctx, surface, user_id).await;
}

pub async fn refresh(ctx: &AppContext, surface: &dyn Surface, user_id: u64) {
    run(surface, "profile", ctx.client.profile(user_id), |profile| render(&profile)).await;
}

/// Label/value pairs in display order
pub fn fields(profile: &Profile) -> Vec<(&'static str, String)> {
    let role = profile.user.role.map(|r| r.as_str());
    let mut items = vec![
        ("Username", profile.user.username.clone()),
        ("Role", or_dash(role)),
        ("Bio", or_dash(profile.bio.as_deref())),
        ("Profile Views", profile.view_count.unwrap_or(0).to_string()),
    ];

    if profile.user.role == Some(Role::Entrepreneur) {
        items.push(("Startup", or_dash(profile.startup_name.as_deref())));
        items.push(("Description", or_dash(profile.startup_description.as_deref())));
        items.push(("Funding Need", or_dash(profile.funding_need.as_deref())));
        items.push(("Pitch Deck", or_dash(profile.pitch_deck_url.as_deref())));
    } else {
        items.push(("Interests", or_dash(profile.investment_interests.as_deref())));
        items.push(("Portfolio", or_dash(profile.portfolio_companies.as_deref())));
    }

    items
}

pub fn render(profile: &Profile) -> Vec<Node> {
    let mut nodes: Vec<Node> = fields(profile)
        .into_iter()
        .map(|(label, value)| {
            card(vec![
                build_element("strong", vec![], vec![Node::text(format!("{}: ", label))]),
                Node::text(value),
            ])
        })
        .collect();

    if !profile.recent_viewers.is_empty() {
        let mut children = vec![build_element("h4", vec![], vec!["Recent Viewers".into()])];
        children.extend(profile.recent_viewers.iter().map(|v| {
            build_element("div", vec![], vec![Node::text(viewer_row(&v.username, &v.viewed_at))])
        }));
        nodes.push(card(children));
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use crate::testing::{RecordingSurface, TestApp};
    use crate::views::ViewState;
    use serde_json::json;

    fn profile(value: serde_json::Value) -> Profile {
        serde_json::from_value(value).unwrap()
    }

    fn labels(profile: &Profile) -> Vec<&'static str> {
        fields(profile).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_entrepreneur_fields_follow_viewed_role() {
        let p = profile(json!({
            "user": {"id": 2, "username": "ent", "role": "entrepreneur"},
            "startup_name": "Acme",
            "funding_need": 5000,
            "view_count": 3
        }));

        assert_eq!(
            labels(&p),
            vec!["Username", "Role", "Bio", "Profile Views", "Startup", "Description", "Funding Need", "Pitch Deck"]
        );
        let values: Vec<String> = fields(&p).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values[3], "3");
        assert_eq!(values[4], "Acme");
        assert_eq!(values[5], "—");
        assert_eq!(values[6], "5000");
    }

    #[test]
    fn test_investor_fields() {
        let p = profile(json!({
            "user": {"id": 1, "username": "inv", "role": "investor"},
            "investment_interests": "climate"
        }));

        assert_eq!(
            labels(&p),
            vec!["Username", "Role", "Bio", "Profile Views", "Interests", "Portfolio"]
        );
        assert_eq!(fields(&p)[3].1, "0");
    }

    #[test]
    fn test_rows_are_labelled_cards() {
        let p = profile(json!({"user": {"id": 1, "username": "inv", "role": "investor"}}));
        let nodes = render(&p);

        assert_eq!(nodes.len(), 6);
        let first = nodes[0].as_element().unwrap();
        assert!(first.has_class("card"));
        assert_eq!(first.children[0].text_content(), "Username: ");
        assert_eq!(nodes[0].text_content(), "Username: inv");
    }

    #[test]
    fn test_empty_recent_viewers_renders_no_section() {
        let p = profile(json!({
            "user": {"id": 1, "username": "inv", "role": "investor"},
            "recent_viewers": []
        }));
        let nodes = render(&p);

        assert!(nodes.iter().all(|n| n.find_all(&|e| e.tag == "h4").is_empty()));
    }

    #[test]
    fn test_one_recent_viewer_renders_one_row() {
        let p = profile(json!({
            "user": {"id": 2, "username": "ent", "role": "entrepreneur"},
            "recent_viewers": [{"id": 1, "username": "bob", "viewed_at": "sometime"}]
        }));
        let nodes = render(&p);

        let section = nodes.last().unwrap().as_element().unwrap();
        assert_eq!(section.children[0].text_content(), "Recent Viewers");
        assert_eq!(section.children.len(), 2);
        assert_eq!(section.children[1].text_content(), "bob — sometime");
    }

    #[tokio::test]
    async fn test_load_fetches_requested_user() {
        let app = TestApp::signed_in(Role::Investor);
        app.transport
            .respond(200, r#"{"user": {"id": 7, "username": "ent", "role": "entrepreneur"}}"#);
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface, 7).await;

        assert!(app.transport.last_request().unwrap().url.ends_with("/api/profile/7/"));
        assert_eq!(surface.rendered()[0].text_content(), "Username: ent");
    }

    #[tokio::test]
    async fn test_blank_role_renders_investor_fields() {
        let app = TestApp::signed_in(Role::Investor);
        app.transport.respond(
            200,
            r#"{"user": {"id": 1, "username": "admin", "role": ""}, "investment_interests": "all"}"#,
        );
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface, 1).await;

        let text: Vec<String> = surface.rendered().iter().map(|n| n.text_content()).collect();
        assert_eq!(text[1], "Role: —");
        assert!(text.contains(&"Interests: all".to_string()));
        assert!(!text.iter().any(|t| t.starts_with("Startup")));
    }

    #[tokio::test]
    async fn test_missing_profile_shows_detail() {
        let app = TestApp::signed_in(Role::Entrepreneur);
        app.transport.respond(404, r#"{"detail": "Profile not found"}"#);
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface, 99).await;

        assert_eq!(surface.last(), Some(ViewState::Error("Profile not found".to_string())));
    }

    #[tokio::test]
    async fn test_signed_out_redirects() {
        let app = TestApp::signed_out();
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface, 7).await;

        assert_eq!(app.navigator.routes(), vec![Route::Login]);
        assert!(surface.states().is_empty());
    }
}

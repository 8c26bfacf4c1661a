//! Investor directory (entrepreneurs only, read-only)

use super::{card, message_link, or_dash, run, Surface};
use crate::api::Profile;
use crate::app::AppContext;
use crate::dom::{build_element, Node};
use crate::guard::require_auth;
use crate::routes::Route;
use crate::session::Role;

pub const REQUIRED_ROLE: Role = Role::Entrepreneur;

pub async fn load(ctx: &AppContext, surface: &dyn Surface) {
    if !require_auth(ctx, Some(REQUIRED_ROLE)) {
        return;
    }
    refresh(ctx, surface).await;
}

pub async fn refresh(ctx: &AppContext, surface: &dyn Surface) {
    run(surface, "investors", ctx.client.investors(), |profiles| render(&profiles)).await;
}

pub fn render(profiles: &[Profile]) -> Vec<Node> {
    profiles
        .iter()
        .map(|profile| {
            card(vec![
                build_element("h3", vec![], vec![Node::text(profile.user.username.as_str())]),
                build_element(
                    "p",
                    vec![],
                    vec![Node::text(or_dash(profile.investment_interests.as_deref()))],
                ),
                build_element(
                    "p",
                    vec![],
                    vec![Node::text(or_dash(profile.portfolio_companies.as_deref()))],
                ),
                build_element(
                    "div",
                    vec![("class", "actions".into())],
                    vec![
                        build_element(
                            "a",
                            vec![
                                ("class", "button secondary".into()),
                                ("href", Route::Profile(profile.user.id).path().into()),
                            ],
                            vec!["View Profile".into()],
                        ),
                        message_link(profile.user.id),
                    ],
                ),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSurface, TestApp};

    #[tokio::test]
    async fn test_renders_read_only_cards() {
        let app = TestApp::signed_in(Role::Entrepreneur);
        app.transport.respond(
            200,
            r#"[
                {"user": {"id": 1, "username": "inv", "role": "investor"},
                 "investment_interests": "fintech", "portfolio_companies": null},
                {"user": {"id": 2, "username": "angel", "role": "investor"}}
            ]"#,
        );
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface).await;

        let nodes = surface.rendered();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].text_content().contains("fintech"));
        assert!(nodes[1].find_all(&|e| e.tag == "button").is_empty());
        assert!(nodes.iter().all(|n| n.find_all(&|e| !e.listeners.is_empty()).is_empty()));
        assert!(app.transport.last_request().unwrap().url.ends_with("/api/investors/"));
    }

    #[tokio::test]
    async fn test_investor_is_sent_home() {
        let app = TestApp::signed_in(Role::Investor);
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface).await;

        assert!(surface.states().is_empty());
        assert_eq!(app.navigator.routes(), vec![Route::Home]);
    }
}

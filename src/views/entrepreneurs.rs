//! Entrepreneur list (investors only)

use super::{card, message_link, or_dash, run, Surface};
use crate::actions::Action;
use crate::api::Profile;
use crate::app::AppContext;
use crate::dom::{build_element, Node};
use crate::guard::require_auth;
use crate::routes::Route;
use crate::session::Role;

pub const REQUIRED_ROLE: Role = Role::Investor;

pub async fn load(ctx: &AppContext, surface: &dyn Surface) {
    if !require_auth(ctx, Some(REQUIRED_ROLE)) {
        return;
    }
    refresh(ctx, surface).await;
}

/// Fetch and render without re-checking access
pub async fn refresh(ctx: &AppContext, surface: &dyn Surface) {
    run(surface, "entrepreneurs", ctx.client.entrepreneurs(), |profiles| render(&profiles)).await;
}

pub fn render(profiles: &[Profile]) -> Vec<Node> {
    profiles.iter().map(entrepreneur_card).collect()
}

fn entrepreneur_card(profile: &Profile) -> Node {
    let user_id = profile.user.id;
    card(vec![
        build_element("h3", vec![], vec![Node::text(profile.user.username.as_str())]),
        build_element("p", vec![], vec![Node::text(or_dash(profile.startup_name.as_deref()))]),
        build_element(
            "p",
            vec![],
            vec![Node::text(or_dash(profile.startup_description.as_deref()))],
        ),
        build_element(
            "div",
            vec![("class", "actions".into())],
            vec![
                build_element(
                    "a",
                    vec![
                        ("class", "button secondary".into()),
                        ("href", Route::Profile(user_id).path().into()),
                    ],
                    vec!["View Profile".into()],
                ),
                message_link(user_id),
                build_element(
                    "button",
                    vec![
                        ("class", "button".into()),
                        ("onclick", Action::SendRequest { entrepreneur_id: user_id }.into()),
                    ],
                    vec!["Send Request".into()],
                ),
            ],
        ),
    ])
}

//! Who viewed the signed-in user's profile
//!
//! Newest first as sent by the server; unseen visits carry a "new" badge
//! until "Mark all as seen" is pressed.

use super::{card, run, viewer_row, Surface};
use crate::actions::Action;
use crate::api::ProfileViews;
use crate::app::AppContext;
use crate::dom::{build_element, Node};
use crate::guard::require_auth;

pub async fn load(ctx: &AppContext, surface: &dyn Surface) {
    if !require_auth(ctx, None) {
        return;
    }
    refresh(ctx, surface).await;
}

pub async fn refresh(ctx: &AppContext, surface: &dyn Surface) {
    run(surface, "profile_views", ctx.client.profile_views(), |views| render(&views)).await;
}

pub fn render(inbox: &ProfileViews) -> Vec<Node> {
    let mut header = vec![
        build_element("h3", vec![], vec!["Profile Views".into()]),
        build_element("p", vec![], vec![Node::text(format!("{} new", inbox.unseen_count))]),
    ];
    if inbox.unseen_count > 0 {
        header.push(build_element(
            "button",
            vec![
                ("class", "button secondary".into()),
                ("onclick", Action::MarkViewsSeen.into()),
            ],
            vec!["Mark all as seen".into()],
        ));
    }

    let mut nodes = vec![card(header)];
    if inbox.views.is_empty() {
        nodes.push(card(vec!["No one has viewed your profile yet.".into()]));
        return nodes;
    }

    nodes.extend(inbox.views.iter().map(|view| {
        let mut children = vec![Node::text(viewer_row(&view.viewer_username, &view.viewed_at))];
        if !view.seen {
            children.push(Node::text(" "));
            children.push(build_element(
                "span",
                vec![("class", "badge badge-pending".into())],
                vec!["new".into()],
            ));
        }
        card(children)
    }));
    nodes
}

//! Message inbox: unread counts per sender

use super::{card, run, Surface};
use crate::api::UnreadByUser;
use crate::app::AppContext;
use crate::dom::{build_element, Node};
use crate::guard::require_auth;
use crate::routes::Route;

pub async fn load(ctx: &AppContext, surface: &dyn Surface) {
    if !require_auth(ctx, None) {
        return;
    }
    refresh(ctx, surface).await;
}

pub async fn refresh(ctx: &AppContext, surface: &dyn Surface) {
    run(surface, "messages", ctx.client.unread_by_user(), |unread| render(&unread)).await;
}

pub fn render(unread: &UnreadByUser) -> Vec<Node> {
    let mut nodes = vec![card(vec![
        build_element("h3", vec![], vec!["Messages".into()]),
        build_element("p", vec![], vec![Node::text(format!("{} unread", unread.total))]),
    ])];

    let senders = unread.senders();
    if senders.is_empty() {
        nodes.push(card(vec!["No unread messages.".into()]));
        return nodes;
    }

    nodes.extend(senders.into_iter().map(|(sender_id, count)| {
        card(vec![
            build_element(
                "a",
                vec![("href", Route::Conversation(sender_id).path().into())],
                vec![Node::text(format!("User #{}", sender_id))],
            ),
            Node::text(" "),
            build_element(
                "span",
                vec![("class", "badge badge-pending".into())],
                vec![Node::text(count.to_string())],
            ),
        ])
    }));
    nodes
}

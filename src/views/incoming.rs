//! Incoming collaboration requests (entrepreneurs only)
//!
//! Pending requests get Accept/Reject buttons; once a request is accepted
//! or rejected it is shown without actions.

use super::{request_card, run, Surface};
use crate::actions::Action;
use crate::api::{CollaborationRequest, RequestStatus};
use crate::app::AppContext;
use crate::dom::{build_element, Node};
use crate::guard::require_auth;
use crate::session::Role;

pub const REQUIRED_ROLE: Role = Role::Entrepreneur;

pub async fn load(ctx: &AppContext, surface: &dyn Surface) {
    if !require_auth(ctx, Some(REQUIRED_ROLE)) {
        return;
    }
    refresh(ctx, surface).await;
}

pub async fn refresh(ctx: &AppContext, surface: &dyn Surface) {
    run(surface, "incoming_requests", ctx.client.requests(), |requests| render(&requests)).await;
}

pub fn render(requests: &[CollaborationRequest]) -> Vec<Node> {
    requests
        .iter()
        .map(|r| request_card(format!("From: {}", r.investor.username), r, Some(actions_for(r))))
        .collect()
}

/// One button per transition the request still allows
fn actions_for(request: &CollaborationRequest) -> Vec<Node> {
    [
        (RequestStatus::Accepted, "button", "Accept"),
        (RequestStatus::Rejected, "button secondary", "Reject"),
    ]
    .into_iter()
    .filter(|(next, _, _)| request.status.can_transition_to(*next))
    .map(|(next, class, label)| decision_button(request.id, next, class, label))
    .collect()
}

fn decision_button(id: u64, status: RequestStatus, class: &str, label: &str) -> Node {
    build_element(
        "button",
        vec![
            ("class", class.into()),
            ("onclick", Action::UpdateRequest { id, status }.into()),
        ],
        vec![label.into()],
    )
}

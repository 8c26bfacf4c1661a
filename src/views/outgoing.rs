//! Requests the signed-in investor has sent (read-only)

use super::{request_card, run, Surface};
use crate::api::CollaborationRequest;
use crate::app::AppContext;
use crate::dom::Node;
use crate::guard::require_auth;
use crate::session::Role;

pub const REQUIRED_ROLE: Role = Role::Investor;

pub async fn load(ctx: &AppContext, surface: &dyn Surface) {
    if !require_auth(ctx, Some(REQUIRED_ROLE)) {
        return;
    }
    refresh(ctx, surface).await;
}

pub async fn refresh(ctx: &AppContext, surface: &dyn Surface) {
    run(surface, "outgoing_requests", ctx.client.requests(), |requests| render(&requests)).await;
}

pub fn render(requests: &[CollaborationRequest]) -> Vec<Node> {
    requests
        .iter()
        .map(|r| request_card(format!("To: {}", r.entrepreneur.username), r, None))
        .collect()
}

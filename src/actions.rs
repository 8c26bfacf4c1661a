//! Actions
//!
//! What a button or form does once the user triggers it. Views attach
//! [`Action`] values to elements; the front end calls [`dispatch`] when the
//! event fires and reloads the owning view if asked to.
//!
//! Triggering the same action twice before the first call resolves sends
//! two independent requests.

use std::collections::BTreeMap;

use crate::api::RequestStatus;
use crate::app::AppContext;
use crate::auth;

/// Message attached to requests sent from the entrepreneur list
pub const DEFAULT_REQUEST_MESSAGE: &str = "Interested in collaborating.";

/// Alert for a chat message that is empty after trimming
pub const EMPTY_MESSAGE: &str = "Message cannot be empty";

/// Flat form payload, field name to value
pub type FormFields = BTreeMap<String, String>;

/// Something a user interaction asks the client to do
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Propose a collaboration to an entrepreneur
    SendRequest { entrepreneur_id: u64 },
    /// Accept or reject a pending request
    UpdateRequest { id: u64, status: RequestStatus },
    /// Replace the signed-in user's profile with the submitted form fields
    SubmitProfile,
    /// Clear the unseen marker on every profile view
    MarkViewsSeen,
    /// Send the form's `content` field as a chat message
    SendMessage { recipient_id: u64 },
    Logout,
}

/// What the front end should do after an action completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing further
    Done,
    /// Re-run the loader of the view that rendered the action
    Reload,
    /// The call failed and the user has been alerted
    Failed,
}

/// Execute an action.
///
/// `form` carries the serialized fields when the action came from a form
/// submission. Failures are alerted here and never propagate.
pub async fn dispatch(ctx: &AppContext, action: &Action, form: Option<FormFields>) -> Outcome {
    match action {
        Action::SendRequest { entrepreneur_id } => {
            match ctx.client.send_request(*entrepreneur_id, DEFAULT_REQUEST_MESSAGE).await {
                Ok(_) => {
                    tracing::info!(entrepreneur_id, "Collaboration request sent");
                    ctx.alert("Request sent");
                    Outcome::Done
                }
                Err(e) => {
                    ctx.alert(&e.message());
                    Outcome::Failed
                }
            }
        }

        Action::UpdateRequest { id, status } => match ctx.client.update_request(*id, *status).await {
            Ok(_) => {
                tracing::info!(request_id = id, status = %status, "Collaboration request updated");
                ctx.alert(status.as_str());
                Outcome::Reload
            }
            Err(e) => {
                ctx.alert(&e.message());
                Outcome::Failed
            }
        },

        Action::SubmitProfile => {
            let fields = form.unwrap_or_default();
            match ctx.client.update_profile(&fields).await {
                Ok(_) => {
                    tracing::info!(fields = fields.len(), "Profile updated");
                    ctx.alert("Profile updated");
                    Outcome::Done
                }
                Err(e) => {
                    ctx.alert(&e.message());
                    Outcome::Failed
                }
            }
        }

        Action::MarkViewsSeen => match ctx.client.mark_profile_views_seen().await {
            Ok(_) => Outcome::Reload,
            Err(e) => {
                ctx.alert(&e.message());
                Outcome::Failed
            }
        },

        Action::SendMessage { recipient_id } => {
            let content = form
                .as_ref()
                .and_then(|fields| fields.get("content"))
                .map(|c| c.trim())
                .unwrap_or_default();
            if content.is_empty() {
                ctx.alert(EMPTY_MESSAGE);
                return Outcome::Failed;
            }
            match ctx.client.send_message(*recipient_id, content).await {
                Ok(_) => {
                    tracing::info!(recipient_id, "Message sent");
                    Outcome::Reload
                }
                Err(e) => {
                    ctx.alert(&e.message_or("Failed to send message"));
                    Outcome::Failed
                }
            }
        }

        Action::Logout => {
            auth::logout(ctx);
            Outcome::Done
        }
    }
}

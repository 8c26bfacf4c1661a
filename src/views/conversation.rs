//! Conversation with one user
//!
//! History oldest first, the other user's presence and a send form.
//! Opening the conversation marks what they sent as read.

use super::{card, format_timestamp, run, Surface};
use crate::actions::Action;
use crate::api::{ChatHistory, ChatMessage, Presence};
use crate::app::AppContext;
use crate::dom::{build_element, Node};
use crate::guard::require_auth;
use crate::http::ApiResult;

pub const FORM_ID: &str = "messageForm";

pub const EMPTY_HISTORY: &str = "No messages yet. Say hello!";

/// Everything the conversation page shows
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub history: ChatHistory,
    /// Missing when the presence lookup failed
    pub presence: Option<Presence>,
}

pub async fn load(ctx: &AppContext, surface: &dyn Surface, user_id: u64) {
    if !require_auth(ctx, None) {
        return;
    }
    refresh(ctx, surface, user_id).await;
}

pub async fn refresh(ctx: &AppContext, surface: &dyn Surface, user_id: u64) {
    run(surface, "conversation", fetch(ctx, user_id), move |conversation| {
        render(user_id, &conversation)
    })
    .await;
}

async fn fetch(ctx: &AppContext, user_id: u64) -> ApiResult<Conversation> {
    let history = ctx.client.chat_history(user_id).await?;

    // Best effort: neither failure hides the history
    let presence = match ctx.client.presence(user_id).await {
        Ok(presence) => Some(presence),
        Err(e) => {
            tracing::warn!(user_id, error = %e, "Presence lookup failed");
            None
        }
    };
    if let Err(e) = ctx.client.mark_conversation_read(user_id).await {
        tracing::warn!(user_id, error = %e, "Failed to mark conversation as read");
    }

    Ok(Conversation { history, presence })
}

pub fn render(user_id: u64, conversation: &Conversation) -> Vec<Node> {
    let mut header = vec![build_element(
        "h3",
        vec![],
        vec![Node::text(format!("Chat with {}", conversation.history.other_user.username))],
    )];
    if let Some(presence) = &conversation.presence {
        header.push(build_element(
            "p",
            vec![("class", "meta".into())],
            vec![Node::text(presence_text(presence))],
        ));
    }

    let mut nodes = vec![card(header)];
    if conversation.history.messages.is_empty() {
        nodes.push(card(vec![EMPTY_HISTORY.into()]));
    } else {
        nodes.push(build_element(
            "div",
            vec![("class", "messages".into())],
            conversation.history.messages.iter().map(message).collect(),
        ));
    }
    nodes.push(send_form(user_id));
    nodes
}

pub fn presence_text(presence: &Presence) -> String {
    match (presence.online, presence.last_active.as_deref()) {
        (true, _) => "Online".to_string(),
        (false, Some(last)) => format!("Last active {}", format_timestamp(last)),
        (false, None) => "Offline".to_string(),
    }
}

fn message(message: &ChatMessage) -> Node {
    let class = if message.is_me { "message mine" } else { "message theirs" };
    build_element(
        "div",
        vec![("class", class.into())],
        vec![
            build_element("div", vec![], vec![Node::text(message.content.as_str())]),
            build_element(
                "div",
                vec![("class", "meta".into())],
                vec![Node::text(format_timestamp(&message.timestamp))],
            ),
        ],
    )
}

fn send_form(user_id: u64) -> Node {
    build_element(
        "form",
        vec![
            ("id", FORM_ID.into()),
            ("class", "card".into()),
            ("onsubmit", Action::SendMessage { recipient_id: user_id }.into()),
        ],
        vec![
            build_element(
                "textarea",
                vec![("name", "content".into()), ("placeholder", "Type a message".into())],
                vec![],
            ),
            build_element(
                "button",
                vec![("class", "button".into()), ("type", "submit".into())],
                vec!["Send".into()],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{dispatch, FormFields, Outcome};
    use crate::http::Method;
    use crate::routes::Route;
    use crate::session::Role;
    use crate::testing::{RecordingSurface, TestApp};
    use crate::views::ViewState;
    use serde_json::json;

    const HISTORY: &str = r#"{
        "success": true,
        "messages": [
            {"id": "1", "sender_id": "7", "content": "Hello investor", "timestamp": "not a date", "is_me": false},
            {"id": "2", "sender_id": "1", "content": "Hi back", "timestamp": "later", "is_me": true}
        ],
        "current_user_id": "1",
        "other_user": {"id": "7", "username": "ent", "email": "e@x"}
    }"#;

    #[tokio::test]
    async fn test_history_presence_then_mark_read() {
        let app = TestApp::signed_in(Role::Investor);
        app.transport.respond(200, HISTORY);
        app.transport.respond(200, r#"{"success": true, "online": true, "last_active": null}"#);
        app.transport.respond(200, r#"{"success": true, "marked": 1, "remaining_unread": 0}"#);
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface, 7).await;

        let sent = app.transport.requests();
        assert_eq!(sent.len(), 3);
        assert!(sent[0].url.ends_with("/chat/api/messages/7/"));
        assert!(sent[1].url.ends_with("/chat/api/presence/?user_id=7"));
        assert_eq!(sent[2].method, Method::Post);
        assert!(sent[2].url.ends_with("/chat/api/messages/mark-read/"));
        assert_eq!(app.transport.last_json_body(), json!({"other_user_id": 7}));

        let nodes = surface.rendered();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].text_content(), "Chat with entOnline");

        let bubbles = nodes[1].find_all(&|e| e.has_class("message"));
        assert_eq!(bubbles.len(), 2);
        assert!(bubbles[0].has_class("theirs"));
        assert!(bubbles[1].has_class("mine"));
        assert_eq!(bubbles[0].text_content(), "Hello investornot a date");

        let form = nodes[2].as_element().unwrap();
        assert_eq!(form.attr("id"), Some(FORM_ID));
        assert_eq!(
            form.listener("submit"),
            Some(&Action::SendMessage { recipient_id: 7 })
        );
    }

    #[tokio::test]
    async fn test_presence_and_read_failures_still_render() {
        let app = TestApp::signed_in(Role::Entrepreneur);
        app.transport.respond(200, HISTORY);
        app.transport.respond(500, "");
        app.transport.fail("connection reset");
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface, 7).await;

        let nodes = surface.rendered();
        assert_eq!(nodes[0].text_content(), "Chat with ent");
        assert_eq!(nodes[1].find_all(&|e| e.has_class("message")).len(), 2);
        assert!(app.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_missing_partner_shows_error() {
        let app = TestApp::signed_in(Role::Investor);
        app.transport.respond(404, r#"{"success": false, "error": "User not found"}"#);
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface, 7).await;

        assert_eq!(surface.last(), Some(ViewState::Error("Request failed".to_string())));
        assert_eq!(app.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_send_then_reload_shows_new_message() {
        let app = TestApp::signed_in(Role::Investor);
        app.transport.respond(
            200,
            r#"{"messages": [], "other_user": {"id": "7", "username": "ent"}}"#,
        );
        app.transport.respond(200, r#"{"online": false, "last_active": null}"#);
        app.transport.respond(200, r#"{"success": true}"#);
        let surface = RecordingSurface::default();
        load(&app.ctx, &surface, 7).await;

        let nodes = surface.rendered();
        assert_eq!(nodes[0].text_content(), "Chat with entOffline");
        assert_eq!(nodes[1].text_content(), EMPTY_HISTORY);

        let action = nodes[2].as_element().unwrap().listener("submit").unwrap().clone();
        let mut form = FormFields::new();
        form.insert("content".to_string(), "Let's talk".to_string());
        app.transport.respond(200, r#"{"success": true}"#);
        assert_eq!(dispatch(&app.ctx, &action, Some(form)).await, Outcome::Reload);
        assert_eq!(
            app.transport.last_json_body(),
            json!({"recipient_id": 7, "content": "Let's talk"})
        );

        app.transport.respond(
            200,
            r#"{"messages": [{"id": "3", "sender_id": "1", "content": "Let's talk", "timestamp": "now", "is_me": true}],
                "other_user": {"id": "7", "username": "ent"}}"#,
        );
        app.transport.respond(200, r#"{"online": false, "last_active": null}"#);
        app.transport.respond(200, r#"{"success": true}"#);
        refresh(&app.ctx, &surface, 7).await;

        let rendered = surface.rendered();
        let bubbles = rendered[1].find_all(&|e| e.has_class("mine"));
        assert_eq!(bubbles.len(), 1);
        assert!(bubbles[0].text_content().starts_with("Let's talk"));
    }

    #[test]
    fn test_presence_text() {
        let last_seen = Presence {
            online: false,
            last_active: Some("yesterday".to_string()),
        };
        assert_eq!(presence_text(&last_seen), "Last active yesterday");
        let online = Presence {
            online: true,
            last_active: Some("yesterday".to_string()),
        };
        assert_eq!(presence_text(&online), "Online");
    }

    #[tokio::test]
    async fn test_signed_out_is_sent_to_login() {
        let app = TestApp::signed_out();
        let surface = RecordingSurface::default();

        load(&app.ctx, &surface, 7).await;

        assert!(surface.states().is_empty());
        assert!(app.transport.requests().is_empty());
        assert_eq!(app.navigator.routes(), vec![Route::Login]);
    }
}

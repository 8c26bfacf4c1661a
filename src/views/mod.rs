//! View Loaders
//!
//! One loader per page region. Each runs the same state machine:
//!
//! ```text
//! guard --denied--> (redirected, nothing shown)
//!   |
//!   v
//! Loading --fetch ok--> Rendered(tree)
//!         --fetch err-> Error(message)
//! ```
//!
//! Loaders write states into a [`Surface`]; the browser mounts them into a
//! container element, the CLI prints them. A loader never returns an error:
//! failures end as [`ViewState::Error`].

pub mod conversation;
pub mod dashboard;
pub mod edit_profile;
pub mod entrepreneurs;
pub mod incoming;
pub mod investors;
pub mod messages;
pub mod outgoing;
pub mod profile;
pub mod profile_views;

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::future::Future;

use crate::api::{CollaborationRequest, RequestStatus};
use crate::dom::{build_element, Node};
use crate::http::ApiResult;
use crate::routes::Route;

/// Placeholder for empty text fields
pub const DASH: &str = "—";

/// Text shown while a fetch is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// What a page region currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Rendered(Vec<Node>),
    Error(String),
}

impl ViewState {
    /// The tree that replaces the region's previous content
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            ViewState::Loading => vec![Node::text(LOADING_TEXT)],
            ViewState::Rendered(nodes) => nodes,
            ViewState::Error(message) => vec![card(vec![Node::text(message)])],
        }
    }
}

/// A page region a loader renders into
pub trait Surface {
    fn show(&self, state: ViewState);
}

/// Show `Loading`, await `fetch`, then show the rendered data or the
/// failure reason.
pub(crate) async fn run<T, F, R>(surface: &dyn Surface, view: &str, fetch: F, render: R)
where
    F: Future<Output = ApiResult<T>>,
    R: FnOnce(T) -> Vec<Node>,
{
    surface.show(ViewState::Loading);
    match fetch.await {
        Ok(data) => surface.show(ViewState::Rendered(render(data))),
        Err(e) => {
            tracing::warn!(view = view, error = %e, "View failed to load");
            surface.show(ViewState::Error(e.message()));
        }
    }
}

pub(crate) fn card(children: Vec<Node>) -> Node {
    build_element("div", vec![("class", "card".into())], children)
}

pub(crate) fn div(children: Vec<Node>) -> Node {
    build_element("div", vec![], children)
}

/// The value, or [`DASH`] when missing or blank
pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DASH.to_string(),
    }
}

pub(crate) fn status_badge(status: RequestStatus) -> Node {
    build_element(
        "div",
        vec![("class", format!("badge {}", status.badge_class()).into())],
        vec![Node::text(status.as_str())],
    )
}

/// Card shared by the incoming and outgoing request lists
pub(crate) fn request_card(heading: String, request: &CollaborationRequest, actions: Option<Vec<Node>>) -> Node {
    let mut children = vec![
        div(vec![Node::text(heading)]),
        div(vec![Node::text(or_dash(request.message.as_deref()))]),
        status_badge(request.status),
    ];
    if let Some(created_at) = request.created_at.as_deref() {
        children.push(build_element(
            "div",
            vec![("class", "meta".into())],
            vec![Node::text(format!("Sent {}", format_timestamp(created_at)))],
        ));
    }
    if let Some(actions) = actions {
        children.push(build_element("div", vec![("class", "actions".into())], actions));
    }
    card(children)
}

/// Link that opens the conversation with `user_id`
pub(crate) fn message_link(user_id: u64) -> Node {
    build_element(
        "a",
        vec![
            ("class", "button secondary".into()),
            ("href", Route::Conversation(user_id).path().into()),
        ],
        vec!["Message".into()],
    )
}

/// `"{name} — {time}"`, the row format for profile visitors
pub(crate) fn viewer_row(username: &str, viewed_at: &str) -> String {
    format!("{} {} {}", username, DASH, format_timestamp(viewed_at))
}

/// Format an RFC 3339 timestamp in the local time zone.
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// [`format_timestamp`] for an explicit time zone
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(tz).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_timestamp_in_utc() {
        assert_eq!(
            format_timestamp_in("2024-05-01T10:00:00Z", &Utc),
            "5/1/2024, 10:00:00 AM"
        );
        assert_eq!(
            format_timestamp_in("2024-12-31T23:05:09.123456+00:00", &Utc),
            "12/31/2024, 11:05:09 PM"
        );
    }

    #[test]
    fn test_format_timestamp_converts_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_timestamp_in("2024-05-01T23:30:00Z", &tz),
            "5/2/2024, 1:30:00 AM"
        );
    }

    #[test]
    fn test_format_timestamp_keeps_unparseable_input() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "—");
        assert_eq!(or_dash(Some("")), "—");
        assert_eq!(or_dash(Some("Acme")), "Acme");
    }

    #[test]
    fn test_state_nodes() {
        assert_eq!(ViewState::Loading.into_nodes(), vec![Node::text("Loading...")]);

        let nodes = ViewState::Error("Request failed".to_string()).into_nodes();
        assert_eq!(nodes.len(), 1);
        let el = nodes[0].as_element().unwrap();
        assert!(el.has_class("card"));
        assert_eq!(el.text_content(), "Request failed");
    }

    #[test]
    fn test_status_badge_classes() {
        let badge = status_badge(RequestStatus::Rejected);
        let el = badge.as_element().unwrap();
        assert!(el.has_class("badge"));
        assert!(el.has_class("badge-rejected"));
        assert_eq!(el.text_content(), "Rejected");
    }
}

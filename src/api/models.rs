//! Wire types
//!
//! Shapes of the JSON bodies exchanged with the backend. Optional text
//! fields are `Option<String>` because the server sends blanks, nulls or
//! omits them depending on the endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::session::Role;

/// Account summary embedded in profiles and requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<Role>,
}

/// A user's public profile.
///
/// Which of the role-specific fields matter depends on `user.role`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user: UserSummary,
    #[serde(default)]
    pub bio: Option<String>,

    // Entrepreneur
    #[serde(default)]
    pub startup_name: Option<String>,
    #[serde(default)]
    pub startup_description: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub funding_need: Option<String>,
    #[serde(default)]
    pub pitch_deck_url: Option<String>,

    // Investor
    #[serde(default)]
    pub investment_interests: Option<String>,
    #[serde(default)]
    pub portfolio_companies: Option<String>,

    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub last_viewed_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recent_viewers: Vec<RecentViewer>,
}

/// Someone who recently opened a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentViewer {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    pub viewed_at: String,
}

/// Lifecycle of a collaboration request.
///
/// `Pending` moves to `Accepted` or `Rejected`; both are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }

    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        *self == RequestStatus::Pending && next.is_terminal()
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "badge-pending",
            RequestStatus::Accepted => "badge-accepted",
            RequestStatus::Rejected => "badge-rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposal from an investor to an entrepreneur
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationRequest {
    pub id: u64,
    pub investor: UserSummary,
    pub entrepreneur: UserSummary,
    #[serde(default)]
    pub message: Option<String>,
    pub status: RequestStatus,
    #[serde(default, deserialize_with = "lenient_role")]
    pub initiated_by: Option<Role>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Token issued by register and login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<Role>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRequest {
    pub entrepreneur_id: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
}

/// One recorded visit to the signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: u64,
    pub viewer_id: u64,
    pub viewer_username: String,
    pub viewed_at: String,
    #[serde(default)]
    pub seen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileViews {
    #[serde(default)]
    pub views: Vec<ProfileView>,
    #[serde(default)]
    pub unseen_count: u64,
}

/// One chat message. The chat endpoints send ids as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "text_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub sender_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
    /// Sent by the signed-in user
    #[serde(default)]
    pub is_me: bool,
}

/// The other side of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPartner {
    #[serde(default, deserialize_with = "text_or_number")]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Messages between the signed-in user and one other user, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistory {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<ChatMessage>,
    pub other_user: ChatPartner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnreadCount {
    #[serde(default)]
    pub unread: u64,
}

/// Unread messages keyed by sender id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnreadByUser {
    #[serde(default)]
    pub by_user: BTreeMap<String, u64>,
    #[serde(default)]
    pub total: u64,
}

impl UnreadByUser {
    /// `(sender id, count)` pairs in ascending id order. Keys that are not
    /// numeric ids are skipped.
    pub fn senders(&self) -> Vec<(u64, u64)> {
        let mut senders: Vec<(u64, u64)> = self
            .by_user
            .iter()
            .filter_map(|(id, count)| id.parse().ok().map(|id| (id, *count)))
            .collect();
        senders.sort_unstable();
        senders
    }
}

/// Whether a user has been active recently
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub last_active: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub recipient_id: u64,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRead {
    pub other_user_id: u64,
}

/// Decimal fields arrive as strings from some serializers and as numbers
/// from others
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accounts created outside the sign-up flow may carry a blank role; any
/// unrecognised value decodes as no role
fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|r| r.parse().ok()))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

//! Typed endpoint calls

use serde_json::Value;

use super::models::{
    AuthResponse, ChatHistory, CollaborationRequest, ConversationRead, LoginPayload, NewMessage,
    NewRequest, Presence, Profile, ProfileViews, RegisterPayload, RequestStatus, StatusUpdate,
    UnreadByUser, UnreadCount,
};
use crate::actions::FormFields;
use crate::http::{ApiClient, ApiResult};

pub const PATH_REGISTER: &str = "/auth/register/";
pub const PATH_LOGIN: &str = "/auth/login/";
pub const PATH_ENTREPRENEURS: &str = "/api/entrepreneurs/";
pub const PATH_INVESTORS: &str = "/api/investors/";
pub const PATH_REQUESTS: &str = "/api/requests/";
pub const PATH_SEND_REQUEST: &str = "/api/request/";
pub const PATH_PROFILE: &str = "/api/profile/";
pub const PATH_PROFILE_VIEWS: &str = "/api/profile-views/";
pub const PATH_PROFILE_VIEWS_SEEN: &str = "/api/profile-views/seen/";
pub const PATH_CHAT_MESSAGES: &str = "/chat/api/messages/";
pub const PATH_CHAT_SEND: &str = "/chat/api/messages/send/";
pub const PATH_CHAT_UNREAD: &str = "/chat/api/messages/unread-count/";
pub const PATH_CHAT_UNREAD_BY_USER: &str = "/chat/api/messages/unread-by-user/";
pub const PATH_CHAT_MARK_READ: &str = "/chat/api/messages/mark-read/";
pub const PATH_CHAT_PRESENCE: &str = "/chat/api/presence/";

impl ApiClient {
    pub async fn register(&self, payload: &RegisterPayload) -> ApiResult<AuthResponse> {
        self.post_anonymous(PATH_REGISTER, payload).await
    }

    pub async fn login(&self, payload: &LoginPayload) -> ApiResult<AuthResponse> {
        self.post_anonymous(PATH_LOGIN, payload).await
    }

    pub async fn entrepreneurs(&self) -> ApiResult<Vec<Profile>> {
        self.get(PATH_ENTREPRENEURS).await
    }

    pub async fn investors(&self) -> ApiResult<Vec<Profile>> {
        self.get(PATH_INVESTORS).await
    }

    pub async fn requests(&self) -> ApiResult<Vec<CollaborationRequest>> {
        self.get(PATH_REQUESTS).await
    }

    pub async fn send_request(&self, entrepreneur_id: u64, message: &str) -> ApiResult<Value> {
        let body = NewRequest {
            entrepreneur_id,
            message: message.to_string(),
        };
        self.post(PATH_SEND_REQUEST, &body).await
    }

    pub async fn update_request(&self, id: u64, status: RequestStatus) -> ApiResult<Value> {
        let path = format!("{}{}/", PATH_SEND_REQUEST, id);
        self.patch(&path, &StatusUpdate { status }).await
    }

    pub async fn profile(&self, user_id: u64) -> ApiResult<Profile> {
        let path = format!("{}{}/", PATH_PROFILE, user_id);
        self.get(&path).await
    }

    /// Full replace of the signed-in user's profile with the given fields
    pub async fn update_profile(&self, fields: &FormFields) -> ApiResult<Value> {
        self.put(PATH_PROFILE, fields).await
    }

    pub async fn profile_views(&self) -> ApiResult<ProfileViews> {
        self.get(PATH_PROFILE_VIEWS).await
    }

    pub async fn mark_profile_views_seen(&self) -> ApiResult<Value> {
        self.post(PATH_PROFILE_VIEWS_SEEN, &serde_json::json!({})).await
    }

    pub async fn chat_history(&self, user_id: u64) -> ApiResult<ChatHistory> {
        let path = format!("{}{}/", PATH_CHAT_MESSAGES, user_id);
        self.get(&path).await
    }

    pub async fn send_message(&self, recipient_id: u64, content: &str) -> ApiResult<Value> {
        let body = NewMessage {
            recipient_id,
            content: content.to_string(),
        };
        self.post(PATH_CHAT_SEND, &body).await
    }

    pub async fn unread_count(&self) -> ApiResult<UnreadCount> {
        self.get(PATH_CHAT_UNREAD).await
    }

    pub async fn unread_by_user(&self) -> ApiResult<UnreadByUser> {
        self.get(PATH_CHAT_UNREAD_BY_USER).await
    }

    /// Mark everything `other_user_id` sent to the signed-in user as read
    pub async fn mark_conversation_read(&self, other_user_id: u64) -> ApiResult<Value> {
        self.post(PATH_CHAT_MARK_READ, &ConversationRead { other_user_id }).await
    }

    pub async fn presence(&self, user_id: u64) -> ApiResult<Presence> {
        let path = format!("{}?user_id={}", PATH_CHAT_PRESENCE, user_id);
        self.get(&path).await
    }
}

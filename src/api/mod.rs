//! Business Nexus API
//!
//! Wire types and typed calls for the backend's JSON endpoints.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /auth/register/` - Create an account, returns a token
//! - `POST /auth/login/` - Exchange credentials for a token
//!
//! ## Directory
//! - `GET /api/entrepreneurs/` - Entrepreneur profiles
//! - `GET /api/investors/` - Investor profiles
//!
//! ## Collaboration
//! - `GET /api/requests/` - Requests involving the signed-in user
//! - `POST /api/request/` - Send a request to an entrepreneur
//! - `PATCH /api/request/{id}/` - Accept or reject a request
//!
//! ## Profile
//! - `GET /api/profile/{userId}/` - Profile detail
//! - `PUT /api/profile/` - Replace the signed-in user's profile
//! - `GET /api/profile-views/` - Who viewed the signed-in user's profile
//! - `POST /api/profile-views/seen/` - Mark all views as seen
//!
//! ## Chat
//! - `GET /chat/api/messages/{userId}/` - Conversation history
//! - `POST /chat/api/messages/send/` - Send a message
//! - `GET /chat/api/messages/unread-count/` - Total unread messages
//! - `GET /chat/api/messages/unread-by-user/` - Unread messages per sender
//! - `POST /chat/api/messages/mark-read/` - Mark one conversation as read
//! - `GET /chat/api/presence/?user_id={userId}` - Whether a user is online

mod endpoints;
mod models;

pub use endpoints::{
    PATH_CHAT_MARK_READ, PATH_CHAT_MESSAGES, PATH_CHAT_PRESENCE, PATH_CHAT_SEND,
    PATH_CHAT_UNREAD, PATH_CHAT_UNREAD_BY_USER, PATH_ENTREPRENEURS, PATH_INVESTORS, PATH_LOGIN,
    PATH_PROFILE, PATH_PROFILE_VIEWS, PATH_PROFILE_VIEWS_SEEN, PATH_REGISTER, PATH_REQUESTS,
    PATH_SEND_REQUEST,
};
pub use models::{
    AuthResponse, ChatHistory, ChatMessage, ChatPartner, CollaborationRequest, ConversationRead,
    LoginPayload, NewMessage, NewRequest, Presence, Profile, ProfileView, ProfileViews,
    RecentViewer, RegisterPayload, RequestStatus, StatusUpdate, UnreadByUser, UnreadCount,
    UserSummary,
};

//! # Nexus
//!
//! Client core for the Business Nexus matchmaking service, where investors
//! browse entrepreneurs, send them collaboration requests and chat with
//! them.
//!
//! The crate is platform-neutral: network access, persistent storage,
//! navigation and alert dialogs sit behind small traits, so the same
//! guards, loaders and actions drive both the browser app (`nexus-ui`) and
//! the `nexus` command-line tool.
//!
//! ## Modules
//!
//! - [`http`]: JSON API client with bearer auth and `detail` error extraction
//! - [`api`]: wire types and typed endpoint calls
//! - [`session`]: persisted token/role/username and the session context
//! - [`guard`]: role-gated access checks
//! - [`dom`]: declarative render tree
//! - [`views`]: per-page loaders (Loading -> Rendered | Error)
//! - [`actions`]: what buttons and forms do when triggered
//! - [`auth`]: registration, login and logout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use nexus::app::{AppContext, Navigator, Notifier};
//! use nexus::http::{BaseUrl, ReqwestTransport};
//! use nexus::routes::Route;
//! use nexus::session::MemoryStore;
//! use nexus::views::{self, Surface, ViewState};
//!
//! struct Stdout;
//!
//! impl Navigator for Stdout {
//!     fn navigate(&self, route: &Route) {
//!         println!("-> {}", route.path());
//!     }
//! }
//!
//! impl Notifier for Stdout {
//!     fn alert(&self, message: &str) {
//!         println!("! {}", message);
//!     }
//! }
//!
//! impl Surface for Stdout {
//!     fn show(&self, state: ViewState) {
//!         println!("{}", nexus::dom::render_text(&state.into_nodes()));
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = AppContext::new(
//!         BaseUrl::from_origin("http:", "localhost", None, 8000),
//!         Rc::new(ReqwestTransport::new()),
//!         Rc::new(MemoryStore::new()),
//!         Rc::new(Stdout),
//!         Rc::new(Stdout),
//!     );
//!
//!     views::entrepreneurs::load(&ctx, &Stdout).await;
//! }
//! ```

pub mod actions;
pub mod api;
pub mod app;
pub mod auth;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod dom;
pub mod guard;
pub mod http;
pub mod routes;
pub mod session;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

// Re-export top-level types for convenience
pub use actions::{dispatch, Action, FormFields, Outcome};

pub use api::{
    AuthResponse, ChatHistory, ChatMessage, CollaborationRequest, Presence, Profile, ProfileView,
    ProfileViews, RecentViewer, RequestStatus, UnreadByUser, UserSummary,
};

pub use app::{AppContext, Navigator, Notifier};

#[cfg(not(target_arch = "wasm32"))]
pub use config::{Config, ConfigError, ConfigSource, LoadedConfig, LoggingConfig};

pub use dom::{build_element, AttrValue, Element, Node};

pub use guard::{require_auth, Access};

pub use http::{ApiClient, ApiError, ApiResult, BaseUrl, HttpRequest, HttpResponse, Method, Transport};

#[cfg(not(target_arch = "wasm32"))]
pub use http::ReqwestTransport;

pub use routes::Route;

pub use session::{MemoryStore, Role, Session, SessionContext, SessionStore, StoreError};

pub use views::{Surface, ViewState};

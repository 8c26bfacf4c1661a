//! Page Components
//!
//! One component per route.

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod messages;
pub mod profile;

pub use auth::{Login, Register};
pub use dashboard::{EntrepreneurDashboard, InvestorDashboard};
pub use home::Home;
pub use messages::{ConversationPage, Inbox};
pub use profile::{EditProfile, ProfilePage, ProfileViews};

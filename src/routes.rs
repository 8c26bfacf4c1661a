//! Navigation targets

use crate::session::Role;

/// Pages the client can send the user to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    InvestorDashboard,
    EntrepreneurDashboard,
    Profile(u64),
    EditProfile,
    ProfileViews,
    Messages,
    Conversation(u64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login/".to_string(),
            Route::Register => "/register/".to_string(),
            Route::InvestorDashboard => "/dashboard_investor/".to_string(),
            Route::EntrepreneurDashboard => "/dashboard_entrepreneur/".to_string(),
            Route::Profile(id) => format!("/profile/{}/", id),
            Route::EditProfile => "/profile/edit/".to_string(),
            Route::ProfileViews => "/profile_views/".to_string(),
            Route::Messages => "/messages/".to_string(),
            Route::Conversation(id) => format!("/messages/{}/", id),
        }
    }

    /// Landing page after sign-in.
    ///
    /// Anything that is not an investor lands on the entrepreneur dashboard.
    pub fn dashboard_for(role: Option<Role>) -> Self {
        match role {
            Some(Role::Investor) => Route::InvestorDashboard,
            _ => Route::EntrepreneurDashboard,
        }
    }
}

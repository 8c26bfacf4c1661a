//! App Root Component
//!
//! Routing plus the application context every page reads.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{
    ConversationPage, EditProfile, EntrepreneurDashboard, Home, Inbox, InvestorDashboard, Login,
    ProfilePage, ProfileViews, Register,
};
use crate::platform;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(platform::build_context());

    view! {
        <Router>
            <div class="app">
                <Nav />

                <main class="container">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/login" view=Login />
                        <Route path="/register" view=Register />
                        <Route path="/dashboard_investor" view=InvestorDashboard />
                        <Route path="/dashboard_entrepreneur" view=EntrepreneurDashboard />
                        // Literal segment first so "edit" is never read as an id
                        <Route path="/profile/edit" view=EditProfile />
                        <Route path="/profile/:id" view=ProfilePage />
                        <Route path="/profile_views" view=ProfileViews />
                        <Route path="/messages" view=Inbox />
                        <Route path="/messages/:id" view=ConversationPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" class="button">"Go Home"</A>
        </div>
    }
}

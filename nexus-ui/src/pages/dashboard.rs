//! Dashboard Pages
//!
//! Each dashboard checks access once, then mounts two independently
//! reloading regions.

use leptos::*;

use nexus::app::AppContext;
use nexus::guard::require_auth;
use nexus::session::Role;
use nexus::views;

use crate::components::{loader, ViewRegion};

/// Entrepreneur directory plus the investor's sent requests
#[component]
pub fn InvestorDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not provided");
    if !require_auth(&ctx, Some(Role::Investor)) {
        return view! {}.into_view();
    }

    view! {
        <section>
            <h2>"Entrepreneurs"</h2>
            <ViewRegion
                id="entrepreneurList"
                loader=loader(|ctx, region| async move {
                    views::entrepreneurs::refresh(&ctx, &*region).await
                })
            />
        </section>
        <section>
            <h2>"My Requests"</h2>
            <ViewRegion
                id="myRequests"
                loader=loader(|ctx, region| async move {
                    views::outgoing::refresh(&ctx, &*region).await
                })
            />
        </section>
    }
    .into_view()
}

/// Incoming requests plus the investor directory
#[component]
pub fn EntrepreneurDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not provided");
    if !require_auth(&ctx, Some(Role::Entrepreneur)) {
        return view! {}.into_view();
    }

    view! {
        <section>
            <h2>"Collaboration Requests"</h2>
            <ViewRegion
                id="requestsList"
                loader=loader(|ctx, region| async move {
                    views::incoming::refresh(&ctx, &*region).await
                })
            />
        </section>
        <section>
            <h2>"Investors"</h2>
            <ViewRegion
                id="investorList"
                loader=loader(|ctx, region| async move {
                    views::investors::refresh(&ctx, &*region).await
                })
            />
        </section>
    }
    .into_view()
}

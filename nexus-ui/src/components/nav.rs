//! Navigation Component
//!
//! Header bar whose links follow the signed-in role.

use leptos::*;
use leptos_router::*;

use nexus::app::AppContext;
use nexus::routes::Route;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not provided");
    let session = ctx.session.current();

    let links = if session.is_authenticated() {
        let dashboard = Route::dashboard_for(session.role).path();
        let username = session.username.unwrap_or_default();

        let unread = create_rw_signal(0u64);
        let client = ctx.client.clone();
        spawn_local(async move {
            match client.unread_count().await {
                Ok(count) => unread.set(count.unread),
                Err(e) => logging::warn!("Unread count unavailable: {}", e),
            }
        });

        let logout = move |_| nexus::auth::logout(&ctx);

        view! {
            <NavLink href=dashboard label="Dashboard" />
            <NavLink href={Route::ProfileViews.path()} label="Profile Views" />
            <NavLink href={Route::EditProfile.path()} label="Edit Profile" />
            <A href={Route::Messages.path()} class="nav-link" active_class="active">
                "Messages"
                <Show when=move || { unread.get() > 0 }>
                    <span class="badge badge-pending">{move || unread.get()}</span>
                </Show>
            </A>
            <span class="nav-user">{username}</span>
            <button class="button secondary" on:click=logout>"Logout"</button>
        }
        .into_view()
    } else {
        view! {
            <NavLink href={Route::Login.path()} label="Login" />
            <NavLink href={Route::Register.path()} label="Register" />
        }
        .into_view()
    };

    view! {
        <nav class="nav">
            <A href="/" class="brand">"Business Nexus"</A>
            <div class="nav-links">{links}</div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(#[prop(into)] href: String, label: &'static str) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="active">
            {label}
        </A>
    }
}

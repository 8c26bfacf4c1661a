//! Home Page

use leptos::*;
use leptos_router::*;

use nexus::app::AppContext;
use nexus::routes::Route;

/// Landing page; signed-in users get a link to their dashboard
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not provided");
    let session = ctx.session.current();

    let next = if session.is_authenticated() {
        let dashboard = Route::dashboard_for(session.role).path();
        view! {
            <A href=dashboard class="button">"Go to Dashboard"</A>
        }
        .into_view()
    } else {
        view! {
            <A href={Route::Login.path()} class="button">"Login"</A>
            " "
            <A href={Route::Register.path()} class="button secondary">"Register"</A>
        }
        .into_view()
    };

    view! {
        <div class="card hero">
            <h1>"Business Nexus"</h1>
            <p>"Where investors meet the entrepreneurs worth backing."</p>
            {next}
        </div>
    }
}

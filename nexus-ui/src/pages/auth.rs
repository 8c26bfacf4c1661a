//! Login and Registration Pages
//!
//! Plain forms over `nexus::auth`; on success the core navigates to the
//! role's dashboard, on failure it alerts the server's message.

use leptos::*;
use leptos_router::*;

use nexus::api::{LoginPayload, RegisterPayload};
use nexus::app::AppContext;
use nexus::routes::Route;
use nexus::session::Role;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not provided");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let ctx = ctx.clone();
        let payload = LoginPayload {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            nexus::auth::login(&ctx, &payload).await;
        });
    };

    view! {
        <div class="card auth">
            <h2>"Login"</h2>
            <form id="loginForm" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        name="email"
                        required=true
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        name="password"
                        required=true
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button class="button" type="submit">"Login"</button>
            </form>
            <p>
                "No account yet? "
                <A href={Route::Register.path()}>"Register"</A>
            </p>
        </div>
    }
}

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not provided");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal(Role::Investor.as_str().to_string());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let ctx = ctx.clone();
        let payload = RegisterPayload {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked().parse().unwrap_or(Role::Investor),
        };
        spawn_local(async move {
            nexus::auth::register(&ctx, &payload).await;
        });
    };

    view! {
        <div class="card auth">
            <h2>"Register"</h2>
            <form id="registerForm" on:submit=on_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        name="username"
                        required=true
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        name="email"
                        required=true
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        name="password"
                        required=true
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Role"
                    <select name="role" on:change=move |ev| set_role.set(event_target_value(&ev))>
                        <option value={Role::Investor.as_str()} selected=true>"Investor"</option>
                        <option value={Role::Entrepreneur.as_str()}>"Entrepreneur"</option>
                    </select>
                </label>
                <button class="button" type="submit">"Register"</button>
            </form>
            <p>
                "Already registered? "
                <A href={Route::Login.path()}>"Login"</A>
            </p>
        </div>
    }
}

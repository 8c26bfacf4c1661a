//! Messaging Pages

use leptos::*;
use leptos_router::*;

use nexus::views;

use crate::components::{loader, ViewRegion};

/// Unread messages per sender
#[component]
pub fn Inbox() -> impl IntoView {
    view! {
        <ViewRegion
            id="inbox"
            loader=loader(|ctx, region| async move {
                views::messages::load(&ctx, &*region).await
            })
        />
    }
}

/// Conversation with the user in the `:id` route segment
#[component]
pub fn ConversationPage() -> impl IntoView {
    let params = use_params_map();
    let user_id = params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()));

    match user_id {
        Some(user_id) => view! {
            <ViewRegion
                id="conversation"
                loader=loader(move |ctx, region| async move {
                    views::conversation::load(&ctx, &*region, user_id).await
                })
            />
        }
        .into_view(),
        None => view! { <div class="card">"Conversation not found"</div> }.into_view(),
    }
}

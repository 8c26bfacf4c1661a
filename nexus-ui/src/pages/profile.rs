//! Profile Pages

use leptos::*;
use leptos_router::*;

use nexus::views;

use crate::components::{loader, ViewRegion};

/// A user's public profile, by the `:id` route segment
#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let user_id = params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()));

    match user_id {
        Some(user_id) => view! {
            <ViewRegion
                id="profileDetails"
                loader=loader(move |ctx, region| async move {
                    views::profile::load(&ctx, &*region, user_id).await
                })
            />
        }
        .into_view(),
        None => view! { <div class="card">"Profile not found"</div> }.into_view(),
    }
}

/// Form for the signed-in user's own profile
#[component]
pub fn EditProfile() -> impl IntoView {
    view! {
        <h2>"Edit Profile"</h2>
        <ViewRegion
            id="editProfile"
            loader=loader(|ctx, region| async move {
                views::edit_profile::load(&ctx, &*region).await
            })
        />
    }
}

/// Who viewed the signed-in user's profile
#[component]
pub fn ProfileViews() -> impl IntoView {
    view! {
        <ViewRegion
            id="profileViews"
            loader=loader(|ctx, region| async move {
                views::profile_views::load(&ctx, &*region).await
            })
        />
    }
}

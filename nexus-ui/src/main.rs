//! Business Nexus Web App
//!
//! Browser front end for the investor/entrepreneur matchmaking service,
//! built with Leptos (WASM).
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos shell around the `nexus` client
//! core. Routing, forms and the nav bar are Leptos components; the data
//! pages are core view loaders rendered into mounted regions (see
//! [`components::region`]). The session lives in `localStorage`.

use leptos::*;

mod app;
mod components;
mod pages;
mod platform;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

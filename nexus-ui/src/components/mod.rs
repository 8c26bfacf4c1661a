//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod nav;
pub mod region;

pub use nav::Nav;
pub use region::{loader, ViewRegion};

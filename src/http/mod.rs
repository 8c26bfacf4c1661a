//! HTTP Client
//!
//! JSON request/response plumbing for the Business Nexus API.
//!
//! ## Architecture
//!
//! - **Transport**: one outbound request in, status + body out. The native
//!   build uses reqwest; the browser app plugs in a fetch-based transport.
//! - **ApiClient**: resolves paths against the [`BaseUrl`], attaches the
//!   bearer token, serializes JSON bodies and turns non-success statuses
//!   into [`ApiError`]s carrying the server's `detail` message.
//!
//! Every call is a single round trip: no retries, no timeout, no caching.

mod base_url;
mod client;
mod error;
#[cfg(not(target_arch = "wasm32"))]
mod reqwest_transport;
mod transport;

pub use base_url::{BaseUrl, DEFAULT_API_PORT};
pub use client::ApiClient;
pub use error::{ApiError, ApiResult, GENERIC_FAILURE};
#[cfg(not(target_arch = "wasm32"))]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

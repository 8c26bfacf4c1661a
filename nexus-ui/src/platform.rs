//! Browser Platform
//!
//! Browser implementations of the client core's seams: fetch transport,
//! `localStorage` session store, `window.location` navigation and
//! `window.alert` notifications.

use async_trait::async_trait;
use gloo_net::http::Request;
use std::rc::Rc;

use nexus::app::{AppContext, Navigator, Notifier};
use nexus::http::{BaseUrl, HttpRequest, HttpResponse, Method, Transport, TransportError, DEFAULT_API_PORT};
use nexus::routes::Route;
use nexus::session::{SessionStore, StoreError};

/// Transport over the browser's fetch API
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("Request build error: {}", e)))?;

        let response = built
            .send()
            .await
            .map_err(|e| TransportError(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Network error: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

/// Session store over `window.localStorage`
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

/// Full page navigation; the next page re-reads the session on start-up
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &Route) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&route.path()) {
                web_sys::console::error_1(&e);
            }
        }
    }
}

/// Blocking `alert()` dialogs
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                web_sys::console::error_1(&e);
            }
        }
    }
}

/// API base derived from the page's own origin
pub fn page_base_url() -> BaseUrl {
    let location = web_sys::window().map(|w| w.location());
    let part = |f: fn(&web_sys::Location) -> Result<String, wasm_bindgen::JsValue>| {
        location.as_ref().and_then(|l| f(l).ok()).unwrap_or_default()
    };

    let protocol = part(web_sys::Location::protocol);
    let hostname = part(web_sys::Location::hostname);
    let port = part(web_sys::Location::port);

    BaseUrl::from_origin(&protocol, &hostname, Some(port.as_str()), DEFAULT_API_PORT)
}

/// Application context wired to the browser, built once at start-up
pub fn build_context() -> AppContext {
    AppContext::new(
        page_base_url(),
        Rc::new(GlooTransport),
        Rc::new(LocalStorage),
        Rc::new(BrowserNavigator),
        Rc::new(AlertNotifier),
    )
}

//! Application Context
//!
//! Everything a view, action or form needs, resolved once at start-up and
//! passed explicitly instead of read from globals.

use std::rc::Rc;

use crate::http::{ApiClient, BaseUrl, Transport};
use crate::routes::Route;
use crate::session::{SessionContext, SessionStore};

/// Moves the user to another page
pub trait Navigator {
    fn navigate(&self, route: &Route);
}

/// Shows a blocking message to the user
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub session: SessionContext,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
}

impl AppContext {
    pub fn new(
        base: BaseUrl,
        transport: Rc<dyn Transport>,
        store: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let session = SessionContext::load(store);
        let client = ApiClient::new(base, transport, session.clone());

        Self {
            client,
            session,
            navigator,
            notifier,
        }
    }

    pub fn navigate(&self, route: Route) {
        tracing::debug!(path = %route.path(), "Navigating");
        self.navigator.navigate(&route);
    }

    pub fn alert(&self, message: &str) {
        self.notifier.alert(message);
    }
}

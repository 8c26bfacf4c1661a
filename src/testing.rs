//! In-crate test doubles for the platform seams

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::app::{AppContext, Navigator, Notifier};
use crate::http::{BaseUrl, HttpRequest, HttpResponse, Transport, TransportError};
use crate::routes::Route;
use crate::session::{MemoryStore, Role, ROLE_KEY, TOKEN_KEY, USERNAME_KEY};
use crate::views::{Surface, ViewState};

/// Transport replaying queued responses and recording every request
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.push(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn last_json_body(&self) -> serde_json::Value {
        self.last_request()
            .and_then(|r| r.body)
            .and_then(|b| serde_json::from_str(&b).ok())
            .unwrap_or(serde_json::Value::Null)
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".to_string())))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.routes.borrow_mut().push(route.clone());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Surface remembering every state shown, in order
#[derive(Default)]
pub struct RecordingSurface {
    states: RefCell<Vec<ViewState>>,
}

impl RecordingSurface {
    pub fn states(&self) -> Vec<ViewState> {
        self.states.borrow().clone()
    }

    pub fn last(&self) -> Option<ViewState> {
        self.states.borrow().last().cloned()
    }

    /// Nodes of the final `Rendered` state; panics otherwise
    pub fn rendered(&self) -> Vec<crate::dom::Node> {
        match self.last() {
            Some(ViewState::Rendered(nodes)) => nodes,
            other => panic!("expected a rendered view, got {:?}", other),
        }
    }
}

impl Surface for RecordingSurface {
    fn show(&self, state: ViewState) {
        self.states.borrow_mut().push(state);
    }
}

/// An [`AppContext`] wired to recording doubles
pub struct TestApp {
    pub ctx: AppContext,
    pub transport: Rc<FakeTransport>,
    pub store: Rc<MemoryStore>,
    pub navigator: Rc<RecordingNavigator>,
    pub notifier: Rc<RecordingNotifier>,
}

impl TestApp {
    fn with_store(store: MemoryStore) -> Self {
        let transport = Rc::new(FakeTransport::new());
        let store = Rc::new(store);
        let navigator = Rc::new(RecordingNavigator::default());
        let notifier = Rc::new(RecordingNotifier::default());

        let ctx = AppContext::new(
            BaseUrl::from_origin("http:", "localhost", Some("8000"), 8000),
            transport.clone(),
            store.clone(),
            navigator.clone(),
            notifier.clone(),
        );

        Self {
            ctx,
            transport,
            store,
            navigator,
            notifier,
        }
    }

    pub fn signed_out() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn signed_in(role: Role) -> Self {
        Self::with_store(MemoryStore::with_entries([
            (TOKEN_KEY, "tok"),
            (ROLE_KEY, role.as_str()),
            (USERNAME_KEY, "tester"),
        ]))
    }
}

//! Shared session context

use std::cell::RefCell;
use std::rc::Rc;

use super::store::{SessionStore, StoreError};
use super::{Role, Session};

/// The current session, read from the store once and refreshed on
/// sign-in/sign-out.
///
/// Cloning is cheap and every clone observes the same state.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
    current: Rc<RefCell<Session>>,
}

impl SessionContext {
    /// Populate the context from whatever the store already holds
    pub fn load(store: Rc<dyn SessionStore>) -> Self {
        let session = Session::load(store.as_ref());
        Self {
            store,
            current: Rc::new(RefCell::new(session)),
        }
    }

    pub fn current(&self) -> Session {
        self.current.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.borrow().role
    }

    pub fn username(&self) -> Option<String> {
        self.current.borrow().username.clone()
    }

    /// Re-read the store, picking up changes made elsewhere
    pub fn refresh(&self) {
        *self.current.borrow_mut() = Session::load(self.store.as_ref());
    }

    /// Persist a freshly issued session and make it current.
    ///
    /// The in-memory session is updated even if the store write fails.
    pub fn sign_in(&self, session: Session) -> Result<(), StoreError> {
        let result = session.persist(self.store.as_ref());
        *self.current.borrow_mut() = session;
        result
    }

    /// Forget the session both in memory and in the store
    pub fn sign_out(&self) -> Result<(), StoreError> {
        let result = Session::clear(self.store.as_ref());
        *self.current.borrow_mut() = Session::default();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStore, TOKEN_KEY};

    fn signed_in() -> Session {
        Session {
            token: Some("t1".to_string()),
            role: Some(Role::Entrepreneur),
            username: Some("ent".to_string()),
        }
    }

    #[test]
    fn test_sign_in_updates_store_and_clones() {
        let store = Rc::new(MemoryStore::new());
        let ctx = SessionContext::load(store.clone());
        let other = ctx.clone();

        ctx.sign_in(signed_in()).unwrap();

        assert_eq!(other.token().as_deref(), Some("t1"));
        assert_eq!(other.role(), Some(Role::Entrepreneur));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let store = Rc::new(MemoryStore::new());
        let ctx = SessionContext::load(store.clone());
        ctx.sign_in(signed_in()).unwrap();

        ctx.sign_out().unwrap();

        assert_eq!(ctx.current(), Session::default());
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_refresh_picks_up_external_writes() {
        let store = Rc::new(MemoryStore::new());
        let ctx = SessionContext::load(store.clone());
        assert_eq!(ctx.token(), None);

        store.set(TOKEN_KEY, "later").unwrap();
        assert_eq!(ctx.token(), None);

        ctx.refresh();
        assert_eq!(ctx.token().as_deref(), Some("later"));
    }
}

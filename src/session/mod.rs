//! Session State
//!
//! The signed-in user's bearer token, role and username, persisted in a
//! key/value store so they survive reloads.
//!
//! ## Architecture
//!
//! - **SessionStore**: key/value contract over `token`, `role`, `username`
//! - **MemoryStore**: in-process store (tests, one-shot runs)
//! - **FileStore**: TOML file on disk (native CLI)
//! - **SessionContext**: the session read once at start-up, refreshed on
//!   sign-in and sign-out, and shared by the client, guard and views

mod context;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod store;

pub use context::SessionContext;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use store::{MemoryStore, SessionStore, StoreError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key for the bearer credential
pub const TOKEN_KEY: &str = "token";
/// Storage key for the user's role
pub const ROLE_KEY: &str = "role";
/// Storage key for the display name
pub const USERNAME_KEY: &str = "username";

/// Account role, fixed at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Investor,
    Entrepreneur,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Investor => "investor",
            Role::Entrepreneur => "entrepreneur",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "investor" => Ok(Role::Investor),
            "entrepreneur" => Ok(Role::Entrepreneur),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// What the client remembers about the signed-in user.
///
/// A present token means the user counts as authenticated; expiry is only
/// discovered when the server rejects a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub username: Option<String>,
}

impl Session {
    /// Read the three session keys from a store.
    ///
    /// An unrecognised role string is treated as no role, which keeps
    /// role-gated views closed.
    pub fn load(store: &dyn SessionStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let role = store.get(ROLE_KEY).and_then(|r| r.parse().ok());
        let username = store.get(USERNAME_KEY);

        Self {
            token,
            role,
            username,
        }
    }

    /// Write all three keys; absent values are removed.
    pub fn persist(&self, store: &dyn SessionStore) -> Result<(), StoreError> {
        write_key(store, TOKEN_KEY, self.token.as_deref())?;
        write_key(store, ROLE_KEY, self.role.map(|r| r.as_str()))?;
        write_key(store, USERNAME_KEY, self.username.as_deref())?;
        Ok(())
    }

    /// Remove all three keys from a store
    pub fn clear(store: &dyn SessionStore) -> Result<(), StoreError> {
        store.remove(TOKEN_KEY)?;
        store.remove(ROLE_KEY)?;
        store.remove(USERNAME_KEY)?;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

fn write_key(store: &dyn SessionStore, key: &str, value: Option<&str>) -> Result<(), StoreError> {
    match value {
        Some(v) => store.set(key, v),
        None => store.remove(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("investor".parse::<Role>().unwrap(), Role::Investor);
        assert_eq!("entrepreneur".parse::<Role>().unwrap(), Role::Entrepreneur);
        assert!("admin".parse::<Role>().is_err());
        assert_eq!(Role::Entrepreneur.to_string(), "entrepreneur");
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Investor).unwrap();
        assert_eq!(json, "\"investor\"");
        let role: Role = serde_json::from_str("\"entrepreneur\"").unwrap();
        assert_eq!(role, Role::Entrepreneur);
    }

    #[test]
    fn test_session_persist_and_load() {
        let store = MemoryStore::new();
        let session = Session {
            token: Some("t1".to_string()),
            role: Some(Role::Investor),
            username: Some("inv".to_string()),
        };
        session.persist(&store).unwrap();

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("investor"));
        assert_eq!(Session::load(&store), session);
    }

    #[test]
    fn test_unknown_role_loads_as_none() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "t1").unwrap();
        store.set(ROLE_KEY, "admin").unwrap();

        let session = Session::load(&store);
        assert!(session.is_authenticated());
        assert_eq!(session.role, None);
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "").unwrap();
        assert!(!Session::load(&store).is_authenticated());
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY, "t1"),
            (ROLE_KEY, "entrepreneur"),
            (USERNAME_KEY, "ent"),
        ]);
        Session::clear(&store).unwrap();
        assert_eq!(Session::load(&store), Session::default());
    }
}

//! Application state and its persistence.
//!
//! `AppState` is the single owner of the mutable data: users, the completion
//! record and the connection list. It is passed explicitly to whatever needs
//! it and writes every change straight through to its `StateStore`.

use crate::catalog::Flow;
use crate::completion::{self, CompletionRecord};
use crate::connection::Connection;
use crate::error::{AccountError, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

mod accounts;
mod backend;
mod file;

pub use accounts::{NewUser, Role, User};
pub use backend::{MemoryStore, StateStore, StoreKey};
pub use file::JsonFileStore;

pub struct AppState {
    store: Box<dyn StateStore>,
    users: Vec<User>,
    session_user_id: Option<String>,
    completed: CompletionRecord,
    connections: Vec<Connection>,
}

/// Reads one entry, falling back to the default on any failure.
fn load_entry<T>(store: &dyn StateStore, key: StoreKey) -> T
where
    T: DeserializeOwned + Default,
{
    match store.read(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Store entry '{}' is malformed, using an empty default: {}", key, e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("{}; using an empty default", e);
            T::default()
        }
    }
}

/// Reads the connection list edge by edge, so one unreadable edge only drops itself.
fn load_connections(store: &dyn StateStore) -> Vec<Connection> {
    let edges: Vec<Value> = load_entry(store, StoreKey::Connections);
    edges
        .into_iter()
        .enumerate()
        .filter_map(|(index, edge)| {
            serde_json::from_value(edge)
                .map_err(|e| log::warn!("Skipping stored connection #{}: {}", index, e))
                .ok()
        })
        .collect()
}

fn persist<T: Serialize + ?Sized>(
    store: &mut dyn StateStore,
    key: StoreKey,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.write(key, &json)
}

impl AppState {
    /// Loads all entries from `store`. Never fails: unreadable or malformed
    /// entries start out empty.
    pub fn load(store: impl StateStore + 'static) -> Self {
        let store: Box<dyn StateStore> = Box::new(store);
        let users = load_entry(store.as_ref(), StoreKey::Users);
        let completed = load_entry(store.as_ref(), StoreKey::Completed);
        let connections = load_connections(store.as_ref());
        Self {
            store,
            users,
            session_user_id: None,
            completed,
            connections,
        }
    }

    pub fn in_memory() -> Self {
        Self::load(MemoryStore::new())
    }

    // --- Connections ---

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Replaces the connection list, as the renderer does on every change.
    ///
    /// The in-memory state is updated even if persisting fails.
    pub fn set_connections(&mut self, connections: Vec<Connection>) -> Result<(), StoreError> {
        self.connections = connections;
        persist(self.store.as_mut(), StoreKey::Connections, &self.connections)
    }

    /// Appends a connection. Duplicates are allowed.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), StoreError> {
        self.connections.push(connection);
        persist(self.store.as_mut(), StoreKey::Connections, &self.connections)
    }

    pub fn clear_connections(&mut self) -> Result<(), StoreError> {
        self.set_connections(Vec::new())
    }

    // --- Completion ---

    pub fn completed(&self) -> &CompletionRecord {
        &self.completed
    }

    /// Merges `ids` into the flow's completed set.
    pub fn mark_completed<I, S>(&mut self, flow: Flow, ids: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed.mark(flow, ids);
        persist(self.store.as_mut(), StoreKey::Completed, &self.completed)
    }

    pub fn reset_completed(&mut self, flow: Flow) -> Result<(), StoreError> {
        self.completed.reset(flow);
        persist(self.store.as_mut(), StoreKey::Completed, &self.completed)
    }

    // --- Users & session ---

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn add_user(&mut self, new_user: NewUser) -> Result<&User, AccountError> {
        let name = new_user.name.trim();
        if name.is_empty() {
            return Err(AccountError::InvalidUser("name must not be empty".to_string()));
        }
        if new_user.secret.is_empty() {
            return Err(AccountError::InvalidUser(
                "password must not be empty".to_string(),
            ));
        }
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            role: new_user.role,
            secret: new_user.secret,
        };
        self.users.push(user);
        persist(self.store.as_mut(), StoreKey::Users, &self.users)?;
        Ok(&self.users[self.users.len() - 1])
    }

    /// Removes a user, ending their session if they are logged in.
    /// Returns whether a user was removed.
    pub fn remove_user(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() == before {
            return Ok(false);
        }
        if self.session_user_id.as_deref() == Some(id) {
            self.session_user_id = None;
        }
        persist(self.store.as_mut(), StoreKey::Users, &self.users)?;
        Ok(true)
    }

    /// Checks the credentials and opens a session. Sessions are never persisted.
    pub fn login(&mut self, id: &str, secret: &str) -> Result<&User, AccountError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AccountError::UserNotFound(id.to_string()))?;
        if self.users[index].secret != secret {
            return Err(AccountError::InvalidSecret);
        }
        self.session_user_id = Some(id.to_string());
        log::info!("User '{}' logged in", self.users[index].name);
        Ok(&self.users[index])
    }

    /// Logs in and applies the login completion preset to the completed record.
    pub fn login_and_complete(&mut self, id: &str, secret: &str) -> Result<(), AccountError> {
        self.login(id, secret)?;
        completion::apply_login_preset(&mut self.completed);
        persist(self.store.as_mut(), StoreKey::Completed, &self.completed)?;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session_user_id = None;
    }

    pub fn session_user(&self) -> Option<&User> {
        self.session_user_id.as_deref().and_then(|id| self.user(id))
    }
}

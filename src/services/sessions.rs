use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::errors::AppError;
use crate::services::conversation::ChatSession;

type SessionHandle = Arc<AsyncMutex<ChatSession>>;

/// Live chat sessions keyed by id. Each session sits behind its own async
/// mutex; holding the guard is the "reply in progress" state.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionHandle>>,
    ttl: chrono::Duration,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: chrono::Duration::minutes(ttl_minutes),
        }
    }

    fn map(&self) -> std::sync::MutexGuard<'_, HashMap<String, SessionHandle>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn insert(&self, session: ChatSession) -> String {
        let expired = self.expire_idle(Utc::now());
        if expired > 0 {
            tracing::info!(expired, "dropped idle chat sessions");
        }

        let id = session.id.clone();
        self.map().insert(id.clone(), Arc::new(AsyncMutex::new(session)));
        id
    }

    /// Claims the session for one processing cycle. Fails with `Busy` while
    /// another cycle holds it.
    pub fn acquire(&self, id: &str) -> Result<OwnedMutexGuard<ChatSession>, AppError> {
        let handle = self.handle(id)?;
        handle.try_lock_owned().map_err(|_| AppError::Busy)
    }

    pub async fn lock(&self, id: &str) -> Result<OwnedMutexGuard<ChatSession>, AppError> {
        let handle = self.handle(id)?;
        Ok(handle.lock_owned().await)
    }

    pub fn remove(&self, id: &str) -> bool {
        self.map().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn expire_idle(&self, now: DateTime<Utc>) -> usize {
        let mut map = self.map();
        let before = map.len();
        // Sessions mid-reply are kept.
        map.retain(|_, handle| match handle.try_lock() {
            Ok(session) => now - session.last_activity <= self.ttl,
            Err(_) => true,
        });
        before - map.len()
    }

    fn handle(&self, id: &str) -> Result<SessionHandle, AppError> {
        self.map()
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("chat session {id}")))
    }
}

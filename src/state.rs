use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::conversation::{Assistant, ChatSession};
use crate::services::identity::IdentityProvider;
use crate::services::phrasing;
use crate::services::rooms::RoomsProvider;
use crate::services::sessions::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    pub assistant: Assistant,
    pub rooms: Arc<dyn RoomsProvider>,
    pub identity: Box<dyn IdentityProvider>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new_session(&self) -> ChatSession {
        self.assistant
            .start_session(phrasing::chooser(self.config.phrasing_seed))
    }
}

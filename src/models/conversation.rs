use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::intent::IntentTag;

pub const MAX_PREVIOUS_QUESTIONS: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationContext {
    pub last_topic: Option<IntentTag>,
    pub user_intent: Option<IntentTag>,
    /// Oldest first, never longer than [`MAX_PREVIOUS_QUESTIONS`].
    pub previous_questions: VecDeque<String>,
}

impl ConversationContext {
    pub fn is_empty(&self) -> bool {
        self.last_topic.is_none()
            && self.user_intent.is_none()
            && self.previous_questions.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickAction {
    pub label: String,
    pub action_id: String,
}

impl QuickAction {
    pub fn new(label: &str, action_id: &str) -> Self {
        Self {
            label: label.to_string(),
            action_id: action_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<QuickAction>,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            is_bot: false,
            timestamp: Utc::now(),
            actions: Vec::new(),
        }
    }

    pub fn bot(text: String, actions: Vec<QuickAction>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            is_bot: true,
            timestamp: Utc::now(),
            actions,
        }
    }
}

/// A bot reply before it is stamped into the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub actions: Vec<QuickAction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub first_name: Option<String>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn guest(first_name: Option<String>) -> Self {
        Self {
            is_authenticated: true,
            first_name: first_name.filter(|n| !n.trim().is_empty()),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        if self.is_authenticated {
            self.first_name.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestedQuestion {
    pub label: String,
    pub query: String,
}

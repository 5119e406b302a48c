use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::{
    AuthState, ConversationContext, HotelConfig, IntentTag, Message, SuggestedQuestion,
    MAX_PREVIOUS_QUESTIONS,
};
use crate::services::actions::{dispatch, DispatchResult};
use crate::services::intent::classify;
use crate::services::phrasing::Choose;
use crate::services::responses::{synthesize, ResponseEnv};
use crate::services::rooms::RoomsProvider;

pub const SUGGESTED_QUESTIONS: &[(&str, &str)] = &[
    ("Room types", "What room types do you have?"),
    ("Room prices", "What are your room prices?"),
    ("Check-in time", "What time is check-in?"),
    ("Location", "Where are you located?"),
];

pub fn canonical_greeting(hotel: &HotelConfig) -> String {
    format!(
        "Hello! I'm your {} assistant. How can I help you today?",
        hotel.name
    )
}

// The topic is overwritten even for fallback classifications.
pub fn update_context(context: &mut ConversationContext, intent: IntentTag, utterance: &str) {
    context.last_topic = Some(intent);
    context.user_intent = Some(intent);
    context.previous_questions.push_back(utterance.to_string());
    while context.previous_questions.len() > MAX_PREVIOUS_QUESTIONS {
        context.previous_questions.pop_front();
    }
}

pub fn reset_context() -> ConversationContext {
    ConversationContext::default()
}

pub struct ChatSession {
    pub id: String,
    pub context: ConversationContext,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    chooser: Box<dyn Choose>,
}

impl ChatSession {
    pub fn new(hotel: &HotelConfig, chooser: Box<dyn Choose>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            context: reset_context(),
            messages: vec![Message::bot(canonical_greeting(hotel), Vec::new())],
            created_at: now,
            last_activity: now,
            chooser,
        }
    }

    /// Empty once the guest has sent anything.
    pub fn suggestions(&self) -> Vec<SuggestedQuestion> {
        if self.messages.len() != 1 {
            return Vec::new();
        }
        SUGGESTED_QUESTIONS
            .iter()
            .map(|(label, query)| SuggestedQuestion {
                label: label.to_string(),
                query: query.to_string(),
            })
            .collect()
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

#[derive(Debug)]
pub enum ActionOutcome {
    Navigate(String),
    Replied(Message),
    Ignored,
}

pub struct Assistant {
    hotel: HotelConfig,
    rooms: Arc<dyn RoomsProvider>,
    fetch_timeout: Duration,
}

impl Assistant {
    pub fn new(
        hotel: HotelConfig,
        rooms: Arc<dyn RoomsProvider>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            hotel,
            rooms,
            fetch_timeout,
        }
    }

    pub fn hotel(&self) -> &HotelConfig {
        &self.hotel
    }

    pub fn start_session(&self, chooser: Box<dyn Choose>) -> ChatSession {
        ChatSession::new(&self.hotel, chooser)
    }

    /// `None` for blank input, which leaves the session untouched.
    pub async fn submit_utterance(
        &self,
        session: &mut ChatSession,
        text: &str,
        auth: &AuthState,
    ) -> Option<Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        session.messages.push(Message::user(text));

        // Synthesis sees the context from before this turn.
        let result = classify(text, &session.context, &self.hotel);
        let prior = session.context.clone();
        update_context(&mut session.context, result.intent, text);

        tracing::info!(
            session = %session.id,
            intent = result.intent.as_str(),
            confidence = result.confidence,
            "classified utterance"
        );

        let env = ResponseEnv {
            hotel: &self.hotel,
            auth,
            today: self.hotel.local_date(Utc::now()),
            rooms: self.rooms.as_ref(),
            fetch_timeout: self.fetch_timeout,
        };
        let reply = synthesize(&result, &prior, &env, session.chooser.as_mut()).await;

        let message = Message::bot(reply.text, reply.actions);
        session.messages.push(message.clone());
        session.touch();
        Some(message)
    }

    pub async fn click_suggestion(
        &self,
        session: &mut ChatSession,
        query: &str,
        auth: &AuthState,
    ) -> Option<Message> {
        self.submit_utterance(session, query, auth).await
    }

    pub async fn click_action(
        &self,
        session: &mut ChatSession,
        action_id: &str,
        auth: &AuthState,
    ) -> ActionOutcome {
        match dispatch(action_id) {
            Some(DispatchResult::Navigate(path)) => {
                tracing::info!(session = %session.id, action_id, path = %path, "navigating away");
                session.touch();
                ActionOutcome::Navigate(path)
            }
            Some(DispatchResult::SyntheticUtterance(text)) => {
                match self.submit_utterance(session, &text, auth).await {
                    Some(message) => ActionOutcome::Replied(message),
                    None => ActionOutcome::Ignored,
                }
            }
            None => ActionOutcome::Ignored,
        }
    }

    pub fn clear_conversation(&self, session: &mut ChatSession) {
        session.context = reset_context();
        session.messages = vec![Message::bot(canonical_greeting(&self.hotel), Vec::new())];
        session.touch();
        tracing::info!(session = %session.id, "conversation cleared");
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::models::RoomRecord;
    use crate::services::phrasing::FixedChoice;

    struct OneRoom;

    #[async_trait]
    impl RoomsProvider for OneRoom {
        async fn fetch_all_rooms(&self) -> anyhow::Result<Vec<RoomRecord>> {
            Ok(vec![RoomRecord {
                id: 1,
                name: "Deluxe Room".to_string(),
                nightly_price: 39999.0,
                capacity_guests: 2,
                is_available: true,
            }])
        }

        async fn set_availability(&self, _room_id: i64, _available: bool) -> anyhow::Result<bool> {
            Ok(true)
        }
    }

    fn assistant() -> Assistant {
        Assistant::new(HotelConfig::default(), Arc::new(OneRoom), Duration::from_secs(1))
    }

    fn session(assistant: &Assistant) -> ChatSession {
        assistant.start_session(Box::new(FixedChoice(0)))
    }

    #[test]
    fn test_update_context_keeps_last_five() {
        let mut ctx = ConversationContext::default();
        for i in 1..=7 {
            update_context(&mut ctx, IntentTag::Help, &format!("q{i}"));
        }
        let kept: Vec<&str> = ctx.previous_questions.iter().map(String::as_str).collect();
        assert_eq!(kept, vec!["q3", "q4", "q5", "q6", "q7"]);
        assert_eq!(ctx.last_topic, Some(IntentTag::Help));
    }

    #[test]
    fn test_update_context_overwrites_on_unknown() {
        let mut ctx = ConversationContext::default();
        update_context(&mut ctx, IntentTag::Parking, "parking?");
        update_context(&mut ctx, IntentTag::Unknown, "tell me a joke");
        assert_eq!(ctx.last_topic, Some(IntentTag::Unknown));
        assert_eq!(ctx.user_intent, Some(IntentTag::Unknown));
    }

    #[test]
    fn test_new_session_has_greeting_and_suggestions() {
        let assistant = assistant();
        let s = session(&assistant);
        assert_eq!(s.messages.len(), 1);
        assert!(s.messages[0].is_bot);
        assert_eq!(
            s.messages[0].text,
            "Hello! I'm your Luxe Hotel Dhaka assistant. How can I help you today?"
        );
        assert!(s.context.is_empty());
        assert_eq!(s.suggestions().len(), 4);
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_bot() {
        let assistant = assistant();
        let mut s = session(&assistant);
        let reply = assistant
            .submit_utterance(&mut s, "What time is check-in?", &AuthState::anonymous())
            .await
            .unwrap();

        assert_eq!(s.messages.len(), 3);
        assert!(!s.messages[1].is_bot);
        assert_eq!(s.messages[1].text, "What time is check-in?");
        assert_eq!(s.messages[2].id, reply.id);
        assert!(reply.text.contains("3:00 PM"));
        assert_eq!(s.context.last_topic, Some(IntentTag::CheckInOut));
        assert!(s.suggestions().is_empty());
    }

    #[tokio::test]
    async fn test_blank_utterance_is_ignored() {
        let assistant = assistant();
        let mut s = session(&assistant);
        assert!(assistant
            .submit_utterance(&mut s, "   ", &AuthState::anonymous())
            .await
            .is_none());
        assert_eq!(s.messages.len(), 1);
        assert!(s.context.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_reads_topic_before_update() {
        let assistant = assistant();
        let mut s = session(&assistant);
        let auth = AuthState::anonymous();
        assistant.submit_utterance(&mut s, "Do you have parking?", &auth).await;
        let reply = assistant
            .submit_utterance(&mut s, "Tell me a joke", &auth)
            .await
            .unwrap();

        assert!(reply.text.contains("parking"));
        assert_eq!(s.context.last_topic, Some(IntentTag::Unknown));
    }

    #[tokio::test]
    async fn test_clear_conversation() {
        let assistant = assistant();
        let mut s = session(&assistant);
        let auth = AuthState::anonymous();
        for text in ["hello", "rooms?", "parking", "wifi"] {
            assistant.submit_utterance(&mut s, text, &auth).await;
        }
        assert!(s.messages.len() > 1);

        assistant.clear_conversation(&mut s);
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].text, canonical_greeting(assistant.hotel()));
        assert!(s.context.is_empty());
        assert_eq!(s.suggestions().len(), 4);
    }

    #[tokio::test]
    async fn test_click_action_navigates_without_message() {
        let assistant = assistant();
        let mut s = session(&assistant);
        let outcome = assistant
            .click_action(&mut s, "rooms", &AuthState::anonymous())
            .await;
        assert!(matches!(outcome, ActionOutcome::Navigate(ref p) if p == "/rooms"));
        assert_eq!(s.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_click_action_replays_canned_question() {
        let assistant = assistant();
        let mut s = session(&assistant);
        let outcome = assistant
            .click_action(&mut s, "availability", &AuthState::anonymous())
            .await;
        let ActionOutcome::Replied(reply) = outcome else {
            panic!("expected a reply");
        };
        assert!(reply.text.contains("Deluxe Room"));
        assert_eq!(s.messages[1].text, "Show me available rooms right now");
        assert_eq!(s.context.last_topic, Some(IntentTag::AvailabilityCheck));
    }

    #[tokio::test]
    async fn test_click_unknown_action_is_noop() {
        let assistant = assistant();
        let mut s = session(&assistant);
        let outcome = assistant
            .click_action(&mut s, "teleport", &AuthState::anonymous())
            .await;
        assert!(matches!(outcome, ActionOutcome::Ignored));
        assert_eq!(s.messages.len(), 1);
        assert!(s.context.is_empty());
    }

    #[tokio::test]
    async fn test_click_suggestion_is_submit() {
        let assistant = assistant();
        let mut s = session(&assistant);
        let reply = assistant
            .click_suggestion(&mut s, "Where are you located?", &AuthState::anonymous())
            .await
            .unwrap();
        assert!(reply.text.contains("Gulshan"));
    }
}

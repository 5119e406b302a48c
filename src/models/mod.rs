pub mod conversation;
pub mod hotel;
pub mod intent;
pub mod room;

pub use conversation::{
    AuthState, ConversationContext, Message, QuickAction, Reply, SuggestedQuestion,
    MAX_PREVIOUS_QUESTIONS,
};
pub use hotel::{HotelConfig, RoomRate};
pub use intent::{EntityBag, IntentResult, IntentTag};
pub use room::RoomRecord;

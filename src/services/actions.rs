use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum DispatchResult {
    Navigate(String),
    SyntheticUtterance(String),
}

enum Target {
    Page(&'static str),
    Ask(&'static str),
}

const ACTION_TABLE: &[(&str, Target)] = &[
    ("rooms", Target::Page("/rooms")),
    ("book", Target::Page("/rooms")),
    ("contact", Target::Page("/contact")),
    ("pet_care", Target::Page("/pet-care")),
    ("my_bookings", Target::Page("/customer")),
    ("sign_in", Target::Page("/customer")),
    ("about", Target::Page("/about")),
    ("availability", Target::Ask("Show me available rooms right now")),
    ("room_types", Target::Ask("What room types do you have?")),
    ("pricing", Target::Ask("What are your room prices?")),
    ("best_deal", Target::Ask("What is your best deal?")),
    ("compare", Target::Ask("Compare the rooms for me")),
    ("amenities", Target::Ask("What amenities and facilities do you have?")),
    ("check_in", Target::Ask("What time is check-in?")),
    ("location", Target::Ask("Where are you located?")),
    ("parking", Target::Ask("Do you have parking?")),
    ("dining", Target::Ask("Tell me about dining options")),
    ("cancellation", Target::Ask("What is your cancellation policy?")),
    ("payment", Target::Ask("What payment methods do you accept?")),
    ("events", Target::Ask("Do you host events?")),
    ("help", Target::Ask("What can you help me with?")),
];

pub fn dispatch(action_id: &str) -> Option<DispatchResult> {
    let found = ACTION_TABLE
        .iter()
        .find(|(id, _)| *id == action_id)
        .map(|(_, target)| match target {
            Target::Page(path) => DispatchResult::Navigate(path.to_string()),
            Target::Ask(text) => DispatchResult::SyntheticUtterance(text.to_string()),
        });

    if found.is_none() {
        tracing::warn!(action_id, "unknown quick action, ignoring");
    }
    found
}

#[cfg(test)]
pub(crate) fn is_known(action_id: &str) -> bool {
    ACTION_TABLE.iter().any(|(id, _)| *id == action_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConversationContext, HotelConfig, IntentTag};
    use crate::services::intent::classify;

    #[test]
    fn test_rooms_navigates() {
        assert_eq!(
            dispatch("rooms"),
            Some(DispatchResult::Navigate("/rooms".to_string()))
        );
    }

    #[test]
    fn test_availability_asks() {
        assert_eq!(
            dispatch("availability"),
            Some(DispatchResult::SyntheticUtterance(
                "Show me available rooms right now".to_string()
            ))
        );
    }

    #[test]
    fn test_unknown_is_none() {
        assert_eq!(dispatch("teleport"), None);
        assert_eq!(dispatch(""), None);
        assert!(!is_known("teleport"));
    }

    #[test]
    fn test_canned_questions_land_on_their_intent() {
        let expected = [
            ("availability", IntentTag::AvailabilityCheck),
            ("room_types", IntentTag::RoomInfo),
            ("pricing", IntentTag::Pricing),
            ("best_deal", IntentTag::BestDeal),
            ("compare", IntentTag::Comparison),
            ("amenities", IntentTag::Amenities),
            ("check_in", IntentTag::CheckInOut),
            ("location", IntentTag::Location),
            ("parking", IntentTag::Parking),
            ("dining", IntentTag::Dining),
            ("cancellation", IntentTag::Cancellation),
            ("payment", IntentTag::Payment),
            ("events", IntentTag::Events),
            ("help", IntentTag::Help),
        ];
        let ctx = ConversationContext::default();
        let hotel = HotelConfig::default();
        for (action_id, intent) in expected {
            let Some(DispatchResult::SyntheticUtterance(text)) = dispatch(action_id) else {
                panic!("{action_id} should ask a question");
            };
            assert_eq!(classify(&text, &ctx, &hotel).intent, intent, "{action_id}");
        }
    }
}

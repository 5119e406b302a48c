use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ConversationContext, EntityBag, HotelConfig, IntentResult, IntentTag};

// Order matters: the first intent holding the top score wins ties.
pub const INTENT_KEYWORDS: &[(IntentTag, &[&str])] = &[
    (
        IntentTag::Greeting,
        &[
            "hello",
            "hey",
            "hi there",
            "good morning",
            "good afternoon",
            "good evening",
            "greetings",
            "howdy",
        ],
    ),
    (
        IntentTag::AvailabilityCheck,
        &[
            "available",
            "availability",
            "vacancy",
            "vacant",
            "free room",
            "any rooms",
            "open rooms",
            "right now",
        ],
    ),
    (
        IntentTag::Booking,
        &["book", "booking", "reserve", "reservation", "make a reservation"],
    ),
    (
        IntentTag::RoomInfo,
        &[
            "room type",
            "room types",
            "types of rooms",
            "what rooms",
            "which rooms",
            "room options",
            "room size",
            "bed",
        ],
    ),
    (
        IntentTag::Pricing,
        &[
            "price", "prices", "cost", "rate", "rates", "fee", "charge", "how much", "expensive",
            "tariff",
        ],
    ),
    (
        IntentTag::BestDeal,
        &[
            "cheap",
            "cheapest",
            "budget",
            "affordable",
            "best deal",
            "deal",
            "discount",
            "offer",
            "promotion",
            "special",
        ],
    ),
    (
        IntentTag::Comparison,
        &["compare", "comparison", "difference", "versus", "vs", "better"],
    ),
    (
        IntentTag::Amenities,
        &["amenities", "facilities", "pool", "gym", "spa", "fitness", "concierge"],
    ),
    (
        IntentTag::PetCare,
        &["pet", "dog", "cat", "animal", "pet care", "pet sitting", "pet walking"],
    ),
    (
        IntentTag::CheckInOut,
        &[
            "check-in",
            "check in",
            "checkin",
            "check-out",
            "check out",
            "checkout",
            "arrival",
            "departure",
        ],
    ),
    (
        IntentTag::Location,
        &[
            "location",
            "located",
            "address",
            "where are you",
            "directions",
            "map",
            "airport",
        ],
    ),
    (
        IntentTag::Contact,
        &["contact", "phone", "email", "call", "reach", "speak to"],
    ),
    (
        IntentTag::Parking,
        &["parking", "park", "valet", "car", "garage"],
    ),
    (
        IntentTag::Dining,
        &[
            "restaurant",
            "dining",
            "food",
            "breakfast",
            "lunch",
            "dinner",
            "eat",
            "room service",
            "halal",
        ],
    ),
    (
        IntentTag::Wifi,
        &["wifi", "wi-fi", "internet", "wireless", "network"],
    ),
    (
        IntentTag::Cancellation,
        &["cancel", "cancellation", "refund", "policy", "modify"],
    ),
    (
        IntentTag::Payment,
        &[
            "payment",
            "pay",
            "credit card",
            "card",
            "bkash",
            "nagad",
            "cash",
            "deposit",
        ],
    ),
    (
        IntentTag::Events,
        &[
            "event",
            "events",
            "wedding",
            "walima",
            "holud",
            "conference",
            "meeting",
            "party",
            "corporate",
        ],
    ),
    (
        IntentTag::MyBookings,
        &[
            "my booking",
            "my bookings",
            "bookings",
            "my reservation",
            "my reservations",
            "upcoming stay",
            "my stay",
        ],
    ),
    (
        IntentTag::Help,
        &[
            "help",
            "assist",
            "what can you do",
            "how does this work",
            "guide",
        ],
    ),
];

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}[/-]\d{1,2}\b|\btomorrow\b|\btoday\b|\bnext week\b|\bthis weekend\b")
        .expect("invalid date regex")
});

static GUEST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:guest|person|people)").expect("invalid guest count regex")
});

pub fn classify(
    utterance: &str,
    _context: &ConversationContext,
    hotel: &HotelConfig,
) -> IntentResult {
    let lower = utterance.to_lowercase();

    let mut best = IntentTag::Unknown;
    let mut best_score = 0u32;
    for (tag, keywords) in INTENT_KEYWORDS {
        let score = keywords.iter().filter(|k| lower.contains(*k)).count() as u32;
        if score > best_score {
            best = *tag;
            best_score = score;
        }
    }

    IntentResult {
        intent: best,
        confidence: best_score,
        entities: extract_entities(&lower, hotel),
    }
}

fn extract_entities(lower: &str, hotel: &HotelConfig) -> EntityBag {
    let has_date = DATE_PATTERN.is_match(lower);

    let guest_count = GUEST_PATTERN
        .captures(lower)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok());

    // Longest spoken key wins so "junior suite" beats "suite".
    let room_type = hotel
        .rooms
        .iter()
        .map(|r| (r.spoken_key(), r))
        .filter(|(spoken, _)| lower.contains(spoken.as_str()))
        .max_by_key(|(spoken, _)| spoken.len())
        .map(|(_, r)| r.key.clone());

    EntityBag {
        has_date,
        guest_count,
        room_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> IntentResult {
        classify(text, &ConversationContext::default(), &HotelConfig::default())
    }

    #[test]
    fn test_table_covers_every_intent_once() {
        assert_eq!(INTENT_KEYWORDS.len(), 20);
        for (i, (tag, _)) in INTENT_KEYWORDS.iter().enumerate() {
            assert!(
                INTENT_KEYWORDS[i + 1..].iter().all(|(other, _)| other != tag),
                "{tag:?} declared twice"
            );
            assert_ne!(*tag, IntentTag::Unknown);
        }
    }

    #[test]
    fn test_single_intent_keywords() {
        let cases = [
            ("hello", IntentTag::Greeting),
            ("Do you allow dogs?", IntentTag::PetCare),
            ("Is there wifi?", IntentTag::Wifi),
            ("I want to book", IntentTag::Booking),
            ("Do you host a wedding", IntentTag::Events),
            ("Can I pay with bkash", IntentTag::Payment),
        ];
        for (text, expected) in cases {
            let result = run(text);
            assert_eq!(result.intent, expected, "{text}");
            assert!(result.confidence >= 1, "{text}");
        }
    }

    #[test]
    fn test_check_in_question() {
        let result = run("What time is check-in?");
        assert_eq!(result.intent, IntentTag::CheckInOut);
        assert!(result.confidence >= 1);
    }

    #[test]
    fn test_higher_score_wins() {
        // amenities: pool, gym, spa; pricing: price
        let result = run("Is there a pool, a gym and a spa? And what is the price?");
        assert_eq!(result.intent, IntentTag::Amenities);
        assert_eq!(result.confidence, 3);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        // "book" (booking) and "help" (help) score one each
        let result = run("help me book");
        assert_eq!(result.intent, IntentTag::Booking);
        assert_eq!(result.confidence, 1);
    }

    #[test]
    fn test_my_bookings_beats_booking() {
        let result = run("show my bookings");
        assert_eq!(result.intent, IntentTag::MyBookings);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(run("WHAT ARE YOUR PRICES").intent, IntentTag::Pricing);
    }

    #[test]
    fn test_no_match_is_zero_confidence() {
        let result = run("Tell me a joke");
        assert_eq!(result.intent, IntentTag::Unknown);
        assert_eq!(result.confidence, 0);
        assert!(result.is_fallback());
    }

    #[test]
    fn test_substring_match_without_word_boundary() {
        // "located" contains "cat" but location scores two
        let result = run("Where are you located?");
        assert_eq!(result.intent, IntentTag::Location);
        assert_eq!(result.confidence, 2);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let ctx = ConversationContext::default();
        let hotel = HotelConfig::default();
        let a = classify("Any rooms for 2 guests tomorrow?", &ctx, &hotel);
        let b = classify("Any rooms for 2 guests tomorrow?", &ctx, &hotel);
        assert_eq!(a, b);
    }

    #[test]
    fn test_entities_date_and_guests() {
        let result = run("Need a room for 3 people on 12/24");
        assert!(result.entities.has_date);
        assert_eq!(result.entities.guest_count, Some(3));

        let result = run("anything this weekend for 2guests");
        assert!(result.entities.has_date);
        assert_eq!(result.entities.guest_count, Some(2));

        let result = run("just browsing");
        assert!(!result.entities.has_date);
        assert_eq!(result.entities.guest_count, None);
    }

    #[test]
    fn test_entity_room_type_prefers_longest() {
        assert_eq!(
            run("How big is the Junior Suite?").entities.room_type.as_deref(),
            Some("juniorSuite")
        );
        assert_eq!(
            run("price of premium deluxe").entities.room_type.as_deref(),
            Some("premiumDeluxe")
        );
        assert_eq!(
            run("is the suite nice").entities.room_type.as_deref(),
            Some("suite")
        );
        assert_eq!(run("hello").entities.room_type, None);
    }

    #[test]
    fn test_entities_independent_of_score() {
        let result = run("tomorrow");
        assert_eq!(result.confidence, 0);
        assert!(result.entities.has_date);
    }
}

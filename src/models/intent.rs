use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntentTag {
    Greeting,
    AvailabilityCheck,
    Booking,
    RoomInfo,
    Pricing,
    BestDeal,
    Comparison,
    Amenities,
    PetCare,
    CheckInOut,
    Location,
    Contact,
    Parking,
    Dining,
    Wifi,
    Cancellation,
    Payment,
    Events,
    MyBookings,
    Help,
    Unknown,
}

impl IntentTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentTag::Greeting => "greeting",
            IntentTag::AvailabilityCheck => "availability_check",
            IntentTag::Booking => "booking",
            IntentTag::RoomInfo => "room_info",
            IntentTag::Pricing => "pricing",
            IntentTag::BestDeal => "best_deal",
            IntentTag::Comparison => "comparison",
            IntentTag::Amenities => "amenities",
            IntentTag::PetCare => "pet_care",
            IntentTag::CheckInOut => "check_in_out",
            IntentTag::Location => "location",
            IntentTag::Contact => "contact",
            IntentTag::Parking => "parking",
            IntentTag::Dining => "dining",
            IntentTag::Wifi => "wifi",
            IntentTag::Cancellation => "cancellation",
            IntentTag::Payment => "payment",
            IntentTag::Events => "events",
            IntentTag::MyBookings => "my_bookings",
            IntentTag::Help => "help",
            IntentTag::Unknown => "unknown",
        }
    }

    /// How the topic is named when the assistant refers back to it.
    pub fn topic_label(&self) -> &'static str {
        match self {
            IntentTag::Greeting => "getting started",
            IntentTag::AvailabilityCheck => "room availability",
            IntentTag::Booking => "making a booking",
            IntentTag::RoomInfo => "our room types",
            IntentTag::Pricing => "room prices",
            IntentTag::BestDeal => "our best deals",
            IntentTag::Comparison => "comparing rooms",
            IntentTag::Amenities => "our amenities",
            IntentTag::PetCare => "pet care",
            IntentTag::CheckInOut => "check-in and check-out",
            IntentTag::Location => "our location",
            IntentTag::Contact => "contacting us",
            IntentTag::Parking => "parking",
            IntentTag::Dining => "dining",
            IntentTag::Wifi => "WiFi",
            IntentTag::Cancellation => "cancellations",
            IntentTag::Payment => "payment options",
            IntentTag::Events => "events",
            IntentTag::MyBookings => "your bookings",
            IntentTag::Help => "what I can help with",
            IntentTag::Unknown => "",
        }
    }
}

/// Fragments pulled out of an utterance independently of its intent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityBag {
    pub has_date: bool,
    pub guest_count: Option<u32>,
    /// Catalogue key of the matched room type, e.g. `juniorSuite`.
    pub room_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntentResult {
    pub intent: IntentTag,
    /// Number of matched trigger keywords for the winning intent.
    pub confidence: u32,
    pub entities: EntityBag,
}

impl IntentResult {
    pub fn is_fallback(&self) -> bool {
        self.confidence == 0 || self.intent == IntentTag::Unknown
    }
}

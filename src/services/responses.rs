use std::time::Duration;

use chrono::NaiveDate;

use crate::models::{
    AuthState, ConversationContext, HotelConfig, IntentResult, IntentTag, QuickAction, Reply,
    RoomRecord,
};
use crate::services::phrasing::{pick, Choose};
use crate::services::rooms::{fetch_room_snapshot, RoomsProvider};

pub const MAX_LISTED_ROOMS: usize = 5;

pub struct ResponseEnv<'a> {
    pub hotel: &'a HotelConfig,
    pub auth: &'a AuthState,
    pub today: NaiveDate,
    pub rooms: &'a dyn RoomsProvider,
    pub fetch_timeout: Duration,
}

pub async fn synthesize(
    result: &IntentResult,
    context: &ConversationContext,
    env: &ResponseEnv<'_>,
    chooser: &mut dyn Choose,
) -> Reply {
    // `context` predates this utterance, so the fallback can name the previous topic.
    if result.is_fallback() {
        return fallback(env.hotel, context.last_topic, chooser);
    }

    let hotel = env.hotel;
    match result.intent {
        IntentTag::Greeting => greeting(hotel, env.auth, chooser),
        IntentTag::AvailabilityCheck => availability(result, env).await,
        IntentTag::Booking => booking(result, env.auth),
        IntentTag::RoomInfo => room_info(result, hotel),
        IntentTag::Pricing => pricing(result, hotel),
        IntentTag::BestDeal => best_deal(hotel),
        IntentTag::Comparison => comparison(hotel),
        IntentTag::Amenities => amenities(hotel),
        IntentTag::PetCare => pet_care(hotel),
        IntentTag::CheckInOut => check_in_out(hotel),
        IntentTag::Location => location(hotel),
        IntentTag::Contact => contact(hotel),
        IntentTag::Parking => parking(hotel),
        IntentTag::Dining => dining(hotel),
        IntentTag::Wifi => wifi(hotel),
        IntentTag::Cancellation => cancellation(hotel, env.auth),
        IntentTag::Payment => payment(hotel),
        IntentTag::Events => events(hotel),
        IntentTag::MyBookings => my_bookings(env.auth),
        IntentTag::Help => help(),
        IntentTag::Unknown => fallback(hotel, context.last_topic, chooser),
    }
}

fn reply(text: String, actions: &[(&str, &str)]) -> Reply {
    Reply {
        text,
        actions: actions
            .iter()
            .map(|(label, id)| QuickAction::new(label, id))
            .collect(),
    }
}

fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ── Greeting & fallback ──

pub(crate) fn greeting_phrasings(hotel: &HotelConfig, auth: &AuthState) -> Vec<String> {
    let name = auth
        .display_name()
        .map(|n| format!(" {n}"))
        .unwrap_or_default();
    vec![
        format!(
            "Hello{name}! Welcome to {}. I'm here to help with rooms, prices, availability and anything else about your stay.",
            hotel.name
        ),
        format!(
            "Hi{name}! Great to have you at {}. What can I help you with today?",
            hotel.name
        ),
        format!(
            "Welcome{name}! I'm the {} assistant. Ask me about rooms, dining, pet care or your bookings.",
            hotel.name
        ),
    ]
}

fn greeting(hotel: &HotelConfig, auth: &AuthState, chooser: &mut dyn Choose) -> Reply {
    reply(
        pick(chooser, greeting_phrasings(hotel, auth)),
        &[
            ("Browse Rooms", "rooms"),
            ("Check Availability", "availability"),
            ("Room Prices", "pricing"),
        ],
    )
}

pub(crate) fn fallback_phrasings(
    hotel: &HotelConfig,
    last_topic: Option<IntentTag>,
) -> Vec<String> {
    let phone = &hotel.contact.phone;
    match last_topic.filter(|t| *t != IntentTag::Unknown) {
        Some(topic) => {
            let label = topic.topic_label();
            vec![
                format!(
                    "I'm not sure I understood that. Were you still asking about {label}, or is there something else I can help with?"
                ),
                format!(
                    "Sorry, I didn't quite catch that. Would you like more details on {label}, or something different?"
                ),
                format!(
                    "I want to get this right. Is your question about {label}? You can also call our concierge at {phone}."
                ),
            ]
        }
        None => vec![
            "I'd be happy to help! Could you tell me a bit more about what you're looking for? I can answer questions about rooms, prices, dining and more.".to_string(),
            "Sorry, I didn't quite catch that. You can ask me about availability, room types, pet care or our location.".to_string(),
            format!(
                "I'm not sure I understood. For anything specific, our concierge is available at {phone}. What would you like to know?"
            ),
        ],
    }
}

fn fallback(
    hotel: &HotelConfig,
    last_topic: Option<IntentTag>,
    chooser: &mut dyn Choose,
) -> Reply {
    reply(
        pick(chooser, fallback_phrasings(hotel, last_topic)),
        &[("What Can You Do?", "help"), ("Contact Us", "contact")],
    )
}

// ── Live availability ──

async fn availability(result: &IntentResult, env: &ResponseEnv<'_>) -> Reply {
    let hotel = env.hotel;
    match fetch_room_snapshot(env.rooms, env.fetch_timeout).await {
        Err(e) => {
            tracing::warn!(error = %e, "room availability lookup failed");
            reply(
                format!(
                    "I'm sorry, I couldn't check live availability right now. Please contact us at {} and our team will help you find a room.",
                    hotel.contact.phone
                ),
                &[("Contact Us", "contact")],
            )
        }
        Ok(rooms) => {
            let available: Vec<RoomRecord> =
                rooms.into_iter().filter(|r| r.is_available).collect();
            if available.is_empty() {
                reply(
                    "We're fully booked at the moment. Get in touch and we'll let you know as soon as dates open up."
                        .to_string(),
                    &[("Contact for Dates", "contact"), ("View All Rooms", "rooms")],
                )
            } else {
                reply(
                    list_available(&available, result.entities.guest_count, env),
                    &[
                        ("Book Now", "book"),
                        ("Compare Rooms", "compare"),
                        ("See Amenities", "amenities"),
                    ],
                )
            }
        }
    }
}

fn list_available(
    available: &[RoomRecord],
    guests: Option<u32>,
    env: &ResponseEnv<'_>,
) -> String {
    let guests_note = guests
        .map(|g| format!(" (you mentioned {})", plural(g as usize, "guest")))
        .unwrap_or_default();

    let mut text = format!(
        "Good news! As of {}, we have {} available{guests_note}:\n",
        env.today.format("%B %-d, %Y"),
        plural(available.len(), "room"),
    );

    // Order is whatever the backend returned (cheapest first).
    for room in available.iter().take(MAX_LISTED_ROOMS) {
        text.push_str(&format!(
            "\n• {}: {}/night, up to {}",
            room.name,
            env.hotel.format_price(room.nightly_price.round() as i64),
            plural(room.capacity_guests as usize, "guest"),
        ));
    }
    if available.len() > MAX_LISTED_ROOMS {
        text.push_str(&format!(
            "\n...and {} more",
            available.len() - MAX_LISTED_ROOMS
        ));
    }
    text.push_str("\n\nWould you like to book one?");
    text
}

// ── Rooms & prices ──

fn booking(result: &IntentResult, auth: &AuthState) -> Reply {
    if !auth.is_authenticated {
        return reply(
            "To make a reservation, please sign in to your account first. Once you're signed in you can book any room in a few clicks.".to_string(),
            &[("Sign In", "sign_in"), ("Browse Rooms", "rooms")],
        );
    }

    let mut text = match auth.display_name() {
        Some(name) => format!("Great, {name}! "),
        None => "Great! ".to_string(),
    };
    text.push_str("Choose a room on our Rooms page and tap 'Book Now' to pick your dates.");
    if let Some(g) = result.entities.guest_count {
        text.push_str(&format!(
            " For {}, check each room's capacity before you book.",
            plural(g as usize, "guest")
        ));
    }
    if result.entities.has_date {
        text.push_str(" You can confirm the dates you mentioned in the booking form.");
    }

    reply(
        text,
        &[("Book Now", "book"), ("Check Availability", "availability")],
    )
}

fn room_info(result: &IntentResult, hotel: &HotelConfig) -> Reply {
    if let Some(room) = result
        .entities
        .room_type
        .as_deref()
        .and_then(|key| hotel.room_by_key(key))
    {
        let mut text = format!(
            "The {} is {}/night.",
            room.name,
            hotel.format_price(room.price)
        );
        if !room.tagline.is_empty() {
            text.push_str(&format!(" {}.", room.tagline));
        }
        text.push_str(" Would you like to check whether it's available?");

        return reply(
            text,
            &[
                ("Check Availability", "availability"),
                ("Book Now", "book"),
                ("Compare Rooms", "compare"),
            ],
        );
    }

    let listed: Vec<String> = hotel
        .rooms
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let price = hotel.format_price(r.price);
            if r.tagline.is_empty() {
                format!("{}) {} ({price})", i + 1, r.name)
            } else {
                format!("{}) {} - {} ({price})", i + 1, r.name, r.tagline)
            }
        })
        .collect();

    reply(
        format!(
            "We have {} room types: {}. Visit our Rooms page to see photos and details!",
            hotel.rooms.len(),
            listed.join(", ")
        ),
        &[
            ("Browse Rooms", "rooms"),
            ("Room Prices", "pricing"),
            ("Compare Rooms", "compare"),
        ],
    )
}

fn pricing(result: &IntentResult, hotel: &HotelConfig) -> Reply {
    let actions = [
        ("Best Deal", "best_deal"),
        ("Check Availability", "availability"),
        ("Browse Rooms", "rooms"),
    ];

    if let Some(room) = result
        .entities
        .room_type
        .as_deref()
        .and_then(|key| hotel.room_by_key(key))
    {
        return reply(
            format!(
                "The {} is {} per night, including breakfast and all luxury amenities.",
                room.name,
                hotel.format_price(room.price)
            ),
            &actions,
        );
    }

    let (Some(low), Some(high)) = (hotel.cheapest_room(), hotel.priciest_room()) else {
        return reply(
            format!(
                "Please call us at {} for our current rates.",
                hotel.contact.phone
            ),
            &actions,
        );
    };

    let others: Vec<String> = hotel
        .rooms
        .iter()
        .filter(|r| r.key != low.key && r.key != high.key)
        .map(|r| format!("{} ({})", r.name, hotel.format_price(r.price)))
        .collect();

    let mut text = format!(
        "Our rooms range from {}/night for the {} up to {}/night for the {}.",
        hotel.format_price(low.price),
        low.name,
        hotel.format_price(high.price),
        high.name
    );
    if !others.is_empty() {
        text.push_str(&format!(" We also offer {}.", join_list(&others)));
    }
    text.push_str(" All rates include luxury amenities and breakfast.");

    reply(text, &actions)
}

fn best_deal(hotel: &HotelConfig) -> Reply {
    let mut text = match hotel.cheapest_room() {
        Some(room) => format!(
            "Our best value is the {} at {}/night. ",
            room.name,
            hotel.format_price(room.price)
        ),
        None => String::new(),
    };
    text.push_str(&format!(
        "We also offer special rates for extended stays (7+ nights) and corporate bookings. Call {} for personalized offers!",
        hotel.contact.phone
    ));

    reply(
        text,
        &[("Book Now", "book"), ("Check Availability", "availability")],
    )
}

fn comparison(hotel: &HotelConfig) -> Reply {
    let mut rooms = hotel.rooms.clone();
    rooms.sort_by_key(|r| r.price);

    let mut text = "Here's how our rooms compare:\n".to_string();
    for room in &rooms {
        text.push_str(&format!(
            "\n• {}: {}/night",
            room.name,
            hotel.format_price(room.price)
        ));
        if !room.tagline.is_empty() {
            text.push_str(&format!(", {}", room.tagline.to_lowercase()));
        }
    }
    text.push_str("\n\nEvery room includes breakfast and complimentary WiFi.");

    reply(
        text,
        &[
            ("Browse Rooms", "rooms"),
            ("Best Deal", "best_deal"),
            ("Check Availability", "availability"),
        ],
    )
}

// ── Hotel facts ──

fn amenities(hotel: &HotelConfig) -> Reply {
    reply(
        format!(
            "Our amenities include 24/7 concierge service, a luxury spa, fitness center, rooftop pool, {}, the {}, complimentary WiFi and valet parking.",
            hotel.dining.restaurant_name, hotel.dining.lounge_name
        ),
        &[
            ("Dining", "dining"),
            ("Parking", "parking"),
            ("Browse Rooms", "rooms"),
        ],
    )
}

fn pet_care(hotel: &HotelConfig) -> Reply {
    let s = &hotel.services;
    reply(
        format!(
            "We welcome pets! We offer pet sitting ({}/hour), pet walking ({}/walk) and 24/7 pet safety monitoring. There's a {} registration fee per stay. Check our Pet Care page for full details.",
            hotel.format_price(s.pet_sitting),
            hotel.format_price(s.pet_walking),
            hotel.format_price(s.pet_registration)
        ),
        &[("Pet Care Services", "pet_care"), ("Contact Us", "contact")],
    )
}

fn check_in_out(hotel: &HotelConfig) -> Reply {
    let tz = &hotel.timezone_abbreviation;
    reply(
        format!(
            "Check-in is at {} {tz} and check-out is at {} {tz}. Early check-in and late check-out can be arranged based on availability.",
            hotel.policies.check_in_time, hotel.policies.check_out_time
        ),
        &[
            ("Check Availability", "availability"),
            ("Cancellation Policy", "cancellation"),
        ],
    )
}

fn location(hotel: &HotelConfig) -> Reply {
    let loc = &hotel.location;
    let mut text = format!(
        "We're located in {}, {}, {}. Our address is: {}. We're just {} from {}.",
        loc.area, loc.city, loc.country, loc.address, loc.airport_distance, loc.airport_name
    );
    if !loc.nearby_areas.is_empty() {
        text.push_str(&format!(
            " {} are all close by.",
            join_list(&loc.nearby_areas)
        ));
    }

    reply(
        text,
        &[("Contact Us", "contact"), ("About the Hotel", "about")],
    )
}

fn contact(hotel: &HotelConfig) -> Reply {
    let c = &hotel.contact;
    reply(
        format!(
            "You can reach us at {} or email {}. Our concierge is available {}.",
            c.phone, c.email, c.hours
        ),
        &[("Contact Us", "contact")],
    )
}

fn parking(hotel: &HotelConfig) -> Reply {
    reply(
        format!(
            "We offer valet parking ({}/day) and self-parking ({}/day). Valet service is available 24/7 at the main entrance.",
            hotel.format_price(hotel.services.valet_parking),
            hotel.format_price(hotel.services.self_parking)
        ),
        &[("Location", "location"), ("Contact Us", "contact")],
    )
}

fn dining(hotel: &HotelConfig) -> Reply {
    let d = &hotel.dining;
    let halal = if d.halal { ", and all food is halal" } else { "" };
    reply(
        format!(
            "{} serves international cuisine daily from {} {}{halal}. Complimentary breakfast is included with every room booking, and room service is available 24/7. For evening drinks, visit the {}.",
            d.restaurant_name, d.hours, hotel.timezone_abbreviation, d.lounge_name
        ),
        &[("Amenities", "amenities"), ("Book Now", "book")],
    )
}

fn wifi(hotel: &HotelConfig) -> Reply {
    reply(
        format!(
            "Complimentary high-speed WiFi is available throughout {}, including every room, {} and the {}.",
            hotel.name, hotel.dining.restaurant_name, hotel.dining.lounge_name
        ),
        &[("Amenities", "amenities")],
    )
}

fn cancellation(hotel: &HotelConfig, auth: &AuthState) -> Reply {
    let hours = hotel.policies.free_cancellation_hours;
    let mut text = format!(
        "Our cancellation policy allows free cancellation up to {hours} hours before check-in. Cancellations within {hours} hours are subject to a one-night charge. Special rates may have different policies."
    );

    if auth.is_authenticated {
        text.push_str(" You can manage your reservations from your account.");
        reply(
            text,
            &[("My Bookings", "my_bookings"), ("Contact Us", "contact")],
        )
    } else {
        reply(text, &[("Sign In", "sign_in"), ("Contact Us", "contact")])
    }
}

fn payment(hotel: &HotelConfig) -> Reply {
    reply(
        format!(
            "We accept all major credit and debit cards and cash in {}. Mobile payments via bKash and Nagad are also accepted. Payment can be made during booking or at check-in.",
            hotel.currency.code
        ),
        &[("Book Now", "book"), ("Cancellation Policy", "cancellation")],
    )
}

fn events(hotel: &HotelConfig) -> Reply {
    reply(
        format!(
            "We host {} in our banquet halls. Email {} or call {} to start planning.",
            join_list(&hotel.event_types),
            hotel.contact.events_email,
            hotel.contact.phone
        ),
        &[("Contact Us", "contact")],
    )
}

// ── Account ──

fn my_bookings(auth: &AuthState) -> Reply {
    if !auth.is_authenticated {
        return reply(
            "Please sign in to see your bookings. Once you're signed in, all your reservations are listed in your account.".to_string(),
            &[("Sign In", "sign_in")],
        );
    }

    let opener = match auth.display_name() {
        Some(name) => format!("Sure, {name}!"),
        None => "Sure!".to_string(),
    };
    reply(
        format!("{opener} Your reservations are in your account, where you can view, review or cancel upcoming stays."),
        &[("My Bookings", "my_bookings")],
    )
}

fn help() -> Reply {
    reply(
        "I can check live room availability, compare room types and prices, and answer questions about check-in, dining, parking, pet care, events and payments. What would you like to know?".to_string(),
        &[
            ("Check Availability", "availability"),
            ("Room Types", "room_types"),
            ("Room Prices", "pricing"),
            ("Contact Us", "contact"),
        ],
    )
}

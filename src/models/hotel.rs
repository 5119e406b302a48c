use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Read-only hotel facts the assistant quotes from: prices, contact details,
/// policies and the room catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub location: LocationInfo,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_timezone")]
    pub timezone_abbreviation: String,
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
    #[serde(default)]
    pub policies: Policies,
    #[serde(default = "default_rooms")]
    pub rooms: Vec<RoomRate>,
    #[serde(default)]
    pub services: ServicePrices,
    #[serde(default)]
    pub dining: Dining,
    #[serde(default = "default_event_types")]
    pub event_types: Vec<String>,
}

fn default_name() -> String {
    "Luxe Hotel Dhaka".to_string()
}

fn default_timezone() -> String {
    "BST".to_string()
}

fn default_utc_offset() -> i32 {
    6
}

fn default_event_types() -> Vec<String> {
    ["Weddings", "Walima", "Holud", "Corporate Events", "Conferences"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationInfo {
    pub address: String,
    pub area: String,
    pub city: String,
    pub country: String,
    pub nearby_areas: Vec<String>,
    pub airport_name: String,
    pub airport_distance: String,
}

impl Default for LocationInfo {
    fn default() -> Self {
        Self {
            address: "Plot 23, Gulshan Avenue, Gulshan-1, Dhaka-1212, Bangladesh".to_string(),
            area: "Gulshan".to_string(),
            city: "Dhaka".to_string(),
            country: "Bangladesh".to_string(),
            nearby_areas: vec![
                "Banani".to_string(),
                "Baridhara".to_string(),
                "Bashundhara".to_string(),
            ],
            airport_name: "Hazrat Shahjalal International Airport".to_string(),
            airport_distance: "25 minutes".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub events_email: String,
    pub hours: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: "+880 2 5566 7788".to_string(),
            email: "info@luxehoteldhaka.com".to_string(),
            events_email: "events@luxehoteldhaka.com".to_string(),
            hours: "24/7".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            code: "BDT".to_string(),
            symbol: "৳".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Policies {
    pub check_in_time: String,
    pub check_out_time: String,
    pub free_cancellation_hours: u32,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            check_in_time: "3:00 PM".to_string(),
            check_out_time: "11:00 AM".to_string(),
            free_cancellation_hours: 48,
        }
    }
}

/// One entry of the room catalogue. `key` is camelCase, e.g. `premiumDeluxe`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRate {
    pub key: String,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub tagline: String,
}

impl RoomRate {
    fn new(key: &str, name: &str, price: i64, tagline: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            price,
            tagline: tagline.to_string(),
        }
    }

    /// `premiumDeluxe` -> `premium deluxe`
    pub fn spoken_key(&self) -> String {
        let mut out = String::with_capacity(self.key.len() + 4);
        for c in self.key.chars() {
            if c.is_uppercase() {
                out.push(' ');
            }
            out.extend(c.to_lowercase());
        }
        out
    }
}

fn default_rooms() -> Vec<RoomRate> {
    vec![
        RoomRate::new("standard", "Standard Room", 24999, "Comfortable & affordable"),
        RoomRate::new("superior", "Superior Room", 32999, "Enhanced comfort"),
        RoomRate::new("deluxe", "Deluxe Room", 39999, "Spacious elegance"),
        RoomRate::new("premiumDeluxe", "Premium Deluxe", 49999, "Upgraded luxury"),
        RoomRate::new("juniorSuite", "Junior Suite", 64999, "Compact suite"),
        RoomRate::new("executiveSuite", "Executive Suite", 74999, "Business-class"),
        RoomRate::new("suite", "Presidential Suite", 89999, "Ultimate luxury"),
        RoomRate::new("familySuite", "Family Suite", 79999, "For families"),
        RoomRate::new("honeymoonSuite", "Honeymoon Suite", 99999, "Romantic retreat"),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicePrices {
    pub pet_sitting: i64,
    pub pet_walking: i64,
    pub pet_registration: i64,
    pub valet_parking: i64,
    pub self_parking: i64,
}

impl Default for ServicePrices {
    fn default() -> Self {
        Self {
            pet_sitting: 2500,
            pet_walking: 1500,
            pet_registration: 5000,
            valet_parking: 3500,
            self_parking: 2000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Dining {
    pub restaurant_name: String,
    pub lounge_name: String,
    pub hours: String,
    pub halal: bool,
}

impl Default for Dining {
    fn default() -> Self {
        Self {
            restaurant_name: "Le Ciel Restaurant".to_string(),
            lounge_name: "Rooftop Lounge".to_string(),
            hours: "6:00 AM to 11:00 PM".to_string(),
            halal: true,
        }
    }
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            location: LocationInfo::default(),
            contact: ContactInfo::default(),
            currency: Currency::default(),
            timezone_abbreviation: default_timezone(),
            utc_offset_hours: default_utc_offset(),
            policies: Policies::default(),
            rooms: default_rooms(),
            services: ServicePrices::default(),
            dining: Dining::default(),
            event_types: default_event_types(),
        }
    }
}

impl HotelConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        use anyhow::Context;

        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read hotel config: {p}"))?;
                Self::from_json(&raw).with_context(|| format!("invalid hotel config: {p}"))
            }
            None => Ok(Self::default()),
        }
    }

    /// `24999` -> `৳24,999`
    pub fn format_price(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        let sign = if amount < 0 { "-" } else { "" };
        format!("{sign}{}{grouped}", self.currency.symbol)
    }

    /// Calendar date at the hotel for the instant `now`.
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        (now + chrono::Duration::hours(i64::from(self.utc_offset_hours))).date_naive()
    }

    pub fn cheapest_room(&self) -> Option<&RoomRate> {
        self.rooms.iter().min_by_key(|r| r.price)
    }

    pub fn priciest_room(&self) -> Option<&RoomRate> {
        self.rooms.iter().max_by_key(|r| r.price)
    }

    pub fn room_by_key(&self, key: &str) -> Option<&RoomRate> {
        self.rooms.iter().find(|r| r.key == key)
    }
}

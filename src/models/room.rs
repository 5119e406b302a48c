use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomRecord {
    pub id: i64,
    pub name: String,
    pub nightly_price: f64,
    pub capacity_guests: u32,
    pub is_available: bool,
}

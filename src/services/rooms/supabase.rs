use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::RoomsProvider;
use crate::models::RoomRecord;

pub struct SupabaseRooms {
    url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl SupabaseRooms {
    pub fn new(url: String, anon_key: String) -> Self {
        Self {
            url,
            anon_key,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RoomRow {
    id: i64,
    name: String,
    price: f64,
    capacity: u32,
    #[serde(default = "default_true")]
    available: bool,
}

fn default_true() -> bool {
    true
}

impl From<RoomRow> for RoomRecord {
    fn from(row: RoomRow) -> Self {
        RoomRecord {
            id: row.id,
            name: row.name,
            nightly_price: row.price,
            capacity_guests: row.capacity,
            is_available: row.available,
        }
    }
}

#[async_trait]
impl RoomsProvider for SupabaseRooms {
    async fn fetch_all_rooms(&self) -> anyhow::Result<Vec<RoomRecord>> {
        let resp = self
            .client
            .get(format!("{}/rest/v1/rooms", self.url))
            .query(&[("select", "*"), ("order", "price.asc")])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await
            .context("failed to call Supabase rooms endpoint")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Supabase rooms error ({}): {}", status, body);
        }

        let rows: Vec<RoomRow> = resp
            .json()
            .await
            .context("failed to parse Supabase rooms response")?;

        Ok(rows.into_iter().map(RoomRecord::from).collect())
    }

    async fn set_availability(&self, room_id: i64, available: bool) -> anyhow::Result<bool> {
        let resp = self
            .client
            .patch(format!("{}/rest/v1/rooms", self.url))
            .query(&[("id", format!("eq.{room_id}"))])
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=representation")
            .bearer_auth(&self.anon_key)
            .json(&json!({ "available": available }))
            .send()
            .await
            .context("failed to call Supabase rooms endpoint")?
            .error_for_status()
            .context("Supabase rooms update returned error")?;

        let updated: Vec<serde_json::Value> = resp
            .json()
            .await
            .context("failed to parse Supabase rooms update")?;

        Ok(!updated.is_empty())
    }
}

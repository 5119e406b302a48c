use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use super::RoomsProvider;
use crate::db::queries;
use crate::models::RoomRecord;

pub struct SqliteRooms {
    db: Arc<Mutex<Connection>>,
}

impl SqliteRooms {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomsProvider for SqliteRooms {
    async fn fetch_all_rooms(&self) -> anyhow::Result<Vec<RoomRecord>> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("rooms database lock poisoned"))?;
        queries::list_rooms(&db)
    }

    async fn set_availability(&self, room_id: i64, available: bool) -> anyhow::Result<bool> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("rooms database lock poisoned"))?;
        queries::set_room_availability(&db, room_id, available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn provider() -> SqliteRooms {
        let conn = db::init_db(":memory:").unwrap();
        SqliteRooms::new(Arc::new(Mutex::new(conn)))
    }

    #[tokio::test]
    async fn test_seeded_rooms_cheapest_first() {
        let rooms = provider().fetch_all_rooms().await.unwrap();
        assert_eq!(rooms.len(), 9);
        assert_eq!(rooms[0].name, "Standard Room");
        assert!(rooms.windows(2).all(|w| w[0].nightly_price <= w[1].nightly_price));
        assert!(rooms.iter().all(|r| r.is_available));
    }

    #[tokio::test]
    async fn test_set_availability() {
        let rooms = provider();
        let first = rooms.fetch_all_rooms().await.unwrap()[0].id;

        assert!(rooms.set_availability(first, false).await.unwrap());
        let after = rooms.fetch_all_rooms().await.unwrap();
        assert!(!after.iter().find(|r| r.id == first).unwrap().is_available);

        assert!(!rooms.set_availability(9999, false).await.unwrap());
    }
}

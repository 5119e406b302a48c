pub mod sqlite;
pub mod supabase;

use std::time::Duration;

use async_trait::async_trait;

use crate::models::RoomRecord;

#[async_trait]
pub trait RoomsProvider: Send + Sync {
    /// All rooms, cheapest first.
    async fn fetch_all_rooms(&self) -> anyhow::Result<Vec<RoomRecord>>;

    /// Returns false when no room has that id.
    async fn set_availability(&self, room_id: i64, available: bool) -> anyhow::Result<bool>;
}

#[derive(Debug, thiserror::Error)]
pub enum RoomsFetchError {
    #[error("rooms backend did not answer within {0:?}")]
    Timeout(Duration),

    #[error("rooms backend failed: {0}")]
    Backend(String),
}

pub async fn fetch_room_snapshot(
    provider: &dyn RoomsProvider,
    timeout: Duration,
) -> Result<Vec<RoomRecord>, RoomsFetchError> {
    match tokio::time::timeout(timeout, provider.fetch_all_rooms()).await {
        Ok(Ok(rooms)) => Ok(rooms),
        Ok(Err(e)) => Err(RoomsFetchError::Backend(format!("{e:#}"))),
        Err(_) => Err(RoomsFetchError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowRooms;

    #[async_trait]
    impl RoomsProvider for SlowRooms {
        async fn fetch_all_rooms(&self) -> anyhow::Result<Vec<RoomRecord>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![])
        }

        async fn set_availability(&self, _room_id: i64, _available: bool) -> anyhow::Result<bool> {
            Ok(false)
        }
    }

    struct BrokenRooms;

    #[async_trait]
    impl RoomsProvider for BrokenRooms {
        async fn fetch_all_rooms(&self) -> anyhow::Result<Vec<RoomRecord>> {
            anyhow::bail!("connection refused")
        }

        async fn set_availability(&self, _room_id: i64, _available: bool) -> anyhow::Result<bool> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn test_snapshot_times_out() {
        let result = fetch_room_snapshot(&SlowRooms, Duration::from_millis(50)).await;
        assert!(matches!(result, Err(RoomsFetchError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_snapshot_backend_error() {
        let result = fetch_room_snapshot(&BrokenRooms, Duration::from_secs(1)).await;
        match result {
            Err(RoomsFetchError::Backend(msg)) => assert!(msg.contains("connection refused")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

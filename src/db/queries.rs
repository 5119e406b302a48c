use rusqlite::{params, Connection};

use crate::models::RoomRecord;

// ── Rooms ──

pub fn list_rooms(conn: &Connection) -> anyhow::Result<Vec<RoomRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, price, capacity, available FROM rooms ORDER BY price ASC, id ASC",
    )?;

    let rooms = stmt
        .query_map([], |row| {
            Ok(RoomRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                nightly_price: row.get(2)?,
                capacity_guests: row.get(3)?,
                is_available: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rooms)
}

/// Returns false when no room has `room_id`.
pub fn set_room_availability(
    conn: &Connection,
    room_id: i64,
    available: bool,
) -> anyhow::Result<bool> {
    let changed = conn.execute(
        "UPDATE rooms SET available = ?1, updated_at = datetime('now') WHERE id = ?2",
        params![available, room_id],
    )?;
    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn insert_room(conn: &Connection, name: &str, nightly_price: f64, capacity: u32) -> i64 {
        conn.execute(
            "INSERT INTO rooms (name, price, capacity) VALUES (?1, ?2, ?3)",
            params![name, nightly_price, capacity],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    #[test]
    fn test_list_rooms_orders_by_price() {
        let conn = db::init_db(":memory:").unwrap();
        insert_room(&conn, "Garden Cabin", 12000.0, 2);

        let rooms = list_rooms(&conn).unwrap();
        assert_eq!(rooms.len(), 10);
        assert_eq!(rooms[0].name, "Garden Cabin");
        assert_eq!(rooms.last().unwrap().name, "Honeymoon Suite");
    }

    #[test]
    fn test_set_room_availability() {
        let conn = db::init_db(":memory:").unwrap();
        let id = insert_room(&conn, "Garden Cabin", 12000.0, 2);

        assert!(set_room_availability(&conn, id, false).unwrap());
        let cabin = list_rooms(&conn)
            .unwrap()
            .into_iter()
            .find(|r| r.id == id)
            .unwrap();
        assert!(!cabin.is_available);

        assert!(!set_room_availability(&conn, 424242, true).unwrap());
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use jiff::Timestamp;
use rand::Rng;
use serde::Serialize;

/// A seated (or unseated) room member
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub user_id: String,
    pub seat: Option<u32>,
}

/// A game room in its pre-game or in-game state
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: String,
    pub name: Option<String>,
    pub seats: u32,
    pub fill_ai: bool,
    pub owner_id: Option<String>,
    /// user id -> member
    pub members: HashMap<String, Member>,
    pub created_at: Timestamp,
    pub game_id: Option<String>,
}

/// In-memory room registry
///
/// Cheap to clone; clones share the same underlying map. Injected through
/// router state rather than held as a process-wide singleton so tests run
/// against isolated instances.
#[derive(Debug, Default, Clone)]
pub struct RoomStore {
    rooms: Arc<dashmap::DashMap<String, Room>>,
}

impl RoomStore {
    /// Create a room with a generated id and register it
    pub fn create(&self, seats: u32, fill_ai: bool, name: Option<String>, owner_id: Option<String>) -> Room {
        let room = Room {
            id: short_id("r"),
            name,
            seats,
            fill_ai,
            owner_id,
            members: HashMap::new(),
            created_at: Timestamp::now(),
            game_id: None,
        };
        self.rooms.insert(room.id.clone(), room.clone());
        room
    }

    /// Snapshot of a room by id
    #[must_use]
    pub fn get(&self, room_id: &str) -> Option<Room> {
        self.rooms.get(room_id).map(|entry| entry.value().clone())
    }

    /// Snapshot of all rooms, ordered by creation time then id
    #[must_use]
    pub fn list(&self) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.rooms.iter().map(|entry| entry.value().clone()).collect();
        rooms.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        rooms
    }

    /// Remove a room; `false` if it did not exist
    pub fn delete(&self, room_id: &str) -> bool {
        self.rooms.remove(room_id).is_some()
    }

    /// Add a member to a room; joining twice is a no-op
    ///
    /// Returns the updated room, or `None` if the room does not exist.
    pub fn join(&self, room_id: &str, user_id: &str, seat: Option<u32>) -> Option<Room> {
        let mut room = self.rooms.get_mut(room_id)?;
        room.members
            .entry(user_id.to_owned())
            .or_insert_with(|| Member { user_id: user_id.to_owned(), seat });
        Some(room.value().clone())
    }

    /// Remove a member from a room; absent members are ignored
    ///
    /// Returns the updated room, or `None` if the room does not exist.
    pub fn leave(&self, room_id: &str, user_id: &str) -> Option<Room> {
        let mut room = self.rooms.get_mut(room_id)?;
        room.members.remove(user_id);
        Some(room.value().clone())
    }

    /// Attach a fresh game id to a room and return it
    pub fn start_game(&self, room_id: &str) -> Option<String> {
        let mut room = self.rooms.get_mut(room_id)?;
        let game_id = short_id("g");
        room.game_id = Some(game_id.clone());
        Some(game_id)
    }
}

/// Opaque id: prefix plus six random digits
///
/// Low-collision is all that is needed; ids are not secrets.
fn short_id(prefix: &str) -> String {
    let mut rng = rand::rng();
    format!("{prefix}_{:06}", rng.random_range(0..1_000_000u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_registers_the_room() {
        let store = RoomStore::default();
        let room = store.create(6, false, Some("A".to_owned()), Some("u1".to_owned()));

        assert!(room.id.starts_with("r_"));
        let fetched = store.get(&room.id).unwrap();
        assert_eq!(fetched.seats, 6);
        assert_eq!(fetched.name.as_deref(), Some("A"));
        assert!(fetched.members.is_empty());
        assert!(fetched.game_id.is_none());
    }

    #[test]
    fn list_orders_by_creation() {
        let store = RoomStore::default();
        let first = store.create(5, false, None, None);
        let second = store.create(6, false, None, None);

        let ids: Vec<String> = store.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn delete_is_reported_once() {
        let store = RoomStore::default();
        let room = store.create(6, false, None, None);

        assert!(store.delete(&room.id));
        assert!(!store.delete(&room.id));
        assert!(store.get(&room.id).is_none());
    }

    #[test]
    fn join_twice_is_a_no_op() {
        let store = RoomStore::default();
        let room = store.create(6, false, None, None);

        let joined = store.join(&room.id, "u1", Some(3)).unwrap();
        assert_eq!(joined.members["u1"].seat, Some(3));

        let rejoined = store.join(&room.id, "u1", Some(5)).unwrap();
        assert_eq!(rejoined.members.len(), 1);
        assert_eq!(rejoined.members["u1"].seat, Some(3));
    }

    #[test]
    fn leave_removes_the_member() {
        let store = RoomStore::default();
        let room = store.create(6, false, None, None);
        store.join(&room.id, "u1", None).unwrap();

        let left = store.leave(&room.id, "u1").unwrap();
        assert!(left.members.is_empty());

        // leaving again is harmless
        assert!(store.leave(&room.id, "u1").is_some());
    }

    #[test]
    fn start_game_attaches_an_id() {
        let store = RoomStore::default();
        let room = store.create(6, false, None, None);

        let game_id = store.start_game(&room.id).unwrap();
        assert!(game_id.starts_with("g_"));
        assert_eq!(store.get(&room.id).unwrap().game_id, Some(game_id));
    }

    #[test]
    fn operations_on_missing_rooms_return_none() {
        let store = RoomStore::default();
        assert!(store.get("r_404").is_none());
        assert!(store.join("r_404", "u1", None).is_none());
        assert!(store.leave("r_404", "u1").is_none());
        assert!(store.start_game("r_404").is_none());
    }
}

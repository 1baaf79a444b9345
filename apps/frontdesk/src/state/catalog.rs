//! # Catalog State
//!
//! Rooms and returning guests the desk can look up. Rooms change when the
//! manager adds one or moves one between housekeeping statuses; guest
//! history is read-only after initialization.

use std::sync::{Arc, Mutex};

use frontdesk_core::history::GuestRecord;
use frontdesk_core::Room;

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    rooms: Arc<Mutex<Vec<Room>>>,
    guests: Arc<Vec<GuestRecord>>,
}

impl CatalogState {
    pub fn new(rooms: Vec<Room>, guests: Vec<GuestRecord>) -> Self {
        CatalogState {
            rooms: Arc::new(Mutex::new(rooms)),
            guests: Arc::new(guests),
        }
    }

    /// Executes a function with read access to the rooms.
    pub fn with_rooms<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Room]) -> R,
    {
        let rooms = self.rooms.lock().expect("Catalog mutex poisoned");
        f(&rooms)
    }

    /// Executes a function with write access to the rooms.
    pub fn with_rooms_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Room>) -> R,
    {
        let mut rooms = self.rooms.lock().expect("Catalog mutex poisoned");
        f(&mut rooms)
    }

    pub fn room(&self, id: &str) -> Option<Room> {
        self.with_rooms(|rooms| rooms.iter().find(|r| r.id == id).cloned())
    }

    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    pub fn guest(&self, id: &str) -> Option<&GuestRecord> {
        self.guests.iter().find(|g| g.id == id)
    }
}

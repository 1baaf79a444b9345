//! # Room Commands
//!
//! Availability panel: list, filter, count and pick rooms. Room management:
//! add a room, move a room between housekeeping statuses.

use tracing::{debug, info, warn};

use frontdesk_core::rooms::{self, NewRoom, RoomFilter, RoomStats};
use frontdesk_core::{Room, RoomStatus};

use crate::error::ApiError;
use crate::state::{CatalogState, DeskState};

/// Rooms matching the filter, in catalog order.
pub fn list_rooms(catalog: &CatalogState, filter: RoomFilter) -> Vec<Room> {
    debug!(filter = ?filter, "list_rooms command");
    catalog.with_rooms(|all| {
        rooms::filter_rooms(all, &filter)
            .into_iter()
            .cloned()
            .collect()
    })
}

/// Per-status counts and occupancy for the whole catalog.
pub fn room_stats(catalog: &CatalogState) -> RoomStats {
    debug!("room_stats command");
    catalog.with_rooms(RoomStats::tally)
}

/// Selects a room for the guest at the desk.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown room id
/// - `ROOM_UNAVAILABLE` unless the room is available
pub fn select_room(
    catalog: &CatalogState,
    desk: &DeskState,
    room_id: &str,
) -> Result<Room, ApiError> {
    debug!(room_id = %room_id, "select_room command");

    let room = catalog
        .room(room_id)
        .ok_or_else(|| ApiError::not_found("Room", room_id))?;

    rooms::select_room(&room).map_err(|e| {
        warn!(room_id = %room_id, status = %room.status, "Room not selectable");
        e
    })?;

    desk.with_session_mut(|s| s.selected_room = Some(room.clone()));
    info!(room_id = %room.id, price = %room.price(), "Room selected");
    Ok(room)
}

/// Adds a room from the add-room form.
///
/// ## Errors
/// - `VALIDATION_ERROR` with `fieldErrors` for every failing form field
pub fn add_room(catalog: &CatalogState, form: NewRoom) -> Result<Room, ApiError> {
    debug!(number = %form.number, "add_room command");

    let room = catalog.with_rooms_mut(|all| {
        let room = form.build(all)?;
        all.push(room.clone());
        Ok::<_, ApiError>(room)
    })?;

    info!(room_id = %room.id, room_type = %room.room_type, "Room added");
    Ok(room)
}

/// Moves a room to another housekeeping status.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown room id
pub fn set_room_status(
    catalog: &CatalogState,
    room_id: &str,
    status: RoomStatus,
) -> Result<Room, ApiError> {
    debug!(room_id = %room_id, status = %status, "set_room_status command");

    let (previous, room) = catalog
        .with_rooms_mut(|all| {
            let room = all.iter_mut().find(|r| r.id == room_id)?;
            Some((rooms::change_status(room, status), room.clone()))
        })
        .ok_or_else(|| ApiError::not_found("Room", room_id))?;

    info!(room_id = %room_id, from = %previous, to = %status, "Room status changed");
    Ok(room)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::mock::{demo_guest_history, demo_rooms};
    use frontdesk_core::rooms::PriceRange;
    use frontdesk_core::{Money, RoomType};

    fn catalog() -> CatalogState {
        CatalogState::new(demo_rooms().unwrap(), demo_guest_history())
    }

    #[test]
    fn test_list_rooms_with_filter() {
        let filter = RoomFilter {
            room_type: Some(RoomType::Suite),
            price_range: PriceRange::From200To300,
        };
        let rooms = list_rooms(&catalog(), filter);
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "R102");
    }

    #[test]
    fn test_room_stats() {
        let stats = room_stats(&catalog());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.occupancy_rate, 17);
    }

    #[test]
    fn test_select_room() {
        let catalog = catalog();
        let desk = DeskState::new();

        let err = select_room(&catalog, &desk, "R103").unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomUnavailable);
        assert!(desk.with_session(|s| s.selected_room.is_none()));

        let err = select_room(&catalog, &desk, "R999").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let room = select_room(&catalog, &desk, "R104").unwrap();
        assert_eq!(room.name, "Premium Room 104");
        assert_eq!(
            desk.with_session(|s| s.selected_room.as_ref().map(|r| r.id.clone())),
            Some("R104".to_string())
        );
    }

    #[test]
    fn test_add_room() {
        let catalog = catalog();
        let form = NewRoom {
            number: "201".to_string(),
            room_type: "deluxe".to_string(),
            floor: "2".to_string(),
            price: "159.50".to_string(),
            amenities: vec!["WiFi".to_string(), "TV".to_string()],
        };

        let room = add_room(&catalog, form.clone()).unwrap();
        assert_eq!(room.id, "R201");
        assert_eq!(room.price(), Money::from_cents(15950));
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(room_stats(&catalog).total, 7);
        assert!(select_room(&catalog, &DeskState::new(), "R201").is_ok());

        let err = add_room(&catalog, form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field_errors.unwrap()["number"], "Room 201 already exists");
        assert_eq!(room_stats(&catalog).total, 7);
    }

    #[test]
    fn test_add_room_reports_all_fields() {
        let err = add_room(&catalog(), NewRoom::default()).unwrap_err();
        let fields = err.field_errors.unwrap();
        for field in ["number", "roomType", "floor", "price"] {
            assert!(fields.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_set_room_status() {
        let catalog = catalog();
        let desk = DeskState::new();

        let room = set_room_status(&catalog, "R105", RoomStatus::Available).unwrap();
        assert_eq!(room.status, RoomStatus::Available);
        assert!(select_room(&catalog, &desk, "R105").is_ok());

        set_room_status(&catalog, "R101", RoomStatus::Cleaning).unwrap();
        let err = select_room(&catalog, &desk, "R101").unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomUnavailable);

        let err = set_room_status(&catalog, "R999", RoomStatus::Available).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}

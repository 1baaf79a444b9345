//! # Room Catalog
//!
//! Filtering, selection and occupancy statistics over the room list shown
//! next to the booking form, plus the room-management screen's add-room
//! form and status changes.
//!
//! ```rust
//! use frontdesk_core::money::Money;
//! use frontdesk_core::rooms::{filter_rooms, PriceRange, RoomFilter};
//! use frontdesk_core::types::{Room, RoomStatus, RoomType};
//!
//! let rooms = vec![
//!     Room::new("R101", "Deluxe Room 101", RoomType::Deluxe, Money::from_major(150), 2, RoomStatus::Available).unwrap(),
//!     Room::new("R106", "Presidential Suite 106", RoomType::Suite, Money::from_major(450), 6, RoomStatus::Available).unwrap(),
//! ];
//! let filter = RoomFilter { room_type: None, price_range: "100-200".parse().unwrap() };
//! let matches = filter_rooms(&rooms, &filter);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].id, "R101");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, FormErrors, ValidationError};
use crate::money::Money;
use crate::types::{Room, RoomStatus, RoomType};

// =============================================================================
// Filters
// =============================================================================

/// Nightly-rate bracket offered by the availability panel. Bounds are
/// inclusive and in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "0-100")]
    UpTo100,
    #[serde(rename = "100-200")]
    From100To200,
    #[serde(rename = "200-300")]
    From200To300,
    #[serde(rename = "300+")]
    From300,
}

impl PriceRange {
    pub const ALL: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::UpTo100,
        PriceRange::From100To200,
        PriceRange::From200To300,
        PriceRange::From300,
    ];

    /// Form value ("100-200").
    pub const fn as_str(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::UpTo100 => "0-100",
            PriceRange::From100To200 => "100-200",
            PriceRange::From200To300 => "200-300",
            PriceRange::From300 => "300+",
        }
    }

    /// `(min, max)` bounds; `None` for no limit on that side.
    pub const fn bounds(&self) -> (Option<Money>, Option<Money>) {
        match self {
            PriceRange::All => (None, None),
            PriceRange::UpTo100 => (Some(Money::from_major(0)), Some(Money::from_major(100))),
            PriceRange::From100To200 => {
                (Some(Money::from_major(100)), Some(Money::from_major(200)))
            }
            PriceRange::From200To300 => {
                (Some(Money::from_major(200)), Some(Money::from_major(300)))
            }
            PriceRange::From300 => (Some(Money::from_major(300)), None),
        }
    }

    pub fn contains(&self, price: Money) -> bool {
        let (min, max) = self.bounds();
        min.map_or(true, |min| price >= min) && max.map_or(true, |max| price <= max)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        PriceRange::ALL
            .into_iter()
            .find(|range| range.as_str() == value)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "price range".to_string(),
                allowed: PriceRange::ALL.iter().map(|r| r.as_str().to_string()).collect(),
            })
    }
}

/// Filter applied to the catalog. The default shows every room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoomFilter {
    /// `None` means all room types.
    pub room_type: Option<RoomType>,
    pub price_range: PriceRange,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        self.room_type.map_or(true, |t| room.room_type == t)
            && self.price_range.contains(room.price())
    }
}

/// Rooms matching `filter`, in catalog order.
///
/// Status is not part of the filter: unavailable rooms are still listed,
/// they just cannot be selected.
pub fn filter_rooms<'a>(rooms: &'a [Room], filter: &RoomFilter) -> Vec<&'a Room> {
    rooms.iter().filter(|room| filter.matches(room)).collect()
}

/// Checks that a room can be chosen for a new booking.
pub fn select_room(room: &Room) -> CoreResult<&Room> {
    if !room.is_bookable() {
        return Err(CoreError::RoomUnavailable {
            room_id: room.id.clone(),
            status: room.status,
        });
    }
    Ok(room)
}

// =============================================================================
// Statistics
// =============================================================================

/// Per-status room counts for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    pub total: u32,
    pub available: u32,
    pub occupied: u32,
    pub maintenance: u32,
    pub cleaning: u32,
    pub reserved: u32,
    /// Whole percent of rooms occupied, rounded half up. 0 for no rooms.
    pub occupancy_rate: u32,
}

impl RoomStats {
    pub fn tally(rooms: &[Room]) -> Self {
        let mut stats = rooms.iter().fold(RoomStats::default(), |mut stats, room| {
            stats.total += 1;
            match room.status {
                RoomStatus::Available => stats.available += 1,
                RoomStatus::Occupied => stats.occupied += 1,
                RoomStatus::Maintenance => stats.maintenance += 1,
                RoomStatus::Cleaning => stats.cleaning += 1,
                RoomStatus::Reserved => stats.reserved += 1,
            }
            stats
        });

        if stats.total > 0 {
            stats.occupancy_rate = (stats.occupied * 200 + stats.total) / (stats.total * 2);
        }
        stats
    }
}

// =============================================================================
// Room Management
// =============================================================================

/// Fields of the add-room form, in the order the form lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum RoomFormField {
    Number,
    RoomType,
    Floor,
    Price,
}

/// Floors the add-room form offers.
pub const FLOORS: std::ops::RangeInclusive<u8> = 1..=4;

/// The add-room form exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct NewRoom {
    pub number: String,
    pub room_type: String,
    pub floor: String,
    /// Nightly rate in whole currency units ("89.99").
    pub price: String,
    pub amenities: Vec<String>,
}

/// Catalog id for a room number ("101" → "R101").
pub fn room_id(number: &str) -> String {
    format!("R{}", number.trim())
}

impl NewRoom {
    /// Validates every field at once and builds the room. New rooms start
    /// available, sized by [`RoomType::default_capacity`].
    pub fn build(&self, existing: &[Room]) -> Result<Room, FormErrors<RoomFormField>> {
        let mut errors = FormErrors::new();

        let number = self.number.trim();
        if number.is_empty() {
            errors.insert(RoomFormField::Number, "Room number is required");
        } else if existing.iter().any(|r| r.id == room_id(number)) {
            errors.insert(RoomFormField::Number, format!("Room {} already exists", number));
        }

        let room_type = if self.room_type.trim().is_empty() {
            errors.insert(RoomFormField::RoomType, "Room type is required");
            None
        } else {
            self.room_type
                .parse::<RoomType>()
                .map_err(|e| errors.insert(RoomFormField::RoomType, e.to_string()))
                .ok()
        };

        let floor = self.floor.trim();
        let floor = match floor.parse::<u8>() {
            Ok(n) if FLOORS.contains(&n) => Some(n),
            _ if floor.is_empty() => {
                errors.insert(RoomFormField::Floor, "Floor is required");
                None
            }
            _ => {
                errors.insert(
                    RoomFormField::Floor,
                    format!("Floor must be between {} and {}", FLOORS.start(), FLOORS.end()),
                );
                None
            }
        };

        let price = parse_nightly_rate(&self.price);
        if price.is_none() {
            errors.insert(RoomFormField::Price, "Valid price is required");
        }

        let (Some(room_type), Some(floor), Some(price), true) =
            (room_type, floor, price, errors.is_empty())
        else {
            return Err(errors);
        };

        let room = Room::new(
            room_id(number),
            format!("{} {}", room_type.label(), number),
            room_type,
            price,
            room_type.default_capacity(),
            RoomStatus::Available,
        )
        .map_err(|e| {
            let mut errors = FormErrors::new();
            errors.insert(RoomFormField::Price, e.to_string());
            errors
        })?;

        Ok(room
            .with_floor(floor)
            .with_amenities(self.amenities.iter().map(|a| a.trim()).filter(|a| !a.is_empty())))
    }
}

/// A positive amount with at most two decimals, as cents.
fn parse_nightly_rate(value: &str) -> Option<Money> {
    let amount = value.trim().parse::<Decimal>().ok()?.normalize();
    if amount <= Decimal::ZERO || amount.scale() > 2 {
        return None;
    }
    (amount * Decimal::ONE_HUNDRED).to_i64().map(Money::from_cents)
}

/// Moves a room to a new housekeeping status. Returns the previous one.
pub fn change_status(room: &mut Room, status: RoomStatus) -> RoomStatus {
    std::mem::replace(&mut room.status, status)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Room> {
        vec![
            Room::new("R101", "Deluxe Room 101", RoomType::Deluxe, Money::from_major(150), 2, RoomStatus::Available).unwrap(),
            Room::new("R102", "Executive Suite 102", RoomType::Suite, Money::from_major(280), 4, RoomStatus::Available).unwrap(),
            Room::new("R103", "Standard Room 103", RoomType::Standard, Money::from_major(89), 2, RoomStatus::Occupied).unwrap(),
            Room::new("R104", "Premium Room 104", RoomType::Premium, Money::from_major(220), 3, RoomStatus::Available).unwrap(),
            Room::new("R105", "Deluxe Room 105", RoomType::Deluxe, Money::from_major(165), 2, RoomStatus::Maintenance).unwrap(),
            Room::new("R106", "Presidential Suite 106", RoomType::Suite, Money::from_major(450), 6, RoomStatus::Available).unwrap(),
        ]
    }

    fn ids(rooms: Vec<&Room>) -> Vec<&str> {
        rooms.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let rooms = catalog();
        let all = filter_rooms(&rooms, &RoomFilter::default());
        assert_eq!(ids(all), vec!["R101", "R102", "R103", "R104", "R105", "R106"]);
    }

    #[test]
    fn test_filter_by_type() {
        let rooms = catalog();
        let filter = RoomFilter {
            room_type: Some(RoomType::Deluxe),
            price_range: PriceRange::All,
        };
        assert_eq!(ids(filter_rooms(&rooms, &filter)), vec!["R101", "R105"]);
    }

    #[test]
    fn test_filter_by_price_range() {
        let rooms = catalog();
        let by = |range: PriceRange| {
            let filter = RoomFilter {
                room_type: None,
                price_range: range,
            };
            ids(filter_rooms(&rooms, &filter))
        };
        assert_eq!(by(PriceRange::UpTo100), vec!["R103"]);
        assert_eq!(by(PriceRange::From200To300), vec!["R102", "R104"]);
        assert_eq!(by(PriceRange::From300), vec!["R106"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        assert!(PriceRange::UpTo100.contains(Money::from_major(100)));
        assert!(PriceRange::From100To200.contains(Money::from_major(100)));
        assert!(PriceRange::From300.contains(Money::from_major(300)));
        assert!(!PriceRange::UpTo100.contains(Money::from_cents(10001)));
    }

    #[test]
    fn test_price_range_parsing() {
        assert_eq!("300+".parse::<PriceRange>().unwrap(), PriceRange::From300);
        assert_eq!(" all ".parse::<PriceRange>().unwrap(), PriceRange::All);
        assert!("50-60".parse::<PriceRange>().is_err());
        assert_eq!(serde_json::to_string(&PriceRange::UpTo100).unwrap(), "\"0-100\"");
    }

    #[test]
    fn test_select_room_requires_available() {
        let rooms = catalog();
        assert_eq!(select_room(&rooms[0]).unwrap().id, "R101");
        assert!(matches!(
            select_room(&rooms[2]),
            Err(CoreError::RoomUnavailable { status: RoomStatus::Occupied, .. })
        ));
        assert!(select_room(&rooms[4]).is_err());
    }

    #[test]
    fn test_room_stats() {
        let stats = RoomStats::tally(&catalog());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.available, 4);
        assert_eq!(stats.occupied, 1);
        assert_eq!(stats.maintenance, 1);
        // 1/6 = 16.67%
        assert_eq!(stats.occupancy_rate, 17);
    }

    #[test]
    fn test_room_stats_empty_catalog() {
        assert_eq!(RoomStats::tally(&[]), RoomStats::default());
    }

    fn form(number: &str, room_type: &str, floor: &str, price: &str) -> NewRoom {
        NewRoom {
            number: number.to_string(),
            room_type: room_type.to_string(),
            floor: floor.to_string(),
            price: price.to_string(),
            amenities: vec!["WiFi".to_string(), " ".to_string(), "Balcony".to_string()],
        }
    }

    #[test]
    fn test_new_room_builds_available_room() {
        let room = form("207", "suite", "2", "189.50").build(&catalog()).unwrap();
        assert_eq!(room.id, "R207");
        assert_eq!(room.name, "Suite 207");
        assert_eq!(room.room_type, RoomType::Suite);
        assert_eq!(room.price(), Money::from_cents(18950));
        assert_eq!(room.capacity, 4);
        assert_eq!(room.floor, Some(2));
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(room.amenities, vec!["WiFi", "Balcony"]);
    }

    #[test]
    fn test_new_room_reports_every_field() {
        let errors = NewRoom::default().build(&catalog()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(RoomFormField::Number), Some("Room number is required"));
        assert_eq!(errors.get(RoomFormField::RoomType), Some("Room type is required"));
        assert_eq!(errors.get(RoomFormField::Floor), Some("Floor is required"));
        assert_eq!(errors.get(RoomFormField::Price), Some("Valid price is required"));
    }

    #[test]
    fn test_new_room_rejects_bad_values() {
        let errors = form("101", "penthouse", "9", "-5").build(&catalog()).unwrap_err();
        assert_eq!(errors.get(RoomFormField::Number), Some("Room 101 already exists"));
        assert!(errors.contains(RoomFormField::RoomType));
        assert_eq!(errors.get(RoomFormField::Floor), Some("Floor must be between 1 and 4"));
        assert!(errors.contains(RoomFormField::Price));

        for price in ["0", "abc", "10.005"] {
            let errors = form("301", "deluxe", "3", price).build(&catalog()).unwrap_err();
            assert_eq!(errors.len(), 1, "price {:?}", price);
        }
        assert!(form("301", "deluxe", "3", "10.50").build(&catalog()).is_ok());
    }

    #[test]
    fn test_change_status_returns_previous() {
        let mut rooms = catalog();
        let previous = change_status(&mut rooms[4], RoomStatus::Available);
        assert_eq!(previous, RoomStatus::Maintenance);
        assert!(select_room(&rooms[4]).is_ok());
        assert_eq!(RoomStats::tally(&rooms).available, 5);
    }
}

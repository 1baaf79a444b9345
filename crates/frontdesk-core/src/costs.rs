//! # Stay Cost Calculator
//!
//! Pure computation of a booking's folio from the selected room and the
//! guest's add-on choices.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  nights          = |checkOut − checkIn| in calendar days               │
//! │  subtotal        = room.price × nights                                  │
//! │  service charges = 25 (early check-in) + 35 (late check-out)           │
//! │                    + 45 (airport pickup), each only when selected       │
//! │  tax             = 12% × (subtotal + service charges)                  │
//! │  total           = subtotal + service charges + tax                     │
//! │                                                                         │
//! │  Tax and total stay exact (89.99 → tax 10.7988). Rounding to cents is  │
//! │  left to whoever formats the number.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use frontdesk_core::costs::compute_costs;
//! use frontdesk_core::guest::{GuestData, GuestField};
//! use frontdesk_core::money::Money;
//! use frontdesk_core::types::{Room, RoomStatus, RoomType};
//! use rust_decimal::Decimal;
//!
//! let room = Room::new("R101", "Deluxe Room 101", RoomType::Deluxe,
//!                      Money::from_major(100), 2, RoomStatus::Available).unwrap();
//! let mut guest = GuestData::new();
//! guest.set_text(GuestField::CheckInDate, "2025-07-01");
//! guest.set_text(GuestField::CheckOutDate, "2025-07-04");
//!
//! let costs = compute_costs(&guest, Some(&room));
//! assert_eq!(costs.nights, 3);
//! assert_eq!(costs.total, Decimal::new(336, 0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::guest::GuestData;
use crate::money::Money;
use crate::types::{Room, TaxRate};
use crate::validation::parse_stay_date;

/// Surcharge for checking in before the standard time.
pub const EARLY_CHECK_IN_FEE: Money = Money::from_major(25);

/// Surcharge for checking out after the standard time.
pub const LATE_CHECK_OUT_FEE: Money = Money::from_major(35);

/// Airport pickup service.
pub const AIRPORT_PICKUP_FEE: Money = Money::from_major(45);

/// Hotel tax, applied to room charges and service charges alike.
pub const HOTEL_TAX_RATE: TaxRate = TaxRate::from_bps(1200);

/// Breakdown of a stay's charges. Derived, never stored.
///
/// `tax` and `total` are exact decimals in whole currency units and
/// serialize as strings ("100.7888").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayCosts {
    pub nights: u32,
    pub room_rate: Money,
    pub subtotal: Money,
    pub early_check_in_fee: Money,
    pub late_check_out_fee: Money,
    pub airport_pickup_fee: Money,
    pub service_charges: Money,
    #[ts(as = "String")]
    pub tax: Decimal,
    #[ts(as = "String")]
    pub total: Decimal,
}

impl StayCosts {
    /// The folio shown when nothing can be priced yet.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Number of nights between two form dates.
///
/// Dates have no time-of-day, so the day difference is already whole.
/// The order of the two dates does not matter. Missing or unparseable
/// dates count as zero nights.
///
/// ```rust
/// use frontdesk_core::costs::stay_nights;
///
/// assert_eq!(stay_nights("2025-07-01", "2025-07-04"), 3);
/// assert_eq!(stay_nights("2025-07-04", "2025-07-01"), 3);
/// assert_eq!(stay_nights("2025-07-01", "2025-07-01"), 0);
/// assert_eq!(stay_nights("", "2025-07-04"), 0);
/// ```
pub fn stay_nights(check_in: &str, check_out: &str) -> u32 {
    match (parse_stay_date(check_in), parse_stay_date(check_out)) {
        (Ok(start), Ok(end)) => {
            let days = (end - start).num_days().unsigned_abs();
            u32::try_from(days).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

/// Computes the folio for a guest and the selected room.
///
/// With no room selected there is nothing to price, so every line is zero.
/// Deterministic: identical inputs always give identical output.
pub fn compute_costs(guest: &GuestData, room: Option<&Room>) -> StayCosts {
    let Some(room) = room else {
        return StayCosts::zero();
    };

    let nights = stay_nights(&guest.stay.check_in_date, &guest.stay.check_out_date);
    let room_rate = room.price();
    let subtotal = room_rate.times(nights as i64);

    let fee = |selected: bool, amount: Money| if selected { amount } else { Money::zero() };
    let early_check_in_fee = fee(guest.stay.early_check_in, EARLY_CHECK_IN_FEE);
    let late_check_out_fee = fee(guest.stay.late_check_out, LATE_CHECK_OUT_FEE);
    let airport_pickup_fee = fee(guest.stay.airport_pickup, AIRPORT_PICKUP_FEE);

    let service_charges = early_check_in_fee + late_check_out_fee + airport_pickup_fee;
    let taxable = subtotal + service_charges;
    let tax = taxable.tax_at(HOTEL_TAX_RATE).normalize();
    let total = (taxable.to_decimal() + tax).normalize();

    StayCosts {
        nights,
        room_rate,
        subtotal,
        early_check_in_fee,
        late_check_out_fee,
        airport_pickup_fee,
        service_charges,
        tax,
        total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::{GuestField, GuestFlag};
    use crate::types::{RoomStatus, RoomType};

    fn room(price: i64) -> Room {
        Room::new(
            "R101",
            "Deluxe Room 101",
            RoomType::Deluxe,
            Money::from_major(price),
            2,
            RoomStatus::Available,
        )
        .unwrap()
    }

    fn guest(check_in: &str, check_out: &str) -> GuestData {
        let mut guest = GuestData::new();
        guest.set_text(GuestField::CheckInDate, check_in);
        guest.set_text(GuestField::CheckOutDate, check_out);
        guest
    }

    #[test]
    fn test_three_nights_without_addons() {
        let costs = compute_costs(&guest("2025-07-01", "2025-07-04"), Some(&room(100)));
        assert_eq!(costs.nights, 3);
        assert_eq!(costs.subtotal, Money::from_major(300));
        assert_eq!(costs.service_charges, Money::zero());
        assert_eq!(costs.tax, Decimal::new(36, 0));
        assert_eq!(costs.total, Decimal::new(336, 0));
    }

    #[test]
    fn test_three_nights_with_every_addon() {
        let mut g = guest("2025-07-01", "2025-07-04");
        g.set_flag(GuestFlag::EarlyCheckIn, true);
        g.set_flag(GuestFlag::LateCheckOut, true);
        g.set_flag(GuestFlag::AirportPickup, true);

        let costs = compute_costs(&g, Some(&room(100)));
        assert_eq!(costs.early_check_in_fee, Money::from_major(25));
        assert_eq!(costs.late_check_out_fee, Money::from_major(35));
        assert_eq!(costs.airport_pickup_fee, Money::from_major(45));
        assert_eq!(costs.service_charges, Money::from_major(105));
        assert_eq!(costs.tax, Decimal::new(4860, 2));
        assert_eq!(costs.total, Decimal::new(45360, 2));
    }

    #[test]
    fn test_single_addon() {
        let mut g = guest("2025-07-01", "2025-07-02");
        g.set_flag(GuestFlag::LateCheckOut, true);

        let costs = compute_costs(&g, Some(&room(89)));
        assert_eq!(costs.subtotal, Money::from_major(89));
        assert_eq!(costs.service_charges, Money::from_major(35));
        assert_eq!(costs.early_check_in_fee, Money::zero());
        // 12% of 124.00
        assert_eq!(costs.tax, Decimal::new(1488, 2));
        assert_eq!(costs.total, Decimal::new(13888, 2));
    }

    #[test]
    fn test_fractional_rate_is_not_rounded() {
        let priced = Room::new(
            "R201",
            "Standard Room 201",
            RoomType::Standard,
            Money::from_cents(8999),
            2,
            RoomStatus::Available,
        )
        .unwrap();
        let costs = compute_costs(&guest("2025-07-01", "2025-07-02"), Some(&priced));

        assert_eq!(costs.nights, 1);
        assert_eq!(costs.subtotal, Money::from_cents(8999));
        assert_eq!(costs.tax, Decimal::new(107988, 4));
        assert_eq!(costs.total, Decimal::new(1007888, 4));
        assert_eq!(costs.total.to_string(), "100.7888");
    }

    #[test]
    fn test_no_room_selected_is_all_zero() {
        let mut g = guest("2025-07-01", "2025-07-04");
        g.set_flag(GuestFlag::AirportPickup, true);

        let costs = compute_costs(&g, None);
        assert_eq!(costs.nights, 0);
        assert_eq!(costs.total, Decimal::ZERO);
        assert_eq!(costs, StayCosts::zero());
    }

    #[test]
    fn test_missing_dates_price_only_addons() {
        let mut g = GuestData::new();
        g.set_flag(GuestFlag::EarlyCheckIn, true);

        let costs = compute_costs(&g, Some(&room(150)));
        assert_eq!(costs.nights, 0);
        assert_eq!(costs.subtotal, Money::zero());
        assert_eq!(costs.total, Decimal::new(28, 0));
    }

    #[test]
    fn test_inverted_and_same_day_dates() {
        assert_eq!(stay_nights("2025-07-04", "2025-07-01"), 3);
        assert_eq!(stay_nights("2025-07-01", "2025-07-01"), 0);
        assert_eq!(stay_nights("2024-02-28", "2024-03-01"), 2);
        assert_eq!(stay_nights("garbage", "2025-07-01"), 0);
    }

    #[test]
    fn test_deterministic() {
        let mut g = guest("2025-12-30", "2026-01-02");
        g.set_flag(GuestFlag::AirportPickup, true);
        let r = room(280);

        let first = compute_costs(&g, Some(&r));
        let second = compute_costs(&g, Some(&r));
        assert_eq!(first, second);
        assert_eq!(first.nights, 3);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let mut g = guest("2025-07-01", "2025-07-08");
        g.set_flag(GuestFlag::EarlyCheckIn, true);
        let costs = compute_costs(&g, Some(&room(165)));
        assert_eq!(
            costs.total,
            (costs.subtotal + costs.service_charges).to_decimal() + costs.tax
        );
    }
}

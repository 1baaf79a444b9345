//! # Guest Booking Records
//!
//! The data a receptionist collects while booking a guest, split into one
//! record per wizard step.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GuestData                                                              │
//! │  ├── profile: GuestProfile       (step 1: Guest Info)                  │
//! │  │     firstName lastName email phone idType idNumber address           │
//! │  ├── stay: StayDetails           (step 2: Booking Details)             │
//! │  │     checkInDate checkOutDate roomType guestCount specialRequests     │
//! │  │     earlyCheckIn lateCheckOut airportPickup                          │
//! │  └── additional: AdditionalInfo  (step 3: Additional Info)             │
//! │        emergencyContactName emergencyContactPhone vehicleModel          │
//! │        licensePlate agreeTerms receiveOffers                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text inputs are kept exactly as typed; they are checked by
//! [`crate::validation`] when the wizard advances. Serialized flat, in the
//! camelCase shape the browser form uses.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::booking::BookingStep;

// =============================================================================
// Field Addressing
// =============================================================================

/// A text input on the booking form.
///
/// Declaration order is form order, which is also the order errors are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum GuestField {
    FirstName,
    LastName,
    Email,
    Phone,
    IdType,
    IdNumber,
    Address,
    CheckInDate,
    CheckOutDate,
    RoomType,
    GuestCount,
    SpecialRequests,
    EmergencyContactName,
    EmergencyContactPhone,
    VehicleModel,
    LicensePlate,
}

impl GuestField {
    /// Label used in validation messages ("Phone number is required").
    pub const fn label(&self) -> &'static str {
        match self {
            GuestField::FirstName => "First name",
            GuestField::LastName => "Last name",
            GuestField::Email => "Email",
            GuestField::Phone => "Phone number",
            GuestField::IdType => "ID type",
            GuestField::IdNumber => "ID number",
            GuestField::Address => "Address",
            GuestField::CheckInDate => "Check-in date",
            GuestField::CheckOutDate => "Check-out date",
            GuestField::RoomType => "Room type",
            GuestField::GuestCount => "Guest count",
            GuestField::SpecialRequests => "Special requests",
            GuestField::EmergencyContactName => "Emergency contact name",
            GuestField::EmergencyContactPhone => "Emergency contact phone",
            GuestField::VehicleModel => "Vehicle model",
            GuestField::LicensePlate => "License plate",
        }
    }

    /// The wizard step the field is rendered on.
    pub const fn step(&self) -> BookingStep {
        match self {
            GuestField::FirstName
            | GuestField::LastName
            | GuestField::Email
            | GuestField::Phone
            | GuestField::IdType
            | GuestField::IdNumber
            | GuestField::Address => BookingStep::GuestInfo,
            GuestField::CheckInDate
            | GuestField::CheckOutDate
            | GuestField::RoomType
            | GuestField::GuestCount
            | GuestField::SpecialRequests => BookingStep::BookingDetails,
            GuestField::EmergencyContactName
            | GuestField::EmergencyContactPhone
            | GuestField::VehicleModel
            | GuestField::LicensePlate => BookingStep::AdditionalInfo,
        }
    }
}

/// A checkbox on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum GuestFlag {
    EarlyCheckIn,
    LateCheckOut,
    AirportPickup,
    AgreeTerms,
    ReceiveOffers,
}

// =============================================================================
// Step Records
// =============================================================================

/// Step 1: who the guest is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Form value of [`crate::types::IdType`] ("passport", ...).
    pub id_type: String,
    pub id_number: String,
    pub address: String,
}

/// Step 2: the stay itself and its paid add-ons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct StayDetails {
    /// ISO date, `YYYY-MM-DD`.
    pub check_in_date: String,
    /// ISO date, `YYYY-MM-DD`.
    pub check_out_date: String,
    pub room_type: String,
    /// "1".."4" or "5+".
    pub guest_count: String,
    pub special_requests: String,
    pub early_check_in: bool,
    pub late_check_out: bool,
    pub airport_pickup: bool,
}

/// Step 3: optional extras and consent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalInfo {
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub vehicle_model: String,
    pub license_plate: String,
    pub agree_terms: bool,
    pub receive_offers: bool,
}

/// Everything collected by the booking wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuestData {
    #[serde(flatten)]
    #[ts(flatten)]
    pub profile: GuestProfile,

    #[serde(flatten)]
    #[ts(flatten)]
    pub stay: StayDetails,

    #[serde(flatten)]
    #[ts(flatten)]
    pub additional: AdditionalInfo,
}

impl GuestData {
    /// An empty form, as mounted at the start of a booking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a text field.
    pub fn text(&self, field: GuestField) -> &str {
        match field {
            GuestField::FirstName => &self.profile.first_name,
            GuestField::LastName => &self.profile.last_name,
            GuestField::Email => &self.profile.email,
            GuestField::Phone => &self.profile.phone,
            GuestField::IdType => &self.profile.id_type,
            GuestField::IdNumber => &self.profile.id_number,
            GuestField::Address => &self.profile.address,
            GuestField::CheckInDate => &self.stay.check_in_date,
            GuestField::CheckOutDate => &self.stay.check_out_date,
            GuestField::RoomType => &self.stay.room_type,
            GuestField::GuestCount => &self.stay.guest_count,
            GuestField::SpecialRequests => &self.stay.special_requests,
            GuestField::EmergencyContactName => &self.additional.emergency_contact_name,
            GuestField::EmergencyContactPhone => &self.additional.emergency_contact_phone,
            GuestField::VehicleModel => &self.additional.vehicle_model,
            GuestField::LicensePlate => &self.additional.license_plate,
        }
    }

    /// Overwrites a text field with the value as typed.
    pub fn set_text(&mut self, field: GuestField, value: impl Into<String>) {
        let slot = match field {
            GuestField::FirstName => &mut self.profile.first_name,
            GuestField::LastName => &mut self.profile.last_name,
            GuestField::Email => &mut self.profile.email,
            GuestField::Phone => &mut self.profile.phone,
            GuestField::IdType => &mut self.profile.id_type,
            GuestField::IdNumber => &mut self.profile.id_number,
            GuestField::Address => &mut self.profile.address,
            GuestField::CheckInDate => &mut self.stay.check_in_date,
            GuestField::CheckOutDate => &mut self.stay.check_out_date,
            GuestField::RoomType => &mut self.stay.room_type,
            GuestField::GuestCount => &mut self.stay.guest_count,
            GuestField::SpecialRequests => &mut self.stay.special_requests,
            GuestField::EmergencyContactName => &mut self.additional.emergency_contact_name,
            GuestField::EmergencyContactPhone => &mut self.additional.emergency_contact_phone,
            GuestField::VehicleModel => &mut self.additional.vehicle_model,
            GuestField::LicensePlate => &mut self.additional.license_plate,
        };
        *slot = value.into();
    }

    pub fn flag(&self, flag: GuestFlag) -> bool {
        match flag {
            GuestFlag::EarlyCheckIn => self.stay.early_check_in,
            GuestFlag::LateCheckOut => self.stay.late_check_out,
            GuestFlag::AirportPickup => self.stay.airport_pickup,
            GuestFlag::AgreeTerms => self.additional.agree_terms,
            GuestFlag::ReceiveOffers => self.additional.receive_offers,
        }
    }

    pub fn set_flag(&mut self, flag: GuestFlag, value: bool) {
        let slot = match flag {
            GuestFlag::EarlyCheckIn => &mut self.stay.early_check_in,
            GuestFlag::LateCheckOut => &mut self.stay.late_check_out,
            GuestFlag::AirportPickup => &mut self.stay.airport_pickup,
            GuestFlag::AgreeTerms => &mut self.additional.agree_terms,
            GuestFlag::ReceiveOffers => &mut self.additional.receive_offers,
        };
        *slot = value;
    }

    /// "First Last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.profile.first_name.trim(), self.profile.last_name.trim())
            .trim()
            .to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fields_round_trip_through_accessors() {
        let mut guest = GuestData::new();
        guest.set_text(GuestField::Email, "ana@example.com");
        guest.set_text(GuestField::CheckOutDate, "2025-07-04");
        guest.set_text(GuestField::LicensePlate, "ABC-123");

        assert_eq!(guest.text(GuestField::Email), "ana@example.com");
        assert_eq!(guest.stay.check_out_date, "2025-07-04");
        assert_eq!(guest.additional.license_plate, "ABC-123");
    }

    #[test]
    fn test_flags() {
        let mut guest = GuestData::new();
        assert!(!guest.flag(GuestFlag::AirportPickup));
        guest.set_flag(GuestFlag::AirportPickup, true);
        guest.set_flag(GuestFlag::AgreeTerms, true);
        assert!(guest.stay.airport_pickup);
        assert!(guest.additional.agree_terms);
    }

    #[test]
    fn test_field_steps() {
        assert_eq!(GuestField::IdNumber.step(), BookingStep::GuestInfo);
        assert_eq!(GuestField::GuestCount.step(), BookingStep::BookingDetails);
        assert_eq!(GuestField::VehicleModel.step(), BookingStep::AdditionalInfo);
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let mut guest = GuestData::new();
        guest.set_text(GuestField::FirstName, "Ana");
        guest.set_flag(GuestFlag::EarlyCheckIn, true);

        let json = serde_json::to_value(&guest).unwrap();
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["earlyCheckIn"], true);
        assert_eq!(json["receiveOffers"], false);
    }

    #[test]
    fn test_deserializes_partial_form() {
        let guest: GuestData =
            serde_json::from_str(r#"{"firstName":"Ana","checkInDate":"2025-07-01"}"#).unwrap();
        assert_eq!(guest.profile.first_name, "Ana");
        assert_eq!(guest.stay.check_in_date, "2025-07-01");
        assert!(guest.profile.email.is_empty());
    }

    #[test]
    fn test_full_name() {
        let mut guest = GuestData::new();
        guest.set_text(GuestField::FirstName, " Ana ");
        guest.set_text(GuestField::LastName, "Silva");
        assert_eq!(guest.full_name(), "Ana Silva");
    }
}

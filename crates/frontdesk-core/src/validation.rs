//! # Validation Module
//!
//! Input validation for the booking and check-in flows.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser form                                                 │
//! │  └── `required` markers, input types                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Wizard step gate (THIS MODULE)                               │
//! │  ├── validate_step(step, guest) → Result<(), FieldErrors>              │
//! │  └── Pure: no state is mutated, the wizard decides what to do          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cost calculator                                              │
//! │  └── Degrades to zero on unparseable dates, never fails                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use frontdesk_core::booking::BookingStep;
//! use frontdesk_core::guest::{GuestData, GuestField};
//! use frontdesk_core::validation::validate_step;
//!
//! let guest = GuestData::new();
//! let errors = validate_step(BookingStep::GuestInfo, &guest).unwrap_err();
//! assert_eq!(errors.get(GuestField::FirstName), Some("First name is required"));
//! ```

use chrono::NaiveDate;

use crate::booking::BookingStep;
use crate::error::{FieldErrors, ValidationError};
use crate::guest::{GuestData, GuestField};

/// Result type for single-value validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fields that must be non-empty to leave Guest Info.
pub const GUEST_INFO_REQUIRED: [GuestField; 6] = [
    GuestField::FirstName,
    GuestField::LastName,
    GuestField::Email,
    GuestField::Phone,
    GuestField::IdType,
    GuestField::IdNumber,
];

/// Fields that must be non-empty to leave Booking Details.
pub const BOOKING_DETAILS_REQUIRED: [GuestField; 4] = [
    GuestField::CheckInDate,
    GuestField::CheckOutDate,
    GuestField::RoomType,
    GuestField::GuestCount,
];

// =============================================================================
// Step Validators
// =============================================================================

/// Required fields for a step. Additional Info has none.
pub fn required_fields(step: BookingStep) -> &'static [GuestField] {
    match step {
        BookingStep::GuestInfo => &GUEST_INFO_REQUIRED,
        BookingStep::BookingDetails => &BOOKING_DETAILS_REQUIRED,
        BookingStep::AdditionalInfo => &[],
    }
}

/// Validates every required field of `step`.
///
/// ## Returns
/// - `Ok(())` when all required fields are filled
/// - `Err(FieldErrors)` with one message per missing field
pub fn validate_step(step: BookingStep, guest: &GuestData) -> Result<(), FieldErrors> {
    required_fields(step)
        .iter()
        .filter_map(|&field| {
            validate_required(field.label(), guest.text(field))
                .err()
                .map(|err| (field, err))
        })
        .collect::<FieldErrors>()
        .into_result()
}

// =============================================================================
// Value Validators
// =============================================================================

/// Validates that a value is present.
///
/// Whitespace-only input counts as missing.
///
/// ```rust
/// use frontdesk_core::validation::validate_required;
///
/// assert!(validate_required("Email", "ana@example.com").is_ok());
/// assert!(validate_required("Email", "   ").is_err());
/// ```
pub fn validate_required(label: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: label.to_string(),
        });
    }

    Ok(())
}

/// Validates a nightly rate in cents. Zero is allowed (complimentary rooms).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Parses a stay date as entered in the form.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a `T`/space separated time
/// part which is ignored: stays are counted in calendar days.
///
/// ```rust
/// use frontdesk_core::validation::parse_stay_date;
///
/// assert!(parse_stay_date("2025-07-01").is_ok());
/// assert!(parse_stay_date("2025-07-01T14:00").is_ok());
/// assert!(parse_stay_date("07/01/2025").is_err());
/// ```
pub fn parse_stay_date(value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    let date_part = value
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(value);

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
        ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: e.to_string(),
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn guest_info_complete() -> GuestData {
        let mut guest = GuestData::new();
        guest.set_text(GuestField::FirstName, "John");
        guest.set_text(GuestField::LastName, "Smith");
        guest.set_text(GuestField::Email, "john.smith@email.com");
        guest.set_text(GuestField::Phone, "+1-555-0123");
        guest.set_text(GuestField::IdType, "passport");
        guest.set_text(GuestField::IdNumber, "P123456789");
        guest
    }

    #[test]
    fn test_empty_guest_info_reports_every_required_field() {
        let errors = validate_step(BookingStep::GuestInfo, &GuestData::new()).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(GuestField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(GuestField::LastName), Some("Last name is required"));
        assert_eq!(errors.get(GuestField::Email), Some("Email is required"));
        assert_eq!(errors.get(GuestField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(GuestField::IdType), Some("ID type is required"));
        assert_eq!(errors.get(GuestField::IdNumber), Some("ID number is required"));
        // Optional on this step
        assert!(!errors.contains(GuestField::Address));
    }

    #[test]
    fn test_each_missing_guest_info_field_is_reported_alone() {
        for field in GUEST_INFO_REQUIRED {
            let mut guest = guest_info_complete();
            guest.set_text(field, "");
            let errors = validate_step(BookingStep::GuestInfo, &guest).unwrap_err();
            assert_eq!(errors.len(), 1, "{:?}", field);
            assert!(errors.contains(field));
        }
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut guest = guest_info_complete();
        guest.set_text(GuestField::Phone, "   ");
        let errors = validate_step(BookingStep::GuestInfo, &guest).unwrap_err();
        assert!(errors.contains(GuestField::Phone));
    }

    #[test]
    fn test_booking_details_messages() {
        let errors = validate_step(BookingStep::BookingDetails, &GuestData::new()).unwrap_err();
        let fields: Vec<GuestField> = errors.fields().collect();
        assert_eq!(fields, BOOKING_DETAILS_REQUIRED.to_vec());
        assert_eq!(
            errors.get(GuestField::CheckInDate),
            Some("Check-in date is required")
        );
        assert_eq!(errors.get(GuestField::GuestCount), Some("Guest count is required"));
    }

    #[test]
    fn test_additional_info_always_passes() {
        assert!(validate_step(BookingStep::AdditionalInfo, &GuestData::new()).is_ok());
    }

    #[test]
    fn test_complete_guest_info_passes() {
        assert!(validate_step(BookingStep::GuestInfo, &guest_info_complete()).is_ok());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(15000).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_parse_stay_date() {
        let date = parse_stay_date("2025-07-04").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        assert_eq!(parse_stay_date("2025-07-04 23:59").unwrap(), date);
        assert!(parse_stay_date("").is_err());
        assert!(parse_stay_date("2025-13-01").is_err());
    }
}

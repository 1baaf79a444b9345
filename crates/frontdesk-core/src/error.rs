//! # Error Types
//!
//! Domain-specific error types for frontdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  frontdesk-core errors (this file)                                     │
//! │  ├── CoreError        - Wizard / checkout rule violations              │
//! │  ├── ValidationError  - A single value failed a rule                   │
//! │  ├── FieldErrors      - Per-field messages for a wizard step           │
//! │  └── FormErrors<K>    - Per-field messages for back-office forms       │
//! │                                                                         │
//! │  App errors (apps/frontdesk)                                           │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: FieldErrors → CoreError::Validation → ApiError → Front-end      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here panics. A blocked wizard step is an ordinary `Err` the caller
//! renders next to the offending inputs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::guest::GuestField;
use crate::maintenance::TaskField;
use crate::types::RoomStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the wizards and checkout helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An action was attempted from a wizard step that does not allow it.
    ///
    /// ## When This Occurs
    /// - `submit` before the booking wizard reaches Additional Info
    /// - `complete` before the check-in wizard reaches Digital Key
    #[error("Cannot {action} from step {step}")]
    InvalidStep { action: &'static str, step: u8 },

    /// The check-in wizard cannot leave photo verification without both photos.
    #[error("Please upload both ID and guest photos")]
    PhotosRequired,

    /// A photo capture/upload produced no data.
    #[error("Photo data is empty")]
    EmptyPhoto,

    /// Costs, payment and check-in all need a selected room.
    #[error("No room selected")]
    RoomNotSelected,

    /// The chosen room cannot be booked in its current state.
    #[error("Room {room_id} is {status} and cannot be selected")]
    RoomUnavailable { room_id: String, status: RoomStatus },

    /// Payment attempted without choosing a method.
    #[error("Please select a payment method")]
    PaymentMethodRequired,

    /// A task, order or room id that is not on the board.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Step validation failed.
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// A single value failed validation.
    #[error("Validation error: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The maintenance task form failed validation.
    #[error("Validation failed: {0}")]
    TaskForm(#[from] FormErrors<TaskField>),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for a single value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Field Errors
// =============================================================================

/// Per-field error messages produced by step validation.
///
/// Keyed by [`GuestField`] and ordered the way the form lays the fields out.
/// Serializes as `{ "firstName": "First name is required", ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<GuestField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a field, replacing any previous message.
    pub fn insert(&mut self, field: GuestField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clears the error for a field. Returns true if one was present.
    pub fn clear(&mut self, field: GuestField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn get(&self, field: GuestField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: GuestField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = GuestField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GuestField, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

impl FromIterator<(GuestField, ValidationError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (GuestField, ValidationError)>>(iter: I) -> Self {
        FieldErrors(iter.into_iter().map(|(f, e)| (f, e.to_string())).collect())
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// Per-field messages for the back-office forms (add room, maintenance task).
///
/// `K` is the form's field enum; serializes as `{ "<field>": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors<K: Ord>(BTreeMap<K, String>);

impl<K: Ord> Default for FormErrors<K> {
    fn default() -> Self {
        FormErrors(BTreeMap::new())
    }
}

impl<K: Ord + Copy> FormErrors<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: K, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: K) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: K) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors<K>> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl<K: Ord> fmt::Display for FormErrors<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

impl<K: Ord + fmt::Debug> std::error::Error for FormErrors<K> {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "First name".to_string(),
        };
        assert_eq!(err.to_string(), "First name is required");
    }

    #[test]
    fn test_core_error_messages() {
        assert_eq!(
            CoreError::PhotosRequired.to_string(),
            "Please upload both ID and guest photos"
        );
        let err = CoreError::RoomUnavailable {
            room_id: "R103".to_string(),
            status: RoomStatus::Occupied,
        };
        assert_eq!(err.to_string(), "Room R103 is occupied and cannot be selected");
        let err = CoreError::InvalidStep {
            action: "submit",
            step: 2,
        };
        assert_eq!(err.to_string(), "Cannot submit from step 2");
    }

    #[test]
    fn test_field_errors_insert_and_clear() {
        let mut errors = FieldErrors::new();
        errors.insert(GuestField::Email, "Email is required");
        assert!(errors.contains(GuestField::Email));
        assert_eq!(errors.get(GuestField::Email), Some("Email is required"));

        assert!(errors.clear(GuestField::Email));
        assert!(!errors.clear(GuestField::Email));
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.insert(GuestField::FirstName, "First name is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["firstName"], "First name is required");
    }

    #[test]
    fn test_form_errors_keep_field_order() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
        #[serde(rename_all = "camelCase")]
        enum Field {
            Number,
            Price,
        }

        let mut errors = FormErrors::new();
        errors.insert(Field::Price, "Valid price is required");
        errors.insert(Field::Number, "Room number is required");
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "Room number is required; Valid price is required"
        );
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["price"], "Valid price is required");
        assert!(errors.into_result(()).is_err());
        assert_eq!(FormErrors::<Field>::new().into_result(7), Ok(7));
    }

    #[test]
    fn test_field_errors_convert_to_core_error() {
        let mut errors = FieldErrors::new();
        errors.insert(GuestField::Phone, "Phone number is required");
        let core_err: CoreError = errors.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation failed: Phone number is required");
    }
}

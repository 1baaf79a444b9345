//! # API Error Type
//!
//! Unified error type for front desk commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Front Desk                         │
//! │                                                                         │
//! │  Command Function: Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Wizard rule? ──── CoreError::InvalidStep / PhotosRequired ──┐         │
//! │         │                                                     │         │
//! │         ▼                                                     ▼         │
//! │  Field errors? ─── CoreError::Validation(FieldErrors) ─── ApiError ───► │
//! │         │                                                     ▲         │
//! │         ▼                                                     │         │
//! │  Config? ───────── ConfigError ───────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Blocked booking steps are not errors: the command returns the wizard view
//! with its field errors filled in. `field_errors` is only set when a
//! submit re-validation or a back-office form fails.

use serde::Serialize;
use serde_json::Value;

use frontdesk_core::error::FormErrors;
use frontdesk_core::{CoreError, ValidationError};

use crate::state::ConfigError;

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "PHOTOS_REQUIRED",
///   "message": "Please upload both ID and guest photos"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// `{ "<field>": "<message>" }` for whichever form failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Value>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Action not allowed at the current wizard step
    InvalidStep,

    /// Check-in cannot continue without both photos
    PhotosRequired,

    /// No room has been selected yet
    RoomNotSelected,

    /// Room is occupied, in maintenance, etc.
    RoomUnavailable,

    /// Payment could not be prepared
    PaymentError,

    /// Sign-in / sign-out failed
    AuthError,

    /// Camera capture failed
    CameraError,

    /// Configuration could not be loaded
    ConfigError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::AuthError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::InvalidStep { .. } => ApiError::new(ErrorCode::InvalidStep, message),
            CoreError::PhotosRequired => ApiError::new(ErrorCode::PhotosRequired, message),
            CoreError::EmptyPhoto => ApiError::validation(message),
            CoreError::RoomNotSelected => ApiError::new(ErrorCode::RoomNotSelected, message),
            CoreError::RoomUnavailable { .. } => {
                ApiError::new(ErrorCode::RoomUnavailable, message)
            }
            CoreError::PaymentMethodRequired => ApiError::new(ErrorCode::PaymentError, message),
            CoreError::NotFound { .. } => ApiError::new(ErrorCode::NotFound, message),
            CoreError::Validation(errors) => ApiError {
                code: ErrorCode::ValidationError,
                message,
                field_errors: serde_json::to_value(&errors).ok(),
            },
            CoreError::InvalidInput(_) => ApiError::validation(message),
            CoreError::TaskForm(errors) => errors.into(),
        }
    }
}

impl<K: Ord + Serialize> From<FormErrors<K>> for ApiError {
    fn from(errors: FormErrors<K>) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: errors.to_string(),
            field_errors: serde_json::to_value(&errors).ok(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_core::{FieldErrors, GuestField, RoomStatus};

    #[test]
    fn test_core_error_codes() {
        let err: ApiError = CoreError::PhotosRequired.into();
        assert_eq!(err.code, ErrorCode::PhotosRequired);
        assert_eq!(err.message, "Please upload both ID and guest photos");

        let err: ApiError = CoreError::RoomUnavailable {
            room_id: "R105".to_string(),
            status: RoomStatus::Maintenance,
        }
        .into();
        assert_eq!(err.code, ErrorCode::RoomUnavailable);
    }

    #[test]
    fn test_validation_keeps_field_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(GuestField::Email, "Email is required");
        let err: ApiError = CoreError::Validation(errors).into();

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["fieldErrors"]["email"], "Email is required");
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err: ApiError = CoreError::NotFound {
            kind: "Task",
            id: "MT099".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Task not found: MT099");
    }

    #[test]
    fn test_field_errors_omitted_when_absent() {
        let json = serde_json::to_value(ApiError::not_found("Room", "R999")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Room not found: R999");
        assert!(json.get("fieldErrors").is_none());
    }
}

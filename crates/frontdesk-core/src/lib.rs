//! # frontdesk-core: Pure Business Logic for the Front Desk
//!
//! Booking, pricing and check-in rules for the hotel front desk, as pure
//! functions and plain state machines with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Front Desk Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (browser)                          │   │
//! │  │   Room panel ──► Booking form ──► Summary ──► Check-in          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/frontdesk                               │   │
//! │  │   session state, config, ports (auth, sinks, camera, clock)    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ frontdesk-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐       │   │
//! │  │   │ booking  │  │ checkin  │  │  costs   │  │validation│       │   │
//! │  │   │ wizard   │  │ wizard   │  │StayCosts │  │FieldErrs │       │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘       │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐       │   │
//! │  │   │  rooms   │  │ history  │  │ checkout │  │  money   │       │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘       │   │
//! │  │   ┌──────────────┐  ┌──────────────┐                         │   │
//! │  │   │ maintenance  │  │ room_service │                         │   │
//! │  │   │  TaskBoard   │  │  OrderQueue  │                         │   │
//! │  │   └──────────────┘  └──────────────┘                         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Rooms, roles, ID and payment types
//! - [`money`] - Integer cents for prices, exact decimals for tax and totals
//! - [`guest`] - Booking form records, one per wizard step
//! - [`validation`] - Required-field rules per step
//! - [`costs`] - Nights, add-on fees, tax and total
//! - [`booking`] - Booking wizard (guest info → details → additional info)
//! - [`checkin`] - Check-in wizard (photos → summary → digital key)
//! - [`rooms`] - Catalog filtering, selection, occupancy stats, add-room form
//! - [`maintenance`] - Maintenance task board, filters and stats
//! - [`room_service`] - Room-service order queue
//! - [`history`] - Returning-guest lookup
//! - [`checkout`] - Payment and invoice packaging
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use frontdesk_core::booking::{BookingStep, BookingWizard};
//! use frontdesk_core::guest::GuestField;
//!
//! let mut wizard = BookingWizard::new();
//! assert!(wizard.advance().is_err());
//! assert_eq!(wizard.step(), BookingStep::GuestInfo);
//!
//! for (field, value) in [
//!     (GuestField::FirstName, "John"),
//!     (GuestField::LastName, "Smith"),
//!     (GuestField::Email, "john.smith@email.com"),
//!     (GuestField::Phone, "+1-555-0123"),
//!     (GuestField::IdType, "passport"),
//!     (GuestField::IdNumber, "P123456789"),
//! ] {
//!     wizard.edit(field, value);
//! }
//! assert_eq!(wizard.advance().unwrap(), BookingStep::BookingDetails);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod checkin;
pub mod checkout;
pub mod costs;
pub mod error;
pub mod guest;
pub mod history;
pub mod maintenance;
pub mod money;
pub mod room_service;
pub mod rooms;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use booking::{BookingStep, BookingWizard};
pub use checkin::{CheckInStep, CheckInWizard};
pub use costs::{compute_costs, StayCosts};
pub use error::{CoreError, CoreResult, FieldErrors, FormErrors, ValidationError};
pub use guest::{GuestData, GuestField, GuestFlag};
pub use money::Money;
pub use types::*;

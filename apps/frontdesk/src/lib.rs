//! # Front Desk Library
//!
//! Session orchestration for the hotel front desk: auth, room selection,
//! the booking and check-in wizards, and checkout hand-offs. Back-office
//! screens (room management, maintenance board, room-service queue) share
//! the same state and command conventions.
//!
//! ## Module Organization
//! ```text
//! frontdesk_lib/
//! ├── lib.rs          ◄─── You are here (startup & scripted session)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── auth.rs     ◄─── Signed-in user and role
//! │   ├── catalog.rs  ◄─── Rooms and guest history
//! │   ├── config.rs   ◄─── Configuration state
//! │   ├── maintenance.rs  ◄─── Maintenance task board
//! │   ├── room_service.rs ◄─── Room-service order queue
//! │   └── session.rs  ◄─── Guest at the desk (both wizards)
//! ├── commands/       ◄─── One function per UI action
//! ├── ports.rs        ◄─── Collaborator traits + simple adapters
//! ├── mock.rs         ◄─── In-memory collaborators and demo data
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │  DeskState   │ │  AuthState   │ │ CatalogState │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │ • Room       │ │ • User       │ │ • Rooms      │ │ • Property   │   │
//! │  │ • Booking    │ │ • Profile    │ │ • Guest      │ │ • Currency   │   │
//! │  │ • Check-in   │ │ • Role       │ │   history    │ │ • Delays     │   │
//! │  │ • Checkout   │ │              │ │              │ │              │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  Each command only requests the state it needs.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod mock;
pub mod ports;
pub mod state;

use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use frontdesk_core::checkin::PhotoKind;
use frontdesk_core::{GuestField, GuestFlag, PaymentMethod, Role};

use commands::checkin::CheckInConfirmation;
use commands::checkout::{InvoiceReceipt, PaymentReceipt};
use error::ApiError;
use mock::{demo_guest_history, demo_rooms, MockAuthProvider, RecordingSink, SimulatedCamera};
use ports::{Clock, Delay, SystemClock, TokioDelay};
use state::{AuthState, CatalogState, ConfigState, DeskState, DeskView};

/// What one scripted guest produced end to end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskRun {
    pub booking_reference: String,
    pub payment: PaymentReceipt,
    pub invoice: InvoiceReceipt,
    pub check_in: CheckInConfirmation,
}

/// Runs the desk against the in-memory collaborators.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → frontdesk.toml → FRONTDESK_* env                       │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: demo rooms and guest history                        │
/// │     • AuthState, DeskState: empty                                       │
/// │                                                                         │
/// │  3. Serve One Guest ──────────────────────────────────────────────────► │
/// │     • sign in → role → room → history → booking → payment → check-in   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<DeskRun, ApiError> {
    let config = ConfigState::load_or_default(None);
    info!(property = %config.property_name, "Starting front desk");

    serve_demo_guest(&config, &TokioDelay, &SystemClock).await
}

/// Walks one returning guest through booking, payment and check-in.
pub async fn serve_demo_guest(
    config: &ConfigState,
    delay: &dyn Delay,
    clock: &dyn Clock,
) -> Result<DeskRun, ApiError> {
    let catalog = CatalogState::new(demo_rooms()?, demo_guest_history());
    let auth = AuthState::new();
    let desk = DeskState::new();
    let provider = MockAuthProvider::demo();
    let sink = RecordingSink::new();
    let camera = SimulatedCamera::new();

    commands::auth::sign_in(&auth, &provider, "reception@grandhotel.com", "desk123").await?;
    commands::auth::select_role(&auth, delay, config, Role::Receptionist).await?;

    let stats = commands::rooms::room_stats(&catalog);
    info!(
        available = stats.available,
        occupancy = stats.occupancy_rate,
        "Room availability"
    );
    commands::rooms::select_room(&catalog, &desk, "R101")?;

    let found = commands::guests::lookup_guests(&catalog, delay, config, "john").await;
    let guest_id = found
        .first()
        .map(|g| g.id.clone())
        .ok_or_else(|| ApiError::not_found("Guest", "john"))?;
    commands::guests::load_guest(&catalog, &desk, &guest_id)?;

    commands::booking::next_booking_step(&desk);
    commands::booking::edit_guest_field(&desk, GuestField::CheckInDate, "2025-07-01".into());
    commands::booking::edit_guest_field(&desk, GuestField::CheckOutDate, "2025-07-04".into());
    commands::booking::set_guest_flag(&desk, GuestFlag::LateCheckOut, true);
    let view = commands::booking::next_booking_step(&desk);
    if !view.errors.is_empty() {
        return Err(ApiError::validation(format!("Booking blocked: {}", view.errors)));
    }
    let booking = commands::booking::submit_booking(&desk, &sink)?;

    commands::checkout::set_payment_method(&desk, Some(PaymentMethod::CreditCard));
    let payment = commands::checkout::process_payment(&desk, &sink, config)?;
    let invoice = commands::checkout::generate_invoice(&desk, &sink, config)?;

    commands::checkin::switch_view(&desk, DeskView::CheckIn);
    for kind in [PhotoKind::IdDocument, PhotoKind::Guest] {
        commands::checkin::capture_photo(&desk, &camera, delay, config, kind).await?;
    }
    commands::checkin::next_check_in_step(&desk, clock)?;
    commands::checkin::next_check_in_step(&desk, clock)?;
    let check_in = commands::checkin::complete_check_in(&desk, &sink, clock)?;

    commands::auth::sign_out(&auth, &provider).await?;
    info!(handoffs = sink.len(), "Desk session finished");

    Ok(DeskRun {
        booking_reference: booking.reference,
        payment,
        invoice,
        check_in,
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=frontdesk=trace` - Show trace for the desk crates only
/// - Default: INFO, DEBUG for `frontdesk`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,frontdesk=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, NoDelay};
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_serve_demo_guest() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 7, 1, 15, 30, 0).unwrap());
        let run = serve_demo_guest(&ConfigState::default(), &NoDelay, &clock)
            .await
            .unwrap();

        // 3 × 150.00 + 35.00 late checkout = 485.00, + 12% = 543.20
        assert_eq!(run.payment.amount, rust_decimal::Decimal::new(54320, 2));
        assert_eq!(run.payment.formatted_amount, "$543.20");
        assert_eq!(run.invoice.total, run.payment.amount);
        assert_eq!(run.invoice.channels, vec!["email"]);
        assert_eq!(run.check_in.room_id, "R101");
        assert_eq!(run.check_in.guest_name, "John Smith");
        assert_eq!(run.check_in.checked_in_at, clock.0);
    }
}

//! # Desk Commands Module
//!
//! All commands exposed to the front-desk UI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── auth.rs      ◄─── Sign-in, sign-out, role selection
//! ├── rooms.rs     ◄─── Room list, filters, stats, selection, add, status
//! ├── guests.rs    ◄─── Guest history lookup and prefill
//! ├── booking.rs   ◄─── Booking wizard and cost summary
//! ├── checkin.rs   ◄─── Photos, verification, digital key
//! ├── checkout.rs  ◄─── Payment method, payment, invoice
//! ├── maintenance.rs  ◄─── Task board, task form, card moves
//! └── room_service.rs ◄─── Order queue, status, notes, staff
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Desk Command Flow                                    │
//! │                                                                         │
//! │  UI event ("Next", "Capture", "Pay")                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn next_check_in_step(                                                 │
//! │      desk: &DeskState,      ◄── only the state it needs                │
//! │      clock: &dyn Clock,     ◄── only the ports it needs                │
//! │  ) -> Result<CheckInView, ApiError>                                     │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  UI re-renders from the returned view                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that wait (camera warm-up, role setup, guest lookup) are
//! `async` and take a [`crate::ports::Delay`]; tests pass
//! [`crate::ports::NoDelay`].

pub mod auth;
pub mod booking;
pub mod checkin;
pub mod checkout;
pub mod guests;
pub mod maintenance;
pub mod room_service;
pub mod rooms;

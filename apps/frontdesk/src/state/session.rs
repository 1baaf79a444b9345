//! # Desk Session State
//!
//! The guest currently being served at the desk.
//!
//! ## Thread Safety
//! Wrapped in `Arc<Mutex<T>>`: several commands read and write the session
//! and only one may change it at a time. Locks are never held across an
//! `.await`.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Desk Session                                         │
//! │                                                                         │
//! │  select_room ──────────► selected_room = Some(room)                     │
//! │  load_guest / edit ────► booking wizard form data                       │
//! │  next / previous ──────► booking wizard step                            │
//! │  switch_view ──────────► Booking ⇄ CheckIn                              │
//! │  capture / upload ─────► check-in wizard photos                         │
//! │  set_payment_method ───► payment_method, delivery                       │
//! │                                                                         │
//! │  complete_check_in ────► reset() (ready for the next guest)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use frontdesk_core::{BookingWizard, CheckInWizard, DeliveryOptions, PaymentMethod, Room};

/// Which half of the desk screen is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeskView {
    #[default]
    Booking,
    CheckIn,
}

/// Everything tied to the guest at the desk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskSession {
    pub view: DeskView,
    pub selected_room: Option<Room>,
    pub booking: BookingWizard,
    pub check_in: CheckInWizard,
    pub payment_method: Option<PaymentMethod>,
    pub delivery: DeliveryOptions,
}

impl DeskSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the session for the next guest.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Shared desk session.
#[derive(Debug, Clone, Default)]
pub struct DeskState {
    session: Arc<Mutex<DeskSession>>,
}

impl DeskState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the session.
    ///
    /// ```rust,ignore
    /// let step = desk.with_session(|s| s.booking.step());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DeskSession) -> R,
    {
        let session = self.session.lock().expect("Desk mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DeskSession) -> R,
    {
        let mut session = self.session.lock().expect("Desk mutex poisoned");
        f(&mut session)
    }
}

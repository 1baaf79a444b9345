//! # Collaborator Ports
//!
//! Everything the desk talks to but does not own sits behind a trait here.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Ports                                           │
//! │                                                                         │
//! │  async                          sync (fire-and-forget)                  │
//! │  ─────                          ──────────────────────                  │
//! │  AuthProvider  sign in/out      BookingSink   BookingSubmission         │
//! │  Camera        capture photo    PaymentSink   PaymentRequest            │
//! │  Delay         UI latency       InvoiceSink   InvoiceRequest            │
//! │                                 CheckInSink   CheckInRecord             │
//! │  Clock         now()                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Simple adapters that need no state live next to their trait
//! ([`TokioDelay`], [`NoDelay`], [`SystemClock`], [`FixedClock`]); the
//! in-memory stand-ins for the rest are in [`crate::mock`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use frontdesk_core::booking::BookingSubmission;
use frontdesk_core::checkin::{CheckInRecord, Photo, PhotoKind};
use frontdesk_core::checkout::{InvoiceRequest, PaymentRequest};
use frontdesk_core::UserProfile;

// =============================================================================
// Auth
// =============================================================================

/// Result of a sign-in or sign-out attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthOutcome {
    pub fn ok() -> Self {
        AuthOutcome {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        AuthOutcome {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Authentication backend.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> AuthOutcome;

    async fn sign_out(&self) -> AuthOutcome;

    /// Profile of the signed-in user, if any.
    fn current_profile(&self) -> Option<UserProfile>;
}

// =============================================================================
// Hand-off Sinks
// =============================================================================

pub trait BookingSink: Send + Sync {
    fn submit_booking(&self, submission: &BookingSubmission);
}

pub trait PaymentSink: Send + Sync {
    fn process_payment(&self, payment: &PaymentRequest);
}

pub trait InvoiceSink: Send + Sync {
    fn generate_invoice(&self, invoice: &InvoiceRequest);
}

pub trait CheckInSink: Send + Sync {
    fn complete_check_in(&self, record: &CheckInRecord);
}

// =============================================================================
// Hardware and Time
// =============================================================================

/// Camera used to photograph the ID document and the guest.
#[async_trait]
pub trait Camera: Send + Sync {
    async fn capture(&self, kind: PhotoKind) -> Result<Photo, String>;
}

/// Stand-in for latency the UI simulates (camera warm-up, role setup, lookup).
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Resolves immediately. For tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

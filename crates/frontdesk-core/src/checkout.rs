//! # Checkout
//!
//! Packages a priced booking for the payment and invoice collaborators.
//!
//! ```text
//! GuestData + Room ──compute_costs──► StayCosts
//!        │                               │
//!        ├── PaymentMethod ──────────────┼──► PaymentRequest  { amount = total }
//!        └── DeliveryOptions ────────────┴──► InvoiceRequest  { costs }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::costs::{compute_costs, StayCosts};
use crate::error::{CoreError, CoreResult};
use crate::guest::GuestData;
use crate::types::{DeliveryOptions, PaymentMethod, Room};

/// Handed to the payment sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    /// Exact folio total, not rounded to cents.
    #[ts(as = "String")]
    pub amount: Decimal,
    pub guest: GuestData,
    pub room: Room,
    pub delivery: DeliveryOptions,
}

/// Handed to the invoice sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub guest: GuestData,
    pub room: Room,
    pub costs: StayCosts,
    pub delivery: DeliveryOptions,
}

/// Builds a payment for the full folio total.
///
/// ## Errors
/// - [`CoreError::PaymentMethodRequired`] if no method was chosen
/// - [`CoreError::RoomNotSelected`] if no room was chosen
pub fn prepare_payment(
    method: Option<PaymentMethod>,
    guest: &GuestData,
    room: Option<&Room>,
    delivery: DeliveryOptions,
) -> CoreResult<PaymentRequest> {
    let method = method.ok_or(CoreError::PaymentMethodRequired)?;
    let room = room.ok_or(CoreError::RoomNotSelected)?;
    let costs = compute_costs(guest, Some(room));

    Ok(PaymentRequest {
        method,
        amount: costs.total,
        guest: guest.clone(),
        room: room.clone(),
        delivery,
    })
}

/// Builds an invoice carrying the full cost breakdown.
pub fn prepare_invoice(
    guest: &GuestData,
    room: Option<&Room>,
    delivery: DeliveryOptions,
) -> CoreResult<InvoiceRequest> {
    let room = room.ok_or(CoreError::RoomNotSelected)?;

    Ok(InvoiceRequest {
        guest: guest.clone(),
        room: room.clone(),
        costs: compute_costs(guest, Some(room)),
        delivery,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Checkout Commands
//!
//! Payment method, receipt delivery channels, payment and invoice hand-off.
//!
//! Both hand-offs price the folio from the booking form and the selected
//! room at the moment they are called.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use frontdesk_core::checkout::{prepare_invoice, prepare_payment};
use frontdesk_core::{DeliveryOptions, PaymentMethod};

use crate::error::ApiError;
use crate::ports::{InvoiceSink, PaymentSink};
use crate::state::{ConfigState, DeskState};

/// The checkout choices currently on the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSelection {
    pub payment_method: Option<PaymentMethod>,
    pub delivery: DeliveryOptions,
}

/// Acknowledgement of a payment hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub reference: String,
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub formatted_amount: String,
}

/// Acknowledgement of an invoice hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceReceipt {
    pub invoice_number: String,
    pub total: Decimal,
    pub formatted_total: String,
    pub channels: Vec<String>,
}

fn selection(desk: &DeskState) -> CheckoutSelection {
    desk.with_session(|s| CheckoutSelection {
        payment_method: s.payment_method,
        delivery: s.delivery,
    })
}

/// Chooses (or clears) the payment method.
pub fn set_payment_method(desk: &DeskState, method: Option<PaymentMethod>) -> CheckoutSelection {
    debug!(method = ?method, "set_payment_method command");
    desk.with_session_mut(|s| s.payment_method = method);
    selection(desk)
}

/// Chooses the channels the receipt and invoice go out on.
pub fn set_delivery_options(desk: &DeskState, delivery: DeliveryOptions) -> CheckoutSelection {
    debug!(delivery = ?delivery, "set_delivery_options command");
    desk.with_session_mut(|s| s.delivery = delivery);
    selection(desk)
}

/// Hands the full folio total to the payment sink.
///
/// ## Errors
/// - `PAYMENT_ERROR` if no payment method is chosen
/// - `ROOM_NOT_SELECTED` if no room is selected
pub fn process_payment(
    desk: &DeskState,
    sink: &dyn PaymentSink,
    config: &ConfigState,
) -> Result<PaymentReceipt, ApiError> {
    debug!("process_payment command");

    let payment = desk
        .with_session(|s| {
            prepare_payment(
                s.payment_method,
                s.booking.guest(),
                s.selected_room.as_ref(),
                s.delivery,
            )
        })
        .map_err(|e| {
            warn!(error = %e, "Payment not prepared");
            e
        })?;

    sink.process_payment(&payment);

    let receipt = PaymentReceipt {
        reference: uuid::Uuid::new_v4().to_string(),
        method: payment.method,
        amount: payment.amount,
        formatted_amount: config.format_currency(payment.amount),
    };
    info!(
        reference = %receipt.reference,
        amount = %receipt.formatted_amount,
        "Payment handed off"
    );
    Ok(receipt)
}

/// Hands the cost breakdown to the invoice sink.
///
/// ## Errors
/// - `ROOM_NOT_SELECTED` if no room is selected
pub fn generate_invoice(
    desk: &DeskState,
    sink: &dyn InvoiceSink,
    config: &ConfigState,
) -> Result<InvoiceReceipt, ApiError> {
    debug!("generate_invoice command");

    let invoice = desk.with_session(|s| {
        prepare_invoice(s.booking.guest(), s.selected_room.as_ref(), s.delivery)
    })?;

    sink.generate_invoice(&invoice);

    let channels = [
        ("email", invoice.delivery.email),
        ("sms", invoice.delivery.sms),
        ("whatsapp", invoice.delivery.whatsapp),
    ]
    .into_iter()
    .filter(|(_, on)| *on)
    .map(|(name, _)| name.to_string())
    .collect();

    let receipt = InvoiceReceipt {
        invoice_number: format!("INV-{}", uuid::Uuid::new_v4().simple()),
        total: invoice.costs.total,
        formatted_total: config.format_currency(invoice.costs.total),
        channels,
    };
    info!(
        invoice_number = %receipt.invoice_number,
        channels = ?receipt.channels,
        "Invoice handed off"
    );
    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::mock::{demo_rooms, RecordingSink, SinkEvent};
    use frontdesk_core::{GuestField, GuestFlag};

    fn priced_desk() -> DeskState {
        let desk = DeskState::new();
        desk.with_session_mut(|s| {
            s.selected_room = Some(demo_rooms().unwrap()[0].clone());
            s.booking.edit(GuestField::CheckInDate, "2025-07-01");
            s.booking.edit(GuestField::CheckOutDate, "2025-07-03");
            s.booking.set_flag(GuestFlag::AirportPickup, true);
        });
        desk
    }

    #[test]
    fn test_selection_updates() {
        let desk = DeskState::new();
        let selection = set_payment_method(&desk, Some(PaymentMethod::Cash));
        assert_eq!(selection.payment_method, Some(PaymentMethod::Cash));

        let delivery = DeliveryOptions { sms: true, whatsapp: false, email: false };
        let selection = set_delivery_options(&desk, delivery);
        assert_eq!(selection.delivery, delivery);
        assert_eq!(selection.payment_method, Some(PaymentMethod::Cash));

        assert!(set_payment_method(&desk, None).payment_method.is_none());
    }

    #[test]
    fn test_payment_requires_method() {
        let desk = priced_desk();
        let sink = RecordingSink::new();
        let err = process_payment(&desk, &sink, &ConfigState::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentError);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_payment_requires_room() {
        let desk = DeskState::new();
        set_payment_method(&desk, Some(PaymentMethod::CreditCard));
        let sink = RecordingSink::new();
        let err = process_payment(&desk, &sink, &ConfigState::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotSelected);
    }

    #[test]
    fn test_payment_charges_full_total() {
        let desk = priced_desk();
        let sink = RecordingSink::new();
        set_payment_method(&desk, Some(PaymentMethod::CreditCard));

        // 2 × 150.00 + 45.00 pickup = 345.00, + 12% = 386.40
        let receipt = process_payment(&desk, &sink, &ConfigState::default()).unwrap();
        assert_eq!(receipt.amount, Decimal::new(38640, 2));
        assert_eq!(receipt.formatted_amount, "$386.40");
        assert!(matches!(&sink.events()[0], SinkEvent::Payment(p) if p.amount == receipt.amount));
    }

    #[test]
    fn test_invoice_lists_channels() {
        let desk = priced_desk();
        let sink = RecordingSink::new();
        set_delivery_options(&desk, DeliveryOptions { sms: true, whatsapp: true, email: true });

        let receipt = generate_invoice(&desk, &sink, &ConfigState::default()).unwrap();
        assert!(receipt.invoice_number.starts_with("INV-"));
        assert_eq!(receipt.channels, vec!["email", "sms", "whatsapp"]);
        assert_eq!(receipt.total, Decimal::new(38640, 2));
        assert_eq!(receipt.formatted_total, "$386.40");
        assert_eq!(sink.len(), 1);
    }
}

//! # Booking Commands
//!
//! Drive the booking wizard and expose the live cost summary.
//!
//! Every command returns a [`BookingView`]: the step, the form, the field
//! errors and the current folio. A step that fails validation is not an
//! error here; the view simply comes back with `errors` filled in.

use serde::Serialize;
use tracing::{debug, info, warn};

use frontdesk_core::booking::{BookingAction, BookingEvent};
use frontdesk_core::{
    compute_costs, BookingStep, DeliveryOptions, FieldErrors, GuestData, GuestField, GuestFlag,
    PaymentMethod, Room, StayCosts,
};

use crate::error::ApiError;
use crate::ports::BookingSink;
use crate::state::{ConfigState, DeskSession, DeskState};

/// Booking wizard as rendered by the front-end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub step: BookingStep,
    pub step_number: u8,
    pub step_title: String,
    pub guest: GuestData,
    pub errors: FieldErrors,
    pub costs: StayCosts,
}

impl From<&DeskSession> for BookingView {
    fn from(session: &DeskSession) -> Self {
        let wizard = &session.booking;
        BookingView {
            step: wizard.step(),
            step_number: wizard.step().number(),
            step_title: wizard.step().title().to_string(),
            guest: wizard.guest().clone(),
            errors: wizard.errors().clone(),
            costs: compute_costs(wizard.guest(), session.selected_room.as_ref()),
        }
    }
}

/// Acknowledgement of a submitted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub reference: String,
    pub guest_name: String,
}

/// The side panel next to the form: room, folio and checkout choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub room: Option<Room>,
    pub costs: StayCosts,
    pub formatted_total: String,
    pub payment_method: Option<PaymentMethod>,
    pub delivery: DeliveryOptions,
}

fn reduce(desk: &DeskState, action: BookingAction) -> BookingView {
    desk.with_session_mut(|s| {
        match s.booking.apply(action) {
            BookingEvent::Blocked(errors) => {
                warn!(step = s.booking.step().number(), errors = %errors, "Booking step blocked");
            }
            BookingEvent::MovedTo(step) => {
                info!(step = step.number(), title = step.title(), "Booking step changed");
            }
            BookingEvent::Updated => {}
        }
        BookingView::from(&*s)
    })
}

/// Current booking wizard state.
pub fn get_booking(desk: &DeskState) -> BookingView {
    desk.with_session(|s| BookingView::from(s))
}

/// Updates one text input. Clears that field's error.
pub fn edit_guest_field(desk: &DeskState, field: GuestField, value: String) -> BookingView {
    debug!(field = ?field, "edit_guest_field command");
    reduce(desk, BookingAction::Edit { field, value })
}

/// Toggles one checkbox (add-ons, terms, offers).
pub fn set_guest_flag(desk: &DeskState, flag: GuestFlag, value: bool) -> BookingView {
    debug!(flag = ?flag, value, "set_guest_flag command");
    reduce(desk, BookingAction::SetFlag { flag, value })
}

/// "Next": validates the current step and moves forward if it passes.
pub fn next_booking_step(desk: &DeskState) -> BookingView {
    debug!("next_booking_step command");
    reduce(desk, BookingAction::Advance)
}

/// "Previous": moves back without validating.
pub fn previous_booking_step(desk: &DeskState) -> BookingView {
    debug!("previous_booking_step command");
    reduce(desk, BookingAction::Retreat)
}

/// Hands the completed booking to the booking sink.
///
/// ## Errors
/// - `INVALID_STEP` unless the wizard is at Additional Info
pub fn submit_booking(
    desk: &DeskState,
    sink: &dyn BookingSink,
) -> Result<BookingConfirmation, ApiError> {
    debug!("submit_booking command");

    let submission = desk.with_session_mut(|s| s.booking.submit())?;
    sink.submit_booking(&submission);

    let confirmation = BookingConfirmation {
        reference: uuid::Uuid::new_v4().to_string(),
        guest_name: submission.guest.full_name(),
    };
    info!(reference = %confirmation.reference, "Booking handed off");
    Ok(confirmation)
}

/// Room, folio and checkout choices for the summary panel.
pub fn booking_summary(desk: &DeskState, config: &ConfigState) -> BookingSummary {
    debug!("booking_summary command");

    desk.with_session(|s| {
        let costs = compute_costs(s.booking.guest(), s.selected_room.as_ref());
        BookingSummary {
            room: s.selected_room.clone(),
            formatted_total: config.format_currency(costs.total),
            costs,
            payment_method: s.payment_method,
            delivery: s.delivery,
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::mock::{demo_rooms, RecordingSink};

    fn fill_guest_info(desk: &DeskState) {
        for (field, value) in [
            (GuestField::FirstName, "John"),
            (GuestField::LastName, "Smith"),
            (GuestField::Email, "john.smith@email.com"),
            (GuestField::Phone, "+1-555-0123"),
            (GuestField::IdType, "passport"),
            (GuestField::IdNumber, "P123456789"),
        ] {
            edit_guest_field(desk, field, value.to_string());
        }
    }

    #[test]
    fn test_blocked_step_returns_errors_not_err() {
        let desk = DeskState::new();
        let view = next_booking_step(&desk);
        assert_eq!(view.step, BookingStep::GuestInfo);
        assert_eq!(view.errors.len(), 6);

        let view = edit_guest_field(&desk, GuestField::Email, "a@b.c".to_string());
        assert!(!view.errors.contains(GuestField::Email));
        assert_eq!(view.errors.len(), 5);
    }

    #[test]
    fn test_walk_through_steps() {
        let desk = DeskState::new();
        fill_guest_info(&desk);
        assert_eq!(next_booking_step(&desk).step, BookingStep::BookingDetails);
        assert_eq!(previous_booking_step(&desk).step, BookingStep::GuestInfo);
        assert_eq!(previous_booking_step(&desk).step, BookingStep::GuestInfo);
    }

    #[test]
    fn test_view_costs_follow_selected_room() {
        let desk = DeskState::new();
        edit_guest_field(&desk, GuestField::CheckInDate, "2025-07-01".to_string());
        let view = edit_guest_field(&desk, GuestField::CheckOutDate, "2025-07-04".to_string());
        assert_eq!(view.costs, StayCosts::zero());

        desk.with_session_mut(|s| s.selected_room = Some(demo_rooms().unwrap()[0].clone()));
        let view = set_guest_flag(&desk, GuestFlag::EarlyCheckIn, true);
        assert_eq!(view.costs.nights, 3);
        assert_eq!(view.costs.service_charges.cents(), 2500);
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let desk = DeskState::new();
        let sink = RecordingSink::new();

        let err = submit_booking(&desk, &sink).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStep);
        assert!(sink.is_empty());

        fill_guest_info(&desk);
        next_booking_step(&desk);
        for (field, value) in [
            (GuestField::CheckInDate, "2025-07-01"),
            (GuestField::CheckOutDate, "2025-07-04"),
            (GuestField::RoomType, "deluxe"),
            (GuestField::GuestCount, "2"),
        ] {
            edit_guest_field(&desk, field, value.to_string());
        }
        assert_eq!(next_booking_step(&desk).step, BookingStep::AdditionalInfo);

        let confirmation = submit_booking(&desk, &sink).unwrap();
        assert_eq!(confirmation.guest_name, "John Smith");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_summary_formats_total() {
        let desk = DeskState::new();
        desk.with_session_mut(|s| s.selected_room = Some(demo_rooms().unwrap()[0].clone()));
        edit_guest_field(&desk, GuestField::CheckInDate, "2025-07-01".to_string());
        edit_guest_field(&desk, GuestField::CheckOutDate, "2025-07-02".to_string());

        let summary = booking_summary(&desk, &ConfigState::default());
        // 150.00 + 12%
        assert_eq!(summary.formatted_total, "$168.00");
        assert!(summary.payment_method.is_none());
    }
}

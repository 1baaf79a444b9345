//! # Booking Wizard
//!
//! Three-step state machine that collects a guest's booking.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Wizard                                       │
//! │                                                                         │
//! │  ┌──────────────┐ advance  ┌──────────────────┐ advance  ┌───────────┐ │
//! │  │ 1 Guest Info │─────────►│ 2 Booking Details│─────────►│3 Additional│ │
//! │  │              │◄─────────│                  │◄─────────│   Info     │ │
//! │  └──────────────┘ retreat  └──────────────────┘ retreat  └─────┬─────┘ │
//! │                                                                │       │
//! │  advance validates the current step's required fields;     submit      │
//! │  on failure the step stays put and the errors are kept.        │       │
//! │  retreat never validates.                                      ▼       │
//! │                                                     BookingSubmission  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Transitions are expressed as [`BookingAction`]s reduced by
//! [`BookingWizard::apply`]; the named methods are thin wrappers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, FieldErrors};
use crate::guest::{GuestData, GuestField, GuestFlag};
use crate::validation::validate_step;

// =============================================================================
// Steps
// =============================================================================

/// Position in the booking wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    #[default]
    GuestInfo,
    BookingDetails,
    AdditionalInfo,
}

impl BookingStep {
    /// 1-based step number shown in the progress indicator.
    pub const fn number(&self) -> u8 {
        match self {
            BookingStep::GuestInfo => 1,
            BookingStep::BookingDetails => 2,
            BookingStep::AdditionalInfo => 3,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            BookingStep::GuestInfo => "Guest Information",
            BookingStep::BookingDetails => "Booking Details",
            BookingStep::AdditionalInfo => "Additional Information",
        }
    }

    /// The following step, capped at Additional Info.
    pub const fn next(&self) -> Self {
        match self {
            BookingStep::GuestInfo => BookingStep::BookingDetails,
            BookingStep::BookingDetails | BookingStep::AdditionalInfo => {
                BookingStep::AdditionalInfo
            }
        }
    }

    /// The preceding step, floored at Guest Info.
    pub const fn previous(&self) -> Self {
        match self {
            BookingStep::GuestInfo | BookingStep::BookingDetails => BookingStep::GuestInfo,
            BookingStep::AdditionalInfo => BookingStep::BookingDetails,
        }
    }

    pub const fn is_last(&self) -> bool {
        matches!(self, BookingStep::AdditionalInfo)
    }
}

// =============================================================================
// Actions & Events
// =============================================================================

/// Everything the booking form can ask the wizard to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingAction {
    /// A text input changed.
    Edit { field: GuestField, value: String },
    /// A checkbox changed.
    SetFlag { flag: GuestFlag, value: bool },
    /// "Next" pressed.
    Advance,
    /// "Previous" pressed.
    Retreat,
    /// A returning guest was picked from history.
    LoadGuest(GuestData),
    /// Start over with an empty form.
    Reset,
}

/// What a reduced action did.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingEvent {
    /// Form data changed; the step did not.
    Updated,
    /// The step pointer moved (or stayed at a boundary) to this step.
    MovedTo(BookingStep),
    /// Advance was refused; these fields need attention.
    Blocked(FieldErrors),
}

/// A booking ready to hand to the booking submission sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub guest: GuestData,
}

// =============================================================================
// Wizard
// =============================================================================

/// Booking wizard state: current step, form data and field errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWizard {
    step: BookingStep,
    guest: GuestData,
    errors: FieldErrors,
}

impl BookingWizard {
    /// A fresh wizard at Guest Info with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// A wizard pre-filled with existing guest data (still at Guest Info).
    pub fn with_guest(guest: GuestData) -> Self {
        BookingWizard {
            guest,
            ..Self::default()
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn guest(&self) -> &GuestData {
        &self.guest
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Reduces one action into the wizard state.
    pub fn apply(&mut self, action: BookingAction) -> BookingEvent {
        match action {
            BookingAction::Edit { field, value } => {
                self.guest.set_text(field, value);
                // Cleared now, re-checked on the next advance
                self.errors.clear(field);
                BookingEvent::Updated
            }
            BookingAction::SetFlag { flag, value } => {
                self.guest.set_flag(flag, value);
                BookingEvent::Updated
            }
            BookingAction::Advance => match validate_step(self.step, &self.guest) {
                Ok(()) => {
                    self.errors = FieldErrors::new();
                    self.step = self.step.next();
                    BookingEvent::MovedTo(self.step)
                }
                Err(errors) => {
                    self.errors = errors.clone();
                    BookingEvent::Blocked(errors)
                }
            },
            BookingAction::Retreat => {
                self.step = self.step.previous();
                BookingEvent::MovedTo(self.step)
            }
            BookingAction::LoadGuest(guest) => {
                self.guest = guest;
                self.errors = FieldErrors::new();
                BookingEvent::Updated
            }
            BookingAction::Reset => {
                *self = Self::new();
                BookingEvent::MovedTo(self.step)
            }
        }
    }

    /// Validates the current step and moves forward on success.
    ///
    /// ## Returns
    /// - `Ok(step)` with the new step (Additional Info stays put)
    /// - `Err(FieldErrors)` when required fields are missing; the step is
    ///   unchanged and the same errors are recorded on the wizard
    pub fn advance(&mut self) -> Result<BookingStep, FieldErrors> {
        match self.apply(BookingAction::Advance) {
            BookingEvent::Blocked(errors) => Err(errors),
            _ => Ok(self.step),
        }
    }

    /// Moves back one step without validating.
    pub fn retreat(&mut self) -> BookingStep {
        self.apply(BookingAction::Retreat);
        self.step
    }

    /// Updates a text field and clears its error.
    pub fn edit(&mut self, field: GuestField, value: impl Into<String>) {
        self.apply(BookingAction::Edit {
            field,
            value: value.into(),
        });
    }

    pub fn set_flag(&mut self, flag: GuestFlag, value: bool) {
        self.apply(BookingAction::SetFlag { flag, value });
    }

    /// Replaces the form with a returning guest's details.
    pub fn load_guest(&mut self, guest: GuestData) {
        self.apply(BookingAction::LoadGuest(guest));
    }

    pub fn reset(&mut self) {
        self.apply(BookingAction::Reset);
    }

    /// Finishes the booking.
    ///
    /// Only legal from Additional Info. Re-validates that step (no required
    /// fields today) and packages the form for the booking sink.
    pub fn submit(&mut self) -> CoreResult<BookingSubmission> {
        if !self.step.is_last() {
            return Err(CoreError::InvalidStep {
                action: "submit",
                step: self.step.number(),
            });
        }

        if let Err(errors) = validate_step(self.step, &self.guest) {
            self.errors = errors.clone();
            return Err(errors.into());
        }

        Ok(BookingSubmission {
            guest: self.guest.clone(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::GUEST_INFO_REQUIRED;

    fn fill_guest_info(wizard: &mut BookingWizard) {
        wizard.edit(GuestField::FirstName, "Sarah");
        wizard.edit(GuestField::LastName, "Johnson");
        wizard.edit(GuestField::Email, "sarah.johnson@email.com");
        wizard.edit(GuestField::Phone, "+1-555-0456");
        wizard.edit(GuestField::IdType, "drivers_license");
        wizard.edit(GuestField::IdNumber, "DL987654321");
    }

    fn fill_booking_details(wizard: &mut BookingWizard) {
        wizard.edit(GuestField::CheckInDate, "2025-07-01");
        wizard.edit(GuestField::CheckOutDate, "2025-07-04");
        wizard.edit(GuestField::RoomType, "suite");
        wizard.edit(GuestField::GuestCount, "2");
    }

    #[test]
    fn test_starts_at_guest_info() {
        let wizard = BookingWizard::new();
        assert_eq!(wizard.step(), BookingStep::GuestInfo);
        assert_eq!(wizard.step().number(), 1);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_advance_blocked_by_any_missing_guest_field() {
        for missing in GUEST_INFO_REQUIRED {
            let mut wizard = BookingWizard::new();
            fill_guest_info(&mut wizard);
            wizard.edit(missing, "");

            let errors = wizard.advance().unwrap_err();
            assert_eq!(wizard.step(), BookingStep::GuestInfo);
            assert!(errors.contains(missing));
            assert!(wizard.errors().contains(missing));
        }
    }

    #[test]
    fn test_valid_guest_info_advances_and_clears_errors() {
        let mut wizard = BookingWizard::new();
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.errors().len(), 6);

        fill_guest_info(&mut wizard);
        assert_eq!(wizard.advance().unwrap(), BookingStep::BookingDetails);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_editing_clears_only_that_fields_error() {
        let mut wizard = BookingWizard::new();
        wizard.advance().unwrap_err();

        wizard.edit(GuestField::Email, "a@b.c");
        assert!(!wizard.errors().contains(GuestField::Email));
        assert!(wizard.errors().contains(GuestField::FirstName));
        assert_eq!(wizard.errors().len(), 5);
    }

    #[test]
    fn test_booking_details_gate() {
        let mut wizard = BookingWizard::new();
        fill_guest_info(&mut wizard);
        wizard.advance().unwrap();

        let errors = wizard.advance().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(wizard.step(), BookingStep::BookingDetails);

        fill_booking_details(&mut wizard);
        assert_eq!(wizard.advance().unwrap(), BookingStep::AdditionalInfo);
    }

    #[test]
    fn test_advance_never_passes_step_three() {
        let mut wizard = BookingWizard::new();
        fill_guest_info(&mut wizard);
        fill_booking_details(&mut wizard);
        wizard.advance().unwrap();
        wizard.advance().unwrap();

        assert_eq!(wizard.advance().unwrap(), BookingStep::AdditionalInfo);
        assert_eq!(wizard.advance().unwrap(), BookingStep::AdditionalInfo);
        assert_eq!(wizard.step().number(), 3);
    }

    #[test]
    fn test_retreat_never_goes_below_step_one() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.retreat(), BookingStep::GuestInfo);

        fill_guest_info(&mut wizard);
        wizard.advance().unwrap();
        assert_eq!(wizard.retreat(), BookingStep::GuestInfo);
        assert_eq!(wizard.retreat(), BookingStep::GuestInfo);
    }

    #[test]
    fn test_retreat_skips_validation() {
        let mut wizard = BookingWizard::new();
        fill_guest_info(&mut wizard);
        wizard.advance().unwrap();
        // Step 2 is empty, going back must still work
        wizard.edit(GuestField::FirstName, "");
        assert_eq!(wizard.retreat(), BookingStep::GuestInfo);
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let mut wizard = BookingWizard::new();
        let err = wizard.submit().unwrap_err();
        assert!(matches!(err, CoreError::InvalidStep { action: "submit", step: 1 }));

        fill_guest_info(&mut wizard);
        fill_booking_details(&mut wizard);
        wizard.set_flag(GuestFlag::AgreeTerms, true);
        wizard.advance().unwrap();
        assert!(wizard.submit().is_err());
        wizard.advance().unwrap();

        let submission = wizard.submit().unwrap();
        assert_eq!(submission.guest.profile.first_name, "Sarah");
        assert!(submission.guest.additional.agree_terms);
    }

    #[test]
    fn test_load_guest_keeps_step_and_clears_errors() {
        let mut wizard = BookingWizard::new();
        wizard.advance().unwrap_err();

        let mut guest = GuestData::new();
        guest.profile.first_name = "Michael".to_string();
        wizard.load_guest(guest);

        assert_eq!(wizard.step(), BookingStep::GuestInfo);
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.guest().profile.first_name, "Michael");
    }

    #[test]
    fn test_reset() {
        let mut wizard = BookingWizard::new();
        fill_guest_info(&mut wizard);
        wizard.advance().unwrap();
        wizard.reset();
        assert_eq!(wizard, BookingWizard::new());
    }

    #[test]
    fn test_apply_reports_events() {
        let mut wizard = BookingWizard::new();
        assert!(matches!(
            wizard.apply(BookingAction::Advance),
            BookingEvent::Blocked(_)
        ));
        assert_eq!(
            wizard.apply(BookingAction::SetFlag {
                flag: GuestFlag::AirportPickup,
                value: true
            }),
            BookingEvent::Updated
        );
        assert_eq!(
            wizard.apply(BookingAction::Retreat),
            BookingEvent::MovedTo(BookingStep::GuestInfo)
        );
    }

    #[test]
    fn test_action_deserializes_from_front_end_shape() {
        let action: BookingAction =
            serde_json::from_str(r#"{"type":"edit","field":"idNumber","value":"X1"}"#).unwrap();
        assert_eq!(
            action,
            BookingAction::Edit {
                field: GuestField::IdNumber,
                value: "X1".to_string()
            }
        );
    }
}

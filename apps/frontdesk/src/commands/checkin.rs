//! # Check-In Commands
//!
//! Photo verification, summary and digital key issue for an arriving guest.
//!
//! ```text
//! ┌──────────────────┐  both photos  ┌──────────────────────┐  issue key  ┌─────────────┐
//! │ 1. Photo         │ ────────────► │ 2. Verification      │ ──────────► │ 3. Digital  │
//! │    Verification  │ ◄──────────── │    Summary           │ ◄────────── │    Key      │
//! └──────────────────┘               └──────────────────────┘             └─────────────┘
//!                                                                               │
//!                                                          complete_check_in ───┘
//!                                                     (record + reset, then sink)
//! ```
//!
//! The camera delay is awaited without holding the desk lock.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use frontdesk_core::checkin::{DigitalKey, Photo, PhotoKind};
use frontdesk_core::{CheckInStep, CoreError};

use crate::error::{ApiError, ErrorCode};
use crate::ports::{Camera, CheckInSink, Clock, Delay};
use crate::state::{ConfigState, DeskSession, DeskState, DeskView};

/// Check-in wizard as rendered by the front-end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInView {
    pub view: DeskView,
    pub step: CheckInStep,
    pub step_number: u8,
    pub step_title: String,
    pub has_id_photo: bool,
    pub has_guest_photo: bool,
    pub key: Option<DigitalKey>,
}

impl From<&DeskSession> for CheckInView {
    fn from(session: &DeskSession) -> Self {
        let wizard = &session.check_in;
        CheckInView {
            view: session.view,
            step: wizard.step(),
            step_number: wizard.step().number(),
            step_title: wizard.step().title().to_string(),
            has_id_photo: wizard.photo(PhotoKind::IdDocument).is_some(),
            has_guest_photo: wizard.photo(PhotoKind::Guest).is_some(),
            key: wizard.key().cloned(),
        }
    }
}

/// Acknowledgement of a completed check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInConfirmation {
    pub key_id: String,
    pub room_id: String,
    pub guest_name: String,
    pub checked_in_at: DateTime<Utc>,
}

/// Current check-in wizard state.
pub fn get_check_in(desk: &DeskState) -> CheckInView {
    desk.with_session(|s| CheckInView::from(s))
}

/// Flips the desk between the booking form and the check-in wizard.
///
/// Neither wizard is reset.
pub fn switch_view(desk: &DeskState, view: DeskView) -> CheckInView {
    debug!(view = ?view, "switch_view command");
    desk.with_session_mut(|s| {
        s.view = view;
        CheckInView::from(&*s)
    })
}

/// Takes a photo with the camera after the configured warm-up delay.
///
/// ## Errors
/// - `CAMERA_ERROR` if the camera fails
/// - `INVALID_STEP` if the wizard has moved past Photo Verification
pub async fn capture_photo(
    desk: &DeskState,
    camera: &dyn Camera,
    delay: &dyn Delay,
    config: &ConfigState,
    kind: PhotoKind,
) -> Result<CheckInView, ApiError> {
    debug!(kind = ?kind, "capture_photo command");

    delay.wait(config.camera_delay()).await;

    let photo = camera.capture(kind).await.map_err(|e| {
        warn!(kind = ?kind, error = %e, "Camera capture failed");
        ApiError::new(ErrorCode::CameraError, e)
    })?;

    store_photo(desk, kind, photo)
}

/// Stores an uploaded photo (data URL or file contents).
///
/// ## Errors
/// - `VALIDATION_ERROR` for empty data
/// - `INVALID_STEP` if the wizard has moved past Photo Verification
pub fn upload_photo(desk: &DeskState, kind: PhotoKind, data: String) -> Result<CheckInView, ApiError> {
    debug!(kind = ?kind, bytes = data.len(), "upload_photo command");
    let photo = Photo::new(data)?;
    store_photo(desk, kind, photo)
}

/// Discards a photo so it can be retaken.
pub fn remove_photo(desk: &DeskState, kind: PhotoKind) -> Result<CheckInView, ApiError> {
    debug!(kind = ?kind, "remove_photo command");
    desk.with_session_mut(|s| -> Result<CheckInView, ApiError> {
        s.check_in.remove_photo(kind)?;
        Ok(CheckInView::from(&*s))
    })
}

fn store_photo(desk: &DeskState, kind: PhotoKind, photo: Photo) -> Result<CheckInView, ApiError> {
    desk.with_session_mut(|s| -> Result<CheckInView, ApiError> {
        s.check_in.set_photo(kind, photo)?;
        info!(kind = ?kind, "Photo stored");
        Ok(CheckInView::from(&*s))
    })
}

/// "Next": moves the check-in wizard forward.
///
/// ## Errors
/// - `PHOTOS_REQUIRED` when leaving Photo Verification without both photos
/// - `ROOM_NOT_SELECTED` when leaving Verification Summary with no room,
///   since the key is issued for it
pub fn next_check_in_step(desk: &DeskState, clock: &dyn Clock) -> Result<CheckInView, ApiError> {
    debug!("next_check_in_step command");
    let now = clock.now();

    desk.with_session_mut(|s| -> Result<CheckInView, ApiError> {
        let from = s.check_in.step();
        let step = s
            .check_in
            .advance(s.selected_room.as_ref(), now)
            .map_err(|e| {
                warn!(step = from.number(), error = %e, "Check-in step blocked");
                e
            })?;

        if from != step && step == CheckInStep::DigitalKey {
            if let (Some(key), Some(room)) = (s.check_in.key(), s.selected_room.as_ref()) {
                info!(key_id = %key.id, room_id = %room.id, "Digital key issued");
            }
        }
        info!(step = step.number(), title = step.title(), "Check-in step changed");
        Ok(CheckInView::from(&*s))
    })
}

/// "Previous": moves back one step.
pub fn previous_check_in_step(desk: &DeskState) -> CheckInView {
    debug!("previous_check_in_step command");
    desk.with_session_mut(|s| {
        s.check_in.retreat();
        CheckInView::from(&*s)
    })
}

/// Packages the check-in and clears the desk for the next guest under one
/// lock, then hands the record to the completion sink.
///
/// ## Errors
/// - `ROOM_NOT_SELECTED` if no room is selected
/// - `INVALID_STEP` unless the wizard is at Digital Key
pub fn complete_check_in(
    desk: &DeskState,
    sink: &dyn CheckInSink,
    clock: &dyn Clock,
) -> Result<CheckInConfirmation, ApiError> {
    debug!("complete_check_in command");
    let now = clock.now();

    let record = desk.with_session_mut(|s| -> Result<_, CoreError> {
        let room = s.selected_room.as_ref().ok_or(CoreError::RoomNotSelected)?;
        let record = s.check_in.complete(s.booking.guest(), room, now)?;
        s.reset();
        Ok(record)
    })?;

    sink.complete_check_in(&record);

    let confirmation = CheckInConfirmation {
        key_id: record.key.id,
        room_id: record.room.id,
        guest_name: record.guest.full_name(),
        checked_in_at: record.checked_in_at,
    };
    info!(
        key_id = %confirmation.key_id,
        room_id = %confirmation.room_id,
        "Check-in complete"
    );
    Ok(confirmation)
}

// =============================================================================
// Unit Tests
// =============================================================================

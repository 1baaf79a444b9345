//! # Check-in Wizard
//!
//! Three-step state machine run at the desk when a booked guest arrives.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Check-in Wizard                                      │
//! │                                                                         │
//! │  1 Photo Verification ──advance──► 2 Verification Summary               │
//! │    needs ID photo AND guest photo       │                               │
//! │                                      advance (issues DigitalKey)        │
//! │                                         ▼                               │
//! │                                  3 Digital Key ──complete──► Record     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Time is passed in by the caller, which keeps key generation and the
//! check-in timestamp deterministic under test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::guest::GuestData;
use crate::types::Room;

// =============================================================================
// Steps
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckInStep {
    #[default]
    PhotoVerification,
    VerificationSummary,
    DigitalKey,
}

impl CheckInStep {
    pub const fn number(&self) -> u8 {
        match self {
            CheckInStep::PhotoVerification => 1,
            CheckInStep::VerificationSummary => 2,
            CheckInStep::DigitalKey => 3,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            CheckInStep::PhotoVerification => "Photo Verification",
            CheckInStep::VerificationSummary => "Verification Summary",
            CheckInStep::DigitalKey => "Digital Key",
        }
    }
}

// =============================================================================
// Photos
// =============================================================================

/// Which photo a capture or upload fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PhotoKind {
    /// The guest's identity document.
    #[serde(rename = "id")]
    IdDocument,
    /// The guest's face.
    Guest,
}

/// A captured or uploaded image, as a data URL. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "String", into = "String")]
pub struct Photo(String);

impl Photo {
    pub fn new(data: impl Into<String>) -> CoreResult<Self> {
        let data = data.into();
        if data.trim().is_empty() {
            return Err(CoreError::EmptyPhoto);
        }
        Ok(Photo(data))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Photo {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Photo::new(value)
    }
}

impl From<Photo> for String {
    fn from(photo: Photo) -> Self {
        photo.0
    }
}

// =============================================================================
// Digital Key
// =============================================================================

/// Room key issued when the guest reaches the Digital Key step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DigitalKey {
    /// Opaque identifier: `KEY-{roomId}-{unix millis}`.
    pub id: String,
    /// Scannable code artifact (placeholder SVG data URL).
    pub code: String,
}

impl DigitalKey {
    pub fn issue(room: &Room, at: DateTime<Utc>) -> Self {
        let id = format!("KEY-{}-{}", room.id, at.timestamp_millis());
        let svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='200' height='200'>\
             <rect width='200' height='200' fill='#fff'/>\
             <text x='100' y='100' text-anchor='middle' font-family='monospace' \
             font-size='10'>{}</text></svg>",
            id
        );
        DigitalKey {
            code: format!("data:image/svg+xml;utf8,{}", svg),
            id,
        }
    }
}

/// Everything handed to the check-in completion sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRecord {
    pub guest: GuestData,
    pub room: Room,
    pub id_photo: Photo,
    pub guest_photo: Photo,
    pub key: DigitalKey,
    #[ts(as = "String")]
    pub checked_in_at: DateTime<Utc>,
}

// =============================================================================
// Wizard
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInWizard {
    step: CheckInStep,
    id_photo: Option<Photo>,
    guest_photo: Option<Photo>,
    key: Option<DigitalKey>,
}

impl CheckInWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckInStep {
        self.step
    }

    pub fn photo(&self, kind: PhotoKind) -> Option<&Photo> {
        match kind {
            PhotoKind::IdDocument => self.id_photo.as_ref(),
            PhotoKind::Guest => self.guest_photo.as_ref(),
        }
    }

    pub fn key(&self) -> Option<&DigitalKey> {
        self.key.as_ref()
    }

    pub fn has_both_photos(&self) -> bool {
        self.id_photo.is_some() && self.guest_photo.is_some()
    }

    /// Stores (or replaces) a photo. Only while at Photo Verification.
    pub fn set_photo(&mut self, kind: PhotoKind, photo: Photo) -> CoreResult<()> {
        *self.photo_slot(kind, "change photos")? = Some(photo);
        Ok(())
    }

    /// Discards a photo so it can be retaken. Only while at Photo Verification.
    pub fn remove_photo(&mut self, kind: PhotoKind) -> CoreResult<()> {
        *self.photo_slot(kind, "remove photos")? = None;
        Ok(())
    }

    fn photo_slot(&mut self, kind: PhotoKind, action: &'static str) -> CoreResult<&mut Option<Photo>> {
        if self.step != CheckInStep::PhotoVerification {
            return Err(CoreError::InvalidStep {
                action,
                step: self.step.number(),
            });
        }
        Ok(match kind {
            PhotoKind::IdDocument => &mut self.id_photo,
            PhotoKind::Guest => &mut self.guest_photo,
        })
    }

    /// Moves forward one step.
    ///
    /// - Photo Verification → Verification Summary requires both photos,
    ///   otherwise [`CoreError::PhotosRequired`] and no transition.
    /// - Verification Summary → Digital Key issues a fresh [`DigitalKey`]
    ///   for the room, otherwise [`CoreError::RoomNotSelected`] and no
    ///   transition. The room is not consulted on any other step.
    /// - At Digital Key nothing changes.
    pub fn advance(&mut self, room: Option<&Room>, now: DateTime<Utc>) -> CoreResult<CheckInStep> {
        self.step = match self.step {
            CheckInStep::PhotoVerification => {
                if !self.has_both_photos() {
                    return Err(CoreError::PhotosRequired);
                }
                CheckInStep::VerificationSummary
            }
            CheckInStep::VerificationSummary => {
                let room = room.ok_or(CoreError::RoomNotSelected)?;
                self.key = Some(DigitalKey::issue(room, now));
                CheckInStep::DigitalKey
            }
            CheckInStep::DigitalKey => CheckInStep::DigitalKey,
        };
        Ok(self.step)
    }

    /// Moves back one step, floored at Photo Verification.
    pub fn retreat(&mut self) -> CheckInStep {
        self.step = match self.step {
            CheckInStep::PhotoVerification | CheckInStep::VerificationSummary => {
                CheckInStep::PhotoVerification
            }
            CheckInStep::DigitalKey => CheckInStep::VerificationSummary,
        };
        self.step
    }

    /// Packages the check-in. Only valid from Digital Key.
    ///
    /// The wizard is left untouched; the caller resets it for the next guest.
    pub fn complete(
        &self,
        guest: &GuestData,
        room: &Room,
        now: DateTime<Utc>,
    ) -> CoreResult<CheckInRecord> {
        let invalid = || CoreError::InvalidStep {
            action: "complete check-in",
            step: self.step.number(),
        };

        if self.step != CheckInStep::DigitalKey {
            return Err(invalid());
        }

        let (id_photo, guest_photo) = match (&self.id_photo, &self.guest_photo) {
            (Some(id), Some(face)) => (id.clone(), face.clone()),
            _ => return Err(CoreError::PhotosRequired),
        };
        let key = self.key.clone().ok_or_else(invalid)?;

        Ok(CheckInRecord {
            guest: guest.clone(),
            room: room.clone(),
            id_photo,
            guest_photo,
            key,
            checked_in_at: now,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

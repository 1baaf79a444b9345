//! # Domain Types
//!
//! Core domain types used throughout the front desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Room       │   │   RoomStatus    │   │    RoomType     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id ("R101")    │   │  Available      │   │  Standard       │       │
//! │  │  name           │   │  Occupied       │   │  Deluxe         │       │
//! │  │  price (Money)  │   │  Maintenance    │   │  Suite          │       │
//! │  │  capacity       │   │  Cleaning       │   │  Premium        │       │
//! │  │  status         │   │  Reserved       │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │      Role       │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Admin          │   │  CreditCard     │       │
//! │  │  1200 = 12%     │   │  Receptionist   │   │  DebitCard      │       │
//! │  └─────────────────┘   │  ...            │   │  Cash           │       │
//! │                        └─────────────────┘   │  BankTransfer   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every enum parses from, and serializes to, the lowercase value the
//! browser form posts (`"deluxe"`, `"drivers_license"`, `"bank_transfer"`).

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::validate_price_cents;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1200 bps = 12%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (1200 bps = 0.1200).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }
}

// =============================================================================
// Rooms
// =============================================================================

/// Housekeeping / occupancy status of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
    Reserved,
}

impl RoomStatus {
    /// Only available rooms can be selected for a new booking.
    #[inline]
    pub const fn is_bookable(&self) -> bool {
        matches!(self, RoomStatus::Available)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Reserved => "reserved",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room category offered at the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Premium,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Standard,
        RoomType::Premium,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Premium => "premium",
        }
    }

    /// Guests a new room of this type sleeps.
    pub const fn default_capacity(&self) -> u32 {
        match self {
            RoomType::Standard | RoomType::Deluxe => 2,
            RoomType::Premium => 3,
            RoomType::Suite => 4,
        }
    }

    /// Human-readable label ("Deluxe Room", "Suite").
    pub const fn label(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard Room",
            RoomType::Deluxe => "Deluxe Room",
            RoomType::Suite => "Suite",
            RoomType::Premium => "Premium Room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(RoomType::Standard),
            "deluxe" => Ok(RoomType::Deluxe),
            "suite" => Ok(RoomType::Suite),
            "premium" => Ok(RoomType::Premium),
            _ => Err(ValidationError::NotAllowed {
                field: "room type".to_string(),
                allowed: RoomType::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            }),
        }
    }
}

/// A room in the property catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Business identifier, e.g. "R101".
    pub id: String,

    /// Display name, e.g. "Deluxe Room 101".
    pub name: String,

    pub room_type: RoomType,

    /// Nightly rate. Never negative, enforced on construction and decode.
    #[serde(deserialize_with = "non_negative_price")]
    price: Money,

    /// Maximum number of guests.
    pub capacity: u32,

    pub status: RoomStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<u8>,

    #[serde(default)]
    pub amenities: Vec<String>,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        room_type: RoomType,
        price: Money,
        capacity: u32,
        status: RoomStatus,
    ) -> CoreResult<Self> {
        validate_price_cents(price.cents())?;

        Ok(Room {
            id: id.into(),
            name: name.into(),
            room_type,
            price,
            capacity,
            status,
            floor: None,
            amenities: Vec::new(),
        })
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Adds amenities (builder style).
    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_floor(mut self, floor: u8) -> Self {
        self.floor = Some(floor);
        self
    }

    #[inline]
    pub fn is_bookable(&self) -> bool {
        self.status.is_bookable()
    }
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let price = Money::deserialize(deserializer)?;
    validate_price_cents(price.cents()).map_err(serde::de::Error::custom)?;
    Ok(price)
}

// =============================================================================
// Identity Documents
// =============================================================================

/// Type of identity document presented at booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum IdType {
    Passport,
    DriversLicense,
    NationalId,
    Other,
}

impl IdType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            IdType::Passport => "passport",
            IdType::DriversLicense => "drivers_license",
            IdType::NationalId => "national_id",
            IdType::Other => "other",
        }
    }
}

impl FromStr for IdType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passport" => Ok(IdType::Passport),
            "drivers_license" => Ok(IdType::DriversLicense),
            "national_id" => Ok(IdType::NationalId),
            "other" => Ok(IdType::Other),
            _ => Err(ValidationError::NotAllowed {
                field: "ID type".to_string(),
                allowed: ["passport", "drivers_license", "national_id", "other"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Staff Roles
// =============================================================================

/// Staff role chosen after sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Receptionist,
    RoomServiceManager,
    MaintenanceManager,
    SecurityManager,
    Guest,
}

impl Role {
    /// The screen a user lands on after choosing this role.
    pub const fn home_route(&self) -> &'static str {
        match self {
            Role::Admin => "/admin-dashboard",
            Role::Receptionist => "/guest-booking-check-in",
            Role::RoomServiceManager => "/room-service-management",
            Role::MaintenanceManager => "/maintenance-task-management",
            // No dedicated screens yet
            Role::SecurityManager | Role::Guest => "/admin-dashboard",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Receptionist => "receptionist",
            Role::RoomServiceManager => "room_service_manager",
            Role::MaintenanceManager => "maintenance_manager",
            Role::SecurityManager => "security_manager",
            Role::Guest => "guest",
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "receptionist" => Ok(Role::Receptionist),
            "room_service_manager" => Ok(Role::RoomServiceManager),
            "maintenance_manager" => Ok(Role::MaintenanceManager),
            "security_manager" => Ok(Role::SecurityManager),
            "guest" => Ok(Role::Guest),
            _ => Err(ValidationError::InvalidFormat {
                field: "role".to_string(),
                reason: format!("unknown role '{}'", s),
            }),
        }
    }
}

/// Profile of the signed-in staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

// =============================================================================
// Payment
// =============================================================================

/// How the guest settles the folio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Cash,
    BankTransfer,
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "debit_card" => Ok(PaymentMethod::DebitCard),
            "cash" => Ok(PaymentMethod::Cash),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            _ => Err(ValidationError::NotAllowed {
                field: "payment method".to_string(),
                allowed: ["credit_card", "debit_card", "cash", "bank_transfer"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

/// Channels the receipt / invoice is sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryOptions {
    pub sms: bool,
    pub whatsapp: bool,
    pub email: bool,
}

impl Default for DeliveryOptions {
    /// Email only.
    fn default() -> Self {
        DeliveryOptions {
            sms: false,
            whatsapp: false,
            email: true,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

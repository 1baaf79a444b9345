//! # Guest History
//!
//! Lookup of returning guests and prefilling a new booking from their
//! previous details.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::guest::{AdditionalInfo, GuestData, GuestProfile, StayDetails};
use crate::money::Money;
use crate::types::{IdType, RoomType};

/// Loyalty programme tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LoyaltyTier {
    #[default]
    Standard,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LoyaltyTier::Standard => "Standard",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Gold => "Gold",
            LoyaltyTier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guest who has stayed before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GuestRecord {
    /// e.g. "G001"
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub id_type: IdType,
    pub id_number: String,
    pub address: String,
    pub total_stays: u32,
    #[ts(as = "String")]
    pub last_stay: NaiveDate,
    pub preferred_room_type: RoomType,
    pub loyalty: LoyaltyTier,
    pub total_spent: Money,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub vehicle_model: String,
    pub license_plate: String,
    pub special_requests: String,
}

impl GuestRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&self.first_name)
            || contains(&self.last_name)
            || contains(&self.email)
            || self.phone.contains(query)
            || contains(&self.id_number)
    }

    /// Builds a booking form prefilled from this guest's history.
    ///
    /// Stay dates are left blank and every paid add-on is off; terms and
    /// offers are pre-agreed since the guest accepted them before.
    pub fn to_guest_data(&self) -> GuestData {
        GuestData {
            profile: GuestProfile {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                id_type: self.id_type.as_str().to_string(),
                id_number: self.id_number.clone(),
                address: self.address.clone(),
            },
            stay: StayDetails {
                check_in_date: String::new(),
                check_out_date: String::new(),
                room_type: self.preferred_room_type.as_str().to_string(),
                guest_count: "2".to_string(),
                special_requests: self.special_requests.clone(),
                early_check_in: false,
                late_check_out: false,
                airport_pickup: false,
            },
            additional: AdditionalInfo {
                emergency_contact_name: self.emergency_contact_name.clone(),
                emergency_contact_phone: self.emergency_contact_phone.clone(),
                vehicle_model: self.vehicle_model.clone(),
                license_plate: self.license_plate.clone(),
                agree_terms: true,
                receive_offers: true,
            },
        }
    }
}

/// Finds guests matching `query`.
///
/// Names, email and ID number match case-insensitively; phone numbers match
/// as typed. A blank query finds nothing.
pub fn search_guests<'a>(records: &'a [GuestRecord], query: &str) -> Vec<&'a GuestRecord> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    records.iter().filter(|record| record.matches(query)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStep;
    use crate::validation::validate_step;

    fn john() -> GuestRecord {
        GuestRecord {
            id: "G001".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "+1-555-0123".to_string(),
            id_type: IdType::Passport,
            id_number: "P123456789".to_string(),
            address: "123 Main St, New York, NY 10001".to_string(),
            total_stays: 5,
            last_stay: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            preferred_room_type: RoomType::Deluxe,
            loyalty: LoyaltyTier::Gold,
            total_spent: Money::from_major(2450),
            emergency_contact_name: "Jane Smith".to_string(),
            emergency_contact_phone: "+1-555-0124".to_string(),
            vehicle_model: "Toyota Camry".to_string(),
            license_plate: "ABC-123".to_string(),
            special_requests: "Late checkout, extra towels".to_string(),
        }
    }

    fn sarah() -> GuestRecord {
        GuestRecord {
            id: "G002".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1-555-0456".to_string(),
            id_type: IdType::DriversLicense,
            id_number: "DL987654321".to_string(),
            loyalty: LoyaltyTier::Silver,
            preferred_room_type: RoomType::Suite,
            ..john()
        }
    }

    #[test]
    fn test_blank_query_finds_nothing() {
        let records = vec![john(), sarah()];
        assert!(search_guests(&records, "").is_empty());
        assert!(search_guests(&records, "   ").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_names_and_ids() {
        let records = vec![john(), sarah()];
        let found = search_guests(&records, "JOHN");
        // "John" and "Johnson"
        assert_eq!(found.len(), 2);

        let found = search_guests(&records, "dl98");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "G002");
    }

    #[test]
    fn test_search_by_phone() {
        let records = vec![john(), sarah()];
        let found = search_guests(&records, "555-0456");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name(), "Sarah Johnson");
    }

    #[test]
    fn test_no_match() {
        let records = vec![john()];
        assert!(search_guests(&records, "zzz").is_empty());
    }

    #[test]
    fn test_prefill_from_history() {
        let guest = john().to_guest_data();
        assert_eq!(guest.profile.first_name, "John");
        assert_eq!(guest.profile.id_type, "passport");
        assert_eq!(guest.stay.room_type, "deluxe");
        assert_eq!(guest.stay.guest_count, "2");
        assert!(guest.stay.check_in_date.is_empty());
        assert!(!guest.stay.early_check_in);
        assert!(guest.additional.agree_terms);
        assert!(guest.additional.receive_offers);
        assert_eq!(guest.additional.license_plate, "ABC-123");

        // Step 1 is complete; step 2 still needs dates
        assert!(validate_step(BookingStep::GuestInfo, &guest).is_ok());
        let errors = validate_step(BookingStep::BookingDetails, &guest).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}

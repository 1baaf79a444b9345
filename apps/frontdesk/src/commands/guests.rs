//! # Guest History Commands
//!
//! Look up returning guests and prefill the booking form from their history.

use tracing::{debug, info};

use frontdesk_core::booking::BookingAction;
use frontdesk_core::history::{search_guests, GuestRecord};

use crate::commands::booking::BookingView;
use crate::error::ApiError;
use crate::ports::Delay;
use crate::state::{CatalogState, ConfigState, DeskState};

/// Searches guest history by name, email, phone or ID number.
///
/// A blank query returns nothing straight away; otherwise the configured
/// lookup delay is awaited first.
pub async fn lookup_guests(
    catalog: &CatalogState,
    delay: &dyn Delay,
    config: &ConfigState,
    query: &str,
) -> Vec<GuestRecord> {
    debug!(query = %query, "lookup_guests command");

    if query.trim().is_empty() {
        return Vec::new();
    }

    delay.wait(config.lookup_delay()).await;

    let results: Vec<GuestRecord> = search_guests(catalog.guests(), query)
        .into_iter()
        .cloned()
        .collect();
    info!(query = %query, found = results.len(), "Guest lookup finished");
    results
}

/// Replaces the booking form with a returning guest's details.
pub fn load_guest(
    catalog: &CatalogState,
    desk: &DeskState,
    guest_id: &str,
) -> Result<BookingView, ApiError> {
    debug!(guest_id = %guest_id, "load_guest command");

    let record = catalog
        .guest(guest_id)
        .ok_or_else(|| ApiError::not_found("Guest", guest_id))?;

    let view = desk.with_session_mut(|s| {
        s.booking.apply(BookingAction::LoadGuest(record.to_guest_data()));
        BookingView::from(&*s)
    });
    info!(guest_id = %guest_id, loyalty = %record.loyalty, "Guest loaded into booking form");
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{demo_guest_history, demo_rooms};
    use crate::ports::NoDelay;
    use frontdesk_core::{BookingStep, GuestField};

    fn catalog() -> CatalogState {
        CatalogState::new(demo_rooms().unwrap(), demo_guest_history())
    }

    #[tokio::test]
    async fn test_lookup_guests() {
        let config = ConfigState::default();
        let found = lookup_guests(&catalog(), &NoDelay, &config, "brown").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "G003");

        assert!(lookup_guests(&catalog(), &NoDelay, &config, " ").await.is_empty());
    }

    #[test]
    fn test_load_guest_prefills_and_clears_errors() {
        let catalog = catalog();
        let desk = DeskState::new();
        desk.with_session_mut(|s| {
            s.booking.advance().unwrap_err();
        });
        assert!(!desk.with_session(|s| s.booking.errors().is_empty()));

        let view = load_guest(&catalog, &desk, "G002").unwrap();
        assert_eq!(view.step, BookingStep::GuestInfo);
        assert!(view.errors.is_empty());
        assert_eq!(view.guest.text(GuestField::RoomType), "suite");
        assert_eq!(view.guest.text(GuestField::GuestCount), "2");

        assert!(load_guest(&catalog, &desk, "G999").is_err());
    }
}

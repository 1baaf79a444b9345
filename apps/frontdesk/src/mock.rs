//! # Mock Collaborators
//!
//! In-memory adapters for every port, plus the demo catalog and guest
//! history the desk runs against until a real property system is wired in.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use frontdesk_core::booking::BookingSubmission;
use frontdesk_core::checkin::{CheckInRecord, Photo, PhotoKind};
use frontdesk_core::checkout::{InvoiceRequest, PaymentRequest};
use frontdesk_core::history::{GuestRecord, LoyaltyTier};
use frontdesk_core::maintenance::{MaintenanceTask, TaskCategory, TaskPriority, TaskStatus};
use frontdesk_core::room_service::{OrderItem, OrderPriority, OrderStatus, RoomServiceOrder};
use frontdesk_core::{CoreResult, IdType, Money, Role, Room, RoomStatus, RoomType, UserProfile};

use crate::ports::{
    AuthOutcome, AuthProvider, BookingSink, Camera, CheckInSink, InvoiceSink, PaymentSink,
};

// =============================================================================
// Auth
// =============================================================================

struct Account {
    password: String,
    profile: UserProfile,
}

/// Accepts a fixed set of email/password pairs.
pub struct MockAuthProvider {
    accounts: Vec<Account>,
    current: Mutex<Option<UserProfile>>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        MockAuthProvider {
            accounts: Vec::new(),
            current: Mutex::new(None),
        }
    }

    /// Adds an account (builder style).
    pub fn with_account(
        mut self,
        email: &str,
        password: &str,
        full_name: &str,
        role: Role,
    ) -> Self {
        let id = format!("U{:03}", self.accounts.len() + 1);
        self.accounts.push(Account {
            password: password.to_string(),
            profile: UserProfile {
                id,
                email: email.to_string(),
                full_name: full_name.to_string(),
                role,
            },
        });
        self
    }

    /// Front desk demo accounts.
    pub fn demo() -> Self {
        MockAuthProvider::new()
            .with_account("admin@grandhotel.com", "admin123", "Alex Morgan", Role::Admin)
            .with_account(
                "reception@grandhotel.com",
                "desk123",
                "Riley Chen",
                Role::Receptionist,
            )
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> AuthOutcome {
        let account = self
            .accounts
            .iter()
            .find(|a| a.profile.email.eq_ignore_ascii_case(email.trim()) && a.password == password);

        match account {
            Some(account) => {
                *self.current.lock().expect("Auth mutex poisoned") = Some(account.profile.clone());
                AuthOutcome::ok()
            }
            None => AuthOutcome::failed("Invalid email or password"),
        }
    }

    async fn sign_out(&self) -> AuthOutcome {
        *self.current.lock().expect("Auth mutex poisoned") = None;
        AuthOutcome::ok()
    }

    fn current_profile(&self) -> Option<UserProfile> {
        self.current.lock().expect("Auth mutex poisoned").clone()
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Everything handed to a [`RecordingSink`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Booking(BookingSubmission),
    Payment(PaymentRequest),
    Invoice(InvoiceRequest),
    CheckIn(CheckInRecord),
}

/// Implements every sink by remembering what it was given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().expect("Sink mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("Sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, kind: &str, payload: serde_json::Result<String>, event: SinkEvent) {
        match payload {
            Ok(json) => debug!(kind, payload = %json, "Sink received payload"),
            Err(e) => debug!(kind, error = %e, "Sink payload not serializable"),
        }
        self.events.lock().expect("Sink mutex poisoned").push(event);
    }
}

impl BookingSink for RecordingSink {
    fn submit_booking(&self, submission: &BookingSubmission) {
        info!(guest = %submission.guest.full_name(), "Booking submitted");
        self.record(
            "booking",
            serde_json::to_string(submission),
            SinkEvent::Booking(submission.clone()),
        );
    }
}

impl PaymentSink for RecordingSink {
    fn process_payment(&self, payment: &PaymentRequest) {
        info!(method = ?payment.method, amount = %payment.amount, "Payment processed");
        self.record(
            "payment",
            serde_json::to_string(payment),
            SinkEvent::Payment(payment.clone()),
        );
    }
}

impl InvoiceSink for RecordingSink {
    fn generate_invoice(&self, invoice: &InvoiceRequest) {
        info!(total = %invoice.costs.total, "Invoice generated");
        self.record(
            "invoice",
            serde_json::to_string(invoice),
            SinkEvent::Invoice(invoice.clone()),
        );
    }
}

impl CheckInSink for RecordingSink {
    fn complete_check_in(&self, record: &CheckInRecord) {
        info!(room = %record.room.id, key = %record.key.id, "Check-in completed");
        self.record(
            "check_in",
            serde_json::to_string(record),
            SinkEvent::CheckIn(record.clone()),
        );
    }
}

// =============================================================================
// Camera
// =============================================================================

/// Produces a labelled placeholder image for every capture.
#[derive(Debug, Default)]
pub struct SimulatedCamera {
    offline: bool,
    shots: AtomicU32,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// A camera that fails every capture.
    pub fn offline() -> Self {
        SimulatedCamera {
            offline: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Camera for SimulatedCamera {
    async fn capture(&self, kind: PhotoKind) -> Result<Photo, String> {
        if self.offline {
            return Err("Camera not available".to_string());
        }

        let shot = self.shots.fetch_add(1, Ordering::Relaxed) + 1;
        let label = match kind {
            PhotoKind::IdDocument => "ID",
            PhotoKind::Guest => "GUEST",
        };
        let svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='320' height='240'>\
             <rect width='320' height='240' fill='#ddd'/>\
             <text x='160' y='120' text-anchor='middle'>{} #{}</text></svg>",
            label, shot
        );
        Photo::new(format!("data:image/svg+xml;utf8,{}", svg)).map_err(|e| e.to_string())
    }
}

// =============================================================================
// Demo Data
// =============================================================================

/// The room catalog shown in the availability panel.
pub fn demo_rooms() -> CoreResult<Vec<Room>> {
    let room = |id: &str, name: &str, room_type, price, capacity, status, amenities: &[&str]| {
        let floor = id[1..2].parse().unwrap_or(1);
        Room::new(id, name, room_type, Money::from_major(price), capacity, status).map(|r| {
            r.with_floor(floor)
                .with_amenities(amenities.iter().copied())
        })
    };

    [
        room("R101", "Deluxe Room 101", RoomType::Deluxe, 150, 2, RoomStatus::Available,
             &["WiFi", "AC", "TV", "Mini Bar"]),
        room("R102", "Executive Suite 102", RoomType::Suite, 280, 4, RoomStatus::Available,
             &["WiFi", "AC", "TV", "Mini Bar", "Balcony", "Jacuzzi"]),
        room("R103", "Standard Room 103", RoomType::Standard, 89, 2, RoomStatus::Occupied,
             &["WiFi", "AC", "TV"]),
        room("R104", "Premium Room 104", RoomType::Premium, 220, 3, RoomStatus::Available,
             &["WiFi", "AC", "TV", "Mini Bar", "City View"]),
        room("R105", "Deluxe Room 105", RoomType::Deluxe, 165, 2, RoomStatus::Maintenance,
             &["WiFi", "AC", "TV", "Mini Bar"]),
        room("R106", "Presidential Suite 106", RoomType::Suite, 450, 6, RoomStatus::Available,
             &["WiFi", "AC", "TV", "Mini Bar", "Balcony", "Jacuzzi", "Kitchen"]),
    ]
    .into_iter()
    .collect()
}

/// Technicians the maintenance board can assign.
pub const DEMO_TECHNICIANS: [(&str, &str); 4] = [
    ("john-doe", "John Doe"),
    ("mike-wilson", "Mike Wilson"),
    ("sarah-johnson", "Sarah Johnson"),
    ("david-brown", "David Brown"),
];

/// The maintenance board as the manager finds it in the morning.
pub fn demo_tasks() -> Vec<MaintenanceTask> {
    let at = |s: &str| {
        DateTime::parse_from_rfc3339(s)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_default()
    };
    let task = |id: &str,
                title: &str,
                description: &str,
                room: &str,
                priority,
                category,
                room_type,
                status,
                technician: Option<&str>,
                tenths: i64,
                created: &str| MaintenanceTask {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        room_number: room.to_string(),
        priority,
        category,
        room_type,
        status,
        assigned_to: technician.map(str::to_string),
        estimated_hours: Decimal::new(tenths, 1),
        created_at: at(created),
        updated_at: at(created),
        due_date: None,
        completed_at: None,
        notes: String::new(),
        photos: Vec::new(),
    };

    let mut tasks = vec![
        task("MT001", "Leaky Faucet Repair", "Bathroom faucet dripping constantly, guest complained about noise",
             "101", TaskPriority::Urgent, TaskCategory::Plumbing, RoomType::Deluxe, TaskStatus::Pending,
             None, 15, "2025-07-12T06:30:00Z"),
        task("MT002", "AC Unit Maintenance", "Air conditioning not cooling properly, needs filter replacement",
             "205", TaskPriority::Medium, TaskCategory::Hvac, RoomType::Suite, TaskStatus::Assigned,
             Some("john-doe"), 20, "2025-07-12T05:15:00Z"),
        task("MT003", "Light Fixture Replacement", "Bedside lamp not working, bulb and wiring check needed",
             "150", TaskPriority::High, TaskCategory::Electrical, RoomType::Standard, TaskStatus::InProgress,
             Some("mike-wilson"), 10, "2025-07-12T04:45:00Z"),
        task("MT004", "Carpet Deep Cleaning", "Wine stain on carpet near the window",
             "301", TaskPriority::Medium, TaskCategory::Cleaning, RoomType::Premium, TaskStatus::Completed,
             Some("sarah-johnson"), 15, "2025-07-11T14:20:00Z"),
        task("MT005", "Door Lock Malfunction", "Key card reader intermittently failing",
             "412", TaskPriority::High, TaskCategory::Electrical, RoomType::Deluxe, TaskStatus::Assigned,
             Some("david-brown"), 10, "2025-07-12T07:00:00Z"),
        task("MT006", "Furniture Repair", "Desk chair wheel broken",
             "220", TaskPriority::Low, TaskCategory::Furniture, RoomType::Standard, TaskStatus::InProgress,
             Some("john-doe"), 20, "2025-07-11T16:30:00Z"),
        task("MT007", "Toilet Running", "Toilet keeps running after flush",
             "118", TaskPriority::Urgent, TaskCategory::Plumbing, RoomType::Standard, TaskStatus::Pending,
             None, 5, "2025-07-12T08:10:00Z"),
        task("MT008", "Window Cleaning", "Exterior window streaks reported by guest",
             "505", TaskPriority::Low, TaskCategory::Cleaning, RoomType::Suite, TaskStatus::Completed,
             Some("sarah-johnson"), 5, "2025-07-11T10:00:00Z"),
    ];

    for (id, done) in [("MT004", "2025-07-11T16:50:00Z"), ("MT008", "2025-07-11T11:30:00Z")] {
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            task.completed_at = Some(at(done));
            task.updated_at = at(done);
        }
    }
    tasks
}

/// Room-service orders placed over the last hour, relative to `now`.
pub fn demo_orders(now: DateTime<Utc>) -> Vec<RoomServiceOrder> {
    let item = |name: &str, description: &str, quantity, cents, customizations: Option<&str>| OrderItem {
        name: name.to_string(),
        description: description.to_string(),
        quantity,
        price: Money::from_cents(cents),
        customizations: customizations.map(str::to_string),
    };
    let order = |id: &str,
                 guest: &str,
                 room: &str,
                 phone: &str,
                 status,
                 priority,
                 minutes_ago,
                 prep,
                 items: Vec<OrderItem>,
                 staff: Option<&str>,
                 instructions: Option<&str>| RoomServiceOrder {
        id: id.to_string(),
        guest_name: guest.to_string(),
        room_number: room.to_string(),
        guest_phone: phone.to_string(),
        status,
        priority,
        order_time: now - Duration::minutes(minutes_ago),
        estimated_prep_minutes: prep,
        items,
        assigned_staff: staff.map(str::to_string),
        internal_notes: String::new(),
        special_instructions: instructions.map(str::to_string),
    };

    vec![
        order("RS001", "John Smith", "305", "+1-555-0123", OrderStatus::New, OrderPriority::High, 5, 25,
              vec![item("Grilled Salmon", "Atlantic salmon with lemon butter", 1, 3200, Some("No capers")),
                   item("Caesar Salad", "Romaine, parmesan, croutons", 1, 1450, None)],
              None, Some("Guest has a shellfish allergy")),
        order("RS002", "Emily Johnson", "412", "+1-555-0456", OrderStatus::Preparing, OrderPriority::Medium, 15, 30,
              vec![item("Club Sandwich", "Triple-decker with fries", 2, 1850, None)],
              Some("Maria Rodriguez"), None),
        order("RS003", "Michael Chen", "208", "+1-555-0789", OrderStatus::Ready, OrderPriority::Low, 30, 20,
              vec![item("Margherita Pizza", "Tomato, mozzarella, basil", 1, 2200, Some("Extra basil")),
                   item("Sparkling Water", "750ml", 2, 600, None)],
              Some("James Wilson"), None),
        order("RS004", "Sarah Williams", "156", "+1-555-0321", OrderStatus::Delivered, OrderPriority::Medium, 60, 15,
              vec![item("Continental Breakfast", "Pastries, fruit, coffee", 2, 2400, None)],
              Some("Michael Brown"), Some("Leave at the door")),
        order("RS005", "David Rodriguez", "523", "+1-555-0654", OrderStatus::New, OrderPriority::High, 2, 35,
              vec![item("Ribeye Steak", "12oz with roasted vegetables", 1, 4800, Some("Medium rare")),
                   item("Red Wine", "Glass of house cabernet", 2, 1400, None)],
              None, None),
    ]
}

/// Returning guests available to the history lookup.
pub fn demo_guest_history() -> Vec<GuestRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
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
            last_stay: date(2024, 5, 15),
            preferred_room_type: RoomType::Deluxe,
            loyalty: LoyaltyTier::Gold,
            total_spent: Money::from_major(2450),
            emergency_contact_name: "Jane Smith".to_string(),
            emergency_contact_phone: "+1-555-0124".to_string(),
            vehicle_model: "Toyota Camry".to_string(),
            license_plate: "ABC-123".to_string(),
            special_requests: "Late checkout, extra towels".to_string(),
        },
        GuestRecord {
            id: "G002".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1-555-0456".to_string(),
            id_type: IdType::DriversLicense,
            id_number: "DL987654321".to_string(),
            address: "456 Oak Ave, Los Angeles, CA 90210".to_string(),
            total_stays: 3,
            last_stay: date(2024, 6, 20),
            preferred_room_type: RoomType::Suite,
            loyalty: LoyaltyTier::Silver,
            total_spent: Money::from_major(1890),
            emergency_contact_name: "Mike Johnson".to_string(),
            emergency_contact_phone: "+1-555-0457".to_string(),
            vehicle_model: "Honda Accord".to_string(),
            license_plate: "XYZ-789".to_string(),
            special_requests: "Ground floor room, no smoking".to_string(),
        },
        GuestRecord {
            id: "G003".to_string(),
            first_name: "Michael".to_string(),
            last_name: "Brown".to_string(),
            email: "michael.brown@email.com".to_string(),
            phone: "+1-555-0789".to_string(),
            id_type: IdType::Passport,
            id_number: "P987654321".to_string(),
            address: "789 Pine St, Chicago, IL 60601".to_string(),
            total_stays: 8,
            last_stay: date(2024, 7, 1),
            preferred_room_type: RoomType::Premium,
            loyalty: LoyaltyTier::Platinum,
            total_spent: Money::from_major(4200),
            emergency_contact_name: "Lisa Brown".to_string(),
            emergency_contact_phone: "+1-555-0790".to_string(),
            vehicle_model: "BMW X5".to_string(),
            license_plate: "BMW-001".to_string(),
            special_requests: "High floor, city view, early check-in".to_string(),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_auth_sign_in_and_out() {
        let auth = MockAuthProvider::demo();

        let outcome = auth.sign_in("reception@grandhotel.com", "wrong").await;
        assert!(!outcome.success);
        assert!(auth.current_profile().is_none());

        let outcome = auth.sign_in("Reception@GrandHotel.com", "desk123").await;
        assert!(outcome.success);
        assert_eq!(auth.current_profile().unwrap().role, Role::Receptionist);

        assert!(auth.sign_out().await.success);
        assert!(auth.current_profile().is_none());
    }

    #[tokio::test]
    async fn test_simulated_camera() {
        let camera = SimulatedCamera::new();
        let first = camera.capture(PhotoKind::IdDocument).await.unwrap();
        let second = camera.capture(PhotoKind::Guest).await.unwrap();
        assert!(first.as_str().starts_with("data:image/svg+xml"));
        assert_ne!(first, second);

        assert!(SimulatedCamera::offline().capture(PhotoKind::Guest).await.is_err());
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        let submission = BookingSubmission {
            guest: Default::default(),
        };
        sink.submit_booking(&submission);
        sink.submit_booking(&submission);
        assert_eq!(sink.len(), 2);
        assert!(matches!(sink.events()[0], SinkEvent::Booking(_)));
    }

    #[test]
    fn test_demo_catalog() {
        let rooms = demo_rooms().unwrap();
        assert_eq!(rooms.len(), 6);
        assert_eq!(rooms[5].amenities.len(), 7);
        assert_eq!(rooms[0].floor, Some(1));
        assert_eq!(demo_guest_history().len(), 3);
    }

    #[test]
    fn test_demo_board_and_queue() {
        let tasks = demo_tasks();
        assert_eq!(tasks.len(), 8);
        assert!(tasks.iter().all(|t| t.created_at.timestamp() > 0));
        assert!(tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .all(|t| t.completed_at.is_some()));
        assert!(tasks
            .iter()
            .filter_map(|t| t.assigned_to.as_deref())
            .all(|id| DEMO_TECHNICIANS.iter().any(|(tech, _)| *tech == id)));

        let now = Utc::now();
        let orders = demo_orders(now);
        assert_eq!(orders.len(), 5);
        assert_eq!(orders[0].order_time, now - Duration::minutes(5));
        assert_eq!(orders[0].total(), Money::from_cents(4650));
    }
}

//! # Room Service Orders
//!
//! The room-service manager's order queue: search and dropdown filters,
//! kitchen status updates, internal notes and staff assignment.
//!
//! ```text
//!   new ──► preparing ──► ready ──► delivered
//! ```
//!
//! Any status can be set from the queue; the arrow is the usual path, not a
//! rule. An order's total is always the sum of its item lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Preparing,
    Ready,
    Delivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub description: String,
    pub quantity: u32,
    /// Unit price.
    pub price: Money,
    pub customizations: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> Money {
        self.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoomServiceOrder {
    /// "RS001", "RS002", ...
    pub id: String,
    pub guest_name: String,
    pub room_number: String,
    pub guest_phone: String,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    #[ts(as = "String")]
    pub order_time: DateTime<Utc>,
    pub estimated_prep_minutes: u32,
    pub items: Vec<OrderItem>,
    /// Staff member name; `None` until someone picks the order up.
    pub assigned_staff: Option<String>,
    pub internal_notes: String,
    pub special_instructions: Option<String>,
}

impl RoomServiceOrder {
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// Queue filters. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFilter {
    /// Case-insensitive on guest name and order id, plain substring on the
    /// room number.
    pub search: String,
    pub status: Option<OrderStatus>,
    pub priority: Option<OrderPriority>,
}

impl OrderFilter {
    pub fn matches(&self, order: &RoomServiceOrder) -> bool {
        let search = self.search.trim();
        let needle = search.to_lowercase();
        let by_search = search.is_empty()
            || order.guest_name.to_lowercase().contains(&needle)
            || order.room_number.contains(search)
            || order.id.to_lowercase().contains(&needle);

        by_search
            && self.status.map_or(true, |s| order.status == s)
            && self.priority.map_or(true, |p| order.priority == p)
    }
}

/// Counts for the queue header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: u32,
    pub new: u32,
    pub preparing: u32,
    pub ready: u32,
    pub delivered: u32,
}

impl OrderStats {
    pub fn tally(orders: &[RoomServiceOrder]) -> Self {
        orders.iter().fold(OrderStats::default(), |mut stats, order| {
            stats.total += 1;
            match order.status {
                OrderStatus::New => stats.new += 1,
                OrderStatus::Preparing => stats.preparing += 1,
                OrderStatus::Ready => stats.ready += 1,
                OrderStatus::Delivered => stats.delivered += 1,
            }
            stats
        })
    }
}

/// All open and recent orders, newest last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderQueue {
    orders: Vec<RoomServiceOrder>,
}

impl OrderQueue {
    pub fn new(orders: Vec<RoomServiceOrder>) -> Self {
        OrderQueue { orders }
    }

    pub fn orders(&self) -> &[RoomServiceOrder] {
        &self.orders
    }

    pub fn filter(&self, filter: &OrderFilter) -> Vec<&RoomServiceOrder> {
        self.orders.iter().filter(|o| filter.matches(o)).collect()
    }

    fn order_mut(&mut self, id: &str) -> CoreResult<&mut RoomServiceOrder> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::NotFound {
                kind: "Order",
                id: id.to_string(),
            })
    }

    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> CoreResult<&RoomServiceOrder> {
        let order = self.order_mut(id)?;
        order.status = status;
        Ok(order)
    }

    /// Replaces the internal notes (kitchen / delivery remarks).
    pub fn update_notes(&mut self, id: &str, notes: impl Into<String>) -> CoreResult<&RoomServiceOrder> {
        let order = self.order_mut(id)?;
        order.internal_notes = notes.into();
        Ok(order)
    }

    /// Assigns a staff member; blank clears the assignment.
    pub fn assign_staff(&mut self, id: &str, staff: &str) -> CoreResult<&RoomServiceOrder> {
        let order = self.order_mut(id)?;
        let staff = staff.trim();
        order.assigned_staff = (!staff.is_empty()).then(|| staff.to_string());
        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

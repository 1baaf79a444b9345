//! # Room Service Commands
//!
//! The room-service manager's order queue: filter, header counts, and the
//! order detail actions (status, notes, staff).

use tracing::{debug, info};

use frontdesk_core::room_service::{OrderFilter, OrderStats, OrderStatus, RoomServiceOrder};

use crate::error::ApiError;
use crate::state::RoomServiceState;

/// Orders matching the search and dropdowns, in arrival order.
pub fn list_orders(room_service: &RoomServiceState, filter: OrderFilter) -> Vec<RoomServiceOrder> {
    debug!(filter = ?filter, "list_orders command");
    room_service.with_queue(|q| q.filter(&filter).into_iter().cloned().collect())
}

/// Per-status counts over the whole queue.
pub fn order_stats(room_service: &RoomServiceState) -> OrderStats {
    debug!("order_stats command");
    room_service.with_queue(|q| OrderStats::tally(q.orders()))
}

pub fn update_order_status(
    room_service: &RoomServiceState,
    order_id: &str,
    status: OrderStatus,
) -> Result<RoomServiceOrder, ApiError> {
    debug!(order_id = %order_id, status = ?status, "update_order_status command");

    let order = room_service.with_queue_mut(|q| q.update_status(order_id, status).cloned())?;
    info!(order_id = %order.id, status = ?order.status, "Order status updated");
    Ok(order)
}

pub fn update_order_notes(
    room_service: &RoomServiceState,
    order_id: &str,
    notes: String,
) -> Result<RoomServiceOrder, ApiError> {
    debug!(order_id = %order_id, "update_order_notes command");
    Ok(room_service.with_queue_mut(|q| q.update_notes(order_id, notes).cloned())?)
}

/// Assigns a staff member; an empty name clears the assignment.
pub fn assign_order_staff(
    room_service: &RoomServiceState,
    order_id: &str,
    staff: &str,
) -> Result<RoomServiceOrder, ApiError> {
    debug!(order_id = %order_id, staff = %staff, "assign_order_staff command");

    let order = room_service.with_queue_mut(|q| q.assign_staff(order_id, staff).cloned())?;
    info!(order_id = %order.id, staff = ?order.assigned_staff, "Order staff assigned");
    Ok(order)
}

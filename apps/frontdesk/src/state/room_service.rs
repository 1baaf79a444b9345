//! # Room Service State
//!
//! The order queue the kitchen and the room-service manager work from.

use std::sync::{Arc, Mutex};

use frontdesk_core::room_service::{OrderQueue, RoomServiceOrder};

/// Shared room-service order queue.
#[derive(Debug, Clone, Default)]
pub struct RoomServiceState {
    queue: Arc<Mutex<OrderQueue>>,
}

impl RoomServiceState {
    pub fn new(orders: Vec<RoomServiceOrder>) -> Self {
        RoomServiceState {
            queue: Arc::new(Mutex::new(OrderQueue::new(orders))),
        }
    }

    pub fn with_queue<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderQueue) -> R,
    {
        let queue = self.queue.lock().expect("Room service mutex poisoned");
        f(&queue)
    }

    pub fn with_queue_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderQueue) -> R,
    {
        let mut queue = self.queue.lock().expect("Room service mutex poisoned");
        f(&mut queue)
    }
}

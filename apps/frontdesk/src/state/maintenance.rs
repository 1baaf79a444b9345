//! # Maintenance State
//!
//! The maintenance board shared by the manager's screens. Every card move,
//! assignment and edit goes through [`MaintenanceState::with_board_mut`].

use std::sync::{Arc, Mutex};

use frontdesk_core::maintenance::{MaintenanceTask, TaskBoard};

/// Shared maintenance board.
#[derive(Debug, Clone, Default)]
pub struct MaintenanceState {
    board: Arc<Mutex<TaskBoard>>,
}

impl MaintenanceState {
    pub fn new(tasks: Vec<MaintenanceTask>) -> Self {
        MaintenanceState {
            board: Arc::new(Mutex::new(TaskBoard::new(tasks))),
        }
    }

    pub fn with_board<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&TaskBoard) -> R,
    {
        let board = self.board.lock().expect("Maintenance mutex poisoned");
        f(&board)
    }

    pub fn with_board_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut TaskBoard) -> R,
    {
        let mut board = self.board.lock().expect("Maintenance mutex poisoned");
        f(&mut board)
    }
}

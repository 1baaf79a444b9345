//! # Maintenance Commands
//!
//! The maintenance manager's board: filter, columns, stats, and the task
//! form and card moves. Timestamps come from the [`Clock`] port.

use tracing::{debug, info};

use frontdesk_core::maintenance::{
    MaintenanceStats, MaintenanceTask, TaskColumn, TaskDraft, TaskFilter, TaskStatus,
};

use crate::error::ApiError;
use crate::ports::Clock;
use crate::state::MaintenanceState;

/// Tasks matching the sidebar filters, in creation order.
pub fn list_tasks(maintenance: &MaintenanceState, filter: TaskFilter) -> Vec<MaintenanceTask> {
    debug!(filter = ?filter, "list_tasks command");
    maintenance.with_board(|b| b.filter(&filter).into_iter().cloned().collect())
}

/// The four board columns with the filtered tasks in each.
pub fn task_columns(maintenance: &MaintenanceState, filter: TaskFilter) -> Vec<TaskColumn> {
    debug!(filter = ?filter, "task_columns command");
    maintenance.with_board(|b| b.columns(&filter))
}

/// Header counts over the whole board, ignoring filters.
pub fn maintenance_stats(maintenance: &MaintenanceState) -> MaintenanceStats {
    debug!("maintenance_stats command");
    maintenance.with_board(|b| MaintenanceStats::tally(b.tasks()))
}

/// Adds a pending task from the task form.
///
/// ## Errors
/// - `VALIDATION_ERROR` with `fieldErrors` when the form is incomplete
pub fn create_task(
    maintenance: &MaintenanceState,
    clock: &dyn Clock,
    draft: TaskDraft,
) -> Result<MaintenanceTask, ApiError> {
    debug!(title = %draft.title, room = %draft.room_number, "create_task command");

    let task = maintenance.with_board_mut(|b| b.create(draft, clock.now()).cloned())?;
    info!(task_id = %task.id, priority = %task.priority, "Maintenance task created");
    Ok(task)
}

/// Saves the task form over an existing task.
///
/// ## Errors
/// - `VALIDATION_ERROR` with `fieldErrors` when the form is incomplete
/// - `NOT_FOUND` for an unknown task id
pub fn edit_task(
    maintenance: &MaintenanceState,
    clock: &dyn Clock,
    task_id: &str,
    draft: TaskDraft,
) -> Result<MaintenanceTask, ApiError> {
    debug!(task_id = %task_id, "edit_task command");

    let task = maintenance.with_board_mut(|b| b.edit(task_id, draft, clock.now()).cloned())?;
    info!(task_id = %task.id, "Maintenance task updated");
    Ok(task)
}

/// Drops a card into another column.
pub fn move_task(
    maintenance: &MaintenanceState,
    clock: &dyn Clock,
    task_id: &str,
    status: TaskStatus,
) -> Result<MaintenanceTask, ApiError> {
    debug!(task_id = %task_id, status = %status, "move_task command");

    let task = maintenance.with_board_mut(|b| b.move_task(task_id, status, clock.now()).cloned())?;
    info!(task_id = %task.id, status = %task.status, "Maintenance task moved");
    Ok(task)
}

/// Assigns a technician, or clears the assignment with `None`.
pub fn assign_task(
    maintenance: &MaintenanceState,
    clock: &dyn Clock,
    task_id: &str,
    technician: Option<String>,
) -> Result<MaintenanceTask, ApiError> {
    debug!(task_id = %task_id, technician = ?technician, "assign_task command");

    let task = maintenance.with_board_mut(|b| b.assign(task_id, technician, clock.now()).cloned())?;
    info!(task_id = %task.id, technician = ?task.assigned_to, "Maintenance task assigned");
    Ok(task)
}

//! # Maintenance Tasks
//!
//! The maintenance manager's kanban board: filtering, the four status
//! columns, task creation and edits, and the header statistics.
//!
//! ## Board
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pending Requests │ Assigned Tasks │ In Progress │ Completed            │
//! │  ───────────────  │ ────────────── │ ─────────── │ ─────────            │
//! │  MT001 urgent     │ MT002          │ MT003       │ MT004                │
//! │  MT007 urgent     │ MT005          │ MT006       │ MT008                │
//! │                                                                         │
//! │  Cards move freely between columns. Every move stamps `updated_at`,     │
//! │  a move into Completed also stamps `completed_at`.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Time is passed in; nothing here reads a clock.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, FormErrors, ValidationError};
use crate::types::RoomType;

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Urgent,
        TaskPriority::High,
        TaskPriority::Medium,
        TaskPriority::Low,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Urgent => "urgent",
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Plumbing,
    Hvac,
    Electrical,
    Cleaning,
    Furniture,
    Other,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 6] = [
        TaskCategory::Plumbing,
        TaskCategory::Hvac,
        TaskCategory::Electrical,
        TaskCategory::Cleaning,
        TaskCategory::Furniture,
        TaskCategory::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Plumbing => "plumbing",
            TaskCategory::Hvac => "hvac",
            TaskCategory::Electrical => "electrical",
            TaskCategory::Cleaning => "cleaning",
            TaskCategory::Furniture => "furniture",
            TaskCategory::Other => "other",
        }
    }
}

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Column order on the board.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::Assigned,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Column heading.
    pub const fn title(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending Requests",
            TaskStatus::Assigned => "Assigned Tasks",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

macro_rules! form_value {
    ($ty:ident, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().to_lowercase();
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str() == value)
                    .ok_or_else(|| ValidationError::NotAllowed {
                        field: $field.to_string(),
                        allowed: $ty::ALL.iter().map(|v| v.as_str().to_string()).collect(),
                    })
            }
        }
    };
}

form_value!(TaskPriority, "priority");
form_value!(TaskCategory, "category");
form_value!(TaskStatus, "status");

// =============================================================================
// Task
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTask {
    /// "MT001", "MT002", ...
    pub id: String,
    pub title: String,
    pub description: String,
    pub room_number: String,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub room_type: RoomType,
    pub status: TaskStatus,
    /// Technician id ("john-doe"); `None` while unassigned.
    pub assigned_to: Option<String>,
    #[ts(as = "String")]
    pub estimated_hours: Decimal,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub due_date: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub photos: Vec<String>,
}

impl MaintenanceTask {
    /// Moves the card to another column.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
        if status == TaskStatus::Completed {
            self.completed_at = Some(now);
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.as_deref().map_or(true, str::is_empty)
    }
}

// =============================================================================
// Task Form
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum TaskField {
    Title,
    RoomNumber,
    EstimatedHours,
}

/// The create / edit task form. Status and timestamps are not editable
/// here; they move with the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub room_number: String,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub room_type: RoomType,
    pub assigned_to: Option<String>,
    #[ts(as = "Option<String>")]
    pub estimated_hours: Option<Decimal>,
    #[ts(as = "Option<String>")]
    pub due_date: Option<DateTime<Utc>>,
    pub notes: String,
    pub photos: Vec<String>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        TaskDraft {
            title: String::new(),
            description: String::new(),
            room_number: String::new(),
            priority: TaskPriority::Medium,
            category: TaskCategory::Other,
            room_type: RoomType::Standard,
            assigned_to: None,
            estimated_hours: None,
            due_date: None,
            notes: String::new(),
            photos: Vec::new(),
        }
    }
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), FormErrors<TaskField>> {
        let mut errors = FormErrors::new();
        if self.title.trim().is_empty() {
            errors.insert(TaskField::Title, "Task title is required");
        }
        if self.room_number.trim().is_empty() {
            errors.insert(TaskField::RoomNumber, "Room number is required");
        }
        if self.estimated_hours.is_some_and(|h| h < Decimal::ZERO) {
            errors.insert(TaskField::EstimatedHours, "Estimated time cannot be negative");
        }
        errors.into_result(())
    }

    fn technician(&self) -> Option<String> {
        self.assigned_to
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}

// =============================================================================
// Filters
// =============================================================================

/// Technician dropdown: everyone, nobody, or one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum TechnicianFilter {
    #[default]
    All,
    Unassigned,
    Staff(String),
}

impl FromStr for TechnicianFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | "all" => TechnicianFilter::All,
            "unassigned" => TechnicianFilter::Unassigned,
            id => TechnicianFilter::Staff(id.to_string()),
        })
    }
}

/// Sidebar filters. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFilter {
    /// Case-insensitive on title and description, plain substring on the
    /// room number.
    pub search: String,
    pub priority: Option<TaskPriority>,
    pub category: Option<TaskCategory>,
    pub room_type: Option<RoomType>,
    pub technician: TechnicianFilter,
}

impl TaskFilter {
    pub fn matches(&self, task: &MaintenanceTask) -> bool {
        let search = self.search.trim();
        let needle = search.to_lowercase();
        let by_search = search.is_empty()
            || task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
            || task.room_number.contains(search);

        let by_technician = match &self.technician {
            TechnicianFilter::All => true,
            TechnicianFilter::Unassigned => task.is_unassigned(),
            TechnicianFilter::Staff(id) => task.assigned_to.as_deref() == Some(id.as_str()),
        };

        by_search
            && self.priority.map_or(true, |p| task.priority == p)
            && self.category.map_or(true, |c| task.category == c)
            && self.room_type.map_or(true, |t| task.room_type == t)
            && by_technician
    }
}

// =============================================================================
// Board
// =============================================================================

/// One column of the board.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaskColumn {
    pub status: TaskStatus,
    pub title: String,
    pub tasks: Vec<MaintenanceTask>,
}

/// All maintenance tasks, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBoard {
    tasks: Vec<MaintenanceTask>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<MaintenanceTask>) -> Self {
        TaskBoard { tasks }
    }

    pub fn tasks(&self) -> &[MaintenanceTask] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&MaintenanceTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn task_mut(&mut self, id: &str) -> CoreResult<&mut MaintenanceTask> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound {
                kind: "Task",
                id: id.to_string(),
            })
    }

    pub fn filter(&self, filter: &TaskFilter) -> Vec<&MaintenanceTask> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// The four columns, each holding the filtered tasks in that status.
    pub fn columns(&self, filter: &TaskFilter) -> Vec<TaskColumn> {
        let visible = self.filter(filter);
        TaskStatus::ALL
            .into_iter()
            .map(|status| TaskColumn {
                status,
                title: status.title().to_string(),
                tasks: visible
                    .iter()
                    .filter(|t| t.status == status)
                    .map(|t| (*t).clone())
                    .collect(),
            })
            .collect()
    }

    /// Adds a pending task. Ids continue from the board size ("MT009").
    pub fn create(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> CoreResult<&MaintenanceTask> {
        draft.validate()?;

        let assigned_to = draft.technician();
        self.tasks.push(MaintenanceTask {
            id: format!("MT{:03}", self.tasks.len() + 1),
            title: draft.title.trim().to_string(),
            description: draft.description,
            room_number: draft.room_number.trim().to_string(),
            priority: draft.priority,
            category: draft.category,
            room_type: draft.room_type,
            status: TaskStatus::Pending,
            assigned_to,
            estimated_hours: draft.estimated_hours.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            due_date: draft.due_date,
            completed_at: None,
            notes: draft.notes,
            photos: draft.photos,
        });

        let created = self.tasks.len() - 1;
        Ok(&self.tasks[created])
    }

    /// Replaces the editable fields of an existing task.
    pub fn edit(
        &mut self,
        id: &str,
        draft: TaskDraft,
        now: DateTime<Utc>,
    ) -> CoreResult<&MaintenanceTask> {
        draft.validate()?;
        let task = self.task_mut(id)?;

        task.assigned_to = draft.technician();
        task.title = draft.title.trim().to_string();
        task.description = draft.description;
        task.room_number = draft.room_number.trim().to_string();
        task.priority = draft.priority;
        task.category = draft.category;
        task.room_type = draft.room_type;
        task.estimated_hours = draft.estimated_hours.unwrap_or_default();
        task.due_date = draft.due_date;
        task.notes = draft.notes;
        task.photos = draft.photos;
        task.updated_at = now;
        Ok(task)
    }

    /// Moves a card to another column.
    pub fn move_task(
        &mut self,
        id: &str,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> CoreResult<&MaintenanceTask> {
        let task = self.task_mut(id)?;
        task.set_status(status, now);
        Ok(task)
    }

    /// Assigns (or with `None`, unassigns) a technician.
    pub fn assign(
        &mut self,
        id: &str,
        technician: Option<String>,
        now: DateTime<Utc>,
    ) -> CoreResult<&MaintenanceTask> {
        let task = self.task_mut(id)?;
        task.assigned_to = technician.filter(|t| !t.trim().is_empty());
        task.updated_at = now;
        Ok(task)
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Header cards above the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStats {
    pub total_tasks: u32,
    pub pending: u32,
    pub assigned: u32,
    pub in_progress: u32,
    pub completed: u32,
    pub urgent_tasks: u32,
    /// Whole percent completed, rounded half up. 0 for an empty board.
    pub completion_rate: u32,
    /// Mean hours from creation to completion, one decimal. `None` until
    /// something has been completed.
    #[ts(as = "Option<String>")]
    pub avg_resolution_hours: Option<Decimal>,
}

impl MaintenanceStats {
    pub fn tally(tasks: &[MaintenanceTask]) -> Self {
        let mut stats = MaintenanceStats::default();
        let mut resolved_minutes = 0_i64;
        let mut resolved = 0_i64;

        for task in tasks {
            stats.total_tasks += 1;
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::Assigned => stats.assigned += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            if task.priority == TaskPriority::Urgent {
                stats.urgent_tasks += 1;
            }
            if let (TaskStatus::Completed, Some(done)) = (task.status, task.completed_at) {
                resolved_minutes += (done - task.created_at).num_minutes().max(0);
                resolved += 1;
            }
        }

        if stats.total_tasks > 0 {
            stats.completion_rate =
                (stats.completed * 200 + stats.total_tasks) / (stats.total_tasks * 2);
        }
        if resolved > 0 {
            let hours = Decimal::from(resolved_minutes) / Decimal::from(resolved * 60);
            stats.avg_resolution_hours =
                Some(hours.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero));
        }
        stats
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

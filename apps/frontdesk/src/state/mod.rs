//! # State Module
//!
//! Application state for the front desk, split into focused types so each
//! command declares exactly what it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │  DeskState   │  │  AuthState   │  │ CatalogState │  │ConfigState │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │ property   │  │
//! │  │  DeskSession │  │  AuthSession │  │  Vec<Room>>> │  │ currency   │  │
//! │  │  >>          │  │  >>          │  │  + history   │  │ delays     │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │  ┌──────────────────┐  ┌──────────────────┐                            │
//! │  │ MaintenanceState │  │ RoomServiceState │                            │
//! │  │ Arc<Mutex<       │  │ Arc<Mutex<       │                            │
//! │  │   TaskBoard>>    │  │   OrderQueue>>   │                            │
//! │  └──────────────────┘  └──────────────────┘                            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Desk, Auth, Maintenance, RoomService: Arc<Mutex<T>>                 │
//! │  • CatalogState: rooms behind a Mutex, guest history read-only         │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod catalog;
mod config;
mod maintenance;
mod room_service;
mod session;

pub use auth::{AuthSession, AuthState};
pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigResult, ConfigState};
pub use maintenance::MaintenanceState;
pub use room_service::RoomServiceState;
pub use session::{DeskSession, DeskState, DeskView};

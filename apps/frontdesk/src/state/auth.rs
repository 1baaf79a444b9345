//! # Auth State
//!
//! What the desk knows about the signed-in staff member.
//!
//! ```text
//!  signed out ──sign_in──► loading ──ok──► signed in ──select_role──► routed
//!      ▲                      │                │
//!      │                    error              │
//!      └──────────────────────┴────sign_out────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use frontdesk_core::{Role, UserProfile};

/// Snapshot of the auth session, as shown to the front-end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Email the session was opened with
    pub user: Option<String>,
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
    /// Role chosen on the role selection screen
    pub role: Option<Role>,
}

impl AuthSession {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Shared auth session.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    session: Arc<Mutex<AuthSession>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> AuthSession {
        self.with_session(Clone::clone)
    }

    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AuthSession) -> R,
    {
        let session = self.session.lock().expect("Auth mutex poisoned");
        f(&session)
    }

    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AuthSession) -> R,
    {
        let mut session = self.session.lock().expect("Auth mutex poisoned");
        f(&mut session)
    }
}

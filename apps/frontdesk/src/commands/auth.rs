//! # Auth Commands
//!
//! Sign-in, sign-out and role selection.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sign_in(email, password)                                               │
//! │     │  loading = true                                                   │
//! │     ▼                                                                   │
//! │  AuthProvider::sign_in ──fail──► error = message, Err(AUTH_ERROR)      │
//! │     │ ok                                                                │
//! │     ▼                                                                   │
//! │  profile = AuthProvider::current_profile()                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  select_role(role) ── role setup delay ──► home route                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use frontdesk_core::Role;

use crate::error::ApiError;
use crate::ports::{AuthProvider, Delay};
use crate::state::{AuthSession, AuthState, ConfigState};

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Where the front-end should go after a role is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSelection {
    pub role: Role,
    pub route: String,
}

/// Signs a staff member in.
///
/// ## Returns
/// The new auth session, or `AUTH_ERROR` with the provider's message
pub async fn sign_in(
    auth: &AuthState,
    provider: &dyn AuthProvider,
    email: &str,
    password: &str,
) -> Result<AuthSession, ApiError> {
    debug!(email = %email, "sign_in command");

    auth.with_session_mut(|s| {
        s.loading = true;
        s.error = None;
    });

    let outcome = provider.sign_in(email, password).await;

    if !outcome.success {
        let message = outcome.error.unwrap_or_else(|| LOGIN_FAILED.to_string());
        warn!(email = %email, error = %message, "Sign-in failed");
        auth.with_session_mut(|s| {
            s.loading = false;
            s.error = Some(message.clone());
        });
        return Err(ApiError::auth(message));
    }

    let profile = provider.current_profile();
    info!(email = %email, role = ?profile.as_ref().map(|p| p.role), "Signed in");

    Ok(auth.with_session_mut(|s| {
        *s = AuthSession {
            user: Some(email.trim().to_string()),
            profile,
            ..AuthSession::default()
        };
        s.clone()
    }))
}

/// Signs the current staff member out and clears the auth session.
pub async fn sign_out(auth: &AuthState, provider: &dyn AuthProvider) -> Result<(), ApiError> {
    debug!("sign_out command");

    let outcome = provider.sign_out().await;
    if !outcome.success {
        let message = outcome.error.unwrap_or_else(|| "Sign-out failed".to_string());
        auth.with_session_mut(|s| s.error = Some(message.clone()));
        return Err(ApiError::auth(message));
    }

    auth.with_session_mut(|s| *s = AuthSession::default());
    info!("Signed out");
    Ok(())
}

/// Chooses the role to work as and returns its home route.
///
/// Waits the configured role setup delay before routing.
pub async fn select_role(
    auth: &AuthState,
    delay: &dyn Delay,
    config: &ConfigState,
    role: Role,
) -> Result<RoleSelection, ApiError> {
    debug!(role = %role.as_str(), "select_role command");

    if !auth.with_session(AuthSession::is_signed_in) {
        return Err(ApiError::auth("Please sign in first"));
    }

    delay.wait(config.role_delay()).await;

    auth.with_session_mut(|s| s.role = Some(role));
    let route = role.home_route().to_string();
    info!(role = %role.as_str(), route = %route, "Role selected");

    Ok(RoleSelection { role, route })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::mock::MockAuthProvider;
    use crate::ports::NoDelay;

    #[tokio::test]
    async fn test_sign_in_success() {
        let auth = AuthState::new();
        let provider = MockAuthProvider::demo();

        let session = sign_in(&auth, &provider, "reception@grandhotel.com", "desk123")
            .await
            .unwrap();
        assert!(session.is_signed_in());
        assert!(!session.loading);
        assert_eq!(session.profile.unwrap().full_name, "Riley Chen");
    }

    #[tokio::test]
    async fn test_sign_in_failure_records_error() {
        let auth = AuthState::new();
        let provider = MockAuthProvider::demo();

        let err = sign_in(&auth, &provider, "reception@grandhotel.com", "nope")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthError);

        let session = auth.snapshot();
        assert!(!session.is_signed_in());
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some("Invalid email or password"));
    }

    #[tokio::test]
    async fn test_select_role_routes_and_requires_sign_in() {
        let auth = AuthState::new();
        let provider = MockAuthProvider::demo();
        let config = ConfigState::default();

        assert!(select_role(&auth, &NoDelay, &config, Role::Receptionist).await.is_err());

        sign_in(&auth, &provider, "admin@grandhotel.com", "admin123").await.unwrap();
        let selection = select_role(&auth, &NoDelay, &config, Role::MaintenanceManager)
            .await
            .unwrap();
        assert_eq!(selection.route, "/maintenance-task-management");
        assert_eq!(auth.snapshot().role, Some(Role::MaintenanceManager));
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let auth = AuthState::new();
        let provider = MockAuthProvider::demo();
        sign_in(&auth, &provider, "admin@grandhotel.com", "admin123").await.unwrap();

        sign_out(&auth, &provider).await.unwrap();
        assert_eq!(auth.snapshot(), AuthSession::default());
    }
}

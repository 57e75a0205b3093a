//! Mock authentication: session persistence, credential checks, and the
//! per-request auth context.
//!
//! ARCHITECTURE
//! ============
//! `session` owns the two persisted halves of a session (the profile record
//! and the marker cookie), `verifier` is the identity-provider seam, `context`
//! is the state machine pages talk to, and `provider` mounts a context for
//! every page request. The routing gate in `crate::gate` only ever sees the
//! cookie half.

pub mod context;
pub mod provider;
pub mod session;
pub mod verifier;

use serde::{Deserialize, Serialize};

pub use context::{AuthContext, AuthError, AuthState};
pub use provider::{Auth, provide_auth, use_auth};
pub use session::{SessionCookiePolicy, SessionStore};
pub use verifier::{CredentialVerifier, MockCredentials};

/// Storage key holding the serialized signed-in [`User`].
pub const USER_STORAGE_KEY: &str = "grc_auth_user";
/// Cookie consulted by the routing gate.
pub const SESSION_COOKIE_NAME: &str = "grc_auth_token";
/// Fixed marker value written into the session cookie.
pub const SESSION_COOKIE_VALUE: &str = "authenticated";

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

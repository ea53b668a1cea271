//! Authentication provider seam.
//!
//! Identity verification and session lifecycle live outside this crate; the
//! engine only needs the acting principal and a bearer credential for
//! outbound calls, injected at construction rather than read from ambient
//! global state.

use serde::{Deserialize, Serialize};

/// The authenticated acting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub email: String,
}

pub trait AuthProvider: Send + Sync {
    fn principal(&self) -> Principal;

    /// Bearer credential attached to notification-service calls.
    fn token(&self) -> String;
}

/// Fixed-credential provider for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticAuth {
    principal: Principal,
    token: String,
}

impl StaticAuth {
    pub fn new(principal: Principal, token: impl Into<String>) -> Self {
        Self {
            principal,
            token: token.into(),
        }
    }
}

impl AuthProvider for StaticAuth {
    fn principal(&self) -> Principal {
        self.principal.clone()
    }

    fn token(&self) -> String {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_auth_returns_fixed_identity() {
        let auth = StaticAuth::new(
            Principal {
                id: "uid-1".to_string(),
                email: "ana@example.com".to_string(),
            },
            "token-abc",
        );
        assert_eq!(auth.principal().id, "uid-1");
        assert_eq!(auth.token(), "token-abc");
    }
}

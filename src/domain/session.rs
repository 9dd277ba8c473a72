//! Session domain types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Credential;

/// User identity bound to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub username: String,
}

impl From<&Credential> for SessionIdentity {
    fn from(credential: &Credential) -> Self {
        Self {
            user_id: credential.id,
            username: credential.username.clone(),
        }
    }
}

/// An authenticated browser session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque token carried in the session cookie
    pub token: String,
    pub identity: SessionIdentity,
}

impl Session {
    /// Start a session for `identity` under a fresh random token.
    pub fn issue(identity: SessionIdentity) -> Self {
        Self {
            token: Uuid::new_v4().simple().to_string(),
            identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_generates_distinct_tokens() {
        let identity = SessionIdentity {
            user_id: Uuid::new_v4(),
            username: "ann".to_string(),
        };

        let first = Session::issue(identity.clone());
        let second = Session::issue(identity);

        assert_ne!(first.token, second.token);
        assert_eq!(first.token.len(), 32);
    }
}

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identity payload embedded in the session token. Deliberately role-free:
/// the role is resolved from the user store on every authorization check, so
/// a role change never requires re-issuing the token.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Claims {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: usize, // expiration (as UNIX timestamp)
}

impl Claims {
    pub fn new(email: String, name: Option<String>, ttl: Duration) -> Self {
        Claims {
            email,
            name,
            exp: (Utc::now() + ttl).timestamp() as usize,
        }
    }
}

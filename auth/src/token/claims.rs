use std::collections::BTreeSet;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by a signed access token.
///
/// The scope set is computed from the subject's roles at issuance time and
/// embedded in the token, so authorization decisions need no server-side
/// lookup. Role and scope names are kept as ordered sets: serialization is
/// deterministic and the union of several roles' scopes deduplicates
/// naturally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Subject (username)
    pub sub: String,

    /// Role names granted to the subject
    pub roles: BTreeSet<String>,

    /// Permission scopes, the union over the subject's roles
    pub scopes: BTreeSet<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,
}

impl AccessClaims {
    /// Build claims for a subject, stamping `iat` with the current time and
    /// `exp` with `iat + ttl`.
    pub fn new(
        subject: impl Into<String>,
        roles: impl IntoIterator<Item = String>,
        scopes: impl IntoIterator<Item = String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: subject.into(),
            roles: roles.into_iter().collect(),
            scopes: scopes.into_iter().collect(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check whether the token has expired at the given Unix timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

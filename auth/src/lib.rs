//! Authentication infrastructure library
//!
//! Provides the reusable building blocks for the simulator's authentication
//! subsystem:
//! - Password hashing (Argon2id)
//! - Signed access-token issuance and verification
//!
//! Services define their own credential and role semantics and compose these
//! implementations. The signing key and token lifetime are fixed at
//! construction and immutable for the lifetime of the issuer.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = issuer
//!     .issue("alice", ["USER".to_string()], ["read:simulations".to_string()])
//!     .unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenIssuer;

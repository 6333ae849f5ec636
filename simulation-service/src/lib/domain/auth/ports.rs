use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::CredentialStoreError;
use crate::domain::auth::models::AuthResponse;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::TokenIdentity;
use crate::domain::auth::models::Username;

/// Port for authentication service operations.
///
/// The surface the (out-of-scope) transport layer consumes.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and return a first access token.
    ///
    /// # Errors
    /// * `InvalidUsername` - Username fails validation
    /// * `UsernameAlreadyExists` - Username is already taken, including when a
    ///   concurrent registration wins the race at the store
    /// * `Store` - Credential store operation failed
    async fn register(&self, username: &str, password: &str) -> Result<AuthResponse, AuthError>;

    /// Verify credentials and return an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password; one
    ///   identical error for both
    /// * `Store` - Credential store operation failed
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;

    /// Verify a token and return the identity it carries.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, elapsed expiry, or a structurally
    ///   unsound token
    fn verify_token(&self, token: &str) -> Result<TokenIdentity, AuthError>;

    /// Replace the stored password hash after verifying the current password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong current password
    /// * `Store` - Credential store operation failed
    async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError>;
}

/// Persistence operations for the credential aggregate.
///
/// The store owns the uniqueness constraint: a race between two concurrent
/// registrations of one username must be resolved here, not by the service.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a credential by username.
    ///
    /// # Errors
    /// * `StorageFailure` - Store operation failed
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, CredentialStoreError>;

    /// Persist a new credential.
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `StorageFailure` - Store operation failed
    async fn save(&self, credential: Credential) -> Result<Credential, CredentialStoreError>;

    /// Replace an existing credential.
    ///
    /// # Errors
    /// * `NotFound` - No credential with this username
    /// * `StorageFailure` - Store operation failed
    async fn update(&self, credential: Credential) -> Result<Credential, CredentialStoreError>;
}

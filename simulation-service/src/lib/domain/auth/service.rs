use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::CredentialStoreError;
use crate::domain::auth::models::AuthResponse;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::Role;
use crate::domain::auth::models::TokenIdentity;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::scopes::scope_union;
use crate::domain::auth::scopes::Scope;

/// Domain service for registration, login, and token verification.
///
/// Orchestrates the credential store, password hasher, and token issuer. The
/// issuer is shared process-wide; the service itself holds no mutable state
/// and is safe to call concurrently.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(store: Arc<CS>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    /// Issue a token for a credential: role names plus the scope union across
    /// the credential's roles.
    fn issue_for(&self, credential: &Credential) -> Result<(String, BTreeSet<String>), AuthError> {
        let role_names = credential.role_names();
        let scope_names: BTreeSet<String> = scope_union(&credential.roles)
            .into_iter()
            .map(|scope| scope.as_str().to_string())
            .collect();

        let token = self
            .token_issuer
            .issue(credential.username.as_str(), role_names.clone(), scope_names)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        Ok((token, role_names))
    }

    /// Constant-shape login rejection. Burns one hashing round when no stored
    /// hash was checked, so the unknown-username path does the same work as a
    /// failed verification.
    fn reject_login(&self, password: &str, hashed_already: bool) -> AuthError {
        if !hashed_already {
            self.password_hasher.expend_hash_effort(password);
        }
        tracing::debug!("authentication rejected");
        AuthError::InvalidCredentials
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn register(&self, username: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let username = Username::new(username.to_string())?;

        if self
            .store
            .find_by_username(&username)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?
            .is_some()
        {
            return Err(AuthError::UsernameAlreadyExists(username.to_string()));
        }

        let password_hash = self.password_hasher.hash(password)?;
        let credential = Credential::new(username, password_hash, BTreeSet::from([Role::User]));

        // The store owns the uniqueness constraint; a concurrent registration
        // that wins the race surfaces here as a duplicate.
        let credential = self.store.save(credential).await.map_err(|e| match e {
            CredentialStoreError::DuplicateUsername(name) => {
                AuthError::UsernameAlreadyExists(name)
            }
            other => AuthError::Store(other.to_string()),
        })?;

        let (token, roles) = self.issue_for(&credential)?;

        tracing::info!(username = %credential.username, "credential registered");

        Ok(AuthResponse {
            token,
            username: credential.username.to_string(),
            roles,
        })
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let username = match Username::new(username.to_string()) {
            Ok(username) => username,
            Err(_) => return Err(self.reject_login(password, false)),
        };

        let credential = match self
            .store
            .find_by_username(&username)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?
        {
            Some(credential) => credential,
            None => return Err(self.reject_login(password, false)),
        };

        if !self
            .password_hasher
            .verify(password, &credential.password_hash)?
        {
            return Err(self.reject_login(password, true));
        }

        let (token, _) = self.issue_for(&credential)?;

        tracing::debug!(username = %credential.username, "authentication succeeded");

        Ok(token)
    }

    fn verify_token(&self, token: &str) -> Result<TokenIdentity, AuthError> {
        let claims = self
            .token_issuer
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        // This process only mints tokens with known role and scope names, so
        // an unparseable name means the token was not minted here.
        let roles = claims
            .roles
            .iter()
            .map(|name| Role::from_str(name))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(|_| AuthError::InvalidToken)?;

        let scopes = claims
            .scopes
            .iter()
            .map(|name| Scope::from_str(name))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(TokenIdentity {
            subject: claims.sub,
            roles,
            scopes,
        })
    }

    async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let username = match Username::new(username.to_string()) {
            Ok(username) => username,
            Err(_) => return Err(self.reject_login(current_password, false)),
        };

        let mut credential = match self
            .store
            .find_by_username(&username)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?
        {
            Some(credential) => credential,
            None => return Err(self.reject_login(current_password, false)),
        };

        if !self
            .password_hasher
            .verify(current_password, &credential.password_hash)?
        {
            return Err(self.reject_login(current_password, true));
        }

        credential.password_hash = self.password_hasher.hash(new_password)?;

        self.store
            .update(credential)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?;

        tracing::info!(username = %username, "password changed");

        Ok(())
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::CredentialStoreError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::CredentialStore;

/// In-memory credential store.
///
/// Stands in for the external persistence collaborator in tests and local
/// runs. The write lock spans the lookup-and-insert in `save`, which is what
/// enforces the uniqueness constraint under concurrent registrations.
pub struct InMemoryCredentialStore {
    credentials: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            credentials: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, CredentialStoreError> {
        let credentials = self.credentials.read().await;
        Ok(credentials.get(username.as_str()).cloned())
    }

    async fn save(&self, credential: Credential) -> Result<Credential, CredentialStoreError> {
        let mut credentials = self.credentials.write().await;

        let key = credential.username.as_str().to_string();
        if credentials.contains_key(&key) {
            return Err(CredentialStoreError::DuplicateUsername(key));
        }

        credentials.insert(key, credential.clone());
        Ok(credential)
    }

    async fn update(&self, credential: Credential) -> Result<Credential, CredentialStoreError> {
        let mut credentials = self.credentials.write().await;

        let key = credential.username.as_str().to_string();
        if !credentials.contains_key(&key) {
            return Err(CredentialStoreError::NotFound(key));
        }

        credentials.insert(key, credential.clone());
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn credential(username: &str) -> Credential {
        Credential::new(
            Username::new(username.to_string()).unwrap(),
            "$argon2id$hash".to_string(),
            BTreeSet::new(),
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = InMemoryCredentialStore::new();
        let username = Username::new("alice".to_string()).unwrap();

        assert!(store.find_by_username(&username).await.unwrap().is_none());

        store.save(credential("alice")).await.unwrap();

        let found = store.find_by_username(&username).await.unwrap().unwrap();
        assert_eq!(found.username, username);
    }

    #[tokio::test]
    async fn test_save_enforces_uniqueness() {
        let store = InMemoryCredentialStore::new();

        store.save(credential("alice")).await.unwrap();

        let result = store.save(credential("alice")).await;
        assert!(matches!(
            result,
            Err(CredentialStoreError::DuplicateUsername(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_credential() {
        let store = InMemoryCredentialStore::new();

        let result = store.update(credential("ghost")).await;
        assert!(matches!(result, Err(CredentialStoreError::NotFound(_))));
    }
}

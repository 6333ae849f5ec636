use std::sync::Arc;

use auth::TokenIssuer;
use chrono::Duration;
use simulation_service::domain::auth::service::AuthService;
use simulation_service::domain::technology::service::TechnologyService;
use simulation_service::outbound::repositories::InMemoryCredentialStore;
use simulation_service::outbound::repositories::InMemoryTechnologyCatalog;

#[allow(dead_code)]
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Initialize tracing once per test binary; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simulation_service=debug".into()),
        )
        .try_init();
}

/// Auth service over a fresh in-memory credential store.
#[allow(dead_code)]
pub fn auth_service() -> AuthService<InMemoryCredentialStore> {
    auth_service_with_store().0
}

/// Auth service plus a handle to its store, for tests that seed credentials.
#[allow(dead_code)]
pub fn auth_service_with_store() -> (AuthService<InMemoryCredentialStore>, Arc<InMemoryCredentialStore>) {
    init_tracing();

    let store = Arc::new(InMemoryCredentialStore::new());
    let issuer = Arc::new(TokenIssuer::new(TEST_JWT_SECRET, Duration::hours(24)));

    (AuthService::new(Arc::clone(&store), issuer), store)
}

/// Technology service over the seeded reference catalog.
#[allow(dead_code)]
pub fn technology_service() -> TechnologyService<InMemoryTechnologyCatalog> {
    init_tracing();

    TechnologyService::new(Arc::new(InMemoryTechnologyCatalog::with_reference_catalog()))
}

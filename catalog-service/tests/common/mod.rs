use async_trait::async_trait;
use catalog_service::authz::{Action, GrantSet, Resource};
use catalog_service::config::{CatalogConfig, StoreBackend, StoreConfig};
use catalog_service::services::{GrantStore, MemoryStore};
use catalog_service::startup::Application;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;

pub const TEST_USER_ID: &str = "test_user_123";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub store: Arc<MemoryStore>,
}

fn test_config() -> CatalogConfig {
    CatalogConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "info".to_string(),
            otlp_endpoint: None,
        },
        store: StoreConfig {
            backend: StoreBackend::Memory,
            database: None,
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(MemoryStore::new());

        let app = Application::with_stores(test_config(), store.clone(), store.clone())
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            client: reqwest::Client::new(),
            store,
        }
    }

    /// Spawn with a grant store that always fails, for fail-closed tests.
    pub async fn spawn_with_failing_grants() -> Self {
        let store = Arc::new(MemoryStore::new());

        let app = Application::with_stores(
            test_config(),
            store.clone(),
            Arc::new(FailingGrantStore),
        )
        .await
        .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            client: reqwest::Client::new(),
            store,
        }
    }

    pub async fn grant(&self, user_id: &str, resource: Resource, action: Action) {
        self.store.add_grant(user_id, resource, action).await;
    }

    /// Grant every action on every resource to `user_id`.
    pub async fn grant_all(&self, user_id: &str) {
        for resource in [
            Resource::Actor,
            Resource::Movie,
            Resource::Genre,
            Resource::Review,
        ] {
            for action in [Action::Create, Action::Read, Action::Update, Action::Delete] {
                self.store.add_grant(user_id, resource, action).await;
            }
        }
    }

    pub async fn get(&self, path: &str, user_id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .header("X-User-ID", user_id)
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn post(
        &self,
        path: &str,
        user_id: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .header("X-User-ID", user_id)
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn put(
        &self,
        path: &str,
        user_id: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .header("X-User-ID", user_id)
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn delete(&self, path: &str, user_id: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.address, path))
            .header("X-User-ID", user_id)
            .send()
            .await
            .expect("Request failed")
    }

    /// Request without the X-User-ID header, i.e. anonymous.
    pub async fn get_anonymous(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Request failed")
    }
}

/// Grant store standing in for an unavailable authorization database.
struct FailingGrantStore;

#[async_trait]
impl GrantStore for FailingGrantStore {
    async fn grants_for(&self, _user_id: &str) -> Result<GrantSet, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "grant store unavailable"
        )))
    }
}

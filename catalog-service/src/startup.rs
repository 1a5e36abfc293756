use crate::authz::Resource;
use crate::config::{CatalogConfig, StoreBackend};
use crate::handlers;
use crate::middleware::{http_metrics_middleware, principal_middleware, require_permission};
use crate::services::{CatalogStore, Database, GrantStore, MemoryStore, PgStore};
use axum::{
    extract::{Request, State},
    middleware::{from_fn, from_fn_with_state, Next},
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::security_headers::security_headers_middleware;
use service_core::middleware::tracing::request_id_middleware;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: CatalogConfig,
    pub store: Arc<dyn CatalogStore>,
    pub grants: Arc<dyn GrantStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the backend named in configuration.
    pub async fn build(config: CatalogConfig) -> Result<Self, AppError> {
        match config.store.backend {
            StoreBackend::Postgres => {
                let db_config = config.store.database.clone().ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "Postgres backend selected but no database configuration present"
                    ))
                })?;
                let db = Database::new(
                    &db_config.url,
                    db_config.max_connections,
                    db_config.min_connections,
                )
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to PostgreSQL: {}", e);
                    e
                })?;
                db.run_migrations().await?;

                let store = Arc::new(PgStore::new(db));
                Self::with_stores(config, store.clone(), store).await
            }
            StoreBackend::Memory => {
                let store = Arc::new(MemoryStore::new());
                Self::with_stores(config, store.clone(), store).await
            }
        }
    }

    /// Build with explicit store implementations. Used by `build` and by
    /// the test harness, which needs to seed grants and swap in failing
    /// stores.
    pub async fn with_stores(
        config: CatalogConfig,
        store: Arc<dyn CatalogStore>,
        grants: Arc<dyn GrantStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
            grants,
        };

        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Route table. Each resource router carries its own permission layer so
/// every verb on every resource is gated uniformly; only the operational
/// endpoints stay open.
pub fn build_router(state: AppState) -> Router {
    let actors = Router::new()
        .route(
            "/actors",
            get(handlers::list_actors).post(handlers::create_actor),
        )
        .route(
            "/actors/:id",
            get(handlers::get_actor)
                .put(handlers::update_actor)
                .delete(handlers::delete_actor),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            |state: State<AppState>, req: Request, next: Next| {
                require_permission(state, Resource::Actor, req, next)
            },
        ));

    let movies = Router::new()
        .route(
            "/movies",
            get(handlers::list_movies).post(handlers::create_movie),
        )
        .route(
            "/movies/:id",
            get(handlers::get_movie)
                .put(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            |state: State<AppState>, req: Request, next: Next| {
                require_permission(state, Resource::Movie, req, next)
            },
        ));

    let genres = Router::new()
        .route(
            "/genres",
            get(handlers::list_genres).post(handlers::create_genre),
        )
        .route(
            "/genres/:id",
            get(handlers::get_genre)
                .put(handlers::update_genre)
                .delete(handlers::delete_genre),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            |state: State<AppState>, req: Request, next: Next| {
                require_permission(state, Resource::Genre, req, next)
            },
        ));

    let reviews = Router::new()
        .route(
            "/reviews",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/reviews/:id",
            get(handlers::get_review)
                .put(handlers::update_review)
                .delete(handlers::delete_review),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            |state: State<AppState>, req: Request, next: Next| {
                require_permission(state, Resource::Review, req, next)
            },
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .merge(actors)
        .merge(movies)
        .merge(genres)
        .merge(reviews)
        .layer(from_fn(principal_middleware))
        .layer(from_fn(http_metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

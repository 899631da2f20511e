//! Fleetport portal API server.

mod bootstrap;
mod config;
mod logging;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use fleetport_api::{jwt_auth_middleware, portal_router, ApiDoc, JwtVerifier, PortalState};
use fleetport_authz::{AccessResolver, CatalogService, GrantService, RoleDefaults};
use fleetport_cache::{CacheBackend, CacheLayer, MemoryCacheBackend, RestCacheBackend};
use fleetport_store::{InMemoryPermissionStore, InMemoryUserStore, UserStore};

use config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: Configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.log_filter);

    match config.validate_security() {
        Ok(warnings) => {
            for warning in warnings {
                tracing::warn!(finding = %warning, "Insecure configuration");
            }
        }
        Err(errors) => {
            for error in errors {
                tracing::error!(finding = %error, "Refusing to start in production");
            }
            std::process::exit(1);
        }
    }

    let backend: Arc<dyn CacheBackend> = match (&config.cache_url, &config.cache_token) {
        (Some(url), Some(token)) => match RestCacheBackend::new(url, token) {
            Ok(backend) => {
                tracing::info!(cache_url = %url, "Using external cache service");
                Arc::new(backend)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to build cache client");
                std::process::exit(1);
            }
        },
        _ => {
            tracing::info!("No external cache configured, using in-process cache");
            Arc::new(MemoryCacheBackend::new())
        }
    };
    let cache = CacheLayer::new(backend);

    let users = Arc::new(InMemoryUserStore::new());
    let permissions = Arc::new(InMemoryPermissionStore::new());
    let defaults = Arc::new(RoleDefaults::standard());

    if let Err(e) = bootstrap::seed(
        &config,
        users.as_ref(),
        permissions.as_ref(),
        defaults.as_ref(),
    )
    .await
    {
        tracing::error!(error = %e, "Bootstrap seeding failed");
        std::process::exit(1);
    }

    let state = PortalState {
        users: users.clone() as Arc<dyn UserStore>,
        catalog: Arc::new(
            CatalogService::new(permissions.clone(), cache.clone())
                .with_catalog_ttl(config.cache_ttl),
        ),
        grants: Arc::new(GrantService::new(users.clone(), cache.clone())),
        resolver: Arc::new(
            AccessResolver::new(users.clone(), cache.clone(), defaults)
                .with_capability_ttl(config.capability_ttl),
        ),
    };

    let api = portal_router(state)
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(JwtVerifier::new(&config.jwt_secret)));

    let app = Router::new()
        .merge(api)
        .route("/health", get(health))
        .route("/docs/openapi.json", get(openapi_json))
        .layer(cors_layer(&config))
        .layer(RequestBodyLimitLayer::new(config.max_body_size))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %addr,
        environment = %config.environment,
        "Fleetport portal API listening"
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

//! # HTTP Server
//!
//! Combines the flights and health routers behind CORS, panic recovery
//! and request tracing.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::errors::panic_response;
use super::flights_routes::{flights_routes, not_found_handler, FlightsState};
use super::observability_routes::health_routes;
use crate::config::{AppConfig, ConfigError};

/// HTTP server for the flights API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::build(AppConfig::default())
    }

    /// Create a new HTTP server with custom configuration.
    /// Invalid generator settings are rejected.
    pub fn with_config(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AppConfig) -> Self {
        let router = Self::build_router(&config);
        Self {
            config: config.http,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &AppConfig) -> Router {
        let flights_state = Arc::new(FlightsState::new(config.generator.clone()));

        let routes = Router::new()
            .merge(health_routes())
            .merge(flights_routes(flights_state))
            .fallback(not_found_handler);

        Self::with_layers(routes, &config.http)
    }

    /// Wrap `routes` in tracing, CORS and the panic guard.
    ///
    /// Outermost first: CORS wraps the panic guard so 500s carry the same
    /// headers as every other response.
    fn with_layers(routes: Router, config: &HttpServerConfig) -> Router {
        routes.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Self::cors_layer(config))
                .layer(CatchPanicLayer::custom(panic_response)),
        )
    }

    /// Any origin unless an allow-list is configured
    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        if config.cors_origins.is_empty() {
            return cors.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        cors.allow_origin(AllowOrigin::list(origins))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        info!(%addr, "starting flights HTTP server");
        info!("endpoints: GET /flights, GET /airports, GET /aircraft, POST /quote, GET /health");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server has been shut down");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on Ctrl-C, starting graceful shutdown
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("starting graceful shutdown for HTTP server...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = AppConfig {
            http: HttpServerConfig::with_port(9090),
            ..Default::default()
        };
        let server = HttpServer::with_config(config).unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = AppConfig {
            http: HttpServerConfig {
                cors_origins: vec!["http://localhost:5173".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).unwrap().router();
    }

    #[test]
    fn test_invalid_generator_config_rejected() {
        let mut config = AppConfig::default();
        config.generator.min_per_day = 5;
        config.generator.max_per_day = 2;

        assert!(matches!(
            HttpServer::with_config(config),
            Err(ConfigError::Generator(_))
        ));
    }

    // ==================
    // Panic Recovery
    // ==================

    async fn explode() -> &'static str {
        panic!("exploded")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500_with_cors() {
        use axum::body::{to_bytes, Body};
        use axum::http::{Request, StatusCode};
        use axum::routing::get;
        use tower::ServiceExt;

        let routes = Router::new().route("/boom", get(explode));
        let router = HttpServer::with_layers(routes, &HttpServerConfig::default());

        let response = router
            .oneshot(
                Request::get("/boom")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "exploded");
    }
}

//! # HTTP Server Module
//!
//! JSON API over the flight catalog.
//!
//! # Endpoints
//!
//! - `GET /flights` - Generated empty-leg listing, filterable
//! - `GET /airports` - Airport catalog
//! - `GET /aircraft` - Aircraft catalog
//! - `POST /quote` - Charter quote
//! - `GET /health` - Health check

pub mod config;
pub mod errors;
pub mod flights_routes;
pub mod observability_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;

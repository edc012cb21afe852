//! emptyleg - empty-leg flight catalog and charter quote service
//!
//! A stateless JSON API for a private-jet brokerage: a static airport and
//! aircraft catalog, a synthetic empty-leg listing regenerated on every
//! request, and charter pricing.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod generator;
pub mod http_server;
pub mod observability;
pub mod pricing;
pub mod quote;
pub mod search;

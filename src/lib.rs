//! # Redis Health
//!
//! A small HTTP microservice that reports the health of a Redis storage
//! dependency, built with Axum.
//!
//! ## Architecture
//!
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis health probing
//! - **API Layer** ([`api`]) - HTTP handler, DTOs, and middleware
//!
//! ## Behavior
//!
//! `GET /health` runs a PING round-trip against Redis and returns a JSON
//! report with the probe result, a timestamp, and a summary of the runtime
//! environment. Any probe failure maps uniformly to a 500 response with a
//! fixed error body; the underlying cause is only logged.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; without it the endpoint reports the dependency as down
//! export REDIS_URL="redis://localhost:6379/0"
//! export APP_ENV="production"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use state::AppState;

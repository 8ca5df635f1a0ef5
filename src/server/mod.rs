//! Axum-based HTTP server for the gatordocs relay.
//!
//! Exposes the ask/answer flow, the typed plugin message contract, the
//! read-only documentation dataset and operational endpoints (health, stats,
//! metrics).
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints.
//! - `messages`: The tagged-union plugin message types.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
pub mod messages;
mod routes;

pub use handlers::{AskRequest, HealthResponse, HealthStatus, StatsResponse};
pub use routes::{create_router, AppState};

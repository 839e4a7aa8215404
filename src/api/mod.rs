//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for calculating,
//! recalculating, saving, deleting, and listing payroll records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateRequest, SaveRequest};
pub use response::ApiError;
pub use state::{AppState, SharedLedger};

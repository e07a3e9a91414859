//! HTTP API module for the Staffing Engine.
//!
//! This module provides the REST API endpoints for hiring employees,
//! looking them up, and scoring commercial performance.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, EmployeeView};
pub use state::AppState;

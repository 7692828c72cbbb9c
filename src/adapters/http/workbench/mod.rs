//! Workbench HTTP API.
//!
//! REST endpoints for the analysis editor and the computed reports.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::WorkbenchAppState;
pub use routes::workbench_routes;

//! Web layer for the route recommendation server.
//!
//! Provides JSON endpoints for listing cities and transport modes, and for
//! comparing routes between two cities.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

//! # Job Board API
//! 
//! HTTP handlers, extractors, middleware and router for the job board.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

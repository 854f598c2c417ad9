//! # Job Board Client
//!
//! Typed HTTP client for the job board API and the session store used by the
//! `jobboard` command-line tool.

pub mod client;
pub mod error;
pub mod session;

pub use client::{ApiClient, ClientConfig};
pub use error::{ClientError, ClientResult};
pub use session::{Session, SessionStore};

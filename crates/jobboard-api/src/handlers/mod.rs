//! HTTP handlers

pub mod admin;
pub mod applications;
pub mod auth;
pub mod companies;
pub mod health;
pub mod jobs;
pub mod upload;
pub mod users;

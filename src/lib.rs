#[macro_use]
extern crate actix_web;

pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod messages;
pub mod metrics;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod seeders;
pub mod services;
pub mod telemetry;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use errors::Error;
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use security::PasswordHasher;

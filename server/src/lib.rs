// Library exports for testing and reuse

pub mod auth_token;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

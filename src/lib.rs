pub mod api;
pub mod config;
pub mod error;
pub mod formatting;
pub mod middleware;
pub mod models;
pub mod services;

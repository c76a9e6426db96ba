//! Inbound interfaces exposing the application services.

pub mod http;

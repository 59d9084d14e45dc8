//! HTTP layer: DTOs, routes, error mapping and application wiring.

pub mod app;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

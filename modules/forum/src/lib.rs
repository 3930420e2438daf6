//! Forum posts module: a paginated CRUD surface over the pagekit stack.
//!
//! Layered the usual way: `contract` holds the serde-free domain models,
//! `domain` the service logic, `infra` the SeaORM storage, and `api::rest`
//! the axum DTOs/handlers/routes. Both list endpoints respond with the flat
//! `{ "result": [...], ...meta }` JSON shape.

pub mod api;
pub mod contract;
pub mod domain;
pub mod infra;

//! # homestead-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON listing API** (`/properties`, `/properties/{id}`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, hiding storage details
//!   behind fixed per-operation failure messages
//!
//! ## Dependency rule
//! Depends on `homestead-app` (for port traits and services) and `homestead-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

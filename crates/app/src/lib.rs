//! # homestead-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository`: look up owners, idempotently register the placeholder owner
//!   - `PropertyRepository`: insert listings, read them joined with their owner
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ListingService`: create, list, and browse listings
//!   - `DetailService`: fetch a single listing
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `homestead-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

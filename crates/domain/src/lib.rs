//! # homestead-domain
//!
//! Pure domain model for the homestead property listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Users** (listing owners, including the placeholder owner)
//! - Define **Properties** (listings for sale or rent) and the submission
//!   type used to create them
//! - Define **Listings** (a property joined with its owner's contact details)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod listing;
pub mod property;
pub mod user;

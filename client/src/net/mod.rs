//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues bearer-authenticated requests, `error` normalizes failures
//! into user-facing categories, and `types` defines the typed wire schema.

pub mod api;
pub mod error;
pub mod types;

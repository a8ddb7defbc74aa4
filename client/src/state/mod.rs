//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `credits`, `filters`, `toast`) so pages
//! depend on small focused models. Only `session` touches persisted
//! credentials.

pub mod chat;
pub mod credits;
pub mod filters;
pub mod session;
pub mod toast;

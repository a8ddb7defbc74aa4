//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Input validation lives in plain functions next to the
//! page so it can be unit tested without a browser.

pub mod couple;
pub mod course;
pub mod list;
pub mod login;
pub mod my_courses;
pub mod mypage;
pub mod not_found;
pub mod oauth_callback;
pub mod shared_course;
pub mod signup;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (route guard, navigation, toasts) and
//! course fragments, reading/writing shared state from Leptos context
//! providers installed by `app::App`.

pub mod auth_guard;
pub mod nav_bar;
pub mod place_list;
pub mod shared_course_card;
pub mod toast_host;

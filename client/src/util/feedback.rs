//! Shared failure/notice reporting for pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand every `ApiError` to `report_error`. A 401 also ends the
//! session here, so no page has to remember to clear storage itself.

use leptos::prelude::*;

use crate::config::LOGIN_PATH;
use crate::net::error::ApiError;
use crate::state::session::SessionContext;
use crate::state::toast::{ToastKind, ToastState};

/// Show `err` as a toast; on 401 clear the session and leave for `/login`.
pub fn report_error(session: SessionContext, toasts: RwSignal<ToastState>, err: &ApiError) {
    toasts.update(|t| {
        t.push(ToastKind::Error, err.to_string());
    });
    if err.requires_reauth() {
        leptos::logging::warn!("session rejected by API; signing out");
        session.clear();
        hard_redirect(LOGIN_PATH);
    }
}

pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    toasts.update(|t| {
        t.push(kind, message);
    });
}

/// Full page load to `href`. Used where the router is out of reach or a
/// fresh document is wanted (logout, OAuth hand-off).
pub fn hard_redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

//! Fallback for unknown routes.

use leptos::prelude::*;

use crate::config::DEFAULT_LANDING_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page page--centered">
            <h1 class="page__title">"Page not found"</h1>
            <a class="btn btn--primary" href=DEFAULT_LANDING_PATH>"Back to planning"</a>
        </main>
    }
}

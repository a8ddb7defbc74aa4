//! Overlay rendering queued toasts with auto-dismiss.

use leptos::prelude::*;

use crate::state::toast::{TOAST_TTL_MS, Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = TOAST_TTL_MS;

    view! {
        <div class=format!("toast {}", toast.kind.css_class()) role="status">
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" aria-label="Dismiss" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "✕"
            </button>
        </div>
    }
}

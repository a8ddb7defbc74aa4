//! Route guard wrapping every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each route renders its page inside `AuthGuard`, so the route table itself
//! is always built (the server needs it to register handlers) while page
//! content stays gated. The decision is a memo over the pathname and the
//! stored session, which means a newly routed page sees the verdict before it
//! mounts. Side effects (session reset, history-replace navigation) run in an
//! effect afterwards.
//!
//! Until the app has hydrated every guard shows the neutral placeholder, so
//! the first client render matches the server-rendered shell.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionContext;
use crate::util::auth::{GuardDecision, GuardStatus, evaluate};

/// Becomes `true` once the client has hydrated. Always `false` during SSR.
#[derive(Clone, Copy, Debug)]
pub struct Hydrated(ReadSignal<bool>);

/// Install the `Hydrated` flag. Call once from the root component.
pub fn provide_hydrated() {
    let (hydrated, set_hydrated) = signal(false);
    Effect::new(move || set_hydrated.set(true));
    provide_context(Hydrated(hydrated));
}

#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let Hydrated(hydrated) = expect_context::<Hydrated>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        session.state().track();
        hydrated.get().then(|| evaluate(&path, &session.peek()))
    });
    let status = Memo::new(move |_| decision.get().map_or(GuardStatus::Loading, GuardStatus::from_decision));

    Effect::new(move || {
        let Some(decision) = decision.get() else {
            return;
        };
        match decision {
            GuardDecision::Render => {
                session.refresh();
            }
            GuardDecision::Redirect(to) => {
                navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            GuardDecision::ResetAndRedirect(to) => {
                let path = location.pathname.get_untracked();
                leptos::logging::warn!("no usable session on {path}; clearing stored session");
                session.clear();
                navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    move || match status.get() {
        GuardStatus::Authenticated => children().into_any(),
        GuardStatus::Loading => view! { <div class="guard-placeholder">"Loading..."</div> }.into_any(),
        GuardStatus::Redirecting => view! { <div class="guard-placeholder">"Redirecting..."</div> }.into_any(),
        GuardStatus::Unauthenticated => ().into_any(),
    }
}

//! Top navigation for authenticated pages.

use leptos::prelude::*;

use crate::state::credits::CreditsState;
use crate::state::session::SessionContext;
use crate::state::toast::ToastState;
use crate::util::{feedback, format};

const NAV_LINKS: [(&str, &str); 5] = [
    ("/course", "Plan"),
    ("/my-courses", "My courses"),
    ("/list", "Marketplace"),
    ("/couple", "Couple"),
    ("/mypage", "My page"),
];

/// Navigation bar with section links, nickname, and credit balance.
///
/// Fetches the balance once on mount; pages that spend credits write the
/// new balance into `CreditsState` themselves.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let credits = expect_context::<RwSignal<CreditsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match session.api().balance().await {
            Ok(b) => credits.update(|c| c.balance = Some(b.balance)),
            Err(e) => feedback::report_error(session, toasts, &e),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let nickname = move || session.user().map(|u| u.display_name()).unwrap_or_default();
    let balance = move || credits.get().balance.map(format::credits).unwrap_or_else(|| "…".to_owned());

    view! {
        <header class="nav-bar">
            <a href="/course" class="nav-bar__brand">"DateCourse"</a>
            <nav class="nav-bar__links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=*href class="nav-bar__link">
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__balance" title="Credit balance">{balance}</span>
            <span class="nav-bar__user">{nickname}</span>
        </header>
    }
}

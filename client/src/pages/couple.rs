//! Couple page: current partner and incoming requests.

#[cfg(test)]
#[path = "couple_test.rs"]
mod couple_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::error::ApiError;
use crate::net::types::{CoupleInfo, CoupleRequest, CoupleRequestStatus};
use crate::pages::signup::validate_nickname;
use crate::state::session::SessionContext;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::{feedback, format};

fn validate_partner_nickname(raw: &str, own_nickname: Option<&str>) -> Result<String, &'static str> {
    let nickname = validate_nickname(raw)?;
    if own_nickname.is_some_and(|me| me == nickname) {
        return Err("You cannot send a request to yourself.");
    }
    Ok(nickname)
}

/// Requests still awaiting an answer, oldest first as received.
fn pending_requests(requests: Vec<CoupleRequest>) -> Vec<CoupleRequest> {
    requests.into_iter().filter(|r| r.status == CoupleRequestStatus::Pending).collect()
}

/// A missing couple comes back as 404 from some deployments.
fn couple_or_none(result: Result<Option<CoupleInfo>, ApiError>) -> Result<Option<CoupleInfo>, ApiError> {
    match result {
        Err(ApiError::NotFound(_)) => Ok(None),
        other => other,
    }
}

#[derive(Clone, Copy)]
struct CouplePanel {
    session: SessionContext,
    toasts: RwSignal<ToastState>,
    couple: RwSignal<Option<CoupleInfo>>,
    requests: RwSignal<Vec<CoupleRequest>>,
    loading: RwSignal<bool>,
}

impl CouplePanel {
    fn load(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = self.session.api();
            match couple_or_none(api.couple().await) {
                Ok(info) => self.couple.set(info),
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
            match api.couple_requests().await {
                Ok(list) => self.requests.set(pending_requests(list)),
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
            self.loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = self;
    }

    fn send(self, nickname: String, on_sent: impl Fn() + 'static) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match self.session.api().send_couple_request(&nickname).await {
                Ok(()) => {
                    on_sent();
                    feedback::notify(self.toasts, ToastKind::Success, format!("Request sent to {nickname}."));
                }
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (nickname, on_sent);
    }

    fn answer(self, id: String, accept: bool) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = self.session.api();
            let result = if accept {
                api.accept_couple_request(&id).await.map(Some)
            } else {
                api.reject_couple_request(&id).await.map(|()| None)
            };
            match result {
                Ok(info) => {
                    self.requests.update(|list| list.retain(|r| r.id != id));
                    if let Some(info) = info {
                        feedback::notify(self.toasts, ToastKind::Success, format!("You and {} are now a couple.", info.partner.nickname));
                        self.couple.set(Some(info));
                    }
                }
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, accept);
    }

    fn break_up(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match self.session.api().break_up().await {
                Ok(()) => {
                    self.couple.set(None);
                    feedback::notify(self.toasts, ToastKind::Info, "Couple connection removed.");
                }
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
        });
    }
}

#[component]
pub fn CouplePage() -> impl IntoView {
    let panel = CouplePanel {
        session: expect_context::<SessionContext>(),
        toasts: expect_context::<RwSignal<ToastState>>(),
        couple: RwSignal::new(None),
        requests: RwSignal::new(Vec::new()),
        loading: RwSignal::new(true),
    };
    let partner_input = RwSignal::new(String::new());
    let confirm_break = RwSignal::new(false);

    panel.load();

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let own = panel.session.user().and_then(|u| u.nickname);
        match validate_partner_nickname(&partner_input.get_untracked(), own.as_deref()) {
            Ok(nickname) => panel.send(nickname, move || partner_input.set(String::new())),
            Err(msg) => feedback::notify(panel.toasts, ToastKind::Error, msg),
        }
    };

    view! {
        <NavBar/>
        <main class="page">
            <h1 class="page__title">"Couple"</h1>
            <Show when=move || panel.loading.get()>
                <p class="page__hint">"Loading..."</p>
            </Show>
            {move || {
                panel.couple.get().map(|info| {
                    view! {
                        <section class="couple-card">
                            <h2>{info.partner.nickname.clone()}</h2>
                            <p class="couple-card__since">
                                "Together since "
                                {format::date(info.started_at.as_deref())}
                            </p>
                            <Show
                                when=move || confirm_break.get()
                                fallback=move || view! {
                                    <button class="btn btn--ghost" on:click=move |_| confirm_break.set(true)>"Break up"</button>
                                }
                            >
                                <p>"Remove the couple connection?"</p>
                                <button class="btn btn--danger" on:click=move |_| {
                                    confirm_break.set(false);
                                    panel.break_up();
                                }>"Yes, remove"</button>
                                <button class="btn" on:click=move |_| confirm_break.set(false)>"Cancel"</button>
                            </Show>
                        </section>
                    }
                })
            }}
            <Show when=move || !panel.loading.get() && panel.couple.get().is_none()>
                <section class="couple-invite">
                    <h2>"Invite your partner"</h2>
                    <form class="filters" on:submit=on_send>
                        <input
                            class="filters__query"
                            type="text"
                            placeholder="Partner's nickname"
                            prop:value=move || partner_input.get()
                            on:input=move |ev| partner_input.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">"Send request"</button>
                    </form>
                </section>
            </Show>
            <section class="couple-requests">
                <h2>"Requests"</h2>
                <Show when=move || panel.requests.get().is_empty()>
                    <p class="page__hint">"No pending requests."</p>
                </Show>
                <ul>
                    <For
                        each=move || panel.requests.get()
                        key=|r| r.id.clone()
                        children=move |request| {
                            let accept_id = request.id.clone();
                            let reject_id = request.id.clone();
                            view! {
                                <li class="couple-request">
                                    <span class="couple-request__name">{request.requester.nickname}</span>
                                    <span class="couple-request__date">{format::date(request.created_at.as_deref())}</span>
                                    <button class="btn btn--primary" on:click=move |_| panel.answer(accept_id.clone(), true)>
                                        "Accept"
                                    </button>
                                    <button class="btn" on:click=move |_| panel.answer(reject_id.clone(), false)>
                                        "Reject"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </main>
    }
}

//! My page: profile, balance, reviews, saved courses, and logout.

#[cfg(test)]
#[path = "mypage_test.rs"]
mod mypage_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::shared_course_card::SharedCourseCard;
use crate::config::LOGIN_PATH;
use crate::net::types::{Review, SharedCourse, User};
use crate::pages::shared_course::ReviewItem;
use crate::pages::signup::{GENDERS, build_profile_update, current_year};
use crate::state::credits::CreditsState;
use crate::state::filters::REGIONS;
use crate::state::session::SessionContext;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::{feedback, format};

/// Label/value rows for the profile summary. Unset fields show a dash.
fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    let or_dash = |v: Option<String>| v.filter(|s| !s.trim().is_empty()).unwrap_or_else(|| "-".to_owned());
    let gender = user
        .gender
        .as_deref()
        .and_then(|g| GENDERS.iter().find(|(value, _)| *value == g).map(|(_, label)| (*label).to_owned()));
    vec![
        ("Nickname", user.display_name()),
        ("Email", or_dash(user.email.clone())),
        ("Gender", or_dash(gender)),
        ("Birth year", or_dash(user.birth_year.map(|y| y.to_string()))),
        ("Region", or_dash(user.region.clone())),
    ]
}

#[component]
pub fn MyPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let credits = expect_context::<RwSignal<CreditsState>>();
    let reviews = RwSignal::new(Vec::<Review>::new());
    let saved = RwSignal::new(Vec::<SharedCourse>::new());
    let editing = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = session.api();
        match api.me().await {
            Ok(user) => session.update_user(user),
            Err(e) => {
                feedback::report_error(session, toasts, &e);
                return;
            }
        }
        match api.balance().await {
            Ok(b) => credits.update(|c| c.balance = Some(b.balance)),
            Err(e) => feedback::report_error(session, toasts, &e),
        }
        match api.my_reviews().await {
            Ok(list) => reviews.set(list),
            Err(e) => feedback::report_error(session, toasts, &e),
        }
        match api.list_saved_shared_courses().await {
            Ok(list) => saved.set(list),
            Err(e) => feedback::report_error(session, toasts, &e),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let on_logout = move |_| {
        leptos::logging::log!("signing out");
        session.clear();
        feedback::hard_redirect(LOGIN_PATH);
    };

    view! {
        <NavBar/>
        <main class="page">
            <h1 class="page__title">"My page"</h1>
            <section class="profile">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <dl class="profile__rows">
                                {move || {
                                    session
                                        .user()
                                        .map(|u| profile_rows(&u))
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                        .collect::<Vec<_>>()
                                }}
                            </dl>
                            <button class="btn" on:click=move |_| editing.set(true)>"Edit profile"</button>
                        }
                    }
                >
                    <ProfileEditor on_close=Callback::new(move |()| editing.set(false))/>
                </Show>
            </section>
            <section class="balance">
                <h2>"Credits"</h2>
                <p class="balance__amount">
                    {move || credits.get().balance.map(format::credits).unwrap_or_else(|| "…".to_owned())}
                </p>
            </section>
            <section class="reviews">
                <h2>"My reviews"</h2>
                <Show when=move || reviews.get().is_empty()>
                    <p class="page__hint">"You have not written any reviews."</p>
                </Show>
                <ul class="review-list">
                    <For each=move || reviews.get() key=|r| r.id.clone() children=move |r| view! { <ReviewItem review=r/> }/>
                </ul>
            </section>
            <section class="saved">
                <h2>"Saved courses"</h2>
                <Show when=move || saved.get().is_empty()>
                    <p class="page__hint">"Save courses from the marketplace to find them here."</p>
                </Show>
                <div class="course-grid">
                    <For each=move || saved.get() key=|c| c.id.clone() children=move |c| view! { <SharedCourseCard course=c/> }/>
                </div>
            </section>
            <button class="btn btn--danger" on:click=on_logout>"Log out"</button>
        </main>
    }
}

#[component]
fn ProfileEditor(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let current = session.state().get_untracked().user.unwrap_or_default();
    let nickname = RwSignal::new(current.nickname.unwrap_or_default());
    let gender = RwSignal::new(current.gender.unwrap_or_default());
    let birth_year = RwSignal::new(current.birth_year.map(|y| y.to_string()).unwrap_or_default());
    let region = RwSignal::new(current.region.unwrap_or_default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let update = match build_profile_update(&nickname.get(), &gender.get(), &birth_year.get(), &region.get(), current_year()) {
            Ok(update) => update,
            Err(msg) => {
                feedback::notify(toasts, ToastKind::Error, msg);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.api().update_me(&update).await {
                Ok(user) => {
                    session.update_user(user);
                    feedback::notify(toasts, ToastKind::Success, "Profile updated.");
                    on_close.run(());
                }
                Err(e) => feedback::report_error(session, toasts, &e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (update, on_close);
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="text"
                maxlength="12"
                placeholder="Nickname"
                prop:value=move || nickname.get()
                on:input=move |ev| nickname.set(event_target_value(&ev))
            />
            <select class="auth-input" prop:value=move || gender.get() on:change=move |ev| gender.set(event_target_value(&ev))>
                <option value="">"Gender (optional)"</option>
                {GENDERS.iter().map(|(value, label)| view! { <option value=*value>{*label}</option> }).collect::<Vec<_>>()}
            </select>
            <input
                class="auth-input"
                type="number"
                inputmode="numeric"
                placeholder="Birth year (optional)"
                prop:value=move || birth_year.get()
                on:input=move |ev| birth_year.set(event_target_value(&ev))
            />
            <select class="auth-input" prop:value=move || region.get() on:change=move |ev| region.set(event_target_value(&ev))>
                <option value="">"Region (optional)"</option>
                {REGIONS.iter().map(|r| view! { <option value=*r>{*r}</option> }).collect::<Vec<_>>()}
            </select>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Save"</button>
            <button class="btn btn--ghost" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
        </form>
    }
}

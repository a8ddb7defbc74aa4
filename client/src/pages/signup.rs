//! Signup page: account registration or profile completion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Without a session this is a two-step registration. Step one validates
//! email and password and keeps the email as the pending-signup draft so a
//! reload does not lose it (the password is never persisted). Step two picks
//! a nickname and creates the account.
//!
//! With a session but no nickname (typically a fresh Kakao login) the page
//! instead completes the profile through `PATCH /users/me`. The guard sends
//! onboarded users away from here, so no third mode exists.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::config::LOGIN_PATH;
use crate::net::types::{ProfileUpdate, SignupRequest};
use crate::pages::login::validate_email;
use crate::state::filters::REGIONS;
use crate::state::session::{SessionContext, SignupDraft};
use crate::state::toast::ToastState;

const NICKNAME_MIN_CHARS: usize = 2;
const NICKNAME_MAX_CHARS: usize = 12;
const PASSWORD_MIN_CHARS: usize = 8;
const MIN_BIRTH_YEAR: i32 = 1900;
/// Users must be at least this old in the current year.
const MIN_AGE: i32 = 14;

pub(crate) const GENDERS: [(&str, &str); 2] = [("male", "Male"), ("female", "Female")];

pub(crate) fn validate_nickname(raw: &str) -> Result<String, &'static str> {
    let nickname = raw.trim();
    let len = nickname.chars().count();
    if !(NICKNAME_MIN_CHARS..=NICKNAME_MAX_CHARS).contains(&len) {
        return Err("Nickname must be 2-12 characters.");
    }
    if !nickname.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err("Nickname may only use letters, digits, and underscores.");
    }
    Ok(nickname.to_owned())
}

fn validate_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err("Password must be at least 8 characters.");
    }
    if !password.chars().any(char::is_alphabetic) || !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must mix letters and digits.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

/// Blank means "not given"; otherwise a plausible year for a user of age.
pub(crate) fn validate_birth_year(raw: &str, current_year: i32) -> Result<Option<i32>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let year: i32 = raw.parse().map_err(|_| "Birth year must be a number.")?;
    if year < MIN_BIRTH_YEAR || year > current_year - MIN_AGE {
        return Err("Enter a valid birth year.");
    }
    Ok(Some(year))
}

fn optional_choice(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_owned())
}

pub(crate) fn build_profile_update(
    nickname: &str,
    gender: &str,
    birth_year: &str,
    region: &str,
    current_year: i32,
) -> Result<ProfileUpdate, &'static str> {
    Ok(ProfileUpdate {
        nickname: Some(validate_nickname(nickname)?),
        gender: optional_choice(gender),
        birth_year: validate_birth_year(birth_year, current_year)?,
        region: optional_choice(region),
    })
}

pub(crate) fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = web_sys::js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        2026
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    move || {
        if session.state().get().is_present() {
            view! { <ProfileCompletion/> }.into_any()
        } else {
            view! { <Registration/> }.into_any()
        }
    }
}

#[component]
fn Registration() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = leptos_router::hooks::use_navigate();
    let draft = session.signup_draft();
    let email = RwSignal::new(draft.map(|d| d.email).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let on_nickname_step = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_account = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let checked = validate_email(&email.get()).and_then(|e| validate_password(&password.get(), &confirm.get()).map(|()| e));
        match checked {
            Ok(valid_email) => {
                session.save_signup_draft(&SignupDraft { email: valid_email.clone() });
                email.set(valid_email);
                info.set(String::new());
                on_nickname_step.set(true);
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let nickname_value = match validate_nickname(&nickname.get()) {
            Ok(n) => n,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let req = SignupRequest { email: email.get(), password: password.get(), nickname: nickname_value };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::ApiClient::anonymous().signup(&req).await {
                    Ok(auth) => {
                        session.login(&auth.token, auth.user);
                        let target = crate::util::auth::onboarding_target(&session.state().get_untracked());
                        navigate(target, leptos_router::NavigateOptions { replace: true, ..Default::default() });
                    }
                    Err(e) => {
                        info.set(format!("Signup failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" hidden=move || on_nickname_step.get() on:submit=on_account>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit">"Next"</button>
                </form>
                <form class="auth-form" hidden=move || !on_nickname_step.get() on:submit=on_create>
                    <p class="auth-card__subtitle">{move || email.get()}</p>
                    <input
                        class="auth-input"
                        type="text"
                        maxlength="12"
                        placeholder="Nickname"
                        prop:value=move || nickname.get()
                        on:input=move |ev| nickname.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                    <button class="auth-button auth-button--ghost" type="button" on:click=move |_| on_nickname_step.set(false)>
                        "Back"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn ProfileCompletion() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = leptos_router::hooks::use_navigate();
    let existing = session.state().get_untracked().user.unwrap_or_default();
    let nickname = RwSignal::new(existing.nickname.unwrap_or_default());
    let gender = RwSignal::new(existing.gender.unwrap_or_default());
    let birth_year = RwSignal::new(existing.birth_year.map(|y| y.to_string()).unwrap_or_default());
    let region = RwSignal::new(existing.region.unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = match build_profile_update(&nickname.get(), &gender.get(), &birth_year.get(), &region.get(), current_year()) {
            Ok(update) => update,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving profile...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.api().update_me(&update).await {
                    Ok(user) => {
                        session.update_user(user);
                        let target = crate::util::auth::onboarding_target(&session.state().get_untracked());
                        navigate(target, leptos_router::NavigateOptions { replace: true, ..Default::default() });
                    }
                    Err(e) => {
                        crate::util::feedback::report_error(session, toasts, &e);
                        info.set(format!("Could not save profile: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (update, toasts, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Complete your profile"</h1>
                <p class="auth-card__subtitle">"Pick a nickname to start planning courses."</p>
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
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Save and continue"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

//! Login page: email + password sign-in and Kakao OAuth hand-off.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config;
use crate::net::types::LoginRequest;

pub(crate) fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') => {
            Ok(email.to_owned())
        }
        _ => Err("Enter a valid email address."),
    }
}

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(LoginRequest { email, password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<crate::state::session::SessionContext>();
    let navigate = leptos_router::hooks::use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_login_input(&email.get(), &password.get()) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::ApiClient::anonymous().login(&req).await {
                    Ok(auth) => {
                        session.login(&auth.token, auth.user);
                        let target = crate::util::auth::onboarding_target(&session.state().get_untracked());
                        navigate(target, leptos_router::NavigateOptions { replace: true, ..Default::default() });
                    }
                    Err(e) => {
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, session, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"DateCourse"</h1>
                <p class="auth-card__subtitle">"Plan your next date in minutes"</p>
                <form class="auth-form" on:submit=on_submit>
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
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-divider"></div>
                <a href=config::kakao_authorize_url() rel="external" class="auth-button auth-button--kakao">
                    "Continue with Kakao"
                </a>
                <p class="auth-card__footer">
                    "New here? "
                    <a href=config::SIGNUP_PATH>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

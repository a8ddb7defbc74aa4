//! Kakao OAuth landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider redirects here with `?code=` (or `?error=`). The code is
//! exchanged once for a session, then the user moves on to `/signup` or the
//! landing page depending on onboarding state. The guard always renders this
//! route so a stale session cannot bounce the exchange away.

#[cfg(test)]
#[path = "oauth_callback_test.rs"]
mod oauth_callback_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::config::LOGIN_PATH;

/// Authorization code from the callback query, or a user-facing failure.
fn parse_callback(code: Option<&str>, error: Option<&str>, description: Option<&str>) -> Result<String, String> {
    if let Some(error) = error.map(str::trim).filter(|e| !e.is_empty()) {
        let detail = description.map(str::trim).filter(|d| !d.is_empty()).unwrap_or(error);
        return Err(format!("Kakao sign-in was cancelled or failed: {detail}"));
    }
    code.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| "Missing authorization code.".to_owned())
}

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let session = expect_context::<crate::state::session::SessionContext>();
    let navigate = leptos_router::hooks::use_navigate();
    let query = use_query_map();
    let message = RwSignal::new("Signing you in...".to_owned());
    let failed = RwSignal::new(false);
    let started = RwSignal::new(false);

    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        started.set(true);
        let params = query.get_untracked();
        let code = match parse_callback(
            params.get("code").as_deref(),
            params.get("error").as_deref(),
            params.get("error_description").as_deref(),
        ) {
            Ok(code) => code,
            Err(msg) => {
                leptos::logging::warn!("oauth callback rejected: {msg}");
                message.set(msg);
                failed.set(true);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::ApiClient::anonymous().exchange_oauth_code(&code).await {
                    Ok(auth) => {
                        session.login(&auth.token, auth.user);
                        let target = crate::util::auth::onboarding_target(&session.state().get_untracked());
                        navigate(target, leptos_router::NavigateOptions { replace: true, ..Default::default() });
                    }
                    Err(e) => {
                        message.set(format!("Sign-in failed: {e}"));
                        failed.set(true);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (code, session, &navigate);
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <p class="auth-message">{move || message.get()}</p>
                <Show when=move || failed.get()>
                    <a class="auth-button" href=LOGIN_PATH>"Back to sign in"</a>
                </Show>
            </div>
        </div>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::{AuthGuard, provide_hydrated};
use crate::components::toast_host::ToastHost;
use crate::pages::{
    couple::CouplePage, course::CoursePage, list::ListPage, login::LoginPage, my_courses::MyCoursesPage,
    mypage::MyPage, not_found::NotFoundPage, oauth_callback::OAuthCallbackPage, shared_course::SharedCoursePage,
    signup::SignupPage,
};
use crate::state::{chat::ChatState, credits::CreditsState, session::SessionContext, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and renders every route inside `AuthGuard`.
/// The route table itself is never gated so the server can register a
/// handler for each path. The root path has no page of its own; the guard
/// always redirects it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_hydrated();

    provide_context(SessionContext::new());
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(CreditsState::default()));
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/datecourse.css"/>
        <Title text="DateCourse"/>

        <Router>
            <Routes fallback=|| view! { <AuthGuard><NotFoundPage/></AuthGuard> }>
                <Route path=StaticSegment("") view=|| view! { <AuthGuard>{()}</AuthGuard> }/>
                <Route path=StaticSegment("login") view=|| view! { <AuthGuard><LoginPage/></AuthGuard> }/>
                <Route path=StaticSegment("signup") view=|| view! { <AuthGuard><SignupPage/></AuthGuard> }/>
                <Route
                    path=(StaticSegment("oauth"), StaticSegment("callback"))
                    view=|| view! { <AuthGuard><OAuthCallbackPage/></AuthGuard> }
                />
                <Route path=StaticSegment("course") view=|| view! { <AuthGuard><CoursePage/></AuthGuard> }/>
                <Route path=StaticSegment("my-courses") view=|| view! { <AuthGuard><MyCoursesPage/></AuthGuard> }/>
                <Route path=StaticSegment("list") view=|| view! { <AuthGuard><ListPage/></AuthGuard> }/>
                <Route
                    path=(StaticSegment("list"), ParamSegment("id"))
                    view=|| view! { <AuthGuard><SharedCoursePage/></AuthGuard> }
                />
                <Route path=StaticSegment("couple") view=|| view! { <AuthGuard><CouplePage/></AuthGuard> }/>
                <Route path=StaticSegment("mypage") view=|| view! { <AuthGuard><MyPage/></AuthGuard> }/>
            </Routes>
            <ToastHost/>
        </Router>
    }
}

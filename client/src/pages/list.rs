//! Marketplace listing with cached search filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters persist in localStorage so returning to `/list` restores the last
//! search. Each filter change triggers a fetch; responses that arrive after a
//! newer request was issued are discarded.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::shared_course_card::SharedCourseCard;
use crate::net::types::SharedCourse;
use crate::state::filters::{CourseFilters, REGIONS, SortOrder};
use crate::state::session::SessionContext;
use crate::state::toast::ToastState;
use crate::util::storage::LocalStorage;

/// Region `<select>` value to filter value; the empty option means all regions.
fn region_from_select(raw: &str) -> Option<String> {
    let raw = raw.trim();
    REGIONS.iter().find(|r| **r == raw).map(|r| (*r).to_owned())
}

#[component]
pub fn ListPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let filters = RwSignal::new(CourseFilters::load(&LocalStorage));
    let query_input = RwSignal::new(filters.get_untracked().query);
    let courses = RwSignal::new(Vec::<SharedCourse>::new());
    let loading = RwSignal::new(true);
    let latest_request = RwSignal::new(0_u64);

    Effect::new(move || {
        let current = filters.get();
        current.save(&LocalStorage);
        let request = latest_request.get_untracked() + 1;
        latest_request.set(request);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = session.api().list_shared_courses(&current).await;
            if latest_request.get_untracked() != request {
                return;
            }
            match result {
                Ok(list) => courses.set(list),
                Err(e) => crate::util::feedback::report_error(session, toasts, &e),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, toasts);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = query_input.get_untracked().trim().to_owned();
        if filters.get_untracked().query != query {
            filters.update(|f| f.query = query);
        }
    };

    view! {
        <NavBar/>
        <main class="page">
            <h1 class="page__title">"Marketplace"</h1>
            <form class="filters" on:submit=on_search>
                <input
                    class="filters__query"
                    type="search"
                    placeholder="Search courses"
                    prop:value=move || query_input.get()
                    on:input=move |ev| query_input.set(event_target_value(&ev))
                />
                <select
                    class="filters__select"
                    prop:value=move || filters.get().region.unwrap_or_default()
                    on:change=move |ev| {
                        let region = region_from_select(&event_target_value(&ev));
                        filters.update(|f| f.region = region);
                    }
                >
                    <option value="">"All regions"</option>
                    {REGIONS.iter().map(|r| view! { <option value=*r>{*r}</option> }).collect::<Vec<_>>()}
                </select>
                <select
                    class="filters__select"
                    prop:value=move || filters.get().sort.as_param()
                    on:change=move |ev| {
                        let sort = SortOrder::from_param(&event_target_value(&ev));
                        filters.update(|f| f.sort = sort);
                    }
                >
                    {SortOrder::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_param()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--primary" type="submit">"Search"</button>
                <Show when=move || !filters.get().is_default()>
                    <button
                        class="btn btn--ghost"
                        type="button"
                        on:click=move |_| {
                            query_input.set(String::new());
                            filters.set(CourseFilters::default());
                        }
                    >
                        "Reset"
                    </button>
                </Show>
            </form>
            <Show when=move || loading.get()>
                <p class="page__hint">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get() && courses.get().is_empty()>
                <p class="page__hint">"No courses match these filters."</p>
            </Show>
            <div class="course-grid">
                <For
                    each=move || courses.get()
                    key=|c| c.id.clone()
                    children=move |course| view! { <SharedCourseCard course=course/> }
                />
            </div>
        </main>
    }
}

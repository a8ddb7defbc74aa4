//! Saved courses: list, delete, and share to the marketplace.

#[cfg(test)]
#[path = "my_courses_test.rs"]
mod my_courses_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::place_list::PlaceList;
use crate::net::types::{Course, ShareCourseRequest};
use crate::state::session::SessionContext;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::{feedback, format};

/// Highest price a course may be listed for.
const MAX_PRICE: i64 = 10_000;

/// Blank means free. Prices are whole credits.
fn validate_price(raw: &str) -> Result<i64, &'static str> {
    let raw = raw.trim().replace(',', "");
    if raw.is_empty() {
        return Ok(0);
    }
    let price: i64 = raw.parse().map_err(|_| "Price must be a whole number of credits.")?;
    if !(0..=MAX_PRICE).contains(&price) {
        return Err("Price must be between 0 and 10,000 credits.");
    }
    Ok(price)
}

fn build_share_request(course: &Course, price_raw: &str) -> Result<ShareCourseRequest, &'static str> {
    if course.shared {
        return Err("This course is already listed.");
    }
    if course.places.is_empty() {
        return Err("Add at least one place before sharing.");
    }
    Ok(ShareCourseRequest {
        course_id: course.id.clone(),
        price: validate_price(price_raw)?,
        description: course.description.clone(),
    })
}

#[component]
pub fn MyCoursesPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(true);
    let sharing = RwSignal::new(None::<String>);
    let price = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match session.api().list_courses().await {
            Ok(list) => courses.set(list),
            Err(e) => feedback::report_error(session, toasts, &e),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.api().delete_course(&id).await {
                Ok(()) => {
                    courses.update(|list| list.retain(|c| c.id != id));
                    feedback::notify(toasts, ToastKind::Info, "Course deleted.");
                }
                Err(e) => feedback::report_error(session, toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let share = move |course: Course| {
        let req = match build_share_request(&course, &price.get_untracked()) {
            Ok(req) => req,
            Err(msg) => {
                feedback::notify(toasts, ToastKind::Error, msg);
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.api().share_course(&req).await {
                Ok(_) => {
                    courses.update(|list| {
                        if let Some(c) = list.iter_mut().find(|c| c.id == req.course_id) {
                            c.shared = true;
                        }
                    });
                    sharing.set(None);
                    price.set(String::new());
                    feedback::notify(toasts, ToastKind::Success, "Listed on the marketplace.");
                }
                Err(e) => feedback::report_error(session, toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = req;
    };

    view! {
        <NavBar/>
        <main class="page">
            <h1 class="page__title">"My courses"</h1>
            <Show when=move || loading.get()>
                <p class="page__hint">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get() && courses.get().is_empty()>
                <p class="page__hint">
                    "No saved courses yet. "
                    <a href="/course">"Plan one with the assistant."</a>
                </p>
            </Show>
            <ul class="course-list">
                <For
                    each=move || courses.get()
                    key=|c| (c.id.clone(), c.shared)
                    children=move |course| {
                        let id = course.id.clone();
                        let share_click_id = course.id.clone();
                        let share_id = course.id.clone();
                        let is_sharing = move || sharing.get().as_deref() == Some(share_id.as_str());
                        let shared = course.shared;
                        let for_share = course.clone();
                        view! {
                            <li class="course-item">
                                <div class="course-item__header">
                                    <h2 class="course-item__title">{course.title.clone()}</h2>
                                    {shared.then(|| view! { <span class="course-card__badge">"Shared"</span> })}
                                    <span class="course-item__date">{format::date(course.created_at.as_deref())}</span>
                                </div>
                                <p class="course-item__description">{course.description.clone()}</p>
                                <PlaceList places=course.places.clone()/>
                                <div class="course-item__actions">
                                    <Show when=move || !shared>
                                        <button
                                            class="btn"
                                            on:click={
                                                let id = share_click_id.clone();
                                                move |_| {
                                                    price.set(String::new());
                                                    sharing.set(Some(id.clone()));
                                                }
                                            }
                                        >
                                            "Share"
                                        </button>
                                    </Show>
                                    <button class="btn btn--danger" on:click={
                                        let id = id.clone();
                                        move |_| delete(id.clone())
                                    }>
                                        "Delete"
                                    </button>
                                </div>
                                <Show when=is_sharing.clone()>
                                    <div class="share-form">
                                        <input
                                            class="auth-input"
                                            type="text"
                                            inputmode="numeric"
                                            placeholder="Price in credits (blank = free)"
                                            prop:value=move || price.get()
                                            on:input=move |ev| price.set(event_target_value(&ev))
                                        />
                                        <button class="btn btn--primary" on:click={
                                            let course = for_share.clone();
                                            move |_| share(course.clone())
                                        }>
                                            "List course"
                                        </button>
                                        <button class="btn btn--ghost" on:click=move |_| sharing.set(None)>"Cancel"</button>
                                    </div>
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </main>
    }
}

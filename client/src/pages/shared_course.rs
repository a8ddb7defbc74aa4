//! Marketplace course detail: purchase, save, and reviews.
//!
//! DESIGN
//! ======
//! Places are withheld by the backend until the course is unlocked
//! (purchased, free, or the viewer's own listing), so a successful purchase
//! re-fetches the detail rather than patching it locally. Reviews are open
//! to buyers only, one per user.

#[cfg(test)]
#[path = "shared_course_test.rs"]
mod shared_course_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::components::place_list::PlaceList;
use crate::net::types::{CreateReviewRequest, Review, SharedCourse};
use crate::state::credits::CreditsState;
use crate::state::session::SessionContext;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::{feedback, format};

const REVIEW_MIN_CHARS: usize = 10;
const REVIEW_MAX_CHARS: usize = 500;

fn validate_review(shared_course_id: &str, rating: i64, content: &str) -> Result<CreateReviewRequest, &'static str> {
    if !(1..=5).contains(&rating) {
        return Err("Pick a rating from 1 to 5 stars.");
    }
    let content = content.trim();
    let len = content.chars().count();
    if len < REVIEW_MIN_CHARS {
        return Err("Reviews need at least 10 characters.");
    }
    if len > REVIEW_MAX_CHARS {
        return Err("Reviews are limited to 500 characters.");
    }
    Ok(CreateReviewRequest { shared_course_id: shared_course_id.to_owned(), rating, content: content.to_owned() })
}

/// Whether a purchase may be attempted, or why not.
fn purchase_check(course: &SharedCourse, credits: &CreditsState) -> Result<(), String> {
    if course.is_unlocked() {
        return Err("You already have access to this course.".to_owned());
    }
    match credits.shortfall(course.price) {
        Some(short) => Err(format!("Not enough credits: {} more needed.", format::credits(short))),
        None => Ok(()),
    }
}

/// Buyers who have not reviewed yet. Authors cannot review their own listing.
fn can_review(course: &SharedCourse, reviews: &[Review], nickname: Option<&str>) -> bool {
    if course.is_mine || !course.is_unlocked() {
        return false;
    }
    nickname.is_none_or(|me| !reviews.iter().any(|r| r.author_nickname == me))
}

/// Context handles and route data shared by the detail page's actions.
#[derive(Clone, Copy)]
struct Detail {
    session: SessionContext,
    toasts: RwSignal<ToastState>,
    credits: RwSignal<CreditsState>,
    course: RwSignal<Option<SharedCourse>>,
    reviews: RwSignal<Vec<Review>>,
    busy: RwSignal<bool>,
}

impl Detail {
    fn load(self, id: String) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = self.session.api();
            match api.get_shared_course(&id).await {
                Ok(course) => self.course.set(Some(course)),
                Err(e) => {
                    feedback::report_error(self.session, self.toasts, &e);
                    return;
                }
            }
            match api.list_reviews(&id).await {
                Ok(list) => self.reviews.set(list),
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (self, id);
    }

    fn purchase(self) {
        let Some(course) = self.course.get_untracked() else {
            return;
        };
        if let Err(msg) = purchase_check(&course, &self.credits.get_untracked()) {
            feedback::notify(self.toasts, ToastKind::Error, msg);
            return;
        }
        self.busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match self.session.api().purchase_shared_course(&course.id).await {
                Ok(receipt) => {
                    self.credits.update(|c| c.balance = Some(receipt.balance));
                    feedback::notify(self.toasts, ToastKind::Success, "Purchased. Enjoy your date!");
                    self.load(course.id);
                }
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
            self.busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = course;
    }

    fn toggle_saved(self) {
        let Some(course) = self.course.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = self.session.api();
            let result = if course.saved {
                api.unsave_shared_course(&course.id).await
            } else {
                api.save_shared_course(&course.id).await
            };
            match result {
                Ok(()) => self.course.update(|c| {
                    if let Some(c) = c.as_mut() {
                        c.saved = !course.saved;
                    }
                }),
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = course;
    }

    fn submit_review(self, rating: i64, content: String, on_done: impl Fn() + 'static) {
        let Some(course) = self.course.get_untracked() else {
            return;
        };
        let req = match validate_review(&course.id, rating, &content) {
            Ok(req) => req,
            Err(msg) => {
                feedback::notify(self.toasts, ToastKind::Error, msg);
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match self.session.api().create_review(&req).await {
                Ok(review) => {
                    self.reviews.update(|list| list.insert(0, review));
                    self.course.update(|c| {
                        if let Some(c) = c.as_mut() {
                            c.review_count += 1;
                        }
                    });
                    on_done();
                    feedback::notify(self.toasts, ToastKind::Success, "Thanks for the review!");
                }
                Err(e) => feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, on_done);
    }
}

#[component]
pub fn SharedCoursePage() -> impl IntoView {
    let params = use_params_map();
    let detail = Detail {
        session: expect_context::<SessionContext>(),
        toasts: expect_context::<RwSignal<ToastState>>(),
        credits: expect_context::<RwSignal<CreditsState>>(),
        course: RwSignal::new(None),
        reviews: RwSignal::new(Vec::new()),
        busy: RwSignal::new(false),
    };
    let rating = RwSignal::new(5_i64);
    let review_text = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(id) = params.get().get("id").filter(|id| !id.is_empty()) {
            detail.course.set(None);
            detail.reviews.set(Vec::new());
            detail.load(id);
        }
    });

    let reviewable = move || {
        let nickname = detail.session.user().and_then(|u| u.nickname);
        detail
            .course
            .get()
            .is_some_and(|c| can_review(&c, &detail.reviews.get(), nickname.as_deref()))
    };

    let on_review = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        detail.submit_review(rating.get_untracked(), review_text.get_untracked(), move || {
            review_text.set(String::new());
            rating.set(5);
        });
    };

    view! {
        <NavBar/>
        <main class="page">
            <a class="page__back" href="/list">"← Marketplace"</a>
            {move || match detail.course.get() {
                None => view! { <p class="page__hint">"Loading..."</p> }.into_any(),
                Some(course) => {
                    let unlocked = course.is_unlocked();
                    let price = course.price;
                    let is_mine = course.is_mine;
                    let saved = course.saved;
                    view! {
                        <article class="course-detail">
                            <header class="course-detail__header">
                                <h1>{course.title.clone()}</h1>
                                <span class="course-detail__author">{course.author_nickname.clone().unwrap_or_default()}</span>
                            </header>
                            <p class="course-detail__description">{course.description.clone()}</p>
                            <div class="course-detail__stats">
                                <span>{course.region.clone().unwrap_or_default()}</span>
                                <span>{format::stars(course.rating_avg)}" "{format::rating_label(course.rating_avg, course.review_count)}</span>
                                <span>{format!("{} purchases", course.purchase_count)}</span>
                                <span>{format::price(course.price)}</span>
                            </div>
                            <div class="course-detail__actions">
                                <Show when=move || !unlocked>
                                    <button class="btn btn--primary" disabled=move || detail.busy.get() on:click=move |_| detail.purchase()>
                                        {format!("Buy for {}", format::price(price))}
                                    </button>
                                </Show>
                                <Show when=move || !is_mine>
                                    <button class="btn" on:click=move |_| detail.toggle_saved()>
                                        {if saved { "♥ Saved" } else { "♡ Save" }}
                                    </button>
                                </Show>
                            </div>
                            {if unlocked {
                                view! { <PlaceList places=course.places.clone()/> }.into_any()
                            } else {
                                view! { <p class="course-detail__locked">"Purchase this course to see its places."</p> }.into_any()
                            }}
                        </article>
                    }
                    .into_any()
                }
            }}
            <section class="reviews">
                <h2>"Reviews"</h2>
                <Show when=reviewable>
                    <form class="review-form" on:submit=on_review>
                        <select
                            class="review-form__rating"
                            prop:value=move || rating.get().to_string()
                            on:change=move |ev| rating.set(event_target_value(&ev).parse().unwrap_or(0))
                        >
                            {(1..=5_i64)
                                .rev()
                                .map(|n| {
                                    #[allow(clippy::cast_precision_loss)]
                                    let label = format::stars(n as f64);
                                    view! { <option value=n.to_string()>{label}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        <textarea
                            class="review-form__content"
                            rows="3"
                            maxlength="500"
                            placeholder="How was the date? (10-500 characters)"
                            prop:value=move || review_text.get()
                            on:input=move |ev| review_text.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary" type="submit">"Post review"</button>
                    </form>
                </Show>
                <Show when=move || detail.reviews.get().is_empty()>
                    <p class="page__hint">"No reviews yet."</p>
                </Show>
                <ul class="review-list">
                    <For
                        each=move || detail.reviews.get()
                        key=|r| r.id.clone()
                        children=move |review| view! { <ReviewItem review=review/> }
                    />
                </ul>
            </section>
        </main>
    }
}

#[component]
pub(crate) fn ReviewItem(review: Review) -> impl IntoView {
    #[allow(clippy::cast_precision_loss)]
    let stars = format::stars(review.rating as f64);
    view! {
        <li class="review">
            <div class="review__header">
                <span class="review__stars">{stars}</span>
                <span class="review__author">{review.author_nickname}</span>
                <span class="review__date">{format::date(review.created_at.as_deref())}</span>
            </div>
            {review.course_title.map(|t| view! { <a class="review__course" href=format!("/list/{}", review.shared_course_id)>{t}</a> })}
            <p class="review__content">{review.content}</p>
        </li>
    }
}

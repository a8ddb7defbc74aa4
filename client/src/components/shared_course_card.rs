//! Marketplace listing card.

use leptos::prelude::*;

use crate::net::types::SharedCourse;
use crate::util::format;

/// Summary card linking to `/list/{id}`.
#[component]
pub fn SharedCourseCard(course: SharedCourse) -> impl IntoView {
    let href = format!("/list/{}", course.id);
    let region = course.region.clone().unwrap_or_default();
    let author = course.author_nickname.clone().unwrap_or_default();
    let badge = if course.is_mine {
        Some("Mine")
    } else if course.purchased {
        Some("Purchased")
    } else {
        None
    };

    view! {
        <a class="course-card" href=href>
            <div class="course-card__header">
                <h3 class="course-card__title">{course.title.clone()}</h3>
                {badge.map(|b| view! { <span class="course-card__badge">{b}</span> })}
            </div>
            <p class="course-card__description">{course.description.clone()}</p>
            <div class="course-card__meta">
                <span class="course-card__region">{region}</span>
                <span class="course-card__author">{author}</span>
            </div>
            <div class="course-card__footer">
                <span class="course-card__stars">{format::stars(course.rating_avg)}</span>
                <span class="course-card__rating">{format::rating_label(course.rating_avg, course.review_count)}</span>
                <span class="course-card__price">{format::price(course.price)}</span>
                {course.saved.then(|| view! { <span class="course-card__saved" title="Saved">"♥"</span> })}
            </div>
        </a>
    }
}

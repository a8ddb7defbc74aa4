//! Ordered list of course stops.

use leptos::prelude::*;

use crate::net::types::Place;

/// Renders places in visiting order. Shows `empty_label` when there are none.
#[component]
pub fn PlaceList(places: Vec<Place>, #[prop(optional, into)] empty_label: Option<String>) -> impl IntoView {
    if places.is_empty() {
        let label = empty_label.unwrap_or_else(|| "No places yet.".to_owned());
        return view! { <p class="place-list__empty">{label}</p> }.into_any();
    }

    view! {
        <ol class="place-list">
            {places
                .into_iter()
                .enumerate()
                .map(|(i, place)| {
                    let meta = [place.category.clone(), place.address.clone()]
                        .into_iter()
                        .flatten()
                        .filter(|s| !s.trim().is_empty())
                        .collect::<Vec<_>>()
                        .join(" · ");
                    view! {
                        <li class="place-list__item">
                            <span class="place-list__index">{i + 1}</span>
                            <div class="place-list__body">
                                <strong class="place-list__name">{place.name}</strong>
                                {(!meta.is_empty()).then(move || view! { <span class="place-list__meta">{meta}</span> })}
                                <p class="place-list__description">{place.description}</p>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
    .into_any()
}

use leptos::*;
use leptos::logging::log;
use crate::models::filter::FilterOption;
use crate::models::review::RatingSummary;
use crate::components::star_rating::StarRating;
use crate::review_view::{star_states, FilterEvent, ReviewListState};

/// Aggregate score shown next to the filter bar.
#[component]
pub fn RatingOverview(summary: RatingSummary) -> impl IntoView {
    view! {
        <div class="rating-overview">
            <div class="rating-score">
                { summary.score_display() }
                <span class="rating-out-of">" / 5"</span>
            </div>
            <StarRating stars=star_states(summary.filled_stars()) />
        </div>
    }
}

/// Mutually exclusive filter buttons. Only the selected one is highlighted,
/// and none is before the first click.
#[component]
pub fn FilterBar(filters: Vec<FilterOption>, state: RwSignal<ReviewListState>) -> impl IntoView {
    let select = move |index: usize| {
        log!("[REVIEWS] Filter {} selected", index);
        state.update(|current| *current = current.apply(FilterEvent::Select(index)));
    };

    view! {
        <div class="filter-bar">
            {
                filters.into_iter().enumerate().map(|(index, filter)| {
                    let is_active = move || state.with(|current| current.is_active(index));
                    view! {
                        <button
                            class="filter-btn"
                            class:active=is_active
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| select(index)
                        >
                            { filter.display_label() }
                        </button>
                    }
                }).collect::<Vec<_>>()
            }
        </div>
    }
}

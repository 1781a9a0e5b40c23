use leptos::*;
use crate::review_view::StarState;

const STAR_GLYPH: &str = "★";

/// Row of five star glyphs.
#[component]
pub fn StarRating(stars: [StarState; 5]) -> impl IntoView {
    view! {
        <div class="stars">
            {
                stars.into_iter().map(|state| {
                    view! {
                        <span class=state.class()>{ STAR_GLYPH }</span>
                    }
                }).collect::<Vec<_>>()
            }
        </div>
    }
}

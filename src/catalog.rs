/// Loading of the review page data bundled with the storefront.
use std::collections::HashSet;

use leptos::logging::{log, warn};

use crate::error::StorefrontError;
use crate::models::review::MAX_RATING;
use crate::models::ReviewPageData;

const MOCK_REVIEWS: &str = include_str!("../data/mock_reviews.json");

/// Decode and validate page data from JSON.
pub fn parse_page_data(json: &str) -> Result<ReviewPageData, StorefrontError> {
    let data: ReviewPageData = serde_json::from_str(json)?;
    validate(&data)?;
    log!(
        "[CATALOG] Loaded {} reviews and {} filters",
        data.reviews.len(),
        data.filters.len()
    );
    Ok(data)
}

/// Page data compiled into the crate.
pub fn bundled() -> Result<ReviewPageData, StorefrontError> {
    parse_page_data(MOCK_REVIEWS)
}

/// Bundled page data, or an empty page if it cannot be loaded.
pub fn bundled_or_empty() -> ReviewPageData {
    bundled().unwrap_or_else(|err| {
        warn!("[CATALOG] Rendering empty review page: {}", err);
        ReviewPageData::default()
    })
}

fn validate(data: &ReviewPageData) -> Result<(), StorefrontError> {
    let mut seen = HashSet::new();
    for review in &data.reviews {
        if !(1..=MAX_RATING).contains(&review.rating) {
            return Err(StorefrontError::RatingOutOfRange {
                review_id: review.id,
                rating: review.rating,
            });
        }
        if !seen.insert(review.id) {
            return Err(StorefrontError::DuplicateReviewId(review.id));
        }
    }
    Ok(())
}

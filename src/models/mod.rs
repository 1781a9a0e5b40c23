pub mod filter;
pub mod review;

use serde::{Deserialize, Serialize};

use filter::FilterOption;
use review::{RatingSummary, Review};

/// Everything the review page renders, injected as a single bundle.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReviewPageData {
    pub summary: RatingSummary,
    pub filters: Vec<FilterOption>,
    pub reviews: Vec<Review>,
}

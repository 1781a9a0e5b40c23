// src/models/review.rs
use serde::{Deserialize, Serialize};

/// Number of stars in every rating row.
pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,                         // Stable identifier, used as the list key
    pub username: String,                // Display name of the reviewer
    pub avatar: String,                  // URI of the reviewer's avatar
    pub rating: u8,                      // Star rating in 1..=5
    pub variant: String,                 // Product option the reviewer bought, e.g. "UK 8 (42)"
    pub content: String,                 // Free-text review body
    #[serde(default)]
    pub images: Vec<String>,             // Image URIs attached to the review, in display order
    pub date: String,                    // Pre-formatted timestamp, displayed as-is
    #[serde(default)]
    pub seller_response: Option<String>, // Optional reply from the seller
}

impl Review {
    /// Seller reply, treating an empty string the same as a missing one.
    pub fn seller_response(&self) -> Option<&str> {
        self.seller_response
            .as_deref()
            .filter(|response| !response.is_empty())
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Aggregate score shown above the filter bar.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    pub score: f32,
}

impl RatingSummary {
    /// Score formatted with one decimal, e.g. "4.9".
    pub fn score_display(&self) -> String {
        format!("{:.1}", self.score)
    }

    /// Number of filled stars in the summary row.
    pub fn filled_stars(&self) -> u8 {
        if self.score.is_nan() || self.score <= 0.0 {
            0
        } else {
            self.score.round().min(f32::from(MAX_RATING)) as u8
        }
    }
}

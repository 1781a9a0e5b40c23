//! View state of the product reviews page, kept free of rendering so it can be
//! driven directly in tests.
use crate::models::review::{Review, MAX_RATING};

/// Fill state of a single star glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarState {
    Active,
    Inactive,
}

impl StarState {
    pub fn class(self) -> &'static str {
        match self {
            StarState::Active => "star star--active",
            StarState::Inactive => "star star--inactive",
        }
    }
}

/// Left-to-right star states for a rating. The first `rating` are active.
pub fn star_states(rating: u8) -> [StarState; MAX_RATING as usize] {
    let mut stars = [StarState::Inactive; MAX_RATING as usize];
    for star in stars.iter_mut().take(usize::from(rating)) {
        *star = StarState::Active;
    }
    stars
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEvent {
    Select(usize),
}

/// `active_filter` starts as `None`: all reviews are listed and no filter
/// button is highlighted until one is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewListState {
    pub active_filter: Option<usize>,
}

impl ReviewListState {
    pub fn apply(self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::Select(index) => Self {
                active_filter: Some(index),
            },
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_filter == Some(index)
    }
}

/// Indices of the highlighted filters among `count` options.
pub fn active_filters(count: usize, state: ReviewListState) -> Vec<usize> {
    (0..count).filter(|index| state.is_active(*index)).collect()
}

/// Everything a single review block shows, derived from the record.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewBlock {
    pub id: u32,
    pub username: String,
    pub avatar: String,
    pub stars: [StarState; MAX_RATING as usize],
    pub variant: String,
    pub content: String,
    /// `None` when the review has no images.
    pub images: Option<Vec<String>>,
    pub date: String,
    pub seller_response: Option<String>,
}

impl From<&Review> for ReviewBlock {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            username: review.username.clone(),
            avatar: review.avatar.clone(),
            stars: star_states(review.rating),
            variant: review.variant.clone(),
            content: review.content.clone(),
            images: review.has_images().then(|| review.images.clone()),
            date: review.date.clone(),
            seller_response: review.seller_response().map(str::to_owned),
        }
    }
}

/// Review blocks in input order.
///
/// The active filter does not narrow this list; selecting a filter only
/// changes how the filter bar is drawn.
pub fn review_blocks(reviews: &[Review]) -> Vec<ReviewBlock> {
    reviews.iter().map(ReviewBlock::from).collect()
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("malformed review data: {0}")]
    MalformedData(#[from] serde_json::Error),
    #[error("review {review_id} has rating {rating}, expected 1 to 5")]
    RatingOutOfRange { review_id: u32, rating: u8 },
    #[error("review id {0} appears more than once")]
    DuplicateReviewId(u32),
}

use leptos::*;
use crate::catalog;
use crate::components::filter_bar::{FilterBar, RatingOverview};
use crate::components::star_rating::StarRating;
use crate::models::ReviewPageData;
use crate::review_view::{review_blocks, ReviewBlock, ReviewListState};

/// Product reviews page backed by the bundled mock data.
#[component]
pub fn ReviewPage() -> impl IntoView {
    view! { <ProductReviews data=catalog::bundled_or_empty() /> }
}

/// Rating summary, filter bar and the list of reviews.
///
/// Reviews render in the order given. Selecting a filter changes its
/// highlight but not the list.
#[component]
pub fn ProductReviews(data: ReviewPageData) -> impl IntoView {
    let ReviewPageData { summary, filters, reviews } = data;
    let state = create_rw_signal(ReviewListState::default());
    let blocks = review_blocks(&reviews);

    view! {
        <div class="product-reviews">
            <h2>{ "Đánh giá sản phẩm" }</h2>
            <div class="reviews-overview">
                <RatingOverview summary=summary />
                <FilterBar filters=filters state=state />
            </div>
            <div class="reviews-list">
                <For
                    each=move || blocks.clone()
                    key=|block| block.id
                    children=|block| view! { <ReviewCard block=block /> }
                />
            </div>
        </div>
    }
}

#[component]
pub fn ReviewCard(block: ReviewBlock) -> impl IntoView {
    let ReviewBlock {
        id,
        username,
        avatar,
        stars,
        variant,
        content,
        images,
        date,
        seller_response,
    } = block;
    let avatar_alt = username.clone();

    view! {
        <div class="review-card" data-review-id=id.to_string()>
            <div class="review-avatar">
                <img src=avatar alt=avatar_alt />
            </div>
            <div class="review-body">
                <div class="review-username">{ username }</div>
                <StarRating stars=stars />
                <div class="review-variant">{ format!("Phân loại: {}", variant) }</div>
                <p class="review-content">{ content }</p>
                {
                    images.map(|images| view! {
                        <div class="review-images">
                            {
                                images.into_iter().map(|src| view! {
                                    <div class="review-thumb">
                                        <img src=src alt="review-img" />
                                    </div>
                                }).collect::<Vec<_>>()
                            }
                        </div>
                    })
                }
                <div class="review-date">{ date }</div>
                {
                    seller_response.map(|response| view! {
                        <div class="seller-response">
                            <div class="seller-response-title">{ "Phản hồi của Người bán:" }</div>
                            <p class="seller-response-text">{ response }</p>
                        </div>
                    })
                }
                <div class="review-actions">
                    <button class="review-action review-action--helpful">
                        <span class="icon">{ "👍" }</span>
                        { " Hữu ích" }
                    </button>
                    <button class="review-action review-action--comment">
                        <span class="icon">{ "💬" }</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#![allow(dead_code)]
use storefront::models::filter::FilterOption;
use storefront::models::review::{RatingSummary, Review};
use storefront::models::ReviewPageData;

pub fn review(id: u32, images: &[&str], seller_response: Option<&str>) -> Review {
    Review {
        id,
        username: format!("buyer{id}"),
        avatar: format!("https://i.pravatar.cc/150?img={id}"),
        rating: 5,
        variant: format!("UK {id}"),
        content: format!("Giày đẹp số {id} 😂"),
        images: images.iter().map(|s| s.to_string()).collect(),
        date: "21/06/2025 10:30".to_string(),
        seller_response: seller_response.map(str::to_string),
    }
}

pub fn filters() -> Vec<FilterOption> {
    [
        ("Tất cả", None),
        ("5 Sao", Some(643)),
        ("4 Sao", Some(20)),
        ("3 Sao", Some(5)),
        ("2 Sao", Some(1)),
        ("1 Sao", Some(0)),
        ("Có Bình luận", Some(191)),
        ("Có Hình ảnh / Video", Some(101)),
    ]
    .into_iter()
    .map(|(label, count)| FilterOption::new(label, count))
    .collect()
}

/// Two reviews shaped like the storefront sample: one with two images and a
/// seller reply, one with neither.
pub fn sample_page() -> ReviewPageData {
    ReviewPageData {
        summary: RatingSummary { score: 4.9 },
        filters: filters(),
        reviews: vec![
            review(
                1,
                &["https://img.test/one.jpg", "https://img.test/two.jpg"],
                Some("Cảm ơn bạn ❤️"),
            ),
            review(2, &[], None),
        ],
    }
}

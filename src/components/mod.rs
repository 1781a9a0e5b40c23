pub mod filter_bar;
pub mod reviews_list;
pub mod star_rating;

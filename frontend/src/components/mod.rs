pub mod error_boundary;
pub mod food_filters;
pub mod food_item_card;
pub mod loading_indicator;
pub mod navbar;
pub mod post_card;
pub mod search_input_top_bar;

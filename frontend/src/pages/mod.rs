pub mod discussion_page;
pub mod food_page;

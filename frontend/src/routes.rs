use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::discussion_page::DiscussionPage;
use crate::pages::food_page::FoodPage;

// Filter state lives in the query string, not in the route segments.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    FoodPage {},


    #[route("/discussion")]
    DiscussionPage {},

}

//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdQuestionAnswer, MdStore};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::{error_boundary::GlobalErrorBoundary, search_input_top_bar::SearchInputTopBar};
use crate::data_definitions::filter_context::use_filters;
use crate::routes::Route;


/// Shared layout: header with links and search bar, page below.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let mut filters = use_filters();
    // links push a new url the filter store has not written
    use_effect(use_reactive((&route,), move |_| filters.sync_location()));

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            header {
                id: "x-nav-header",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    gap: 24px;
                    height: 76px;
                    padding: 0 16px;
                    background-color: #F8FCFF;
                    border-bottom: 1px solid rgb(164, 164, 164);
                ",
                SearchInputTopBar {}
                div {
                    style: "display:flex; flex-direction: row; gap: 24px;",
                    IconLink { to: Route::FoodPage {}, icon: MdStore, label: "تبادل غذا".to_string() }
                    IconLink { to: Route::DiscussionPage {}, icon: MdQuestionAnswer, label: "گفتگو".to_string() }
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "display:flex; align-items:center; gap: 6px; color:#1C212D;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
                "{label}"
            }
        }
    }
}

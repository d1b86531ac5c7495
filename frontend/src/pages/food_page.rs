//! Food exchange listing, filtered by the dropdowns and the search bar.

use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    api::posts_api::{fetch_food_items, food_search_keys, use_api_client},
    components::{
        error_boundary::ComponentErrorDisplay, food_filters::FoodFilters,
        food_item_card::FoodItemCard, loading_indicator::LoadingIndicator,
    },
    data_definitions::filter_context::use_filters,
};

#[component]
pub fn FoodPage() -> Element {
    let filters = use_filters();
    let client = use_api_client();
    // re-runs whenever a filter of this page changes
    let mut food_items = use_resource(move || {
        let search = filters.serialize_search(Some(food_search_keys()));
        let client = client.clone();
        async move { fetch_food_items(client, search).await }
    });

    let state = match &*food_items.read() {
        None => None,
        Some(Ok(items)) => Some(Ok(items.clone())),
        Some(Err(err)) => Some(Err(format!("{err:#}"))),
    };

    let content = match state {
        None => rsx! {
            LoadingIndicator { message: "در حال دریافت اطلاعات غذاها...".to_string() }
        },
        Some(Err(err)) => {
            warn!("Failed to load food items: {err}");
            rsx! {
                ComponentErrorDisplay {
                    error_txt: format!("خطا در دریافت اطلاعات غذاها: {err}"),
                    button {
                        onclick: move |_| food_items.restart(),
                        "تلاش دوباره"
                    }
                }
            }
        }
        Some(Ok(items)) if items.is_empty() => rsx! {
            p { class: "empty-state", "غذایی با این فیلترها پیدا نشد" }
        },
        Some(Ok(items)) => rsx! {
            div {
                class: "food-grid",
                for item in items {
                    FoodItemCard { key: "{item.id}", item }
                }
            }
        },
    };

    rsx! {
        div {
            class: "food-page-container",
            FoodFilters {}
            {content}
        }
    }
}

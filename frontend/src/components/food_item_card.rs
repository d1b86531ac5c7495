use common::post::FoodItem;
use dioxus::prelude::*;

use crate::components::food_filters::{LOCATION_OPTIONS, MEAL_OPTIONS};

fn label_for(options: &[(&str, &'static str)], value: &str) -> String {
    options
        .iter()
        .find(|(option, _)| *option == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[component]
pub fn FoodItemCard(item: FoodItem) -> Element {
    let meal = label_for(&MEAL_OPTIONS, &item.meal_type);
    let location = label_for(&LOCATION_OPTIONS, &item.location);
    let price = format!("{:.0} تومان", item.price);
    let card_class = if item.is_sold_out { "food-card sold-out" } else { "food-card" };

    rsx! {
        div {
            class: card_class,
            dir: "rtl",
            h3 { "{item.name}" }
            p { "{meal} - {location}" }
            p { "{item.date}" }
            p { class: "food-price", "{price}" }
            if item.is_sold_out {
                span { class: "sold-out-badge", "تمام شد" }
            }
        }
    }
}

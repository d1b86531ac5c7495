//! Meal / day / location dropdowns of the food exchange page.

use common::search_value::Day;
use dioxus::prelude::*;

use crate::data_definitions::filter_context::use_filters;

pub const MEAL_OPTIONS: [(&str, &str); 3] = [
    ("", "همه وعده‌ها"),
    ("lunch", "ناهار"),
    ("dinner", "شام"),
];

pub const LOCATION_OPTIONS: [(&str, &str); 11] = [
    ("", "همه سلف‌ها"),
    ("yas", "سلف یاس"),
    ("dormitory_f", "خوابگاه خواهران"),
    ("central_m", "سلف مرکزی"),
    ("rashid", "خوابگاه رشید"),
    ("hakimieh", "خوابگاه حکیمیه"),
    ("seraj", "خوابگاه سراج"),
    ("bagheri", "خوابگاه باقری"),
    ("farjam", "خوابگاه فرجام"),
    ("majidieh", "خوابگاه مجیدیه"),
    ("basij", "کوی بسیج"),
];

fn day_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "همه روزها".to_string())];
    // no food service on fridays
    options.extend(
        Day::ALL
            .iter()
            .filter(|day| **day != Day::Friday)
            .map(|day| (day.as_str().to_string(), day.persian_name().to_string())),
    );
    options
}

#[component]
pub fn FoodFilters() -> Element {
    let mut filters = use_filters();
    let meal_options: Vec<(String, String)> = MEAL_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();
    let location_options: Vec<(String, String)> = LOCATION_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    rsx! {
        div {
            class: "food-filters",
            style: "display:flex; flex-direction: row; gap: 12px; padding: 12px;",
            FilterSelect { filter_key: "mealType".to_string(), options: meal_options }
            FilterSelect { filter_key: "day".to_string(), options: day_options() }
            FilterSelect { filter_key: "location".to_string(), options: location_options }
            button {
                class: "reset-filters",
                onclick: move |_| filters.reset_filters(),
                "حذف فیلترها"
            }
        }
    }
}

#[component]
fn FilterSelect(filter_key: String, options: Vec<(String, String)>) -> Element {
    let mut filters = use_filters();
    let selected = filters.get_filter(&filter_key, "");
    let key = filter_key.clone();

    rsx! {
        select {
            class: "filter-select",
            dir: "rtl",
            onchange: move |event: Event<FormData>| {
                filters.update_filter(&key, &event.value());
            },
            for (value, label) in options {
                option {
                    key: "{value}",
                    value: "{value}",
                    selected: value == selected,
                    "{label}"
                }
            }
        }
    }
}

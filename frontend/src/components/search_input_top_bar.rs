use common::search_query::FREE_TEXT_KEY;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::{data_definitions::filter_context::use_filters, routes::Route};


/// Search bar bound to the `q` URL parameter. Typing only edits the input;
/// the URL changes on Enter or on the search button.
#[component]
pub fn SearchInputTopBar() -> Element {
    let mut filters = use_filters();
    let url_query = use_memo(move || filters.get_filter(FREE_TEXT_KEY, ""));
    let mut input_value = use_signal(|| url_query());
    // when the url changes, the input follows it
    use_effect(move || {
        input_value.set(url_query());
    });
    let query_has_changed = use_memo(move || input_value() != url_query());
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });

    let placeholder = match use_route::<Route>() {
        Route::FoodPage {} => "جستجوی غذا",
        _ => "جستجو...",
    };

    let mut trigger_search = move || {
        filters.update_filter(FREE_TEXT_KEY, &input_value.peek());
    };

    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
            ",

            button {
                style: "border: none; background: none; cursor: pointer;",
                onclick: move |_| trigger_search(),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                dir: "rtl",
                placeholder: placeholder,
                style: "flex:1; border: none; outline: none; background: transparent; font-size: 18px;",
                value: "{input_value}",
                oninput: move |event: Event<FormData>| input_value.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        trigger_search();
                    }
                },
            }
        }
    }
}

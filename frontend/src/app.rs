use dioxus::prelude::*;

use crate::api::posts_api::new_api_client;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::filter_context::FilterProvider;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(new_api_client);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            FilterProvider {
                Router::<Route> {}
            }
        }
    }
}

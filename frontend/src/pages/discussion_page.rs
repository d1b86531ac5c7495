//! Discussion feed, narrowed by the search bar.

use common::post::Post;
use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    api::posts_api::{ReactionAction, fetch_discussion_posts, react_to_post, use_api_client},
    components::{
        error_boundary::ComponentErrorDisplay, loading_indicator::LoadingIndicator,
        post_card::PostCard,
    },
    data_definitions::filter_context::use_filters,
};

#[component]
pub fn DiscussionPage() -> Element {
    let filters = use_filters();
    let client = use_api_client();
    let mut page = use_signal(|| 1_u64);
    let search = use_memo(move || filters.serialize_search(None));
    // a new search starts from the first page
    use_effect(move || {
        search.read();
        if *page.peek() != 1 {
            page.set(1);
        }
    });

    let fetch_client = client.clone();
    let mut posts = use_resource(move || {
        let client = fetch_client.clone();
        let (page, search) = (page(), search());
        async move { fetch_discussion_posts(client, page, search).await }
    });

    let react = use_callback(move |(post, action): (Post, ReactionAction)| {
        let client = client.clone();
        spawn(async move {
            match react_to_post(client, post, action).await {
                Ok(_) => posts.restart(),
                Err(err) => warn!("Reaction failed: {err:#}"),
            }
        });
    });

    let state = match &*posts.read() {
        None => None,
        Some(Ok(response)) => Some(Ok(response.clone())),
        Some(Err(err)) => Some(Err(format!("{err:#}"))),
    };

    let content = match state {
        None => rsx! {
            LoadingIndicator { message: "در حال دریافت پست‌ها...".to_string() }
        },
        Some(Err(err)) => rsx! {
            ComponentErrorDisplay {
                error_txt: err,
                button {
                    onclick: move |_| posts.restart(),
                    "تلاش دوباره"
                }
            }
        },
        Some(Ok(response)) => {
            let has_more = response.pagination.has_more();
            let current_page = page();
            rsx! {
                div {
                    class: "post-feed",
                    if response.posts.is_empty() {
                        p { class: "empty-state", "پستی پیدا نشد" }
                    }
                    {response.posts.into_iter().map(|post| {
                        let clicked = post.clone();
                        rsx! {
                            PostCard {
                                key: "{post.id}",
                                post,
                                on_react: move |action| react.call((clicked.clone(), action)),
                            }
                        }
                    })}
                }
                div {
                    class: "pagination",
                    button {
                        disabled: current_page <= 1,
                        onclick: move |_| page -= 1,
                        "قبلی"
                    }
                    span { "{current_page}" }
                    button {
                        disabled: !has_more,
                        onclick: move |_| page += 1,
                        "بعدی"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "discussion-page",
            {content}
        }
    }
}

use common::post::Post;
use dioxus::prelude::*;

use crate::api::posts_api::ReactionAction;

#[component]
pub fn PostCard(post: Post, on_react: EventHandler<ReactionAction>) -> Element {
    let like_class = if post.is_liked { "reaction active" } else { "reaction" };
    let dislike_class = if post.is_disliked { "reaction active" } else { "reaction" };

    rsx! {
        div {
            class: "post-card",
            dir: "rtl",
            div {
                class: "post-header",
                img { class: "avatar", src: "{post.user.avatar}", alt: "{post.user.username}" }
                strong { "{post.user.name}" }
                span { class: "post-time", "{post.timestamp}" }
            }
            p { class: "post-content", "{post.content}" }
            if !post.tags.is_empty() {
                div {
                    class: "post-tags",
                    for tag in post.tags.iter() {
                        span { key: "{tag}", class: "tag", "#{tag}" }
                    }
                }
            }
            div {
                class: "post-actions",
                button {
                    class: like_class,
                    onclick: move |_| on_react.call(ReactionAction::Like),
                    "👍 {post.likes}"
                }
                button {
                    class: dislike_class,
                    onclick: move |_| on_react.call(ReactionAction::Dislike),
                    "👎 {post.dislikes}"
                }
                span { class: "comment-count", "💬 {post.comments}" }
            }
        }
    }
}

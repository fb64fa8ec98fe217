//! A single transcript entry: text or an uploaded image.

use leptos::prelude::*;

use crate::net::asset_url;
use crate::state::chat::{Message, Sender};

/// One chat bubble, aligned by sender. Image messages fetch the asset
/// from the backend's static path; text keeps its embedded line breaks
/// via `white-space: pre-wrap`.
#[component]
pub fn MessageBubble(msg: Message) -> impl IntoView {
    let side = match msg.sender {
        Sender::User => "message-bubble--user",
        Sender::Bot => "message-bubble--bot",
    };
    let class = format!("message-bubble {side}");

    let body = if let Some(image) = msg.image {
        view! { <img class="message-bubble__image" src=asset_url(&image) alt="Uploaded attachment"/> }
            .into_any()
    } else {
        view! { <p class="message-bubble__text">{msg.text.unwrap_or_default()}</p> }.into_any()
    };

    view! { <div class=class>{body}</div> }
}

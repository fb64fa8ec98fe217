//! Scrolling transcript of the conversation plus a busy indicator.

use leptos::html;
use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::state::chat::ChatState;

/// Transcript view. Messages render in insertion order; a spinner sits
/// below them while a request is in flight.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<html::Div>::new();

    // Keep the newest content in view as the transcript grows or the
    // reveal animation extends the tail.
    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-window" node_ref=messages_ref>
            {move || {
                let messages = chat.get().messages;
                if messages.is_empty() {
                    return view! {
                        <div class="chat-window__empty">"Ask a question to get started"</div>
                    }
                        .into_any();
                }

                messages
                    .into_iter()
                    .map(|msg| view! { <MessageBubble msg=msg/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
            {move || {
                chat.get()
                    .loading
                    .then(|| view! { <div class="chat-window__spinner" aria-label="Waiting for a reply"></div> })
            }}
        </div>
    }
}

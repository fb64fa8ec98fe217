//! Input row: draft field, image/PDF picker, mic toggle, send button.

use leptos::html;
use leptos::prelude::*;

use crate::app::SpeechHandle;
use crate::controller;
use crate::state::chat::ChatState;
use crate::state::composer::ComposerState;

/// Composer row. Pure input capture: every action is forwarded to the
/// controller, and the only state read here is what the bindings show.
#[component]
pub fn InputArea() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();
    let speech = expect_context::<SpeechHandle>();

    let file_ref = NodeRef::<html::Input>::new();

    let do_send = move || controller::submit(chat, composer);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    // The real file input stays hidden; the attach button proxies a
    // click to it.
    let on_attach = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_ref.get() {
                input.click();
            }
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            controller::upload(chat, file);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_mic = move |_| controller::toggle_mic(composer, speech);

    let mic_class = move || {
        if composer.get().listening {
            "input-area__mic input-area__mic--listening"
        } else {
            "input-area__mic"
        }
    };

    let can_send = move || composer.with(ComposerState::is_sendable);

    view! {
        <div class="input-area">
            <input
                class="input-area__file"
                type="file"
                accept="image/*,.pdf"
                node_ref=file_ref
                on:change=on_file_change
            />
            <button class="input-area__attach" title="Attach an image or PDF" on:click=on_attach>
                <svg viewBox="0 0 24 24" aria-hidden="true">
                    <rect x="3" y="5" width="18" height="14" rx="2"></rect>
                    <circle cx="8.5" cy="10.5" r="1.5"></circle>
                    <path d="M21 15l-5-5-11 9"></path>
                </svg>
            </button>

            <button class=mic_class title="Speak your question" on:click=on_mic>
                <svg viewBox="0 0 24 24" aria-hidden="true">
                    <rect x="9" y="3" width="6" height="11" rx="3"></rect>
                    <path d="M5 11a7 7 0 0 0 14 0"></path>
                    <line x1="12" y1="18" x2="12" y2="21"></line>
                </svg>
            </button>

            <input
                class="input-area__text"
                type="text"
                placeholder="Ask a question..."
                prop:value=move || composer.get().draft
                on:input=move |ev| composer.update(|c| c.draft = event_target_value(&ev))
                on:keydown=on_keydown
            />

            <button
                class="btn btn--primary input-area__send"
                on:click=move |_| do_send()
                disabled=move || !can_send()
            >
                "Send"
            </button>
        </div>
    }
}

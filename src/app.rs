//! Root application component and shared context wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_window::ChatWindow;
use crate::components::input_area::InputArea;
use crate::speech::SpeechInput;
use crate::state::chat::ChatState;
use crate::state::composer::ComposerState;

/// Handle to the optional speech capability adapter.
///
/// Browser recognizer handles are not `Send`, so the adapter lives in
/// arena-local storage rather than a signal.
pub type SpeechHandle = StoredValue<Option<SpeechInput>, LocalStorage>;

/// Root component: owns the conversation and composer state, probes
/// the speech capability once, and lays out the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let composer = RwSignal::new(ComposerState::default());
    provide_context(chat);
    provide_context(composer);

    // `None` when the host has no recognition support; the mic control
    // stays inert in that case.
    let speech: SpeechHandle = StoredValue::new_local(SpeechInput::attach(composer));
    provide_context(speech);

    view! {
        <Title text="EduGenie"/>

        <div class="app">
            <header class="app__header">
                <h1 class="app__brand">
                    "Edu" <span class="app__brand-accent">"Genie"</span>
                </h1>
                <p class="app__tagline">"ASK. LEARN. GROW"</p>
            </header>

            <ChatWindow/>
            <InputArea/>
        </div>
    }
}

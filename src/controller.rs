//! Chat controller: turns composer intents into state changes and
//! backend requests.
//!
//! All conversation mutations funnel through `ChatState` methods; this
//! module owns the side effects — dispatching requests, driving the
//! reveal animation, and flipping the mic.

use leptos::prelude::*;

use crate::app::SpeechHandle;
use crate::state::chat::ChatState;
use crate::state::composer::ComposerState;

#[cfg(feature = "hydrate")]
use crate::state::intent::RequestIntent;

/// Send the current draft.
///
/// Whitespace-only drafts are a no-op. Otherwise the draft becomes a
/// user message, the draft clears, and the classified request is
/// dispatched; its reply feeds the typing reveal and any failure
/// becomes a fixed bot message. The loading flag is cleared on every
/// exit path by a scoped reset guard.
pub fn submit(chat: RwSignal<ChatState>, composer: RwSignal<ComposerState>) {
    let draft = composer.with(|c| c.draft.clone());
    let Some(intent) = chat.try_update(|c| c.submit(&draft)).flatten() else {
        return;
    };
    composer.update(|c| c.draft.clear());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = {
            let _loading = LoadingReset(chat);
            run_request(intent).await
        };
        match outcome {
            Ok(reply) => crate::reveal::reveal_reply(chat, reply).await,
            Err(err) => {
                leptos::logging::warn!("request failed: {err}");
                chat.update(ChatState::request_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = intent;
}

#[cfg(feature = "hydrate")]
async fn run_request(intent: RequestIntent) -> Result<String, String> {
    match intent {
        RequestIntent::Ask { question } => crate::net::api::ask(&question)
            .await
            .map(crate::net::types::AskResponse::text_or_fallback),
        RequestIntent::ExtractText { image_path } => crate::net::api::extract_text(&image_path)
            .await
            .map(crate::net::types::ExtractTextResponse::text_or_fallback),
    }
}

/// Clears the loading flag when the request scope exits, success or
/// failure alike.
#[cfg(feature = "hydrate")]
struct LoadingReset(RwSignal<ChatState>);

#[cfg(feature = "hydrate")]
impl Drop for LoadingReset {
    fn drop(&mut self) {
        let _ = self.0.try_update(|c| c.loading = false);
    }
}

/// Upload the chosen file and record the returned image reference.
#[cfg(feature = "hydrate")]
pub fn upload(chat: RwSignal<ChatState>, file: web_sys::File) {
    leptos::task::spawn_local(async move {
        match crate::net::api::upload_image(&file).await {
            Ok(resp) => chat.update(|c| c.record_upload(resp.image_url)),
            Err(err) => {
                leptos::logging::warn!("image upload failed: {err}");
                chat.update(ChatState::upload_failed);
            }
        }
    });
}

/// Flip the mic: stop when listening, start when idle. Inert when the
/// speech capability is absent.
pub fn toggle_mic(composer: RwSignal<ComposerState>, speech: SpeechHandle) {
    let listening = composer.with(|c| c.listening);
    speech.with_value(|adapter| {
        let Some(adapter) = adapter else {
            return;
        };
        if listening {
            adapter.stop();
            composer.update(|c| c.listening = false);
        } else if adapter.start() {
            composer.update(|c| c.listening = true);
        }
    });
}

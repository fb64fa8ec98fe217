//! Typing reveal: simulated incremental arrival of a reply that is
//! already fully known.
//!
//! The full text is in memory before the animation starts; this is a
//! cosmetic timer loop, not a network stream. Each reply's animation
//! holds the token from `begin_reveal` and stops as soon as a
//! tick is rejected, which happens when a newer reply has started its
//! own reveal or the transcript tail has moved on.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Delay between revealed characters.
#[cfg(feature = "hydrate")]
const CHAR_INTERVAL: std::time::Duration = std::time::Duration::from_millis(20);

/// Animate `reply` onto the transcript tail, one character per tick.
pub async fn reveal_reply(chat: RwSignal<ChatState>, reply: String) {
    let Some(token) = chat.try_update(ChatState::begin_reveal) else {
        return;
    };

    let mut boundary = 0;
    for ch in reply.chars() {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(CHAR_INTERVAL).await;

        boundary += ch.len_utf8();
        let prefix = reply[..boundary].to_owned();
        let applied = chat
            .try_update(|c| c.apply_reveal(token, prefix))
            .unwrap_or(false);
        if !applied {
            return;
        }
    }
}

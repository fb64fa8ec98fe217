#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::state::intent::RequestIntent;

/// Fixed reply shown when an ask/extract request fails.
pub const ERROR_REPLY: &str = "Error processing your request";
/// Fixed reply shown when an image upload fails.
pub const UPLOAD_ERROR_REPLY: &str = "Error uploading image";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry: text or an uploaded image reference.
///
/// Construct through [`Message::user_text`], [`Message::bot_text`], or
/// [`Message::user_image`] so exactly one of `text`/`image` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: Option<String>,
    pub image: Option<String>,
}

impl Message {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: Some(text.into()),
            image: None,
        }
    }

    pub fn bot_text(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: Some(text.into()),
            image: None,
        }
    }

    pub fn user_image(image_path: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: None,
            image: Some(image_path.into()),
        }
    }
}

/// Generation stamp for one reveal animation.
///
/// Each reply's reveal holds the token returned by
/// [`ChatState::begin_reveal`]; a tick whose token no longer matches
/// the current generation is discarded, so overlapping animations
/// cannot interleave writes on the transcript tail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealToken(u64);

/// Conversation state: the transcript, the busy flag, and the last
/// uploaded image reference used to disambiguate OCR requests.
///
/// Owned by the root `App` as a single `RwSignal`; the transcript grows
/// monotonically and only the trailing bot message is ever rewritten,
/// by the reveal animation.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub loading: bool,
    pub last_uploaded_image: Option<String>,
    reveal_generation: u64,
}

impl ChatState {
    /// Handle a send action for the given draft.
    ///
    /// Empty or whitespace-only drafts are a no-op and return `None`.
    /// Otherwise the draft is appended verbatim as a user message,
    /// `loading` is set, and the backend intent is returned for the
    /// controller to dispatch.
    pub fn submit(&mut self, draft: &str) -> Option<RequestIntent> {
        if draft.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user_text(draft));
        self.loading = true;
        Some(RequestIntent::classify(
            draft,
            self.last_uploaded_image.as_deref(),
        ))
    }

    /// Start a reveal: append an empty bot placeholder and return the
    /// token the animation must present on every tick.
    pub fn begin_reveal(&mut self) -> RevealToken {
        self.reveal_generation += 1;
        self.messages.push(Message::bot_text(""));
        RevealToken(self.reveal_generation)
    }

    /// Replace the trailing bot message's text with the next prefix.
    ///
    /// Returns `false` without writing when the token is stale or the
    /// transcript tail is no longer a bot text message; the caller
    /// should stop its animation.
    pub fn apply_reveal(&mut self, token: RevealToken, prefix: String) -> bool {
        if token.0 != self.reveal_generation {
            return false;
        }
        match self.messages.last_mut() {
            Some(tail) if tail.sender == Sender::Bot && tail.text.is_some() => {
                tail.text = Some(prefix);
                true
            }
            _ => false,
        }
    }

    /// Record an ask/extract failure as a fixed bot reply.
    pub fn request_failed(&mut self) {
        self.messages.push(Message::bot_text(ERROR_REPLY));
    }

    /// Record a successful upload: store the returned reference and
    /// append a user message displaying the image.
    ///
    /// This is the only place the reference is set; it is never cleared.
    pub fn record_upload(&mut self, image_path: impl Into<String>) {
        let image_path = image_path.into();
        self.last_uploaded_image = Some(image_path.clone());
        self.messages.push(Message::user_image(image_path));
    }

    /// Record an upload failure. The stored reference is untouched.
    pub fn upload_failed(&mut self) {
        self.messages.push(Message::bot_text(UPLOAD_ERROR_REPLY));
    }
}

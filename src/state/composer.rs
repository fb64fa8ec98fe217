#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Input-row state: the in-progress draft and the mic listening flag.
#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub draft: String,
    pub listening: bool,
}

impl ComposerState {
    /// Whether the draft has anything worth sending.
    pub fn is_sendable(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Append a finalized speech transcript to the draft, space-prefixed,
    /// and stop listening. Recognition is single-shot, so a result always
    /// ends the listening session.
    pub fn push_transcript(&mut self, transcript: &str) {
        self.draft.push(' ');
        self.draft.push_str(transcript);
        self.listening = false;
    }
}

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
    assert!(state.last_uploaded_image.is_none());
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_empty_draft_is_noop() {
    let mut state = ChatState::default();
    assert_eq!(state.submit(""), None);
    assert_eq!(state.submit("   \n\t "), None);
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn submit_appends_user_message_and_sets_loading() {
    let mut state = ChatState::default();
    let intent = state.submit("What is 2+2?");
    assert_eq!(
        intent,
        Some(RequestIntent::Ask {
            question: "What is 2+2?".to_owned()
        })
    );
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0], Message::user_text("What is 2+2?"));
    assert!(state.loading);
}

#[test]
fn submit_keyword_without_image_routes_to_ask() {
    let mut state = ChatState::default();
    let intent = state.submit("extract the text from this");
    assert!(matches!(intent, Some(RequestIntent::Ask { .. })));
}

#[test]
fn submit_keyword_with_image_routes_to_extract() {
    let mut state = ChatState::default();
    state.record_upload("uploads/a.png");
    let intent = state.submit("extract the text please");
    assert_eq!(
        intent,
        Some(RequestIntent::ExtractText {
            image_path: "uploads/a.png".to_owned()
        })
    );
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn begin_reveal_appends_empty_bot_placeholder() {
    let mut state = ChatState::default();
    state.begin_reveal();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0], Message::bot_text(""));
}

#[test]
fn apply_reveal_grows_tail_text() {
    let mut state = ChatState::default();
    let token = state.begin_reveal();
    assert!(state.apply_reveal(token, "H".to_owned()));
    assert!(state.apply_reveal(token, "He".to_owned()));
    assert!(state.apply_reveal(token, "Hello".to_owned()));
    assert_eq!(state.messages[0], Message::bot_text("Hello"));
}

#[test]
fn apply_reveal_rejects_stale_token() {
    let mut state = ChatState::default();
    let first = state.begin_reveal();
    let second = state.begin_reveal();

    // The older animation's tick is discarded.
    assert!(!state.apply_reveal(first, "stale".to_owned()));
    assert!(state.apply_reveal(second, "fresh".to_owned()));
    assert_eq!(state.messages[1], Message::bot_text("fresh"));
    // The first placeholder stays empty.
    assert_eq!(state.messages[0], Message::bot_text(""));
}

#[test]
fn apply_reveal_stops_when_tail_is_not_a_bot_message() {
    let mut state = ChatState::default();
    let token = state.begin_reveal();

    // A new submit pushes a user message onto the tail before the next
    // reveal generation starts.
    state.submit("another question");
    assert!(!state.apply_reveal(token, "late".to_owned()));
    assert_eq!(state.messages[0], Message::bot_text(""));
}

// =============================================================
// Failures
// =============================================================

#[test]
fn request_failed_appends_fixed_error_reply() {
    let mut state = ChatState::default();
    state.submit("hello");
    state.request_failed();
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1], Message::bot_text(ERROR_REPLY));
}

// =============================================================
// Uploads
// =============================================================

#[test]
fn record_upload_stores_reference_and_appends_image_message() {
    let mut state = ChatState::default();
    state.record_upload("uploads/a.png");
    assert_eq!(state.last_uploaded_image.as_deref(), Some("uploads/a.png"));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0], Message::user_image("uploads/a.png"));
}

#[test]
fn record_upload_replaces_previous_reference() {
    let mut state = ChatState::default();
    state.record_upload("uploads/a.png");
    state.record_upload("uploads/b.png");
    assert_eq!(state.last_uploaded_image.as_deref(), Some("uploads/b.png"));
}

#[test]
fn upload_failed_appends_error_and_keeps_reference() {
    let mut state = ChatState::default();
    state.record_upload("uploads/a.png");
    state.upload_failed();
    assert_eq!(state.messages[1], Message::bot_text(UPLOAD_ERROR_REPLY));
    assert_eq!(state.last_uploaded_image.as_deref(), Some("uploads/a.png"));
}

#[test]
fn upload_failed_without_prior_upload_stores_nothing() {
    let mut state = ChatState::default();
    state.upload_failed();
    assert!(state.last_uploaded_image.is_none());
    assert_eq!(state.messages[0], Message::bot_text(UPLOAD_ERROR_REPLY));
}

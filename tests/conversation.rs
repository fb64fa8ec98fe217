//! End-to-end transcript scenarios against the pure state layer.
//!
//! These walk the same sequence of state transitions the controller
//! performs around its network calls, with the request outcomes
//! supplied directly.

use edugenie::state::chat::{ChatState, ERROR_REPLY, Message, Sender};
use edugenie::state::intent::RequestIntent;

/// Drive a reveal to completion the way the timer loop does, recording
/// every intermediate tail text.
fn reveal_all(state: &mut ChatState, reply: &str) -> Vec<String> {
    let token = state.begin_reveal();
    let mut seen = vec![tail_text(state)];
    let mut boundary = 0;
    for ch in reply.chars() {
        boundary += ch.len_utf8();
        assert!(state.apply_reveal(token, reply[..boundary].to_owned()));
        seen.push(tail_text(state));
    }
    seen
}

fn tail_text(state: &ChatState) -> String {
    state
        .messages
        .last()
        .and_then(|m| m.text.clone())
        .unwrap_or_default()
}

#[test]
fn successful_ask_round_trip() {
    let mut state = ChatState::default();

    let intent = state.submit("What is 2+2?").expect("sendable draft");
    assert_eq!(
        intent,
        RequestIntent::Ask {
            question: "What is 2+2?".to_owned()
        }
    );
    assert!(state.loading);

    // Request resolves with {"response": "4"}; loading clears before
    // the reveal runs.
    state.loading = false;
    let prefixes = reveal_all(&mut state, "4");

    assert_eq!(prefixes, vec![String::new(), "4".to_owned()]);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0], Message::user_text("What is 2+2?"));
    assert_eq!(state.messages[1], Message::bot_text("4"));
}

#[test]
fn reveal_passes_through_every_prefix() {
    let mut state = ChatState::default();
    state.submit("hi").expect("sendable draft");
    state.loading = false;

    let prefixes = reveal_all(&mut state, "hey!");
    assert_eq!(prefixes, vec!["", "h", "he", "hey", "hey!"]);
}

#[test]
fn failed_ask_leaves_one_error_reply_and_no_loading() {
    let mut state = ChatState::default();
    state.submit("What is 2+2?").expect("sendable draft");

    // Request fails; the guard clears loading, then the fixed reply
    // is appended.
    state.loading = false;
    state.request_failed();

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].sender, Sender::Bot);
    assert_eq!(state.messages[1].text.as_deref(), Some(ERROR_REPLY));
    assert!(!state.loading);
}

#[test]
fn upload_then_extract_uses_stored_reference() {
    let mut state = ChatState::default();

    // Upload resolves with {"image_url": "uploads/a.png"}.
    state.record_upload("uploads/a.png");
    assert_eq!(state.messages[0], Message::user_image("uploads/a.png"));

    let intent = state.submit("extract the text please").expect("sendable draft");
    assert_eq!(
        intent,
        RequestIntent::ExtractText {
            image_path: "uploads/a.png".to_owned()
        }
    );
}

#[test]
fn extract_keyword_without_upload_falls_back_to_ask() {
    let mut state = ChatState::default();
    let intent = state
        .submit("extract the text from this")
        .expect("sendable draft");
    assert_eq!(
        intent,
        RequestIntent::Ask {
            question: "extract the text from this".to_owned()
        }
    );
}

#[test]
fn newer_reply_supersedes_an_unfinished_reveal() {
    let mut state = ChatState::default();
    state.submit("first").expect("sendable draft");
    state.loading = false;

    let first_token = state.begin_reveal();
    assert!(state.apply_reveal(first_token, "par".to_owned()));

    // Second submit lands while the first reveal is mid-flight.
    state.submit("second").expect("sendable draft");
    state.loading = false;
    let second_token = state.begin_reveal();

    // The first animation's next tick is rejected; the second proceeds.
    assert!(!state.apply_reveal(first_token, "part".to_owned()));
    assert!(state.apply_reveal(second_token, "done".to_owned()));

    let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_deref()).collect();
    assert_eq!(
        texts,
        vec![
            Some("first"),
            Some("par"),
            Some("second"),
            Some("done"),
        ]
    );
}

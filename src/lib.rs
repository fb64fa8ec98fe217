//! # edugenie
//!
//! Leptos + WASM chat client for the EduGenie tutoring backend.
//! The user types or speaks a question, optionally attaches an image or
//! PDF, and watches the reply arrive with a character-by-character
//! typing reveal. The backend is an external HTTP service exposing
//! three endpoints: `/ask`, `/extract_text`, and `/upload_image`.
//!
//! Pure state (transcript, composer draft, intent routing) lives in
//! [`state`] and is tested natively. Browser-only glue — HTTP via
//! `gloo-net`, the reveal timer, the Web Speech API adapter — is gated
//! behind the `hydrate` cargo feature so `cargo test` runs without a
//! browser.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod reveal;
pub mod speech;
pub mod state;

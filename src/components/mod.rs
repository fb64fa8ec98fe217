//! UI components for the chat page.

pub mod chat_window;
pub mod input_area;
pub mod message_bubble;

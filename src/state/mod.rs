//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `composer`, `intent`) so the
//! transcript logic stays pure and natively testable. Components hold
//! only `RwSignal` wrappers provided via context by the root `App`;
//! every mutation goes through a method on one of these structs.

pub mod chat;
pub mod composer;
pub mod intent;

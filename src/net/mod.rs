//! Backend endpoint contract and HTTP helpers.
//!
//! The backend lives at a fixed base URL and owns question answering,
//! OCR, and upload storage; this crate only speaks its three-endpoint
//! contract and serves uploaded assets back from the same host.

pub mod api;
pub mod types;

/// Base URL of the external backend.
pub const API_BASE: &str = "http://localhost:5000";

/// URL an uploaded asset can be fetched from for display.
///
/// Upload responses return paths like `/uploads/a.png`; the leading
/// slash is trimmed so the joined URL stays well-formed.
pub fn asset_url(image_path: &str) -> String {
    format!("{API_BASE}/{}", image_path.trim_start_matches('/'))
}

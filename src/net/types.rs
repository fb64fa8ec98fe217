//! Request and response payloads for the three backend endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Reply text when the ask response carries no answer.
pub const NO_ANSWER_FALLBACK: &str = "No answer found";
/// Reply text when the OCR response carries no text.
pub const NO_TEXT_FALLBACK: &str = "No text found";

/// `POST /ask` request body.
#[derive(Clone, Debug, Serialize)]
pub struct AskRequest {
    pub question: String,
}

/// `POST /ask` response body.
#[derive(Clone, Debug, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub response: Option<String>,
}

impl AskResponse {
    /// The answer text, or [`NO_ANSWER_FALLBACK`] when the field is
    /// absent or empty.
    pub fn text_or_fallback(self) -> String {
        or_fallback(self.response, NO_ANSWER_FALLBACK)
    }
}

/// `POST /extract_text` request body. The field name is part of the
/// backend contract.
#[derive(Clone, Debug, Serialize)]
pub struct ExtractTextRequest {
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

/// `POST /extract_text` response body.
#[derive(Clone, Debug, Deserialize)]
pub struct ExtractTextResponse {
    #[serde(default)]
    pub text: Option<String>,
}

impl ExtractTextResponse {
    /// The extracted text, or [`NO_TEXT_FALLBACK`] when the field is
    /// absent or empty.
    pub fn text_or_fallback(self) -> String {
        or_fallback(self.text, NO_TEXT_FALLBACK)
    }
}

/// `POST /upload_image` response body. The backend also sends a status
/// `message` field, which is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    pub image_url: String,
}

// Absent and empty are equivalent: the backend sends empty strings on
// its own error paths.
fn or_fallback(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => fallback.to_owned(),
    }
}

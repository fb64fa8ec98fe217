#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

/// Phrase that routes a draft to OCR instead of question answering.
const EXTRACT_PHRASE: &str = "extract the text";

/// Which backend request a submitted draft maps to.
///
/// Routing is a deliberately literal two-outcome rule: OCR requires
/// both the trigger phrase (case-insensitive substring) and a
/// previously uploaded image reference. Everything else is a question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestIntent {
    /// `POST /ask` with the draft as the question.
    Ask { question: String },
    /// `POST /extract_text` against the last uploaded image.
    ExtractText { image_path: String },
}

impl RequestIntent {
    /// Classify a non-empty draft against the last uploaded image.
    pub fn classify(draft: &str, last_uploaded_image: Option<&str>) -> Self {
        if let Some(image_path) = last_uploaded_image {
            if draft.to_lowercase().contains(EXTRACT_PHRASE) {
                return Self::ExtractText {
                    image_path: image_path.to_owned(),
                };
            }
        }
        Self::Ask {
            question: draft.to_owned(),
        }
    }
}

//! HTTP calls to the backend endpoints.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Native builds: stubs returning errors, since the endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure — transport error, non-2xx status, undecodable body —
//! collapses to `Err(String)`; the controller turns it into a fixed
//! transcript message. No retries or timeouts anywhere.

#![allow(clippy::unused_async)]

use super::types::{AskResponse, ExtractTextResponse};
#[cfg(feature = "hydrate")]
use super::types::UploadResponse;

/// Ask the backend a question via `POST /ask`.
pub async fn ask(question: &str) -> Result<AskResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::AskRequest {
            question: question.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&format!("{}/ask", super::API_BASE))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("ask failed: {}", resp.status()));
        }
        resp.json::<AskResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err("not available outside the browser".to_owned())
    }
}

/// Run OCR on a previously uploaded image via `POST /extract_text`.
pub async fn extract_text(image_path: &str) -> Result<ExtractTextResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ExtractTextRequest {
            image_path: image_path.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&format!("{}/extract_text", super::API_BASE))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("extract_text failed: {}", resp.status()));
        }
        resp.json::<ExtractTextResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image_path;
        Err("not available outside the browser".to_owned())
    }
}

/// Upload an image or PDF via multipart `POST /upload_image`.
///
/// The browser sets the multipart boundary itself, so no content-type
/// header is written here.
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: &web_sys::File) -> Result<UploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build form data".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "could not attach file".to_owned())?;

    let resp = gloo_net::http::Request::post(&format!("{}/upload_image", super::API_BASE))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("upload failed: {}", resp.status()));
    }
    resp.json::<UploadResponse>().await.map_err(|e| e.to_string())
}

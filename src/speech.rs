//! Speech-to-text capability adapter over the Web Speech API.
//!
//! The capability is environment-dependent: [`SpeechInput::attach`]
//! returns `None` when the host exposes neither `SpeechRecognition`
//! nor the `webkitSpeechRecognition` prefix, and the mic control stays
//! inert. Because of the prefix, the recognizer is reached through
//! `js-sys` reflection rather than typed `web-sys` bindings.
//!
//! Recognition is single-shot and non-interim: one utterance resolves
//! to one final transcript, which is appended (space-prefixed) to the
//! draft; listening implicitly ends. Recognition errors are logged and
//! clear the listening flag without touching the draft.

use leptos::prelude::*;

use crate::state::composer::ComposerState;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Handle on a browser speech recognizer wired to the composer.
///
/// Dropping the adapter detaches its callbacks and aborts any
/// in-progress recognition.
pub struct SpeechInput {
    #[cfg(feature = "hydrate")]
    recognition: JsValue,
    #[cfg(feature = "hydrate")]
    _on_result: Closure<dyn FnMut(JsValue)>,
    #[cfg(feature = "hydrate")]
    _on_error: Closure<dyn FnMut(JsValue)>,
}

impl SpeechInput {
    /// Probe the environment and wire a recognizer to the composer.
    pub fn attach(composer: RwSignal<ComposerState>) -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let recognition = construct_recognizer()?;
            let _ = js_sys::Reflect::set(&recognition, &"continuous".into(), &JsValue::FALSE);
            let _ = js_sys::Reflect::set(&recognition, &"interimResults".into(), &JsValue::FALSE);

            let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let Some(transcript) = first_transcript(&event) else {
                    return;
                };
                composer.update(|c| c.push_transcript(&transcript));
            });
            let _ = js_sys::Reflect::set(&recognition, &"onresult".into(), on_result.as_ref());

            let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let kind = js_sys::Reflect::get(&event, &"error".into())
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_else(|| "unknown".to_owned());
                leptos::logging::warn!("speech recognition error: {kind}");
                composer.update(|c| c.listening = false);
            });
            let _ = js_sys::Reflect::set(&recognition, &"onerror".into(), on_error.as_ref());

            Some(Self {
                recognition,
                _on_result: on_result,
                _on_error: on_error,
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = composer;
            None
        }
    }

    /// Start listening for one utterance. Returns whether the
    /// recognizer accepted the start (it throws if already running).
    pub fn start(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            call_method(&self.recognition, "start").is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    /// Stop the current recognition session, if any.
    pub fn stop(&self) {
        #[cfg(feature = "hydrate")]
        let _ = call_method(&self.recognition, "stop");
    }
}

impl Drop for SpeechInput {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = js_sys::Reflect::set(&self.recognition, &"onresult".into(), &JsValue::NULL);
            let _ = js_sys::Reflect::set(&self.recognition, &"onerror".into(), &JsValue::NULL);
            let _ = call_method(&self.recognition, "abort");
        }
    }
}

/// Construct a recognizer instance, trying the standard constructor
/// name first and the WebKit prefix second.
#[cfg(feature = "hydrate")]
fn construct_recognizer() -> Option<JsValue> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(name)) else {
            continue;
        };
        let Ok(ctor) = value.dyn_into::<js_sys::Function>() else {
            continue;
        };
        if let Ok(instance) = js_sys::Reflect::construct(&ctor, &js_sys::Array::new()) {
            return Some(instance);
        }
    }
    None
}

/// Pull `event.results[0][0].transcript` out of a recognition event.
#[cfg(feature = "hydrate")]
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = js_sys::Reflect::get(event, &"results".into()).ok()?;
    let first = js_sys::Reflect::get_u32(&results, 0).ok()?;
    let alternative = js_sys::Reflect::get_u32(&first, 0).ok()?;
    js_sys::Reflect::get(&alternative, &"transcript".into())
        .ok()?
        .as_string()
}

#[cfg(feature = "hydrate")]
fn call_method(target: &JsValue, name: &str) -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    let method = js_sys::Reflect::get(target, &JsValue::from_str(name))?;
    let method: js_sys::Function = method.dyn_into()?;
    method.call0(target)?;
    Ok(())
}

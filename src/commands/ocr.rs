//! OCR Binding
//!
//! Text recognition is delegated to Tesseract.js loaded by the page.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Tesseract, js_name = recognize)]
    async fn tesseract_recognize(image: JsValue, lang: &str, options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OcrError {
    #[error("text recognition failed: {0}")]
    Engine(String),
    #[error("unexpected recognition result: {0}")]
    Decode(String),
}

/// Progress message emitted by the engine's logger
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OcrProgress {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub progress: f64,
}

impl OcrProgress {
    pub fn percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

#[derive(Deserialize)]
struct RecognizeResult {
    data: RecognizeData,
}

#[derive(Deserialize)]
struct RecognizeData {
    #[serde(default)]
    text: String,
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Run recognition on an image file
pub async fn recognize_text(
    image: web_sys::File,
    lang: &str,
    on_progress: impl Fn(OcrProgress) + 'static,
) -> Result<String, OcrError> {
    debug!(name = %image.name(), size = image.size(), lang, "starting recognition");

    let logger = Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
        if let Ok(progress) = serde_wasm_bindgen::from_value::<OcrProgress>(message) {
            on_progress(progress);
        }
    });
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("logger"), logger.as_ref())
        .map_err(|e| OcrError::Engine(describe(&e)))?;

    let result = tesseract_recognize(image.into(), lang, options.into())
        .await
        .map_err(|e| OcrError::Engine(describe(&e)))?;
    // The engine may still hold the logger until the promise settles
    drop(logger);

    let parsed: RecognizeResult =
        serde_wasm_bindgen::from_value(result).map_err(|e| OcrError::Decode(e.to_string()))?;
    Ok(normalize_text(&parsed.data.text))
}

/// Strip trailing spaces and collapse runs of blank lines in engine output
pub fn normalize_text(raw: &str) -> String {
    let mut out = Vec::new();
    let mut blank_run = 0;
    for line in raw.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push(line);
    }
    out.join("\n").trim().to_string()
}

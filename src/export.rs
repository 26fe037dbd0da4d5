//! Draft Export
//!
//! Download the whole draft as a JSON document.

use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::draft::Draft;

pub const EXPORT_FILE_NAME: &str = "wedderburn-intake.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not encode the draft: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("browser refused the download: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for ExportError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ExportError::Dom(format!("{:?}", value))
    }
}

pub fn export_json(draft: &Draft) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(draft)?)
}

/// Offer the draft as a file download via a temporary object URL
pub fn download_draft(draft: &Draft) -> Result<(), ExportError> {
    let json = export_json(draft)?;
    let window = web_sys::window().ok_or(ExportError::NoWindow)?;
    let document = window.document().ok_or(ExportError::NoWindow)?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

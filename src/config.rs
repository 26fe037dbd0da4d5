//! Runtime Configuration

/// Key the draft is persisted under in local storage
pub const DRAFT_STORAGE_KEY: &str = "wedderburn.intake.draft";

const DEFAULT_OCR_LANGUAGE: &str = "eng";
const DEFAULT_TOAST_MS: u32 = 3500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Absolute origin the `/api/*` paths are resolved against
    pub api_base: String,
    pub storage_key: String,
    /// Tesseract language code
    pub ocr_language: String,
    /// How long transient notifications stay up
    pub toast_ms: u32,
}

impl AppConfig {
    /// Build-time overrides (`INTAKE_API_BASE`, `INTAKE_OCR_LANG`) win over
    /// `origin`, which is normally the serving page's origin.
    pub fn resolve(origin: Option<String>) -> Self {
        Self::from_parts(option_env!("INTAKE_API_BASE"), option_env!("INTAKE_OCR_LANG"), origin)
    }

    fn from_parts(api_base: Option<&str>, ocr_language: Option<&str>, origin: Option<String>) -> Self {
        let api_base = api_base
            .map(str::to_string)
            .or(origin)
            .unwrap_or_else(|| "http://localhost:8000".to_string());
        Self {
            api_base,
            storage_key: DRAFT_STORAGE_KEY.to_string(),
            ocr_language: ocr_language.unwrap_or(DEFAULT_OCR_LANGUAGE).to_string(),
            toast_ms: DEFAULT_TOAST_MS,
        }
    }

    /// Configuration for the page this app is served from
    pub fn from_window() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::resolve(origin)
    }
}

//! Intake Draft
//!
//! The single persisted record behind every view: wizard bookkeeping plus
//! an open tree of answers addressed by dotted paths.

mod storage;
#[cfg(test)]
pub(crate) mod strategies;
mod value;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::wizard::{StepKey, STEPS};

pub use storage::{BrowserStorage, DraftStorage, DraftStore, MemoryStorage, StorageError};
pub use value::{
    append_text_at_path, get_at_path, set_at_path, DraftValue, FieldMap, FileMeta, PathError,
};

/// Root keys owned by the wizard; answers may not be written there
pub const RESERVED_KEYS: &[&str] = &["currentStepIdx", "completedSteps", "lastSavedAt", "submissionId"];

/// In-progress intake answers plus wizard bookkeeping
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawDraft")]
pub struct Draft {
    #[serde(rename = "currentStepIdx")]
    pub current_step_idx: usize,
    #[serde(rename = "completedSteps")]
    pub completed_steps: BTreeSet<StepKey>,
    #[serde(rename = "lastSavedAt", skip_serializing_if = "Option::is_none")]
    pub last_saved_at: Option<String>,
    #[serde(rename = "submissionId", skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    #[serde(flatten)]
    pub fields: FieldMap,
}

/// Untyped shape accepted from storage or the server. Anything that does not
/// fit the typed model is dropped rather than rejected.
#[derive(Deserialize)]
struct RawDraft {
    #[serde(rename = "currentStepIdx", default)]
    current_step_idx: Value,
    #[serde(rename = "completedSteps", default)]
    completed_steps: Value,
    #[serde(rename = "lastSavedAt", default)]
    last_saved_at: Value,
    #[serde(rename = "submissionId", default)]
    submission_id: Value,
    #[serde(flatten)]
    rest: serde_json::Map<String, Value>,
}

impl From<RawDraft> for Draft {
    fn from(raw: RawDraft) -> Self {
        let current_step_idx = raw
            .current_step_idx
            .as_u64()
            .and_then(|idx| usize::try_from(idx).ok())
            .filter(|idx| *idx < STEPS.len())
            .unwrap_or(0);

        let completed_steps = raw
            .completed_steps
            .as_array()
            .map(|keys| {
                keys.iter()
                    .filter_map(Value::as_str)
                    .filter_map(StepKey::from_key)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            current_step_idx,
            completed_steps,
            last_saved_at: raw.last_saved_at.as_str().map(str::to_string),
            submission_id: raw.submission_id.as_str().map(str::to_string),
            fields: value::map_from_json(raw.rest),
        }
    }
}

impl Draft {
    pub fn get(&self, path: &str) -> Option<&DraftValue> {
        get_at_path(&self.fields, path)
    }

    pub fn set(&mut self, path: &str, value: DraftValue) -> Result<(), PathError> {
        check_reserved(path)?;
        set_at_path(&mut self.fields, path, value)
    }

    pub fn append_text(&mut self, path: &str, text: &str) -> Result<(), PathError> {
        check_reserved(path)?;
        append_text_at_path(&mut self.fields, path, text)
    }

    /// Text at `path`, or empty when absent or not text
    pub fn text(&self, path: &str) -> &str {
        self.get(path).and_then(DraftValue::as_text).unwrap_or("")
    }

    pub fn is_submitted(&self) -> bool {
        self.submission_id.is_some()
    }
}

fn check_reserved(path: &str) -> Result<(), PathError> {
    let root = path.split('.').next().unwrap_or(path);
    if RESERVED_KEYS.contains(&root) {
        return Err(PathError::Reserved { key: root.to_string() });
    }
    Ok(())
}

//! Form Snapshots
//!
//! The typed result of reading one rendered step form, and the
//! required-field check applied before it is merged into the draft.

use thiserror::Error;

use super::steps::{FieldKind, StepDescriptor, StepKey};
use crate::draft::{DraftValue, FileMeta};

/// Value read from a single control. Text is kept verbatim; trimming only
/// happens during validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CapturedValue {
    Checked(bool),
    Text(String),
    Files(Vec<FileMeta>),
}

impl From<CapturedValue> for DraftValue {
    fn from(value: CapturedValue) -> Self {
        match value {
            CapturedValue::Checked(b) => DraftValue::Bool(b),
            CapturedValue::Text(s) => DraftValue::Text(s),
            CapturedValue::Files(files) => DraftValue::Files(files),
        }
    }
}

/// Every path-bound control of a step form, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    entries: Vec<(String, CapturedValue)>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, value: CapturedValue) {
        self.entries.push((path.into(), value));
    }

    pub fn with_text(mut self, path: &str, value: &str) -> Self {
        self.push(path, CapturedValue::Text(value.to_string()));
        self
    }

    pub fn with_checked(mut self, path: &str, checked: bool) -> Self {
        self.push(path, CapturedValue::Checked(checked));
        self
    }

    /// Last captured value for `path`
    pub fn get(&self, path: &str) -> Option<&CapturedValue> {
        self.entries.iter().rev().find(|(p, _)| p == path).map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &CapturedValue)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// First required field of a step that failed its check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label} is required")]
pub struct ValidationError {
    pub step: StepKey,
    pub path: &'static str,
    pub label: &'static str,
}

fn satisfies_required(kind: FieldKind, value: Option<&CapturedValue>) -> bool {
    match (kind, value) {
        (FieldKind::Checkbox, Some(CapturedValue::Checked(checked))) => *checked,
        (FieldKind::Checkbox, _) => false,
        (_, Some(CapturedValue::Text(text))) => !text.trim().is_empty(),
        (_, Some(CapturedValue::Files(files))) => !files.is_empty(),
        (_, Some(CapturedValue::Checked(checked))) => *checked,
        (_, None) => false,
    }
}

/// Check the step's required fields in declaration order
pub fn validate(step: &StepDescriptor, form: &FormSnapshot) -> Result<(), ValidationError> {
    match step
        .fields
        .iter()
        .filter(|f| f.required)
        .find(|f| !satisfies_required(f.kind, form.get(f.path)))
    {
        Some(field) => Err(ValidationError {
            step: step.key,
            path: field.path,
            label: field.label,
        }),
        None => Ok(()),
    }
}

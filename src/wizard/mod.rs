//! Step Wizard
//!
//! Fixed step sequence, form snapshots and the controller that moves a
//! draft through them.

mod controller;
mod form;
mod steps;

pub use controller::{
    CompletedSubmission, NextOutcome, PreparedSubmission, PrevOutcome, WizardController, WizardError,
};
pub use form::{validate, CapturedValue, FormSnapshot, ValidationError};
pub use steps::{find_field, ocr_targets, FieldKind, FieldSpec, StepDescriptor, StepKey, STEPS};

//! Wizard Controller
//!
//! Owns the step cursor and the draft store. Every operation either fully
//! succeeds (draft merged, persisted, cursor moved) or leaves both the draft
//! and the cursor as they were.

use thiserror::Error;
use tracing::{debug, info};

use super::form::{validate, CapturedValue, FormSnapshot, ValidationError};
use super::steps::{StepDescriptor, StepKey, STEPS};
use crate::commands::{ApiError, IntakeGateway};
use crate::draft::{Draft, DraftStorage, DraftStore, DraftValue, PathError, StorageError};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("submission failed: {0}")]
    Submit(#[from] ApiError),
    #[error("submit is only available on the last step")]
    NotAtLastStep,
    #[error("a submission is already in progress")]
    Busy,
    #[error("there is no step {0}")]
    NoSuchStep(usize),
    #[error("the intake form is no longer available")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrevOutcome {
    Moved(usize),
    /// Prev on the first step leaves the wizard
    ExitWizard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    Advanced(usize),
    /// Next on the last step: the draft is complete and may be submitted
    ReadyToSubmit,
}

/// Validated, merged draft waiting to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSubmission {
    draft: Draft,
}

/// Draft accepted by the server, not yet committed locally
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSubmission {
    draft: Draft,
    id: String,
}

impl PreparedSubmission {
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub async fn send<G: IntakeGateway + ?Sized>(self, gateway: &G) -> Result<CompletedSubmission, WizardError> {
        let id = gateway.submit_intake(&self.draft).await?;
        Ok(CompletedSubmission { draft: self.draft, id })
    }
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[derive(Debug)]
pub struct WizardController<S> {
    store: DraftStore<S>,
    draft: Draft,
    index: usize,
    submit_in_flight: bool,
}

impl<S: DraftStorage> WizardController<S> {
    /// Resume from whatever the store holds
    pub fn new(store: DraftStore<S>) -> Self {
        let draft = store.load();
        let index = draft.current_step_idx.min(STEPS.len() - 1);
        debug!(index, completed = draft.completed_steps.len(), "wizard resumed");
        Self { store, draft, index, submit_in_flight: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        &STEPS[self.index]
    }

    pub fn is_last_step(&self) -> bool {
        self.index == STEPS.len() - 1
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_completed(&self, key: StepKey) -> bool {
        self.draft.completed_steps.contains(&key)
    }

    /// Share of completed steps, rounded to a whole percent
    pub fn completion_percent(&self) -> u8 {
        completion_percent(&self.draft)
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight
    }

    /// Validate the current step and merge its captured values into a copy
    /// of the draft
    fn merged(&self, form: &FormSnapshot) -> Result<Draft, WizardError> {
        validate(self.current_step(), form)?;
        let mut draft = self.draft.clone();
        for (path, value) in form.entries() {
            // File inputs cannot be pre-filled; no selection keeps what was recorded
            if matches!(value, CapturedValue::Files(files) if files.is_empty())
                && matches!(draft.get(path), Some(DraftValue::Files(_)))
            {
                continue;
            }
            draft.set(path, value.clone().into())?;
        }
        Ok(draft)
    }

    /// Persist `draft` at cursor `index` and adopt both on success
    fn commit(&mut self, mut draft: Draft, index: usize) -> Result<(), WizardError> {
        draft.current_step_idx = index;
        draft.last_saved_at = Some(timestamp());
        self.store.save(&draft)?;
        self.draft = draft;
        self.index = index;
        Ok(())
    }

    /// Persist a cursor move; answers and completion stay as they are
    fn move_to(&mut self, index: usize) -> Result<(), WizardError> {
        let mut draft = self.draft.clone();
        draft.current_step_idx = index;
        self.store.save(&draft)?;
        self.draft = draft;
        self.index = index;
        Ok(())
    }

    pub fn prev(&mut self) -> Result<PrevOutcome, WizardError> {
        if self.index == 0 {
            return Ok(PrevOutcome::ExitWizard);
        }
        let index = self.index - 1;
        self.move_to(index)?;
        Ok(PrevOutcome::Moved(index))
    }

    /// Jump straight to a step from the stepper, without validating or
    /// merging the step being left
    pub fn go_to(&mut self, index: usize) -> Result<usize, WizardError> {
        if index >= STEPS.len() {
            return Err(WizardError::NoSuchStep(index));
        }
        self.move_to(index)?;
        debug!(index, "jumped to step");
        Ok(index)
    }

    /// Merge and persist the current step without moving or completing it
    pub fn save(&mut self, form: &FormSnapshot) -> Result<(), WizardError> {
        let draft = self.merged(form)?;
        self.commit(draft, self.index)?;
        debug!(step = self.current_step().key.as_str(), "step saved");
        Ok(())
    }

    pub fn next(&mut self, form: &FormSnapshot) -> Result<NextOutcome, WizardError> {
        let step = self.current_step();
        let mut draft = self.merged(form)?;
        draft.completed_steps.insert(step.key);

        if self.is_last_step() {
            self.commit(draft, self.index)?;
            return Ok(NextOutcome::ReadyToSubmit);
        }
        let index = self.index + 1;
        self.commit(draft, index)?;
        debug!(from = step.key.as_str(), index, "advanced");
        Ok(NextOutcome::Advanced(index))
    }

    /// Validate and merge the last step into a copy of the draft for
    /// sending. Nothing local changes until `finish_submit` accepts the
    /// server's answer.
    pub fn prepare_submit(&mut self, form: &FormSnapshot) -> Result<PreparedSubmission, WizardError> {
        if !self.is_last_step() {
            return Err(WizardError::NotAtLastStep);
        }
        if self.submit_in_flight {
            return Err(WizardError::Busy);
        }
        let mut draft = self.merged(form)?;
        draft.completed_steps.insert(self.current_step().key);
        draft.current_step_idx = self.index;
        self.submit_in_flight = true;
        Ok(PreparedSubmission { draft })
    }

    /// Record the outcome of a send started by `prepare_submit`
    pub fn finish_submit(
        &mut self,
        outcome: Result<CompletedSubmission, WizardError>,
    ) -> Result<String, WizardError> {
        self.submit_in_flight = false;
        let CompletedSubmission { mut draft, id } = outcome?;
        draft.submission_id = Some(id.clone());
        self.commit(draft, self.index)?;
        info!(id = %id, "submission stored in draft");
        Ok(id)
    }

    /// Replace the draft with a record fetched from the server
    pub fn replace_draft(&mut self, draft: Draft) -> Result<(), WizardError> {
        let index = draft.current_step_idx.min(STEPS.len() - 1);
        self.store.save(&draft)?;
        self.draft = draft;
        self.index = index;
        Ok(())
    }

    /// Append recognized text to a field, as confirmed by the user
    pub fn apply_ocr_text(&mut self, path: &str, text: &str) -> Result<(), WizardError> {
        let mut draft = self.draft.clone();
        draft.append_text(path, text)?;
        self.commit(draft, self.index)
    }

    /// Forget the draft entirely. Already-submitted records are unaffected.
    pub fn reset(&mut self) {
        self.store.clear();
        self.draft = Draft::default();
        self.index = 0;
        self.submit_in_flight = false;
        info!("draft reset");
    }
}

pub fn completion_percent(draft: &Draft) -> u8 {
    let done = draft.completed_steps.len().min(STEPS.len());
    ((done as f64 / STEPS.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{FileMeta, MemoryStorage};
    use async_trait::async_trait;
    use std::cell::Cell;

    struct MockGateway {
        reply: Result<String, ApiError>,
        calls: Cell<usize>,
    }

    impl MockGateway {
        fn accepting(id: &str) -> Self {
            Self { reply: Ok(id.to_string()), calls: Cell::new(0) }
        }

        fn failing(err: ApiError) -> Self {
            Self { reply: Err(err), calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl IntakeGateway for MockGateway {
        async fn submit_intake(&self, _draft: &Draft) -> Result<String, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }
    }

    /// Backend whose writes always fail
    struct ReadOnlyStorage;

    impl DraftStorage for ReadOnlyStorage {
        fn read(&self) -> Option<String> {
            None
        }
        fn write(&self, _payload: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
        fn remove(&self) {}
    }

    fn client_form() -> FormSnapshot {
        FormSnapshot::new()
            .with_text("client.fullName", "Asha Singh")
            .with_text("client.email", "a@x.com")
            .with_text("client.state", "NY")
    }

    fn controller_at(backend: &MemoryStorage, index: usize) -> WizardController<MemoryStorage> {
        let mut draft = Draft::default();
        draft.current_step_idx = index;
        DraftStore::new(backend.clone()).save(&draft).unwrap();
        WizardController::new(DraftStore::new(backend.clone()))
    }

    async fn submit<S: DraftStorage>(
        wizard: &mut WizardController<S>,
        form: &FormSnapshot,
        gateway: &MockGateway,
    ) -> Result<String, WizardError> {
        let prepared = wizard.prepare_submit(form)?;
        let outcome = prepared.send(gateway).await;
        wizard.finish_submit(outcome)
    }

    #[test]
    fn test_fresh_wizard() {
        let wizard = WizardController::new(DraftStore::new(MemoryStorage::new()));
        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.current_step().key, StepKey::Client);
        assert_eq!(wizard.completion_percent(), 0);
        assert!(!wizard.is_last_step());
    }

    #[test]
    fn test_next_from_client_step() {
        let backend = MemoryStorage::new();
        let mut wizard = WizardController::new(DraftStore::new(backend.clone()));

        assert_eq!(wizard.next(&client_form()).unwrap(), NextOutcome::Advanced(1));
        assert_eq!(wizard.index(), 1);
        assert_eq!(wizard.draft().completed_steps.iter().copied().collect::<Vec<_>>(), vec![StepKey::Client]);
        assert_eq!(wizard.draft().text("client.fullName"), "Asha Singh");
        assert!(wizard.draft().last_saved_at.is_some());

        let persisted = DraftStore::new(backend).load();
        assert_eq!(persisted.current_step_idx, 1);
        assert_eq!(&persisted, wizard.draft());
    }

    #[test]
    fn test_next_with_missing_required_field() {
        let backend = MemoryStorage::new();
        let mut wizard = WizardController::new(DraftStore::new(backend.clone()));
        wizard.save(&client_form()).unwrap();
        let before = wizard.draft().clone();

        let form = FormSnapshot::new()
            .with_text("client.fullName", "Changed")
            .with_text("client.email", "")
            .with_text("client.state", "CA");
        let err = wizard.next(&form).unwrap_err();

        assert!(matches!(err, WizardError::Validation(ref v) if v.path == "client.email"));
        assert_eq!(wizard.index(), 0);
        assert!(!wizard.is_completed(StepKey::Client));
        assert_eq!(wizard.draft(), &before);
        assert_eq!(DraftStore::new(backend).load(), before);
    }

    #[test]
    fn test_completion_recorded_once() {
        let mut wizard = WizardController::new(DraftStore::new(MemoryStorage::new()));
        wizard.next(&client_form()).unwrap();
        wizard.prev().unwrap();
        wizard.next(&client_form()).unwrap();

        assert_eq!(wizard.index(), 1);
        assert_eq!(wizard.draft().completed_steps.len(), 1);
    }

    #[test]
    fn test_next_on_last_step_is_ready_to_submit() {
        let backend = MemoryStorage::new();
        let mut wizard = controller_at(&backend, 5);
        let form = FormSnapshot::new().with_checked("uploads.consent", true);

        assert_eq!(wizard.next(&form).unwrap(), NextOutcome::ReadyToSubmit);
        assert_eq!(wizard.next(&form).unwrap(), NextOutcome::ReadyToSubmit);
        assert_eq!(wizard.index(), 5);
        assert_eq!(wizard.draft().completed_steps.len(), 1);
        assert!(wizard.is_completed(StepKey::Uploads));
    }

    #[test]
    fn test_prev_at_first_step_exits() {
        let mut wizard = WizardController::new(DraftStore::new(MemoryStorage::new()));
        assert_eq!(wizard.prev().unwrap(), PrevOutcome::ExitWizard);
        assert_eq!(wizard.index(), 0);
    }

    #[test]
    fn test_prev_persists_index() {
        let backend = MemoryStorage::new();
        let mut wizard = controller_at(&backend, 3);
        assert_eq!(wizard.prev().unwrap(), PrevOutcome::Moved(2));
        assert_eq!(DraftStore::new(backend).load().current_step_idx, 2);
    }

    #[test]
    fn test_save_does_not_move_or_complete() {
        let mut wizard = WizardController::new(DraftStore::new(MemoryStorage::new()));
        let form = client_form().with_text("client.phone", "  555 0100 ");
        wizard.save(&form).unwrap();

        assert_eq!(wizard.index(), 0);
        assert!(wizard.draft().completed_steps.is_empty());
        // Captured verbatim
        assert_eq!(wizard.draft().text("client.phone"), "  555 0100 ");
    }

    #[test]
    fn test_save_still_validates() {
        let mut wizard = WizardController::new(DraftStore::new(MemoryStorage::new()));
        assert!(matches!(wizard.save(&FormSnapshot::new()), Err(WizardError::Validation(_))));
        assert!(wizard.draft().fields.is_empty());
    }

    #[test]
    fn test_resume_persisted_cursor() {
        let backend = MemoryStorage::with_payload(r#"{"currentStepIdx": 4, "completedSteps": ["client"]}"#);
        let wizard = WizardController::new(DraftStore::new(backend));
        assert_eq!(wizard.index(), 4);
        assert_eq!(wizard.current_step().key, StepKey::Digital);
        assert!(wizard.is_completed(StepKey::Client));
    }

    #[test]
    fn test_completion_percent() {
        let mut draft = Draft::default();
        assert_eq!(completion_percent(&draft), 0);
        draft.completed_steps.insert(StepKey::Assets);
        assert_eq!(completion_percent(&draft), 17);
        for key in [StepKey::Uploads, StepKey::Client, StepKey::Digital, StepKey::Family, StepKey::Services] {
            draft.completed_steps.insert(key);
        }
        assert_eq!(completion_percent(&draft), 100);
    }

    #[test]
    fn test_type_conflict_leaves_draft_untouched() {
        let backend = MemoryStorage::with_payload(r#"{"client": "legacy string"}"#);
        let mut wizard = WizardController::new(DraftStore::new(backend));
        let err = wizard.next(&client_form()).unwrap_err();

        assert!(matches!(err, WizardError::Path(PathError::TypeConflict { .. })));
        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.draft().text("client"), "legacy string");
    }

    #[test]
    fn test_storage_failure_leaves_state_untouched() {
        let mut wizard = WizardController::new(DraftStore::new(ReadOnlyStorage));
        assert!(matches!(wizard.next(&client_form()), Err(WizardError::Storage(_))));
        assert_eq!(wizard.index(), 0);
        assert!(wizard.draft().fields.is_empty());
    }

    #[test]
    fn test_apply_ocr_text() {
        let mut wizard = WizardController::new(DraftStore::new(MemoryStorage::new()));
        wizard.apply_ocr_text("assets.realEstate", "12 Elm St").unwrap();
        wizard.apply_ocr_text("assets.realEstate", "Deed no. 4471").unwrap();
        assert_eq!(wizard.draft().text("assets.realEstate"), "12 Elm St\n\nDeed no. 4471");
        assert!(wizard.draft().completed_steps.is_empty());
    }

    #[test]
    fn test_replace_draft_for_view() {
        let backend = MemoryStorage::new();
        let mut wizard = WizardController::new(DraftStore::new(backend.clone()));
        wizard.next(&client_form()).unwrap();

        let mut fetched = Draft::default();
        fetched.current_step_idx = 5;
        fetched.submission_id = Some("srv-9".to_string());
        fetched.set("client.fullName", "Someone Else".into()).unwrap();
        wizard.replace_draft(fetched.clone()).unwrap();

        assert_eq!(wizard.index(), 5);
        assert_eq!(wizard.draft(), &fetched);
        assert_eq!(DraftStore::new(backend).load(), fetched);
    }

    #[test]
    fn test_reset() {
        let backend = MemoryStorage::new();
        let mut wizard = WizardController::new(DraftStore::new(backend.clone()));
        wizard.next(&client_form()).unwrap();
        wizard.reset();

        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.draft(), &Draft::default());
        assert!(backend.read().is_none());
    }

    #[test]
    fn test_reset_abandons_pending_submit() {
        let backend = MemoryStorage::new();
        let mut wizard = controller_at(&backend, 5);
        let form = FormSnapshot::new().with_checked("uploads.consent", true);
        let _pending = wizard.prepare_submit(&form).unwrap();

        wizard.reset();
        assert!(!wizard.is_submitting());
        assert!(!wizard.draft().is_submitted());
        assert_eq!(wizard.current_step().key, StepKey::Client);
    }

    #[test]
    fn test_submit_only_on_last_step() {
        let mut wizard = WizardController::new(DraftStore::new(MemoryStorage::new()));
        assert!(matches!(wizard.prepare_submit(&client_form()), Err(WizardError::NotAtLastStep)));
        assert!(!wizard.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_without_consent_makes_no_call() {
        let backend = MemoryStorage::new();
        let mut wizard = controller_at(&backend, 5);
        let gateway = MockGateway::accepting("abc123");
        let form = FormSnapshot::new().with_checked("uploads.consent", false);

        let err = submit(&mut wizard, &form, &gateway).await.unwrap_err();
        assert!(matches!(err, WizardError::Validation(ref v) if v.path == "uploads.consent"));
        assert_eq!(gateway.calls.get(), 0);
        assert_eq!(wizard.index(), 5);
        assert!(wizard.draft().submission_id.is_none());
    }

    #[tokio::test]
    async fn test_submit_stores_and_persists_id() {
        let backend = MemoryStorage::new();
        let mut wizard = controller_at(&backend, 5);
        let gateway = MockGateway::accepting("abc123");
        let form = FormSnapshot::new()
            .with_text("uploads.notes", "see attached")
            .with_checked("uploads.consent", true);

        let id = submit(&mut wizard, &form, &gateway).await.unwrap();
        assert_eq!(id, "abc123");
        assert_eq!(gateway.calls.get(), 1);
        assert!(wizard.draft().is_submitted());
        assert!(wizard.is_completed(StepKey::Uploads));
        assert!(!wizard.is_submitting());

        let persisted = DraftStore::new(backend).load();
        assert_eq!(persisted.submission_id.as_deref(), Some("abc123"));
        assert_eq!(persisted.get("uploads.consent"), Some(&DraftValue::Bool(true)));
    }

    #[tokio::test]
    async fn test_submit_failure_changes_nothing() {
        let backend = MemoryStorage::new();
        let mut wizard = controller_at(&backend, 5);
        let before = wizard.draft().clone();
        let gateway = MockGateway::failing(ApiError::Transport("connection refused".to_string()));
        let form = FormSnapshot::new().with_checked("uploads.consent", true);

        let err = submit(&mut wizard, &form, &gateway).await.unwrap_err();
        assert!(matches!(err, WizardError::Submit(ApiError::Transport(_))));
        assert_eq!(wizard.draft(), &before);
        assert_eq!(DraftStore::new(backend).load(), before);
        assert!(!wizard.is_submitting());
    }

    fn will_pdf() -> FileMeta {
        FileMeta {
            name: "will.pdf".to_string(),
            size: 48_213,
            mime: "application/pdf".to_string(),
            captured_at: "2024-05-01T10:00:00+00:00".to_string(),
        }
    }

    fn uploads_form(files: Vec<FileMeta>) -> FormSnapshot {
        let mut form = FormSnapshot::new();
        form.push("uploads.files", CapturedValue::Files(files));
        form.with_checked("uploads.consent", true)
    }

    #[tokio::test]
    async fn test_finish_then_submit_keeps_uploaded_files() {
        let mut wizard = controller_at(&MemoryStorage::new(), 5);
        assert_eq!(wizard.next(&uploads_form(vec![will_pdf()])).unwrap(), NextOutcome::ReadyToSubmit);

        // The re-rendered file input has no selection
        let prepared = wizard.prepare_submit(&uploads_form(Vec::new())).unwrap();
        assert_eq!(prepared.draft().get("uploads.files"), Some(&DraftValue::Files(vec![will_pdf()])));

        let gateway = MockGateway::accepting("abc123");
        let outcome = prepared.send(&gateway).await;
        wizard.finish_submit(outcome).unwrap();
        assert_eq!(wizard.draft().get("uploads.files"), Some(&DraftValue::Files(vec![will_pdf()])));
    }

    #[test]
    fn test_save_then_next_keeps_uploaded_files() {
        let mut wizard = controller_at(&MemoryStorage::new(), 5);
        wizard.save(&uploads_form(vec![will_pdf()])).unwrap();
        wizard.next(&uploads_form(Vec::new())).unwrap();
        assert_eq!(wizard.draft().get("uploads.files"), Some(&DraftValue::Files(vec![will_pdf()])));
    }

    #[test]
    fn test_empty_file_selection_recorded_when_nothing_stored() {
        let mut wizard = controller_at(&MemoryStorage::new(), 5);
        wizard.save(&uploads_form(Vec::new())).unwrap();
        assert_eq!(wizard.draft().get("uploads.files"), Some(&DraftValue::Files(Vec::new())));
    }

    #[test]
    fn test_new_file_selection_replaces_recorded_files() {
        let mut wizard = controller_at(&MemoryStorage::new(), 5);
        wizard.save(&uploads_form(vec![will_pdf()])).unwrap();

        let deed = FileMeta { name: "deed.png".to_string(), ..will_pdf() };
        wizard.save(&uploads_form(vec![deed.clone()])).unwrap();
        assert_eq!(wizard.draft().get("uploads.files"), Some(&DraftValue::Files(vec![deed])));
    }

    #[test]
    fn test_go_to_persists_cursor_without_validating() {
        let backend = MemoryStorage::new();
        let mut wizard = WizardController::new(DraftStore::new(backend.clone()));

        assert_eq!(wizard.go_to(3).unwrap(), 3);
        assert_eq!(wizard.index(), 3);
        assert_eq!(wizard.current_step().key, StepKey::Assets);
        assert!(wizard.draft().completed_steps.is_empty());
        assert!(wizard.draft().fields.is_empty());

        let resumed = WizardController::new(DraftStore::new(backend));
        assert_eq!(resumed.index(), 3);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let backend = MemoryStorage::new();
        let mut wizard = controller_at(&backend, 2);
        assert!(matches!(wizard.go_to(6), Err(WizardError::NoSuchStep(6))));
        assert_eq!(wizard.index(), 2);
        assert_eq!(DraftStore::new(backend).load().current_step_idx, 2);
    }

    #[test]
    fn test_go_to_storage_failure_keeps_cursor() {
        let mut wizard = WizardController::new(DraftStore::new(ReadOnlyStorage));
        assert!(matches!(wizard.go_to(4), Err(WizardError::Storage(_))));
        assert_eq!(wizard.index(), 0);
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut wizard = controller_at(&MemoryStorage::new(), 5);
        let form = FormSnapshot::new().with_checked("uploads.consent", true);
        let _pending = wizard.prepare_submit(&form).unwrap();
        assert!(wizard.is_submitting());
        assert!(matches!(wizard.prepare_submit(&form), Err(WizardError::Busy)));
    }
}

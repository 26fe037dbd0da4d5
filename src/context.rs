//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::ApiClient;
use crate::config::AppConfig;
use crate::draft::{BrowserStorage, Draft, DraftStore};
use crate::store::{store_push_toast, store_toggle_chat, AppStore, ToastKind};
use crate::wizard::{WizardController, WizardError};

pub type Wizard = WizardController<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owner of the draft and step cursor
    wizard: StoredValue<Wizard>,
    /// Bumped after every wizard operation - read
    pub draft_version: ReadSignal<u32>,
    /// Bumped after every wizard operation - write
    set_draft_version: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
    store: AppStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: AppStore) -> Self {
        let drafts = DraftStore::new(BrowserStorage::new(config.storage_key.clone()));
        let (draft_version, set_draft_version) = signal(0u32);
        Self {
            wizard: StoredValue::new(WizardController::new(drafts)),
            draft_version,
            set_draft_version,
            config: StoredValue::new(config),
            store,
        }
    }

    /// Read the wizard, subscribing the caller to draft changes
    pub fn with_wizard<R>(&self, f: impl FnOnce(&Wizard) -> R) -> R {
        let _ = self.draft_version.get();
        self.wizard.with_value(f)
    }

    /// Read the wizard without subscribing (event handlers)
    pub fn with_wizard_untracked<R>(&self, f: impl FnOnce(&Wizard) -> R) -> R {
        self.wizard.with_value(f)
    }

    /// Run a wizard operation and notify subscribers, whatever its outcome
    pub fn update_wizard<T>(&self, f: impl FnOnce(&mut Wizard) -> Result<T, WizardError>) -> Result<T, WizardError> {
        let result = try_update(self.wizard, f);
        self.set_draft_version.update(|v| *v += 1);
        result
    }

    /// Discard the draft, in storage and in memory
    pub fn reset_draft(&self) {
        if self.wizard.try_update_value(|w| w.reset()).is_some() {
            self.set_draft_version.update(|v| *v += 1);
        }
    }

    /// Snapshot of the current draft, subscribing the caller
    pub fn draft(&self) -> Draft {
        self.with_wizard(|w| w.draft().clone())
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.config.with_value(|c| ApiClient::new(&c.api_base))
    }

    /// Show or hide the assistant; opening it re-checks the server
    pub fn toggle_chat(&self) {
        store_toggle_chat(&self.store, self.api());
    }

    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let ttl = self.config.with_value(|c| c.toast_ms);
        store_push_toast(&self.store, kind, message, ttl);
    }

    pub fn store(&self) -> AppStore {
        self.store
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Run `f` on the stored value; a disposed value reports `Unavailable`
fn try_update<W, T>(
    value: StoredValue<W>,
    f: impl FnOnce(&mut W) -> Result<T, WizardError>,
) -> Result<T, WizardError>
where
    W: Send + Sync + 'static,
{
    value.try_update_value(f).unwrap_or(Err(WizardError::Unavailable))
}

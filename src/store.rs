//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The draft itself
//! lives in the wizard controller (see `context`); this store holds view
//! state that is never persisted.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::assistant::{ChatSession, ProfileState};
use crate::commands::ApiClient;
use crate::models::{IntakeListItem, ServerState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast info",
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Admin table contents
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AdminList {
    #[default]
    Loading,
    Loaded(Vec<IntakeListItem>),
    /// List endpoint unreachable or failed
    Unavailable,
}

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Transient notifications, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
    pub server: ServerState,
    pub chat: ChatSession,
    pub chat_open: bool,
    pub profile: ProfileState,
    pub admin: AdminList,
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notification that dismisses itself after `ttl_ms`
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>, ttl_ms: u32) {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, kind, message: message.into() });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(ttl_ms).await;
        store_dismiss_toast(&store, id);
    });
}

pub fn store_dismiss_toast(store: &AppStore, id: u64) {
    store.toasts().write().retain(|t| t.id != id);
}

pub fn store_set_server(store: &AppStore, server: ServerState) {
    store.server().set(server);
}

pub fn store_set_admin(store: &AppStore, admin: AdminList) {
    store.admin().set(admin);
}

/// Probe `/api/health` and update the badge with the answer
pub fn store_refresh_health(store: &AppStore, api: ApiClient) {
    let store = *store;
    spawn_local(async move {
        store_set_server(&store, api.server_state().await);
    });
}

pub fn store_toggle_chat(store: &AppStore, api: ApiClient) {
    let open = !store.chat_open().get_untracked();
    store.chat_open().set(open);
    if open {
        store_refresh_health(store, api);
    }
}

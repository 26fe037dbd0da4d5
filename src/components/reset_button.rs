//! Reset Button Component
//!
//! Inline two-step confirmation before the draft is discarded.

use leptos::prelude::*;

use crate::assistant::ProfileState;
use crate::context::use_app_context;
use crate::router::{navigate, Route};
use crate::store::{AppStateStoreFields, ToastKind};

/// Shows "Start over" initially. When clicked, asks for confirmation with ✓/✗.
#[component]
pub fn ResetButton() -> impl IntoView {
    let ctx = use_app_context();
    let (confirming, set_confirming) = signal(false);

    let on_confirm = move |_| {
        ctx.reset_draft();
        ctx.store().profile().set(ProfileState::Idle);
        set_confirming.set(false);
        ctx.toast(ToastKind::Info, "Your answers were cleared");
        navigate(Route::Home);
    };

    view! {
        <Show when=move || !confirming.get()>
            <button type="button" class="reset-btn" on:click=move |_| set_confirming.set(true)>
                "Start over"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="reset-confirm">
                <span class="reset-confirm-text">"Discard all answers on this device?"</span>
                <button type="button" class="confirm-btn" on:click=on_confirm>"✓"</button>
                <button type="button" class="cancel-btn" on:click=move |_| set_confirming.set(false)>"✗"</button>
            </span>
        </Show>
    }
}

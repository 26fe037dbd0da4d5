//! Wizard View Component
//!
//! Stepper, current step form and the Prev/Save/Next/Submit actions.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::components::{flag_invalid, read_form, OcrPanel, ResetButton, StepForm, Stepper};
use crate::context::{use_app_context, AppContext};
use crate::router::{navigate, Route};
use crate::store::ToastKind;
use crate::wizard::{FormSnapshot, NextOutcome, PrevOutcome, WizardError};

const SERVER_UNAVAILABLE: &str = "Could not reach the server. Is it running?";

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Toast for a failed action; validation failures also flag the field
fn report(ctx: AppContext, form_ref: NodeRef<html::Form>, err: WizardError) {
    let message = match &err {
        WizardError::Validation(v) => {
            if let Some(form) = form_ref.get_untracked() {
                flag_invalid(&form, v.path);
            }
            v.to_string()
        }
        WizardError::Submit(api) => api.user_message(SERVER_UNAVAILABLE),
        other => other.to_string(),
    };
    warn!(error = %err, "wizard action failed");
    ctx.toast(ToastKind::Error, message);
}

#[component]
pub fn WizardView() -> impl IntoView {
    let ctx = use_app_context();
    let form_ref: NodeRef<html::Form> = NodeRef::new();
    let submitting = move || ctx.with_wizard(|w| w.is_submitting());
    // Only a changed step or changed stored answers rebuild the form
    let shown = Memo::new(move |_| ctx.with_wizard(|w| (w.current_step(), w.draft().clone())));

    let snapshot = move || -> FormSnapshot {
        form_ref
            .get_untracked()
            .map(|form| read_form(&form))
            .unwrap_or_default()
    };

    let on_prev = move |_| match ctx.update_wizard(|w| w.prev()) {
        Ok(PrevOutcome::Moved(_)) => scroll_to_top(),
        Ok(PrevOutcome::ExitWizard) => navigate(Route::Home),
        Err(e) => report(ctx, form_ref, e),
    };

    let on_save = move |_| {
        let form = snapshot();
        match ctx.update_wizard(|w| w.save(&form)) {
            Ok(()) => ctx.toast(ToastKind::Success, "Progress saved"),
            Err(e) => report(ctx, form_ref, e),
        }
    };

    let on_next = move |_| {
        let form = snapshot();
        match ctx.update_wizard(|w| w.next(&form)) {
            Ok(NextOutcome::Advanced(_)) => scroll_to_top(),
            Ok(NextOutcome::ReadyToSubmit) => {
                ctx.toast(ToastKind::Info, "All steps complete. Review and submit when ready.")
            }
            Err(e) => report(ctx, form_ref, e),
        }
    };

    let on_submit = move |_| {
        let form = snapshot();
        let prepared = match ctx.update_wizard(|w| w.prepare_submit(&form)) {
            Ok(prepared) => prepared,
            Err(e) => return report(ctx, form_ref, e),
        };
        spawn_local(async move {
            let api = ctx.api();
            let outcome = prepared.send(&api).await;
            match ctx.update_wizard(|w| w.finish_submit(outcome)) {
                Ok(id) => {
                    ctx.toast(ToastKind::Success, format!("Submitted. Your reference is {}", id));
                    navigate(Route::Summary);
                }
                Err(e) => report(ctx, form_ref, e),
            }
        });
    };

    let is_first = move || ctx.with_wizard(|w| w.index() == 0);
    let is_last = move || ctx.with_wizard(|w| w.is_last_step());
    let can_submit = move || ctx.with_wizard(|w| w.is_last_step() && w.is_completed(w.current_step().key));

    view! {
        <section class="wizard">
            <Stepper />
            {move || {
                let (step, draft) = shown.get();
                view! { <StepForm step=step draft=draft form_ref=form_ref /> }
            }}
            <div class="wizard-actions">
                <button type="button" class="secondary" on:click=on_prev>
                    {move || if is_first() { "Back to home" } else { "Previous" }}
                </button>
                <button type="button" class="secondary" on:click=on_save>"Save"</button>
                <button type="button" on:click=on_next>
                    {move || if is_last() { "Finish" } else { "Next" }}
                </button>
                <Show when=can_submit>
                    <button type="button" class="primary" disabled=submitting on:click=on_submit>
                        {move || if submitting() { "Submitting…" } else { "Submit intake" }}
                    </button>
                </Show>
            </div>
            <OcrPanel />
            <div class="wizard-footer">
                <ResetButton />
                <span class="last-saved">
                    {move || ctx.with_wizard(|w| w.draft().last_saved_at.clone())
                        .map(|at| format!("Last saved {}", at))
                        .unwrap_or_default()}
                </span>
            </div>
        </section>
    }
}

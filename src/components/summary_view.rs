//! Summary View Component
//!
//! Read-only review of the whole draft with export, profile generation and
//! submission status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::assistant::ProfileState;
use crate::components::ResetButton;
use crate::context::use_app_context;
use crate::export::download_draft;
use crate::markdown::render_markdown;
use crate::router::{navigate, Route};
use crate::store::{AppStateStoreFields, ToastKind};
use crate::wizard::STEPS;

#[component]
pub fn SummaryView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    let on_download = move |_| {
        let draft = ctx.with_wizard_untracked(|w| w.draft().clone());
        if let Err(e) = download_draft(&draft) {
            ctx.toast(ToastKind::Error, format!("Export failed: {}", e));
        }
    };

    let on_profile = move |_| {
        let begun = store.profile().write().begin();
        if let Err(e) = begun {
            ctx.toast(ToastKind::Info, e.to_string());
            return;
        }
        let draft = ctx.with_wizard_untracked(|w| w.draft().clone());
        spawn_local(async move {
            let result = ctx.api().generate_profile(&draft).await;
            store.profile().write().finish(result);
        });
    };

    let sections = move || {
        let draft = ctx.draft();
        STEPS
            .iter()
            .map(|step| {
                let done = draft.completed_steps.contains(&step.key);
                let rows = step
                    .fields
                    .iter()
                    .map(|field| {
                        let value = draft
                            .get(field.path)
                            .map(|v| v.display_text())
                            .filter(|s| !s.trim().is_empty())
                            .unwrap_or_else(|| "—".to_string());
                        view! {
                            <tr>
                                <th>{field.label}</th>
                                <td class="summary-value">{value}</td>
                            </tr>
                        }
                    })
                    .collect_view();
                view! {
                    <section class=if done { "summary-step done" } else { "summary-step" }>
                        <h3>{step.label} {if done { " ✓" } else { "" }}</h3>
                        <table class="summary-table">{rows}</table>
                    </section>
                }
            })
            .collect_view()
    };

    view! {
        <section class="summary">
            <header class="summary-header">
                <h1>"Your intake"</h1>
                <p>{move || format!("{}% complete", ctx.with_wizard(|w| w.completion_percent()))}</p>
                <p class="submission-status">
                    {move || {
                        let draft = ctx.draft();
                        match (draft.is_submitted(), draft.submission_id) {
                            (true, Some(id)) => format!("Submitted. Reference: {}", id),
                            _ => "Not submitted yet".to_string(),
                        }
                    }}
                </p>
            </header>
            <div class="summary-actions">
                <button type="button" class="secondary" on:click=move |_| navigate(Route::Start)>"Edit answers"</button>
                <button type="button" class="secondary" on:click=on_download>"Download JSON"</button>
                <button
                    type="button"
                    disabled=move || store.profile().get() == ProfileState::Generating
                    on:click=on_profile
                >
                    "Generate profile"
                </button>
                <ResetButton />
            </div>
            {move || match store.profile().get() {
                ProfileState::Idle => view! { <div></div> }.into_any(),
                ProfileState::Generating => view! { <p class="profile-status">"Generating profile…"</p> }.into_any(),
                ProfileState::Ready(profile) => view! {
                    <article class="profile markdown-body" inner_html=render_markdown(&profile)></article>
                }.into_any(),
                ProfileState::Failed(message) => view! { <p class="profile-status error">{message}</p> }.into_any(),
            }}
            {sections}
        </section>
    }
}

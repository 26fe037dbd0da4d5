//! OCR Panel Component
//!
//! Scan an image, review the recognized text, then append it to one of the
//! free-text fields. Nothing reaches the draft without confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{recognize_text, OcrProgress};
use crate::context::use_app_context;
use crate::store::ToastKind;
use crate::wizard::{find_field, ocr_targets, FieldSpec, StepDescriptor};

fn target_label(step: &StepDescriptor, field: &FieldSpec) -> String {
    format!("{} → {}", step.label, field.label)
}

#[component]
pub fn OcrPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (progress, set_progress) = signal::<Option<OcrProgress>>(None);
    let (staged, set_staged) = signal::<Option<String>>(None);
    let (target, set_target) = signal(ocr_targets().next().map(|(_, f)| f.path).unwrap_or_default());
    let (running, set_running) = signal(false);

    let on_file = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        if running.get_untracked() {
            ctx.toast(ToastKind::Info, "Still reading the previous image");
            return;
        }
        set_running.set(true);
        set_staged.set(None);
        let lang = ctx.config().ocr_language;
        spawn_local(async move {
            let result = recognize_text(file, &lang, move |p| set_progress.set(Some(p))).await;
            set_running.set(false);
            set_progress.set(None);
            match result {
                Ok(text) if text.is_empty() => ctx.toast(ToastKind::Info, "No text found in that image"),
                Ok(text) => set_staged.set(Some(text)),
                Err(e) => ctx.toast(ToastKind::Error, e.to_string()),
            }
        });
    };

    let on_apply = move |_| {
        let Some(text) = staged.get_untracked() else {
            return;
        };
        let path = target.get_untracked();
        match ctx.update_wizard(|w| w.apply_ocr_text(path, &text)) {
            Ok(()) => {
                let label = find_field(path).map(|f| f.label).unwrap_or(path);
                ctx.toast(ToastKind::Success, format!("OCR text applied to {}", label));
                set_staged.set(None);
            }
            Err(e) => ctx.toast(ToastKind::Error, e.to_string()),
        }
    };

    view! {
        <details class="ocr-panel">
            <summary>"Scan a document"</summary>
            <p class="hint">"Text is read in your browser. Review it before adding it to your answers."</p>
            <input type="file" accept="image/*" on:change=on_file disabled=move || running.get() />
            {move || progress.get().map(|p| view! {
                <div class="ocr-progress">
                    <span>{p.status.clone()}</span>
                    <progress max="100" value=p.percent().to_string()></progress>
                </div>
            })}
            <Show when=move || staged.get().is_some()>
                <div class="ocr-review">
                    <textarea
                        rows="8"
                        prop:value=move || staged.get().unwrap_or_default()
                        on:input=move |ev| set_staged.set(Some(event_target_value(&ev)))
                    ></textarea>
                    <label class="field">
                        <span>"Add to"</span>
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some((_, field)) = ocr_targets().find(|(_, f)| f.path == value) {
                                set_target.set(field.path);
                            }
                        }>
                            {ocr_targets().map(|(step, f)| view! {
                                <option value=f.path selected=move || target.get() == f.path>{target_label(step, f)}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <div class="ocr-actions">
                        <button type="button" on:click=on_apply>"Add text"</button>
                        <button type="button" class="secondary" on:click=move |_| set_staged.set(None)>"Discard"</button>
                    </div>
                </div>
            </Show>
        </details>
    }
}

//! Step Form Component
//!
//! Renders one step's fields from its static description and reads the
//! rendered controls back into a `FormSnapshot`. Every control carries its
//! dotted path in `data-path`.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::draft::{Draft, DraftValue, FileMeta};
use crate::wizard::{CapturedValue, FieldKind, FieldSpec, FormSnapshot, StepDescriptor};

const PATH_ATTR: &str = "data-path";

/// Read every path-bound control of `form`, in document order
pub fn read_form(form: &web_sys::HtmlFormElement) -> FormSnapshot {
    let mut snapshot = FormSnapshot::new();
    let Ok(nodes) = form.query_selector_all(&format!("[{}]", PATH_ATTR)) else {
        return snapshot;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let Some(path) = element.get_attribute(PATH_ATTR) else {
            continue;
        };
        if let Some(value) = read_control(&element) {
            snapshot.push(path, value);
        }
    }
    snapshot
}

fn read_control(element: &web_sys::Element) -> Option<CapturedValue> {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(match input.type_().as_str() {
            "checkbox" => CapturedValue::Checked(input.checked()),
            "file" => CapturedValue::Files(read_files(input)),
            _ => CapturedValue::Text(input.value()),
        });
    }
    if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(CapturedValue::Text(area.value()));
    }
    element
        .dyn_ref::<web_sys::HtmlSelectElement>()
        .map(|select| CapturedValue::Text(select.value()))
}

fn read_files(input: &web_sys::HtmlInputElement) -> Vec<FileMeta> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let captured_at = chrono::Utc::now().to_rfc3339();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| FileMeta {
            name: file.name(),
            size: file.size() as u64,
            mime: file.type_(),
            captured_at: captured_at.clone(),
        })
        .collect()
}

/// Mark the control at `path` invalid and focus it
pub fn flag_invalid(form: &web_sys::HtmlFormElement, path: &str) {
    if let Ok(nodes) = form.query_selector_all(".invalid") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                let _ = el.class_list().remove_1("invalid");
            }
        }
    }
    let selector = format!("[{}=\"{}\"]", PATH_ATTR, path);
    if let Ok(Some(el)) = form.query_selector(&selector) {
        let _ = el.class_list().add_1("invalid");
        if let Some(html_el) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html_el.focus();
        }
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        FieldKind::Date => "date",
        _ => "text",
    }
}

fn render_field(field: &'static FieldSpec, draft: &Draft) -> AnyView {
    let current = draft.get(field.path);
    let text = current.and_then(DraftValue::as_text).unwrap_or("").to_string();
    let label = if field.required { format!("{} *", field.label) } else { field.label.to_string() };

    match field.kind {
        FieldKind::Checkbox => {
            let checked = current.and_then(DraftValue::as_bool).unwrap_or(false);
            view! {
                <label class="field checkbox-field">
                    <input type="checkbox" data-path=field.path prop:checked=checked />
                    <span>{label}</span>
                </label>
            }
            .into_any()
        }
        FieldKind::TextArea => view! {
            <label class="field">
                <span>{label}</span>
                <textarea data-path=field.path rows="3" placeholder=field.placeholder prop:value=text></textarea>
            </label>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <label class="field">
                <span>{label}</span>
                <select data-path=field.path>
                    <option value="" selected=text.is_empty()>"Select…"</option>
                    {options.iter().map(|option| {
                        let selected = text == *option;
                        view! { <option value=*option selected=selected>{*option}</option> }
                    }).collect_view()}
                </select>
            </label>
        }
        .into_any(),
        FieldKind::File => {
            let existing = match current {
                Some(DraftValue::Files(files)) => files.clone(),
                _ => Vec::new(),
            };
            view! {
                <label class="field">
                    <span>{label}</span>
                    <input type="file" multiple data-path=field.path />
                    <ul class="file-list">
                        {existing.into_iter().map(|f| view! {
                            <li>{f.name} " (" {f.size} " bytes)"</li>
                        }).collect_view()}
                    </ul>
                </label>
            }
            .into_any()
        }
        kind => view! {
            <label class="field">
                <span>{label}</span>
                <input type=input_type(kind) data-path=field.path placeholder=field.placeholder prop:value=text />
            </label>
        }
        .into_any(),
    }
}

/// Form for the current step, pre-filled from the draft
#[component]
pub fn StepForm(
    step: &'static StepDescriptor,
    draft: Draft,
    form_ref: NodeRef<html::Form>,
) -> impl IntoView {
    view! {
        <form class="step-form" node_ref=form_ref on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            <h2>{step.label}</h2>
            <p class="step-subtitle">{step.subtitle}</p>
            {step.fields.iter().map(|field| render_field(field, &draft)).collect_view()}
        </form>
    }
}

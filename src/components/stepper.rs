//! Stepper Component
//!
//! Step labels in wizard order with done markers and overall progress.
//! Clicking a label jumps straight to that step.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::ToastKind;
use crate::wizard::STEPS;

#[component]
pub fn Stepper() -> impl IntoView {
    let ctx = use_app_context();
    let percent = move || ctx.with_wizard(|w| w.completion_percent());

    view! {
        <nav class="stepper">
            <ol>
                {STEPS.iter().enumerate().map(|(i, step)| {
                    let class = move || ctx.with_wizard(|w| {
                        let mut c = "stepper-item".to_string();
                        if w.index() == i { c.push_str(" active"); }
                        if w.is_completed(step.key) { c.push_str(" done"); }
                        c
                    });
                    let done = move || ctx.with_wizard(|w| w.is_completed(step.key));
                    let jump = move |_| match ctx.update_wizard(|w| w.go_to(i)) {
                        Ok(_) => {
                            if let Some(window) = web_sys::window() {
                                window.scroll_to_with_x_and_y(0.0, 0.0);
                            }
                        }
                        Err(e) => ctx.toast(ToastKind::Error, e.to_string()),
                    };
                    view! {
                        <li class=class on:click=jump>
                            <span class="stepper-index">{move || if done() { "✓".to_string() } else { (i + 1).to_string() }}</span>
                            <span class="stepper-label">{step.label}</span>
                        </li>
                    }
                }).collect_view()}
            </ol>
            <div class="progress">
                <div class="progress-bar" style=move || format!("width: {}%", percent())></div>
                <span class="progress-label">{move || format!("{}% complete", percent())}</span>
            </div>
        </nav>
    }
}

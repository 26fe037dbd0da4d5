//! Static Pages
//!
//! Home, services and privacy content.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let resume = move || ctx.with_wizard(|w| !w.draft().fields.is_empty());

    view! {
        <section class="page home">
            <h1>"Estate planning, started from home"</h1>
            <p>
                "Answer a few questions about yourself, your family and what you own. "
                "Your answers are saved on this device as you go, and nothing is sent "
                "until you choose to submit."
            </p>
            <a class="cta" href=Route::Start.hash()>
                {move || if resume() { "Continue your intake" } else { "Start your intake" }}
            </a>
        </section>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    const SERVICES: &[(&str, &str)] = &[
        ("Wills", "A last will and testament naming executors, guardians and beneficiaries."),
        ("Trusts", "Revocable living trusts to keep assets out of probate."),
        ("Powers of attorney", "Someone you trust to act for you financially if you cannot."),
        ("Healthcare directives", "Your wishes for medical care, and who speaks for you."),
        ("Digital assets", "Instructions for crypto wallets, online accounts and passwords."),
    ];

    view! {
        <section class="page services">
            <h1>"Services"</h1>
            <ul class="service-list">
                {SERVICES.iter().map(|(name, blurb)| view! {
                    <li>
                        <h3>{*name}</h3>
                        <p>{*blurb}</p>
                    </li>
                }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <section class="page privacy">
            <h1>"Privacy"</h1>
            <p>
                "Your draft is stored only in this browser's local storage until you submit it. "
                "Uploaded documents are never stored; only their file names and sizes are kept. "
                "Scanned text is read on your device and is added to your answers only when you confirm."
            </p>
            <p>"Use \"Start over\" at any time to erase the draft from this device."</p>
        </section>
    }
}

//! Chat Panel Component
//!
//! Floating assistant panel. Replies render as Markdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::assistant::DRAFT_CHECKLIST_PROMPT;
use crate::context::{use_app_context, AppContext};
use crate::markdown::render_markdown;
use crate::models::{ChatMode, ChatRole};
use crate::store::{AppStateStoreFields, ToastKind};

/// Start a turn with `text` and fetch the reply
fn send_turn(ctx: AppContext, text: &str) -> bool {
    let store = ctx.store();
    let draft = ctx.with_wizard_untracked(|w| w.draft().clone());
    let begun = store.chat().write().begin_turn(text, &draft);
    let request = match begun {
        Ok(request) => request,
        Err(e) => {
            ctx.toast(ToastKind::Info, e.to_string());
            return false;
        }
    };
    spawn_local(async move {
        let result = ctx.api().chat(&request).await;
        store.chat().write().finish_turn(result);
    });
    true
}

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();
    let (input, set_input) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if send_turn(ctx, &input.get_untracked()) {
            set_input.set(String::new());
        }
    };

    let set_mode = move |ev: web_sys::Event| {
        if let Some(mode) = ChatMode::from_key(&event_target_value(&ev)) {
            store.chat().write().set_mode(mode);
        }
    };

    let on_clear = move |_| {
        store.chat().write().clear();
        ctx.toast(ToastKind::Info, "Assistant chat cleared.");
    };

    let messages = move || {
        let chat = store.chat().read();
        if chat.messages().is_empty() {
            return view! { <div class="chat-empty">"No messages yet."</div> }.into_any();
        }
        chat.messages()
            .iter()
            .map(|message| {
                let class = match (message.role, message.is_error) {
                    (ChatRole::User, _) => "chat-message user",
                    (ChatRole::Assistant, false) => "chat-message assistant",
                    (ChatRole::Assistant, true) => "chat-message assistant error",
                };
                match message.role {
                    ChatRole::Assistant if !message.is_error => view! {
                        <div class=class inner_html=render_markdown(&message.content)></div>
                    }
                    .into_any(),
                    _ => view! { <div class=class>{message.content.clone()}</div> }.into_any(),
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Show when=move || store.chat_open().get()>
            <aside class="chat-panel">
                <header class="chat-header">
                    <span>"Assistant"</span>
                    <span class=move || store.server().get().css_class()>
                        {move || store.server().get().label()}
                    </span>
                    <button type="button" class="close-btn" on:click=move |_| ctx.toggle_chat()>"✕"</button>
                </header>
                <div class="chat-options">
                    <select on:change=set_mode>
                        {ChatMode::ALL.into_iter().map(|mode| view! {
                            <option value=mode.as_str() selected=move || store.chat().read().mode() == mode>
                                {mode.label()}
                            </option>
                        }).collect_view()}
                    </select>
                    <label class="checkbox-field">
                        <input
                            type="checkbox"
                            prop:checked=move || store.chat().read().include_context()
                            on:change=move |ev| store.chat().write().set_include_context(event_target_checked(&ev))
                        />
                        <span>"Include my intake answers"</span>
                    </label>
                </div>
                <div class="chat-messages">
                    {messages}
                    <Show when=move || store.chat().read().is_pending()>
                        <div class="chat-message assistant pending">"…"</div>
                    </Show>
                </div>
                <form class="chat-input" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Ask about wills, trusts, or your intake…"
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || store.chat().read().is_pending()>"Send"</button>
                </form>
                <div class="chat-actions">
                    <button
                        type="button"
                        class="secondary"
                        disabled=move || store.chat().read().is_pending()
                        on:click=move |_| {
                            send_turn(ctx, DRAFT_CHECKLIST_PROMPT);
                        }
                    >
                        "Draft checklist"
                    </button>
                    <button type="button" class="secondary" on:click=on_clear>"Clear"</button>
                </div>
                <p class="chat-disclaimer">"The assistant gives general information, not legal advice."</p>
            </aside>
        </Show>
    }
}

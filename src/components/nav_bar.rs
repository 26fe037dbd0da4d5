//! Navigation Bar Component
//!
//! Route links, server status badge and the assistant toggle.

use leptos::prelude::*;

use crate::router::Route;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

const NAV_ROUTES: [Route; 5] = [Route::Home, Route::Services, Route::Start, Route::Summary, Route::Privacy];

#[component]
pub fn NavBar(route: ReadSignal<Route>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    view! {
        <header class="nav-bar">
            <a class="brand" href=Route::Home.hash()>"Wedderburn"</a>
            <nav>
                {NAV_ROUTES.into_iter().map(|r| view! {
                    <a
                        href=r.hash()
                        class=move || if route.get() == r { "nav-link active" } else { "nav-link" }
                    >
                        {r.title()}
                    </a>
                }).collect_view()}
            </nav>
            <span class=move || store.server().get().css_class()>
                {move || store.server().get().label()}
            </span>
            <button type="button" class="chat-toggle" on:click=move |_| ctx.toggle_chat()>
                {move || if store.chat_open().get() { "Hide assistant" } else { "Ask the assistant" }}
            </button>
        </header>
    }
}

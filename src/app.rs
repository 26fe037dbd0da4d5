//! Wedderburn Intake App
//!
//! Shell component: provides context, tracks the hash route and checks the
//! assistant backend on mount.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::components::{
    AdminView, ChatPanel, HomePage, NavBar, PrivacyPage, ServicesPage, SummaryView, ToastStack, WizardView,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::router::{current_route, Route};
use crate::store::{store_refresh_health, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(config, store);
    provide_context(ctx);

    let (route, set_route) = signal(current_route());
    // Listener lives as long as the page
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = current_route();
        info!(route = next.name(), "route changed");
        set_route.set(next);
    });

    // Health check on mount; opening the assistant checks again
    store_refresh_health(&store, ctx.api());

    let page = move || match route.get() {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Services => view! { <ServicesPage /> }.into_any(),
        Route::Privacy => view! { <PrivacyPage /> }.into_any(),
        Route::Start => view! { <WizardView /> }.into_any(),
        Route::Summary => view! { <SummaryView /> }.into_any(),
        Route::Admin => view! { <AdminView /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <NavBar route=route />
            <main class="main-content">{page}</main>
            <ChatPanel />
            <ToastStack />
        </div>
    }
}

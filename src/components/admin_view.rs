//! Admin View Component
//!
//! Lists submissions from the server and opens one into the local draft.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::context::use_app_context;
use crate::models::IntakeListItem;
use crate::router::{navigate, Route};
use crate::store::{store_set_admin, AdminList, AppStateStoreFields, ToastKind};

const SERVER_NOT_RUNNING: &str = "Server not running. Start the intake server to see submissions.";

#[component]
pub fn AdminView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    let load = move || {
        store_set_admin(&store, AdminList::Loading);
        spawn_local(async move {
            let list = match ctx.api().list_intakes().await {
                Ok(items) => AdminList::Loaded(items),
                Err(e) => {
                    warn!(error = %e, "intake list unavailable");
                    AdminList::Unavailable
                }
            };
            store_set_admin(&store, list);
        });
    };

    Effect::new(move |_| load());

    let open = move |id: String| {
        spawn_local(async move {
            match ctx.api().get_intake(&id).await {
                Ok(draft) => match ctx.update_wizard(|w| w.replace_draft(draft)) {
                    Ok(()) => navigate(Route::Summary),
                    Err(e) => ctx.toast(ToastKind::Error, e.to_string()),
                },
                Err(e) => ctx.toast(ToastKind::Error, e.user_message(SERVER_NOT_RUNNING)),
            }
        });
    };

    let row = move |item: IntakeListItem| {
        let id = item.id.clone();
        view! {
            <tr>
                <td>{item.summary.client}</td>
                <td>{item.summary.email}</td>
                <td>{item.summary.state}</td>
                <td>{item.summary.services.join(", ")}</td>
                <td>{item.summary.digital.join(", ")}</td>
                <td>{item.submitted_at}</td>
                <td><button type="button" on:click=move |_| open(id.clone())>"Open"</button></td>
            </tr>
        }
    };

    view! {
        <section class="admin">
            <header class="admin-header">
                <h1>"Submissions"</h1>
                <button type="button" class="secondary" on:click=move |_| load()>"Refresh"</button>
            </header>
            {move || match store.admin().get() {
                AdminList::Loading => view! { <p>"Loading…"</p> }.into_any(),
                AdminList::Unavailable => view! { <p class="placeholder">{SERVER_NOT_RUNNING}</p> }.into_any(),
                AdminList::Loaded(items) if items.is_empty() => {
                    view! { <p class="placeholder">"No submissions yet."</p> }.into_any()
                }
                AdminList::Loaded(items) => view! {
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Client"</th>
                                <th>"Email"</th>
                                <th>"State"</th>
                                <th>"Services"</th>
                                <th>"Digital"</th>
                                <th>"Submitted"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{items.into_iter().map(row).collect_view()}</tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}

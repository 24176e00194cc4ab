//! Schedule List Component
//!
//! Renders the list container contents. Text goes in as text nodes and each
//! delete button gets its own click handler carrying the row id.

use leptos::*;

use jadwal::schedule::{ListView, RowView, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};

/// Contents of `#jadwalList`; empty until the first load finishes
#[component]
pub fn ScheduleList(
    list: RwSignal<Option<ListView>>,
    #[prop(into)]
    on_delete: Callback<i64>,
) -> impl IntoView {
    move || match list.get() {
        None => view! {}.into_view(),
        Some(ListView::Placeholder) => view! {
            <div class="item">
                <div class="item-left">
                    <b>{PLACEHOLDER_TITLE}</b>
                    <small>{PLACEHOLDER_HINT}</small>
                </div>
            </div>
        }
        .into_view(),
        Some(ListView::Rows(rows)) => rows
            .into_iter()
            .map(|row| view! { <ScheduleRow row=row on_delete=on_delete /> })
            .collect_view(),
    }
}

#[component]
fn ScheduleRow(row: RowView, on_delete: Callback<i64>) -> impl IntoView {
    let id = row.id;

    view! {
        <div class="item">
            <div class="item-left">
                <b>{row.title}</b>
                <small>{row.subtitle}</small>
            </div>
            <button class="btn-delete" on:click=move |_| on_delete.call(id)>
                "✕"
            </button>
        </div>
    }
}

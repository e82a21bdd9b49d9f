use crate::shared::grid::{ColumnDef, GridRecord, TableState};
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Выпадающий список скрываемых колонок
#[component]
pub fn ColumnVisibilityMenu<T>(
    columns: Arc<Vec<ColumnDef<T>>>,
    state: RwSignal<TableState>,
) -> impl IntoView
where
    T: GridRecord,
{
    let open = RwSignal::new(false);

    let items = columns
        .iter()
        .filter(|c| c.is_data() && c.hideable)
        .map(|col| {
            let key = col.key;
            view! {
                <label class="column-menu__item">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.is_column_visible(key))
                        on:change=move |ev| {
                            let visible = event_target_checked(&ev);
                            state.update(|s| s.set_column_visible(key, visible));
                        }
                    />
                    {col.header}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="column-menu">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| open.update(|o| *o = !*o)
            >
                {icon("columns")}
                " Колонки"
            </Button>
            <div
                class="column-menu__dropdown"
                style:display=move || if open.get() { "block" } else { "none" }
            >
                {items}
            </div>
        </div>
    }
}

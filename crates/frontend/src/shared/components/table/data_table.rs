//! Универсальная таблица записей.
//!
//! Таблица только рисует готовую [`RowModel`] и пишет в [`TableState`]:
//! сортировку по клику на заголовок, выбор строк и страницы. Команды строк
//! уходят в [`ActionRegistry`] страницы.
//!
//! ```text
//! <DataTable
//!     columns=columns.clone()
//!     model=model
//!     state=page.state
//!     registry=registry
//! />
//! ```

use super::sortable_header_cell::SortableHeaderCell;
use super::table_header_checkbox::TableHeaderCheckbox;
use crate::shared::grid::{
    ActionRegistry, Align, CellRender, ColumnDef, ColumnRole, GridRecord, RecordId, RowAction,
    RowModel, SelectionState, TableState,
};
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

fn align_name(align: Align) -> &'static str {
    match align {
        Align::Left => "left",
        Align::Right => "right",
    }
}

#[component]
pub fn DataTable<T>(
    /// Все колонки таблицы, включая скрытые
    columns: Arc<Vec<ColumnDef<T>>>,

    #[prop(into)]
    model: Signal<RowModel<T>>,

    state: RwSignal<TableState>,

    registry: ActionRegistry,

    /// Текст для пустой таблицы
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView
where
    T: GridRecord,
{
    let column_count = columns.len();
    let empty_text = empty_text.unwrap_or_else(|| "Нет данных".to_string());

    // Меняется только при скрытии/показе колонок
    let visible_keys = {
        let columns = columns.clone();
        Memo::new(move |_| {
            state.with(|s| {
                s.visible_columns(&columns)
                    .into_iter()
                    .map(|c| c.key)
                    .collect::<Vec<&'static str>>()
            })
        })
    };
    let visible = {
        let columns = columns.clone();
        Signal::derive(move || {
            let keys = visible_keys.get();
            columns
                .iter()
                .filter(|c| keys.contains(&c.key))
                .copied()
                .collect::<Vec<ColumnDef<T>>>()
        })
    };

    let page_ids = Signal::derive(move || {
        model.with(|m| m.rows.iter().map(|r| r.record_id()).collect::<Vec<RecordId>>())
    });
    let page_selection = Signal::derive(move || {
        let ids = page_ids.get();
        state.with(|s| s.page_selection(&ids))
    });

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|col| header_cell(col, state, page_selection, page_ids))
                                .collect_view()
                        }}
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {move || {
                        let cols = visible.get();
                        let empty_text = empty_text.clone();
                        model.with(|m| {
                            if m.rows.is_empty() {
                                view! {
                                    <TableRow>
                                        <TableCell attr:colspan=column_count.to_string()>
                                            <div class="table__empty">{empty_text}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any()
                            } else {
                                m.rows
                                    .iter()
                                    .map(|row| render_row(row, &cols, state, &registry))
                                    .collect_view()
                                    .into_any()
                            }
                        })
                    }}
                </TableBody>
            </Table>

            <div class="table__footer">
                {move || {
                    model.with(|m| {
                        format!("Выбрано {} из {} строк", m.total_selected, m.total_filtered)
                    })
                }}
            </div>
        </div>
    }
}

fn header_cell<T: GridRecord>(
    col: ColumnDef<T>,
    state: RwSignal<TableState>,
    page_selection: Signal<SelectionState>,
    page_ids: Signal<Vec<RecordId>>,
) -> AnyView {
    match col.role {
        ColumnRole::Selection => view! {
            <TableHeaderCheckbox
                state=page_selection
                on_change=Callback::new(move |checked: bool| {
                    let ids = page_ids.get_untracked();
                    state.update(|s| s.toggle_page(&ids, checked));
                })
            />
        }
        .into_any(),
        ColumnRole::Actions => view! {
            <TableHeaderCell resizable=false class="table__header-cell--actions">
                "Действия"
            </TableHeaderCell>
        }
        .into_any(),
        ColumnRole::Display if col.sortable => {
            let key = col.key;
            view! {
                <SortableHeaderCell
                    label=col.header
                    direction=Signal::derive(move || state.with(|s| s.sort_direction(key)))
                    on_sort=Callback::new(move |multi: bool| {
                        state.update(|s| s.toggle_sort(key, multi));
                    })
                    align=align_name(col.align)
                />
            }
            .into_any()
        }
        ColumnRole::Display => view! {
            <TableHeaderCell resizable=false>{col.header}</TableHeaderCell>
        }
        .into_any(),
    }
}

fn render_row<T: GridRecord>(
    row: &T,
    columns: &[ColumnDef<T>],
    state: RwSignal<TableState>,
    registry: &ActionRegistry,
) -> AnyView {
    let id = row.record_id();
    let cells = columns
        .iter()
        .map(|col| render_cell(row, col, id, state, registry))
        .collect_view();
    view! { <TableRow>{cells}</TableRow> }.into_any()
}

fn render_cell<T: GridRecord>(
    row: &T,
    col: &ColumnDef<T>,
    id: RecordId,
    state: RwSignal<TableState>,
    registry: &ActionRegistry,
) -> AnyView {
    match col.role {
        ColumnRole::Selection => view! {
            <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || state.with(|s| s.is_selected(id))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        state.update(|s| s.set_row_selected(id, checked));
                    }
                />
            </TableCell>
        }
        .into_any(),
        ColumnRole::Actions => {
            let buttons = col
                .actions
                .iter()
                .copied()
                .filter(|action| registry.handles(*action))
                .map(|action| action_button(row, action, id, registry.clone()))
                .collect_view();
            view! {
                <TableCell class="table__cell--actions">
                    <div class="table__actions">{buttons}</div>
                </TableCell>
            }
            .into_any()
        }
        ColumnRole::Display => {
            let text = col.render_text(row);
            let content = match col.render {
                CellRender::Text => view! { <span>{text}</span> }.into_any(),
                CellRender::Badge(tone) => {
                    let class = format!("badge badge--{}", tone(row));
                    view! { <span class=class>{text}</span> }.into_any()
                }
                CellRender::Image if text.is_empty() => {
                    view! { <span class="table__muted">"—"</span> }.into_any()
                }
                CellRender::Image => {
                    view! { <img class="table__image" src=text alt=col.header /> }.into_any()
                }
            };
            let class = match col.align {
                Align::Right => "table__cell--right",
                Align::Left => "",
            };
            view! {
                <TableCell class=class>
                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
    }
}

/// Кнопка команды строки. Удаление заблокированной записи недоступно,
/// причина показывается во всплывающей подсказке.
fn action_button<T: GridRecord>(
    row: &T,
    action: RowAction,
    id: RecordId,
    registry: ActionRegistry,
) -> AnyView {
    let blocker = match action {
        RowAction::OpenDelete => row.delete_blocker(),
        _ => None,
    };
    let disabled = blocker.is_some();
    let title = blocker.unwrap_or_else(|| action.title().to_string());
    let class = match action {
        RowAction::OpenDelete => "button button--icon button--danger-ghost",
        _ => "button button--icon",
    };

    view! {
        <button
            class=class
            title=title
            disabled=disabled
            on:click=move |_| {
                registry.dispatch(action, id);
            }
        >
            {icon(action.icon())}
        </button>
    }
    .into_any()
}

//! Сортируемая ячейка заголовка.
//!
//! Клик сортирует только по этой колонке, Shift+клик добавляет колонку к
//! уже выбранной сортировке.

use crate::shared::grid::SortDirection;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::*;

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

fn sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Текущее направление сортировки этой колонки
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    /// Аргумент: зажат ли Shift (мультисортировка)
    on_sort: Callback<bool>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |ev: MouseEvent| on_sort.run(ev.shift_key())
            >
                {label}
                <span class=move || sort_class(direction.get())>
                    {move || sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_follows_direction() {
        assert_eq!(sort_indicator(Some(SortDirection::Asc)), " ▲");
        assert_eq!(sort_indicator(Some(SortDirection::Desc)), " ▼");
        assert_eq!(sort_indicator(None), " ⇅");
        assert_eq!(sort_class(None), "sort-icon");
    }
}

//! Чекбокс "выбрать все" в заголовке таблицы.
//!
//! ```text
//! <TableHeaderCheckbox
//!     state=page_selection
//!     on_change=Callback::new(move |checked: bool| {
//!         state.update(|s| s.toggle_page(&page_ids.get_untracked(), checked))
//!     })
//! />
//! ```

use crate::shared::grid::SelectionState;
use leptos::prelude::*;
use leptos::prelude::event_target_checked;
use thaw::*;
use wasm_bindgen::JsCast;

/// Три состояния: ничего не выбрано, выбрана часть страницы, выбрана вся страница
#[component]
pub fn TableHeaderCheckbox(
    /// Состояние выбора строк текущей страницы
    #[prop(into)]
    state: Signal<SelectionState>,

    /// true = выбрать страницу, false = снять выбор со страницы
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let partial = state.get() == SelectionState::Some;
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(partial);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Выбрать все на странице"
                prop:checked=move || state.get() == SelectionState::All
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}

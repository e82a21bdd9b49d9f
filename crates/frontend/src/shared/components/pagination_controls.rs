use crate::shared::icons::icon;
use leptos::prelude::*;

/// Постраничная навигация под таблицей
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of filtered rows
    #[prop(into)]
    total_count: Signal<usize>,

    /// Номера первой и последней строки страницы (с 1)
    #[prop(into)]
    range: Signal<(usize, usize)>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Варианты размера страницы; пустой список скрывает выбор
    #[prop(optional)]
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let show_size_select = !page_size_options.is_empty();
    let fallback_size = page_size_options.first().copied().unwrap_or(5);
    let last_page = move || total_pages.get().saturating_sub(1);

    view! {
        <div class="pagination-controls">
            <span class="pagination-range">
                {move || {
                    let (first, last) = range.get();
                    format!("Показано {}–{} из {}", first, last, total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=move || current_page.get() == 0
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get() + 1, total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run((current_page.get() + 1).min(last_page()))
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last_page())
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            {show_size_select.then(|| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                        on_page_size_change.run(val);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} на странице", size)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}

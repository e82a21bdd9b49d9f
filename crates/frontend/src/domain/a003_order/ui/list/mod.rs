use crate::domain::a003_order::api;
use crate::domain::a003_order::columns::{columns, SEARCH_COLUMN};
use crate::domain::a003_order::ui::details::OrderDetailsModal;
use crate::shared::api_utils::use_api_client;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{ColumnVisibilityMenu, DataTable};
use crate::shared::config::AppConfig;
use crate::shared::grid::{ActionRegistry, RecordId, RowAction, TableState};
use crate::shared::grid_page::GridPage;
use crate::shared::icons::icon;
use contracts::domain::a003_order::aggregate::Order;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Заказы только просматриваются: изменений с этой страницы нет
#[component]
pub fn OrderList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let client = use_api_client();
    let page: GridPage<Order> = GridPage::new(TableState::new(config.grid.page_size));
    let state = page.state;
    let columns = Arc::new(columns());
    let model = page.model(columns.clone());

    let details_target = RwSignal::new(Option::<RecordId>::None);
    let registry =
        ActionRegistry::new().on(RowAction::OpenDetails, move |id| details_target.set(Some(id)));

    let load = {
        let page = page.clone();
        let client = client.clone();
        move || {
            let client = client.clone();
            page.load(async move { api::fetch_all(&client).await });
        }
    };
    load();

    let page_size_options = config.grid.page_size_choices();
    let error = page.error;
    let loading = page.loading;

    view! {
        <div class="page">
            <PageHeader
                title="Заказы"
                subtitle=Signal::derive(move || format!("Всего: {}", model.with(|m| m.total_filtered)))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click={
                        let load = load.clone();
                        move |_| load()
                    }
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                </Button>
            </PageHeader>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="filter-panel-header">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter_value(SEARCH_COLUMN).to_string()))
                    on_change=Callback::new(move |text: String| {
                        state.update(|s| s.set_filter(SEARCH_COLUMN, text));
                    })
                    placeholder="Поиск по клиенту..."
                />
                <ColumnVisibilityMenu columns=columns.clone() state=state />
            </div>

            <DataTable
                columns=columns
                model=model
                state=state
                registry=registry
                empty_text="Заказов пока нет"
            />

            <PaginationControls
                current_page=Signal::derive(move || model.with(|m| m.page_index))
                total_pages=Signal::derive(move || model.with(|m| m.page_count))
                total_count=Signal::derive(move || model.with(|m| m.total_filtered))
                range=Signal::derive(move || model.with(|m| (m.first_row(), m.last_row())))
                page_size=Signal::derive(move || state.with(|s| s.pagination.page_size))
                on_page_change=Callback::new(move |index: usize| state.update(|s| s.set_page_index(index)))
                on_page_size_change=Callback::new(move |size: usize| state.update(|s| s.set_page_size(size)))
                page_size_options=page_size_options
            />

            {move || details_target.get().map(|order_id| view! {
                <OrderDetailsModal
                    order_id=order_id
                    client=client.clone()
                    on_close=Callback::new(move |_| details_target.set(None))
                />
            })}
        </div>
    }
}

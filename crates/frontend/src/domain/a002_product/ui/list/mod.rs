use crate::domain::a001_category::api as category_api;
use crate::domain::a002_product::api;
use crate::domain::a002_product::columns::{columns, SEARCH_COLUMN};
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::api_utils::use_api_client;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{ColumnVisibilityMenu, DataTable};
use crate::shared::config::AppConfig;
use crate::shared::grid::{ActionRegistry, MutationOutput, RecordId, RowAction, TableState};
use crate::shared::grid_page::{FormTarget, GridPage};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDelete;
use contracts::domain::a001_category::aggregate::CategoryRef;
use contracts::domain::a002_product::aggregate::{Product, ProductListParams};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let client = use_api_client();
    let page: GridPage<Product> = GridPage::new(TableState::new(config.grid.page_size));
    let state = page.state;
    let columns = Arc::new(columns());
    let model = page.model(columns.clone());

    let categories = RwSignal::new(Vec::<CategoryRef>::new());
    let category_filter = RwSignal::new(Option::<i64>::None);

    let form_target = RwSignal::new(Option::<FormTarget>::None);
    let delete_target = RwSignal::new(Option::<RecordId>::None);
    let deleting = RwSignal::new(false);

    let registry = ActionRegistry::new()
        .on(RowAction::OpenEdit, move |id| form_target.set(Some(FormTarget::Edit(id))))
        .on(RowAction::OpenDelete, move |id| delete_target.set(Some(id)));

    // Смена категории перезагружает список с сервера
    let load = {
        let page = page.clone();
        let client = client.clone();
        move || {
            let client = client.clone();
            let params = ProductListParams {
                category_id: category_filter.get_untracked(),
            };
            page.sync.update(|s| s.set_scope(params.category_id));
            page.load(async move { api::fetch_list(&client, &params).await });
        }
    };
    load();

    {
        let page = page.clone();
        let client = client.clone();
        spawn_local(async move {
            match category_api::fetch_all(&client).await {
                Ok(list) => {
                    let refs = list.iter().map(CategoryRef::from).collect();
                    let _ = categories.try_set(refs);
                }
                Err(err) => page.report(err),
            }
        });
    }

    let confirm_delete = {
        let page = page.clone();
        let client = client.clone();
        move || {
            let Some(id) = delete_target.get_untracked() else {
                return;
            };
            deleting.set(true);
            let client = client.clone();
            let reporter = page.clone();
            page.delete(
                id,
                async move { api::delete(&client, id).await.map(|_| MutationOutput::Deleted) },
                move |result| {
                    let _ = deleting.try_set(false);
                    let _ = delete_target.try_set(None);
                    if let Err(err) = result {
                        reporter.report(err);
                    }
                },
            );
        }
    };

    let delete_subject = {
        let page = page.clone();
        Signal::derive(move || {
            delete_target
                .get()
                .and_then(|id| page.sync.with(|s| s.get(id).map(|p| p.name.clone())))
                .unwrap_or_default()
        })
    };

    let reload = load.clone();
    let page_size_options = config.grid.page_size_choices();
    let error = page.error;
    let loading = page.loading;

    view! {
        <div class="page">
            <PageHeader
                title="Товары"
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
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form_target.set(Some(FormTarget::Create))
                >
                    {icon("plus")}
                    " Новый товар"
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
                    placeholder="Поиск по названию..."
                />
                <select
                    class="filter-select"
                    prop:value=move || category_filter.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let selected = event_target_value(&ev).parse::<i64>().ok();
                        category_filter.set(selected);
                        state.update(|s| s.set_page_index(0));
                        reload();
                    }
                >
                    <option value="">"Все категории"</option>
                    {move || categories.get().into_iter().map(|c| {
                        let selected = category_filter.get_untracked() == Some(c.id);
                        view! { <option value=c.id.to_string() selected=selected>{c.name}</option> }
                    }).collect_view()}
                </select>
                <ColumnVisibilityMenu columns=columns.clone() state=state />
            </div>

            <DataTable
                columns=columns
                model=model
                state=state
                registry=registry
                empty_text="Товары не найдены"
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

            {
                let page = page.clone();
                let client = client.clone();
                move || form_target.get().map(|target| {
                    let default_category = category_filter.get_untracked();
                    view! {
                        <ProductDetails
                            target=target
                            page=page.clone()
                            client=client.clone()
                            categories=categories
                            default_category=default_category
                            on_close=Callback::new(move |_| form_target.set(None))
                        />
                    }
                })
            }

            {
                let confirm_delete = confirm_delete.clone();
                move || delete_target.get().is_some().then(|| {
                    let confirm_delete = confirm_delete.clone();
                    view! {
                        <ConfirmDelete
                            subject=delete_subject
                            busy=deleting
                            on_confirm=Callback::new(move |_| confirm_delete())
                            on_close=Callback::new(move |_| delete_target.set(None))
                        />
                    }
                })
            }
        </div>
    }
}

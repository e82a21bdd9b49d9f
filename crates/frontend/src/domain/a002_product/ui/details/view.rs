use super::view_model::ProductDetailsViewModel;
use crate::shared::api_utils::ApiClient;
use crate::shared::grid_page::{FormTarget, GridPage};
use crate::shared::modal::Modal;
use contracts::domain::a001_category::aggregate::CategoryRef;
use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn ProductDetails(
    target: FormTarget,
    page: GridPage<Product>,
    client: ApiClient,
    /// Категории для выпадающего списка
    #[prop(into)]
    categories: Signal<Vec<CategoryRef>>,
    /// Категория из фильтра страницы
    default_category: Option<i64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let existing = match target {
        FormTarget::Edit(id) => page.record(id),
        FormTarget::Create => None,
    };
    let vm = ProductDetailsViewModel::new(target, existing.as_ref(), default_category);
    let form = vm.form;
    let error = vm.error;
    let saving = vm.saving;
    let title = vm.title();

    let save = {
        let vm = vm.clone();
        move || vm.save_command(&page, client.clone(), on_close)
    };

    view! {
        <Modal
            title=Signal::derive(move || title.to_string())
            on_close=on_close
            footer=Arc::new(move || {
                let save = save.clone();
                view! {
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Отмена"
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || saving.get()
                        on:click=move |_| save()
                    >
                        {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </button>
                }
                .into_any()
            })
        >
            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="product-category">"Категория"</label>
                    <select
                        id="product-category"
                        prop:value=move || form.with(|f| f.category_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let selected = event_target_value(&ev).parse::<i64>().ok();
                            form.update(|f| f.category_id = selected);
                        }
                    >
                        <option value="">"Выберите категорию"</option>
                        {move || categories.get().into_iter().map(|c| {
                            let selected = form.with_untracked(|f| f.category_id == Some(c.id));
                            view! {
                                <option value=c.id.to_string() selected=selected>{c.name}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="product-name">"Название"</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-description">"Описание"</label>
                    <textarea
                        id="product-description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        rows="3"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product-quantity">"Количество"</label>
                        <input
                            type="number"
                            id="product-quantity"
                            min="0"
                            prop:value=move || form.with(|f| f.quantity.to_string())
                            on:input=move |ev| {
                                let quantity = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.quantity = quantity);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="product-price">"Цена, Kz"</label>
                        <input
                            type="number"
                            id="product-price"
                            min="0"
                            step="0.01"
                            prop:value=move || form.with(|f| f.price.to_string())
                            on:input=move |ev| {
                                let price = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.price = price);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="product-discount">"Скидка, %"</label>
                        <input
                            type="number"
                            id="product-discount"
                            min="0"
                            max="100"
                            prop:value=move || form.with(|f| format!("{}", (f.discount * 100.0).round()))
                            on:input=move |ev| {
                                let percent: f64 = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.discount = percent / 100.0);
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="product-image">"Ссылка на изображение"</label>
                    <input
                        type="url"
                        id="product-image"
                        placeholder="https://"
                        prop:value=move || form.with(|f| f.image_url.clone())
                        on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                    />
                </div>
            </div>
        </Modal>
    }
}

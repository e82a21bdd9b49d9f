use super::view_model::CategoryDetailsViewModel;
use crate::shared::api_utils::ApiClient;
use crate::shared::grid_page::{FormTarget, GridPage};
use crate::shared::modal::Modal;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn CategoryDetails(
    target: FormTarget,
    page: GridPage<Category>,
    client: ApiClient,
    on_close: Callback<()>,
) -> impl IntoView {
    let existing = match target {
        FormTarget::Edit(id) => page.record(id),
        FormTarget::Create => None,
    };
    let vm = CategoryDetailsViewModel::new(target, existing.as_ref());
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
                    <label for="category-name">"Название"</label>
                    <input
                        type="text"
                        id="category-name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Например, Напитки"
                    />
                </div>

                <div class="form-group">
                    <label for="category-description">"Описание"</label>
                    <textarea
                        id="category-description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        rows="3"
                    />
                </div>
            </div>
        </Modal>
    }
}

use crate::domain::a002_product::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::grid::{GridError, MutationOutput, SyncOutcome};
use crate::shared::grid_page::{FormTarget, GridPage};
use contracts::domain::a002_product::aggregate::{Product, ProductDto};
use leptos::prelude::*;

#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    target: FormTarget,
}

impl ProductDetailsViewModel {
    /// Новый товар получает категорию из фильтра страницы, если он выбран
    pub fn new(target: FormTarget, existing: Option<&Product>, category_id: Option<i64>) -> Self {
        let dto = match existing {
            Some(product) => ProductDto::from(product),
            None => ProductDto {
                category_id,
                ..ProductDto::default()
            },
        };
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            target,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            FormTarget::Edit(_) => "Редактирование товара",
            FormTarget::Create => "Новый товар",
        }
    }

    pub fn save_command(&self, page: &GridPage<Product>, client: ApiClient, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(msg) = dto.validate() {
            self.error.set(Some(msg));
            return;
        }

        self.saving.set(true);
        self.error.set(None);

        let error = self.error;
        let saving = self.saving;
        let on_done = move |result: Result<SyncOutcome, GridError>| {
            let _ = saving.try_set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
        };

        match self.target {
            FormTarget::Create => page.create(
                async move { api::create(&client, &dto).await.map(MutationOutput::Created) },
                on_done,
            ),
            FormTarget::Edit(id) => page.update(
                id,
                async move { api::update(&client, id, &dto).await.map(MutationOutput::Updated) },
                on_done,
            ),
        }
    }
}

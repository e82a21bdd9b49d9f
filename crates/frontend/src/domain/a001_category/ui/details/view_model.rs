use crate::domain::a001_category::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::grid::{GridError, MutationOutput, SyncOutcome};
use crate::shared::grid_page::{FormTarget, GridPage};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use leptos::prelude::*;

#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    target: FormTarget,
}

impl CategoryDetailsViewModel {
    pub fn new(target: FormTarget, existing: Option<&Category>) -> Self {
        let dto = existing.map(CategoryDto::from).unwrap_or_default();
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            target,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.target, FormTarget::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Редактирование категории"
        } else {
            "Новая категория"
        }
    }

    /// Проверяет форму и отправляет её; `on_saved` вызывается после
    /// применения результата к таблице
    pub fn save_command(&self, page: &GridPage<Category>, client: ApiClient, on_saved: Callback<()>) {
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

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Поле поиска с задержкой: `on_change` получает текст, когда ввод
/// затих на `delay_ms`.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для начального значения и сброса снаружи)
    #[prop(into)]
    value: Signal<String>,

    on_change: Callback<String>,

    #[prop(optional, into)]
    placeholder: String,

    #[prop(optional, default = 300)]
    delay_ms: u32,
) -> impl IntoView {
    let draft = RwSignal::new(value.get_untracked());
    let generation = StoredValue::new(0u64);

    // сброс фильтра снаружи
    Effect::new(move |_| {
        let external = value.get();
        if draft.get_untracked() != external {
            draft.set(external);
        }
    });

    Effect::new(move |prev: Option<()>| {
        let text = draft.get();
        if prev.is_none() || text == value.get_untracked() {
            return;
        }
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let still_current = generation
                .try_with_value(|g| *g == current)
                .unwrap_or(false);
            if still_current {
                on_change.run(text);
            }
        });
    });

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <Input value=draft placeholder=placeholder />
        </div>
    }
}

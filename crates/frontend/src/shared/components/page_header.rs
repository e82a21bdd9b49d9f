use leptos::prelude::*;

/// Заголовок страницы-списка с кнопками действий справа
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Подпись под заголовком, например число записей
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|s| view! {
                    <div class="page-header__subtitle">{move || s.get()}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

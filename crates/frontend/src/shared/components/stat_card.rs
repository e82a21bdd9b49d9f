use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка одного показателя панели
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Отформатированное значение (None = загрузка или ошибка)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional subtitle below the value
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());
    let card_class = move || {
        if value.with(|v| v.is_some()) {
            "stat-card"
        } else {
            "stat-card stat-card--muted"
        }
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

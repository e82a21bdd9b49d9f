use crate::dashboards::d400_stats::api;
use crate::shared::api_utils::use_api_client;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_int, format_money};
use crate::system::auth::context::{use_granted_session, use_session_context};
use contracts::dashboards::d400_stats::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Главная панель: четыре карточки показателей
#[component]
pub fn StatsDashboard() -> impl IntoView {
    let client = use_api_client();
    let ctx = use_session_context();
    let user_name = use_granted_session().user.name;

    let (data, set_data) = signal(None::<DashboardStats>);
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        let client = client.clone();
        let ctx = ctx.clone();
        set_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_stats(&client).await {
                Ok(stats) => {
                    let _ = set_data.try_set(Some(stats));
                }
                Err(e) => {
                    log::error!("Failed to load dashboard stats: {}", e);
                    ctx.report(e, error);
                }
            }
            let _ = set_loading.try_set(false);
        });
    };
    load();

    let card = move |f: fn(&DashboardStats) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    view! {
        <div class="page">
            <PageHeader title=format!("С возвращением, {}", user_name)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click={
                        let load = load.clone();
                        move |_| load()
                    }
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                </Button>
            </PageHeader>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="stat-cards">
                <StatCard
                    label="Продажи"
                    icon_name="sales"
                    value=card(|s| format_money(s.total_sales))
                    subtitle="Общая сумма продаж"
                />
                <StatCard
                    label="Товары"
                    icon_name="products"
                    value=card(|s| format_int(s.product_count))
                    subtitle="Всего товаров"
                />
                <StatCard
                    label="Заказы"
                    icon_name="orders"
                    value=card(|s| format_int(s.order_count))
                    subtitle="Всего заказов"
                />
                <StatCard
                    label="Клиенты"
                    icon_name="customers"
                    value=card(|s| format_int(s.customer_count))
                    subtitle="Зарегистрированных клиентов"
                />
            </div>
        </div>
    }
}

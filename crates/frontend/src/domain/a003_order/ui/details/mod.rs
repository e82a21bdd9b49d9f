use crate::domain::a003_order::api;
use crate::domain::a003_order::columns::{pay_tone, status_tone};
use crate::shared::api_utils::ApiClient;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::modal::Modal;
use contracts::domain::a003_order::aggregate::{OrderDetails, UNKNOWN_CLIENT};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Детали заказа с позициями
#[component]
pub fn OrderDetailsModal(
    order_id: i64,
    client: ApiClient,
    on_close: Callback<()>,
) -> impl IntoView {
    let details = RwSignal::new(Option::<OrderDetails>::None);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_details(&client, order_id).await {
            Ok(mut loaded) => {
                api::resolve_item_names(&client, &mut loaded).await;
                let _ = details.try_set(Some(loaded));
            }
            Err(err) => {
                let _ = error.try_set(Some(err.to_string()));
            }
        }
    });

    view! {
        <Modal
            title=Signal::derive(move || format!("Заказ №{}", order_id))
            on_close=on_close
        >
            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            {move || match details.get() {
                None if error.with(|e| e.is_none()) => view! {
                    <div class="loading">"Загрузка..."</div>
                }
                .into_any(),
                None => ().into_any(),
                Some(d) => render_details(d).into_any(),
            }}
        </Modal>
    }
}

fn render_details(d: OrderDetails) -> impl IntoView {
    let client_name = d
        .client_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());
    let items_total = d.items_total();
    let total_price = d.total_price;
    // сумма позиций расходится с суммой заказа (доставка, скидки)
    let mismatch = !d.items.is_empty() && (items_total - total_price).abs() > 0.005;
    let status_class = format!("badge badge--{}", status_tone(&d.status));
    let pay_class = format!("badge badge--{}", pay_tone(&d.pay_status));

    view! {
        <div class="order-details">
            <dl class="order-details__summary">
                <dt>"Клиент"</dt>
                <dd>{client_name}</dd>
                <dt>"Телефон"</dt>
                <dd>{d.client_telephone.clone()}</dd>
                <dt>"Адрес"</dt>
                <dd>{d.address.clone()}</dd>
                <dt>"Статус"</dt>
                <dd><span class=status_class>{d.status.display_name().to_string()}</span></dd>
                <dt>"Оплата"</dt>
                <dd>
                    <span class=pay_class>{d.pay_status.display_name().to_string()}</span>
                    " " {d.payment_mode.clone()}
                </dd>
                <dt>"Создан"</dt>
                <dd>{format_datetime(&d.created_at)}</dd>
            </dl>

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Товар"</th>
                        <th class="table__header-cell table__cell--right">"Кол-во"</th>
                        <th class="table__header-cell table__cell--right">"Цена"</th>
                        <th class="table__header-cell table__cell--right">"Сумма"</th>
                    </tr>
                </thead>
                <tbody>
                    {d.items.iter().map(|item| view! {
                        <tr class="table__row">
                            <td class="table__cell">{item.product_name.clone()}</td>
                            <td class="table__cell table__cell--right">{item.quantity}</td>
                            <td class="table__cell table__cell--right">{format_money(item.price)}</td>
                            <td class="table__cell table__cell--right">
                                {format_money(item.price * item.quantity as f64)}
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>

            <div class="order-details__total">
                "Итого: " {format_money(items_total)}
                {mismatch.then(|| view! {
                    <span class="order-details__note">
                        {format!(" (к оплате {})", format_money(total_price))}
                    </span>
                })}
            </div>
        </div>
    }
}

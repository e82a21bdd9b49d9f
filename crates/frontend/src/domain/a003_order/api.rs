use crate::domain::a002_product::api as product_api;
use crate::shared::api_utils::ApiClient;
use crate::shared::format::parse_timestamp;
use crate::shared::grid::GridError;
use contracts::domain::a003_order::aggregate::{Order, OrderDetails};
use std::cmp::Reverse;

/// Подпись позиции, если название товара неизвестно
pub const UNKNOWN_PRODUCT: &str = "Неизвестный товар";

/// Заказы, новые сверху
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Order>, GridError> {
    let orders: Vec<Order> = client.get_json("/orders").await?;
    Ok(newest_first(orders))
}

/// Сортировка по дате создания по убыванию; заказы без даты в конце
pub fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by_key(|o| Reverse(parse_timestamp(&o.created_at)));
    orders
}

pub async fn fetch_details(client: &ApiClient, order_id: i64) -> Result<OrderDetails, GridError> {
    client
        .get_json(&format!("/orders/admin/orders/details/{}", order_id))
        .await
}

/// Названия товаров позиций. Если запрос названия не удался, берётся
/// название из самой позиции.
pub async fn resolve_item_names(client: &ApiClient, details: &mut OrderDetails) {
    for item in details.items.iter_mut() {
        match product_api::fetch_name(client, item.product_id).await {
            Ok(name) if !name.trim().is_empty() => item.product_name = name,
            Ok(_) => {}
            Err(err) => {
                log::warn!("product name {} not resolved: {}", item.product_id, err);
            }
        }
        if item.product_name.trim().is_empty() {
            item.product_name = UNKNOWN_PRODUCT.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::order_status::{OrderStatus, PayStatus};

    fn order(id: i64, created_at: &str) -> Order {
        Order {
            order_id: id,
            client_name: None,
            client_telephone: String::new(),
            total_price: 0.0,
            address: String::new(),
            status: OrderStatus::Pending,
            pay_status: PayStatus::Unpaid,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_newest_first_puts_undated_last() {
        let sorted = newest_first(vec![
            order(1, "2024-01-10T09:00:00"),
            order(2, ""),
            order(3, "2024-05-01T10:00:00Z"),
            order(4, "2024-03-01"),
        ]);
        let ids: Vec<_> = sorted.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }
}

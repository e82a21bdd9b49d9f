use crate::enums::order_status::{OrderStatus, PayStatus};
use serde::{Deserialize, Serialize};

/// Подпись клиента, если API не вернул имя
pub const UNKNOWN_CLIENT: &str = "Клиент не указан";

/// Строка списка заказов (`GET /orders`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_telephone: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub address: String,
    pub status: OrderStatus,
    pub pay_status: PayStatus,
    #[serde(default)]
    pub created_at: String,
}

impl Order {
    pub fn client_label(&self) -> &str {
        match self.client_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_CLIENT,
        }
    }
}

/// Позиция заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    #[serde(default)]
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Детали заказа (`GET /orders/admin/orders/details/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_id: i64,
    #[serde(default)]
    pub client_id: i64,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_telephone: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub address: String,
    pub status: OrderStatus,
    pub pay_status: PayStatus,
    #[serde(default)]
    pub payment_mode: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl OrderDetails {
    pub fn items_total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * i.quantity as f64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_without_client_name() {
        let json = r#"{
            "orderId": 11,
            "clientName": null,
            "clientTelephone": "923000000",
            "totalPrice": 12000.5,
            "address": "Luanda",
            "status": "SHIPPED",
            "payStatus": "PAID",
            "createdAt": "2024-05-01T10:00:00"
        }"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.order_id, 11);
        assert_eq!(o.client_label(), UNKNOWN_CLIENT);
        assert_eq!(o.status, OrderStatus::Shipped);
        assert_eq!(o.pay_status, PayStatus::Paid);
    }

    #[test]
    fn test_details_items_total() {
        let json = r#"{
            "orderId": 1,
            "status": "PENDING",
            "payStatus": "UNPAID",
            "items": [
                {"productId": 1, "productName": "A", "quantity": 2, "price": 10.0},
                {"productId": 2, "productName": "B", "quantity": 1, "price": 5.5}
            ]
        }"#;
        let d: OrderDetails = serde_json::from_str(json).unwrap();
        assert_eq!(d.items.len(), 2);
        assert_eq!(d.items_total(), 25.5);
    }
}

use serde::{Deserialize, Serialize};

/// Статус доставки заказа
///
/// Неизвестные коды не ломают разбор списка и сохраняются как `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Код статуса в API
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Other(code) => code,
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &str {
        match self {
            OrderStatus::Pending => "Ожидает",
            OrderStatus::Shipped => "Отправлен",
            OrderStatus::Delivered => "Доставлен",
            OrderStatus::Cancelled => "Отменён",
            OrderStatus::Other(code) => code,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "PENDING" => OrderStatus::Pending,
            "SHIPPED" => OrderStatus::Shipped,
            "DELIVERED" => OrderStatus::Delivered,
            "CANCELLED" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(code),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.code().to_string()
    }
}

/// Статус оплаты заказа
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PayStatus {
    Paid,
    Unpaid,
    Other(String),
}

impl PayStatus {
    pub fn code(&self) -> &str {
        match self {
            PayStatus::Paid => "PAID",
            PayStatus::Unpaid => "UNPAID",
            PayStatus::Other(code) => code,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            PayStatus::Paid => "Оплачен",
            PayStatus::Unpaid => "Не оплачен",
            PayStatus::Other(code) => code,
        }
    }
}

impl From<String> for PayStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "PAID" => PayStatus::Paid,
            "UNPAID" => PayStatus::Unpaid,
            _ => PayStatus::Other(code),
        }
    }
}

impl From<PayStatus> for String {
    fn from(status: PayStatus) -> Self {
        status.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_codes() {
        assert_eq!(OrderStatus::from("DELIVERED".to_string()), OrderStatus::Delivered);
        assert_eq!(
            OrderStatus::from("RETURNED".to_string()),
            OrderStatus::Other("RETURNED".into())
        );
        assert_eq!(PayStatus::from("PAID".to_string()).code(), "PAID");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let s = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(s, "\"CANCELLED\"");
        let p: PayStatus = serde_json::from_str("\"UNPAID\"").unwrap();
        assert_eq!(p, PayStatus::Unpaid);
    }
}

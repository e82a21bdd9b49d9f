use serde::{Deserialize, Serialize};

/// Машиночитаемая причина отказа API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    /// Удаление запрещено: на запись ссылаются заказы
    HasDependentOrders,
    NotFound,
    InvalidPayload,
    #[serde(other)]
    Unknown,
}

/// Тело ответа API с ошибкой (`{"message": "...", "reason": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiFailureBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reason: Option<FailureReason>,
}

impl ApiFailureBody {
    /// Разбор тела ошибки; не-JSON тело считается текстом сообщения
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<ApiFailureBody>(body) {
            Ok(parsed) => parsed,
            Err(_) => {
                let text = body.trim();
                Self {
                    message: (!text.is_empty()).then(|| text.to_string()),
                    reason: None,
                }
            }
        }
    }
}

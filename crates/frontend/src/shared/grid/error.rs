use contracts::shared::api_failure::{ApiFailureBody, FailureReason};
use thiserror::Error;

/// Категория отказа, по которой страница выбирает реакцию
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Precondition,
    Transient,
    StaleReference,
    Session,
}

/// Ошибка операции над записями таблицы
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Некорректные данные формы
    #[error("{0}")]
    Validation(String),
    /// Операция запрещена состоянием записи (например, есть связанные заказы)
    #[error("{0}")]
    Precondition(String),
    /// Сетевая ошибка или ошибка сервера
    #[error("Ошибка связи с сервером: {0}")]
    Transient(String),
    /// Запись уже не существует на сервере
    #[error("Запись не найдена: {0}")]
    StaleReference(String),
    /// Сессия недействительна
    #[error("Сессия недействительна: {0}")]
    Session(String),
}

impl GridError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GridError::Validation(_) => FailureKind::Validation,
            GridError::Precondition(_) => FailureKind::Precondition,
            GridError::Transient(_) => FailureKind::Transient,
            GridError::StaleReference(_) => FailureKind::StaleReference,
            GridError::Session(_) => FailureKind::Session,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GridError::Validation(m)
            | GridError::Precondition(m)
            | GridError::Transient(m)
            | GridError::StaleReference(m)
            | GridError::Session(m) => m,
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        GridError::Transient(err.to_string())
    }
}

/// Классификация неуспешного HTTP-ответа
pub fn classify_failure(status: u16, body: &str) -> GridError {
    let parsed = ApiFailureBody::parse(body);
    let message = parsed
        .message
        .clone()
        .unwrap_or_else(|| format!("HTTP {}", status));

    if parsed.reason == Some(FailureReason::HasDependentOrders) {
        return GridError::Precondition(message);
    }
    match status {
        401 | 403 => GridError::Session(message),
        404 => GridError::StaleReference(message),
        409 => GridError::Precondition(message),
        400 | 422 => GridError::Validation(message),
        _ => GridError::Transient(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_status() {
        assert_eq!(classify_failure(401, "").kind(), FailureKind::Session);
        assert_eq!(classify_failure(403, "").kind(), FailureKind::Session);
        assert_eq!(classify_failure(404, "").kind(), FailureKind::StaleReference);
        assert_eq!(classify_failure(409, "").kind(), FailureKind::Precondition);
        assert_eq!(classify_failure(422, "").kind(), FailureKind::Validation);
        assert_eq!(classify_failure(500, "").kind(), FailureKind::Transient);
        assert_eq!(classify_failure(502, "Bad Gateway").message(), "Bad Gateway");
        assert_eq!(classify_failure(503, "").message(), "HTTP 503");
    }

    #[test]
    fn test_dependent_orders_reason_wins_over_status() {
        let err = classify_failure(
            500,
            r#"{"message":"Categoria possui pedidos","reason":"HAS_DEPENDENT_ORDERS"}"#,
        );
        assert_eq!(err.kind(), FailureKind::Precondition);
        assert_eq!(err.to_string(), "Categoria possui pedidos");
    }
}

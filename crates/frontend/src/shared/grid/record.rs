use crate::shared::format::parse_timestamp;
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// Стабильный идентификатор записи внутри одного типа сущности
pub type RecordId = i64;

/// Запись, которую умеет показывать универсальная таблица
pub trait GridRecord: Clone + PartialEq + Send + Sync + 'static {
    fn record_id(&self) -> RecordId;

    /// Причина, по которой запись нельзя удалить ещё до запроса к API.
    /// `None`: удаление разрешено.
    fn delete_blocker(&self) -> Option<String> {
        None
    }

    /// Ключ серверного фильтра списка (например, категория товара).
    /// Запись с другим ключом не попадает в отфильтрованный список.
    fn scope_key(&self) -> Option<i64> {
        None
    }
}

/// Значение ячейки, полученное аксессором колонки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Отметка времени из строки API; нераспознанная строка остаётся текстом
    pub fn timestamp(raw: Option<&str>) -> Self {
        match raw {
            None => CellValue::Empty,
            Some(s) if s.trim().is_empty() => CellValue::Empty,
            Some(s) => match parse_timestamp(s) {
                Some(dt) => CellValue::Timestamp(dt),
                None => CellValue::Text(s.to_string()),
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Number(_) => 2,
            CellValue::Timestamp(_) => 3,
            CellValue::Text(_) => 4,
        }
    }

    /// Сравнение для сортировки: числа сравниваются как числа, текст без учёта регистра
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::{Bool, Integer, Number, Text, Timestamp};
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Integer(a), Number(b)) => (*a as f64).total_cmp(b),
            (Number(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Number(a), Number(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Timestamp(a), Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Текст, по которому работает фильтр и вывод по умолчанию
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(v) => v.to_string(),
            CellValue::Number(v) => v.to_string(),
            CellValue::Bool(true) => "Да".to_string(),
            CellValue::Bool(false) => "Нет".to_string(),
            CellValue::Timestamp(dt) => dt.format("%d.%m.%Y").to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Integer(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_numerically() {
        // "10" < "9" лексикографически, но не численно
        assert_eq!(CellValue::Integer(9).compare(&CellValue::Integer(10)), Ordering::Less);
        assert_eq!(CellValue::Number(2.5).compare(&CellValue::Integer(2)), Ordering::Greater);
    }

    #[test]
    fn test_text_compare_ignores_case() {
        assert_eq!(
            CellValue::text("apple").compare(&CellValue::text("Banana")),
            Ordering::Less
        );
        assert_eq!(CellValue::text("A").compare(&CellValue::text("a")), Ordering::Equal);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(CellValue::Empty.compare(&CellValue::text("a")), Ordering::Less);
        assert_eq!(CellValue::Integer(1).compare(&CellValue::Empty), Ordering::Greater);
    }

    #[test]
    fn test_timestamp_cells() {
        let a = CellValue::timestamp(Some("2024-01-02T00:00:00"));
        let b = CellValue::timestamp(Some("2023-12-31T23:59:59"));
        assert_eq!(a.compare(&b), Ordering::Greater);
        assert_eq!(a.display_text(), "02.01.2024");
        assert_eq!(CellValue::timestamp(None), CellValue::Empty);
        assert_eq!(CellValue::timestamp(Some("amanhã")), CellValue::text("amanhã"));
    }
}

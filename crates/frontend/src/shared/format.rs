//! Форматирование значений для ячеек таблиц и карточек

use crate::shared::grid::CellValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Разбор отметки времени из API.
///
/// API отдаёт как `2024-03-15T14:02:26.123` (без зоны), так и RFC 3339
/// с зоной; иногда приходит только дата.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `2024-03-15T14:02:26` -> `15.03.2024`; нераспознанная строка возвращается как есть
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `2024-03-15T14:02:26` -> `15.03.2024 14:02`
pub fn format_datetime(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// Группировка целой части по три цифры через пробел
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();
    format!("{}{}", sign, grouped)
}

/// Сумма в кванзах: `1234.5` -> `1 234,50 Kz`
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    format!("{},{} Kz", group_thousands(integer_part), decimal_part)
}

/// Доля в процентах: `0.15` -> `15%`
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Целое с разделителем тысяч
pub fn format_int(value: i64) -> String {
    group_thousands(&value.to_string())
}

/// Форматтер колонки с суммой
pub fn money_cell(value: &CellValue) -> String {
    match value {
        CellValue::Number(v) => format_money(*v),
        CellValue::Integer(v) => format_money(*v as f64),
        other => other.display_text(),
    }
}

/// Форматтер колонки с долей (скидкой)
pub fn percent_cell(value: &CellValue) -> String {
    match value {
        CellValue::Number(v) => format_percent(*v),
        other => other.display_text(),
    }
}

/// Форматтер колонки с датой и временем
pub fn datetime_cell(value: &CellValue) -> String {
    match value {
        CellValue::Timestamp(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        other => other.display_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2024-03-15T14:02:26.123").is_some());
        assert!(parse_timestamp("2024-03-15T14:02:26Z").is_some());
        assert!(parse_timestamp("2024-03-15T14:02:26+01:00").is_some());
        assert!(parse_timestamp("2024-03-15").is_some());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("ontem").is_none());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123"), "15.03.2024");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "1 234,50 Kz");
        assert_eq!(format_money(1234567.891), "1 234 567,89 Kz");
        assert_eq!(format_money(0.0), "0,00 Kz");
        assert_eq!(format_money(-1500.0), "-1 500,00 Kz");
    }

    #[test]
    fn test_format_percent_and_int() {
        assert_eq!(format_percent(0.15), "15%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_int(1234567), "1 234 567");
        assert_eq!(format_int(-12), "-12");
    }

    #[test]
    fn test_cell_formatters_pass_through_empty_and_text() {
        assert_eq!(money_cell(&CellValue::Number(2500.0)), "2 500,00 Kz");
        assert_eq!(money_cell(&CellValue::Empty), "");
        assert_eq!(percent_cell(&CellValue::Number(0.1)), "10%");
        assert_eq!(percent_cell(&CellValue::text("n/a")), "n/a");
        let ts = CellValue::timestamp(Some("2024-05-01T10:30:00"));
        assert_eq!(datetime_cell(&ts), "01.05.2024 10:30");
    }
}

//! Описание колонок универсальной таблицы.
//!
//! Колонка хранит только указатели на функции, поэтому не может захватить
//! состояние страницы: все команды строк идут через [`ActionRegistry`].
//!
//! [`ActionRegistry`]: super::actions::ActionRegistry

use super::actions::RowAction;
use super::record::CellValue;
use std::cmp::Ordering;
use std::fmt;

pub type Accessor<T> = fn(&T) -> CellValue;
pub type Comparator<T> = fn(&T, &T) -> Ordering;
pub type Formatter = fn(&CellValue) -> String;
/// Возвращает модификатор бейджа (`success`, `warning`, ...)
pub type Tone<T> = fn(&T) -> &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Display,
    Selection,
    Actions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Предикат фильтра по колонке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Contains { case_sensitive: bool },
    Equals { case_sensitive: bool },
}

impl FilterMode {
    /// Подстрока без учёта регистра
    pub const fn contains() -> Self {
        FilterMode::Contains {
            case_sensitive: false,
        }
    }

    pub fn matches(&self, value: &str, needle: &str) -> bool {
        match *self {
            FilterMode::Contains {
                case_sensitive: true,
            } => value.contains(needle),
            FilterMode::Contains {
                case_sensitive: false,
            } => value.to_lowercase().contains(&needle.to_lowercase()),
            FilterMode::Equals {
                case_sensitive: true,
            } => value == needle,
            FilterMode::Equals {
                case_sensitive: false,
            } => value.to_lowercase() == needle.to_lowercase(),
        }
    }
}

/// Как рисовать ячейку
pub enum CellRender<T> {
    Text,
    Badge(Tone<T>),
    Image,
}

impl<T> Clone for CellRender<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellRender<T> {}

pub struct ColumnDef<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub role: ColumnRole,
    pub sortable: bool,
    pub hideable: bool,
    pub align: Align,
    pub filter: Option<FilterMode>,
    pub render: CellRender<T>,
    /// Команды, которые рисует колонка действий
    pub actions: &'static [RowAction],
    accessor: Option<Accessor<T>>,
    comparator: Option<Comparator<T>>,
    formatter: Option<Formatter>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDef<T> {}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("role", &self.role)
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("filter", &self.filter)
            .finish()
    }
}

impl<T> ColumnDef<T> {
    /// Колонка данных: сортируемая и скрываемая по умолчанию
    pub fn display(key: &'static str, header: &'static str, accessor: Accessor<T>) -> Self {
        Self {
            key,
            header,
            role: ColumnRole::Display,
            sortable: true,
            hideable: true,
            align: Align::Left,
            filter: None,
            render: CellRender::Text,
            actions: &[],
            accessor: Some(accessor),
            comparator: None,
            formatter: None,
        }
    }

    /// Колонка чекбоксов выбора строк
    pub fn selection() -> Self {
        Self {
            key: "select",
            header: "",
            role: ColumnRole::Selection,
            sortable: false,
            hideable: false,
            align: Align::Left,
            filter: None,
            render: CellRender::Text,
            actions: &[],
            accessor: None,
            comparator: None,
            formatter: None,
        }
    }

    /// Колонка кнопок команд строки
    pub fn actions(actions: &'static [RowAction]) -> Self {
        Self {
            key: "actions",
            header: "",
            role: ColumnRole::Actions,
            sortable: false,
            hideable: false,
            align: Align::Right,
            filter: None,
            render: CellRender::Text,
            actions,
            accessor: None,
            comparator: None,
            formatter: None,
        }
    }

    pub fn comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn filterable(mut self, mode: FilterMode) -> Self {
        self.filter = Some(mode);
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn format(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn badge(mut self, tone: Tone<T>) -> Self {
        self.render = CellRender::Badge(tone);
        self
    }

    pub fn image(mut self) -> Self {
        self.render = CellRender::Image;
        self
    }

    pub fn is_data(&self) -> bool {
        self.role == ColumnRole::Display
    }

    /// Значение ячейки; у служебных колонок его нет
    pub fn value(&self, row: &T) -> CellValue {
        match self.accessor {
            Some(accessor) => accessor(row),
            None => CellValue::Empty,
        }
    }

    /// Текст ячейки с учётом форматтера
    pub fn render_text(&self, row: &T) -> String {
        let value = self.value(row);
        match self.formatter {
            Some(formatter) if value != CellValue::Empty => formatter(&value),
            _ => value.display_text(),
        }
    }

    /// Сравнение двух строк по колонке (по возрастанию)
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        if let Some(comparator) = self.comparator {
            return comparator(a, b);
        }
        match self.accessor {
            Some(accessor) => accessor(a).compare(&accessor(b)),
            None => Ordering::Equal,
        }
    }

    /// Проходит ли строка фильтр колонки. Пустое значение фильтра пропускает всё.
    pub fn accepts(&self, row: &T, needle: &str) -> bool {
        if needle.trim().is_empty() {
            return true;
        }
        match (self.filter, self.accessor) {
            (Some(mode), Some(accessor)) => mode.matches(&accessor(row).display_text(), needle),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        qty: i64,
    }

    fn name(i: &Item) -> CellValue {
        CellValue::text(i.name)
    }

    fn qty(i: &Item) -> CellValue {
        CellValue::Integer(i.qty)
    }

    #[test]
    fn test_filter_modes() {
        assert!(FilterMode::contains().matches("Gelo Seco", "seco"));
        assert!(!FilterMode::Contains { case_sensitive: true }.matches("Gelo Seco", "seco"));
        assert!(FilterMode::Equals { case_sensitive: false }.matches("PAID", "paid"));
        assert!(!FilterMode::Equals { case_sensitive: true }.matches("PAID", "PAI"));
    }

    #[test]
    fn test_accepts_ignores_blank_needle_and_unfilterable_columns() {
        let by_name = ColumnDef::display("name", "Name", name).filterable(FilterMode::contains());
        let by_qty = ColumnDef::display("qty", "Qty", qty);
        let item = Item { name: "Água", qty: 3 };
        assert!(by_name.accepts(&item, "   "));
        assert!(by_name.accepts(&item, "ág"));
        assert!(!by_name.accepts(&item, "gelo"));
        assert!(by_qty.accepts(&item, "999"));
    }

    #[test]
    fn test_custom_comparator_wins() {
        fn reversed(a: &Item, b: &Item) -> Ordering {
            b.qty.cmp(&a.qty)
        }
        let col = ColumnDef::display("qty", "Qty", qty).comparator(reversed);
        let a = Item { name: "a", qty: 1 };
        let b = Item { name: "b", qty: 2 };
        assert_eq!(col.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_service_columns() {
        let sel = ColumnDef::<Item>::selection();
        assert!(!sel.sortable && !sel.hideable && !sel.is_data());
        let act = ColumnDef::<Item>::actions(&[RowAction::OpenEdit]);
        assert_eq!(act.role, ColumnRole::Actions);
        assert_eq!(act.value(&Item { name: "x", qty: 0 }), CellValue::Empty);
    }

    #[test]
    fn test_render_text_uses_formatter() {
        fn money(v: &CellValue) -> String {
            format!("{} Kz", v.display_text())
        }
        let col = ColumnDef::display("qty", "Qty", qty).format(money);
        assert_eq!(col.render_text(&Item { name: "x", qty: 5 }), "5 Kz");
    }
}

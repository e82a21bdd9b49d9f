use super::record::RecordId;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Размер страницы; ноль трактуется как 1
    pub fn effective_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.effective_size())
    }

    /// Индекс страницы, ограниченный диапазоном `[0, page_count - 1]`
    pub fn clamped_index(&self, total: usize) -> usize {
        match self.page_count(total) {
            0 => 0,
            count => self.page_index.min(count - 1),
        }
    }
}

/// Состояние таблицы одной страницы: сортировка, фильтры, видимость колонок,
/// пагинация и выбор строк. Создаётся при монтировании страницы и нигде не
/// сохраняется.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub sort: Vec<SortKey>,
    pub filters: BTreeMap<String, String>,
    pub column_visibility: BTreeMap<String, bool>,
    pub pagination: Pagination,
    pub selection: BTreeSet<RecordId>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(5)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: Vec::new(),
            filters: BTreeMap::new(),
            column_visibility: BTreeMap::new(),
            pagination: Pagination {
                page_index: 0,
                page_size: page_size.max(1),
            },
            selection: BTreeSet::new(),
        }
    }

    /// Начальная сортировка
    pub fn sorted_by(mut self, column: &str, direction: SortDirection) -> Self {
        self.sort = vec![SortKey {
            column: column.to_string(),
            direction,
        }];
        self
    }

    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .iter()
            .find(|k| k.column == column)
            .map(|k| k.direction)
    }

    /// Клик по заголовку: уже отсортированная колонка меняет направление,
    /// новая встаёт по возрастанию. Без `multi` список сортировки заменяется.
    pub fn toggle_sort(&mut self, column: &str, multi: bool) {
        let next = match self.sort_direction(column) {
            Some(direction) => direction.flipped(),
            None => SortDirection::Asc,
        };
        let key = SortKey {
            column: column.to_string(),
            direction: next,
        };
        if multi {
            match self.sort.iter_mut().find(|k| k.column == column) {
                Some(existing) => existing.direction = next,
                None => self.sort.push(key),
            }
        } else {
            self.sort = vec![key];
        }
    }

    pub fn filter_value(&self, column: &str) -> &str {
        self.filters.get(column).map(String::as_str).unwrap_or("")
    }

    /// Новый фильтр сбрасывает страницу на первую
    pub fn set_filter(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column.to_string(), value);
        }
        self.pagination.page_index = 0;
    }

    /// Смена размера страницы всегда возвращает на первую страницу
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.page_index = 0;
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.pagination.page_index = page_index;
    }

    pub fn can_next_page(&self, total_filtered: usize) -> bool {
        self.pagination.clamped_index(total_filtered) + 1 < self.pagination.page_count(total_filtered)
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.page_index > 0
    }

    pub fn next_page(&mut self, total_filtered: usize) {
        if self.can_next_page(total_filtered) {
            self.pagination.page_index = self.pagination.clamped_index(total_filtered) + 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.pagination.page_index = self.pagination.page_index.saturating_sub(1);
    }

    /// Возвращает индекс страницы в допустимый диапазон после уменьшения
    /// числа строк. `true`, если индекс изменился.
    pub fn clamp_page(&mut self, total_filtered: usize) -> bool {
        let clamped = self.pagination.clamped_index(total_filtered);
        if clamped != self.pagination.page_index {
            log::debug!(
                "page index clamped {} -> {} ({} rows)",
                self.pagination.page_index,
                clamped,
                total_filtered
            );
            self.pagination.page_index = clamped;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_and_clamp() {
        let p = Pagination {
            page_index: 7,
            page_size: 5,
        };
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.page_count(11), 3);
        assert_eq!(p.clamped_index(11), 2);
        assert_eq!(p.clamped_index(0), 0);

        let zero = Pagination {
            page_index: 0,
            page_size: 0,
        };
        assert_eq!(zero.page_count(3), 3);
    }

    #[test]
    fn test_toggle_sort_single_and_multi() {
        let mut s = TableState::new(5);
        s.toggle_sort("name", false);
        assert_eq!(s.sort_direction("name"), Some(SortDirection::Asc));
        s.toggle_sort("name", false);
        assert_eq!(s.sort_direction("name"), Some(SortDirection::Desc));

        s.toggle_sort("price", true);
        assert_eq!(s.sort.len(), 2);
        assert_eq!(s.sort[1].column, "price");

        s.toggle_sort("price", false);
        assert_eq!(s.sort.len(), 1);
        assert_eq!(s.sort_direction("price"), Some(SortDirection::Desc));
    }

    #[test]
    fn test_page_size_and_filter_reset_page_index() {
        let mut s = TableState::new(5);
        s.set_page_index(3);
        s.set_page_size(10);
        assert_eq!(s.pagination.page_index, 0);

        s.set_page_index(2);
        s.set_filter("name", "gel");
        assert_eq!(s.pagination.page_index, 0);
        assert_eq!(s.filter_value("name"), "gel");

        s.set_filter("name", "");
        assert!(s.filters.is_empty());
    }

    #[test]
    fn test_next_and_previous_page() {
        let mut s = TableState::new(5);
        s.next_page(12);
        s.next_page(12);
        assert_eq!(s.pagination.page_index, 2);
        s.next_page(12);
        assert_eq!(s.pagination.page_index, 2);
        assert!(!s.can_next_page(12));
        s.previous_page();
        assert_eq!(s.pagination.page_index, 1);
        s.set_page_index(0);
        s.previous_page();
        assert_eq!(s.pagination.page_index, 0);
    }

    #[test]
    fn test_clamp_page_reports_change() {
        let mut s = TableState::new(5);
        s.set_page_index(2);
        assert!(!s.clamp_page(12));
        assert!(s.clamp_page(10));
        assert_eq!(s.pagination.page_index, 1);
        assert!(s.clamp_page(0));
        assert_eq!(s.pagination.page_index, 0);
    }
}

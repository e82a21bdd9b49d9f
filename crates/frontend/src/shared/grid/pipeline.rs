//! Фильтр -> сортировка -> страница.
//!
//! Чистая функция от записей, состояния таблицы и колонок. Вызывается заново
//! при каждом изменении любого из входов; результат не кешируется.

use super::column::ColumnDef;
use super::record::GridRecord;
use super::state::{SortDirection, TableState};
use std::cmp::Ordering;

/// Видимые строки текущей страницы и счётчики для футера
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel<T> {
    pub rows: Vec<T>,
    pub total_filtered: usize,
    pub total_selected: usize,
    /// Индекс страницы после ограничения диапазоном
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl<T> RowModel<T> {
    /// Номер первой строки страницы (с 1); 0 для пустой таблицы
    pub fn first_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.page_index * self.page_size + 1
        }
    }

    pub fn last_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.page_index * self.page_size + self.rows.len()
        }
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

fn passes_filters<T>(row: &T, state: &TableState, columns: &[ColumnDef<T>]) -> bool {
    state.filters.iter().all(|(key, needle)| {
        match columns.iter().find(|c| c.key == key.as_str()) {
            Some(column) => column.accepts(row, needle),
            None => true,
        }
    })
}

fn compare_rows<T>(a: &T, b: &T, state: &TableState, columns: &[ColumnDef<T>]) -> Ordering {
    for key in &state.sort {
        let Some(column) = columns
            .iter()
            .find(|c| c.key == key.column && c.sortable && c.is_data())
        else {
            continue;
        };
        let ordering = match key.direction {
            SortDirection::Asc => column.compare(a, b),
            SortDirection::Desc => column.compare(b, a),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Строит модель строк. Не паникует ни на пустых данных, ни на
/// индексе страницы за пределами диапазона.
pub fn derive<T: GridRecord>(
    records: &[T],
    state: &TableState,
    columns: &[ColumnDef<T>],
) -> RowModel<T> {
    let mut filtered: Vec<&T> = records
        .iter()
        .filter(|row| passes_filters(*row, state, columns))
        .collect();

    if !state.sort.is_empty() {
        // sort_by стабилен: равные строки сохраняют исходный порядок
        filtered.sort_by(|a, b| compare_rows(*a, *b, state, columns));
    }

    let total_filtered = filtered.len();
    let total_selected = filtered
        .iter()
        .filter(|row| state.is_selected(row.record_id()))
        .count();

    let page_size = state.pagination.effective_size();
    let page_count = state.pagination.page_count(total_filtered);
    let page_index = state.pagination.clamped_index(total_filtered);

    let rows = filtered
        .into_iter()
        .skip(page_index * page_size)
        .take(page_size)
        .cloned()
        .collect();

    RowModel {
        rows,
        total_filtered,
        total_selected,
        page_index,
        page_count,
        page_size,
    }
}

//! Выбор строк и видимость колонок.
//!
//! "Выбрать все" работает только со строками текущей страницы, а состояние
//! чекбокса в заголовке трёхзначное: при постраничном выборе часть строк
//! может быть выбрана.

use super::column::ColumnDef;
use super::record::RecordId;
use super::state::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

impl TableState {
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.contains(&id)
    }

    pub fn set_row_selected(&mut self, id: RecordId, selected: bool) {
        if selected {
            self.selection.insert(id);
        } else {
            self.selection.remove(&id);
        }
    }

    pub fn toggle_row(&mut self, id: RecordId) {
        let selected = self.is_selected(id);
        self.set_row_selected(id, !selected);
    }

    /// Выбирает или снимает выбор только со строк текущей страницы
    pub fn toggle_page(&mut self, page_ids: &[RecordId], checked: bool) {
        for id in page_ids {
            self.set_row_selected(*id, checked);
        }
    }

    pub fn page_selection(&self, page_ids: &[RecordId]) -> SelectionState {
        let selected = page_ids.iter().filter(|id| self.is_selected(**id)).count();
        if selected == 0 {
            SelectionState::None
        } else if selected == page_ids.len() {
            SelectionState::All
        } else {
            SelectionState::Some
        }
    }

    pub fn purge_selection(&mut self, id: RecordId) {
        self.selection.remove(&id);
    }

    /// Оставляет в выборе только существующие id
    pub fn retain_selection(&mut self, existing: impl IntoIterator<Item = RecordId>) {
        let existing: std::collections::BTreeSet<RecordId> = existing.into_iter().collect();
        self.selection.retain(|id| existing.contains(id));
    }

    pub fn is_column_visible(&self, key: &str) -> bool {
        self.column_visibility.get(key).copied().unwrap_or(true)
    }

    pub fn set_column_visible(&mut self, key: &str, visible: bool) {
        self.column_visibility.insert(key.to_string(), visible);
    }

    pub fn toggle_column(&mut self, key: &str) {
        let visible = self.is_column_visible(key);
        self.set_column_visible(key, !visible);
    }

    /// Колонки для отрисовки. Нескрываемые колонки видны всегда; скрытые
    /// остаются в списке определений, но не рисуются.
    pub fn visible_columns<'a, T>(&self, columns: &'a [ColumnDef<T>]) -> Vec<&'a ColumnDef<T>> {
        columns
            .iter()
            .filter(|c| !c.hideable || self.is_column_visible(c.key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::actions::RowAction;
    use crate::shared::grid::record::CellValue;

    #[test]
    fn test_select_all_touches_only_current_page() {
        let mut s = TableState::new(2);
        s.set_row_selected(9, true);
        s.toggle_page(&[1, 2], true);
        assert_eq!(s.selection.iter().copied().collect::<Vec<_>>(), vec![1, 2, 9]);

        s.toggle_page(&[1, 2], false);
        assert_eq!(s.selection.iter().copied().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn test_tri_state() {
        let mut s = TableState::new(3);
        let page = [1, 2, 3];
        assert_eq!(s.page_selection(&page), SelectionState::None);
        s.toggle_row(2);
        assert_eq!(s.page_selection(&page), SelectionState::Some);
        s.toggle_page(&page, true);
        assert_eq!(s.page_selection(&page), SelectionState::All);
        s.toggle_row(2);
        assert!(!s.is_selected(2));
        assert_eq!(s.page_selection(&[]), SelectionState::None);
    }

    #[test]
    fn test_retain_and_purge() {
        let mut s = TableState::new(5);
        s.toggle_page(&[1, 2, 3], true);
        s.purge_selection(2);
        s.retain_selection([3, 4]);
        assert_eq!(s.selection.iter().copied().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_hidden_columns_stay_defined_but_skip_render() {
        struct Row;
        fn name(_: &Row) -> CellValue {
            CellValue::Empty
        }
        let columns = vec![
            ColumnDef::<Row>::selection(),
            ColumnDef::display("name", "Name", name),
            ColumnDef::display("description", "Description", name),
            ColumnDef::actions(&[RowAction::OpenEdit]),
        ];
        let mut s = TableState::new(5);
        s.toggle_column("description");
        s.set_column_visible("select", false);

        let visible: Vec<&str> = s.visible_columns(&columns).iter().map(|c| c.key).collect();
        assert_eq!(visible, vec!["select", "name", "actions"]);
        assert_eq!(columns.len(), 4);

        s.toggle_column("description");
        assert!(s.is_column_visible("description"));
    }
}

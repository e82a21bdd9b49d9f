use crate::shared::grid::{CellValue, ColumnDef, FilterMode, GridRecord, RecordId, RowAction};
use contracts::domain::a001_category::aggregate::Category;

/// Колонка, к которой привязан поиск
pub const SEARCH_COLUMN: &str = "name";

impl GridRecord for Category {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn delete_blocker(&self) -> Option<String> {
        self.is_delete_locked()
            .then(|| "Нельзя удалить: товары категории есть в заказах".to_string())
    }
}

pub fn columns() -> Vec<ColumnDef<Category>> {
    vec![
        ColumnDef::selection(),
        ColumnDef::display(SEARCH_COLUMN, "Название", |c: &Category| {
            CellValue::text(c.name.clone())
        })
        .filterable(FilterMode::contains())
        .pinned(),
        ColumnDef::display("description", "Описание", |c: &Category| {
            CellValue::text(c.description.clone())
        })
        .unsortable(),
        ColumnDef::display("active", "Статус", |c: &Category| {
            CellValue::text(if c.active { "Активна" } else { "Неактивна" })
        })
        .badge(|c: &Category| if c.active { "success" } else { "neutral" }),
        ColumnDef::display("created_at", "Создана", |c: &Category| {
            CellValue::timestamp(c.created_at.as_deref())
        }),
        ColumnDef::actions(&[RowAction::OpenEdit, RowAction::OpenDelete]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::{derive, CrudSynchronizer, FailureKind, SortDirection, TableState};

    fn category(id: i64, name: &str, active: bool, has_orders: bool) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: format!("{} desc", name),
            active,
            has_orders,
            created_at: Some(format!("2024-03-{:02}T10:00:00", id)),
            updated_at: None,
        }
    }

    #[test]
    fn test_locked_category_refused_and_store_unchanged() {
        let mut sync = CrudSynchronizer::new();
        let mut state = TableState::new(5);
        sync.on_refetched(
            vec![category(1, "Bebidas", true, true), category(2, "Gelo", true, false)],
            &mut state,
        );
        let before = sync.records().to_vec();

        let err = sync.begin_delete(1).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Precondition);
        assert_eq!(sync.records(), before.as_slice());

        assert!(sync.begin_delete(2).is_ok());
    }

    #[test]
    fn test_inactive_category_with_orders_is_deletable() {
        assert!(category(3, "Velha", false, true).delete_blocker().is_none());
        assert!(category(4, "Nova", true, true).delete_blocker().is_some());
    }

    #[test]
    fn test_search_and_date_sort() {
        let rows = vec![
            category(3, "Gelo", true, false),
            category(1, "Bebidas", true, false),
            category(2, "gelados", true, false),
        ];
        let cols = columns();

        let mut state = TableState::new(5);
        state.set_filter(SEARCH_COLUMN, "GEL");
        let model = derive(&rows, &state, &cols);
        let ids: Vec<_> = model.rows.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2]);

        let state = TableState::new(5).sorted_by("created_at", SortDirection::Asc);
        let model = derive(&rows, &state, &cols);
        let ids: Vec<_> = model.rows.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

use crate::shared::format::{money_cell, percent_cell};
use crate::shared::grid::{CellValue, ColumnDef, FilterMode, GridRecord, RecordId, RowAction};
use contracts::domain::a002_product::aggregate::Product;

pub const SEARCH_COLUMN: &str = "name";

impl GridRecord for Product {
    fn record_id(&self) -> RecordId {
        self.id
    }

    /// Список товаров фильтруется сервером по категории
    fn scope_key(&self) -> Option<i64> {
        Some(self.category_id)
    }
}

pub fn columns() -> Vec<ColumnDef<Product>> {
    vec![
        ColumnDef::selection(),
        ColumnDef::display("image", "Фото", |p: &Product| CellValue::text(p.image_url.clone()))
            .image()
            .unsortable(),
        ColumnDef::display(SEARCH_COLUMN, "Название", |p: &Product| {
            CellValue::text(p.name.clone())
        })
        .filterable(FilterMode::contains())
        .pinned(),
        ColumnDef::display("category", "Категория", |p: &Product| {
            CellValue::text(p.category_name.clone())
        }),
        ColumnDef::display("description", "Описание", |p: &Product| {
            CellValue::text(p.description.clone())
        })
        .unsortable(),
        ColumnDef::display("quantity", "Остаток", |p: &Product| CellValue::Integer(p.quantity))
            .align_right(),
        ColumnDef::display("discount", "Скидка", |p: &Product| CellValue::Number(p.discount))
            .format(percent_cell)
            .align_right(),
        ColumnDef::display("price", "Цена", |p: &Product| CellValue::Number(p.price))
            .format(money_cell)
            .align_right(),
        ColumnDef::display("special_price", "Цена со скидкой", |p: &Product| {
            CellValue::Number(p.special_price)
        })
        .format(money_cell)
        .align_right(),
        ColumnDef::actions(&[RowAction::OpenEdit, RowAction::OpenDelete]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::{
        derive, CrudSynchronizer, MutationOutput, SortDirection, SyncOutcome, TableState,
    };

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            quantity: id * 10,
            price,
            discount: 0.1,
            special_price: price * 0.9,
            category_name: "Gelo".to_string(),
            category_id: 1,
            is_active: true,
            image_url: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_price_sorts_numerically() {
        let rows = vec![
            product(1, "A", 900.0),
            product(2, "B", 10000.0),
            product(3, "C", 25.5),
        ];
        let state = TableState::new(5).sorted_by("price", SortDirection::Desc);
        let model = derive(&rows, &state, &columns());
        let ids: Vec<_> = model.rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_money_and_percent_cells() {
        let cols = columns();
        let p = product(1, "Gelo Seco", 2500.0);
        let text = |key: &str| {
            cols.iter()
                .find(|c| c.key == key)
                .map(|c| c.render_text(&p))
                .unwrap()
        };
        assert_eq!(text("price"), "2 500,00 Kz");
        assert_eq!(text("special_price"), "2 250,00 Kz");
        assert_eq!(text("discount"), "10%");
        assert_eq!(text("image"), "");
    }

    #[test]
    fn test_products_are_never_delete_blocked() {
        assert!(product(1, "X", 1.0).delete_blocker().is_none());
    }

    #[test]
    fn test_product_moved_out_of_filtered_category_leaves_list() {
        let in_category = |id: i64, category_id: i64| Product {
            category_id,
            ..product(id, "P", 100.0)
        };
        let mut sync = CrudSynchronizer::new();
        let mut state = TableState::new(5);
        sync.set_scope(Some(1));
        sync.on_refetched(vec![in_category(1, 1)], &mut state);

        let pending = sync.begin_create();
        let created = sync.resolve(
            pending,
            Ok(MutationOutput::Created(in_category(2, 2))),
            &mut state,
        );
        assert_eq!(created, Ok(SyncOutcome::Unchanged));
        assert_eq!(sync.store().ids(), vec![1]);

        let pending = sync.begin_update(1);
        sync.resolve(pending, Ok(MutationOutput::Updated(in_category(1, 2))), &mut state)
            .unwrap();
        assert!(sync.store().is_empty());
    }
}

//! Универсальная таблица записей: модель строк, выбор, команды строк и
//! синхронизация с API. Не зависит от Leptos и тестируется без браузера.

pub mod actions;
pub mod column;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod selection;
pub mod state;
pub mod store;
pub mod sync;

pub use actions::{ActionRegistry, RowAction};
pub use column::{Align, CellRender, ColumnDef, ColumnRole, FilterMode};
pub use error::{classify_failure, FailureKind, GridError};
pub use pipeline::{derive, RowModel};
pub use record::{CellValue, GridRecord, RecordId};
pub use selection::SelectionState;
pub use state::{SortDirection, TableState};
pub use sync::{CrudSynchronizer, FetchTicket, MutationOutput, PendingMutation, SyncOutcome};

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: RecordId,
        pub name: String,
        pub qty: i64,
        pub locked: bool,
        pub group: Option<i64>,
    }

    impl GridRecord for Row {
        fn record_id(&self) -> RecordId {
            self.id
        }

        fn delete_blocker(&self) -> Option<String> {
            self.locked.then(|| "locked".to_string())
        }

        fn scope_key(&self) -> Option<i64> {
            self.group
        }
    }

    pub fn row(id: RecordId, name: &str, qty: i64) -> Row {
        Row {
            id,
            name: name.to_string(),
            qty,
            locked: false,
            group: None,
        }
    }

    pub fn grouped_row(id: RecordId, name: &str, group: i64) -> Row {
        Row {
            group: Some(group),
            ..row(id, name, 0)
        }
    }

    pub fn locked_row(id: RecordId, name: &str) -> Row {
        Row {
            locked: true,
            ..row(id, name, 0)
        }
    }

    pub fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::selection(),
            ColumnDef::display("name", "Name", |r: &Row| CellValue::text(r.name.clone()))
                .filterable(FilterMode::contains()),
            ColumnDef::display("qty", "Qty", |r: &Row| CellValue::Integer(r.qty)).align_right(),
            ColumnDef::actions(&[RowAction::OpenEdit, RowAction::OpenDelete]),
        ]
    }
}

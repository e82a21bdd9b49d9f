pub mod column_menu;
pub mod data_table;
pub mod sortable_header_cell;
pub mod table_header_checkbox;

pub use column_menu::ColumnVisibilityMenu;
pub use data_table::DataTable;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_header_checkbox::TableHeaderCheckbox;

//! Форма категории (создание и редактирование)
//!
//! - view_model.rs: состояние формы и команда сохранения
//! - view.rs: компонент модального окна

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;

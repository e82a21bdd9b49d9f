//! Форма товара
//!
//! - view_model.rs: состояние формы и команда сохранения
//! - view.rs: компонент модального окна

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;

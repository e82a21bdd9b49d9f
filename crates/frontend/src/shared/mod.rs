pub mod api_utils;
pub mod components;
pub mod config;
pub mod format;
pub mod grid;
pub mod grid_page;
pub mod icons;
pub mod modal;

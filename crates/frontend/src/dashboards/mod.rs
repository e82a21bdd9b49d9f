pub mod d400_stats;

pub use d400_stats::ui::StatsDashboard;

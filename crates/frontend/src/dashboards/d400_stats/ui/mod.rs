mod dashboard;

pub use dashboard::StatsDashboard;

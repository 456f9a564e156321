pub mod d400_admin_metrics;

pub use d400_admin_metrics::ui::AdminDashboard;

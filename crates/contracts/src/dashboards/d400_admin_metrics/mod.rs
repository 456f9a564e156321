pub mod metrics;

pub use metrics::{compute_metrics, load_metrics, AdminMetrics};

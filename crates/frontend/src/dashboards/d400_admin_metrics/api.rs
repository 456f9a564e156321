use contracts::dashboards::d400_admin_metrics::{load_metrics as compute_from_storage, AdminMetrics};
use contracts::shared::config::AppConfig;

use crate::shared::browser_storage::with_local;
use crate::shared::clock::today;

/// Dashboard figures from local storage; `None` when storage is unreachable.
pub fn load_metrics(config: &AppConfig) -> Option<AdminMetrics> {
    with_local(|storage| compute_from_storage(storage, config, today()))
}

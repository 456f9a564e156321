use contracts::dashboards::d400_admin_metrics::AdminMetrics;
use leptos::prelude::*;

use crate::dashboards::d400_admin_metrics::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Button;
use crate::system::auth::context::use_admin_session;
use crate::system::users::ui::list::UsersList;

/// Admin dashboard: procurement figures and user management.
///
/// Figures are computed once per mount from whatever the procurement page
/// last stored.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_admin_session();
    let metrics = RwSignal::new(ctx.config.with_value(api::load_metrics));
    if metrics.with_untracked(Option::is_none) {
        log::warn!("Admin metrics unavailable");
    }

    let figure = move |read: fn(&AdminMetrics) -> String| {
        Signal::derive(move || {
            metrics.with(|m| m.as_ref().map(read).unwrap_or_else(|| "-".to_string()))
        })
    };
    let low_stock_alert =
        Signal::derive(move || metrics.with(|m| m.as_ref().is_some_and(|m| m.low_stock_items > 0)));

    view! {
        <div class="page">
            <PageHeader title="Admin Dashboard">
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| {
                        metrics.set(ctx.config.with_value(api::load_metrics))
                    })
                >
                    "Refresh"
                </Button>
                <Button variant="danger" on_click=Callback::new(move |_| session.logout())>
                    "Logout"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Orders" value=figure(|m| m.total_orders.to_string()) />
                <StatCard label="Pending Orders" value=figure(|m| m.pending_orders.to_string()) />
                <StatCard label="Simulated Order Value" value=figure(|m| m.simulated_value_label()) />
                <StatCard
                    label="Delivered (Last 30 Days)"
                    value=figure(|m| m.delivered_recently.to_string())
                />
                <StatCard label="Total Suppliers" value=figure(|m| m.total_suppliers.to_string()) />
                <StatCard label="Inventory Items" value=figure(|m| m.inventory_items.to_string()) />
                <StatCard
                    label="Low Stock Items"
                    value=figure(|m| m.low_stock_items.to_string())
                    alert=low_stock_alert
                />
            </div>

            <UsersList />
        </div>
    }
}

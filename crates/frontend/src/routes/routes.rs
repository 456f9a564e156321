use crate::dashboards::AdminDashboard;
use crate::domain::a004_product::ui::catalogue::CataloguePage;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::system::auth::context::AdminSessionProvider;
use crate::system::auth::guard::RequireAdmin;
use crate::usecases::u501_procurement::ProcurementPage;
use crate::usecases::u502_checkout::{ConfirmationPage, OrderPage, PaymentPage};
use leptos::prelude::*;

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Catalogue => view! { <CataloguePage /> }.into_any(),
        Page::Order => view! { <OrderPage /> }.into_any(),
        Page::Payment => view! { <PaymentPage /> }.into_any(),
        Page::Confirmation => view! { <ConfirmationPage /> }.into_any(),
        Page::Procurement => view! { <ProcurementPage /> }.into_any(),
        Page::Admin => view! {
            <AdminSessionProvider>
                <RequireAdmin>
                    <AdminDashboard />
                </RequireAdmin>
            </AdminSessionProvider>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || {
            view! {
                {move || {
                    let page = ctx.active.get();
                    log::debug!("Rendering page {}", page.key());
                    render_page(page)
                }}
            }
            .into_any()
        } />
    }
}

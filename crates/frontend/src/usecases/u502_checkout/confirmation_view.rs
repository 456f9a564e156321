use contracts::usecases::u502_checkout::ConfirmationDetails;
use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    let ctx = use_app_context();
    let details = ctx
        .checkout
        .with_untracked(|session| ConfirmationDetails::from_session(session.as_ref()));
    log::info!("Confirmation page shown (details present: {})", details.populated());

    let populated = details.populated();

    view! {
        <div class="page">
            <PageHeader title="Thank You for Your Order!" />
            <div class="card confirmation">
                <p class="confirmation__lead">
                    "Your order has been placed successfully. A confirmation will be sent to your email."
                </p>
                {(!populated).then(|| view! {
                    <p class="confirmation__note">
                        "Your order details will appear here once available."
                    </p>
                })}
                <dl class="confirmation__details">
                    <dt>"Name"</dt>
                    <dd id="confirm-name">{details.name_or_placeholder().to_string()}</dd>
                    <dt>"Email"</dt>
                    <dd id="confirm-email">{details.email_or_placeholder().to_string()}</dd>
                    <dt>"Shipping Address"</dt>
                    <dd id="confirm-address" class="confirmation__address">
                        {details.address_or_placeholder().to_string()}
                    </dd>
                    <dt>"Payment Method"</dt>
                    <dd id="confirm-payment">{details.payment_or_placeholder().to_string()}</dd>
                </dl>
                <Button on_click=Callback::new(move |_| {
                    ctx.checkout.set(None);
                    ctx.navigate(Page::Catalogue);
                })>
                    "Continue Shopping"
                </Button>
            </div>
        </div>
    }
}

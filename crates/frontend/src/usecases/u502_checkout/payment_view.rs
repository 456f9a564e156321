use contracts::enums::PaymentMethod;
use contracts::shared::modal::Feedback;
use contracts::shared::validation::FieldErrors;
use contracts::usecases::u502_checkout::payment::{EMPTY_CART_INSTRUCTION, EMPTY_CART_SUMMARY};
use contracts::usecases::u502_checkout::{submit_payment, PaymentForm};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input};
use crate::shared::feedback::{field_error, FeedbackLine};

#[component]
pub fn PaymentPage() -> impl IntoView {
    let ctx = use_app_context();
    let redirect_ms = ctx.config.with_value(|c| c.ui.payment_redirect_delay_ms);

    let method = RwSignal::new(None::<PaymentMethod>);
    let form = RwSignal::new(PaymentForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let status = RwSignal::new(None::<Feedback>);
    let processing = RwSignal::new(false);

    let has_items = Signal::derive(move || {
        ctx.checkout.with(|s| s.as_ref().is_some_and(|s| s.has_items()))
    });
    if !has_items.get_untracked() {
        log::warn!("Payment page opened without items");
    }

    let summary = Signal::derive(move || {
        ctx.checkout.with(|s| {
            s.as_ref()
                .map(|s| s.cart.iter().map(|line| line.summary_label()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let choose = move |chosen: PaymentMethod| {
        method.set(Some(chosen));
        errors.set(FieldErrors::new());
        status.set(None);
    };

    let pay = move |_: leptos::ev::MouseEvent| {
        let Some(chosen) = method.get_untracked() else {
            return;
        };
        let submitted = form.get_untracked();
        let mut result = Err(FieldErrors::new());
        ctx.checkout.update(|session| {
            let session = session.get_or_insert_with(Default::default);
            result = submit_payment(session, chosen, &submitted);
        });

        match result {
            Ok(message) => {
                errors.set(FieldErrors::new());
                status.set(Some(Feedback::success(message)));
                processing.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(redirect_ms).await;
                    ctx.navigate(Page::Confirmation);
                });
            }
            Err(e) => {
                let message = e.banner().unwrap_or("Please correct the errors above.").to_string();
                errors.set(e);
                status.set(Some(Feedback::error(message)));
            }
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Payment" />
            <div class="checkout-layout">
                <div class="card order-summary">
                    <h3 class="card__title">"Your Order"</h3>
                    <Show
                        when=move || has_items.get()
                        fallback=|| view! { <p class="order-summary__empty">{EMPTY_CART_SUMMARY}</p> }
                    >
                        <ul class="order-summary__lines">
                            {move || {
                                summary
                                    .get()
                                    .into_iter()
                                    .map(|label| view! { <li>{label}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>

                <div class="card">
                    <h3 class="card__title">"Choose Payment Method"</h3>
                    <Show when=move || !has_items.get()>
                        <p class="payment-instruction">{EMPTY_CART_INSTRUCTION}</p>
                    </Show>
                    <div class="payment-methods">
                        {PaymentMethod::all()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        type="button"
                                        class="payment-method"
                                        class:selected=move || method.get() == Some(option)
                                        data-method=option.code()
                                        disabled=move || !has_items.get() || processing.get()
                                        on:click=move |_| choose(option)
                                    >
                                        {option.display_name()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || method.get().is_some()>
                        <div class="payment-form">
                            <h4 class="payment-form__title">
                                {move || {
                                    method
                                        .get()
                                        .map(|m| format!("Pay with {}", m.display_name()))
                                        .unwrap_or_default()
                                }}
                            </h4>
                            <Input
                                label="Phone Number"
                                id="payment-phone"
                                input_type="tel"
                                placeholder="09XXXXXXXX"
                                value=Signal::derive(move || form.with(|f| f.phone.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.phone = v))
                                error=field_error(errors, "phone")
                                disabled=processing
                            />
                            <Input
                                label="Full Name"
                                id="payment-name"
                                value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.full_name = v))
                                error=field_error(errors, "full_name")
                                disabled=processing
                            />
                            <Button on_click=Callback::new(pay) disabled=processing>
                                "Pay Now"
                            </Button>
                        </div>
                    </Show>
                    <FeedbackLine feedback=status />
                </div>
            </div>
        </div>
    }
}

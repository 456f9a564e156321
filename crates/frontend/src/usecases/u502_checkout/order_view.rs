use contracts::domain::a004_product::aggregate::catalogue;
use contracts::shared::config::AppConfig;
use contracts::shared::modal::Feedback;
use contracts::shared::validation::{FieldErrors, PatternRule};
use contracts::usecases::u502_checkout::OrderForm;
use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input};
use crate::shared::feedback::{field_error, FeedbackLine};

/// ZIP rule from the configuration; the built-in pattern when the configured
/// one does not compile.
fn zip_rule(config: &AppConfig) -> Option<PatternRule> {
    let checkout = &config.checkout;
    match PatternRule::new(&checkout.zip_pattern, checkout.zip_message.clone()) {
        Ok(rule) => Some(rule),
        Err(e) => {
            log::warn!("Invalid ZIP pattern '{}': {}", checkout.zip_pattern, e);
            let builtin = AppConfig::default().checkout;
            PatternRule::new(&builtin.zip_pattern, builtin.zip_message).ok()
        }
    }
}

#[component]
pub fn OrderPage() -> impl IntoView {
    let ctx = use_app_context();
    log::debug!("Order page script loaded");

    let form = RwSignal::new(OrderForm::new());
    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Feedback>);
    let rule = StoredValue::new(ctx.config.with_value(zip_rule));

    let summary = Signal::derive(move || {
        form.with(|f| {
            f.cart_lines()
                .into_iter()
                .map(|line| line.summary_label())
                .collect::<Vec<_>>()
        })
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let Some(result) = rule.with_value(|rule| {
            rule.as_ref().map(|rule| form.with_untracked(|f| f.submit(rule)))
        }) else {
            banner.set(Some(Feedback::error("ZIP validation is not available.")));
            return;
        };

        match result {
            Ok(session) => {
                errors.set(FieldErrors::new());
                banner.set(None);
                ctx.checkout.set(Some(session));
                ctx.navigate(Page::Payment);
            }
            Err(e) => {
                let message = e.banner().unwrap_or("Please fix the errors above.").to_string();
                log::debug!("Order form has errors");
                errors.set(e);
                banner.set(Some(Feedback::error(message)));
            }
        }
    };

    let text_field = move |label: &'static str, field: &'static str, input_type: &'static str| {
        let read = move |f: &OrderForm| match field {
            "customer_name" => f.customer_name.clone(),
            "email" => f.email.clone(),
            "address" => f.address.clone(),
            "city" => f.city.clone(),
            _ => f.zip.clone(),
        };
        view! {
            <Input
                label=label
                id=format!("order-{}", field)
                input_type=input_type
                value=Signal::derive(move || form.with(read))
                on_input=Callback::new(move |v: String| {
                    form.update(|f| match field {
                        "customer_name" => f.customer_name = v,
                        "email" => f.email = v,
                        "address" => f.address = v,
                        "city" => f.city = v,
                        _ => f.zip = v,
                    })
                })
                error=field_error(errors, field)
            />
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Place Your Order" />
            <div class="checkout-layout">
                <div class="card">
                    <h3 class="card__title">"Select Products"</h3>
                    {catalogue()
                        .iter()
                        .map(|product| {
                            let id = product.id;
                            view! {
                                <div class="order-product">
                                    <span class="order-product__name">{product.name}</span>
                                    <span class="order-product__price">{product.price_label()}</span>
                                    <input
                                        class="form__input order-product__quantity"
                                        type="number"
                                        min="0"
                                        data-product-id=id
                                        prop:value=move || form.with(|f| f.quantity_of(id).to_string())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.set_quantity(id, &value));
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="card">
                    <h3 class="card__title">"Customer Details"</h3>
                    {text_field("Full Name", "customer_name", "text")}
                    {text_field("Email", "email", "email")}
                    {text_field("Shipping Address", "address", "text")}
                    {text_field("City", "city", "text")}
                    {text_field("ZIP Code", "zip", "text")}
                </div>

                <div class="card order-summary">
                    <h3 class="card__title">"Order Summary"</h3>
                    <Show
                        when=move || !summary.get().is_empty()
                        fallback=|| view! { <p class="order-summary__empty">"No products selected."</p> }
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
                    <FeedbackLine feedback=banner />
                    <Button on_click=Callback::new(submit)>"Proceed to Payment"</Button>
                </div>
            </div>
        </div>
    }
}

use contracts::domain::a004_product::aggregate::{
    find_product, visible_products, CategoryFilter, ProductCategory,
};
use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::modal_frame::ModalFrame;

fn filter_buttons() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(ProductCategory::all().into_iter().map(CategoryFilter::Only))
        .collect()
}

fn filter_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "All",
        CategoryFilter::Only(category) => category.display_name(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CataloguePage() -> impl IntoView {
    let ctx = use_app_context();
    let filter = RwSignal::new(CategoryFilter::All);
    // Product shown in the "Learn more" dialog
    let details = RwSignal::new(None::<&'static str>);

    let detail_title = Signal::derive(move || {
        details
            .get()
            .and_then(find_product)
            .map(|p| p.name.to_string())
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <PageHeader title="Our Products" subtitle="Fresh groceries delivered to your door">
                <div class="category-filter">
                    {filter_buttons()
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="category-filter__button"
                                    class:active=move || filter.get() == option
                                    data-category=option.code()
                                    on:click=move |_| filter.set(option)
                                >
                                    {filter_label(option)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </PageHeader>

            <div class="product-grid">
                {move || {
                    visible_products(filter.get())
                        .into_iter()
                        .map(|product| {
                            let id = product.id;
                            view! {
                                <div class="product-card" data-category=product.category.code()>
                                    <h3 class="product-card__name">{product.name}</h3>
                                    <div class="product-card__category">
                                        {product.category.display_name()}
                                    </div>
                                    <div class="product-card__price">{product.price_label()}</div>
                                    <p class="product-card__description">
                                        {product.description}
                                    </p>
                                    <div class="product-card__actions">
                                        <Button
                                            variant="secondary"
                                            small=true
                                            on_click=Callback::new(move |_| details.set(Some(id)))
                                        >
                                            "Learn more"
                                        </Button>
                                        <Button
                                            small=true
                                            on_click=Callback::new(move |_| ctx.navigate(Page::Order))
                                        >
                                            "Order Now"
                                        </Button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || details.get().is_some()>
                <ModalFrame title=detail_title on_close=Callback::new(move |_| details.set(None))>
                    <p class="product-details">
                        {move || {
                            details
                                .get()
                                .and_then(find_product)
                                .map(|p| p.detail_text())
                                .unwrap_or_default()
                        }}
                    </p>
                </ModalFrame>
            </Show>
        </div>
    }
}

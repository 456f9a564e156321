use crate::layout::global_context::{use_app_context, Page};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title" on:click=move |_| ctx.navigate(Page::Catalogue)>
                    "SwiftGoods"
                </span>
                <nav class="header__nav">
                    {Page::nav()
                        .into_iter()
                        .map(|page| view! {
                            <button
                                class="header__link"
                                class:header__link--active=move || ctx.active.get() == page
                                on:click=move |_| ctx.navigate(page)
                            >
                                {page.title()}
                            </button>
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Site frame: navigation header above the active page.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {center()}
            </main>
            <footer class="footer">"© SwiftGoods"</footer>
        </div>
    }
}

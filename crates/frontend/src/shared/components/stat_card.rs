use leptos::prelude::*;

/// Dashboard card: label above a preformatted value
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    /// Highlights the card (e.g. low stock present)
    #[prop(optional, into)]
    alert: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="stat-card" class:stat-card--alert=move || alert.get()>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}

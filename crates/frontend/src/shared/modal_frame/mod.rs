use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Dialog overlay with a title bar and a close button.
///
/// Backdrop clicks close the dialog only when both press and release happen
/// on the backdrop itself, so a text selection dragged outside does not.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: Signal<String>,
    /// Close button, backdrop click
    on_close: Callback<()>,
    /// Extra class for the dialog surface
    #[prop(optional, into)]
    modal_class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let backdrop_pressed = RwSignal::new(false);

    let is_direct = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let on_mouse_down = move |ev: ev::MouseEvent| backdrop_pressed.set(is_direct(&ev));

    let on_backdrop_click = move |ev: ev::MouseEvent| {
        let should_close = backdrop_pressed.get() && is_direct(&ev);
        backdrop_pressed.set(false);
        if should_close {
            // Next tick: the overlay must not be removed during its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = move || match modal_class.get() {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-overlay" on:mousedown=on_mouse_down on:click=on_backdrop_click>
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="modal__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}

use contracts::shared::modal::Feedback;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Feedback line that hides itself after a delay.
#[derive(Clone, Copy)]
pub struct Flash {
    current: RwSignal<Option<Feedback>>,
    shown: RwSignal<u32>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            shown: RwSignal::new(0),
        }
    }

    pub fn get(&self) -> Signal<Option<Feedback>> {
        let current = self.current;
        Signal::derive(move || current.get())
    }

    /// Show `feedback` for `hide_ms`. A newer message is not hidden by the
    /// timer of an older one.
    pub fn show(&self, feedback: Feedback, hide_ms: u32) {
        self.current.set(Some(feedback));
        self.shown.update(|n| *n = n.wrapping_add(1));
        let ticket = self.shown.get_untracked();
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(hide_ms).await;
            if this.shown.get_untracked() == ticket {
                this.current.set(None);
            }
        });
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FeedbackLine(#[prop(into)] feedback: Signal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|f| {
            let class = if f.success {
                "feedback-message success"
            } else {
                "feedback-message error"
            };
            view! { <div class=class>{f.message}</div> }
        })
    }
}

/// Field-local message of `field`, for an input's `error` prop.
pub fn field_error(
    errors: RwSignal<contracts::shared::validation::FieldErrors>,
    field: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

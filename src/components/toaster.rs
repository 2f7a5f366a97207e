//! Toast overlay: renders the queue and auto-dismisses entries.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::state::toast::ToastState;

const TOAST_DURATION_MS: u32 = 4000;

/// Fixed overlay in the corner of the viewport.
///
/// Toast ids are monotonic, so a plain watermark tracks which entries
/// already have a dismiss timer; the effect schedules one per new toast.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scheduled = StoredValue::new(0u64);

    Effect::new(move |_| {
        let state = toasts.get();
        let watermark = scheduled.get_value();
        let mut next = watermark;
        for toast in &state.toasts {
            if toast.id >= watermark {
                let id = toast.id;
                leptos::task::spawn_local(async move {
                    TimeoutFuture::new(TOAST_DURATION_MS).await;
                    toasts.update(|queue| queue.dismiss(id));
                });
                next = next.max(id + 1);
            }
        }
        scheduled.set_value(next);
    });

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.css_class()>
                                <span class="toast__message">{toast.message.clone()}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|queue| queue.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

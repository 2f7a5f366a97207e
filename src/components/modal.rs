//! Backdrop + dialog wrapper shared by the modal forms.
//!
//! Clicking the backdrop or pressing Escape closes; clicks inside the
//! dialog stop propagating so the backdrop handler never fires for them.
//! Escape is a window-level listener so it works without the dialog ever
//! receiving focus. Closing is delegated to the caller, which owns the
//! draft to discard.

use leptos::prelude::*;

#[component]
pub fn Modal(on_close: Callback<()>, children: Children) -> impl IntoView {
    let escape_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <button class="modal__close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}

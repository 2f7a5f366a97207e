//! Sign-in modal backed by the two demo accounts.
//!
//! Submit delegates to [`authenticate`]; the modal closes only on success.
//! A failed attempt raises an error toast and leaves the draft intact for
//! retry. Closing by any other means discards the draft silently.

use leptos::prelude::*;

use crate::app::{self, LoginPrompt};
use crate::components::logo::{Logo, LogoSize};
use crate::components::modal::Modal;
use crate::state::nav::NavState;
use crate::state::session::{SessionState, authenticate};
use crate::state::toast::ToastState;

#[component]
pub fn LoginModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let login_prompt = expect_context::<LoginPrompt>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let close = Callback::new(move |()| {
        email.set(String::new());
        password.set(String::new());
        show_password.set(false);
        login_prompt.close();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match authenticate(&email.get(), &password.get()) {
            Ok(outcome) => {
                close.run(());
                app::apply_login(session, nav, toasts, outcome);
            }
            Err(err) => toasts.update(|queue| {
                queue.error(err.to_string());
            }),
        }
    };

    view! {
        <Modal on_close=close>
            <div class="login-modal__brand">
                <Logo size=LogoSize::Lg show_text=false/>
            </div>
            <h2 class="modal__title">"Welcome Back"</h2>
            <p class="modal__subtitle">"Sign in to access your dashboard"</p>

            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        placeholder="carrier@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Password"
                    <div class="form__password">
                        <input
                            class="form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="••••••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="form__password-toggle"
                            type="button"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>

                <div class="login-modal__hint">
                    <p class="login-modal__hint-title">"Demo Credentials:"</p>
                    <p>"Carrier: carrier@demo.com / password"</p>
                    <p>"Shipper: shipper@demo.com / password"</p>
                </div>

                <button class="btn btn--primary btn--block" type="submit">
                    "Sign In"
                </button>
            </form>
        </Modal>
    }
}

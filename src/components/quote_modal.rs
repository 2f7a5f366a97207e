//! Quote-request modal opened from the services catalog.
//!
//! Submission always succeeds — there is no backend to reject it. The
//! draft resets to empty on submit and is discarded on close.

#[cfg(test)]
#[path = "quote_modal_test.rs"]
mod quote_modal_test;

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::state::toast::ToastState;

/// Field values for one open quote modal. Name through destination are
/// required; weight, date, and message are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub date: String,
    pub message: String,
}

impl QuoteDraft {
    pub fn required_complete(&self) -> bool {
        ![
            &self.name,
            &self.email,
            &self.phone,
            &self.origin,
            &self.destination,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }
}

#[component]
pub fn QuoteModal(service_name: String, on_close: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(QuoteDraft::default());
    let service = StoredValue::new(service_name);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // The `required` attributes block this in a browser; keep the guard
        // so submission is inert without one too.
        if !draft.get().required_complete() {
            return;
        }
        toasts.update(|queue| {
            queue.success(format!(
                "Quote request submitted for {}! We'll contact you within 24 hours.",
                service.get_value()
            ));
        });
        draft.set(QuoteDraft::default());
        on_close.run(());
    };

    view! {
        <Modal on_close=on_close>
            <h2 class="modal__title">{move || format!("Get a Quote - {}", service.get_value())}</h2>
            <p class="modal__subtitle">
                "Fill out the form below and we'll get back to you with a competitive quote within 24 hours."
            </p>

            <form class="form" on:submit=on_submit>
                <div class="form__row">
                    <label class="form__label">
                        "Full Name *"
                        <input
                            class="form__input"
                            placeholder="John Smith"
                            required
                            prop:value=move || draft.get().name
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Email *"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="john@company.com"
                            required
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                </div>

                <label class="form__label">
                    "Phone Number *"
                    <input
                        class="form__input"
                        placeholder="(555) 000-0000"
                        required
                        prop:value=move || draft.get().phone
                        on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                    />
                </label>

                <div class="form__row">
                    <label class="form__label">
                        "Origin City *"
                        <input
                            class="form__input"
                            placeholder="Los Angeles, CA"
                            required
                            prop:value=move || draft.get().origin
                            on:input=move |ev| draft.update(|d| d.origin = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Destination City *"
                        <input
                            class="form__input"
                            placeholder="Phoenix, AZ"
                            required
                            prop:value=move || draft.get().destination
                            on:input=move |ev| {
                                draft.update(|d| d.destination = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>

                <div class="form__row">
                    <label class="form__label">
                        "Estimated Weight (lbs)"
                        <input
                            class="form__input"
                            placeholder="25,000"
                            prop:value=move || draft.get().weight
                            on:input=move |ev| draft.update(|d| d.weight = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Preferred Pickup Date"
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || draft.get().date
                            on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                        />
                    </label>
                </div>

                <label class="form__label">
                    "Additional Details"
                    <textarea
                        class="form__textarea"
                        placeholder="Any special requirements, dimensions, or notes..."
                        prop:value=move || draft.get().message
                        on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                    ></textarea>
                </label>

                <button class="btn btn--primary btn--block" type="submit">
                    "Request Quote"
                </button>
            </form>
        </Modal>
    }
}

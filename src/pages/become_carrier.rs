//! Carrier onboarding form. Demo-only: a complete submission shows a toast
//! and clears the draft, nothing is persisted.

#[cfg(test)]
#[path = "become_carrier_test.rs"]
mod become_carrier_test;

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquipmentTypes {
    pub dry_van: bool,
    pub reefer: bool,
    pub flatbed: bool,
    pub step_deck: bool,
}

/// Draft of the onboarding form. Equipment checkboxes are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarrierApplication {
    pub company_name: String,
    pub mc_number: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub equipment: EquipmentTypes,
}

impl CarrierApplication {
    pub fn required_complete(&self) -> bool {
        !(self.company_name.trim().is_empty()
            || self.mc_number.trim().is_empty()
            || self.contact_name.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.email.trim().is_empty())
    }
}

struct Benefit {
    title: &'static str,
    description: &'static str,
}

const BENEFITS: [Benefit; 3] = [
    Benefit {
        title: "Fast Payments",
        description: "Get paid within 24-48 hours of delivery with our quick pay program",
    },
    Benefit {
        title: "Easy Compliance",
        description: "We handle the paperwork so you can focus on driving",
    },
    Benefit {
        title: "Diverse Freight",
        description: "Access thousands of loads across all 48 states, FTL and LTL",
    },
];

#[component]
pub fn BecomeCarrierPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(CarrierApplication::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !draft.with(CarrierApplication::required_complete) {
            return;
        }
        toasts.update(|queue| {
            queue.success(
                "Application submitted! We will review and contact you within 24-48 hours.",
            );
        });
        draft.set(CarrierApplication::default());
    };

    let checkbox = move |label: &'static str,
                         read: fn(&EquipmentTypes) -> bool,
                         write: fn(&mut EquipmentTypes, bool)| {
        view! {
            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| read(&d.equipment))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        draft.update(|d| write(&mut d.equipment, checked));
                    }
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="page become-carrier">
            <div class="section-intro">
                <h1>"Become a Carrier"</h1>
                <p>"Join our network of trusted carriers and grow your business with us"</p>
            </div>

            <div class="become-carrier__layout">
                <div class="become-carrier__pitch">
                    <h2>"Join Our Network"</h2>
                    <p>
                        "Partner with Third Eye Freight and get access to consistent freight, \
                         competitive rates, and dedicated dispatch support."
                    </p>
                    {BENEFITS
                        .iter()
                        .map(|benefit| {
                            view! {
                                <div class="benefit">
                                    <p class="benefit__title">{benefit.title}</p>
                                    <p class="benefit__description">{benefit.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <form class="card form" on:submit=submit>
                    <h3>"Carrier Application"</h3>

                    <div class="form__field">
                        <label>"Company Name *"</label>
                        <input
                            type="text"
                            placeholder="Your Trucking Company LLC"
                            required
                            prop:value=move || draft.with(|d| d.company_name.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.company_name = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form__field">
                        <label>"MC Number *"</label>
                        <input
                            type="text"
                            placeholder="MC-000000"
                            required
                            prop:value=move || draft.with(|d| d.mc_number.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.mc_number = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form__field">
                        <label>"Contact Name *"</label>
                        <input
                            type="text"
                            placeholder="John Smith"
                            required
                            prop:value=move || draft.with(|d| d.contact_name.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.contact_name = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form__field">
                        <label>"Phone *"</label>
                        <input
                            type="tel"
                            placeholder="(555) 123-4567"
                            required
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.phone = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form__field">
                        <label>"Email *"</label>
                        <input
                            type="email"
                            placeholder="dispatch@yourcompany.com"
                            required
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.email = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form__field">
                        <label>"Equipment Types"</label>
                        <div class="form__checkboxes">
                            {checkbox("Dry Van", |e| e.dry_van, |e, v| e.dry_van = v)}
                            {checkbox("Reefer", |e| e.reefer, |e, v| e.reefer = v)}
                            {checkbox("Flatbed", |e| e.flatbed, |e, v| e.flatbed = v)}
                            {checkbox("Step Deck", |e| e.step_deck, |e, v| e.step_deck = v)}
                        </div>
                    </div>

                    <button type="submit" class="btn btn--primary btn--block">
                        "Submit Application"
                    </button>
                </form>
            </div>
        </div>
    }
}

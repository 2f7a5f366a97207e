//! Services catalog. Each card opens the quote modal seeded with its title.

use leptos::prelude::*;

use crate::components::quote_modal::QuoteModal;
use crate::data::services::SERVICES;

#[component]
pub fn ServicesPage() -> impl IntoView {
    // Some(title) while the quote modal is open for that service.
    let quoting = RwSignal::new(None::<&'static str>);
    let close_quote = Callback::new(move |()| quoting.set(None));

    view! {
        <div class="page services">
            <div class="section-intro">
                <h1>"Our Services"</h1>
                <p>
                    "Comprehensive freight solutions tailored to meet your shipping needs \
                     across all 48 states"
                </p>
            </div>

            <div class="services__grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        let title = service.title;
                        view! {
                            <div class="card service-card">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="service-card__features">
                                    {service
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <button
                                    class="btn btn--primary btn--block"
                                    on:click=move |_| quoting.set(Some(title))
                                >
                                    "Get Quote"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || {
                quoting.get().map(|title| {
                    view! { <QuoteModal service_name=title.to_owned() on_close=close_quote/> }
                })
            }}
        </div>
    }
}

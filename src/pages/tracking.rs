//! Live-tracking view: map placeholder plus the active shipment list.

use leptos::prelude::*;

use crate::data::tracking::SHIPMENTS;

#[component]
pub fn TrackingPage() -> impl IntoView {
    // Highlighted shipment, keyed by load id.
    let selected = RwSignal::new(None::<&'static str>);

    view! {
        <div class="page tracking">
            <h1>"Live Tracking"</h1>
            <p class="page__subtitle">"Track your shipments in real-time"</p>

            <div class="tracking__layout">
                <div class="card tracking__map">
                    <div class="tracking__map-placeholder">
                        <p class="tracking__map-title">"Interactive Map"</p>
                        <p>"Real-time GPS tracking visualization"</p>
                    </div>
                </div>

                <div class="tracking__list">
                    <h3>"Active Shipments"</h3>
                    {SHIPMENTS
                        .iter()
                        .map(|shipment| {
                            let load_id = shipment.load_id;
                            let card_class = move || {
                                if selected.get() == Some(load_id) {
                                    "card shipment-card shipment-card--selected"
                                } else {
                                    "card shipment-card"
                                }
                            };
                            view! {
                                <button class=card_class on:click=move |_| selected.set(Some(load_id))>
                                    <div class="shipment-card__top">
                                        <div>
                                            <p class="shipment-card__id">{shipment.load_id}</p>
                                            <p class="shipment-card__route">
                                                {format!("{} → {}", shipment.origin, shipment.destination)}
                                            </p>
                                        </div>
                                        <span class="badge badge--outline">{shipment.status}</span>
                                    </div>
                                    <div class="meter">
                                        <div class="meter__labels">
                                            <span>"Progress"</span>
                                            <span>{format!("{}%", shipment.progress)}</span>
                                        </div>
                                        <div class="meter__track">
                                            <div
                                                class="meter__fill meter__fill--primary"
                                                style=format!("width: {}%", shipment.progress)
                                            ></div>
                                        </div>
                                    </div>
                                    <div class="shipment-card__meta">
                                        <span>{format!("Driver: {}", shipment.driver)}</span>
                                        <span>{format!("ETA: {}", shipment.eta)}</span>
                                    </div>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

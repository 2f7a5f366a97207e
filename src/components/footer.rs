//! Site footer: brand block, quick links, services list, and contact info.

use leptos::prelude::*;

use crate::app;
use crate::components::logo::{Logo, LogoSize};
use crate::data;
use crate::data::services::SERVICES;
use crate::state::nav::{NavState, View};
use crate::state::session::SessionState;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    // Quick links mirror the header gating: the portal link appears only
    // for a signed-in carrier.
    let quick_links = move || {
        let mut views = vec![View::Home, View::LoadBoard, View::Services, View::Tracking];
        if session.get().is_carrier() {
            views.push(View::CarrierPortal);
        }
        views
            .into_iter()
            .map(|view| {
                view! {
                    <li>
                        <button class="footer__link" on:click=move |_| app::navigate(nav, view)>
                            {view.label()}
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let service_links = SERVICES
        .iter()
        .map(|service| {
            view! {
                <li>
                    <button
                        class="footer__link"
                        on:click=move |_| app::navigate(nav, View::Services)
                    >
                        {service.title}
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__brand">
                    <Logo size=LogoSize::Sm/>
                    <p>"Next-generation freight management solutions for modern logistics."</p>
                    <p class="footer__address">{data::ADDRESS}</p>
                </div>

                <div>
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__list">{quick_links}</ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Our Services"</h4>
                    <ul class="footer__list">{service_links}</ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Contact Us"</h4>
                    <ul class="footer__contact">
                        <li>
                            <p class="footer__contact-label">"Call Us"</p>
                            <p>{data::PHONE}</p>
                        </li>
                        <li>
                            <p class="footer__contact-label">"Email Us"</p>
                            <p>{data::EMAIL}</p>
                        </li>
                        <li>
                            <p class="footer__contact-label">"Address"</p>
                            <p>{data::ADDRESS}</p>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer__bottom">
                <p>{format!("© 2026 {}. All rights reserved.", data::COMPANY_NAME)}</p>
                <div class="footer__compliance">
                    <span>{data::MC_NUMBER}</span>
                    <span>{data::DOT_NUMBER}</span>
                </div>
            </div>
        </footer>
    }
}

//! Marketing homepage: hero, stats band, services teaser, performance
//! metrics, testimonials, and the closing call to action.

use leptos::prelude::*;

use crate::app::{self, LoginPrompt};
use crate::data::services::{
    COMPANY_STATS, HOME_FEATURES, HOME_SERVICES, PERFORMANCE_METRICS, TESTIMONIALS,
};
use crate::state::nav::{NavState, View};
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let login_prompt = expect_context::<LoginPrompt>();

    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__copy">
                    <div class="hero__badge">
                        <span class="hero__pulse"></span>
                        "Nationwide Trucking Solutions"
                    </div>
                    <h1 class="hero__title">
                        "Your Vision,"
                        <br/>
                        <span class="hero__title-accent">"Our Delivery"</span>
                    </h1>
                    <p class="hero__lede">
                        "Connecting shippers with reliable carriers across all 48 states. \
                         Fast, transparent, and professional freight brokerage services."
                    </p>
                    <div class="hero__actions">
                        <button
                            class="btn btn--primary btn--lg"
                            on:click=move |_| app::navigate(nav, View::LoadBoard)
                        >
                            "Find Loads ›"
                        </button>
                        <button
                            class="btn btn--outline btn--lg"
                            on:click=move |_| app::navigate(nav, View::BecomeCarrier)
                        >
                            "Become a Carrier"
                        </button>
                    </div>
                </div>

                <div class="hero__visual">
                    <div class="hero__image">
                        <span class="hero__image-mark">"◉"</span>
                        <p>"Coast to coast, watched end to end"</p>
                    </div>
                    <div class="hero__overlay">
                        <div class="hero__overlay-stat">
                            <p class="hero__overlay-label">"Live Load Board"</p>
                            <p class="hero__overlay-value">"1,247 Active Loads"</p>
                        </div>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| app::navigate(nav, View::LoadBoard)
                        >
                            "View Loads"
                        </button>
                    </div>
                </div>
            </section>

            <section class="stats-band">
                {COMPANY_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stats-band__item">
                                <p class="stats-band__value">{stat.value}</p>
                                <p class="stats-band__label">{stat.label}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="home-services">
                <div class="section-intro">
                    <h2>"Our Services"</h2>
                    <p>"Comprehensive freight solutions tailored to your shipping needs"</p>
                </div>
                <div class="home-services__grid">
                    {HOME_SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <button
                                    class="card card--clickable"
                                    on:click=move |_| app::navigate(nav, View::Services)
                                >
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="home-services__more">
                    <button
                        class="btn btn--outline"
                        on:click=move |_| app::navigate(nav, View::Services)
                    >
                        "View All Services ›"
                    </button>
                </div>
            </section>

            <section class="why-us">
                <div class="why-us__copy">
                    <h2>"Why Choose Third Eye Freight?"</h2>
                    <p>
                        "We combine industry expertise with cutting-edge technology to deliver \
                         exceptional freight brokerage services. Our commitment to transparency \
                         and reliability sets us apart."
                    </p>
                    <div class="why-us__features">
                        {HOME_FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="why-us__feature">
                                        <h4>{feature.title}</h4>
                                        <p>{feature.description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="card metrics-card">
                    <div class="metrics-card__header">
                        <h3>"On-Time Delivery Rate"</h3>
                        <span class="metrics-card__headline">"98.7%"</span>
                    </div>
                    {PERFORMANCE_METRICS
                        .iter()
                        .map(|metric| {
                            view! {
                                <div class="meter">
                                    <div class="meter__labels">
                                        <span>{metric.label}</span>
                                        <span>{format!("{}%", metric.value)}</span>
                                    </div>
                                    <div class="meter__track">
                                        <div
                                            class=format!("meter__fill {}", metric.bar_class)
                                            style=format!("width: {}%", metric.value)
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <p class="metrics-card__footnote">
                        "Verified performance metrics updated daily"
                    </p>
                </div>
            </section>

            <section class="testimonials">
                <div class="section-intro">
                    <h2>"What Our Partners Say"</h2>
                    <p>"Trusted by hundreds of carriers and shippers nationwide"</p>
                </div>
                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="card testimonial">
                                    <div class="testimonial__stars">"★★★★★"</div>
                                    <p class="testimonial__quote">{format!("\u{201c}{}\u{201d}", entry.quote)}</p>
                                    <div class="testimonial__author">
                                        <span class="testimonial__initial">{entry.initial}</span>
                                        <div>
                                            <p class="testimonial__name">{entry.author}</p>
                                            <p class="testimonial__role">{entry.role}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Move Freight?"</h2>
                <p>
                    "Join our network of trusted carriers and shippers. Get started today and \
                     experience the Third Eye Freight difference."
                </p>
                <div class="cta__actions">
                    <button
                        class="btn btn--primary btn--lg"
                        on:click=move |_| app::navigate(nav, View::LoadBoard)
                    >
                        "Browse Loads"
                    </button>
                    <button
                        class="btn btn--outline btn--lg"
                        on:click=move |_| app::navigate(nav, View::BecomeCarrier)
                    >
                        "Apply as Carrier"
                    </button>
                </div>
                <Show when=move || !session.get().is_authenticated()>
                    <button class="cta__signin" on:click=move |_| login_prompt.open()>
                        "Already a partner? Sign in"
                    </button>
                </Show>
            </section>
        </div>
    }
}

//! Carrier portal: a tabbed dashboard rendered only for carrier accounts
//! (the substitution lives in `state::nav::screen_for`, not here).

#[cfg(test)]
#[path = "carrier_portal_test.rs"]
mod carrier_portal_test;

use leptos::prelude::*;

use crate::app;
use crate::data;
use crate::data::portal::{
    ACTIVE_LOADS, AVAILABLE_LOADS, COMPLETED_LOADS, DOCUMENTS, EARNINGS_SUMMARY, FAQ, INVOICES,
    MAX_MONTHLY_EARNING, MONTHLY_EARNINGS, PORTAL_STATS,
};
use crate::state::nav::NavState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Portal sections. Local widget state — switching tabs never touches the
/// view router.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PortalTab {
    #[default]
    Dashboard,
    Available,
    Active,
    History,
    Earnings,
    Profile,
    Support,
}

impl PortalTab {
    pub const ALL: [PortalTab; 7] = [
        PortalTab::Dashboard,
        PortalTab::Available,
        PortalTab::Active,
        PortalTab::History,
        PortalTab::Earnings,
        PortalTab::Profile,
        PortalTab::Support,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PortalTab::Dashboard => "Dashboard",
            PortalTab::Available => "Available Loads",
            PortalTab::Active => "My Active Loads",
            PortalTab::History => "Load History",
            PortalTab::Earnings => "Earnings & Invoices",
            PortalTab::Profile => "Profile & Documents",
            PortalTab::Support => "Support",
        }
    }
}

#[component]
pub fn CarrierPortalPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let tab = RwSignal::new(PortalTab::default());

    let tab_buttons = move |mobile: bool| {
        PortalTab::ALL
            .into_iter()
            .map(|entry| {
                let base = if mobile { "portal__mobile-tab" } else { "portal__tab" };
                let class = move || {
                    if tab.get() == entry {
                        format!("{base} {base}--active")
                    } else {
                        base.to_owned()
                    }
                };
                view! {
                    <button class=class on:click=move |_| tab.set(entry)>
                        {entry.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page portal">
            <aside class="portal__sidebar">
                <nav class="card portal__nav">
                    {tab_buttons(false)}
                    <div class="portal__signout">
                        <button
                            class="btn btn--muted btn--block"
                            on:click=move |_| app::logout(session, nav, toasts)
                        >
                            "Sign Out"
                        </button>
                    </div>
                </nav>
            </aside>

            <div class="portal__mobile-tabs">{tab_buttons(true)}</div>

            <div class="portal__content">
                {move || match tab.get() {
                    PortalTab::Dashboard => view! { <DashboardTab tab=tab/> }.into_any(),
                    PortalTab::Available => view! { <AvailableTab/> }.into_any(),
                    PortalTab::Active => view! { <ActiveTab/> }.into_any(),
                    PortalTab::History => view! { <HistoryTab/> }.into_any(),
                    PortalTab::Earnings => view! { <EarningsTab/> }.into_any(),
                    PortalTab::Profile => view! { <ProfileTab/> }.into_any(),
                    PortalTab::Support => view! { <SupportTab/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn DashboardTab(tab: RwSignal<PortalTab>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let welcome = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |user| format!("Welcome back, {}!", user.display_name))
    };

    view! {
        <div>
            <h1>{welcome}</h1>

            <div class="portal__stats">
                {PORTAL_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="card stat-card">
                                <p class="stat-card__label">{stat.label}</p>
                                <p class="stat-card__value">{stat.value}</p>
                                <p class="stat-card__change">{format!("{} this month", stat.change)}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="card chart-card">
                <h3>"Monthly Earnings Trend"</h3>
                <div class="chart-card__bars">
                    {MONTHLY_EARNINGS
                        .iter()
                        .map(|(month, amount)| {
                            let height =
                                f64::from(*amount) / f64::from(MAX_MONTHLY_EARNING) * 120.0;
                            view! {
                                <div class="chart-card__bar">
                                    <div
                                        class="chart-card__fill"
                                        style=format!("height: {height:.0}px")
                                    ></div>
                                    <p class="chart-card__month">{*month}</p>
                                    <p class="chart-card__amount">{format!("${amount}")}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="portal__quick-actions">
                <button class="card card--clickable" on:click=move |_| tab.set(PortalTab::Available)>
                    <p class="card__title">"Browse Available Loads"</p>
                    <p>"Find loads to haul"</p>
                </button>
                <button class="card card--clickable" on:click=move |_| tab.set(PortalTab::Active)>
                    <p class="card__title">"My Active Loads"</p>
                    <span class="badge">{ACTIVE_LOADS.len()}</span>
                </button>
                <button class="card card--clickable" on:click=move |_| tab.set(PortalTab::Earnings)>
                    <p class="card__title">"View Earnings"</p>
                    <p class="card__accent">"$24,580 total"</p>
                </button>
            </div>

            <div class="card">
                <h3>"Recent Activity"</h3>
                {COMPLETED_LOADS
                    .iter()
                    .map(|load| {
                        view! {
                            <div class="list-row">
                                <div>
                                    <p class="list-row__title">{load.id}</p>
                                    <p class="list-row__sub">{load.route}</p>
                                </div>
                                <div class="list-row__right">
                                    <p class="list-row__amount">{format!("${}", load.amount)}</p>
                                    <span class="badge">{load.status}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn AvailableTab() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let accept = move |_| {
        toasts.update(|queue| {
            queue.success("Load accepted! Check My Active Loads section.");
        });
    };
    let decline = move |_| {
        toasts.update(|queue| {
            queue.info("Load declined.");
        });
    };

    view! {
        <div>
            <h1>"Available Loads"</h1>
            <p class="page__subtitle">"Browse and accept loads that match your vehicle and route"</p>

            {AVAILABLE_LOADS
                .iter()
                .map(|load| {
                    view! {
                        <div class="card offer-card">
                            <div class="offer-card__top">
                                <div>
                                    <h3>{format!("{} → {}", load.origin, load.destination)}</h3>
                                    <p class="offer-card__meta">
                                        {format!("{} • {} • ", load.distance, load.weight)}
                                        <span class="badge">{load.load_type.label()}</span>
                                    </p>
                                </div>
                                <div class="offer-card__rate">
                                    <p>{format!("${}", load.rate)}</p>
                                    <p class="offer-card__posted">{format!("Posted {}", load.posted)}</p>
                                </div>
                            </div>
                            <div class="offer-card__details">
                                <div>
                                    <p class="list-row__sub">"Pickup Date"</p>
                                    <p class="list-row__title">{load.pickup_date}</p>
                                </div>
                                <div>
                                    <p class="list-row__sub">"Posted By"</p>
                                    <p class="list-row__title">{load.posted_by}</p>
                                </div>
                            </div>
                            <div class="offer-card__actions">
                                <button class="btn btn--primary" on:click=accept>
                                    "Accept Load"
                                </button>
                                <button class="btn btn--outline" on:click=decline>
                                    "Decline"
                                </button>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ActiveTab() -> impl IntoView {
    view! {
        <div>
            <h1>"My Active Loads"</h1>
            {ACTIVE_LOADS
                .iter()
                .map(|load| {
                    view! {
                        <div class="card offer-card">
                            <div class="offer-card__top">
                                <div>
                                    <h3>{load.id}</h3>
                                    <p class="list-row__title">
                                        {format!("{} → {}", load.origin, load.destination)}
                                    </p>
                                    <p class="list-row__sub">{load.distance}</p>
                                </div>
                                <div class="offer-card__rate">
                                    <span class="badge">{load.status}</span>
                                    <p>{format!("${}", load.amount)}</p>
                                </div>
                            </div>
                            <div class="meter">
                                <div class="meter__labels">
                                    <span>"Progress"</span>
                                    <span>{format!("{}%", load.progress)}</span>
                                </div>
                                <div class="meter__track">
                                    <div
                                        class="meter__fill meter__fill--primary"
                                        style=format!("width: {}%", load.progress)
                                    ></div>
                                </div>
                            </div>
                            <p class="offer-card__eta">{format!("ETA: {}", load.eta)}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn HistoryTab() -> impl IntoView {
    view! {
        <div>
            <h1>"Load History"</h1>
            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Load ID"</th>
                            <th>"Route"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th>"Rating"</th>
                            <th class="table__right">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {COMPLETED_LOADS
                            .iter()
                            .map(|load| {
                                let stars = "★".repeat(usize::from(load.rating));
                                view! {
                                    <tr>
                                        <td>{load.id}</td>
                                        <td>{load.route}</td>
                                        <td>{load.date}</td>
                                        <td>
                                            <span class="badge">{load.status}</span>
                                        </td>
                                        <td class="table__stars">{stars}</td>
                                        <td class="table__right">{format!("${}", load.amount)}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn EarningsTab() -> impl IntoView {
    view! {
        <div>
            <h1>"Earnings & Invoices"</h1>

            <div class="portal__quick-actions">
                {EARNINGS_SUMMARY
                    .iter()
                    .map(|summary| {
                        view! {
                            <div class="card stat-card">
                                <p class="stat-card__label">{summary.label}</p>
                                <p class="stat-card__value stat-card__value--accent">{summary.value}</p>
                                <p class="stat-card__change">{summary.note}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="card">
                <h3>"Recent Invoices"</h3>
                {INVOICES
                    .iter()
                    .map(|invoice| {
                        view! {
                            <div class="list-row">
                                <div>
                                    <p class="list-row__title">{invoice.id}</p>
                                    <p class="list-row__sub">
                                        {format!("{} • {}", invoice.month, invoice.date)}
                                    </p>
                                </div>
                                <div class="list-row__right">
                                    <p class="list-row__amount">{format!("${}", invoice.amount)}</p>
                                    <span class="badge">{invoice.status}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let name = move || session.get().user.map(|user| user.display_name).unwrap_or_default();
    let email = move || session.get().user.map(|user| user.email).unwrap_or_default();

    view! {
        <div>
            <h1>"Profile & Documents"</h1>

            <div class="card profile-card">
                <h3>"Carrier Information"</h3>
                <div class="profile-card__grid">
                    <div>
                        <p class="list-row__sub">"Company Name"</p>
                        <p class="list-row__title">{name}</p>
                    </div>
                    <div>
                        <p class="list-row__sub">"Email"</p>
                        <p class="list-row__title">{email}</p>
                    </div>
                    <div>
                        <p class="list-row__sub">"MC Number"</p>
                        <p class="list-row__title">{data::MC_NUMBER}</p>
                    </div>
                    <div>
                        <p class="list-row__sub">"DOT Number"</p>
                        <p class="list-row__title">{data::DOT_NUMBER}</p>
                    </div>
                </div>
            </div>

            <div class="card">
                <h3>"Required Documents"</h3>
                {DOCUMENTS
                    .iter()
                    .map(|doc| {
                        view! {
                            <div class="list-row">
                                <div>
                                    <p class="list-row__title">{doc.name}</p>
                                    <p class="list-row__sub">{doc.status}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn SupportTab() -> impl IntoView {
    view! {
        <div>
            <h1>"Support & Help"</h1>

            <div class="card">
                <h3>"Contact Support"</h3>
                <div class="support__channels">
                    <div class="support__channel">
                        <p class="list-row__title">"Call Support"</p>
                        <p>{data::DISPATCH_PHONE}</p>
                        <p class="list-row__sub">"24/7 Dispatch"</p>
                    </div>
                    <div class="support__channel">
                        <p class="list-row__title">"Email Support"</p>
                        <p>{data::CARRIER_SUPPORT_EMAIL}</p>
                        <p class="list-row__sub">"Response in 2 hrs"</p>
                    </div>
                    <div class="support__channel">
                        <p class="list-row__title">"Live Chat"</p>
                        <p>"Chat with an agent"</p>
                        <p class="list-row__sub">"Mon-Fri: 7am-6pm"</p>
                    </div>
                </div>
            </div>

            <div class="card">
                <h3>"Frequently Asked Questions"</h3>
                {FAQ.iter()
                    .map(|entry| {
                        view! {
                            <div class="faq">
                                <p class="faq__question">{entry.question}</p>
                                <p class="faq__answer">{entry.answer}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

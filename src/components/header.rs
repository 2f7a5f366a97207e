//! Fixed site header with desktop nav, auth controls, and the mobile menu.

use leptos::prelude::*;

use crate::app::{self, LoginPrompt, ScrollFlag};
use crate::components::logo::Logo;
use crate::state::nav::{NavState, View, screen_for};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Nav links shown to the current user: the five public screens, plus the
/// carrier portal when a carrier is signed in.
fn nav_links(session: &SessionState) -> Vec<View> {
    let mut views = vec![
        View::Home,
        View::LoadBoard,
        View::Services,
        View::Tracking,
        View::BecomeCarrier,
    ];
    if session.is_carrier() {
        views.push(View::CarrierPortal);
    }
    views
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let login_prompt = expect_context::<LoginPrompt>();
    let scrolled = expect_context::<ScrollFlag>();

    // Transparent over the home hero until the page scrolls; solid everywhere else.
    let header_class = move || {
        let on_home = screen_for(nav.get().current, session.get().user.as_ref()) == View::Home;
        if on_home && !scrolled.0.get() {
            "site-header site-header--transparent"
        } else {
            "site-header site-header--solid"
        }
    };

    let link_buttons = move || {
        let current = nav.get().current;
        nav_links(&session.get())
            .into_iter()
            .map(|view| {
                let class = if view == current {
                    "site-header__link site-header__link--active"
                } else {
                    "site-header__link"
                };
                view! {
                    <button class=class on:click=move |_| app::navigate(nav, view)>
                        {view.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let mobile_links = move || {
        nav_links(&session.get())
            .into_iter()
            .map(|view| {
                view! {
                    <button
                        class="site-header__mobile-link"
                        on:click=move |_| app::navigate(nav, view)
                    >
                        {view.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class=header_class>
            <div class="site-header__inner">
                <button class="site-header__brand" on:click=move |_| app::navigate(nav, View::Home)>
                    <Logo/>
                </button>

                <nav class="site-header__nav">{link_buttons}</nav>

                <div class="site-header__auth">
                    {move || match session.get().user {
                        Some(user) => view! {
                            <div class="site-header__user">
                                <span class="site-header__avatar">{user.avatar_initials}</span>
                                <button
                                    class="btn btn--outline btn--sm"
                                    on:click=move |_| app::logout(session, nav, toasts)
                                >
                                    "Sign Out"
                                </button>
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <button class="btn btn--primary" on:click=move |_| login_prompt.open()>
                                "Sign In"
                            </button>
                        }
                        .into_any(),
                    }}
                </div>

                <button
                    class="site-header__hamburger"
                    on:click=move |_| nav.update(NavState::toggle_mobile_menu)
                >
                    {move || if nav.get().mobile_menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || nav.get().mobile_menu_open>
                <nav class="site-header__mobile-menu">
                    {mobile_links}
                    <Show when=move || !session.get().is_authenticated()>
                        <button
                            class="btn btn--primary site-header__mobile-signin"
                            on:click=move |_| login_prompt.open()
                        >
                            "Sign In"
                        </button>
                    </Show>
                </nav>
            </Show>
        </header>
    }
}

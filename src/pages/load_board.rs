//! Public load board: filterable grid of the fixture loads.

#[cfg(test)]
#[path = "load_board_test.rs"]
mod load_board_test;

use leptos::prelude::*;

use crate::data::loads::{BOARD_LOADS, BoardLoad};
use crate::state::toast::ToastState;

/// Select values for the type filter; "all" is the default option.
const TYPE_ALL: &str = "all";

fn matches(load: &BoardLoad, origin: &str, destination: &str, type_filter: &str) -> bool {
    let origin_needle = origin.trim().to_lowercase();
    let destination_needle = destination.trim().to_lowercase();

    let origin_ok =
        origin_needle.is_empty() || load.origin.to_lowercase().contains(&origin_needle);
    let destination_ok = destination_needle.is_empty()
        || load.destination.to_lowercase().contains(&destination_needle);
    let type_ok = type_filter == TYPE_ALL || load.load_type.label() == type_filter;

    origin_ok && destination_ok && type_ok
}

/// Narrow the board to loads matching the filter inputs. Origin and
/// destination are case-insensitive substring matches; type is exact.
pub(crate) fn filter_loads<'a>(
    loads: &'a [BoardLoad],
    origin: &str,
    destination: &str,
    type_filter: &str,
) -> Vec<&'a BoardLoad> {
    loads
        .iter()
        .filter(|load| matches(load, origin, destination, type_filter))
        .collect()
}

#[component]
pub fn LoadBoardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let type_filter = RwSignal::new(TYPE_ALL.to_owned());

    let visible =
        move || filter_loads(BOARD_LOADS, &origin.get(), &destination.get(), &type_filter.get());

    let book = move |_| {
        toasts.update(|queue| {
            queue.success("Load booked successfully! Check your dashboard for details.");
        });
    };

    view! {
        <div class="page load-board">
            <div class="page__heading">
                <div>
                    <h1>"Load Board"</h1>
                    <p>"Find and book available loads across the nation"</p>
                </div>
                <span class="badge badge--count">
                    {move || format!("{} Active Loads", visible().len())}
                </span>
            </div>

            <div class="card load-board__filters">
                <input
                    class="form__input"
                    placeholder="Origin city..."
                    prop:value=move || origin.get()
                    on:input=move |ev| origin.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    placeholder="Destination city..."
                    prop:value=move || destination.get()
                    on:input=move |ev| destination.set(event_target_value(&ev))
                />
                <select
                    class="form__input"
                    on:change=move |ev| type_filter.set(event_target_value(&ev))
                >
                    <option value="all">"All Types"</option>
                    <option value="FTL">"Full Truckload (FTL)"</option>
                    <option value="LTL">"Less Than Truckload (LTL)"</option>
                </select>
            </div>

            <div class="load-board__grid">
                {move || {
                    visible()
                        .into_iter()
                        .map(|load| {
                            view! {
                                <div class="card load-card">
                                    <div class="load-card__top">
                                        <span class="badge">{load.load_type.label()}</span>
                                        <div class="load-card__rate">
                                            <p>{format!("${}", load.rate)}</p>
                                            <p class="load-card__distance">{load.distance}</p>
                                        </div>
                                    </div>
                                    <div class="load-card__route">
                                        <div>
                                            <p class="load-card__city">{load.origin}</p>
                                            <p class="load-card__hint">"Origin"</p>
                                        </div>
                                        <span class="load-card__arrow">"→"</span>
                                        <div class="load-card__dest">
                                            <p class="load-card__city">{load.destination}</p>
                                            <p class="load-card__hint">"Destination"</p>
                                        </div>
                                    </div>
                                    <div class="load-card__meta">
                                        <span>{format!("Weight: {}", load.weight)}</span>
                                        <span>{format!("Posted: {}", load.posted)}</span>
                                    </div>
                                    <div class="load-card__actions">
                                        <span class="badge badge--outline">
                                            {format!("Expires in {}", load.expires)}
                                        </span>
                                        <button class="btn btn--primary btn--sm" on:click=book>
                                            "Book Now"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

//! # thirdeye-web
//!
//! Leptos + WASM front end for the Third Eye Freight demo site: a marketing
//! homepage, a static load board, a services catalog, a mock live-tracking
//! view, a mock carrier portal, and lead-capture forms.
//!
//! Everything is client-side and in-memory. There is no backend, no
//! persistence, and no real authentication — login compares against two
//! fixed demo accounts. Navigation is an in-memory view selector rather
//! than a URL router; the app has no server routes to synchronize with.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

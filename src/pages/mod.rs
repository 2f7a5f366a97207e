//! Top-level screens, one module per view selector.

pub mod become_carrier;
pub mod carrier_portal;
pub mod home;
pub mod load_board;
pub mod services;
pub mod tracking;

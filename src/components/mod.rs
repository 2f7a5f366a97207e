//! Shared UI components: brand mark, site chrome, modals, and the toast
//! overlay.

pub mod footer;
pub mod header;
pub mod login_modal;
pub mod logo;
pub mod modal;
pub mod quote_modal;
pub mod toaster;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `nav`, `toast`) so individual
//! components can depend on small focused models. Each holder is a plain
//! struct wrapped in an `RwSignal` and provided via context by the root
//! component; pages and components are readers, the session store and the
//! view router are the only writers.

pub mod nav;
pub mod session;
pub mod toast;

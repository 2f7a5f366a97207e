//! Static fixture content.
//!
//! DESIGN
//! ======
//! Every table here is a `const` slice of plain records with literal
//! values. Nothing is ever created, mutated, or deleted at runtime — the
//! fixtures stand in for a future backend, which is also why the records
//! derive `Serialize`.

pub mod loads;
pub mod portal;
pub mod services;
pub mod tracking;

// Brand and compliance constants shared by the footer, the portal profile
// tab, and the login/support copy.
pub const COMPANY_NAME: &str = "MURPHY FREIGHT LLC";
pub const PHONE: &str = "(757) 777-1714";
pub const DISPATCH_PHONE: &str = "+1 (661) 596-3328";
pub const EMAIL: &str = "contact@murphyfreightllc.com";
pub const CARRIER_SUPPORT_EMAIL: &str = "carrier@thirdeyefreight.com";
pub const ADDRESS: &str = "954 LITTLE BAY AVE, NORFOLK, VA, 23503-1328";
pub const MC_NUMBER: &str = "MC-123456";
pub const DOT_NUMBER: &str = "DOT-7890123";

//! Carrier portal fixtures: dashboard stats, loads, invoices, documents,
//! and support content.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use serde::Serialize;

use crate::data::loads::LoadType;

/// Dashboard stat card.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PortalStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const PORTAL_STATS: &[PortalStat] = &[
    PortalStat {
        label: "Total Earnings",
        value: "$24,580",
        change: "+12%",
    },
    PortalStat {
        label: "Loads Completed",
        value: "47",
        change: "+5",
    },
    PortalStat {
        label: "On-Time Rate",
        value: "98.5%",
        change: "+0.5%",
    },
    PortalStat {
        label: "Miles Driven",
        value: "12,450",
        change: "+850",
    },
];

/// Monthly earnings for the dashboard bar chart, January through June.
pub const MONTHLY_EARNINGS: &[(&str, u32)] = &[
    ("Jan", 2400),
    ("Feb", 3200),
    ("Mar", 2800),
    ("Apr", 4100),
    ("May", 3900),
    ("Jun", 4400),
];

/// Tallest bar in the chart; heights are scaled against it.
pub const MAX_MONTHLY_EARNING: u32 = 4400;

/// A load offered to the carrier on the Available Loads tab.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AvailableLoad {
    pub id: u32,
    pub origin: &'static str,
    pub destination: &'static str,
    pub distance: &'static str,
    pub rate: u32,
    pub weight: &'static str,
    pub load_type: LoadType,
    pub posted: &'static str,
    pub pickup_date: &'static str,
    pub posted_by: &'static str,
}

pub const AVAILABLE_LOADS: &[AvailableLoad] = &[
    AvailableLoad {
        id: 1,
        origin: "Los Angeles, CA",
        destination: "Phoenix, AZ",
        distance: "375 mi",
        rate: 1850,
        weight: "32,000 lbs",
        load_type: LoadType::Ftl,
        posted: "2h ago",
        pickup_date: "Feb 28",
        posted_by: "ABC Logistics",
    },
    AvailableLoad {
        id: 2,
        origin: "Houston, TX",
        destination: "Dallas, TX",
        distance: "240 mi",
        rate: 950,
        weight: "18,000 lbs",
        load_type: LoadType::Ltl,
        posted: "1h ago",
        pickup_date: "Feb 27",
        posted_by: "ShipCo Inc",
    },
    AvailableLoad {
        id: 3,
        origin: "Chicago, IL",
        destination: "Detroit, MI",
        distance: "280 mi",
        rate: 1200,
        weight: "28,000 lbs",
        load_type: LoadType::Ftl,
        posted: "30m ago",
        pickup_date: "Mar 1",
        posted_by: "Premier Freight",
    },
];

/// A load the carrier is currently hauling.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ActiveLoad {
    pub id: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub distance: &'static str,
    pub status: &'static str,
    pub progress: u8,
    pub eta: &'static str,
    pub amount: u32,
}

pub const ACTIVE_LOADS: &[ActiveLoad] = &[
    ActiveLoad {
        id: "LD-2024-045",
        origin: "Denver, CO",
        destination: "Salt Lake City, UT",
        distance: "525 mi",
        status: "In Transit",
        progress: 65,
        eta: "2h 15m",
        amount: 1750,
    },
    ActiveLoad {
        id: "LD-2024-046",
        origin: "Seattle, WA",
        destination: "Portland, OR",
        distance: "175 mi",
        status: "Picked Up",
        progress: 15,
        eta: "4h 30m",
        amount: 750,
    },
];

/// A delivered load in the history table.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CompletedLoad {
    pub id: &'static str,
    pub route: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub amount: u32,
    pub rating: u8,
}

pub const COMPLETED_LOADS: &[CompletedLoad] = &[
    CompletedLoad {
        id: "LD-2024-001",
        route: "LA → Phoenix",
        date: "Feb 24, 2024",
        status: "Delivered",
        amount: 1850,
        rating: 5,
    },
    CompletedLoad {
        id: "LD-2024-002",
        route: "Houston → Dallas",
        date: "Feb 22, 2024",
        status: "Delivered",
        amount: 950,
        rating: 5,
    },
    CompletedLoad {
        id: "LD-2024-003",
        route: "Chicago → Detroit",
        date: "Feb 20, 2024",
        status: "Delivered",
        amount: 1200,
        rating: 4,
    },
];

/// A monthly invoice on the earnings tab.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Invoice {
    pub id: &'static str,
    pub month: &'static str,
    pub amount: u32,
    pub status: &'static str,
    pub date: &'static str,
}

pub const INVOICES: &[Invoice] = &[
    Invoice {
        id: "INV-001",
        month: "February 2024",
        amount: 8500,
        status: "Paid",
        date: "Mar 1, 2024",
    },
    Invoice {
        id: "INV-002",
        month: "January 2024",
        amount: 7200,
        status: "Paid",
        date: "Feb 1, 2024",
    },
    Invoice {
        id: "INV-003",
        month: "December 2023",
        amount: 6800,
        status: "Paid",
        date: "Jan 5, 2024",
    },
];

/// Earnings summary cards on the earnings tab.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct EarningsSummary {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const EARNINGS_SUMMARY: &[EarningsSummary] = &[
    EarningsSummary {
        label: "Current Month",
        value: "$8,500",
        note: "5 loads completed",
    },
    EarningsSummary {
        label: "Total This Year",
        value: "$64,200",
        note: "+15% from last year",
    },
    EarningsSummary {
        label: "Pending Payout",
        value: "$2,150",
        note: "Pays out Mar 1",
    },
];

/// Compliance documents on the profile tab.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CarrierDocument {
    pub name: &'static str,
    pub status: &'static str,
}

pub const DOCUMENTS: &[CarrierDocument] = &[
    CarrierDocument {
        name: "Driver's License",
        status: "Verified",
    },
    CarrierDocument {
        name: "Insurance Certificate",
        status: "Verified",
    },
    CarrierDocument {
        name: "Vehicle Registration",
        status: "Verified",
    },
    CarrierDocument {
        name: "Safety Inspection",
        status: "Expires Jun 2024",
    },
];

/// Support FAQ entry.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I accept a load?",
        answer: "Browse available loads, review details, and click Accept Load button.",
    },
    FaqEntry {
        question: "When do I get paid?",
        answer: "Payments are processed on the 1st of each month for all completed loads.",
    },
    FaqEntry {
        question: "Can I decline a load?",
        answer: "Yes, you can decline any load. Frequent declines may affect your visibility.",
    },
    FaqEntry {
        question: "What if I have issues during delivery?",
        answer: "Contact 24/7 dispatch support immediately at the provided number.",
    },
];

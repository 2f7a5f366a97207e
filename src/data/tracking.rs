//! Live-tracking fixtures.

use serde::Serialize;

/// One shipment shown on the tracking screen.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Shipment {
    pub load_id: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub progress: u8,
    pub eta: &'static str,
    pub driver: &'static str,
    pub status: &'static str,
}

pub const SHIPMENTS: &[Shipment] = &[
    Shipment {
        load_id: "LD-2024-002",
        origin: "Houston, TX",
        destination: "Dallas, TX",
        progress: 65,
        eta: "2h 15m",
        driver: "John Smith",
        status: "On Time",
    },
    Shipment {
        load_id: "LD-2024-005",
        origin: "Denver, CO",
        destination: "Salt Lake City, UT",
        progress: 30,
        eta: "4h 30m",
        driver: "Mike Johnson",
        status: "On Time",
    },
];

//! Load board fixtures.

#[cfg(test)]
#[path = "loads_test.rs"]
mod loads_test;

use serde::Serialize;

/// Full truckload vs. less-than-truckload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LoadType {
    Ftl,
    Ltl,
}

impl LoadType {
    pub fn label(self) -> &'static str {
        match self {
            LoadType::Ftl => "FTL",
            LoadType::Ltl => "LTL",
        }
    }
}

/// One posting on the public load board.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BoardLoad {
    pub id: u32,
    pub origin: &'static str,
    pub destination: &'static str,
    pub distance: &'static str,
    pub rate: u32,
    pub weight: &'static str,
    pub load_type: LoadType,
    pub posted: &'static str,
    pub expires: &'static str,
}

pub const BOARD_LOADS: &[BoardLoad] = &[
    BoardLoad {
        id: 1,
        origin: "Los Angeles, CA",
        destination: "Phoenix, AZ",
        distance: "375 mi",
        rate: 1850,
        weight: "32,000 lbs",
        load_type: LoadType::Ftl,
        posted: "2 hours ago",
        expires: "6 hours",
    },
    BoardLoad {
        id: 2,
        origin: "Houston, TX",
        destination: "Dallas, TX",
        distance: "240 mi",
        rate: 950,
        weight: "18,000 lbs",
        load_type: LoadType::Ltl,
        posted: "1 hour ago",
        expires: "8 hours",
    },
    BoardLoad {
        id: 3,
        origin: "Chicago, IL",
        destination: "Detroit, MI",
        distance: "280 mi",
        rate: 1200,
        weight: "28,000 lbs",
        load_type: LoadType::Ftl,
        posted: "30 min ago",
        expires: "12 hours",
    },
    BoardLoad {
        id: 4,
        origin: "Miami, FL",
        destination: "Atlanta, GA",
        distance: "665 mi",
        rate: 2200,
        weight: "35,000 lbs",
        load_type: LoadType::Ftl,
        posted: "3 hours ago",
        expires: "4 hours",
    },
    BoardLoad {
        id: 5,
        origin: "Denver, CO",
        destination: "Salt Lake City, UT",
        distance: "525 mi",
        rate: 1750,
        weight: "22,000 lbs",
        load_type: LoadType::Ltl,
        posted: "45 min ago",
        expires: "10 hours",
    },
    BoardLoad {
        id: 6,
        origin: "Seattle, WA",
        destination: "Portland, OR",
        distance: "175 mi",
        rate: 750,
        weight: "15,000 lbs",
        load_type: LoadType::Ltl,
        posted: "15 min ago",
        expires: "24 hours",
    },
];

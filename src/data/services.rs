//! Services catalog and homepage marketing fixtures.

use serde::Serialize;

/// One entry in the services catalog.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Full Truckload (FTL)",
        description: "Dedicated trucks for your shipments. Best for large loads requiring exclusive use of a trailer.",
        features: [
            "48' and 53' trailers",
            "Same-day pickup available",
            "Real-time tracking",
            "Dedicated support",
        ],
    },
    Service {
        title: "Less Than Truckload (LTL)",
        description: "Cost-effective shipping for smaller loads. Share trailer space and save on transportation costs.",
        features: [
            "Palletized shipping",
            "Consolidated loads",
            "Flexible scheduling",
            "Nationwide coverage",
        ],
    },
    Service {
        title: "Expedited Shipping",
        description: "Time-critical deliveries when every hour counts. Guaranteed delivery windows.",
        features: [
            "Same-day delivery",
            "Next-flight-out options",
            "24/7 dispatch",
            "Team drivers",
        ],
    },
    Service {
        title: "Refrigerated Freight",
        description: "Temperature-controlled shipping for perishable goods. Maintain cold chain integrity.",
        features: [
            "Reefers & frozen trailers",
            "Temperature monitoring",
            "Food-grade certified",
            "Hazmat capable",
        ],
    },
    Service {
        title: "Flatbed/Oversized",
        description: "Specialized equipment for heavy haul and oversized loads.",
        features: [
            "Step decks & RGNs",
            "Wide load permits",
            "Pilot car services",
            "Route planning",
        ],
    },
    Service {
        title: "Cross-Border",
        description: "Seamless shipping between US, Canada, and Mexico with customs expertise.",
        features: [
            "Customs clearance",
            "Bonded carriers",
            "Documentation support",
            "Bilingual support",
        ],
    },
];

/// Short label/blurb pair used in several homepage sections.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Blurb {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_SERVICES: &[Blurb] = &[
    Blurb {
        title: "Freight Brokerage",
        description: "Connecting shippers with the best carriers for their loads",
    },
    Blurb {
        title: "Load Matching",
        description: "AI-powered matching to find the perfect carrier for every load",
    },
    Blurb {
        title: "Carrier Management",
        description: "End-to-end carrier relationship and compliance management",
    },
];

pub const HOME_FEATURES: &[Blurb] = &[
    Blurb {
        title: "Fast Payments",
        description: "Get paid within 24-48 hours of delivery",
    },
    Blurb {
        title: "Dedicated Dispatch",
        description: "Personal dispatch support for every carrier",
    },
    Blurb {
        title: "Real-time Tracking",
        description: "Track your freight 24/7 with live updates",
    },
    Blurb {
        title: "24/7 Support",
        description: "Round-the-clock customer and dispatch support",
    },
];

/// Homepage stats band.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CompanyStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const COMPANY_STATS: &[CompanyStat] = &[
    CompanyStat {
        value: "500+",
        label: "Active Carriers",
    },
    CompanyStat {
        value: "10,000+",
        label: "Loads Moved",
    },
    CompanyStat {
        value: "50M+",
        label: "Miles Covered",
    },
    CompanyStat {
        value: "48",
        label: "States Covered",
    },
];

/// Delivery-performance bars on the homepage metrics card.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PerformanceMetric {
    pub label: &'static str,
    pub value: f64,
    pub bar_class: &'static str,
}

pub const PERFORMANCE_METRICS: &[PerformanceMetric] = &[
    PerformanceMetric {
        label: "On-Time Deliveries",
        value: 98.7,
        bar_class: "meter__fill--primary",
    },
    PerformanceMetric {
        label: "Customer Satisfaction",
        value: 96.5,
        bar_class: "meter__fill--secondary",
    },
    PerformanceMetric {
        label: "Carrier Retention",
        value: 94.2,
        bar_class: "meter__fill--tertiary",
    },
];

/// Homepage testimonial card.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub initial: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Third Eye Freight has been a game-changer for my business. Consistent loads and fast payments!",
        author: "Mike Johnson",
        role: "Owner Operator",
        initial: "M",
    },
    Testimonial {
        quote: "The best brokerage we have worked with. Professional team and excellent communication.",
        author: "Sarah Williams",
        role: "Fleet Manager",
        initial: "S",
    },
    Testimonial {
        quote: "Fair rates, great lanes, and the dispatch team actually answers the phone. Highly recommend!",
        author: "David Chen",
        role: "Independent Carrier",
        initial: "D",
    },
    Testimonial {
        quote: "They understand the needs of small carriers. Transparent and reliable partner.",
        author: "Robert Martinez",
        role: "Small Fleet Owner",
        initial: "R",
    },
];

//! Route network and operator roster used by the flight generator

/// A directed route between two catalog airports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub origin: &'static str,
    pub destination: &'static str,
}

const fn route(origin: &'static str, destination: &'static str) -> Route {
    Route {
        origin,
        destination,
    }
}

/// Domestic routes first, then international
pub(crate) static ROUTES: [Route; 36] = [
    // Domestic
    route("eze", "cor"),
    route("eze", "mdz"),
    route("eze", "brc"),
    route("eze", "sla"),
    route("eze", "tuc"),
    route("eze", "igt"),
    route("eze", "ush"),
    route("eze", "rgl"),
    route("eze", "nqn"),
    route("eze", "crd"),
    route("arp", "cor"),
    route("arp", "mdz"),
    route("arp", "brc"),
    route("arp", "sla"),
    route("arp", "pmr"),
    route("cor", "mdz"),
    route("cor", "sla"),
    route("cor", "tuc"),
    route("mdz", "brc"),
    route("sla", "tuc"),
    route("brc", "ush"),
    route("brc", "nqn"),
    route("nqn", "crd"),
    route("crd", "rgl"),
    route("igt", "sla"),
    // International
    route("eze", "scl"),
    route("eze", "pde"),
    route("eze", "asu"),
    route("eze", "gru"),
    route("arp", "scl"),
    route("arp", "pde"),
    route("cor", "scl"),
    route("mdz", "scl"),
    route("brc", "scl"),
    route("sla", "asu"),
    route("igt", "asu"),
];

pub(crate) static OPERATORS: [&str; 5] = [
    "Aerolíneas Ejecutivas",
    "Sky Charter",
    "Elite Aviation",
    "Platinum Jets",
    "VIP Airways",
];

//! Airport reference table
//!
//! Argentine domestic airports plus the regional international
//! destinations served by the empty-leg network.

use serde::Serialize;

/// An airport in the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Airport {
    /// Lowercase IATA code, used as the catalog key
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    /// Degrees, negative south
    pub latitude: f64,
    /// Degrees, negative west
    pub longitude: f64,
}

impl Airport {
    const fn new(
        id: &'static str,
        code: &'static str,
        name: &'static str,
        city: &'static str,
        country: &'static str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            code,
            name,
            city,
            country,
            latitude,
            longitude,
        }
    }
}

#[rustfmt::skip]
pub(crate) static AIRPORTS: [Airport; 19] = [
    // Argentina
    Airport::new("eze", "EZE", "Aeropuerto Internacional Ezeiza", "Buenos Aires", "Argentina", -34.8222, -58.5358),
    Airport::new("arp", "ARP", "Aeropuerto Jorge Newbery", "Buenos Aires", "Argentina", -34.5592, -58.4156),
    Airport::new("cor", "COR", "Aeropuerto Córdoba", "Córdoba", "Argentina", -31.3236, -64.2081),
    Airport::new("mdz", "MDZ", "Aeropuerto Mendoza", "Mendoza", "Argentina", -32.8317, -68.7928),
    Airport::new("brc", "BRC", "Aeropuerto Bariloche", "San Carlos de Bariloche", "Argentina", -41.1511, -71.1575),
    Airport::new("ush", "USH", "Aeropuerto Ushuaia", "Ushuaia", "Argentina", -54.8433, -68.295),
    Airport::new("igt", "IGT", "Aeropuerto Iguazú", "Puerto Iguazú", "Argentina", -25.7372, -54.4736),
    Airport::new("sla", "SLA", "Aeropuerto Salta", "Salta", "Argentina", -24.8561, -65.4864),
    Airport::new("tuc", "TUC", "Aeropuerto Tucumán", "San Miguel de Tucumán", "Argentina", -26.8409, -65.1049),
    Airport::new("rgl", "RGL", "Aeropuerto Río Gallegos", "Río Gallegos", "Argentina", -51.6089, -69.3128),
    Airport::new("ftl", "FTL", "Aeropuerto Formosa", "Formosa", "Argentina", -26.2128, -58.2281),
    Airport::new("res", "RES", "Aeropuerto Resistencia", "Resistencia", "Argentina", -27.45, -59.0561),
    Airport::new("crd", "CRD", "Aeropuerto Comodoro Rivadavia", "Comodoro Rivadavia", "Argentina", -45.7853, -67.4656),
    Airport::new("nqn", "NQN", "Aeropuerto Neuquén", "Neuquén", "Argentina", -38.9489, -68.1558),
    Airport::new("pmr", "PMR", "Aeropuerto Puerto Madryn", "Puerto Madryn", "Argentina", -42.7592, -65.1028),
    // International
    Airport::new("scl", "SCL", "Aeropuerto Santiago", "Santiago", "Chile", -33.3928, -70.7858),
    Airport::new("pde", "PDE", "Aeropuerto Punta del Este", "Punta del Este", "Uruguay", -34.8553, -55.0944),
    Airport::new("asu", "ASU", "Aeropuerto Asunción", "Asunción", "Paraguay", -25.2397, -57.5194),
    Airport::new("gru", "GRU", "Aeropuerto São Paulo", "São Paulo", "Brasil", -23.4356, -46.4731),
];

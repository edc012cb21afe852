//! Great-circle distance and flight time estimates

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average block speed assumed for private jets, km/h
pub const CRUISE_SPEED_KMH: f64 = 750.0;

/// Haversine distance between two points given in degrees, rounded to
/// the nearest kilometre.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> u32 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round() as u32
}

/// Estimated flight time in whole minutes at [`CRUISE_SPEED_KMH`].
///
/// No climb or descent modelling.
pub fn estimate_duration_minutes(distance_km: u32) -> u32 {
    (f64::from(distance_km) / CRUISE_SPEED_KMH * 60.0).round() as u32
}

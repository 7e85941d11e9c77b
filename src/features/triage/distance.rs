/// Earth's radius in kilometers (for the haversine formula)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinate pairs given
/// in degrees. Symmetric; exactly zero for identical points.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_exactly_zero() {
        assert_eq!(haversine_distance_km(27.7172, 85.3240, 27.7172, 85.3240), 0.0);
    }

    #[test]
    fn kathmandu_to_pokhara_is_about_148_km() {
        let kathmandu = (27.7172, 85.3240);
        let pokhara = (28.2096, 83.9856);

        let distance =
            haversine_distance_km(kathmandu.0, kathmandu.1, pokhara.0, pokhara.1);

        assert!((distance - 148.0).abs() < 5.0, "got {} km", distance);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = haversine_distance_km(27.7172, 85.3240, 28.2096, 83.9856);
        let reverse = haversine_distance_km(28.2096, 83.9856, 27.7172, 85.3240);

        assert_eq!(forward, reverse);
    }
}

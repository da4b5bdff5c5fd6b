use geo::Point;

/// builds a point from latitude and longitude. points store x = longitude, y = latitude.
pub fn point_from_lat_lng(lat: f64, lng: f64) -> Point<f64> {
    Point::new(lng, lat)
}

pub fn latitude(point: &Point<f64>) -> f64 {
    point.y()
}

pub fn longitude(point: &Point<f64>) -> f64 {
    point.x()
}

/// checks that a latitude/longitude pair is finite and within WGS84 bounds.
pub fn validate_lat_lng(lat: f64, lng: f64) -> Result<(), String> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude '{lat}' must be in range [-90, 90]"));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(format!("longitude '{lng}' must be in range [-180, 180]"));
    }
    Ok(())
}

pub fn validate_point(point: &Point<f64>) -> Result<(), String> {
    validate_lat_lng(latitude(point), longitude(point))
}

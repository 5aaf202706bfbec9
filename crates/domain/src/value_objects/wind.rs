//! Wind direction helpers

/// Sixteen-point compass labels, clockwise from north
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Width of one compass sector in degrees
const SECTOR: f64 = 360.0 / 16.0;

/// Label a bearing with its sixteen-point compass name
///
/// Each sector is centred on its point and includes its upper bound, so
/// 11.25° is still "N" while 11.26° is "NNE". Bearings outside 0..360 are
/// wrapped first.
///
/// # Examples
///
/// ```
/// use domain::value_objects::compass_point;
///
/// assert_eq!(compass_point(0.0), "N");
/// assert_eq!(compass_point(225.0), "SW");
/// assert_eq!(compass_point(355.0), "N");
/// ```
#[must_use]
pub fn compass_point(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return COMPASS_POINTS[0];
    }
    let bearing = degrees.rem_euclid(360.0);
    let sector = ((bearing - SECTOR / 2.0) / SECTOR).ceil() as i64;
    COMPASS_POINTS[sector.rem_euclid(16) as usize]
}

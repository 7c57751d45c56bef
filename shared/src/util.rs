/// Generate a fresh opaque resource id (UUID v4)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Lenient price coercion from stored text
///
/// Missing, empty, unparsable and non-finite values all map to 0.
pub fn parse_price(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

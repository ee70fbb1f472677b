use tilebg_types::{Point, Surd};

/// Shortest decimal that reads back as the same `f64`, always with a
/// fractional part (`-2.0`, `10.392304845413264`).
pub fn format_coordinate(value: &Surd) -> String {
    let value = value.to_f64();
    // Exact zero may come out of the float conversion with a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:?}", value)
}

/// `x,y` with both coordinates formatted by [`format_coordinate`].
pub fn format_point(point: &Point) -> String {
    format!("{},{}", format_coordinate(&point.x), format_coordinate(&point.y))
}

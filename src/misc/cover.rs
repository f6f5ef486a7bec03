use super::FloatingPoint;

/// Convert a concrete cover into the offset of the bar centerline
/// The centerline sits half a bar diameter further from the face than the cover.
///
/// # Example
/// ```
/// use rebar_curves::prelude::*;
/// assert_eq!(cover_to_offset(0.5, 0.25), 0.625);
/// ```
pub fn cover_to_offset<T: FloatingPoint>(cover: T, bar_diameter: T) -> T {
    cover + bar_diameter / T::from_f64(2.).unwrap()
}

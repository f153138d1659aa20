use crate::Point;

/// A geographic coordinate.
///
/// The rendering plane is assumed to be axis-aligned with the geographic
/// axes: `lng` maps to the plane's x axis and `lat` to its y axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Shorthand for `LatLng::new(lat, lng)`.
#[inline]
pub fn latlng(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

/// Maps geographic coordinates into the rendering plane.
///
/// Supplied by the host rendering surface (typically a map view's
/// layer-point projection). Invoked once per coordinate; implementations are
/// expected to be cheap and side-effect free.
pub trait Project {
    fn project(&self, latlng: LatLng) -> Point<f32>;
}

impl<F> Project for F
where
    F: Fn(LatLng) -> Point<f32>,
{
    fn project(&self, latlng: LatLng) -> Point<f32> {
        self(latlng)
    }
}

#[test]
fn latlng_axes() {
    let mercator_ish = |ll: LatLng| crate::point(ll.lng as f32 * 2.0, ll.lat as f32 * 3.0);
    let p = mercator_ish.project(latlng(10.0, 20.0));
    assert_eq!(p, crate::point(40.0, 30.0));
}

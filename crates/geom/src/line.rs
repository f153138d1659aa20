use crate::scalar::Scalar;
use crate::{Box2D, Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

// Cohen-Sutherland region codes.
const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// Computes the squared length of this segment.
    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Computes the closest point on this segment to `p`.
    ///
    /// The result is clamped to the segment, not the infinite line carrying it.
    #[inline]
    pub fn closest_point(&self, p: Point<S>) -> Point<S> {
        let v1 = self.to - self.from;
        let v2 = p - self.from;
        let t = S::min(S::max(v2.dot(v1) / v1.dot(v1), S::ZERO), S::ONE);

        self.from + v1 * t
    }

    /// Computes the distance between this segment and a point.
    #[inline]
    pub fn distance_to_point(&self, p: Point<S>) -> S {
        self.square_distance_to_point(p).sqrt()
    }

    /// Computes the squared distance between this segment and a point.
    ///
    /// Can be useful to save a square root and a division when comparing against
    /// a distance that can be squared.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        (self.closest_point(p) - p).square_length()
    }

    /// Clip this segment against a rectangle, using the Cohen-Sutherland
    /// algorithm.
    ///
    /// Returns `None` if the segment lies entirely outside of the rectangle.
    /// Endpoints that are already inside are returned unmodified, so callers
    /// can compare them against the input to detect where clipping occurred.
    pub fn clipped(&self, rect: &Box2D<S>) -> Option<Self> {
        let mut from = self.from;
        let mut to = self.to;
        let mut code_from = region_code(from, rect);
        let mut code_to = region_code(to, rect);

        loop {
            if code_from | code_to == INSIDE {
                return Some(LineSegment { from, to });
            }
            if code_from & code_to != INSIDE {
                return None;
            }

            // Push the endpoint that is outside onto the edge it violates.
            if code_from != INSIDE {
                from = edge_intersection(from, to, code_from, rect);
                code_from = region_code(from, rect);
            } else {
                to = edge_intersection(from, to, code_to, rect);
                code_to = region_code(to, rect);
            }
        }
    }

    #[inline]
    pub fn to_f32(&self) -> LineSegment<f32> {
        LineSegment {
            from: self.from.to_f32(),
            to: self.to.to_f32(),
        }
    }

    #[inline]
    pub fn to_f64(&self) -> LineSegment<f64> {
        LineSegment {
            from: self.from.to_f64(),
            to: self.to.to_f64(),
        }
    }
}

fn region_code<S: Scalar>(p: Point<S>, rect: &Box2D<S>) -> u8 {
    let mut code = INSIDE;
    if p.x < rect.min.x {
        code |= LEFT;
    } else if p.x > rect.max.x {
        code |= RIGHT;
    }
    if p.y < rect.min.y {
        code |= BOTTOM;
    } else if p.y > rect.max.y {
        code |= TOP;
    }

    code
}

// The code passed in has exactly one of its bits guaranteed to correspond to
// an axis the segment actually crosses, so the divisions below cannot see a
// zero denominator.
fn edge_intersection<S: Scalar>(from: Point<S>, to: Point<S>, code: u8, rect: &Box2D<S>) -> Point<S> {
    let d = to - from;

    if code & TOP != INSIDE {
        Point::new(from.x + d.x * (rect.max.y - from.y) / d.y, rect.max.y)
    } else if code & BOTTOM != INSIDE {
        Point::new(from.x + d.x * (rect.min.y - from.y) / d.y, rect.min.y)
    } else if code & RIGHT != INSIDE {
        Point::new(rect.max.x, from.y + d.y * (rect.max.x - from.x) / d.x)
    } else {
        Point::new(rect.min.x, from.y + d.y * (rect.min.x - from.x) / d.x)
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn closest_point_clamped() {
    let segment: LineSegment<f32> = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };

    assert_eq!(segment.closest_point(point(5.0, 1.0)), point(5.0, 0.0));
    assert_eq!(segment.closest_point(point(-3.0, 2.0)), point(0.0, 0.0));
    assert_eq!(segment.closest_point(point(13.0, -2.0)), point(10.0, 0.0));
    assert_eq!(segment.distance_to_point(point(5.0, 1.0)), 1.0);
}

#[test]
fn clip_inside_is_identity() {
    let rect = Box2D {
        min: point(0.0f32, 0.0),
        max: point(100.0, 100.0),
    };
    let segment = LineSegment {
        from: point(10.0, 10.0),
        to: point(90.0, 20.0),
    };

    assert_eq!(segment.clipped(&rect), Some(segment));
}

#[test]
fn clip_outside_is_none() {
    let rect = Box2D {
        min: point(0.0f32, 0.0),
        max: point(100.0, 100.0),
    };
    let segment = LineSegment {
        from: point(-10.0, -10.0),
        to: point(-10.0, 150.0),
    };

    assert!(segment.clipped(&rect).is_none());

    // Both endpoints outside but on different sides, still no intersection.
    let diagonal_miss = LineSegment {
        from: point(-50.0, 40.0),
        to: point(40.0, 250.0),
    };
    assert!(diagonal_miss.clipped(&rect).is_none());
}

#[test]
fn clip_crossing() {
    let rect = Box2D {
        min: point(0.0f32, 0.0),
        max: point(100.0, 100.0),
    };
    let segment = LineSegment {
        from: point(-50.0, 50.0),
        to: point(150.0, 50.0),
    };

    let clipped = segment.clipped(&rect).unwrap();
    assert_eq!(clipped.from, point(0.0, 50.0));
    assert_eq!(clipped.to, point(100.0, 50.0));
}

#[test]
fn clip_exiting_keeps_inner_endpoint() {
    let rect = Box2D {
        min: point(0.0f32, 0.0),
        max: point(100.0, 100.0),
    };
    let segment = LineSegment {
        from: point(50.0, 50.0),
        to: point(50.0, 180.0),
    };

    let clipped = segment.clipped(&rect).unwrap();
    assert_eq!(clipped.from, segment.from);
    assert_eq!(clipped.to, point(50.0, 100.0));
}

//! # Circle Geometry

use core::f64::consts::PI;

/// Numeric tolerance for area comparisons.
pub const AREA_TOLERANCE: f64 = 1e-10;

/// Bisection steps when solving for a center distance.
const DISTANCE_SOLVER_STEPS: usize = 200;

/// A point in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// x coordinate.
    pub x: f64,

    /// y coordinate.
    pub y: f64,
}

impl Point {
    /// Build a point.
    pub const fn new(
        x: f64,
        y: f64,
    ) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(
        &self,
        other: &Point,
    ) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// This point, shifted by `(dx, dy)`.
    pub fn offset(
        &self,
        dx: f64,
        dy: f64,
    ) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A circle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// The center.
    pub center: Point,

    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// Build a circle.
    pub const fn new(
        center: Point,
        radius: f64,
    ) -> Self {
        Self { center, radius }
    }

    /// The enclosed area.
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Is `point` inside (or on) the circle?
    pub fn contains(
        &self,
        point: &Point,
    ) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// The distance from `point` to the circle's boundary.
    pub fn boundary_distance(
        &self,
        point: &Point,
    ) -> f64 {
        (self.center.distance(point) - self.radius).abs()
    }

    /// The axis-aligned bounding box.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x_min: self.center.x - self.radius,
            x_max: self.center.x + self.radius,
            y_min: self.center.y - self.radius,
            y_max: self.center.y + self.radius,
        }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub x_min: f64,

    /// Right edge.
    pub x_max: f64,

    /// Bottom edge.
    pub y_min: f64,

    /// Top edge.
    pub y_max: f64,
}

impl Bounds {
    /// The smallest box containing every circle; `None` if there are none.
    pub fn enclosing(circles: &[Circle]) -> Option<Bounds> {
        circles
            .iter()
            .map(Circle::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    /// The smallest box containing both boxes.
    pub fn union(
        &self,
        other: &Bounds,
    ) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// This box, grown by `margin` on all four sides.
    pub fn padded(
        &self,
        margin: f64,
    ) -> Bounds {
        Bounds {
            x_min: self.x_min - margin,
            x_max: self.x_max + margin,
            y_min: self.y_min - margin,
            y_max: self.y_max + margin,
        }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Does this box strictly contain `other`?
    pub fn strictly_contains(
        &self,
        other: &Bounds,
    ) -> bool {
        self.x_min < other.x_min
            && self.x_max > other.x_max
            && self.y_min < other.y_min
            && self.y_max > other.y_max
    }
}

/// The area of the lens where two circles, `d` apart, overlap.
pub fn circle_intersection_area(
    r1: f64,
    r2: f64,
    d: f64,
) -> f64 {
    let (big, small) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

    if d >= big + small {
        return 0.0;
    }
    if d <= big - small {
        return PI * small * small;
    }

    let small_angle = ((d * d + small * small - big * big) / (2.0 * d * small))
        .clamp(-1.0, 1.0)
        .acos();
    let big_angle = ((d * d + big * big - small * small) / (2.0 * d * big))
        .clamp(-1.0, 1.0)
        .acos();
    let kite = ((-d + small + big) * (d + small - big) * (d - small + big) * (d + small + big))
        .max(0.0)
        .sqrt();

    small * small * small_angle + big * big * big_angle - 0.5 * kite
}

/// The center distance at which two circles overlap by `area`.
///
/// * a zero `area` places the circles tangent, at `r1 + r2`;
/// * an `area` at (or above) the smaller circle's area nests it, at `|r1 - r2|`.
pub fn distance_for_intersection_area(
    r1: f64,
    r2: f64,
    area: f64,
) -> f64 {
    let (big, small) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

    if area <= AREA_TOLERANCE {
        return big + small;
    }
    if area >= PI * small * small - AREA_TOLERANCE {
        return big - small;
    }

    // The overlap shrinks monotonically as the circles separate.
    let (mut lo, mut hi) = (big - small, big + small);
    for _ in 0..DISTANCE_SOLVER_STEPS {
        let mid = 0.5 * (lo + hi);
        if circle_intersection_area(big, small, mid) > area {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < 1e-14 {
            break;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_intersection_limits() {
        assert_eq!(circle_intersection_area(1.0, 1.0, 2.0), 0.0);
        assert_eq!(circle_intersection_area(1.0, 1.0, 5.0), 0.0);
        assert!((circle_intersection_area(2.0, 1.0, 0.5) - PI).abs() < 1e-12);
        assert!((circle_intersection_area(1.0, 1.0, 0.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_half_overlap() {
        // Two unit circles one radius apart: 2π/3 - √3/2.
        let expected = 2.0 * PI / 3.0 - 3f64.sqrt() / 2.0;
        assert!((circle_intersection_area(1.0, 1.0, 1.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_distance_limits() {
        assert!((distance_for_intersection_area(0.5, 0.3, 0.0) - 0.8).abs() < 1e-12);
        assert!((distance_for_intersection_area(0.5, 0.3, PI * 0.09) - 0.2).abs() < 1e-12);
        assert_eq!(distance_for_intersection_area(0.4, 0.4, PI * 0.16), 0.0);
    }

    #[test]
    fn test_bounds() {
        let circles = [
            Circle::new(Point::new(0.0, 0.0), 1.0),
            Circle::new(Point::new(1.5, 0.5), 0.5),
        ];
        let bounds = Bounds::enclosing(&circles).unwrap();
        assert_eq!(
            bounds,
            Bounds {
                x_min: -1.0,
                x_max: 2.0,
                y_min: -1.0,
                y_max: 1.0,
            }
        );
        let padded = bounds.padded(0.2);
        assert!(padded.strictly_contains(&bounds));
        assert!((padded.width() - 3.4).abs() < 1e-12);
        assert!((padded.height() - 2.4).abs() < 1e-12);

        assert_eq!(Bounds::enclosing(&[]), None);
    }

    proptest! {
        #[test]
        fn prop_distance_reproduces_area(
            r1 in 0.05f64..1.0,
            r2 in 0.05f64..1.0,
            fraction in 0.01f64..0.99,
        ) {
            let small = r1.min(r2);
            let area = fraction * PI * small * small;
            let d = distance_for_intersection_area(r1, r2, area);
            prop_assert!(d >= (r1 - r2).abs() - 1e-12);
            prop_assert!(d <= r1 + r2 + 1e-12);
            let actual = circle_intersection_area(r1, r2, d);
            prop_assert!((actual - area).abs() < 1e-9, "{actual} vs {area}");
        }
    }
}

use imageproc::point::Point;
use num_traits::AsPrimitive;

/// Length of the closed polyline through `points`, including the segment
/// from the last point back to the first.
///
/// Polygons with fewer than two points have a perimeter of `0.0`.
pub fn perimeter<T>(points: &[Point<T>]) -> f64
where
    T: Copy + AsPrimitive<f64>,
{
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p1, p2)| {
            let dx: f64 = p2.x.as_() - p1.x.as_();
            let dy: f64 = p2.y.as_() - p1.y.as_();
            dx.hypot(dy)
        })
        .sum()
}

/// Shoelace area of the closed polygon through `points`.
///
/// In y-down raster coordinates, outer outlines come out negative and
/// hole outlines positive.
pub fn signed_area<T>(points: &[Point<T>]) -> f64
where
    T: Copy + AsPrimitive<f64>,
{
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p1, p2)| p1.x.as_() * p2.y.as_() - p2.x.as_() * p1.y.as_())
        .sum();
    twice / 2.0
}

/// Even-odd test of whether `(x, y)` lies inside the closed polygon.
///
/// Points exactly on the boundary may go either way; callers that need a
/// definite answer test at pixel centres, which never lie on the integer
/// grid lines outlines run along.
pub fn contains_point<T>(points: &[Point<T>], x: f64, y: f64) -> bool
where
    T: Copy + AsPrimitive<f64>,
{
    let mut inside = false;
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        let (ax, ay): (f64, f64) = (a.x.as_(), a.y.as_());
        let (bx, by): (f64, f64) = (b.x.as_(), b.y.as_());
        if (ay > y) != (by > y) {
            let cross_x = ax + (y - ay) * (bx - ax) / (by - ay);
            if x < cross_x {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: i32, y: i32, size: i32) -> Vec<Point<i32>> {
        // Same winding as an outer outline.
        vec![
            Point::new(x + size, y),
            Point::new(x, y),
            Point::new(x, y + size),
            Point::new(x + size, y + size),
        ]
    }

    #[test]
    fn perimeter_of_square_and_degenerates() {
        assert_eq!(perimeter(&square(0, 0, 10)), 40.0);
        assert_eq!(perimeter::<i32>(&[]), 0.0);
        assert_eq!(perimeter(&[Point::new(3, 3)]), 0.0);
        // A two-point "polygon" walks there and back.
        assert_eq!(perimeter(&[Point::new(0, 0), Point::new(3, 4)]), 10.0);
    }

    #[test]
    fn signed_area_reflects_winding() {
        let outer = square(0, 0, 3);
        assert_eq!(signed_area(&outer), -9.0);

        let mut reversed = outer.clone();
        reversed.reverse();
        assert_eq!(signed_area(&reversed), 9.0);

        assert_eq!(signed_area(&outer[..2]), 0.0);
    }

    #[test]
    fn contains_point_at_pixel_centres() {
        let poly = square(1, 1, 2);
        assert!(contains_point(&poly, 1.5, 1.5));
        assert!(contains_point(&poly, 2.5, 2.5));
        assert!(!contains_point(&poly, 0.5, 1.5));
        assert!(!contains_point(&poly, 3.5, 2.5));
        assert!(!contains_point(&poly, 1.5, 3.5));
        assert!(!contains_point::<i32>(&[], 0.0, 0.0));
    }

    #[test]
    fn contains_point_handles_concave_polygons() {
        // An L shape covering pixels (0,0), (0,1) and (1,1).
        let l_shape = vec![
            Point::new(1, 0),
            Point::new(0, 0),
            Point::new(0, 2),
            Point::new(2, 2),
            Point::new(2, 1),
            Point::new(1, 1),
        ];
        assert!(contains_point(&l_shape, 0.5, 0.5));
        assert!(contains_point(&l_shape, 0.5, 1.5));
        assert!(contains_point(&l_shape, 1.5, 1.5));
        assert!(!contains_point(&l_shape, 1.5, 0.5));
    }
}

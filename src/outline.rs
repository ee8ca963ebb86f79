use imageproc::{contours::BorderType, point::Point};

use crate::{geometry, rect, source::Region};

/// A closed polygon following pixel edges.
///
/// `points` holds one vertex per change of direction, in the caller's
/// coordinate space. The polygon closes implicitly from the last point back
/// to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub points: Vec<Point<i32>>,
    /// Top-left corner of the pixel the trace started from.
    pub origin: Point<i32>,
    /// Set when the trace started on a bottom edge. Such a loop always
    /// bounds a hole, but a hole can also be entered on the right edge of a
    /// pixel, in which case the flag is clear. Use [`Outline::is_hole`] for
    /// the geometric kind.
    pub clockwise: bool,
}

impl Outline {
    pub fn border_type(&self) -> BorderType {
        if self.is_hole() {
            BorderType::Hole
        } else {
            BorderType::Outer
        }
    }

    /// Whether the outline encloses background. Hole boundaries are the
    /// only loops with positive area in y-down coordinates.
    pub fn is_hole(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn perimeter(&self) -> f64 {
        geometry::perimeter(&self.points)
    }

    pub fn signed_area(&self) -> f64 {
        geometry::signed_area(&self.points)
    }

    /// The smallest region covering every pixel the outline encloses.
    pub fn bounds(&self) -> Option<Region> {
        let (min, max) = rect::extent(&self.points)?;
        Some(Region::new(
            min.x,
            min.y,
            max.x.abs_diff(min.x),
            max.y.abs_diff(min.y),
        ))
    }

    /// Whether the centre of pixel `(x, y)` lies inside the polygon.
    pub fn contains_pixel(&self, x: i32, y: i32) -> bool {
        geometry::contains_point(&self.points, f64::from(x) + 0.5, f64::from(y) + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: i32, y: i32, clockwise: bool) -> Outline {
        Outline {
            points: vec![
                Point::new(x + 1, y),
                Point::new(x, y),
                Point::new(x, y + 1),
                Point::new(x + 1, y + 1),
            ],
            origin: Point::new(x, y),
            clockwise,
        }
    }

    fn reversed(mut outline: Outline) -> Outline {
        outline.points.reverse();
        outline
    }

    #[test]
    fn border_type_follows_orientation() {
        assert_eq!(cell(0, 0, false).border_type(), BorderType::Outer);
        assert_eq!(reversed(cell(0, 0, true)).border_type(), BorderType::Hole);
        assert!(reversed(cell(0, 0, true)).is_hole());
        // A hole entered from a right edge carries no clockwise flag.
        assert!(reversed(cell(0, 0, false)).is_hole());
    }

    #[test]
    fn bounds_keep_negative_coordinates() {
        let outline = Outline {
            points: vec![
                Point::new(-1, -6),
                Point::new(-3, -6),
                Point::new(-3, -2),
                Point::new(-1, -2),
            ],
            origin: Point::new(-3, -6),
            clockwise: false,
        };
        assert_eq!(outline.bounds(), Some(Region::new(-3, -6, 2, 4)));
    }

    #[test]
    fn metrics_of_a_single_cell() {
        let outline = cell(-4, 2, false);
        assert_eq!(outline.len(), 4);
        assert_eq!(outline.perimeter(), 4.0);
        assert_eq!(outline.signed_area(), -1.0);
        assert_eq!(outline.bounds(), Some(Region::new(-4, 2, 1, 1)));
        assert!(outline.contains_pixel(-4, 2));
        assert!(!outline.contains_pixel(-3, 2));
    }

    #[test]
    fn empty_outline_has_no_bounds() {
        let outline = Outline {
            points: Vec::new(),
            origin: Point::new(0, 0),
            clockwise: false,
        };
        assert!(outline.is_empty());
        assert_eq!(outline.bounds(), None);
    }
}

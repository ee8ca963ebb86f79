use image::math::Rect;
use imageproc::point::Point;
use num::{Num, ToPrimitive};

/// Calculates the axis-aligned bounding box of a set of outline vertices.
///
/// Outline vertices sit on pixel corners, so the width and height of the
/// result are the number of pixel columns and rows the outline spans.
///
/// The function is generic over numeric types that implement `PartialOrd`,
/// which covers both the integer vertices produced by the tracer and
/// floating-point points from other sources.
///
/// # Arguments
///
/// * `points` - The vertices to enclose.
///
/// # Returns
///
/// `None` for an empty slice. Otherwise the smallest `image::math::Rect`
/// containing every vertex. `Rect` is unsigned: coordinates left of or above
/// the origin are clamped to `0`.
///
/// # Examples
///
/// ```
/// use image::math::Rect;
/// use imageproc::point::Point;
/// use image_outline_utils::rect::bounding_box;
///
/// let outline = [
///     Point::new(12, 4),
///     Point::new(2, 4),
///     Point::new(2, 9),
///     Point::new(12, 9),
/// ];
///
/// let bounds = bounding_box(&outline).unwrap();
///
/// assert_eq!(bounds, Rect { x: 2, y: 4, width: 10, height: 5 });
/// ```
pub fn bounding_box<T>(points: &[Point<T>]) -> Option<Rect>
where
    T: Copy + PartialOrd + Num + ToPrimitive,
{
    let (min, max) = extent(points)?;

    let x = min.x.to_u32().unwrap_or(0);
    let y = min.y.to_u32().unwrap_or(0);

    Some(Rect {
        x,
        y,
        width: max.x.to_u32().unwrap_or(0).saturating_sub(x),
        height: max.y.to_u32().unwrap_or(0).saturating_sub(y),
    })
}

/// Minimum and maximum corner of a set of points, without clamping.
///
/// Returns `None` for an empty slice.
pub fn extent<T>(points: &[Point<T>]) -> Option<(Point<T>, Point<T>)>
where
    T: Copy + PartialOrd,
{
    let (first, rest) = points.split_first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);

    // `PartialOrd` only, so no `min`/`max`.
    for p in rest {
        if p.x < min_x {
            min_x = p.x;
        }
        if p.x > max_x {
            max_x = p.x;
        }
        if p.y < min_y {
            min_y = p.y;
        }
        if p.y > max_y {
            max_y = p.y;
        }
    }

    Some((Point::new(min_x, min_y), Point::new(max_x, max_y)))
}

/// Union of the bounding boxes of several point sets.
pub fn union_bounding_box<'a, T, I>(point_sets: I) -> Option<Rect>
where
    T: Copy + PartialOrd + Num + ToPrimitive + 'a,
    I: IntoIterator<Item = &'a [Point<T>]>,
{
    point_sets
        .into_iter()
        .filter_map(bounding_box)
        .reduce(|a, b| {
            let x = a.x.min(b.x);
            let y = a.y.min(b.y);
            let right = (a.x + a.width).max(b.x + b.width);
            let bottom = (a.y + a.height).max(b.y + b.height);
            Rect {
                x,
                y,
                width: right - x,
                height: bottom - y,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_of_outline() {
        let vertices = [
            Point { x: 5, y: 1 },
            Point { x: 1, y: 1 },
            Point { x: 1, y: 4 },
            Point { x: 3, y: 4 },
            Point { x: 3, y: 3 },
            Point { x: 5, y: 3 },
        ];
        let expected = Rect {
            x: 1,
            y: 1,
            width: 4,
            height: 3,
        };
        assert_eq!(bounding_box(&vertices), Some(expected));

        // Vertex order does not matter.
        let mut shuffled = vertices;
        shuffled.reverse();
        assert_eq!(bounding_box(&shuffled), Some(expected));
    }

    #[test]
    fn test_empty_points_have_no_box() {
        assert_eq!(bounding_box::<i32>(&[]), None);
    }

    #[test]
    fn test_negative_coordinates_clamp() {
        let vertices = [
            Point { x: -10.0, y: -20.0 },
            Point { x: 50.0, y: 30.0 },
        ];
        // Negative minima become 0, the maxima are kept.
        let expected = Rect {
            x: 0,
            y: 0,
            width: 50,
            height: 30,
        };
        assert_eq!(bounding_box(&vertices), Some(expected));
    }

    #[test]
    fn test_extent_is_unclamped() {
        let vertices = [Point::new(-2, 5), Point::new(4, -1), Point::new(0, 0)];
        assert_eq!(
            extent(&vertices),
            Some((Point::new(-2, -1), Point::new(4, 5)))
        );
        assert_eq!(extent::<i32>(&[]), None);
    }

    #[test]
    fn test_union_of_disjoint_outlines() {
        let a = [Point::new(1, 1), Point::new(2, 2)];
        let b = [Point::new(5, 0), Point::new(7, 3)];
        let sets: [&[Point<i32>]; 3] = [&a, &[], &b];
        assert_eq!(
            union_bounding_box(sets),
            Some(Rect {
                x: 1,
                y: 0,
                width: 6,
                height: 3
            })
        );
        assert_eq!(union_bounding_box(Vec::<&[Point<i32>]>::new()), None);
    }
}

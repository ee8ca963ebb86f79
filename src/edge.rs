use imageproc::point::Point;

/// One of the four sides of a pixel cell.
///
/// The discriminants double as bit positions in an edge mark byte, and
/// [`Edge::next`] walks them in ascending order modulo four, which gives the
/// cyclic order `Top -> Left -> Bottom -> Right -> Top`.
///
/// Boundaries are walked with the foreground on the left (in y-down raster
/// coordinates): top edges right-to-left, left edges downwards, bottom edges
/// left-to-right and right edges upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Right = 0,
    Top = 1,
    Left = 2,
    Bottom = 3,
}

impl Edge {
    /// All edges in the order a start edge is searched for.
    pub const SEARCH_ORDER: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// The following edge in cyclic order.
    pub fn next(self) -> Edge {
        match self {
            Edge::Right => Edge::Top,
            Edge::Top => Edge::Left,
            Edge::Left => Edge::Bottom,
            Edge::Bottom => Edge::Right,
        }
    }

    /// Bit used for this edge in a per-pixel mark byte.
    #[inline]
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Offset `(dx, dy)` of the pixel on the other side of this edge.
    #[inline]
    pub fn neighbor_offset(self) -> (i32, i32) {
        match self {
            Edge::Right => (1, 0),
            Edge::Top => (0, -1),
            Edge::Left => (-1, 0),
            Edge::Bottom => (0, 1),
        }
    }

    /// Offset of the cell corner at which a walk enters this edge, relative
    /// to the top-left corner of the cell.
    #[inline]
    pub fn corner_offset(self) -> (i32, i32) {
        match self {
            Edge::Top => (1, 0),
            Edge::Right => (1, 1),
            Edge::Bottom => (0, 1),
            Edge::Left => (0, 0),
        }
    }
}

/// Maps the local pixel `(x, y)` and one of its edges to a polygon vertex in
/// the caller's coordinate space.
#[inline]
pub fn corner(x: i32, y: i32, edge: Edge, x_offset: i32, y_offset: i32) -> Point<i32> {
    let (dx, dy) = edge.corner_offset();
    Point::new(x + dx + x_offset, y + dy + y_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_edges() {
        let mut edge = Edge::Top;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(edge);
            edge = edge.next();
        }
        assert_eq!(edge, Edge::Top, "four steps must return to the start");
        assert_eq!(seen, Edge::SEARCH_ORDER.to_vec());
    }

    #[test]
    fn bits_are_distinct() {
        let combined = Edge::SEARCH_ORDER.iter().fold(0u8, |acc, e| {
            assert_eq!(acc & e.bit(), 0, "bit for {e:?} overlaps another edge");
            acc | e.bit()
        });
        assert_eq!(combined, 0b1111);
    }

    #[test]
    fn corners_trace_the_unit_cell() {
        let cell: Vec<Point<i32>> = Edge::SEARCH_ORDER
            .iter()
            .map(|&e| corner(4, 7, e, 0, 0))
            .collect();
        assert_eq!(
            cell,
            vec![
                Point::new(5, 7),
                Point::new(4, 7),
                Point::new(4, 8),
                Point::new(5, 8)
            ]
        );
    }

    #[test]
    fn corner_applies_offset() {
        assert_eq!(corner(0, 0, Edge::Right, -3, 10), Point::new(-2, 11));
    }

    #[test]
    fn each_rotation_continues_from_the_previous_edge_end() {
        // Walking a single cell: the entry corner of the next edge is the
        // exit corner of the current one, which is the entry corner of the
        // current edge moved along its direction of travel.
        for edge in Edge::SEARCH_ORDER {
            let (ex, ey) = edge.corner_offset();
            let (nx, ny) = edge.next().corner_offset();
            let step = (nx - ex, ny - ey);
            let expected = match edge {
                Edge::Top => (-1, 0),
                Edge::Left => (0, 1),
                Edge::Bottom => (1, 0),
                Edge::Right => (0, -1),
            };
            assert_eq!(step, expected, "unexpected travel along {edge:?}");
        }
    }
}

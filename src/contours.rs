use imageproc::contours::{BorderType, Contour};

use crate::outline::Outline;

/// Converts traced outlines into [imageproc] contours, rebuilding the
/// nesting hierarchy.
///
/// The order of the input is preserved. For every outline the `parent` is
/// the index of the smallest outline of the opposite [`BorderType`] that
/// encloses the outline's start pixel: a hole points to the outer boundary
/// around it, and an island inside a hole points to that hole. Outlines
/// with no such enclosing outline get `None`.
///
/// Holes are told apart from outer boundaries by orientation, not by the
/// `clockwise` start flag, so a hole entered from a right edge still gets
/// its enclosing outer boundary as parent.
///
/// The cost is O(N² · V) for N outlines of V vertices each, which is fine for
/// selection-sized inputs.
pub fn into_contours(outlines: Vec<Outline>) -> Vec<Contour<i32>> {
    let areas: Vec<f64> = outlines.iter().map(|o| o.signed_area().abs()).collect();

    let parents: Vec<Option<usize>> = outlines
        .iter()
        .enumerate()
        .map(|(i, child)| {
            outlines
                .iter()
                .enumerate()
                .filter(|&(j, candidate)| {
                    j != i
                        && candidate.is_hole() != child.is_hole()
                        && candidate.contains_pixel(child.origin.x, child.origin.y)
                })
                .min_by(|a, b| areas[a.0].total_cmp(&areas[b.0]))
                .map(|(j, _)| j)
        })
        .collect();

    outlines
        .into_iter()
        .zip(parents)
        .map(|(outline, parent)| Contour {
            border_type: outline.border_type(),
            points: outline.points,
            parent,
        })
        .collect()
}

/// Pairs every outline with its perimeter and sorts them longest first.
///
/// Takes ownership so the outlines are moved, not cloned. The sort is
/// unstable: outlines of equal perimeter come back in no particular order.
pub fn sort_by_perimeter_owned(outlines: Vec<Outline>) -> Vec<(Outline, f64)> {
    let mut with_perimeters: Vec<(Outline, f64)> = outlines
        .into_iter()
        .map(|outline| {
            let perimeter = outline.perimeter();
            (outline, perimeter)
        })
        .collect();

    with_perimeters.sort_unstable_by(|a, b| b.1.total_cmp(&a.1));

    with_perimeters
}

/// Removes outlines of the given kind in place, e.g. to drop the holes of a
/// full trace after the fact.
pub fn remove_border_type_in_place(outlines: &mut Vec<Outline>, border_type: BorderType) {
    outlines.retain(|outline| outline.border_type() != border_type);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::OutlineGenerator;
    use crate::source::{PixelFormat, Region};
    use imageproc::point::Point;

    fn trace(rows: &[&str]) -> Vec<Outline> {
        let width = rows[0].len() as u32;
        let height = rows.len() as u32;
        let data: Vec<u8> = rows
            .iter()
            .flat_map(|row| row.bytes().map(|b| if b == b'#' { 255 } else { 0 }))
            .collect();
        OutlineGenerator::new(0).outline_buffer(
            &data,
            PixelFormat::alpha8(),
            Region::from_size(width, height),
        )
    }

    #[test]
    fn test_nested_hierarchy() {
        // Outer square with a hole that holds an island with its own hole.
        let outlines = trace(&[
            "#########",
            "#.......#",
            "#.#####.#",
            "#.#...#.#",
            "#.#.#.#.#",
            "#.#...#.#",
            "#.#####.#",
            "#.......#",
            "#########",
        ]);
        let kinds: Vec<bool> = outlines.iter().map(|o| o.clockwise).collect();
        // Discovery order: outer, big hole, island, island hole, centre pixel.
        assert_eq!(kinds, vec![false, true, false, true, false]);

        let contours = into_contours(outlines);
        let parents: Vec<Option<usize>> = contours.iter().map(|c| c.parent).collect();
        assert_eq!(parents, vec![None, Some(0), Some(1), Some(2), Some(3)]);
        assert_eq!(contours[0].border_type, BorderType::Outer);
        assert_eq!(contours[1].border_type, BorderType::Hole);
        assert_eq!(contours[0].points.len(), 4);
    }

    #[test]
    fn test_hole_without_clockwise_flag_gets_parent() {
        let outlines = trace(&[".#.", "#.#", ".#."]);
        assert!(outlines.iter().all(|o| !o.clockwise));

        let contours = into_contours(outlines);
        assert_eq!(contours[0].border_type, BorderType::Outer);
        assert_eq!(contours[1].border_type, BorderType::Hole);
        assert_eq!(contours[0].parent, None);
        assert_eq!(contours[1].parent, Some(0));
    }

    #[test]
    fn test_disjoint_outlines_have_no_parent() {
        let contours = into_contours(trace(&["#.#", "...", "#.#"]));
        assert_eq!(contours.len(), 4);
        assert!(contours.iter().all(|c| c.parent.is_none()));
        assert!(contours.iter().all(|c| c.border_type == BorderType::Outer));
    }

    #[test]
    fn test_sort_by_perimeter() {
        assert!(sort_by_perimeter_owned(Vec::new()).is_empty());

        let outlines = trace(&["#....", ".....", "..###", "..###"]);
        let sorted = sort_by_perimeter_owned(outlines);
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].1, 10.0);
        assert_eq!(sorted[0].0.origin, Point::new(2, 2));
        assert_eq!(sorted[1].1, 4.0);
    }

    #[test]
    fn test_remove_holes_in_place() {
        let mut outlines = trace(&["###", "#.#", "###"]);
        assert_eq!(outlines.len(), 2);
        remove_border_type_in_place(&mut outlines, BorderType::Hole);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].border_type(), BorderType::Outer);
    }
}

//! Boundary tracing over a classified pixel region.
//!
//! The tracer scans the region in raster order. Each foreground pixel is
//! searched once for a boundary edge that no outline has claimed yet; if
//! one is found a new loop starts there and is followed edge by edge with
//! [`next_state`] until it returns to where it started. Visited edges are
//! recorded in an [`EdgeMarks`] store, so each boundary edge ends up in
//! exactly one loop. A loop that touches a pixel already used as a start is
//! picked up from a later pixel it also touches.

use imageproc::point::Point;

use crate::edge::{Edge, corner};
use crate::error::TraceError;
use crate::marks::EdgeMarks;
use crate::outline::Outline;
use crate::source::PixelSource;

/// Position of the walk: a pixel in local coordinates and the edge of it
/// currently being followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceState {
    pub x: i32,
    pub y: i32,
    pub edge: Edge,
}

impl TraceState {
    pub fn new(x: i32, y: i32, edge: Edge) -> Self {
        Self { x, y, edge }
    }
}

/// Whether `edge` of the in-bounds pixel `(x, y)` separates it from
/// background or from the outside of the region.
pub fn is_outline_edge<S>(source: &S, edge: Edge, x: i32, y: i32) -> bool
where
    S: PixelSource + ?Sized,
{
    if source.is_background(x, y) {
        return false;
    }
    let (dx, dy) = edge.neighbor_offset();
    let (nx, ny) = (x + dx, y + dy);
    !source.in_bounds(nx, ny) || source.is_background(nx, ny)
}

/// The two moves tried from a given edge, as `(dx, dy, edge)`: first
/// continue straight onto the neighbouring pixel's edge of the same kind,
/// then turn the concave corner onto the diagonal pixel.
#[inline]
fn candidates(edge: Edge) -> [(i32, i32, Edge); 2] {
    match edge {
        Edge::Right => [(0, -1, Edge::Right), (1, -1, Edge::Bottom)],
        Edge::Top => [(-1, 0, Edge::Top), (-1, -1, Edge::Right)],
        Edge::Left => [(0, 1, Edge::Left), (-1, 1, Edge::Top)],
        Edge::Bottom => [(1, 0, Edge::Bottom), (1, 1, Edge::Left)],
    }
}

/// Advances the walk by one boundary edge.
///
/// If neither candidate move lands on a boundary edge, the walk stays on
/// the same pixel and turns the convex corner onto the next edge.
pub fn next_state<S>(source: &S, state: TraceState) -> TraceState
where
    S: PixelSource + ?Sized,
{
    for (dx, dy, edge) in candidates(state.edge) {
        let (x, y) = (state.x + dx, state.y + dy);
        if source.in_bounds(x, y) && is_outline_edge(source, edge, x, y) {
            return TraceState::new(x, y, edge);
        }
    }
    TraceState {
        edge: state.edge.next(),
        ..state
    }
}

/// First unmarked boundary edge of `(x, y)`, searching from the top edge in
/// cyclic order.
pub fn find_start_edge<S, M>(source: &S, marks: &M, x: i32, y: i32) -> Option<Edge>
where
    S: PixelSource + ?Sized,
    M: EdgeMarks + ?Sized,
{
    Edge::SEARCH_ORDER
        .into_iter()
        .find(|&edge| !marks.has_mark(x, y, edge) && is_outline_edge(source, edge, x, y))
}

/// Follows the loop through `start` and returns its vertices.
///
/// A vertex is emitted for the start state and for every change of
/// direction. When the closing run continues in the start direction, the
/// start vertex sits inside a straight run and is dropped.
fn trace_loop<S, M>(
    source: &S,
    marks: &mut M,
    start: TraceState,
    x_offset: i32,
    y_offset: i32,
) -> Result<Vec<Point<i32>>, TraceError>
where
    S: PixelSource + ?Sized,
    M: EdgeMarks + ?Sized,
{
    let mut points = vec![corner(start.x, start.y, start.edge, x_offset, y_offset)];
    let mut last_edge = start.edge;
    let mut state = start;

    loop {
        marks.set_mark(state.x, state.y, state.edge)?;
        state = next_state(source, state);
        if state == start {
            break;
        }
        if state.edge != last_edge {
            points.push(corner(state.x, state.y, state.edge, x_offset, y_offset));
            last_edge = state.edge;
        }
    }

    if last_edge == start.edge && points.len() > 1 {
        points.remove(0);
    }
    Ok(points)
}

/// Traces every outline of the foreground in `source`.
///
/// Vertices are translated by `(x_offset, y_offset)`. Outlines come back in
/// the raster order of their start pixels, at most one per pixel. With
/// `simple` set, loops that started on a bottom edge are left out.
///
/// `marks` must be empty and cover the region of `source`. The first error
/// from the mark store aborts the trace and discards everything found so far.
pub fn trace_outlines<S, M>(
    source: &S,
    marks: &mut M,
    x_offset: i32,
    y_offset: i32,
    simple: bool,
) -> Result<Vec<Outline>, TraceError>
where
    S: PixelSource + ?Sized,
    M: EdgeMarks + ?Sized,
{
    let width = i32::try_from(source.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(source.height()).unwrap_or(i32::MAX);

    let mut outlines = Vec::new();
    let mut nodes = 0usize;

    for y in 0..height {
        for x in 0..width {
            if source.is_background(x, y) {
                continue;
            }

            if let Some(edge) = find_start_edge(source, marks, x, y) {
                let start = TraceState::new(x, y, edge);
                let points = trace_loop(source, marks, start, x_offset, y_offset)?;
                let clockwise = edge == Edge::Bottom;
                nodes += points.len();

                log::trace!(
                    "outline at ({x}, {y}) from {edge:?} edge: {} vertices, clockwise={clockwise}",
                    points.len()
                );

                if !simple || !clockwise {
                    outlines.push(Outline {
                        points,
                        origin: Point::new(x + x_offset, y + y_offset),
                        clockwise,
                    });
                }
            }
        }
    }

    log::debug!(
        "traced {} outlines ({nodes} vertices) in {width}x{height} region",
        outlines.len()
    );
    Ok(outlines)
}

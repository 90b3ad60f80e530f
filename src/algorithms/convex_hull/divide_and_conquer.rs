use log::{debug, trace};
use std::cmp::Ordering;
use std::ops::Range;

use crate::data::{Hull, Point};
use crate::{Error, PolygonScalar};

mod arena;
mod tangent;

use arena::{HullArena, NodeId, Side, SubHull};
use tangent::{find_tangent, Tangent};

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Divide_and_conquer

// Properties:
//    No panics.
//    All Ok results are valid, clockwise, strictly convex boundaries.
//    No points are outside the resulting boundary.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// Divide and conquer: the points are sorted by x (then y), split at the
/// middle index, both halves are solved recursively and the two sub-hulls are
/// joined along their upper and lower tangents.
///
/// # Errors
/// * [`Error::EmptyInput`] if `pts` is empty.
/// * [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
/// * [`Error::CycleViolation`] if a merge left a broken cycle behind.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
/// * The boundary is clockwise and starts at the smallest point by x, then y.
/// * Duplicate points are ignored, so any permutation of the input gives the
///   same boundary.
///
/// # Examples
///
/// ```rust
/// # pub fn main() {
/// # use dchull::algorithms::convex_hull;
/// # use dchull::data::Point;
/// # use dchull::Error;
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::EmptyInput))
/// # }
/// ```
///
/// ```rust
/// # pub fn main() {
/// # use dchull::algorithms::convex_hull;
/// # use dchull::data::{Degeneracy, Point};
/// let dups = vec![Point::new([0,0])].repeat(3);
/// let hull = convex_hull(dups).unwrap();
/// assert!(hull.is_empty());
/// assert_eq!(hull.degeneracy(), Some(Degeneracy::Coincident));
/// # }
/// ```
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<Hull<T>, Error>
where
  T: PolygonScalar,
{
  if pts.is_empty() {
    return Err(Error::EmptyInput);
  }
  if !pts.iter().all(Point::is_finite) {
    return Err(Error::NonFiniteCoordinate);
  }
  let input_len = pts.len();
  let pts = sort_points(pts);
  let mut arena = HullArena::new(&pts);
  // A right-hand hull hands back its leftmost vertex, where the boundary starts.
  let hull = build(&mut arena, 0..pts.len(), Side::Right)?;
  debug_assert_eq!(hull.pivot, NodeId(0));
  let edges = arena.boundary(hull.pivot)?;
  debug!(
    "convex hull: {} points, {} distinct, {} vertices",
    input_len,
    pts.len(),
    hull.len
  );
  let hull = Hull::new_unchecked(arena.point(hull.pivot).clone(), edges);
  if let Some(degeneracy) = hull.degeneracy() {
    debug!("degenerate input: {:?}", degeneracy);
  }
  Ok(hull)
}

// Sort by x, then y. The sort is stable, so ties fall back to input order.
fn sort_points<T>(mut pts: Vec<Point<T>>) -> Vec<Point<T>>
where
  T: PolygonScalar,
{
  pts.sort_by(|a, b| a.cmp_xy(b));
  pts.dedup_by(|a, b| a.cmp_xy(b) == Ordering::Equal);
  pts
}

fn build<T>(arena: &mut HullArena<'_, T>, range: Range<usize>, side: Side) -> Result<SubHull, Error>
where
  T: PolygonScalar,
{
  if range.len() < 4 {
    return Ok(arena.base_hull(range, side));
  }
  let middle = range.start + range.len() / 2;
  let left = build(arena, range.start..middle, Side::Left)?;
  let right = build(arena, middle..range.end, Side::Right)?;
  merge(arena, left, right, side)
}

// Splice two sub-hulls together along their tangents. Vertices between the
// tangent endpoints on the facing sides drop out of the cycle.
fn merge<T>(
  arena: &mut HullArena<'_, T>,
  left: SubHull,
  right: SubHull,
  side: Side,
) -> Result<SubHull, Error>
where
  T: PolygonScalar,
{
  let upper = find_tangent(arena, &left, &right, Tangent::Upper);
  let lower = find_tangent(arena, &left, &right, Tangent::Lower);
  trace!("merge {:?} + {:?}: upper {:?}, lower {:?}", left, right, upper, lower);
  arena.link(upper.left, upper.right);
  arena.link(lower.right, lower.left);
  arena.settle(upper.left, side)
}

use log::error;
use std::cmp::Ordering;

use crate::data::Point;
use crate::{Error, Orientation, PolygonScalar};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All Ok results are clockwise, strictly convex vertex sequences.
//    No points are outside the resulting boundary.
/// Hull vertices of a set of points.
///
/// [Gift Wrapping][wiki] algorithm. Much slower than
/// [`divide_and_conquer`](super::divide_and_conquer) but simple enough to
/// trust, which makes it a good reference to test against.
///
/// Vertices are returned in clockwise order starting at the smallest point by
/// x, then y. Points in the interior of a hull edge are not vertices. A set
/// of co-linear points yields its two extremes.
///
/// # Errors
/// * [`Error::EmptyInput`] if `pts` is empty.
/// * [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
///
/// # Time complexity
/// $O(n h)$ where h is the number of hull vertices.
///
/// # Examples
///
/// ```rust
/// # pub fn main() {
/// # use dchull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use dchull::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([1, 0]),
///   Point::new([1, 1]),
///   Point::new([0, 1]),
/// ];
/// assert_eq!(
///   convex_hull(pts).unwrap(),
///   vec![Point::new([0, 0]), Point::new([0, 1]), Point::new([1, 1]), Point::new([1, 0])]
/// );
/// # }
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Result<Vec<Point<T>>, Error>
where
  T: PolygonScalar,
{
  if pts.is_empty() {
    return Err(Error::EmptyInput);
  }
  if !pts.iter().all(Point::is_finite) {
    return Err(Error::NonFiniteCoordinate);
  }
  pts.sort_by(|a, b| a.cmp_xy(b));
  pts.dedup_by(|a, b| a.cmp_xy(b) == Ordering::Equal);
  let n = pts.len();
  if n == 1 {
    return Ok(pts);
  }

  // pts[0] is the leftmost point and always on the hull.
  let mut hull: Vec<Point<T>> = Vec::new();
  let mut p = 0;
  loop {
    hull.push(pts[p].clone());
    let mut q = (p + 1) % n;
    for i in 0..n {
      let orientation = Point::orient(&pts[p], &pts[q], &pts[i]);
      // Co-linear candidates only win if they are further away, so edges skip
      // their interior points.
      if orientation == Orientation::CounterClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }
    p = q;
    if p == 0 {
      break;
    }
    if hull.len() == n {
      error!("gift wrapping did not return to its starting point");
      return Err(Error::CycleViolation);
    }
  }
  Ok(hull)
}

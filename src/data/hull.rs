use claims::debug_assert_ok;
use std::cmp::Ordering;

use super::{DirectedEdge, Point, PointLocation};
use crate::{Error, Orientation, PolygonScalar};

/// Advisory tag for inputs whose hull has no interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Degeneracy {
  /// Every input point is identical. The boundary has no edges.
  Coincident,
  /// Every input point lies on one line. The boundary is a single edge
  /// walked in both directions.
  CoLinear,
}

/// Clockwise boundary of a convex hull.
///
/// The boundary starts at the lexicographically smallest input point and is
/// closed: the last edge ends where the first edge starts. Vertices are
/// strictly convex; points on the interior of a hull edge are never vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hull<T> {
  origin: Point<T>,
  edges: Vec<DirectedEdge<T>>,
  degeneracy: Option<Degeneracy>,
}

impl<T> Hull<T> {
  /// Ordered clockwise boundary edges.
  pub fn edges(&self) -> &[DirectedEdge<T>] {
    &self.edges
  }

  pub fn into_edges(self) -> Vec<DirectedEdge<T>> {
    self.edges
  }

  /// Hull vertices in clockwise order, starting with the leftmost.
  pub fn vertices(&self) -> impl Iterator<Item = &Point<T>> + '_ {
    let lone = if self.edges.is_empty() {
      Some(&self.origin)
    } else {
      None
    };
    lone
      .into_iter()
      .chain(self.edges.iter().map(|edge| &edge.src))
  }

  /// Number of boundary edges.
  pub fn len(&self) -> usize {
    self.edges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.edges.is_empty()
  }

  pub fn degeneracy(&self) -> Option<Degeneracy> {
    self.degeneracy
  }
}

impl<T> Hull<T>
where
  T: PolygonScalar,
{
  /// $O(1)$ Wrap an edge sequence that is already a valid hull boundary.
  pub(crate) fn new_unchecked(origin: Point<T>, edges: Vec<DirectedEdge<T>>) -> Hull<T> {
    let degeneracy = match edges.len() {
      0 => Some(Degeneracy::Coincident),
      2 => Some(Degeneracy::CoLinear),
      _ => None,
    };
    let hull = Hull {
      origin,
      edges,
      degeneracy,
    };
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n \log n)$ Check that the boundary is closed, clockwise and strictly convex.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.edges.len();
    if n == 0 {
      return Ok(());
    }
    if self.edges[0].src != self.origin {
      return Err(Error::UnclosedBoundary);
    }
    for (i, edge) in self.edges.iter().enumerate() {
      if edge.dst != self.edges[(i + 1) % n].src {
        return Err(Error::UnclosedBoundary);
      }
      if edge.src == edge.dst {
        return Err(Error::DuplicatePoints);
      }
    }
    if n == 2 {
      return Ok(());
    }

    let mut sorted: Vec<&Point<T>> = self.vertices().collect();
    sorted.sort_unstable_by(|a, b| a.cmp_xy(b));
    if sorted
      .windows(2)
      .any(|pair| pair[0].cmp_xy(pair[1]) == Ordering::Equal)
    {
      return Err(Error::DuplicatePoints);
    }

    let mut clockwise = 0;
    let mut minima = 0;
    for i in 0..n {
      let prev = &self.edges[(i + n - 1) % n].src;
      let this = &self.edges[i].src;
      let next = &self.edges[i].dst;
      if Point::orient(prev, this, next) == Orientation::ClockWise {
        clockwise += 1;
      }
      if this.cmp_xy(prev) == Ordering::Less && this.cmp_xy(next) == Ordering::Less {
        minima += 1;
      }
    }
    if clockwise == 0 {
      return Err(Error::ClockWiseViolation);
    }
    // A boundary that turns the same way everywhere but winds around more
    // than once has more than one lexicographic minimum.
    if clockwise != n || minima != 1 {
      return Err(Error::ConvexViolation);
    }
    Ok(())
  }

  /// $O(n)$ Locate a point relative to the hull.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.edges.len() {
      0 if &self.origin == pt => PointLocation::OnBoundary,
      0 => PointLocation::Outside,
      2 if self.edges[0].contains(pt) => PointLocation::OnBoundary,
      2 => PointLocation::Outside,
      _ => {
        let mut on_boundary = false;
        for edge in self.edges.iter() {
          match Point::orient(&edge.src, &edge.dst, pt) {
            Orientation::CounterClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_boundary = true,
            Orientation::ClockWise => {}
          }
        }
        if on_boundary {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a DirectedEdge<T>;
  type IntoIter = std::slice::Iter<'a, DirectedEdge<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.edges.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn ring(pts: &[[i32; 2]]) -> Hull<i32> {
    let n = pts.len();
    let edges = (0..n)
      .map(|i| DirectedEdge::new(Point::new(pts[i]), Point::new(pts[(i + 1) % n])))
      .collect();
    Hull {
      origin: Point::new(pts[0]),
      edges,
      degeneracy: None,
    }
  }

  #[test]
  fn validate_square() {
    assert_ok!(ring(&[[0, 0], [0, 1], [1, 1], [1, 0]]).validate());
  }

  #[test]
  fn validate_counter_clockwise() {
    assert_err_eq!(
      ring(&[[0, 0], [1, 0], [1, 1], [0, 1]]).validate(),
      Error::ClockWiseViolation
    );
  }

  #[test]
  fn validate_colinear_vertex() {
    assert_err_eq!(
      ring(&[[0, 0], [0, 1], [0, 2], [1, 1]]).validate(),
      Error::ConvexViolation
    );
  }

  #[test]
  fn validate_double_winding() {
    // Pentagram: every turn is clockwise but the boundary winds twice.
    let star = [[0, 10], [6, -8], [-10, 3], [10, 3], [-6, -8]];
    let hull = ring(&star);
    assert_err_eq!(hull.validate(), Error::ConvexViolation);
  }

  #[test]
  fn locate_square() {
    let hull = ring(&[[0, 0], [0, 2], [2, 2], [2, 0]]);
    assert_eq!(hull.locate(&Point::new([1, 1])), PointLocation::Inside);
    assert_eq!(hull.locate(&Point::new([0, 1])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([2, 2])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([3, 1])), PointLocation::Outside);
    assert_eq!(hull.locate(&Point::new([0, 3])), PointLocation::Outside);
  }

  #[test]
  fn locate_degenerate() {
    let segment = ring(&[[0, 0], [4, 4]]);
    assert_ok!(segment.validate());
    assert_eq!(segment.locate(&Point::new([2, 2])), PointLocation::OnBoundary);
    assert_eq!(segment.locate(&Point::new([5, 5])), PointLocation::Outside);

    let single = Hull::new_unchecked(Point::new([3, 3]), vec![]);
    assert_eq!(single.degeneracy(), Some(Degeneracy::Coincident));
    assert_eq!(single.vertices().count(), 1);
    assert_eq!(single.locate(&Point::new([3, 3])), PointLocation::OnBoundary);
    assert_eq!(single.locate(&Point::new([3, 4])), PointLocation::Outside);
  }
}

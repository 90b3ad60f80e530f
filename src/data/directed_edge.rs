use std::cmp::Ordering;

use super::Point;
use crate::PolygonScalar;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

/// One boundary edge, walked from `src` to `dst`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DirectedEdge<T> {
  pub src: Point<T>,
  pub dst: Point<T>,
}

impl<T> DirectedEdge<T> {
  pub fn new(src: Point<T>, dst: Point<T>) -> DirectedEdge<T> {
    DirectedEdge { src, dst }
  }

  #[must_use]
  pub fn reverse(self) -> DirectedEdge<T> {
    DirectedEdge {
      src: self.dst,
      dst: self.src,
    }
  }
}

impl<T: PolygonScalar> DirectedEdge<T> {
  /// True if `pt` lies on the closed segment between `src` and `dst`.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    if !Point::orient(&self.src, &self.dst, pt).is_colinear() {
      return false;
    }
    // Co-linear points are ordered along the segment by their coordinates.
    let (lo, hi) = match self.src.cmp_xy(&self.dst) {
      Ordering::Greater => (&self.dst, &self.src),
      _ => (&self.src, &self.dst),
    };
    lo.cmp_xy(pt) != Ordering::Greater && pt.cmp_xy(hi) != Ordering::Greater
  }
}

impl<T> From<(Point<T>, Point<T>)> for DirectedEdge<T> {
  fn from((src, dst): (Point<T>, Point<T>)) -> DirectedEdge<T> {
    DirectedEdge { src, dst }
  }
}

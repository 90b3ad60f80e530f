use log::error;
use std::ops::Range;

use crate::data::{DirectedEdge, Point};
use crate::{Error, Orientation, PolygonScalar};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(pub usize);

impl std::fmt::Debug for NodeId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    write!(f, "NodeId({})", self.0)
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
  ClockWise,
  CounterClockWise,
}

/// Which side of its sibling a sub-hull was built on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
  Left,
  Right,
}

impl Side {
  /// Pick whichever node lies further towards the sibling. Node ids follow
  /// the lexicographic point order, so that is the largest id for a left
  /// sub-hull and the smallest for a right one.
  fn facing(self, a: NodeId, b: NodeId) -> NodeId {
    match self {
      Side::Left => a.max(b),
      Side::Right => a.min(b),
    }
  }
}

/// A closed sub-hull, identified by the vertex that faces its sibling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SubHull {
  pub pivot: NodeId,
  pub side: Side,
  pub len: usize,
}

#[derive(Copy, Clone, Debug)]
struct Links {
  cw: NodeId,
  ccw: NodeId,
}

/// Flat storage for hull vertices.
///
/// Node `i` holds `points[i]`, and `points` is sorted lexicographically with
/// no duplicates. Merging only rewrites links; vertices that fall off the
/// boundary keep stale links and are never visited again.
pub(crate) struct HullArena<'a, T> {
  points: &'a [Point<T>],
  links: Vec<Links>,
}

impl<'a, T> HullArena<'a, T>
where
  T: PolygonScalar,
{
  pub fn new(points: &'a [Point<T>]) -> HullArena<'a, T> {
    let links = (0..points.len())
      .map(|i| Links {
        cw: NodeId(i),
        ccw: NodeId(i),
      })
      .collect();
    HullArena { points, links }
  }

  pub fn point(&self, node: NodeId) -> &'a Point<T> {
    &self.points[node.0]
  }

  pub fn cw(&self, node: NodeId) -> NodeId {
    self.links[node.0].cw
  }

  pub fn ccw(&self, node: NodeId) -> NodeId {
    self.links[node.0].ccw
  }

  pub fn step(&self, node: NodeId, rotation: Rotation) -> NodeId {
    match rotation {
      Rotation::ClockWise => self.cw(node),
      Rotation::CounterClockWise => self.ccw(node),
    }
  }

  /// Make `to` the clockwise successor of `from`.
  pub fn link(&mut self, from: NodeId, to: NodeId) {
    self.links[from.0].cw = to;
    self.links[to.0].ccw = from;
  }

  /// $O(1)$ Hull of one to three consecutive nodes.
  pub fn base_hull(&mut self, range: Range<usize>, side: Side) -> SubHull {
    debug_assert!(!range.is_empty() && range.len() <= 3);
    let first = NodeId(range.start);
    let last = NodeId(range.end - 1);
    let len = match range.len() {
      1 => {
        self.link(first, first);
        1
      }
      2 => {
        self.link(first, last);
        self.link(last, first);
        2
      }
      _ => {
        let middle = NodeId(range.start + 1);
        // Order the two remaining nodes by their turn around the node on
        // our own side, so that walking them in order is clockwise.
        let (anchor, p, q) = match side {
          Side::Left => (first, middle, last),
          Side::Right => (last, first, middle),
        };
        match Point::orient(self.point(anchor), self.point(p), self.point(q)) {
          Orientation::CoLinear => {
            // Sorted and distinct, so the middle node lies between the others.
            self.link(first, last);
            self.link(last, first);
            2
          }
          Orientation::ClockWise => {
            self.link(anchor, p);
            self.link(p, q);
            self.link(q, anchor);
            3
          }
          Orientation::CounterClockWise => {
            self.link(anchor, q);
            self.link(q, p);
            self.link(p, anchor);
            3
          }
        }
      }
    };
    let pivot = match side {
      Side::Left => last,
      Side::Right => first,
    };
    SubHull { pivot, side, len }
  }

  /// Visit every node of the cycle through `start` in clockwise order and
  /// return the cycle length.
  ///
  /// # Errors
  /// Returns [`Error::CycleViolation`] if a clockwise link is not mirrored by
  /// the counter-clockwise link of its target, or if the walk does not
  /// return to `start`.
  pub fn walk_cw(&self, start: NodeId, mut visit: impl FnMut(NodeId)) -> Result<usize, Error> {
    let mut node = start;
    let mut count = 0;
    loop {
      visit(node);
      count += 1;
      let next = self.cw(node);
      if self.ccw(next) != node {
        error!("{:?}.cw is {:?} but {:?}.ccw is {:?}", node, next, next, self.ccw(next));
        return Err(Error::CycleViolation);
      }
      if count > self.links.len() {
        error!("cycle through {:?} does not close", start);
        return Err(Error::CycleViolation);
      }
      node = next;
      if node == start {
        return Ok(count);
      }
    }
  }

  /// Walk the finished cycle once and make the node extreme towards the
  /// sibling of `side` the new pivot.
  pub fn settle(&self, start: NodeId, side: Side) -> Result<SubHull, Error> {
    let mut pivot = start;
    let len = self.walk_cw(start, |node| pivot = side.facing(pivot, node))?;
    Ok(SubHull { pivot, side, len })
  }

  /// Clockwise boundary edges of the cycle through `start`. A single node
  /// has no edges.
  pub fn boundary(&self, start: NodeId) -> Result<Vec<DirectedEdge<T>>, Error> {
    let mut edges = Vec::new();
    self.walk_cw(start, |node| {
      let next = self.cw(node);
      if next != node {
        edges.push(DirectedEdge::new(
          self.point(node).clone(),
          self.point(next).clone(),
        ));
      }
    })?;
    Ok(edges)
  }
}

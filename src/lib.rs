//! Convex hulls of planar point sets by divide and conquer.
//!
//! The entry points are [`algorithms::convex_hull`], a pure function from a
//! point set to its clockwise hull boundary, and [`compute_hull`], which does
//! the same and then reports the result to an optional [`Renderer`].
//!
//! ```rust
//! # use dchull::algorithms::convex_hull;
//! # use dchull::data::Point;
//! let square = vec![
//!   Point::new([0, 0]),
//!   Point::new([1, 0]),
//!   Point::new([1, 1]),
//!   Point::new([0, 1]),
//!   Point::new([1, 0]), // Duplicates are fine.
//! ];
//! let hull = convex_hull(square)?;
//! assert_eq!(hull.len(), 4);
//! # Ok::<(), dchull::Error>(())
//! ```
#![doc(test(no_crate_inject))]
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;
mod visualize;

pub use orientation::Orientation;
pub use visualize::{compute_hull, Color, HullOptions, RenderError, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The input point set was empty.
  EmptyInput,
  /// A floating point coordinate was NaN or infinite.
  NonFiniteCoordinate,
  /// A hull traversal found a neighbour link that does not close the cycle.
  CycleViolation,
  /// Three consecutive boundary vertices are co-linear or counter-clockwise.
  ConvexViolation,
  ClockWiseViolation,
  DuplicatePoints,
  /// Consecutive edges do not share an endpoint.
  UnclosedBoundary,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::EmptyInput => write!(f, "At least one point is required"),
      Error::NonFiniteCoordinate => write!(f, "Coordinates must be finite"),
      Error::CycleViolation => write!(f, "Hull cycle is not closed"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::UnclosedBoundary => write!(f, "Boundary edges do not form a closed chain"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate types the hull algorithms can work with.
///
/// Every predicate is exact: fixed-width integers never overflow, floats go
/// through adaptive-precision arithmetic, and the arbitrary precision types
/// compute directly.
pub trait PolygonScalar: std::fmt::Debug + TotalOrd + PartialEq + Clone {
  /// Compare the squared distances `|p-q|` and `|p-r|`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Sign of the cross product `(q-p) x (r-p)`. `Greater` means counter-clockwise.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;

  fn is_finite(&self) -> bool {
    true
  }
}

// (magnitude, is_negative) pairs. Zero is never negative.
fn cmp_signed<U: Ord>(lhs: (U, bool), rhs: (U, bool)) -> Ordering {
  match (lhs.1, rhs.1) {
    (false, true) => Ordering::Greater,
    (true, false) => Ordering::Less,
    (false, false) => lhs.0.cmp(&rhs.0),
    (true, true) => rhs.0.cmp(&lhs.0),
  }
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl PolygonScalar for $ty {
      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        fn diff(a: $ty, b: $ty) -> $ulong {
          if a >= b {
            a.wrapping_sub(b) as $uty as $ulong
          } else {
            b.wrapping_sub(a) as $uty as $ulong
          }
        }
        let pq_x = diff(p[0], q[0]);
        let pq_y = diff(p[1], q[1]);
        let (pq, pq_overflow) = (pq_x * pq_x).overflowing_add(pq_y * pq_y);
        let pr_x = diff(p[0], r[0]);
        let pr_y = diff(p[1], r[1]);
        let (pr, pr_overflow) = (pr_x * pr_x).overflowing_add(pr_y * pr_y);
        // Both sums are below twice the type range, so one wrap-around keeps the order.
        match (pq_overflow, pr_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          _ => pq.cmp(&pr),
        }
      }

      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // diff(a, b) = |a - b| along with the sign of a - b.
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if a >= b {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          } else {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          }
        }
        fn mul(a: ($ulong, bool), b: ($ulong, bool)) -> ($ulong, bool) {
          let magnitude = a.0 * b.0;
          (magnitude, magnitude != 0 && (a.1 != b.1))
        }
        let ux = diff(q[0], p[0]);
        let uy = diff(q[1], p[1]);
        let vx = diff(r[0], p[0]);
        let vy = diff(r[1], p[1]);
        cmp_signed(mul(ux, vy), mul(uy, vx))
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq.cmp(&pr)
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let lhs = (&q[0] - &p[0]) * (&r[1] - &p[1]);
          let rhs = (&q[1] - &p[1]) * (&r[0] - &p[0]);
          lhs.cmp(&rhs)
        }
      }
    )*
  };
}

fn orient2d_ordering(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Ordering {
  let orient = geometry_predicates::predicates::orient2d(p, q, r);
  if orient > 0.0 {
    Ordering::Greater
  } else if orient < 0.0 {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      // -0.0 and 0.0 compare equal so sorting agrees with `==` and the predicates.
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self
            .partial_cmp(other)
            .unwrap_or_else(|| <$ty>::total_cmp(self, other))
        }
      }

      impl PolygonScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_dist(
            &[float_to_rational(p[0]), float_to_rational(p[1])],
            &[float_to_rational(q[0]), float_to_rational(q[1])],
            &[float_to_rational(r[0]), float_to_rational(r[1])],
          )
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d_ordering(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          )
        }

        fn is_finite(&self) -> bool {
          <$ty>::is_finite(*self)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_dist(
            &[float_to_rational(p[0].into_inner()), float_to_rational(p[1].into_inner())],
            &[float_to_rational(q[0].into_inner()), float_to_rational(q[1].into_inner())],
            &[float_to_rational(r[0].into_inner()), float_to_rational(r[1].into_inner())],
          )
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d_ordering(
            [f64::from(p[0].into_inner()), f64::from(p[1].into_inner())],
            [f64::from(q[0].into_inner()), f64::from(q[1].into_inner())],
            [f64::from(r[0].into_inner()), f64::from(r[1].into_inner())],
          )
        }

        fn is_finite(&self) -> bool {
          self.into_inner().is_finite()
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
arbitrary_precision!(num_bigint::BigInt, num_rational::BigRational);
floating_precision!(f32, f64);
wrapped_floating_precision!(
  ordered_float::OrderedFloat<f32>,
  ordered_float::OrderedFloat<f64>,
  ordered_float::NotNan<f32>,
  ordered_float::NotNan<f64>
);

fn float_to_rational(f: impl num::traits::float::FloatCore) -> num::BigRational {
  num::BigRational::from_float(f).expect("cannot convert NaN or infinite to exact precision number")
}

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
  use super::*;
  use num_bigint::BigInt;
  use ordered_float::OrderedFloat;

  #[test]
  fn cmp_slope_extremes_i8() {
    // (q-p) x (r-p) = 254 * 254 - 0, which needs more than 16 signed bits.
    assert_eq!(
      i8::cmp_slope(&[-127, -127], &[127, -127], &[127, 127]),
      Ordering::Greater
    );
    assert_eq!(
      i8::cmp_slope(&[-127, -127], &[127, 127], &[127, -127]),
      Ordering::Less
    );
    assert_eq!(
      i8::cmp_slope(&[i8::MIN, i8::MIN], &[0, 0], &[i8::MAX, i8::MAX]),
      Ordering::Equal
    );
    assert_eq!(
      i8::cmp_slope(&[i8::MIN, i8::MIN], &[0, 0], &[i8::MAX, 126]),
      Ordering::Less
    );
  }

  #[test]
  fn cmp_slope_i64_no_overflow() {
    let lo = i64::MIN;
    let hi = i64::MAX;
    assert_eq!(i64::cmp_slope(&[lo, lo], &[hi, lo], &[hi, hi]), Ordering::Greater);
    assert_eq!(i64::cmp_slope(&[lo, lo], &[hi, hi], &[0, 0]), Ordering::Equal);
  }

  #[test]
  fn cmp_dist_i64_no_overflow() {
    let lo = i64::MIN;
    let hi = i64::MAX;
    assert_eq!(i64::cmp_dist(&[lo, lo], &[hi, hi], &[hi, lo]), Ordering::Greater);
    assert_eq!(i64::cmp_dist(&[lo, lo], &[hi, lo], &[lo, hi]), Ordering::Equal);
    assert_eq!(i64::cmp_dist(&[0, 0], &[1, 1], &[hi, hi]), Ordering::Less);
  }

  #[test]
  fn cmp_slope_agrees_across_types() {
    let pts = [[0, 0], [3, 1], [1, 3], [2, 2], [-4, 7]];
    for p in pts.iter() {
      for q in pts.iter() {
        for r in pts.iter() {
          let expected = i32::cmp_slope(p, q, r);
          let big = |a: &[i32; 2]| [BigInt::from(a[0]), BigInt::from(a[1])];
          let float = |a: &[i32; 2]| [f64::from(a[0]), f64::from(a[1])];
          let ordered = |a: &[i32; 2]| [OrderedFloat(f64::from(a[0])), OrderedFloat(f64::from(a[1]))];
          assert_eq!(BigInt::cmp_slope(&big(p), &big(q), &big(r)), expected);
          assert_eq!(f64::cmp_slope(&float(p), &float(q), &float(r)), expected);
          assert_eq!(
            OrderedFloat::<f64>::cmp_slope(&ordered(p), &ordered(q), &ordered(r)),
            expected
          );
        }
      }
    }
  }

  #[test]
  fn signed_zero_is_equal() {
    assert_eq!(TotalOrd::total_cmp(&-0.0_f64, &0.0), Ordering::Equal);
    assert_eq!(TotalOrd::total_cmp(&-1.0_f64, &0.0), Ordering::Less);
  }

  #[test]
  fn float_finiteness() {
    assert!(PolygonScalar::is_finite(&1.0_f32));
    assert!(!PolygonScalar::is_finite(&f64::NAN));
    assert!(!PolygonScalar::is_finite(&f64::INFINITY));
    assert!(PolygonScalar::is_finite(&7_i32));
  }
}

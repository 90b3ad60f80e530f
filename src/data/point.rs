use num_bigint::BigInt;
use num_traits::float::FloatCore;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

use crate::{Orientation, PolygonScalar, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; 2]) -> Point<NotNan<T>>
  where
    T: FloatCore,
  {
    let [x, y] = array;
    Point::new([NotNan::new(x).unwrap(), NotNan::new(y).unwrap()])
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    let [x, y] = self.array.clone();
    Point { array: [f(x), f(y)] }
  }
}

impl<T: PolygonScalar> Point<T> {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  pub fn orient(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation {
    Orientation::new(&p1.array, &p2.array, &p3.array)
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Point::orient(self, q, r)
  }

  /// Lexicographic order: by x, then by y.
  pub fn cmp_xy(&self, other: &Point<T>) -> Ordering {
    TotalOrd::total_cmp(
      &(self.x_coord(), self.y_coord()),
      &(other.x_coord(), other.y_coord()),
    )
  }

  /// Compare the distances from `self` to `p` and to `q`.
  ///
  /// # Panics
  ///
  /// Panics if a float coordinate is NaN or infinite.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(PolygonScalar::is_finite)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl TryFrom<Point<f64>> for Point<NotNan<f64>> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64>) -> Result<Point<NotNan<f64>>, FloatIsNan> {
    let [x, y] = point.array;
    Ok(Point {
      array: [NotNan::try_from(x)?, NotNan::try_from(y)?],
    })
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl From<Point<i64>> for Point<BigInt> {
  fn from(point: Point<i64>) -> Point<BigInt> {
    point.cast(BigInt::from)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn cmp_xy_is_antisymmetric(pt1 in any_64(), pt2 in any_64()) {
      prop_assert_eq!(pt1.cmp_xy(&pt2), pt2.cmp_xy(&pt1).reverse());
    }

    #[test]
    fn cmp_distance_fuzz_nn(pt1 in any_nn(), pt2 in any_nn(), pt3 in any_nn()) {
      let _ = pt1.cmp_distance_to(&pt2, &pt3);
    }

    #[test]
    fn bigint_colinear(pt1 in any_r(), pt2 in any_r()) {
      let pt3 = Point::new([
        &pt2.array[0] + &pt2.array[0] - &pt1.array[0],
        &pt2.array[1] + &pt2.array[1] - &pt1.array[1],
      ]);
      prop_assert!(Point::orient(&pt1, &pt2, &pt3).is_colinear())
    }
  }

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::orient(
        &Point::new([0, 0]),
        &Point::new([1, 1]),
        &Point::new([2, 2])
      ),
      CoLinear
    );
    assert_eq!(
      Point::orient(
        &Point::new_nn([0.0, 0.0]),
        &Point::new_nn([1.0, 1.0]),
        &Point::new_nn([2.0, 2.0])
      ),
      CoLinear
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([2, 2])),
      ClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([-2, 2])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 0]), &Point::new([0, 0])),
      CoLinear
    );
  }

  #[test]
  fn unit_1() {
    assert_eq!(
      Point::new([-12_i8, -126]).orientation(&Point::new([-12, -126]), &Point::new([0, -126])),
      CoLinear
    );
  }

  #[test]
  fn cmp_xy_breaks_ties_on_y() {
    let a = Point::new([1.0, 2.0]);
    let b = Point::new([1.0, 3.0]);
    let c = Point::new([0.5, 9.0]);
    assert_eq!(a.cmp_xy(&b), Ordering::Less);
    assert_eq!(c.cmp_xy(&a), Ordering::Less);
    assert_eq!(a.cmp_xy(&a), Ordering::Equal);
  }

  #[test]
  fn new_nn_both_widths() {
    let single = Point::new_nn([1.5_f32, -2.0]);
    assert_eq!(single.x_coord().into_inner(), 1.5);
    let double = Point::new_nn([0.25_f64, 4.0]);
    assert_eq!(double.y_coord().into_inner(), 4.0);
  }

  #[test]
  #[should_panic]
  fn cmp_distance_rejects_nan() {
    let origin = Point::new([0.0, 0.0]);
    let _ = origin.cmp_distance_to(&Point::new([f64::NAN, 0.0]), &Point::new([1.0, 1.0]));
  }

  #[test]
  fn finiteness() {
    assert!(Point::new([1.0, 2.0]).is_finite());
    assert!(!Point::new([f64::NAN, 2.0]).is_finite());
    assert!(!Point::new([1.0, f64::NEG_INFINITY]).is_finite());
  }
}

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::*;

/// A position in the affine space over the vector `V`.
///
/// Points and vectors only mix the ways affine geometry allows: `point - point` is a
/// vector, `point + vector` is a point. There is no `point + point`.
#[repr(transparent)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Point<V>(pub V);

pub type Point2<T> = Point<Vec2<T>>;

pub fn point2<T>(x: T, y: T) -> Point2<T> {
  Point(Vec2::new(x, y))
}

impl<V> Point<V> {
  pub fn new(v: V) -> Self {
    Self(v)
  }

  /// the displacement from the origin to this point
  pub fn to_vector(self) -> V {
    self.0
  }

  pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Point<U> {
    Point(f(self.0))
  }
}

impl<V: Copy> Point<V> {
  pub fn origin<T>() -> Self
  where
    V: VectorSpace<T>,
  {
    Self(V::zero())
  }

  #[must_use]
  pub fn translate(&self, by: V) -> Self
  where
    V: Add<Output = V>,
  {
    Self(self.0 + by)
  }
}

impl<T: Scalar> Point2<T> {
  pub fn x(&self) -> T {
    self.0.x
  }

  pub fn y(&self) -> T {
    self.0.y
  }
}

impl<V: Add<Output = V>> Add<V> for Point<V> {
  type Output = Self;
  #[inline(always)]
  fn add(self, rhs: V) -> Self {
    Self(self.0 + rhs)
  }
}

impl<V: AddAssign> AddAssign<V> for Point<V> {
  #[inline(always)]
  fn add_assign(&mut self, rhs: V) {
    self.0 += rhs;
  }
}

impl<V: Sub<Output = V>> Sub for Point<V> {
  type Output = V;
  #[inline(always)]
  fn sub(self, rhs: Self) -> V {
    self.0 - rhs.0
  }
}

impl<V: StructuralOrd> StructuralOrd for Point<V> {
  #[inline]
  fn structural_cmp(&self, other: &Self) -> Ordering {
    self.0.structural_cmp(&other.0)
  }
}

impl<T> From<(T, T)> for Point2<T> {
  fn from(v: (T, T)) -> Self {
    Self(v.into())
  }
}

impl<V: fmt::Display> fmt::Display for Point<V> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Point{}", self.0)
  }
}

#[test]
fn affine_arithmetic() {
  let a = point2(1., 1.);
  let b = point2(4., 5.);
  let d: Vec2<f64> = b - a;
  assert_eq!(d, vec2(3., 4.));
  assert_eq!(a + d, b);
  assert_eq!(a.translate(d), b);
  assert_eq!(Point2::<f64>::origin(), point2(0., 0.));

  let mut c = a;
  c += vec2(1., 0.);
  assert_eq!(c.x(), 2.);
  assert_eq!(c.to_vector(), vec2(2., 1.));
}

use std::cmp::Ordering;
use std::fmt::Debug;
use std::{fmt, ops::*};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec2<T> {
  pub x: T,
  pub y: T,
}

pub fn vec2<T>(x: T, y: T) -> Vec2<T> {
  Vec2::new(x, y)
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec2<T> {}

impl<T> Vec2<T> {
  #[inline(always)]
  pub const fn new(x: T, y: T) -> Self {
    Self { x, y }
  }

  #[inline]
  pub fn map<U>(self, f: impl Fn(T) -> U) -> Vec2<U> {
    Vec2 {
      x: f(self.x),
      y: f(self.y),
    }
  }

  #[inline]
  pub fn zip<U, R>(self, v2: Vec2<U>, f: impl Fn(T, U) -> R) -> Vec2<R> {
    Vec2 {
      x: f(self.x, v2.x),
      y: f(self.y, v2.y),
    }
  }
}

impl<T: Scalar> VectorSpace<T> for Vec2<T> {
  #[inline(always)]
  fn zero() -> Self {
    Self::new(T::zero(), T::zero())
  }

  #[inline]
  fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite()
  }
}

impl<T: Scalar> InnerProductSpace<T> for Vec2<T> {
  #[inline]
  fn dot(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y
  }
}

impl<T: StructuralOrd> StructuralOrd for Vec2<T> {
  #[inline]
  fn structural_cmp(&self, other: &Self) -> Ordering {
    self
      .x
      .structural_cmp(&other.x)
      .then_with(|| self.y.structural_cmp(&other.y))
  }
}

impl<T> Vec2<T>
where
  T: Scalar,
{
  #[inline]
  pub fn unit_x() -> Self {
    Self::new(T::one(), T::zero())
  }

  #[inline]
  pub fn unit_y() -> Self {
    Self::new(T::zero(), T::one())
  }

  /// counter clockwise quarter turn
  #[inline]
  pub fn perpendicular(&self) -> Self {
    Self::new(-self.y, self.x)
  }

  #[inline]
  pub fn rotate(&self, radians: T) -> Self {
    let (s, c) = radians.sin_cos();
    Self {
      x: self.x * c - self.y * s,
      y: self.x * s + self.y * c,
    }
  }

  #[inline]
  pub fn min(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.min(b))
  }

  #[inline]
  pub fn max(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.max(b))
  }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
  type Output = Self;
  #[inline(always)]
  fn add(self, rhs: Self) -> Self {
    Self::new(self.x + rhs.x, self.y + rhs.y)
  }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
  type Output = Self;
  #[inline(always)]
  fn sub(self, rhs: Self) -> Self {
    Self::new(self.x - rhs.x, self.y - rhs.y)
  }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
  type Output = Self;
  #[inline(always)]
  fn neg(self) -> Self {
    Self::new(-self.x, -self.y)
  }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vec2<T> {
  type Output = Self;
  #[inline(always)]
  fn mul(self, rhs: T) -> Self {
    Self::new(self.x * rhs, self.y * rhs)
  }
}

impl<T: Div<Output = T> + Copy> Div<T> for Vec2<T> {
  type Output = Self;
  #[inline(always)]
  fn div(self, rhs: T) -> Self {
    Self::new(self.x / rhs, self.y / rhs)
  }
}

impl<T: AddAssign> AddAssign for Vec2<T> {
  #[inline(always)]
  fn add_assign(&mut self, rhs: Self) {
    self.x += rhs.x;
    self.y += rhs.y;
  }
}

impl<T: SubAssign> SubAssign for Vec2<T> {
  #[inline(always)]
  fn sub_assign(&mut self, rhs: Self) {
    self.x -= rhs.x;
    self.y -= rhs.y;
  }
}

impl<T> From<(T, T)> for Vec2<T> {
  #[inline(always)]
  fn from(v: (T, T)) -> Self {
    Self::new(v.0, v.1)
  }
}

impl<T> From<[T; 2]> for Vec2<T> {
  #[inline(always)]
  fn from([x, y]: [T; 2]) -> Self {
    Self::new(x, y)
  }
}

impl<T> From<Vec2<T>> for [T; 2] {
  #[inline(always)]
  fn from(v: Vec2<T>) -> Self {
    [v.x, v.y]
  }
}

impl<T> fmt::Display for Vec2<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:?}, {:?})", self.x, self.y)
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn arithmetic() {
    let a = vec2(1., 2.);
    let b = vec2(3., -1.);
    assert_eq!(a + b, vec2(4., 1.));
    assert_eq!(a - b, vec2(-2., 3.));
    assert_eq!(-a, vec2(-1., -2.));
    assert_eq!(a * 2., vec2(2., 4.));
    assert_eq!(b / 2., vec2(1.5, -0.5));
    assert_eq!(a.dot(b), 1.);
    assert_eq!(Vec2::<f64>::sum([a, b, a]), vec2(5., 3.));
  }

  #[test]
  fn length_and_rotation() {
    let v = vec2(3_f64, 4.);
    assert_eq!(v.length(), 5.);
    let unit: f64 = v.normalize().length();
    assert!(unit.approx_eq(1., 1e-12));
    assert_eq!(Vec2::<f64>::zero().normalize(), Vec2::zero());

    let r = Vec2::<f64>::unit_x().rotate(std::f64::consts::FRAC_PI_2);
    assert!(r.x.approx_eq(0., 1e-12));
    assert!(r.y.approx_eq(1., 1e-12));
    assert_eq!(Vec2::<f64>::unit_x().perpendicular(), Vec2::unit_y());
  }

  #[test]
  fn finiteness() {
    assert!(vec2(1_f32, 2.).is_finite());
    assert!(!vec2(f32::NAN, 2.).is_finite());
    assert!(!vec2(1., f64::INFINITY).is_finite());
  }
}

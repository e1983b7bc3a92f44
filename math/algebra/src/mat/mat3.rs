use std::ops::{Add, Mul};

use crate::*;

/// Homogeneous 2D transform, column major.
///
/// `a` and `b` columns are the images of the x and y basis vectors, the `c` column holds the
/// translation.
#[repr(C)]
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Mat3<T> {
  pub a1: T, pub a2: T, pub a3: T,
  pub b1: T, pub b2: T, pub b3: T,
  pub c1: T, pub c2: T, pub c3: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat3<T> {}

impl<T> Mat3<T>
where
  T: Copy,
{
  #[allow(clippy::too_many_arguments)]
  pub fn new(m11: T, m12: T, m13: T, m21: T, m22: T, m23: T, m31: T, m32: T, m33: T) -> Self {
    Self {
      a1: m11, a2: m12, a3: m13,
      b1: m21, b2: m22, b3: m23,
      c1: m31, c2: m32, c3: m33,
    }
  }

  pub fn translation(&self) -> Vec2<T> {
    Vec2::new(self.c1, self.c2)
  }
}

impl<T> Mat3<T>
where
  T: Scalar,
{
  pub fn identity() -> Self {
    Mat3::new(
      T::one(),  T::zero(), T::zero(),
      T::zero(), T::one(),  T::zero(),
      T::zero(), T::zero(), T::one(),
    )
  }

  pub fn translate(v: impl Into<Vec2<T>>) -> Self {
    let v = v.into();
    Mat3::new(
      T::one(),  T::zero(), T::zero(),
      T::zero(), T::one(),  T::zero(),
      v.x,       v.y,       T::one(),
    )
  }

  pub fn scale(v: impl Into<Vec2<T>>) -> Self {
    let v = v.into();
    Mat3::new(
      v.x,       T::zero(), T::zero(),
      T::zero(), v.y,       T::zero(),
      T::zero(), T::zero(), T::one(),
    )
  }

  /// counter clockwise rotation around the origin
  pub fn rotate(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    Mat3::new(
      c,         s,         T::zero(),
      -s,        c,         T::zero(),
      T::zero(), T::zero(), T::one(),
    )
  }

  /// `x += kx * y`, `y += ky * x`
  pub fn shear(kx: T, ky: T) -> Self {
    Mat3::new(
      T::one(),  ky,        T::zero(),
      kx,        T::one(),  T::zero(),
      T::zero(), T::zero(), T::one(),
    )
  }

  /// same map with the translation dropped
  pub fn linear_part(&self) -> Self {
    let mut m = *self;
    m.c1 = T::zero();
    m.c2 = T::zero();
    m
  }

  pub fn det(&self) -> T {
    let t11 = self.c3 * self.b2 - self.b3 * self.c2;
    let t12 = self.b3 * self.c1 - self.c3 * self.b1;
    let t13 = self.c2 * self.b1 - self.b2 * self.c1;
    self.a1 * t11 + self.a2 * t12 + self.a3 * t13
  }

  pub fn inverse(&self) -> Option<Self> {
    let det = self.det();
    if det == T::zero() {
      return None;
    }

    let inv_det = T::one() / det;

    Self {
      a1: (self.c3 * self.b2 - self.b3 * self.c2) * inv_det,
      a2: (self.a3 * self.c2 - self.c3 * self.a2) * inv_det,
      a3: (self.b3 * self.a2 - self.a3 * self.b2) * inv_det,
      b1: (self.b3 * self.c1 - self.c3 * self.b1) * inv_det,
      b2: (self.c3 * self.a1 - self.a3 * self.c1) * inv_det,
      b3: (self.a3 * self.b1 - self.b3 * self.a1) * inv_det,
      c1: (self.c2 * self.b1 - self.b2 * self.c1) * inv_det,
      c2: (self.a2 * self.c1 - self.c2 * self.a1) * inv_det,
      c3: (self.b2 * self.a1 - self.a2 * self.b1) * inv_det,
    }
    .into()
  }
}

impl<T: Scalar> AffineTransform<Vec2<T>> for Mat3<T> {
  #[inline]
  fn apply_vector(&self, v: Vec2<T>) -> Vec2<T> {
    Vec2::new(
      v.x * self.a1 + v.y * self.b1,
      v.x * self.a2 + v.y * self.b2,
    )
  }

  #[inline]
  fn apply_point(&self, p: Point2<T>) -> Point2<T> {
    let v = p.0;
    let x = v.x * self.a1 + v.y * self.b1 + self.c1;
    let y = v.x * self.a2 + v.y * self.b2 + self.c2;
    let w = v.x * self.a3 + v.y * self.b3 + self.c3;
    point2(x / w, y / w)
  }
}

impl<T> Mul for Mat3<T>
where
  T: Copy + Mul<Output = T> + Add<Output = T>,
{
  type Output = Self;

  fn mul(self, m: Self) -> Self {
    let a = self;

    Self {
      a1: a.a1 * m.a1 + a.b1 * m.a2 + a.c1 * m.a3,
      a2: a.a2 * m.a1 + a.b2 * m.a2 + a.c2 * m.a3,
      a3: a.a3 * m.a1 + a.b3 * m.a2 + a.c3 * m.a3,

      b1: a.a1 * m.b1 + a.b1 * m.b2 + a.c1 * m.b3,
      b2: a.a2 * m.b1 + a.b2 * m.b2 + a.c2 * m.b3,
      b3: a.a3 * m.b1 + a.b3 * m.b2 + a.c3 * m.b3,

      c1: a.a1 * m.c1 + a.b1 * m.c2 + a.c1 * m.c3,
      c2: a.a2 * m.c1 + a.b2 * m.c2 + a.c2 * m.c3,
      c3: a.a3 * m.c1 + a.b3 * m.c2 + a.c3 * m.c3,
    }
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  fn cg_apply(m: cgmath::Matrix3<f32>, x: f32, y: f32, w: f32) -> [f32; 2] {
    let r = m * cgmath::vec3(x, y, w);
    [r.x, r.y]
  }

  #[test]
  fn same_as_cgmath() {
    let cgmath_mat = cgmath::Matrix3::<f32>::from_translation(cgmath::vec2(1., 2.))
      * cgmath::Matrix3::<f32>::from_nonuniform_scale(3., -2.);
    let math_mat = Mat3::<f32>::translate((1., 2.)) * Mat3::<f32>::scale((3., -2.));

    let p: [f32; 2] = math_mat.apply_point(point2(1., 2.)).to_vector().into();
    assert_eq!(p, cg_apply(cgmath_mat, 1., 2., 1.));

    let v: [f32; 2] = math_mat.apply_vector(vec2(1., 2.)).into();
    assert_eq!(v, cg_apply(cgmath_mat, 1., 2., 0.));
  }

  #[test]
  fn rotation_same_as_cgmath() {
    let angle = 0.7_f32;
    let cgmath_mat = cgmath::Matrix3::<f32>::from_angle_z(cgmath::Rad(angle));
    let math_mat = Mat3::<f32>::rotate(angle);
    let v: [f32; 2] = math_mat.apply_vector(vec2(2., -1.)).into();
    let expect = cg_apply(cgmath_mat, 2., -1., 0.);
    assert!(v[0].approx_eq(expect[0], 1e-6));
    assert!(v[1].approx_eq(expect[1], 1e-6));
  }

  #[test]
  fn translation_only_moves_points() {
    let m = Mat3::<f64>::translate((5., 0.));
    assert_eq!(m.apply_vector(vec2(1., 0.)), vec2(1., 0.));
    assert_eq!(m.apply_point(point2(0., 0.)), point2(5., 0.));
    assert_eq!(m.linear_part(), Mat3::identity());
    assert_eq!(m.translation(), vec2(5., 0.));
  }

  #[test]
  fn inverse() {
    let m = Mat3::<f64>::translate((3., -1.)) * Mat3::rotate(0.3) * Mat3::shear(0.5, 0.);
    let inv = m.inverse().unwrap();
    let p = point2(2., 7.);
    let back = inv.apply_point(m.apply_point(p));
    assert!(back.x().approx_eq(p.x(), 1e-12));
    assert!(back.y().approx_eq(p.y(), 1e-12));

    assert!(Mat3::<f64>::scale((0., 1.)).inverse().is_none());
  }
}

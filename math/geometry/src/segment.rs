use std::cmp::Ordering;
use std::ops::{Neg, Sub};

use strand_algebra::*;

use crate::GeometryError;

/// A single curve piece, described relative to its own start which sits at the origin.
///
/// This is everything a trail knows about its pieces: where the piece ends ([`Segment::offset`]),
/// how far it reaches in a direction ([`Segment::support`]), and how it looks after the linear
/// part of an affine map ([`Segment::transformed`]).
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment<V> {
  Linear {
    offset: V,
  },
  /// cubic bezier, all control points relative to the implied start at the origin
  Cubic {
    ctrl1: V,
    ctrl2: V,
    end: V,
  },
}

impl<V> Segment<V> {
  pub fn linear(offset: V) -> Self {
    Self::Linear { offset }
  }

  pub fn cubic(ctrl1: V, ctrl2: V, end: V) -> Self {
    Self::Cubic { ctrl1, ctrl2, end }
  }

  pub fn is_linear(&self) -> bool {
    matches!(self, Self::Linear { .. })
  }
}

impl<V: Copy> Segment<V> {
  pub fn checked_linear<T>(offset: V) -> Result<Self, GeometryError>
  where
    V: VectorSpace<T>,
  {
    if !offset.is_finite() {
      return Err(GeometryError::NonFiniteComponent { component: "offset" });
    }
    Ok(Self::linear(offset))
  }

  pub fn checked_cubic<T>(ctrl1: V, ctrl2: V, end: V) -> Result<Self, GeometryError>
  where
    V: VectorSpace<T>,
  {
    let components = [
      ("first control point", ctrl1),
      ("second control point", ctrl2),
      ("end", end),
    ];
    for (component, v) in components {
      if !v.is_finite() {
        return Err(GeometryError::NonFiniteComponent { component });
      }
    }
    Ok(Self::cubic(ctrl1, ctrl2, end))
  }

  /// displacement from the start of the segment to its end
  #[inline]
  pub fn offset(&self) -> V {
    match *self {
      Self::Linear { offset } => offset,
      Self::Cubic { end, .. } => end,
    }
  }

  /// Only the linear part of the map applies, the segment has no position to translate.
  #[must_use]
  pub fn transformed(&self, mat: &impl AffineTransform<V>) -> Self {
    match *self {
      Self::Linear { offset } => Self::Linear {
        offset: mat.apply_vector(offset),
      },
      Self::Cubic { ctrl1, ctrl2, end } => Self::Cubic {
        ctrl1: mat.apply_vector(ctrl1),
        ctrl2: mat.apply_vector(ctrl2),
        end: mat.apply_vector(end),
      },
    }
  }

  /// The same curve walked from its end back to its start, re-expressed relative to the old end.
  #[must_use]
  pub fn reverse(&self) -> Self
  where
    V: Sub<Output = V> + Neg<Output = V>,
  {
    match *self {
      Self::Linear { offset } => Self::Linear { offset: -offset },
      Self::Cubic { ctrl1, ctrl2, end } => Self::Cubic {
        ctrl1: ctrl2 - end,
        ctrl2: ctrl1 - end,
        end: -end,
      },
    }
  }

  pub fn sample<T>(&self, t: T) -> V
  where
    T: Scalar,
    V: VectorSpace<T>,
  {
    match *self {
      Self::Linear { offset } => offset * t,
      Self::Cubic { ctrl1, ctrl2, end } => {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = T::one() - t;
        let one_t2 = one_t * one_t;

        ctrl1 * (T::three() * one_t2 * t) + ctrl2 * (T::three() * one_t * t2) + end * t3
      }
    }
  }

  /// The largest projection of any point on the segment onto `direction`.
  ///
  /// The start point is part of the segment, so this is never below zero. Cubics are solved
  /// exactly: the projected curve is a cubic polynomial in `t` whose maximum on `[0, 1]` is at
  /// an end or at a root of its derivative.
  pub fn support<T>(&self, direction: V) -> T
  where
    T: Scalar,
    V: InnerProductSpace<T>,
  {
    match *self {
      Self::Linear { offset } => offset.dot(direction).max(T::zero()),
      Self::Cubic { ctrl1, ctrl2, end } => {
        let a = ctrl1.dot(direction);
        let b = ctrl2.dot(direction);
        let c = end.dot(direction);

        let mut max = c.max(T::zero());
        for t in projected_cubic_extrema(a, b, c).into_iter().flatten() {
          if t > T::zero() && t < T::one() {
            max = max.max(projected_cubic(a, b, c, t));
          }
        }
        max
      }
    }
  }
}

/// bezier with control values `0, a, b, c` evaluated at `t`
fn projected_cubic<T: Scalar>(a: T, b: T, c: T, t: T) -> T {
  let one_t = T::one() - t;
  T::three() * a * one_t * one_t * t + T::three() * b * one_t * t * t + c * t * t * t
}

/// roots of the derivative of [`projected_cubic`], divided by three:
/// `(3a - 3b + c) t^2 + (2b - 4a) t + a`
fn projected_cubic_extrema<T: Scalar>(a: T, b: T, c: T) -> [Option<T>; 2] {
  let qa = T::three() * (a - b) + c;
  let qb = T::two() * b - T::two() * T::two() * a;
  let qc = a;

  if qa == T::zero() {
    if qb == T::zero() {
      return [None, None];
    }
    return [Some(-qc / qb), None];
  }

  let discriminant = qb * qb - T::two() * T::two() * qa * qc;
  if discriminant < T::zero() {
    return [None, None];
  }

  // the cancellation free form of the quadratic formula
  let q = -(qb + qb.signum() * discriminant.sqrt()) * T::half();
  let r1 = q / qa;
  let r2 = if q != T::zero() { Some(qc / q) } else { None };
  [Some(r1), r2]
}

impl<V: StructuralOrd> StructuralOrd for Segment<V> {
  fn structural_cmp(&self, other: &Self) -> Ordering {
    match (self, other) {
      (Self::Linear { offset: a }, Self::Linear { offset: b }) => a.structural_cmp(b),
      (Self::Linear { .. }, Self::Cubic { .. }) => Ordering::Less,
      (Self::Cubic { .. }, Self::Linear { .. }) => Ordering::Greater,
      (
        Self::Cubic {
          ctrl1: a1,
          ctrl2: a2,
          end: a3,
        },
        Self::Cubic {
          ctrl1: b1,
          ctrl2: b2,
          end: b3,
        },
      ) => a1
        .structural_cmp(b1)
        .then_with(|| a2.structural_cmp(b2))
        .then_with(|| a3.structural_cmp(b3)),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn sampled_support(segment: &Segment<Vec2<f64>>, direction: Vec2<f64>) -> f64 {
    (0..=10000)
      .map(|i| segment.sample(f64::by_usize_div(i, 10000)).dot(direction))
      .fold(f64::NEG_INFINITY, f64::max)
  }

  #[test]
  fn linear_support() {
    let s = Segment::linear(vec2(1., 0.));
    assert_eq!(s.support(vec2(1., 0.)), 1.);
    assert_eq!(s.support(vec2(-1., 0.)), 0.);
    assert_eq!(s.support(vec2(0., 1.)), 0.);
    assert_eq!(s.support(vec2(2., 5.)), 2.);
  }

  #[test]
  fn cubic_support_is_exact() {
    let arch = Segment::cubic(vec2(0., 1.), vec2(1., 1.), vec2(1., 0.));
    let top: f64 = arch.support(vec2(0., 1.));
    assert!(top.approx_eq(0.75, 1e-12));
    assert_eq!(arch.support(vec2(1., 0.)), 1.);
    assert_eq!(arch.support(vec2(0., -1.)), 0.);

    let s_curve = Segment::cubic(vec2(2., 3.), vec2(-1., -4.), vec2(1., 1.));
    for i in 0..32 {
      let angle = f64::by_usize_div(i, 32) * std::f64::consts::TAU;
      let direction = Vec2::unit_x().rotate(angle);
      let exact: f64 = s_curve.support(direction);
      let sampled = sampled_support(&s_curve, direction);
      assert!(exact >= sampled - 1e-9);
      assert!(exact.approx_eq(sampled, 1e-6));
    }
  }

  #[test]
  fn offset_sample_and_reverse() {
    let s = Segment::cubic(vec2(0., 1.), vec2(2., 1.), vec2(2., 0.));
    assert_eq!(s.offset(), vec2(2., 0.));
    assert_eq!(s.sample(0.), Vec2::zero());
    assert_eq!(s.sample(1.), vec2(2., 0.));

    let r = s.reverse();
    assert_eq!(r.offset(), vec2(-2., 0.));
    let mid = s.sample(0.3) - s.offset();
    let r_mid = r.sample(0.7);
    assert!(mid.x.approx_eq(r_mid.x, 1e-12));
    assert!(mid.y.approx_eq(r_mid.y, 1e-12));
    assert_eq!(r.reverse(), s);

    assert_eq!(Segment::linear(vec2(1., 2.)).reverse(), Segment::linear(vec2(-1., -2.)));
  }

  #[test]
  fn transform_ignores_translation() {
    let s = Segment::cubic(vec2(0., 1.), vec2(1., 1.), vec2(1., 0.));
    let m = Mat3::translate((10., 10.)) * Mat3::scale((2., 3.));
    assert_eq!(
      s.transformed(&m),
      Segment::cubic(vec2(0., 3.), vec2(2., 3.), vec2(2., 0.))
    );
    let l = Segment::linear(vec2(1., 0.));
    assert!(l.is_linear() && !s.is_linear());
    assert_eq!(l.transformed(&Mat3::translate((5., 0.))), l);
  }

  #[test]
  fn checked_construction() {
    assert!(Segment::checked_linear(vec2(1., 0.)).is_ok());
    assert_eq!(
      Segment::checked_linear(vec2(f64::NAN, 0.)),
      Err(GeometryError::NonFiniteComponent { component: "offset" })
    );
    assert_eq!(
      Segment::checked_cubic(vec2(0., 1.), vec2(f32::INFINITY, 0.), vec2(1., 0.)),
      Err(GeometryError::NonFiniteComponent {
        component: "second control point"
      })
    );
  }

  #[test]
  fn structural_order() {
    let a = Segment::linear(vec2(1., 0.));
    let b = Segment::cubic(vec2(0., 0.), vec2(0., 0.), vec2(1., 0.));
    assert_eq!(a.structural_cmp(&b), Ordering::Less);
    assert!(a.structural_eq(&Segment::linear(vec2(1., 0.))));
    assert!(a.structural_eq(&Segment::linear(vec2(1., -0.))));
    assert!(!a.structural_eq(&Segment::linear(vec2(1., 1e-300))));
  }
}

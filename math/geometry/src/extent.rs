use std::fmt;
use std::sync::Arc;

use strand_algebra::*;

use crate::{Box2, Segment};

/// How far a shape reaches in a query direction: the support function
/// `h(d) = max { <p, d> | p in shape }`.
///
/// Extents are lazy expression trees, evaluated on [`Extent::query`]. Building one never samples
/// the shape, so composing the extents of many trails stays exact. Two operations make up the
/// algebra:
///
/// - [`Extent::rebase`] moves the shape: `rebase(d, f)(v) = f(v) + <v, d>`
/// - [`Extent::union`] overlays two shapes: `union(f, g)(v) = max(f(v), g(v))`
///
/// [`Extent::Empty`] is the union identity and describes no shape at all, so it queries to
/// negative infinity everywhere.
#[derive(Clone)]
pub enum Extent<T, V> {
  Empty,
  /// a single point at the given displacement from the origin
  Point(V),
  /// a segment with its start at the origin
  Segment(Segment<V>),
  Rebased {
    inner: Arc<Extent<T, V>>,
    by: V,
  },
  /// never nested: unions of unions are flattened, and never hold `Empty`
  Union(Arc<Vec<Extent<T, V>>>),
  Custom(Arc<dyn Fn(V) -> T + Send + Sync>),
}

impl<T, V> Default for Extent<T, V> {
  fn default() -> Self {
    Self::Empty
  }
}

impl<T, V> Extent<T, V> {
  pub fn from_fn(f: impl Fn(V) -> T + Send + Sync + 'static) -> Self {
    Self::Custom(Arc::new(f))
  }

  pub fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }
}

impl<T, V> Extent<T, V>
where
  T: Scalar,
  V: InnerProductSpace<T>,
{
  pub fn query(&self, direction: V) -> T {
    match self {
      Self::Empty => T::neg_infinity(),
      Self::Point(p) => p.dot(direction),
      Self::Segment(segment) => segment.support(direction),
      Self::Rebased { inner, by } => inner.query(direction) + direction.dot(*by),
      Self::Union(parts) => parts
        .iter()
        .map(|part| part.query(direction))
        .fold(T::neg_infinity(), T::max),
      Self::Custom(f) => f(direction),
    }
  }

  /// Translate the described shape by `by`.
  ///
  /// Consecutive rebases collapse into one, so `rebase(d1, rebase(d2, f))` is structurally
  /// `rebase(d1 + d2, f)`.
  #[must_use]
  pub fn rebase(self, by: V) -> Self {
    match self {
      Self::Empty => Self::Empty,
      Self::Point(p) => Self::Point(p + by),
      Self::Rebased { inner, by: previous } => Self::Rebased {
        inner,
        by: previous + by,
      },
      other => Self::Rebased {
        inner: Arc::new(other),
        by,
      },
    }
  }

  #[must_use]
  pub fn union(self, other: Self) -> Self {
    match (self, other) {
      (Self::Empty, other) => other,
      (this, Self::Empty) => this,
      (Self::Union(mut parts), Self::Union(others)) => {
        Arc::make_mut(&mut parts).extend(others.iter().cloned());
        Self::Union(parts)
      }
      (Self::Union(mut parts), other) => {
        Arc::make_mut(&mut parts).push(other);
        Self::Union(parts)
      }
      (this, Self::Union(others)) => {
        let mut parts = Vec::with_capacity(others.len() + 1);
        parts.push(this);
        parts.extend(others.iter().cloned());
        Self::Union(Arc::new(parts))
      }
      (this, other) => Self::Union(Arc::new(vec![this, other])),
    }
  }

  /// union of any number of extents, built in one pass
  pub fn unions(iter: impl IntoIterator<Item = Self>) -> Self {
    let mut parts = Vec::new();
    for extent in iter {
      match extent {
        Self::Empty => {}
        Self::Union(others) => parts.extend(others.iter().cloned()),
        other => parts.push(other),
      }
    }
    match parts.len() {
      0 => Self::Empty,
      1 => parts.pop().unwrap_or_default(),
      _ => Self::Union(Arc::new(parts)),
    }
  }

  /// the shape's width measured along `direction`, `f(d) + f(-d)`
  pub fn diameter(&self, direction: V) -> T {
    self.query(direction) + self.query(-direction)
  }
}

impl<T: Scalar> Extent<T, Vec2<T>> {
  /// Axis aligned bounds, read from the support in the four axis directions.
  pub fn bounding_box(&self) -> Option<Box2<T>> {
    if self.is_empty() {
      return None;
    }
    let x = Vec2::unit_x();
    let y = Vec2::unit_y();
    Some(Box2::new(
      point2(-self.query(-x), -self.query(-y)),
      point2(self.query(x), self.query(y)),
    ))
  }
}

impl<T, V: fmt::Debug> fmt::Debug for Extent<T, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Empty => write!(f, "Empty"),
      Self::Point(p) => f.debug_tuple("Point").field(p).finish(),
      Self::Segment(s) => f.debug_tuple("Segment").field(s).finish(),
      Self::Rebased { inner, by } => f
        .debug_struct("Rebased")
        .field("inner", inner)
        .field("by", by)
        .finish(),
      Self::Union(parts) => f.debug_tuple("Union").field(parts).finish(),
      Self::Custom(_) => write!(f, "Custom(..)"),
    }
  }
}

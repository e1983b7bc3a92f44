use std::cmp::Ordering;

/// A deterministic total order over the structure of a value.
///
/// Floating point `PartialOrd` can not key an ordered set because NaN is unordered. Scalars
/// that are `==` compare `Equal` here too, so `-0.0` and `0.0` are the same key; everything
/// else follows the IEEE 754 total order, which gives NaN a fixed rank. Composite values
/// compare lexicographically.
pub trait StructuralOrd {
  fn structural_cmp(&self, other: &Self) -> Ordering;

  #[inline]
  fn structural_eq(&self, other: &Self) -> bool {
    self.structural_cmp(other) == Ordering::Equal
  }
}

impl StructuralOrd for f32 {
  #[inline(always)]
  fn structural_cmp(&self, other: &Self) -> Ordering {
    if self == other {
      Ordering::Equal
    } else {
      self.total_cmp(other)
    }
  }
}

impl StructuralOrd for f64 {
  #[inline(always)]
  fn structural_cmp(&self, other: &Self) -> Ordering {
    if self == other {
      Ordering::Equal
    } else {
      self.total_cmp(other)
    }
  }
}

impl StructuralOrd for bool {
  #[inline(always)]
  fn structural_cmp(&self, other: &Self) -> Ordering {
    self.cmp(other)
  }
}

impl<T: StructuralOrd> StructuralOrd for [T] {
  fn structural_cmp(&self, other: &Self) -> Ordering {
    for (a, b) in self.iter().zip(other.iter()) {
      match a.structural_cmp(b) {
        Ordering::Equal => {}
        non_eq => return non_eq,
      }
    }
    self.len().cmp(&other.len())
  }
}

impl<T: StructuralOrd> StructuralOrd for Vec<T> {
  #[inline]
  fn structural_cmp(&self, other: &Self) -> Ordering {
    self.as_slice().structural_cmp(other.as_slice())
  }
}

#[test]
fn total_order_on_floats() {
  assert_eq!((-0.0_f64).structural_cmp(&0.0), Ordering::Equal);
  assert_eq!((-0.0_f32).structural_cmp(&-1e-30), Ordering::Greater);
  assert_eq!(1.0_f64.structural_cmp(&f64::NAN), Ordering::Less);
  assert!(f32::NAN.structural_eq(&f32::NAN));
  assert_eq!(1.0_f32.structural_cmp(&f32::INFINITY), Ordering::Less);
  assert_eq!(
    vec![1.0_f64, 2.0].structural_cmp(&vec![1.0, 2.0, 0.0]),
    Ordering::Less
  );
  assert_eq!(vec![1.0_f64, 3.0].structural_cmp(&vec![1.0, 2.0, 0.0]), Ordering::Greater);
}

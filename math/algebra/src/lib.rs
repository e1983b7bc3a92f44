//! Scalar, vector and affine point types the trail and path crates are generic over.
//!
//! Free vectors ([`Vec2`]) and positions ([`Point`]) are distinct types: a [`Mat3`] moves a
//! point by its translation but only rotates, scales or shears a vector.

mod mat;
mod order;
mod point;
mod scalar;
mod vec;

pub use mat::*;
pub use order::*;
pub use point::*;
pub use scalar::*;
pub use vec::*;

pub use num_traits::{Float, One, Zero};
pub use serde::{Deserialize, Serialize};

mod affine;
mod mat3;

pub use affine::*;
pub use mat3::*;

mod dimension;
mod vec2;

pub use dimension::*;
pub use vec2::*;

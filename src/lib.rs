//! Generic fixed-dimension vector math.

#[macro_use]
mod macros;

pub mod num;
pub mod vector;

pub use num::{Element, Sqrt};
pub use vector::{FixedVector, IndexOutOfRange, Vector3, dot, normalize};

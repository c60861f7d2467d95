//! Bounding volumes over vertex sets.

mod bounding_box;
pub use bounding_box::*;
mod bounding_sphere;
pub use bounding_sphere::*;
mod traits;
pub use traits::*;

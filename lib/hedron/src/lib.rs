//! Mesh data model: per-vertex attribute arrays, faces, strips, skin bindings, and an in-memory
//! block [Document] which stores them.
//!
//! Nothing in here edits geometry; this only describes it.

mod data;
pub use data::*;

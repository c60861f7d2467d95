//! Vertex-set editing for indexed triangle meshes which keeps everything that refers to vertices
//! by index consistent: faces, strips, skin weights, and the derived skin partition cache.
//!
//! The building blocks ([usage], [compact], [remap], [dedup], [spatial], [correspond], [skin])
//! work on owned working copies and never touch storage. [ops] strings them together into
//! operations over a [MeshHost](host::MeshHost), reading everything, validating it, and only then
//! writing back, so that a failed operation leaves the host as it was.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod error;
pub use error::*;

pub mod compact;
pub mod correspond;
pub mod dedup;
pub mod host;
pub mod ops;
pub mod remap;
pub mod skin;
pub mod spatial;
pub mod usage;

pub use host::MeshHost;
pub use ops::{Context, Notice, Operation, Outcome, Registry};

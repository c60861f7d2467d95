//! The capabilities this library needs from whatever stores the meshes it edits.
//!
//! Hosts typically expose fields by name and runtime type tag; implementors of [MeshHost] wrap
//! that up so the algorithms here only ever deal in typed, semantic accessors.

mod document;

use hedron::{
    primitive::{
        attribute::{AttributeArrays, Texcoord},
        Strip, Triangle,
    },
    skin::BoneWeights,
    BlockKind, PackedVertex,
};
use meshmend_common::ArrayIndex;

use crate::{spatial::BoundingSphere, Result};

/// A store of mesh blocks which can be read and edited one semantic field at a time.
///
/// Reads return owned working copies; nothing returned from a read aliases host storage.
/// Writes replace a field wholesale, resizing it as needed.
pub trait MeshHost {
    /// Refers to a single block.
    type Handle: Copy + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display;
    /// The integer type the host stores vertex indices as.
    type Index: ArrayIndex;

    /// Every live block, in storage order.
    fn blocks(&self) -> Vec<Self::Handle>;
    /// The kind of a block, or `None` if it doesn't exist.
    fn kind(&self, block: Self::Handle) -> Option<BlockKind>;
    /// Delete a block. Links pointing at it stop resolving.
    fn remove_block(&mut self, block: Self::Handle) -> Result<()>;
    /// Whether the whole store is eligible for batch bounds updates.
    fn is_batch_target(&self) -> bool;

    /// The geometry a shape links to.
    fn shape_data(&self, shape: Self::Handle) -> Option<Self::Handle>;
    /// The shape which links to a geometry block.
    fn owning_shape(&self, data: Self::Handle) -> Option<Self::Handle>;
    /// The skin instance a shape (or packed shape) links to.
    fn skin_instance(&self, shape: Self::Handle) -> Option<Self::Handle>;
    /// The skin data a skin instance links to.
    fn skin_data(&self, instance: Self::Handle) -> Option<Self::Handle>;
    /// The partition linked directly from a skin instance.
    fn instance_partition(&self, instance: Self::Handle) -> Option<Self::Handle>;
    /// The partition linked from skin data, as used by older layouts.
    fn data_partition(&self, skin_data: Self::Handle) -> Option<Self::Handle>;

    /// The vertex count stored separately from the vertex arrays.
    fn declared_vertex_count(&self, data: Self::Handle) -> Result<usize>;
    fn attributes(&self, data: Self::Handle) -> Result<AttributeArrays>;
    /// Replace every vertex array and the declared vertex count.
    fn set_attributes(&mut self, data: Self::Handle, arrays: AttributeArrays) -> Result<()>;
    /// Replace only the UV sets, leaving every other array and the declared count alone.
    fn set_texcoords(&mut self, data: Self::Handle, texcoords: Vec<Vec<Texcoord>>) -> Result<()>;
    fn triangles(&self, block: Self::Handle) -> Result<Vec<Triangle<Self::Index>>>;
    fn set_triangles(
        &mut self,
        block: Self::Handle,
        triangles: Vec<Triangle<Self::Index>>,
    ) -> Result<()>;
    fn strips(&self, data: Self::Handle) -> Result<Vec<Strip<Self::Index>>>;
    fn set_strips(&mut self, data: Self::Handle, strips: Vec<Strip<Self::Index>>) -> Result<()>;
    /// Whether a geometry block belongs to a layout which expects bounding-box-centered bounds.
    fn uses_legacy_bounds(&self, data: Self::Handle) -> Result<bool>;
    fn set_bounds(&mut self, block: Self::Handle, bounds: BoundingSphere<f32>) -> Result<()>;

    fn bones(&self, skin_data: Self::Handle) -> Result<Vec<BoneWeights<Self::Index>>>;
    /// Check that [set_bones](Self::set_bones) would accept `bones`, without writing anything.
    fn check_bones(&self, bones: &[BoneWeights<Self::Index>]) -> Result<()>;
    /// Replace every bone's weight list, updating each bone's declared vertex count to match.
    fn set_bones(
        &mut self,
        skin_data: Self::Handle,
        bones: Vec<BoneWeights<Self::Index>>,
    ) -> Result<()>;

    fn packed_vertices(&self, block: Self::Handle) -> Result<Vec<PackedVertex>>;
    /// Whether a block's packed vertices carry meaningful normals.
    fn packed_normals(&self, block: Self::Handle) -> Result<bool>;
    fn set_packed_vertices(&mut self, block: Self::Handle, vertices: Vec<PackedVertex>)
        -> Result<()>;
}

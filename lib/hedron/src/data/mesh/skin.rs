//! Skinning data: which bones influence which vertices, and the derived GPU partition cache.

use crate::{BlockId, PackedVertex};

/// The influence of a bone on a single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexWeight<Idx = u16> {
    pub index: Idx,
    pub weight: f32,
}

impl<Idx> VertexWeight<Idx> {
    #[inline]
    pub fn new(index: Idx, weight: f32) -> Self {
        Self { index, weight }
    }
}

/// The set of vertices influenced by one bone.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoneWeights<Idx = u16> {
    pub weights: Vec<VertexWeight<Idx>>,
}

impl<Idx> BoneWeights<Idx> {
    /// The number of vertices this bone influences.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.weights.len()
    }
}

impl<Idx> FromIterator<VertexWeight<Idx>> for BoneWeights<Idx> {
    fn from_iter<I: IntoIterator<Item = VertexWeight<Idx>>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

/// Binds a shape to a skeleton.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkinInstance {
    pub data: Option<BlockId>,
    pub partition: Option<BlockId>,
}

/// A bone entry as stored in a document; the declared vertex count is stored alongside the
/// weight list and must be kept in sync with it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoneData {
    pub num_vertices: u16,
    pub vertex_weights: Vec<VertexWeight<u16>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkinData {
    pub bones: Vec<BoneData>,
    /// Older layouts hang the partition off the skin data instead of the skin instance.
    pub partition: Option<BlockId>,
}

/// A regrouping of skin weights for GPU skinning.
///
/// This is derived entirely from the vertex and bone layout of its shape, so any edit to either
/// leaves it stale. Nothing in this library can rebuild it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkinPartition {
    pub has_normals: bool,
    pub vertex_data: Vec<PackedVertex>,
}

//! [MeshHost] for the in-memory [Document] store.

use hedron::{
    primitive::{
        attribute::{AttributeArrays, Texcoord},
        Strip, Triangle,
    },
    skin::{BoneData, BoneWeights},
    Block, BlockId, BlockKind, Document, DocumentError, PackedVertex,
};

use super::MeshHost;
use crate::{spatial::BoundingSphere, Result};

/// Version bits which, combined with user version 11, mark a layout with box-centered bounds.
const LEGACY_VERSION_BITS: u32 = 0x14000000;
const LEGACY_USER_VERSION: u32 = 11;
/// Consistency flag marking geometry with box-centered bounds.
const VOLATILE_FLAG: u16 = 0x8000;
/// User version 2 of documents whose packed shapes can be bounds-updated in bulk.
const BATCH_USER_VERSION_2: u32 = 130;

const BONE_COUNT_FIELD: &str = "bone num_vertices";

fn narrow(field: &'static str, len: usize) -> Result<u16> {
    Ok(u16::try_from(len).map_err(|_| DocumentError::Overflow { field, len })?)
}

fn wrong_kind(doc: &Document, id: BlockId, expected: BlockKind) -> crate::Error {
    let err = match Document::kind(doc, id) {
        Some(found) => DocumentError::WrongKind {
            id,
            expected,
            found,
        },
        None => DocumentError::MissingBlock(id),
    };
    err.into()
}

impl MeshHost for Document {
    type Handle = BlockId;
    type Index = u16;

    fn blocks(&self) -> Vec<BlockId> {
        self.ids().collect()
    }

    fn kind(&self, block: BlockId) -> Option<BlockKind> {
        Document::kind(self, block)
    }

    fn remove_block(&mut self, block: BlockId) -> Result<()> {
        self.remove(block)
            .map(|_| ())
            .ok_or_else(|| DocumentError::MissingBlock(block).into())
    }

    fn is_batch_target(&self) -> bool {
        self.header.user_version_2 == BATCH_USER_VERSION_2
    }

    fn shape_data(&self, shape: BlockId) -> Option<BlockId> {
        let data = self.resolve(self.shape(shape).ok()?.data)?;
        (Document::kind(self, data) == Some(BlockKind::Geometry)).then_some(data)
    }

    fn owning_shape(&self, data: BlockId) -> Option<BlockId> {
        self.owner_of(data)
    }

    fn skin_instance(&self, shape: BlockId) -> Option<BlockId> {
        let link = match self.get(shape)? {
            Block::Shape(s) => s.skin_instance,
            Block::PackedShape(s) => s.skin_instance,
            _ => None,
        };
        self.resolve(link)
            .filter(|&i| Document::kind(self, i) == Some(BlockKind::SkinInstance))
    }

    fn skin_data(&self, instance: BlockId) -> Option<BlockId> {
        self.resolve(self.skin_instance(instance).ok()?.data)
            .filter(|&d| Document::kind(self, d) == Some(BlockKind::SkinData))
    }

    fn instance_partition(&self, instance: BlockId) -> Option<BlockId> {
        self.resolve(self.skin_instance(instance).ok()?.partition)
            .filter(|&p| Document::kind(self, p) == Some(BlockKind::SkinPartition))
    }

    fn data_partition(&self, skin_data: BlockId) -> Option<BlockId> {
        self.resolve(self.skin_data(skin_data).ok()?.partition)
            .filter(|&p| Document::kind(self, p) == Some(BlockKind::SkinPartition))
    }

    fn declared_vertex_count(&self, data: BlockId) -> Result<usize> {
        Ok(self.geometry(data)?.num_vertices as usize)
    }

    fn attributes(&self, data: BlockId) -> Result<AttributeArrays> {
        let geom = self.geometry(data)?;
        Ok(AttributeArrays {
            positions: geom.vertices.clone(),
            normals: geom.normals.clone(),
            colors: geom.vertex_colors.clone(),
            texcoords: geom.uv_sets.clone(),
        })
    }

    fn set_attributes(&mut self, data: BlockId, arrays: AttributeArrays) -> Result<()> {
        let num_vertices = narrow("num_vertices", arrays.len())?;
        let geom = self.geometry_mut(data)?;
        geom.num_vertices = num_vertices;
        geom.vertices = arrays.positions;
        geom.normals = arrays.normals;
        geom.vertex_colors = arrays.colors;
        geom.uv_sets = arrays.texcoords;
        Ok(())
    }

    fn set_texcoords(&mut self, data: BlockId, texcoords: Vec<Vec<Texcoord>>) -> Result<()> {
        self.geometry_mut(data)?.uv_sets = texcoords;
        Ok(())
    }

    fn triangles(&self, block: BlockId) -> Result<Vec<Triangle<u16>>> {
        match self.get(block) {
            Some(Block::Geometry(g)) => Ok(g.triangles.clone()),
            Some(Block::PackedShape(s)) => Ok(s.triangles.clone()),
            _ => Err(wrong_kind(self, block, BlockKind::Geometry)),
        }
    }

    fn set_triangles(&mut self, block: BlockId, triangles: Vec<Triangle<u16>>) -> Result<()> {
        match self.get_mut(block) {
            Some(Block::Geometry(g)) => g.triangles = triangles,
            Some(Block::PackedShape(s)) => s.triangles = triangles,
            _ => return Err(wrong_kind(self, block, BlockKind::Geometry)),
        }
        Ok(())
    }

    fn strips(&self, data: BlockId) -> Result<Vec<Strip<u16>>> {
        Ok(self.geometry(data)?.strips.clone())
    }

    fn set_strips(&mut self, data: BlockId, strips: Vec<Strip<u16>>) -> Result<()> {
        self.geometry_mut(data)?.strips = strips;
        Ok(())
    }

    fn uses_legacy_bounds(&self, data: BlockId) -> Result<bool> {
        let flags = self.geometry(data)?.consistency_flags;
        let legacy_version = (self.header.version & LEGACY_VERSION_BITS) != 0
            && self.header.user_version == LEGACY_USER_VERSION;
        Ok(legacy_version || (flags & VOLATILE_FLAG) != 0)
    }

    fn set_bounds(&mut self, block: BlockId, bounds: BoundingSphere<f32>) -> Result<()> {
        let BoundingSphere { center, radius } = bounds;
        match self.get_mut(block) {
            Some(Block::Geometry(g)) => {
                g.center = center;
                g.radius = radius;
            }
            Some(Block::PackedShape(s)) => {
                s.center = center;
                s.radius = radius;
            }
            _ => return Err(wrong_kind(self, block, BlockKind::Geometry)),
        }
        Ok(())
    }

    fn bones(&self, skin_data: BlockId) -> Result<Vec<BoneWeights<u16>>> {
        Ok(self
            .skin_data(skin_data)?
            .bones
            .iter()
            .map(|b| BoneWeights {
                weights: b.vertex_weights.clone(),
            })
            .collect())
    }

    fn check_bones(&self, bones: &[BoneWeights<u16>]) -> Result<()> {
        bones
            .iter()
            .try_for_each(|b| narrow(BONE_COUNT_FIELD, b.vertex_count()).map(|_| ()))
    }

    fn set_bones(&mut self, skin_data: BlockId, bones: Vec<BoneWeights<u16>>) -> Result<()> {
        let bones = bones
            .into_iter()
            .map(|b| {
                Ok(BoneData {
                    num_vertices: narrow(BONE_COUNT_FIELD, b.vertex_count())?,
                    vertex_weights: b.weights,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.skin_data_mut(skin_data)?.bones = bones;
        Ok(())
    }

    fn packed_vertices(&self, block: BlockId) -> Result<Vec<PackedVertex>> {
        match self.get(block) {
            Some(Block::SkinPartition(p)) => Ok(p.vertex_data.clone()),
            Some(Block::PackedShape(s)) => Ok(s.vertex_data.clone()),
            _ => Err(wrong_kind(self, block, BlockKind::PackedShape)),
        }
    }

    fn packed_normals(&self, block: BlockId) -> Result<bool> {
        match self.get(block) {
            Some(Block::SkinPartition(p)) => Ok(p.has_normals),
            Some(Block::PackedShape(s)) => Ok(s.has_normals),
            _ => Err(wrong_kind(self, block, BlockKind::PackedShape)),
        }
    }

    fn set_packed_vertices(&mut self, block: BlockId, vertices: Vec<PackedVertex>) -> Result<()> {
        match self.get_mut(block) {
            Some(Block::SkinPartition(p)) => p.vertex_data = vertices,
            Some(Block::PackedShape(s)) => s.vertex_data = vertices,
            _ => return Err(wrong_kind(self, block, BlockKind::PackedShape)),
        }
        Ok(())
    }
}

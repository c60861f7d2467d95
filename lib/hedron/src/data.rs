//! Block storage for mesh documents.
//!
//! # See Also
//!
//! * [Document]

mod mesh;

pub use mesh::*;

/// Handle to a block within a [Document].
///
/// Handles stay valid across removal of other blocks; a removed block's handle is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BlockId(pub u32);

impl BlockId {
    #[inline]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    Shape,
    Geometry,
    SkinInstance,
    SkinData,
    SkinPartition,
    PackedShape,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BlockKind::Shape => "shape",
            BlockKind::Geometry => "geometry data",
            BlockKind::SkinInstance => "skin instance",
            BlockKind::SkinData => "skin data",
            BlockKind::SkinPartition => "skin partition",
            BlockKind::PackedShape => "packed shape",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    Shape(Shape),
    Geometry(GeometryData),
    SkinInstance(skin::SkinInstance),
    SkinData(skin::SkinData),
    SkinPartition(skin::SkinPartition),
    PackedShape(PackedShape),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Shape(_) => BlockKind::Shape,
            Block::Geometry(_) => BlockKind::Geometry,
            Block::SkinInstance(_) => BlockKind::SkinInstance,
            Block::SkinData(_) => BlockKind::SkinData,
            Block::SkinPartition(_) => BlockKind::SkinPartition,
            Block::PackedShape(_) => BlockKind::PackedShape,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("block {0} does not exist")]
    MissingBlock(BlockId),
    #[error("block {id} is a {found}, expected a {expected}")]
    WrongKind {
        id: BlockId,
        expected: BlockKind,
        found: BlockKind,
    },
    #[error("{field} cannot hold {len} entries")]
    Overflow { field: &'static str, len: usize },
}

/// Format version information; some algorithms behave differently for older layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub version: u32,
    pub user_version: u32,
    pub user_version_2: u32,
}

/// A set of blocks which refer to each other by [BlockId].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub header: Header,
    blocks: Vec<Option<Block>>,
}

macro_rules! typed_block {
    ($get:ident, $get_mut:ident: $Variant:ident => $T:ty) => {
        /// Get a block, failing unless it exists and is of the expected kind.
        pub fn $get(&self, id: BlockId) -> Result<&$T, DocumentError> {
            match self.get(id) {
                Some(Block::$Variant(b)) => Ok(b),
                Some(other) => Err(DocumentError::WrongKind {
                    id,
                    expected: BlockKind::$Variant,
                    found: other.kind(),
                }),
                None => Err(DocumentError::MissingBlock(id)),
            }
        }

        /// Mutably get a block, failing unless it exists and is of the expected kind.
        pub fn $get_mut(&mut self, id: BlockId) -> Result<&mut $T, DocumentError> {
            match self.get_mut(id) {
                Some(Block::$Variant(b)) => Ok(b),
                Some(other) => Err(DocumentError::WrongKind {
                    id,
                    expected: BlockKind::$Variant,
                    found: other.kind(),
                }),
                None => Err(DocumentError::MissingBlock(id)),
            }
        }
    };
}

impl Document {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            blocks: Vec::new(),
        }
    }

    /// Add a block, returning its handle.
    pub fn push(&mut self, block: impl Into<Block>) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(Some(block.into()));
        id
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.slot()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.get_mut(id.slot()).and_then(Option::as_mut)
    }

    #[inline]
    pub fn contains(&self, id: BlockId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn kind(&self, id: BlockId) -> Option<BlockKind> {
        self.get(id).map(Block::kind)
    }

    /// Remove a block and return it, if it existed.
    ///
    /// Links pointing at the removed block are left in place but no longer [resolve](Self::resolve).
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let res = self.blocks.get_mut(id.slot()).and_then(Option::take);
        if let Some(block) = &res {
            tracing::debug!(block = %id, kind = %block.kind(), "removed block");
        }
        res
    }

    /// Follow a link, yielding the target only if it still exists.
    #[inline]
    pub fn resolve(&self, link: Option<BlockId>) -> Option<BlockId> {
        link.filter(|&id| self.contains(id))
    }

    /// Iterate through the handles of all live blocks, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.as_ref().map(|_| BlockId(i as u32)))
    }

    /// The number of live blocks.
    pub fn len(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the shape which links to a geometry block, if any.
    pub fn owner_of(&self, data: BlockId) -> Option<BlockId> {
        self.ids().find(|&id| {
            matches!(self.get(id), Some(Block::Shape(shape)) if shape.data == Some(data))
        })
    }

    typed_block!(shape, shape_mut: Shape => Shape);
    typed_block!(geometry, geometry_mut: Geometry => GeometryData);
    typed_block!(skin_instance, skin_instance_mut: SkinInstance => skin::SkinInstance);
    typed_block!(skin_data, skin_data_mut: SkinData => skin::SkinData);
    typed_block!(skin_partition, skin_partition_mut: SkinPartition => skin::SkinPartition);
    typed_block!(packed_shape, packed_shape_mut: PackedShape => PackedShape);
}

macro_rules! impl_into_block {
    ($($Variant:ident => $T:ty),+ $(,)?) => {
        $(
            impl From<$T> for Block {
                #[inline]
                fn from(b: $T) -> Self {
                    Block::$Variant(b)
                }
            }
        )+
    };
}

impl_into_block! {
    Shape => Shape,
    Geometry => GeometryData,
    SkinInstance => skin::SkinInstance,
    SkinData => skin::SkinData,
    SkinPartition => skin::SkinPartition,
    PackedShape => PackedShape,
}

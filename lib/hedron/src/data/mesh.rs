pub mod primitive;
pub mod skin;

use primitive::{
    attribute::{Normal, Position, Rgba, Texcoord},
    Strip, Triangle,
};

use crate::{BlockId, DocumentError};

/// A renderable object referring to separately stored geometry.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub name: String,
    pub data: Option<BlockId>,
    pub skin_instance: Option<BlockId>,
}

/// Geometry stored as separate per-attribute arrays, faces, and strips.
///
/// # Considerations
///
/// * `num_vertices` is stored separately from the arrays and may disagree with them in a
///   corrupt document.
/// * Absent channels are stored as empty arrays.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryData {
    pub num_vertices: u16,
    pub vertices: Vec<Position>,
    pub normals: Vec<Normal>,
    pub vertex_colors: Vec<Rgba>,
    pub uv_sets: Vec<Vec<Texcoord>>,
    pub consistency_flags: u16,
    pub center: Position,
    pub radius: f32,
    pub triangles: Vec<Triangle>,
    pub strips: Vec<Strip>,
}

impl Default for GeometryData {
    fn default() -> Self {
        Self {
            num_vertices: 0,
            vertices: Vec::new(),
            normals: Vec::new(),
            vertex_colors: Vec::new(),
            uv_sets: Vec::new(),
            consistency_flags: 0,
            center: Position::origin(),
            radius: 0.0,
            triangles: Vec::new(),
            strips: Vec::new(),
        }
    }
}

impl GeometryData {
    /// Construct geometry from positions and faces, with the declared vertex count filled in.
    ///
    /// # Errors
    ///
    /// * [`Overflow`](DocumentError::Overflow) if there are more vertices than the declared count
    ///   can hold.
    pub fn new(vertices: Vec<Position>, triangles: Vec<Triangle>) -> Result<Self, DocumentError> {
        let num_vertices = u16::try_from(vertices.len()).map_err(|_| DocumentError::Overflow {
            field: "num_vertices",
            len: vertices.len(),
        })?;
        Ok(Self {
            num_vertices,
            vertices,
            triangles,
            ..Default::default()
        })
    }
}

/// An interleaved vertex, as used by packed shapes and skin partitions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedVertex {
    pub vertex: Position,
    pub uv: Texcoord,
    pub normal: Normal,
}

impl PackedVertex {
    pub fn new(vertex: Position, uv: Texcoord) -> Self {
        Self {
            vertex,
            uv,
            normal: Normal::zeros(),
        }
    }
}

/// A shape with its geometry stored inline as interleaved vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedShape {
    pub name: String,
    pub has_normals: bool,
    pub vertex_data: Vec<PackedVertex>,
    pub triangles: Vec<Triangle>,
    pub center: Position,
    pub radius: f32,
    pub skin_instance: Option<BlockId>,
}

impl Default for PackedShape {
    fn default() -> Self {
        Self {
            name: String::new(),
            has_normals: false,
            vertex_data: Vec::new(),
            triangles: Vec::new(),
            center: Position::origin(),
            radius: 0.0,
            skin_instance: None,
        }
    }
}

use nalgebra::{Point2, Point3, Point4, Vector3};

/// The per-vertex channels a mesh may carry.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeUsage {
    Position,
    Normal,
    Color,
    Texcoord(u32),
}

impl std::fmt::Display for AttributeUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeUsage::Position => f.write_str("vertex positions"),
            AttributeUsage::Normal => f.write_str("vertex normals"),
            AttributeUsage::Color => f.write_str("vertex colors"),
            AttributeUsage::Texcoord(set) => write!(f, "UV set {set}"),
        }
    }
}

pub type Position = Point3<f32>;
pub type Normal = Vector3<f32>;
pub type Rgba = Point4<f32>;
pub type Texcoord = Point2<f32>;

#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    #[error("{usage} has {found} entries, but the vertex set has {expected}")]
    Length {
        usage: AttributeUsage,
        expected: usize,
        found: usize,
    },
}

/// A bundle of parallel per-vertex arrays.
///
/// # Invariants
///
/// * Every non-empty optional array (`normals`, `colors`, and each UV set) has exactly
///   `positions.len()` entries. An empty optional array means the channel is absent; an empty UV
///   set still occupies its set number.
///
/// Nothing here enforces that on construction, since the arrays usually come straight out of a
/// host store; call [AttributeArrays::validate] before trusting them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeArrays {
    pub positions: Vec<Position>,
    pub normals: Vec<Normal>,
    pub colors: Vec<Rgba>,
    pub texcoords: Vec<Vec<Texcoord>>,
}

impl AttributeArrays {
    /// Construct a vertex set with positions only.
    pub fn from_positions(positions: impl Into<Vec<Position>>) -> Self {
        Self {
            positions: positions.into(),
            ..Default::default()
        }
    }

    /// The number of vertices in the set, as determined by the position array.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    #[inline]
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Iterate over the usage and length of every present co-array (everything but positions).
    pub fn co_array_lengths(&self) -> impl Iterator<Item = (AttributeUsage, usize)> + '_ {
        let normals = self
            .has_normals()
            .then_some((AttributeUsage::Normal, self.normals.len()));
        let colors = self
            .has_colors()
            .then_some((AttributeUsage::Color, self.colors.len()));
        // filtered after enumerating so that set numbers match storage
        let uvs = self
            .texcoords
            .iter()
            .enumerate()
            .filter(|(_, uv)| !uv.is_empty())
            .map(|(set, uv)| (AttributeUsage::Texcoord(set as u32), uv.len()));
        normals.into_iter().chain(colors).chain(uvs)
    }

    /// Check that every present co-array agrees with the position array in length.
    ///
    /// # Errors
    ///
    /// * [`Length`](AttributeError::Length) for the first co-array found to disagree.
    pub fn validate(&self) -> Result<(), AttributeError> {
        let expected = self.len();
        match self
            .co_array_lengths()
            .find(|&(_, found)| found != expected)
        {
            Some((usage, found)) => Err(AttributeError::Length {
                usage,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }

    /// Whether vertices `a` and `b` are exactly equal across every present channel.
    ///
    /// # Panics
    ///
    /// * if either index is out of range of a present channel
    pub fn same_vertex(&self, a: usize, b: usize) -> bool {
        self.positions[a] == self.positions[b]
            && (!self.has_normals() || self.normals[a] == self.normals[b])
            && (!self.has_colors() || self.colors[a] == self.colors[b])
            && self
                .texcoords
                .iter()
                .all(|uv| uv.is_empty() || uv[a] == uv[b])
    }
}

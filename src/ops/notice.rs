use hedron::primitive::attribute::Position;

use crate::correspond::MatchReport;

/// Something an operator should be told about a cast.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Notice<Hd> {
    /// The selection was already in the requested state; nothing was written.
    NothingToDo,
    MergedVertices { merged: usize },
    RemovedVertices { removed: usize, remaining: usize },
    /// Skin weights were dropped along with the vertices they referred to.
    PrunedWeights { dropped: usize },
    /// A stale skin partition was deleted and needs to be rebuilt by hand.
    PartitionRemoved { partition: Hd },
    BoundsUpdated {
        block: Hd,
        center: Position,
        radius: f32,
    },
    FlippedUvs { vertices: usize },
    FlippedFaces { triangles: usize },
    RemovedTriangles { degenerate: usize, duplicate: usize },
    CopiedVertices { vertices: usize },
    Transplanted(MatchReport),
}

impl<Hd> Notice<Hd> {
    /// Whether this needs manual follow-up.
    pub fn is_warning(&self) -> bool {
        match self {
            Notice::PartitionRemoved { .. } => true,
            Notice::Transplanted(report) => !report.is_complete(),
            _ => false,
        }
    }
}

impl<Hd: std::fmt::Display> std::fmt::Display for Notice<Hd> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::NothingToDo => f.write_str("nothing to do"),
            Notice::MergedVertices { merged } => write!(f, "merged {merged} duplicate vertices"),
            Notice::RemovedVertices { removed, remaining } => {
                write!(f, "removed {removed} vertices, {remaining} remain")
            }
            Notice::PrunedWeights { dropped } => {
                write!(f, "dropped {dropped} skin weights of removed vertices")
            }
            Notice::PartitionRemoved { partition } => write!(
                f,
                "skin partition {partition} was removed; it needs to be regenerated"
            ),
            Notice::BoundsUpdated {
                block,
                center,
                radius,
            } => write!(
                f,
                "bounds of {block} set to center ({}, {}, {}), radius {radius}",
                center.x, center.y, center.z
            ),
            Notice::FlippedUvs { vertices } => write!(f, "flipped UVs of {vertices} vertices"),
            Notice::FlippedFaces { triangles } => write!(f, "flipped {triangles} triangles"),
            Notice::RemovedTriangles {
                degenerate,
                duplicate,
            } => write!(
                f,
                "removed {} triangles ({degenerate} degenerate, {duplicate} duplicate)",
                degenerate + duplicate
            ),
            Notice::CopiedVertices { vertices } => {
                write!(f, "copied {vertices} vertices to the clipboard")
            }
            Notice::Transplanted(report) => write!(f, "{report}"),
        }
    }
}

/// Everything that came of a successful cast.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<Hd> {
    pub notices: Vec<Notice<Hd>>,
}

impl<Hd> Outcome<Hd> {
    /// Whether the cast left the host as it was.
    pub fn is_noop(&self) -> bool {
        self.notices.iter().all(|n| matches!(n, Notice::NothingToDo))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Notice<Hd>> + '_ {
        self.notices.iter().filter(|n| n.is_warning())
    }
}

impl<Hd: std::fmt::Display> Outcome<Hd> {
    pub(crate) fn log(&self) {
        for notice in &self.notices {
            if notice.is_warning() {
                tracing::warn!("{notice}");
            } else {
                tracing::info!("{notice}");
            }
        }
    }
}

impl<Hd> From<Vec<Notice<Hd>>> for Outcome<Hd> {
    fn from(notices: Vec<Notice<Hd>>) -> Self {
        Self { notices }
    }
}

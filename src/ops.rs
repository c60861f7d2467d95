//! Named edits which a host can present to an operator, and the registry listing them.
//!
//! Each [Operation] pairs an applicability test over the current selection with a cast function.
//! Casting goes through [Operation::cast], which checks applicability and mode, treats an empty
//! vertex set as nothing to do, and logs every [Notice] produced.

mod bounds;
mod clipboard;
pub use clipboard::*;
mod faces;
mod notice;
pub use notice::*;
mod transfer;
mod uv;
mod vertices;

use hedron::{primitive::attribute::AttributeArrays, BlockKind};

use crate::{host::MeshHost, Error, Extent, Result};

/// Per-cast inputs which don't come from the host.
pub struct Context<'c> {
    /// Index into the operation's [modes](Operation::modes).
    pub mode: usize,
    pub clipboard: &'c mut dyn Clipboard,
}

impl<'c> Context<'c> {
    pub fn new(clipboard: &'c mut dyn Clipboard) -> Self {
        Self { mode: 0, clipboard }
    }

    pub fn with_mode(mut self, mode: usize) -> Self {
        self.mode = mode;
        self
    }
}

type Applies<H> = fn(&H, Option<<H as MeshHost>::Handle>) -> bool;
type Cast<H> = fn(
    &mut H,
    Option<<H as MeshHost>::Handle>,
    &mut Context<'_>,
) -> Result<Vec<Notice<<H as MeshHost>::Handle>>>;

/// A single registered edit.
pub struct Operation<H: MeshHost> {
    /// The menu this is listed under.
    pub page: &'static str,
    pub name: &'static str,
    /// Sub-modes an operator chooses between; empty if there's only one way to cast this.
    pub modes: &'static [&'static str],
    applies: Applies<H>,
    cast: Cast<H>,
}

impl<H: MeshHost> Operation<H> {
    /// Whether this can be cast on `selection`. A selection of `None` means the whole host.
    #[inline]
    pub fn applies(&self, host: &H, selection: Option<H::Handle>) -> bool {
        (self.applies)(host, selection)
    }

    /// Cast this on `selection`.
    ///
    /// # Errors
    ///
    /// * [`NotApplicable`](Error::NotApplicable) if [Self::applies] is false for `selection`.
    /// * [`UnknownMode`](Error::UnknownMode) if `ctx.mode` isn't one of [Self::modes].
    /// * Anything the cast itself fails with, except [`EmptyInput`](Error::EmptyInput), which
    ///   yields an [Outcome] of [`NothingToDo`](Notice::NothingToDo).
    ///
    /// Whatever the error, the host has not been modified.
    pub fn cast(
        &self,
        host: &mut H,
        selection: Option<H::Handle>,
        ctx: &mut Context<'_>,
    ) -> Result<Outcome<H::Handle>> {
        if !self.applies(host, selection) {
            return Err(Error::NotApplicable(self.name));
        }
        if ctx.mode >= self.modes.len().max(1) {
            return Err(Error::UnknownMode {
                op: self.name,
                mode: ctx.mode,
            });
        }
        let _span = tracing::info_span!("cast", op = self.name, mode = ctx.mode).entered();
        let notices = match (self.cast)(host, selection, ctx) {
            Ok(notices) => notices,
            Err(Error::EmptyInput) => vec![Notice::NothingToDo],
            Err(e) => return Err(e),
        };
        let outcome = Outcome::from(notices);
        outcome.log();
        Ok(outcome)
    }
}

impl<H: MeshHost> std::fmt::Debug for Operation<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("page", &self.page)
            .field("name", &self.name)
            .field("modes", &self.modes)
            .finish_non_exhaustive()
    }
}

/// A fixed table of [Operations](Operation), built once and then only read.
#[derive(Debug)]
pub struct Registry<H: MeshHost> {
    ops: Vec<Operation<H>>,
}

impl<H: MeshHost> Registry<H> {
    /// Every operation this library provides.
    pub fn standard() -> Self {
        let ops = vec![
            Operation {
                page: "Mesh",
                name: "Remove Unused Vertices",
                modes: &[],
                applies: vertices::applies,
                cast: vertices::remove_unused,
            },
            Operation {
                page: "Mesh",
                name: "Remove Duplicate Vertices",
                modes: &[],
                applies: vertices::applies,
                cast: vertices::remove_duplicates,
            },
            Operation {
                page: "Mesh",
                name: "Update Center/Radius",
                modes: bounds::CENTER_MODES,
                applies: bounds::applies_geometry,
                cast: bounds::update_center_radius,
            },
            Operation {
                page: "Mesh",
                name: "Update Bounds",
                modes: &[],
                applies: bounds::applies_packed,
                cast: bounds::update_bounds,
            },
            Operation {
                page: "Batch",
                name: "Update All Bounds",
                modes: &[],
                applies: bounds::applies_batch,
                cast: bounds::update_all_bounds,
            },
            Operation {
                page: "Mesh",
                name: "Flip UV",
                modes: uv::FLIP_MODES,
                applies: uv::applies,
                cast: uv::flip_uv,
            },
            Operation {
                page: "Mesh",
                name: "Flip Faces",
                modes: &[],
                applies: faces::applies,
                cast: faces::flip_faces,
            },
            Operation {
                page: "Mesh",
                name: "Prune Triangles",
                modes: &[],
                applies: faces::applies,
                cast: faces::prune_triangles,
            },
            Operation {
                page: "Mesh",
                name: "Copy Vertex Data",
                modes: &[],
                applies: transfer::applies,
                cast: transfer::copy_vertex_data,
            },
            Operation {
                page: "Mesh",
                name: "Paste Vertex Data",
                modes: &[],
                applies: transfer::applies,
                cast: transfer::paste_vertex_data,
            },
        ];
        Self { ops }
    }

    /// Look up an operation by name, or by `page/name`.
    pub fn get(&self, name: &str) -> Option<&Operation<H>> {
        self.ops.iter().find(|op| {
            op.name == name
                || name
                    .split_once('/')
                    .is_some_and(|(page, rest)| op.page == page && op.name == rest)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation<H>> + '_ {
        self.ops.iter()
    }

    /// Iterate through the operations which can be cast on `selection`.
    pub fn applicable<'r>(
        &'r self,
        host: &'r H,
        selection: Option<H::Handle>,
    ) -> impl Iterator<Item = &'r Operation<H>> + 'r {
        self.ops
            .iter()
            .filter(move |op| op.applies(host, selection))
    }

    /// Look up and cast an operation by name.
    ///
    /// # Errors
    ///
    /// * [`UnknownOperation`](Error::UnknownOperation) if nothing is registered as `name`.
    /// * See [Operation::cast].
    pub fn cast(
        &self,
        name: &str,
        host: &mut H,
        selection: Option<H::Handle>,
        ctx: &mut Context<'_>,
    ) -> Result<Outcome<H::Handle>> {
        self.get(name)
            .ok_or_else(|| Error::UnknownOperation(name.to_owned()))?
            .cast(host, selection, ctx)
    }
}

/// The `(shape, geometry)` pair a selection refers to, if it refers to a shape with geometry or
/// directly to geometry. The shape may be absent when geometry is selected directly.
pub(crate) fn selected_geometry<H: MeshHost>(
    host: &H,
    selection: Option<H::Handle>,
) -> Option<(Option<H::Handle>, H::Handle)> {
    let block = selection?;
    match host.kind(block)? {
        BlockKind::Geometry => Some((host.owning_shape(block), block)),
        BlockKind::Shape => host.shape_data(block).map(|data| (Some(block), data)),
        _ => None,
    }
}

/// The selected block, if it is one of `kinds`.
pub(crate) fn selected_kind<H: MeshHost>(
    host: &H,
    selection: Option<H::Handle>,
    kinds: &[BlockKind],
) -> Option<H::Handle> {
    let block = selection?;
    kinds
        .contains(&host.kind(block)?)
        .then_some(block)
}

/// Read the vertex arrays of `data`, failing unless they agree with each other and with the
/// declared vertex count.
///
/// # Errors
///
/// * [`EmptyInput`](Error::EmptyInput) if there are no vertices.
/// * [`SizeMismatch`](Error::SizeMismatch) if the declared count or any co-array disagrees with
///   the position array.
pub(crate) fn checked_attributes<H: MeshHost>(
    host: &H,
    data: H::Handle,
) -> Result<AttributeArrays> {
    let arrays = host.attributes(data)?;
    if arrays.is_empty() {
        return Err(Error::EmptyInput);
    }
    let declared = host.declared_vertex_count(data)?;
    if declared != arrays.len() {
        return Err(Error::SizeMismatch {
            array: Extent::DeclaredCount,
            expected: arrays.len(),
            found: declared,
        });
    }
    arrays.validate()?;
    Ok(arrays)
}

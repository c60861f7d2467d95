//! Invalidating the GPU skin partition cache when a mesh's vertex layout changes.

use crate::{host::MeshHost, Result};

/// Find the skin partition derived from `shape`'s skin binding, if any.
///
/// The partition may hang off the skin instance directly or, in older layouts, off the skin data
/// the instance refers to; the instance's own link takes precedence.
pub fn find_partition<H: MeshHost>(host: &H, shape: H::Handle) -> Option<H::Handle> {
    let instance = host.skin_instance(shape)?;
    host.instance_partition(instance).or_else(|| {
        host.skin_data(instance)
            .and_then(|data| host.data_partition(data))
    })
}

/// Delete the skin partition downstream of `shape`, returning its handle if there was one.
///
/// A partition can't be patched to follow a remapped vertex set, only rebuilt from scratch, so
/// call this after anything that changes vertex count or index layout.
pub fn invalidate_partition<H: MeshHost>(
    host: &mut H,
    shape: H::Handle,
) -> Result<Option<H::Handle>> {
    let Some(partition) = find_partition(host, shape) else {
        return Ok(None);
    };
    host.remove_block(partition)?;
    tracing::debug!(%shape, %partition, "removed stale skin partition");
    Ok(Some(partition))
}

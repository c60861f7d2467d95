use nalgebra::{Point3, Vector3};

use super::{Aabb, Float};

/// How to pick the center of a [BoundingSphere].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundsMode {
    /// The mean of all points.
    #[default]
    Centroid,
    /// The midpoint of the per-axis extents of all points. Older formats expect this.
    BoxCenter,
}

/// A center and a radius such that every point of some set lies within `radius` of `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere<Real: Float> {
    pub center: Point3<Real>,
    pub radius: Real,
}

impl<Real: Float> BoundingSphere<Real> {
    /// Compute the bounds of `points`, choosing a center according to `mode`; the radius is the
    /// distance from that center to the farthest point.
    ///
    /// Returns `None` if `points` is empty, since there's nothing to bound.
    pub fn from_points(points: &[Point3<Real>], mode: BoundsMode) -> Option<Self> {
        let center = match mode {
            BoundsMode::Centroid => centroid(points)?,
            BoundsMode::BoxCenter => Aabb::from_points(points)?.center(),
        };
        Some(Self::around(center, points))
    }

    /// Construct the smallest sphere centered on `center` which contains every point in `points`.
    pub fn around(center: Point3<Real>, points: &[Point3<Real>]) -> Self {
        let radius = points
            .iter()
            .map(|p| (p - center).norm())
            .fold(Real::ZERO, |r, d| r.max(d));
        Self { center, radius }
    }
}

/// The mean of `points`, or `None` if there are none.
pub fn centroid<Real: Float>(points: &[Point3<Real>]) -> Option<Point3<Real>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<Real>, p| acc + p.coords);
    Some(Point3::from(sum / Real::from_count(points.len())))
}

use nalgebra::{point, Point3};

use super::Float;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<Real: Float> {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl<Real: Float> Aabb<Real> {
    #[inline]
    pub fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Construct the smallest [Aabb] containing every point in `points`, or `None` if there are
    /// no points.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3<Real>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let mut res = Self::new(first, first);
        for p in points {
            res.expand_to(p);
        }
        Some(res)
    }

    /// Grow `self` such that it contains `p`.
    pub fn expand_to(&mut self, p: &Point3<Real>) {
        let Self { mins: i, maxs: a } = self;
        *i = point![i.x.min(p.x), i.y.min(p.y), i.z.min(p.z)];
        *a = point![a.x.max(p.x), a.y.max(p.y), a.z.max(p.z)];
    }

    #[inline]
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<Real> {
        let Self { mins: i, maxs: a } = self;
        point![
            (i.x + a.x) / Real::TWO,
            (i.y + a.y) / Real::TWO,
            (i.z + a.z) / Real::TWO
        ]
    }
}

//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum corner `mins` and maximum corner `maxs`, with
/// `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sdfmask3d::bounding_volume::Aabb;
/// use sdfmask3d::na::Point3;
///
/// let pts = [Point3::new(-1.0, 2.0, 3.0), Point3::new(1.0, -1.0, -1.0)];
/// let aabb = Aabb::from_points(&pts).unwrap();
/// assert_eq!(aabb.mins, Point3::new(-1.0, -1.0, -1.0));
/// assert_eq!(aabb.extents().z, 4.0);
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Computes the AABB of a set of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<'a, I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut it = pts.into_iter();
        let p0 = it.next()?;
        let mut result = Aabb::new(*p0, *p0);

        for pt in it {
            result.take_point(*pt);
        }

        Some(result)
    }

    /// The extents of this AABB, i.e. `maxs - mins`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// Checks whether `other` lies in the interior of `self`, without touching its boundary.
    #[inline]
    pub fn strictly_contains(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.mins[i] < other.mins[i] && other.maxs[i] < self.maxs[i])
    }
}

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{SupportMap, SupportPoint};

/// Mask selecting the second shape's vertex id in a packed pair id.
pub const PAIR_ID_MASK: u32 = 0xffff;

/// Packs the vertex ids of two shapes into a single support point id.
#[inline]
pub fn pack_pair_id(id1: u32, id2: u32) -> u32 {
    (id1 << 16) | (id2 & PAIR_ID_MASK)
}

/// Splits a packed support point id into the vertex ids of both shapes.
#[inline]
pub fn unpack_pair_id(id: u32) -> (u32, u32) {
    (id >> 16, id & PAIR_ID_MASK)
}

/// The Configuration-Space Obstacle of two support-mapped shapes.
///
/// A Configuration-Space Obstacle (CSO) is the Minkowski difference `g1 - g2` of both
/// shapes, with `g2` placed at `pos12` in the local-space of `g1`. The radial paddings of
/// both shapes are summed and applied along the normalized support direction.
pub struct ShapePair<'a, G1: ?Sized, G2: ?Sized> {
    /// The position of the second shape relative to the first one.
    pub pos12: &'a Isometry<Real>,
    /// The first shape.
    pub g1: &'a G1,
    /// The second shape.
    pub g2: &'a G2,
    padding: Real,
}

impl<'a, G1, G2> ShapePair<'a, G1, G2>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    /// Creates the CSO of `g1` and `g2` placed at `pos12`.
    pub fn new(pos12: &'a Isometry<Real>, g1: &'a G1, g2: &'a G2) -> Self {
        Self {
            pos12,
            g1,
            g2,
            padding: g1.radial_padding() + g2.radial_padding(),
        }
    }

    /// The sum of the radial paddings of both shapes.
    #[inline]
    pub fn padding(&self) -> Real {
        self.padding
    }

    /// Does this CSO have rounded features?
    ///
    /// Support points of rounded CSOs change continuously with the direction, so their
    /// ids alone are not enough to detect convergence.
    #[inline]
    pub fn is_rounded(&self) -> bool {
        self.padding > 0.0
    }

    /// Computes the support point of the CSO toward the direction `dir`.
    pub fn support(&self, dir: &Vector<Real>) -> SupportPoint {
        let sp1 = self.g1.local_support_point(dir);
        let sp2 = self.g2.support_point(self.pos12, &-*dir);
        let point = Point::from(sp1.point - sp2.point);

        SupportPoint::new(self.pad(point, dir), pack_pair_id(sp1.id, sp2.id))
    }

    /// The value of the support function of the CSO along `dir`.
    ///
    /// This is the largest `dot(p, dir)` for `p` in the CSO.
    #[inline]
    pub fn support_value(&self, dir: &Vector<Real>) -> Real {
        self.support(dir).point.coords.dot(dir)
    }

    /// The padding-free CSO vertex identified by the packed `id`.
    pub fn vertex(&self, id: u32) -> Point<Real> {
        let (id1, id2) = unpack_pair_id(id);
        Point::from(self.g1.vertex(id1) - self.pos12 * self.g2.vertex(id2))
    }

    /// Rebuilds a support point from its packed `id`, padding it along `dir`.
    ///
    /// If `id` was returned by `self.support(dir)`, this gives back the same point.
    pub fn support_from_id(&self, id: u32, dir: &Vector<Real>) -> SupportPoint {
        SupportPoint::new(self.pad(self.vertex(id), dir), id)
    }

    /// A point inside of the CSO.
    pub fn center(&self) -> Point<Real> {
        Point::from(self.g1.center() - self.pos12 * self.g2.center())
    }

    /// The AABB of the CSO, paddings included.
    pub fn aabb(&self) -> Aabb {
        let aabb1 = self.g1.local_aabb();
        let aabb2 = self.g2.local_aabb().transform_by(self.pos12);
        aabb1.minkowski_difference(&aabb2)
    }

    #[inline]
    fn pad(&self, point: Point<Real>, dir: &Vector<Real>) -> Point<Real> {
        if self.padding != 0.0 {
            if let Some(n) = dir.try_normalize(0.0) {
                return point + n * self.padding;
            }
        }

        point
    }
}

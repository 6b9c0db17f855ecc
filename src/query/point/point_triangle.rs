use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery, TrianglePointLocation};
use crate::shape::Triangle;

#[inline]
fn project_on_segment(a: &Point<Real>, b: &Point<Real>, pt: &Point<Real>) -> Point<Real> {
    let ab = b - a;
    let sqnab = ab.norm_squared();

    if sqnab == 0.0 {
        return *a;
    }

    let t = (ab.dot(&(pt - a)) / sqnab).clamp(0.0, 1.0);
    a + ab * t
}

impl PointQuery for Triangle {
    fn project_local_point(&self, pt: &Point<Real>) -> PointProjection {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return PointProjection {
                point: a,
                location: TrianglePointLocation::OnVertex(0),
            };
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return PointProjection {
                point: b,
                location: TrianglePointLocation::OnVertex(1),
            };
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return PointProjection {
                point: c,
                location: TrianglePointLocation::OnVertex(2),
            };
        }

        let n = ab.cross(&ac);
        let bc = c - b;

        let vc = n.dot(&ab.cross(&ap));
        if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
            // Voronoï region of `ab`.
            let v = ab_ap / ab.norm_squared();
            return PointProjection {
                point: a + ab * v,
                location: TrianglePointLocation::OnEdge(0),
            };
        }

        let vb = -n.dot(&ac.cross(&cp));
        if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
            // Voronoï region of `ac`.
            let w = ac_ap / ac.norm_squared();
            return PointProjection {
                point: a + ac * w,
                location: TrianglePointLocation::OnEdge(2),
            };
        }

        let va = n.dot(&bc.cross(&bp));
        if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
            // Voronoï region of `bc`.
            let w = bc.dot(&bp) / bc.norm_squared();
            return PointProjection {
                point: b + bc * w,
                location: TrianglePointLocation::OnEdge(1),
            };
        }

        // NOTE: the denominator vanishes when the triangle is degenerate. Fall back to the
        // closest of its three edges in that case.
        let denom = va + vb + vc;
        if denom != 0.0 {
            let v = vb / denom;
            let w = vc / denom;
            return PointProjection {
                point: a + ab * v + ac * w,
                location: TrianglePointLocation::OnFace,
            };
        }

        let candidates = [
            (project_on_segment(&a, &b, pt), 0),
            (project_on_segment(&b, &c, pt), 1),
            (project_on_segment(&a, &c, pt), 2),
        ];
        let mut best = candidates[0];
        let mut best_dist = (pt - best.0).norm_squared();

        for candidate in &candidates[1..] {
            let dist = (pt - candidate.0).norm_squared();
            if dist < best_dist {
                best = *candidate;
                best_dist = dist;
            }
        }

        PointProjection {
            point: best.0,
            location: TrianglePointLocation::OnEdge(best.1),
        }
    }
}

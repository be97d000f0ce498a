use super::{Vec3, SMALL_NUM};

/// Line segment from `a` (parameter 0) to `b` (parameter 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vec3,
    pub b: Vec3,
}

impl Segment {
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn start(&self) -> Vec3 {
        self.a
    }
    #[inline]
    pub fn end(&self) -> Vec3 {
        self.b
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
    #[inline]
    pub fn midpoint(&self) -> Vec3 {
        (self.a + self.b) * 0.5
    }
    /// Point at `t` along the segment; `t` is not clamped.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.a.lerp(&self.b, t)
    }

    /// Parameters `(s, t)` of the closest pair of points, `s` on `self` and
    /// `t` on `other`, both in [0, 1].
    ///
    /// Clamped parametric solve over the unit square: minimize on the infinite
    /// lines first, then clamp `s` and re-solve `t` on the visible edge (and
    /// vice versa). Near-parallel segments fix `s = 0`. Tolerances are relative
    /// to the squared lengths involved, so the answer does not depend on scale.
    pub fn closest_params(&self, other: &Segment) -> (f64, f64) {
        let u = self.b - self.a;
        let v = other.b - other.a;
        let w = self.a - other.a;
        let a = u.dot(&u);
        let b = u.dot(&v);
        let c = v.dot(&v);
        let d = u.dot(&w);
        let e = v.dot(&w);
        let det = a * c - b * b;
        let scale = a.max(c).max(w.dot(&w));

        // Point-like segments reduce to a point/segment projection.
        if c <= SMALL_NUM * scale {
            let s = if a <= SMALL_NUM * scale { 0.0 } else { -d / a };
            return (s.clamp(0.0, 1.0), 0.0);
        }
        if a <= SMALL_NUM * scale {
            return (0.0, (e / c).clamp(0.0, 1.0));
        }

        let (mut s_num, mut s_den) = (0.0, det);
        let (mut t_num, mut t_den) = (0.0, det);

        if det <= SMALL_NUM * a * c {
            // Parallel: pin s = 0 and project onto `other`.
            s_den = 1.0;
            t_num = e;
            t_den = c;
        } else {
            s_num = b * e - c * d;
            t_num = a * e - b * d;
            if s_num < 0.0 {
                s_num = 0.0;
                t_num = e;
                t_den = c;
            } else if s_num > s_den {
                s_num = s_den;
                t_num = e + b;
                t_den = c;
            }
        }

        if t_num < 0.0 {
            t_num = 0.0;
            if -d < 0.0 {
                s_num = 0.0;
            } else if -d > a {
                s_num = s_den;
            } else {
                s_num = -d;
                s_den = a;
            }
        } else if t_num > t_den {
            t_num = t_den;
            if -d + b < 0.0 {
                s_num = 0.0;
            } else if -d + b > a {
                s_num = s_den;
            } else {
                s_num = -d + b;
                s_den = a;
            }
        }

        // Both denominators are positive here: `det`, `a`, `c` or 1.
        let s = s_num / s_den;
        let t = t_num / t_den;
        (s.clamp(0.0, 1.0), t.clamp(0.0, 1.0))
    }

    /// Vector from the closest point on `other` to the closest point on `self`.
    #[inline]
    pub fn shortest_vector(&self, other: &Segment) -> Vec3 {
        let (s, t) = self.closest_params(other);
        self.point_at(s) - other.point_at(t)
    }

    /// Minimum distance between the two segments.
    #[inline]
    pub fn distance(&self, other: &Segment) -> f64 {
        self.shortest_vector(other).norm()
    }
}

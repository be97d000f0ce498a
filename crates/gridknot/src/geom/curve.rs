use super::{Segment, Vec3};

/// Axis-aligned bounding box of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        (0..3).all(|k| p[k] >= self.min[k] && p[k] <= self.max[k])
    }
}

/// Closed polyline: vertex `len() - 1` connects back to vertex `0`.
///
/// Segment `i` runs from vertex `i` to vertex `i + 1` (wrapped), so a curve
/// with `n` vertices has `n` segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonalCurve {
    vertices: Vec<Vec3>,
}

impl PolygonalCurve {
    #[inline]
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self { vertices }
    }
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Wraps `index` into `0..len()`. Panics on an empty curve.
    #[inline]
    pub fn wrapped_index(&self, index: usize) -> usize {
        index % self.vertices.len()
    }

    /// Indices `(left, right)` of the ring neighbors of `index`.
    pub fn neighbors(&self, index: usize) -> (usize, usize) {
        let n = self.vertices.len();
        let i = self.wrapped_index(index);
        let left = if i == 0 { n - 1 } else { i - 1 };
        let right = if i + 1 == n { 0 } else { i + 1 };
        (left, right)
    }

    /// Segment from vertex `index` to vertex `index + 1` (wrapped).
    pub fn segment(&self, index: usize) -> Segment {
        Segment::new(
            self.vertices[self.wrapped_index(index)],
            self.vertices[self.wrapped_index(index + 1)],
        )
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.vertices.len()).map(move |i| self.segment(i))
    }

    /// Total length including the closing segment.
    pub fn perimeter(&self) -> f64 {
        if self.vertices.len() < 2 {
            return 0.0;
        }
        self.segments().map(|s| s.length()).sum()
    }

    /// Point at arc-length fraction `t ∈ [0, 1]` of the closed perimeter,
    /// starting (and, for `t = 1`, ending) at vertex 0.
    pub fn point_at(&self, t: f64) -> Option<Vec3> {
        let first = *self.vertices.first()?;
        let total = self.perimeter();
        if total <= 0.0 || t <= 0.0 {
            return Some(first);
        }
        if t >= 1.0 {
            return Some(first);
        }
        let target = total * t;
        let mut walked = 0.0;
        for seg in self.segments() {
            let len = seg.length();
            if walked + len >= target && len > 0.0 {
                return Some(seg.point_at((target - walked) / len));
            }
            walked += len;
        }
        Some(first)
    }

    /// Subdivides every segment (closing segment included) into `subdivisions`
    /// equal pieces. Existing vertices are kept; `subdivisions <= 1` is a copy.
    pub fn refine(&self, subdivisions: usize) -> PolygonalCurve {
        if subdivisions <= 1 || self.vertices.len() < 2 {
            return self.clone();
        }
        let mut out = Vec::with_capacity(self.vertices.len() * subdivisions);
        for seg in self.segments() {
            out.push(seg.start());
            for k in 1..subdivisions {
                out.push(seg.point_at(k as f64 / subdivisions as f64));
            }
        }
        PolygonalCurve::new(out)
    }

    /// Axis-aligned bounds, or `None` for an empty curve.
    pub fn bounds(&self) -> Option<Bounds3> {
        let first = *self.vertices.first()?;
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some(Bounds3 { min, max })
    }

    /// `true` if segments `a` and `b` coincide or share a vertex.
    #[inline]
    pub fn segments_share_endpoint(&self, a: usize, b: usize) -> bool {
        let n = self.vertices.len();
        let (a, b) = (a % n, b % n);
        a == b || (a + 1) % n == b || (b + 1) % n == a
    }

    #[inline]
    pub fn push_vertex(&mut self, vertex: Vec3) {
        self.vertices.push(vertex);
    }
    #[inline]
    pub fn pop_vertex(&mut self) -> Option<Vec3> {
        self.vertices.pop()
    }
    /// Replaces the whole vertex buffer.
    #[inline]
    pub fn set_vertices(&mut self, vertices: Vec<Vec3>) {
        self.vertices = vertices;
    }
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

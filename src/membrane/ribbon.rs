//! Ribbon geometry - the triangle strip between two outlines
//!
//! Buffers use the flat interleaved layout GPU vertex buffers expect:
//! - `positions: [x0, y0, z0, x1, y1, z1, ...]`
//! - `normals:   [nx0, ny0, nz0, ...]`
//! - `uvs:       [u0, v0, u1, v1, ...]`
//! - `indices:   [t0v0, t0v1, t0v2, t1v0, ...]`

use nalgebra::Vector3;
use serde::Serialize;

use crate::geometry::Point3;

/// A ribbon surface with per-vertex normals
///
/// Built from two outlines `P` and `Q` of equal length `n`. With `s`
/// segments across the ribbon there are `(s + 1) * n` vertices and
/// `2 * s * (n - 1)` triangles. Row 0 is `P`, row `s` is `Q`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RibbonGeometry {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
}

impl RibbonGeometry {
    /// Build a ribbon between `p` and `q`, with normals computed
    ///
    /// `p` and `q` must have the same length. This is the caller's contract:
    /// both outlines always come from sampling the same range with the same
    /// point count.
    pub fn build(p: &[Point3], q: &[Point3], segments: usize) -> Self {
        debug_assert_eq!(p.len(), q.len(), "ribbon outlines differ in length");

        let n = p.len().min(q.len());
        let segments = segments.max(1);
        let rows = segments + 1;
        let vertex_count = rows * n;
        let triangle_count = 2 * segments * n.saturating_sub(1);

        let mut ribbon = Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: vec![0.0; vertex_count * 3],
            uvs: Vec::with_capacity(vertex_count * 2),
            indices: Vec::with_capacity(triangle_count * 3),
        };

        // Vertices, one row per segment boundary
        for j in 0..rows {
            let v = j as f64 / segments as f64;
            for i in 0..n {
                let a = p[i].coords;
                let b = q[i].coords;
                let pos = a + (b - a) * v;
                ribbon.positions.push(pos.x as f32);
                ribbon.positions.push(pos.y as f32);
                ribbon.positions.push(pos.z as f32);

                let u = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
                ribbon.uvs.push(u as f32);
                ribbon.uvs.push(v as f32);
            }
        }

        // Two triangles per quad
        for j in 0..segments {
            for i in 0..n.saturating_sub(1) {
                let a = (j * n + i) as u32;
                let b = a + 1;
                let c = a + n as u32;
                let d = c + 1;

                ribbon.indices.extend_from_slice(&[a, c, b]);
                ribbon.indices.extend_from_slice(&[b, c, d]);
            }
        }

        ribbon.compute_vertex_normals();
        ribbon
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vector3<f32> {
        Vector3::new(
            self.positions[3 * i],
            self.positions[3 * i + 1],
            self.positions[3 * i + 2],
        )
    }

    /// Returns the normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vector3<f32> {
        Vector3::new(
            self.normals[3 * i],
            self.normals[3 * i + 1],
            self.normals[3 * i + 2],
        )
    }

    /// Recompute area-weighted vertex normals from the triangles
    ///
    /// Degenerate triangles (zero area, as on a collapsed projector side)
    /// contribute nothing. Vertices touched only by degenerate triangles keep
    /// a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        let mut accumulated = vec![Vector3::<f32>::zeros(); self.vertex_count()];

        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let pa = self.position(a);
            // Magnitude is twice the triangle area
            let face = (self.position(b) - pa).cross(&(self.position(c) - pa));
            accumulated[a] += face;
            accumulated[b] += face;
            accumulated[c] += face;
        }

        for (i, sum) in accumulated.into_iter().enumerate() {
            let len = sum.norm();
            let normal = if len > 1e-10 { sum / len } else { Vector3::zeros() };
            self.normals[3 * i] = normal.x;
            self.normals[3 * i + 1] = normal.y;
            self.normals[3 * i + 2] = normal.z;
        }
    }

    /// Flip every normal, turning the front face into the back face
    pub fn invert_normals(&mut self) {
        for component in &mut self.normals {
            *component = -*component;
        }
    }

    /// Overwrite this geometry with `other`, reusing the existing buffers
    pub fn copy_from(&mut self, other: &RibbonGeometry) {
        fn copy_into<T: Copy>(dst: &mut Vec<T>, src: &[T]) {
            dst.clear();
            dst.extend_from_slice(src);
        }
        copy_into(&mut self.positions, &other.positions);
        copy_into(&mut self.normals, &other.normals);
        copy_into(&mut self.uvs, &other.uvs);
        copy_into(&mut self.indices, &other.indices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlines(n: usize) -> (Vec<Point3>, Vec<Point3>) {
        let p = (0..n).map(|i| Point3::new(i as f64, 1.0, 15.0)).collect();
        let q = (0..n).map(|i| Point3::new(i as f64 * 2.0, 3.0, 0.0)).collect();
        (p, q)
    }

    #[test]
    fn test_counts() {
        for n in [2, 5, 151] {
            let (p, q) = outlines(n);
            let ribbon = RibbonGeometry::build(&p, &q, 1);
            assert_eq!(ribbon.vertex_count(), 2 * n);
            assert_eq!(ribbon.triangle_count(), 2 * (n - 1));
            assert_eq!(ribbon.normals.len(), ribbon.positions.len());
            assert_eq!(ribbon.uvs.len(), 2 * ribbon.vertex_count());
        }
    }

    #[test]
    fn test_segment_subdivision() {
        let (p, q) = outlines(4);
        let ribbon = RibbonGeometry::build(&p, &q, 3);
        assert_eq!(ribbon.vertex_count(), 4 * 4);
        assert_eq!(ribbon.triangle_count(), 2 * 3 * 3);
        // Middle rows interpolate between the outlines
        let first_row_1 = ribbon.position(4);
        assert!((first_row_1.z - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_indices_in_range() {
        let (p, q) = outlines(10);
        let ribbon = RibbonGeometry::build(&p, &q, 2);
        let max = ribbon.vertex_count() as u32;
        assert!(ribbon.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn test_flat_ribbon_normals() {
        // Both outlines in the z = 0 plane: every normal is ±Z
        let p: Vec<Point3> = (0..5).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
        let q: Vec<Point3> = (0..5).map(|i| Point3::new(i as f64, 1.0, 0.0)).collect();
        let ribbon = RibbonGeometry::build(&p, &q, 1);
        for i in 0..ribbon.vertex_count() {
            let n = ribbon.normal(i);
            assert!((n.norm() - 1.0).abs() < 1e-5);
            assert!((n.z.abs() - 1.0).abs() < 1e-5);
        }
        // Consistent winding: all normals point the same way
        let first = ribbon.normal(0).z;
        assert!((0..ribbon.vertex_count()).all(|i| ribbon.normal(i).z == first));
    }

    #[test]
    fn test_invert_normals() {
        let (p, q) = outlines(6);
        let inner = RibbonGeometry::build(&p, &q, 1);
        let mut outer = inner.clone();
        outer.invert_normals();
        for (a, b) in inner.normals.iter().zip(&outer.normals) {
            assert_eq!(*b, -*a);
        }
        assert_eq!(inner.positions, outer.positions);
    }

    #[test]
    fn test_degenerate_side() {
        // Every P vertex at one point, as on the projector side
        let p = vec![Point3::new(0.0, 0.0, 15.0); 8];
        let q: Vec<Point3> = (0..8)
            .map(|i| {
                let a = i as f64;
                Point3::new(a.cos(), a.sin(), 0.0)
            })
            .collect();
        let ribbon = RibbonGeometry::build(&p, &q, 1);
        assert!(ribbon.normals.iter().all(|n| n.is_finite()));
    }

    #[test]
    fn test_copy_from_reuses_buffers() {
        let (p, q) = outlines(20);
        let source = RibbonGeometry::build(&p, &q, 1);
        let mut target = RibbonGeometry::build(&p, &q, 1);
        let capacity = target.positions.capacity();
        target.invert_normals();
        target.copy_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.positions.capacity(), capacity);
    }
}

//! Planar Delaunay triangulation via Bowyer-Watson incremental insertion.

use std::collections::HashMap;

/// Internal triangle representation with cached circumcircle data.
struct BwTri {
    v: [usize; 3],
    center: [f64; 2],
    radius_sq: f64,
}

/// An edge key with sorted vertex indices for hashing.
#[derive(Hash, Eq, PartialEq)]
struct EdgeKey([usize; 2]);

impl EdgeKey {
    fn new(a: usize, b: usize) -> Self {
        if a <= b { EdgeKey([a, b]) } else { EdgeKey([b, a]) }
    }
}

/// Circumcircle center and squared radius of a triangle.
///
/// Returns `None` for (near-)collinear vertices.
fn circumcircle(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Option<([f64; 2], f64)> {
    let d = 2.0 * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));
    if d.abs() < 1e-12 {
        return None;
    }
    let a_sq = a[0] * a[0] + a[1] * a[1];
    let b_sq = b[0] * b[0] + b[1] * b[1];
    let c_sq = c[0] * c[0] + c[1] * c[1];
    let ux = (a_sq * (b[1] - c[1]) + b_sq * (c[1] - a[1]) + c_sq * (a[1] - b[1])) / d;
    let uy = (a_sq * (c[0] - b[0]) + b_sq * (a[0] - c[0]) + c_sq * (b[0] - a[0])) / d;
    let dx = a[0] - ux;
    let dy = a[1] - uy;
    Some(([ux, uy], dx * dx + dy * dy))
}

/// Creates a super-triangle enclosing all given points.
fn super_triangle(points: &[[f64; 2]]) -> [[f64; 2]; 3] {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for p in points {
        for k in 0..2 {
            min[k] = min[k].min(p[k]);
            max[k] = max[k].max(p[k]);
        }
    }
    let cx = (min[0] + max[0]) * 0.5;
    let cy = (min[1] + max[1]) * 0.5;
    let dx = (max[0] - min[0]).max(1e-6);
    let dy = (max[1] - min[1]).max(1e-6);
    // Large enough that every input point is well inside.
    let scale = 20.0 * (dx * dx + dy * dy).sqrt();

    [
        [cx - scale, cy - scale],
        [cx + scale, cy - scale],
        [cx, cy + scale],
    ]
}

/// Bowyer-Watson incremental Delaunay triangulation.
///
/// Returns `None` if fewer than 3 points are provided or all points are
/// collinear. The returned triangles reference indices into `points`.
pub(crate) fn triangulate(points: &[[f64; 2]]) -> Option<Vec<[usize; 3]>> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    // Combined vertex array: original points + super-triangle vertices
    let super_pts = super_triangle(points);
    let mut all_points: Vec<[f64; 2]> = points.to_vec();
    all_points.extend_from_slice(&super_pts);
    let si = [n, n + 1, n + 2];

    let (center, radius_sq) =
        circumcircle(all_points[si[0]], all_points[si[1]], all_points[si[2]])?;
    let mut tris: Vec<BwTri> = vec![BwTri {
        v: si,
        center,
        radius_sq,
    }];

    // Insert points one at a time
    for i in 0..n {
        let pt = all_points[i];

        // Bad triangles: those whose circumcircle contains the new point
        let mut bad_indices: Vec<usize> = Vec::new();
        for (ti, tri) in tris.iter().enumerate() {
            let dx = tri.center[0] - pt[0];
            let dy = tri.center[1] - pt[1];
            if dx * dx + dy * dy < tri.radius_sq + 1e-10 {
                bad_indices.push(ti);
            }
        }

        if bad_indices.is_empty() {
            // Duplicate or degenerate point; skip it.
            continue;
        }

        // Cavity boundary: edges shared by exactly one bad triangle
        let mut edge_count: HashMap<EdgeKey, (usize, [usize; 2])> = HashMap::new();
        for &bi in &bad_indices {
            let v = tris[bi].v;
            for edge in [[v[0], v[1]], [v[1], v[2]], [v[2], v[0]]] {
                edge_count
                    .entry(EdgeKey::new(edge[0], edge[1]))
                    .and_modify(|(count, _)| *count += 1)
                    .or_insert((1, edge));
            }
        }
        let boundary_edges: Vec<[usize; 2]> = edge_count
            .into_values()
            .filter(|(count, _)| *count == 1)
            .map(|(_, edge)| edge)
            .collect();

        // Remove bad triangles (descending index keeps swap_remove valid)
        bad_indices.sort_unstable_by(|a, b| b.cmp(a));
        for bi in bad_indices {
            tris.swap_remove(bi);
        }

        // Re-triangulate the cavity around the new point
        for edge in boundary_edges {
            let (a, b) = (edge[0], edge[1]);
            if let Some((center, radius_sq)) =
                circumcircle(all_points[a], all_points[b], all_points[i])
            {
                tris.push(BwTri {
                    v: [a, b, i],
                    center,
                    radius_sq,
                });
            }
        }
    }

    // Drop triangles touching the super-triangle vertices
    let result: Vec<[usize; 3]> = tris
        .into_iter()
        .filter(|t| t.v.iter().all(|&v| v < n))
        .map(|t| t.v)
        .collect();

    if result.is_empty() {
        return None;
    }
    Some(result)
}

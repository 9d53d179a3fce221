//! Closed, outward wound fixtures shared by the unit tests.
use crate::nalgebra_types::Vector3;
use crate::stl::{Facet, StlDocument};

/// Axis aligned cube with its minimum corner at `offset`, 12 facets.
pub fn cube(side: f64, offset: Vector3) -> StlDocument {
    let p = |i: f64, j: f64, k: f64| vec3![i * side, j * side, k * side] + offset;
    #[rustfmt::skip]
    let triangles = [
        // z = 0
        [p(0., 0., 0.), p(0., 1., 0.), p(1., 1., 0.)],
        [p(0., 0., 0.), p(1., 1., 0.), p(1., 0., 0.)],
        // z = 1
        [p(0., 0., 1.), p(1., 0., 1.), p(1., 1., 1.)],
        [p(0., 0., 1.), p(1., 1., 1.), p(0., 1., 1.)],
        // y = 0
        [p(0., 0., 0.), p(1., 0., 0.), p(1., 0., 1.)],
        [p(0., 0., 0.), p(1., 0., 1.), p(0., 0., 1.)],
        // y = 1
        [p(0., 1., 0.), p(0., 1., 1.), p(1., 1., 1.)],
        [p(0., 1., 0.), p(1., 1., 1.), p(1., 1., 0.)],
        // x = 0
        [p(0., 0., 0.), p(0., 0., 1.), p(0., 1., 1.)],
        [p(0., 0., 0.), p(0., 1., 1.), p(0., 1., 0.)],
        // x = 1
        [p(1., 0., 0.), p(1., 1., 0.), p(1., 1., 1.)],
        [p(1., 0., 0.), p(1., 1., 1.), p(1., 0., 1.)],
    ];
    StlDocument::with_facets(
        "cube",
        triangles
            .into_iter()
            .map(|[v0, v1, v2]| Facet::from_vertices(v0, v1, v2)),
    )
}

/// Corner tetrahedron spanning the origin and the three unit axis points.
pub fn tetrahedron() -> StlDocument {
    let o = vec3![0.0, 0.0, 0.0];
    let a = vec3![1.0, 0.0, 0.0];
    let b = vec3![0.0, 1.0, 0.0];
    let c = vec3![0.0, 0.0, 1.0];
    StlDocument::with_facets(
        "tetrahedron",
        [
            Facet::from_vertices(a, b, c),
            Facet::from_vertices(o, b, a),
            Facet::from_vertices(o, a, c),
            Facet::from_vertices(o, c, b),
        ],
    )
}

#[test]
fn cube_normals_point_outward() {
    let stl = cube(2.0, Vector3::zeros());
    let center = vec3![1.0, 1.0, 1.0];
    for facet in &stl {
        let [v0, v1, v2] = &facet.vertices;
        let centroid = (v0 + v1 + v2) / 3.0;
        assert!(facet.normal.dot(&(centroid - center)) > 0.0);
    }
}

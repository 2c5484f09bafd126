use itertools::Itertools;
use std::collections::HashMap;

use super::{Dcel, DartId, FaceId, NewDart, VertexId};
use crate::Vec2;

/// Error in building a mesh from polygons with [`Dcel::from_polygons`].
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// A polygon has fewer than three corners.
    #[error("Polygon {0} has fewer than 3 corners")]
    DegeneratePolygon(usize),
    /// A polygon refers to a vertex that wasn't given.
    #[error("Polygon {polygon} refers to vertex {vertex}, but only {count} vertices were given")]
    VertexOutOfRange {
        /// Index of the offending polygon.
        polygon: usize,
        /// The vertex index it refers to.
        vertex: usize,
        /// Number of vertices given.
        count: usize,
    },
    /// A polygon visits the same vertex more than once.
    #[error("Polygon {polygon} visits vertex {vertex} more than once")]
    RepeatedVertex {
        /// Index of the offending polygon.
        polygon: usize,
        /// The repeated vertex index.
        vertex: usize,
    },
    /// Two polygons share a side in the same direction,
    /// meaning they overlap or are oriented inconsistently.
    #[error("The side from vertex {0} to vertex {1} appears in more than one polygon")]
    DuplicateSide(usize, usize),
    /// The boundary of the mesh passes through a vertex more than once,
    /// so the rotation around it can't be closed.
    #[error("Vertex {0} lies on more than one boundary loop")]
    NonManifoldBoundary(usize),
    /// Polygons around a vertex form more than one fan,
    /// e.g. two closed surfaces touching at a single point,
    /// so walking around it can't reach all of them.
    #[error("Vertex {0} is shared by more than one fan of polygons")]
    NonManifoldVertex(usize),
}

impl<V, E, F> Dcel<V, E, F>
where
    E: Default,
    F: Default,
{
    /// Build a mesh from vertex payloads and polygons
    /// given as lists of indices into the vertices.
    ///
    /// Polygons should all be oriented the same way
    /// (counterclockwise, for vertex rotations to come out counterclockwise),
    /// and every side may be shared by at most two polygons.
    /// A face with default data is created for each polygon in order,
    /// after the outer face which gets `outer_face_data`.
    /// Sides not shared by two polygons get a twin on the outer face,
    /// and those twins are linked into cycles around each hole or boundary.
    ///
    /// Edges get default data, one per pair of twins.
    /// ```
    /// # use dcel::{Dcel, Vec2};
    /// let vertices = vec![
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(1.0, 0.0),
    ///     Vec2::new(1.0, 1.0),
    ///     Vec2::new(0.0, 1.0),
    /// ];
    /// let triangles: [[usize; 3]; 2] = [[0, 1, 2], [0, 2, 3]];
    /// let mesh: Dcel<Vec2, (), ()> = Dcel::from_polygons(vertices, triangles, ()).unwrap();
    /// assert_eq!(mesh.edge_count(), 5);
    /// assert_eq!(mesh.outer_face().unwrap().degree(), Ok(4));
    /// ```
    pub fn from_polygons<P>(
        vertices: Vec<V>,
        polygons: impl IntoIterator<Item = P>,
        outer_face_data: F,
    ) -> Result<Self, BuildError>
    where
        P: AsRef<[usize]>,
    {
        let mut mesh = Self::new(None);
        let outer_face = mesh.new_face(outer_face_data);
        mesh.outer_face = Some(outer_face);

        let vertex_count = vertices.len();
        let vertex_ids: Vec<VertexId> = vertices.into_iter().map(|v| mesh.new_vertex(v)).collect();

        // polygon sides by their (origin, destination) vertex indices,
        // with a separate list to keep creation order for the boundary pass
        let mut sides: HashMap<(usize, usize), DartId> = HashMap::new();
        let mut side_order: Vec<(usize, usize, DartId)> = Vec::new();

        for (polygon_idx, polygon) in polygons.into_iter().enumerate() {
            let polygon = polygon.as_ref();
            if polygon.len() < 3 {
                return Err(BuildError::DegeneratePolygon(polygon_idx));
            }
            if let Some(&vertex) = polygon.iter().find(|&&v| v >= vertex_count) {
                return Err(BuildError::VertexOutOfRange {
                    polygon: polygon_idx,
                    vertex,
                    count: vertex_count,
                });
            }
            if let Some(&vertex) = polygon.iter().duplicates().next() {
                return Err(BuildError::RepeatedVertex {
                    polygon: polygon_idx,
                    vertex,
                });
            }

            let face = mesh.new_face(F::default());
            let mut first: Option<DartId> = None;
            let mut prev: Option<DartId> = None;
            for (&from, &to) in polygon.iter().circular_tuple_windows() {
                if sides.contains_key(&(from, to)) {
                    return Err(BuildError::DuplicateSide(from, to));
                }
                let twin = sides.get(&(to, from)).copied();
                // the second side of an edge reuses the edge created for the first
                let edge = match twin {
                    Some(twin) => mesh.darts[twin.0].edge,
                    None => Some(mesh.new_edge(E::default())),
                };
                let dart = mesh.new_dart(NewDart {
                    origin: Some(vertex_ids[from]),
                    edge,
                    face: Some(face),
                    prev,
                    twin,
                    ..Default::default()
                });
                sides.insert((from, to), dart);
                side_order.push((from, to, dart));
                first.get_or_insert(dart);
                prev = Some(dart);
            }
            if let (Some(first), Some(last)) = (first, prev) {
                mesh.make_next(last, first);
            }
        }

        // close the boundary with darts on the outer face going the other way.
        // every boundary vertex must have exactly one of these leaving it,
        // otherwise the cycles through it are ambiguous
        let mut boundary_from: HashMap<usize, DartId> = HashMap::new();
        let mut boundary: Vec<(usize, DartId)> = Vec::new();
        for &(from, to, inner) in &side_order {
            if sides.contains_key(&(to, from)) {
                continue;
            }
            let dart = mesh.new_dart(NewDart {
                origin: Some(vertex_ids[to]),
                edge: mesh.darts[inner.0].edge,
                face: Some(outer_face),
                twin: Some(inner),
                ..Default::default()
            });
            if boundary_from.insert(to, dart).is_some() {
                return Err(BuildError::NonManifoldBoundary(to));
            }
            boundary.push((from, dart));
        }
        // a boundary dart ending at a vertex continues with the one leaving it.
        // every boundary vertex has as many boundary sides arriving as leaving,
        // so the lookup always succeeds
        for (dest, dart) in boundary {
            if let Some(&next) = boundary_from.get(&dest) {
                mesh.make_next(dart, next);
            }
        }

        // every dart leaving a vertex must be on that vertex's rotation
        let mut dart_counts = vec![0; vertex_count];
        for dart in &mesh.darts {
            if let Some(origin) = dart.origin {
                dart_counts[origin.0] += 1;
            }
        }
        for (vertex, &count) in vertex_ids.iter().zip(&dart_counts) {
            let Some(start) = mesh.vertices[vertex.0].dart else {
                continue;
            };
            let fan_size = mesh.out_rotation(start).map_or(0, |fan| fan.len());
            if fan_size != count {
                return Err(BuildError::NonManifoldVertex(vertex.index()));
            }
        }

        log::debug!(
            "built DCEL with {} vertices, {} darts, {} edges, {} faces ({} boundary darts)",
            mesh.vertex_count(),
            mesh.dart_count(),
            mesh.edge_count(),
            mesh.face_count(),
            boundary_from.len(),
        );

        Ok(mesh)
    }
}

//
// fixtures
//

/// A single triangle with corners `a = (0, 0)`, `b = (1, 0)`, `c = (0, 1)`,
/// built dart by dart with the low-level operations.
///
/// Vertices are created in the order `a, b, c`,
/// edges in the order `ab, bc, ca`,
/// darts in the order `a->b, b->a, b->c, c->b, c->a, a->c`.
/// The outer face comes first, then the triangle.
///
/// This is public for visibility in doctests, which frequently need an instance of a mesh.
/// It is not meant to be used by users and thus hidden from docs.
#[doc(hidden)]
pub fn tiny_triangle() -> Dcel<Vec2, (), ()> {
    let mut mesh = Dcel::new(None);
    let outer: FaceId = mesh.new_face(());
    mesh.outer_face = Some(outer);
    let inner = mesh.new_face(());

    let [a, b, c] = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
    ]
    .map(|pos| mesh.new_vertex(pos));
    let [ab_edge, bc_edge, ca_edge] = [(); 3].map(|_| mesh.new_edge(()));

    // inner darts run counterclockwise, outer ones clockwise.
    // next/prev links get filled in as soon as both ends exist
    let ab = mesh.new_dart(NewDart {
        origin: Some(a),
        edge: Some(ab_edge),
        face: Some(inner),
        ..Default::default()
    });
    let ba = mesh.new_dart(NewDart {
        origin: Some(b),
        edge: Some(ab_edge),
        face: Some(outer),
        twin: Some(ab),
        ..Default::default()
    });
    let bc = mesh.new_dart(NewDart {
        origin: Some(b),
        edge: Some(bc_edge),
        face: Some(inner),
        prev: Some(ab),
        ..Default::default()
    });
    let cb = mesh.new_dart(NewDart {
        origin: Some(c),
        edge: Some(bc_edge),
        face: Some(outer),
        twin: Some(bc),
        next: Some(ba),
        ..Default::default()
    });
    let ca = mesh.new_dart(NewDart {
        origin: Some(c),
        edge: Some(ca_edge),
        face: Some(inner),
        prev: Some(bc),
        next: Some(ab),
        ..Default::default()
    });
    let _ac = mesh.new_dart(NewDart {
        origin: Some(a),
        edge: Some(ca_edge),
        face: Some(outer),
        twin: Some(ca),
        prev: Some(ba),
        next: Some(cb),
    });

    mesh
}

/// A small hexagon-shaped 2D mesh of six triangles around a center vertex.
/// Shaped somewhat like this:
///    ____
///   /\  /\
///  /__\/__\
///  \  /\  /
///   \/__\/
///
/// The center is vertex 0, and the rim vertices 1 to 6
/// go counterclockwise starting from `(1, 0)`.
/// Faces are the outer face followed by the triangles
/// `[0, 1, 2], [0, 2, 3], ..., [0, 6, 1]`.
///
/// This is public for visibility in doctests, which frequently need an instance of a mesh.
/// It is not meant to be used by users and thus hidden from docs.
#[doc(hidden)]
pub fn tiny_hexagon() -> Dcel<Vec2, (), ()> {
    let mut vertices = vec![Vec2::zeros()];
    vertices.extend((0..6).map(|i| {
        let angle = i as f64 * std::f64::consts::FRAC_PI_3;
        Vec2::new(angle.cos(), angle.sin())
    }));
    let triangles = (1..=6usize).map(|i| [0, i, i % 6 + 1]);

    Dcel::from_polygons(vertices, triangles, ()).expect("Malformed hexagon fixture")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;
    use approx::relative_eq;

    type IndexMesh = Dcel<usize, (), ()>;

    /// Signed area of a face computed from its corner positions,
    /// positive for counterclockwise faces.
    fn signed_area(mesh: &Dcel<Vec2, (), ()>, face: FaceId) -> f64 {
        let corners: Vec<Vec2> = mesh
            .face(face)
            .vertices()
            .unwrap()
            .iter()
            .map(|v| *v.data())
            .collect();
        corners
            .iter()
            .circular_tuple_windows()
            .map(|(p, q)| p.x * q.y - q.x * p.y)
            .sum::<f64>()
            / 2.0
    }

    /// The hexagon has the expected number of each entity,
    /// satisfies Euler's formula and passes validation.
    #[test]
    fn tiny_hexagon_is_correct() {
        let mesh = tiny_hexagon();
        assert_eq!(mesh.vertex_count(), 7);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.face_count(), 7);
        // 18 inner darts and 6 on the outer boundary
        assert_eq!(mesh.dart_count(), 24);

        let euler_characteristic = mesh.vertex_count() as isize - mesh.edge_count() as isize
            + mesh.face_count() as isize;
        assert_eq!(euler_characteristic, 2);

        assert_eq!(mesh.validate(), Ok(()));

        let outer = mesh.outer_face().unwrap();
        assert_eq!(outer.id().index(), 0);
        itertools::assert_equal(
            mesh.faces().map(|f| f.is_outer()),
            std::iter::once(true).chain(std::iter::repeat(false).take(6)),
        );
        for edge in mesh.edges() {
            let [dart, twin] = edge.darts().unwrap();
            assert_eq!(dart.edge(), twin.edge());
        }
    }

    /// Face geometry recovered through traversal matches the input:
    /// triangles are counterclockwise and together cover the hexagon,
    /// which the outer face traces clockwise.
    #[test]
    fn hexagon_areas() {
        let mesh = tiny_hexagon();
        let hexagon_area = 3.0 * f64::sqrt(3.0) / 2.0;

        let mut total = 0.0;
        for face in mesh.faces().filter(|f| !f.is_outer()) {
            let area = signed_area(&mesh, face.id());
            assert!(relative_eq!(area, hexagon_area / 6.0, epsilon = 1e-12));
            total += area;
        }
        assert!(relative_eq!(total, hexagon_area, epsilon = 1e-12));

        let outer = mesh.outer_face().unwrap().id();
        assert!(relative_eq!(
            signed_area(&mesh, outer),
            -hexagon_area,
            epsilon = 1e-12
        ));
    }

    /// The hand-built triangle and the polygon builder agree on the topology.
    #[test]
    fn triangle_matches_builder() {
        let by_hand = tiny_triangle();
        let triangle: [usize; 3] = [0, 1, 2];
        let built: Dcel<Vec2, (), ()> = Dcel::from_polygons(
            by_hand.vertices().map(|v| *v.data()).collect(),
            [triangle],
            (),
        )
        .unwrap();

        assert_eq!(by_hand.validate(), Ok(()));
        assert_eq!(built.validate(), Ok(()));
        for mesh in [&by_hand, &built] {
            assert_eq!(mesh.vertex_count(), 3);
            assert_eq!(mesh.edge_count(), 3);
            assert_eq!(mesh.dart_count(), 6);
            for vertex in mesh.vertices() {
                let mut neighbors: Vec<usize> = vertex
                    .out_darts()
                    .unwrap()
                    .iter()
                    .map(|d| d.dest().unwrap().id().index())
                    .collect();
                neighbors.sort_unstable();
                let expected: Vec<usize> =
                    (0..3).filter(|&i| i != vertex.id().index()).collect();
                assert_eq!(neighbors, expected);
            }
        }
    }

    /// Polygons with different numbers of sides can be mixed,
    /// and a shared side becomes a single edge.
    #[test]
    fn mixed_polygons() {
        //  3---2---5
        //  |   |  /
        //  0---1-4
        let polygons: [&[usize]; 2] = [&[0, 1, 2, 3], &[1, 4, 5, 2]];
        let mesh = IndexMesh::from_polygons((0..6).collect(), polygons, ()).unwrap();
        assert_eq!(mesh.validate(), Ok(()));
        assert_eq!(mesh.edge_count(), 7);
        assert_eq!(mesh.face_count(), 3);
        assert_eq!(mesh.outer_face().unwrap().degree(), Ok(6));

        let degrees: Vec<usize> = mesh.vertices().map(|v| v.degree().unwrap()).collect();
        assert_eq!(degrees, [2, 3, 3, 2, 2, 2]);

        let quad = mesh.face(FaceId(1));
        let mut corners: Vec<usize> = quad.vertices().unwrap().iter().map(|v| *v.data()).collect();
        corners.sort_unstable();
        assert_eq!(corners, [0, 1, 2, 3]);
    }

    /// A closed surface has no boundary darts, leaving the outer face empty.
    #[test]
    fn closed_tetrahedron() {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        // oriented with normals pointing outward
        let faces: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let mesh: Dcel<Vec3, (), ()> = Dcel::from_polygons(vertices, faces, ()).unwrap();
        assert_eq!(mesh.validate(), Ok(()));
        assert_eq!(mesh.dart_count(), 12);
        assert_eq!(mesh.edge_count(), 6);
        assert!(mesh.outer_face().unwrap().dart().is_none());
        assert!(mesh.vertices().all(|v| v.degree() == Ok(3)));
    }

    /// Bad input is rejected with the appropriate error.
    #[test]
    fn invalid_polygons() {
        fn build(count: usize, polygons: &[&[usize]]) -> Result<(), BuildError> {
            IndexMesh::from_polygons((0..count).collect(), polygons.iter(), ()).map(|_| ())
        }

        assert_eq!(
            build(3, &[&[0, 1]]),
            Err(BuildError::DegeneratePolygon(0))
        );
        assert_eq!(
            build(3, &[&[0, 1, 2], &[2, 1, 3]]),
            Err(BuildError::VertexOutOfRange {
                polygon: 1,
                vertex: 3,
                count: 3
            })
        );
        assert_eq!(
            build(3, &[&[0, 1, 0, 2]]),
            Err(BuildError::RepeatedVertex {
                polygon: 0,
                vertex: 0
            })
        );
        assert_eq!(
            build(3, &[&[0, 1, 2], &[0, 1, 2]]),
            Err(BuildError::DuplicateSide(0, 1))
        );
        // two triangles touching only at vertex 0
        assert_eq!(
            build(5, &[&[0, 1, 2], &[0, 3, 4]]),
            Err(BuildError::NonManifoldBoundary(0))
        );
    }

    /// Closed surfaces touching at a single vertex are rejected,
    /// since the rotation around that vertex only covers one of them.
    #[test]
    fn tetrahedra_sharing_a_vertex() {
        let vertices: Vec<usize> = (0..7).collect();
        let first: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let second: [[usize; 3]; 4] = [[0, 5, 4], [0, 4, 6], [4, 5, 6], [5, 0, 6]];
        let result = IndexMesh::from_polygons(vertices.clone(), first, ());
        assert!(result.is_ok());

        let both = first.into_iter().chain(second);
        assert_eq!(
            IndexMesh::from_polygons(vertices, both, ()).map(|_| ()),
            Err(BuildError::NonManifoldVertex(0))
        );

        // a closed surface and an open fan touching at a vertex
        // leave no boundary vertex repeated, but are just as pinched
        let fan: [[usize; 3]; 1] = [[0, 4, 5]];
        assert_eq!(
            IndexMesh::from_polygons((0..6).collect(), first.into_iter().chain(fan), ())
                .map(|_| ()),
            Err(BuildError::NonManifoldVertex(0))
        );
    }
}

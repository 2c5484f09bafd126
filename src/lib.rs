//! A half-edge mesh, also known as a doubly-connected edge list (DCEL),
//! for representing planar and polyhedral subdivisions.
//!
//! A [`Dcel`] holds vertices, darts (directed half-edges), undirected edges and faces,
//! each addressed by a small integer handle and linked to each other through those handles.
//! Every dart knows its origin vertex, its edge, the face it bounds,
//! the darts before and after it around that face, and its twin going the other way.
//!
//! # Building
//!
//! Meshes are grown incrementally by some external algorithm
//! (an incremental convex hull or triangulation, for instance)
//! using the factory methods [`new_vertex`][Dcel::new_vertex], [`new_edge`][Dcel::new_edge],
//! [`new_face`][Dcel::new_face] and [`new_dart`][Dcel::new_dart],
//! and the relinking methods [`make_next`][Dcel::make_next],
//! [`make_prev`][Dcel::make_prev] and [`make_twin`][Dcel::make_twin].
//! None of these check anything; the builder is trusted to leave the mesh consistent.
//! For the common case of a mesh given as a list of polygons,
//! [`Dcel::from_polygons`] does all of this.
//!
//! # Traversal
//!
//! Consumers read the mesh through views obtained from the mesh
//! ([`VertexView`], [`DartView`], [`EdgeView`], [`FaceView`]).
//! Traversals that follow links return a [`MalformedError`]
//! if they run into a link that was never set or a cycle that never closes.
//! ```
//! # use dcel::mesh::tiny_triangle;
//! let mesh = tiny_triangle();
//! for face in mesh.faces() {
//!     for dart in face.darts().unwrap() {
//!         let [from, to] = [dart.origin(), dart.dest()].map(|v| *v.unwrap().data());
//!         assert_ne!(from, to);
//!     }
//! }
//! ```
//!
//! Payloads at vertices, edges and faces can be anything;
//! the mesh never looks inside them.
//! The fixed-size `nalgebra` vector aliases [`Vec2`] and [`Vec3`]
//! are provided for the common case of vertices that are just positions.

#![warn(missing_docs)]

pub mod mesh;
#[doc(inline)]
pub use mesh::{
    BuildError, DartId, DartView, Dcel, EdgeId, EdgeView, FaceId, FaceView, MalformedError,
    NewDart, VertexId, VertexView,
};

// nalgebra re-exports of common types for convenience

pub use nalgebra as na;
/// Type alias for a 2D `nalgebra` vector.
pub type Vec2 = na::Vector2<f64>;
/// Type alias for a 3D `nalgebra` vector.
pub type Vec3 = na::Vector3<f64>;

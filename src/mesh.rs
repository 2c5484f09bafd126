//! The half-edge mesh container, its entity handles and the operations
//! builders use to grow it.

/// Mesh construction from polygon soups, and the fixture meshes used in tests.
mod mesh_construction;
pub use mesh_construction::BuildError;
/// re-export the testing meshes for use in other modules' tests
/// (pub because doctests need them too)
#[doc(hidden)]
pub use mesh_construction::{tiny_hexagon, tiny_triangle};

/// On-demand checking of the structural invariants.
mod validation;

/// Borrowed views into single entities, carrying the traversal operations.
mod views;
pub use views::{DartView, EdgeView, FaceView, VertexView};

use std::fmt;

macro_rules! entity_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Get the index of this entity in the mesh's registry,
            /// which is also its position in creation order.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

entity_handle!(
    /// Handle to a vertex in a [`Dcel`].
    VertexId
);
entity_handle!(
    /// Handle to a dart (directed half-edge) in a [`Dcel`].
    DartId
);
entity_handle!(
    /// Handle to an undirected edge in a [`Dcel`].
    EdgeId
);
entity_handle!(
    /// Handle to a face in a [`Dcel`].
    FaceId
);

/// A structural invariant of the mesh was found to be broken.
///
/// This is only ever raised by traversals and [`Dcel::validate`];
/// building and relinking never fail.
/// It indicates a bug in whatever built the mesh
/// and should be treated as fatal to the query that hit it.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedError {
    /// A vertex has no outgoing dart to start a traversal from.
    #[error("Malformed DCEL: {0} has no outgoing dart")]
    MissingVertexDart(VertexId),
    /// An edge has no dart to start a traversal from.
    #[error("Malformed DCEL: {0} has no dart")]
    MissingEdgeDart(EdgeId),
    /// A face has no boundary dart to start a traversal from.
    #[error("Malformed DCEL: {0} has no boundary dart")]
    MissingFaceDart(FaceId),
    /// A dart has no `next` link where one was needed.
    #[error("Malformed DCEL: {0} has no next dart")]
    MissingNext(DartId),
    /// A dart has no `prev` link where one was needed.
    #[error("Malformed DCEL: {0} has no previous dart")]
    MissingPrev(DartId),
    /// A dart has no `twin` link where one was needed.
    #[error("Malformed DCEL: {0} has no twin")]
    MissingTwin(DartId),
    /// A dart has no edge where one was needed.
    #[error("Malformed DCEL: {0} has no edge")]
    MissingEdge(DartId),
    /// A dart has no origin vertex where one was needed.
    #[error("Malformed DCEL: {0} has no origin")]
    MissingOrigin(DartId),
    /// Walking from the dart visited more darts than exist in the mesh
    /// without coming back to it.
    #[error("Malformed DCEL: the cycle starting from {0} never closes")]
    UnclosedCycle(DartId),
    /// The dart's twin does not have the dart as its twin.
    #[error("Malformed DCEL: the twin of {0} is not twinned back to it")]
    TwinMismatch(DartId),
    /// The dart's next does not have it as prev, or vice versa.
    #[error("Malformed DCEL: next and prev links around {0} are not reciprocal")]
    NextPrevMismatch(DartId),
    /// The dart is on a face cycle but belongs to a different face.
    #[error("Malformed DCEL: {0} is on the boundary of a face it does not belong to")]
    FaceMismatch(DartId),
    /// The dart's origin disagrees with the vertex it was reached from,
    /// or walking around its origin never reaches it.
    #[error("Malformed DCEL: the origin of {0} does not match its neighbors")]
    OriginMismatch(DartId),
    /// The dart and its twin (or its edge's representative) disagree on the edge.
    #[error("Malformed DCEL: {0} does not share an edge with its twin")]
    EdgeMismatch(DartId),
}

#[derive(Clone, Debug)]
struct Vertex<V> {
    data: V,
    /// any dart whose origin is this vertex
    dart: Option<DartId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Dart {
    origin: Option<VertexId>,
    edge: Option<EdgeId>,
    face: Option<FaceId>,
    next: Option<DartId>,
    prev: Option<DartId>,
    twin: Option<DartId>,
}

#[derive(Clone, Debug)]
struct Edge<E> {
    data: E,
    /// either one of the two darts of this edge
    dart: Option<DartId>,
}

#[derive(Clone, Debug)]
struct Face<F> {
    data: F,
    /// any dart on the boundary of this face
    dart: Option<DartId>,
}

/// Links to give a dart when it's created with [`Dcel::new_dart`].
///
/// Every link is optional; leave out what isn't known yet
/// and set it later with the relinking operations.
/// ```
/// # use dcel::{Dcel, NewDart};
/// let mut mesh: Dcel<(), (), ()> = Dcel::new(None);
/// let v = mesh.new_vertex(());
/// let first = mesh.new_dart(NewDart {
///     origin: Some(v),
///     ..Default::default()
/// });
/// let second = mesh.new_dart(NewDart {
///     prev: Some(first),
///     twin: Some(first),
///     ..Default::default()
/// });
/// assert_eq!(mesh.dart(first).next().map(|d| d.id()), Some(second));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewDart {
    /// Vertex the dart leaves from.
    /// The vertex's outgoing dart is set to the new dart.
    pub origin: Option<VertexId>,
    /// Edge the dart is a side of.
    /// The edge's dart is set to the new dart.
    pub edge: Option<EdgeId>,
    /// Face the dart bounds.
    /// The face's boundary dart is set to the new dart.
    pub face: Option<FaceId>,
    /// Dart preceding the new one on its face cycle.
    /// Its `next` is set to the new dart.
    pub prev: Option<DartId>,
    /// Dart following the new one on its face cycle.
    /// Its `prev` is set to the new dart.
    pub next: Option<DartId>,
    /// The oppositely directed dart on the same edge.
    /// Its `twin` is set to the new dart.
    pub twin: Option<DartId>,
}

/// A doubly-connected edge list:
/// vertices, darts (directed half-edges), edges and faces
/// of a planar or polyhedral subdivision, linked into one structure.
///
/// The mesh owns every entity created through it,
/// and entities live as long as the mesh does.
/// Vertices, edges and faces carry payloads of type `V`, `E` and `F`
/// which are never inspected here.
///
/// Building is permissive: links are written exactly as requested
/// and nothing is checked until a traversal needs it
/// (or [`validate`][Self::validate] is called explicitly).
#[derive(Clone, Debug)]
pub struct Dcel<V, E, F> {
    vertices: Vec<Vertex<V>>,
    darts: Vec<Dart>,
    edges: Vec<Edge<E>>,
    faces: Vec<Face<F>>,
    outer_face: Option<FaceId>,
}

impl<V, E, F> Default for Dcel<V, E, F> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<V, E, F> Dcel<V, E, F> {
    /// Create an empty mesh.
    ///
    /// If `outer_face_data` is given, a face for the unbounded exterior
    /// is created right away (as the first face of the mesh)
    /// and can be found with [`outer_face`][Self::outer_face].
    pub fn new(outer_face_data: Option<F>) -> Self {
        let mut mesh = Self {
            vertices: Vec::new(),
            darts: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            outer_face: None,
        };
        if let Some(data) = outer_face_data {
            let outer = mesh.new_face(data);
            mesh.outer_face = Some(outer);
        }
        mesh
    }

    //
    // factories
    //

    /// Create a vertex with no outgoing dart.
    pub fn new_vertex(&mut self, data: V) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex { data, dart: None });
        id
    }

    /// Create an edge with no darts.
    pub fn new_edge(&mut self, data: E) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { data, dart: None });
        id
    }

    /// Create a face with no boundary darts.
    pub fn new_face(&mut self, data: F) -> FaceId {
        let id = FaceId(self.faces.len());
        self.faces.push(Face { data, dart: None });
        id
    }

    /// Create a dart with the given links.
    ///
    /// Every entity linked to also gets linked back to the new dart,
    /// overwriting whatever it pointed to before
    /// (see the field docs of [`NewDart`]).
    /// The last dart created for a vertex, edge or face
    /// becomes its representative.
    pub fn new_dart(&mut self, links: NewDart) -> DartId {
        let id = DartId(self.darts.len());
        self.darts.push(Dart {
            origin: links.origin,
            edge: links.edge,
            face: links.face,
            next: links.next,
            prev: links.prev,
            twin: links.twin,
        });

        if let Some(edge) = links.edge {
            self.edges[edge.0].dart = Some(id);
        }
        if let Some(origin) = links.origin {
            self.vertices[origin.0].dart = Some(id);
        }
        if let Some(face) = links.face {
            self.faces[face.0].dart = Some(id);
        }

        if let Some(prev) = links.prev {
            self.darts[prev.0].next = Some(id);
        }
        if let Some(next) = links.next {
            self.darts[next.0].prev = Some(id);
        }
        if let Some(twin) = links.twin {
            self.darts[twin.0].twin = Some(id);
        }

        id
    }

    //
    // relinking
    //

    /// Make `next` follow `dart` on its face cycle
    /// (sets `dart.next` and `next.prev`).
    pub fn make_next(&mut self, dart: DartId, next: DartId) {
        log::trace!("linking {dart} -> {next}");
        self.darts[dart.0].next = Some(next);
        self.darts[next.0].prev = Some(dart);
    }

    /// Make `prev` precede `dart` on its face cycle
    /// (sets `dart.prev` and `prev.next`).
    pub fn make_prev(&mut self, dart: DartId, prev: DartId) {
        log::trace!("linking {prev} -> {dart}");
        self.darts[dart.0].prev = Some(prev);
        self.darts[prev.0].next = Some(dart);
    }

    /// Make `dart` and `twin` each other's twins.
    ///
    /// Passing `None` unpairs `dart`:
    /// its twin link is cleared, and so is its former twin's
    /// if that still pointed back at `dart`.
    pub fn make_twin(&mut self, dart: DartId, twin: Option<DartId>) {
        log::trace!("twinning {dart} with {twin:?}");
        match twin {
            Some(twin) => {
                self.darts[dart.0].twin = Some(twin);
                self.darts[twin.0].twin = Some(dart);
            }
            None => {
                if let Some(old) = self.darts[dart.0].twin.take() {
                    if self.darts[old.0].twin == Some(dart) {
                        self.darts[old.0].twin = None;
                    }
                }
            }
        }
    }

    //
    // registries
    //

    /// Get the number of vertices in the mesh.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of darts in the mesh.
    #[inline]
    pub fn dart_count(&self) -> usize {
        self.darts.len()
    }

    /// Get the number of edges in the mesh.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces in the mesh, including the outer face if there is one.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the face standing for the unbounded exterior, if the mesh has one.
    #[inline]
    pub fn outer_face(&self) -> Option<FaceView<'_, V, E, F>> {
        self.outer_face.map(|id| self.face(id))
    }

    /// Get a view into a vertex.
    ///
    /// Panics if the handle is not from this mesh.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> VertexView<'_, V, E, F> {
        assert!(id.0 < self.vertices.len(), "{id} is out of range");
        VertexView { mesh: self, id }
    }

    /// Get a view into a dart.
    ///
    /// Panics if the handle is not from this mesh.
    #[inline]
    pub fn dart(&self, id: DartId) -> DartView<'_, V, E, F> {
        assert!(id.0 < self.darts.len(), "{id} is out of range");
        DartView { mesh: self, id }
    }

    /// Get a view into an edge.
    ///
    /// Panics if the handle is not from this mesh.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> EdgeView<'_, V, E, F> {
        assert!(id.0 < self.edges.len(), "{id} is out of range");
        EdgeView { mesh: self, id }
    }

    /// Get a view into a face.
    ///
    /// Panics if the handle is not from this mesh.
    #[inline]
    pub fn face(&self, id: FaceId) -> FaceView<'_, V, E, F> {
        assert!(id.0 < self.faces.len(), "{id} is out of range");
        FaceView { mesh: self, id }
    }

    /// Iterate over all vertices in creation order.
    pub fn vertices(&self) -> impl '_ + ExactSizeIterator<Item = VertexView<'_, V, E, F>> {
        (0..self.vertices.len()).map(move |i| VertexView {
            mesh: self,
            id: VertexId(i),
        })
    }

    /// Iterate over all darts in creation order.
    pub fn darts(&self) -> impl '_ + ExactSizeIterator<Item = DartView<'_, V, E, F>> {
        (0..self.darts.len()).map(move |i| DartView {
            mesh: self,
            id: DartId(i),
        })
    }

    /// Iterate over all edges in creation order.
    pub fn edges(&self) -> impl '_ + ExactSizeIterator<Item = EdgeView<'_, V, E, F>> {
        (0..self.edges.len()).map(move |i| EdgeView {
            mesh: self,
            id: EdgeId(i),
        })
    }

    /// Iterate over all faces in creation order.
    /// The outer face, if present, comes first.
    pub fn faces(&self) -> impl '_ + ExactSizeIterator<Item = FaceView<'_, V, E, F>> {
        (0..self.faces.len()).map(move |i| FaceView {
            mesh: self,
            id: FaceId(i),
        })
    }

    //
    // payloads
    //

    /// Get the data attached to a vertex.
    #[inline]
    pub fn vertex_data(&self, id: VertexId) -> &V {
        &self.vertices[id.0].data
    }

    /// Get mutable access to the data attached to a vertex.
    #[inline]
    pub fn vertex_data_mut(&mut self, id: VertexId) -> &mut V {
        &mut self.vertices[id.0].data
    }

    /// Get the data attached to an edge.
    #[inline]
    pub fn edge_data(&self, id: EdgeId) -> &E {
        &self.edges[id.0].data
    }

    /// Get mutable access to the data attached to an edge.
    #[inline]
    pub fn edge_data_mut(&mut self, id: EdgeId) -> &mut E {
        &mut self.edges[id.0].data
    }

    /// Get the data attached to a face.
    #[inline]
    pub fn face_data(&self, id: FaceId) -> &F {
        &self.faces[id.0].data
    }

    /// Get mutable access to the data attached to a face.
    #[inline]
    pub fn face_data_mut(&mut self, id: FaceId) -> &mut F {
        &mut self.faces[id.0].data
    }

    //
    // traversal internals
    //

    /// Follow `step` from `start` until it comes back around to `start`,
    /// collecting every dart visited along the way.
    ///
    /// A well-formed cycle can't be longer than the number of darts in the mesh,
    /// so the walk gives up with `UnclosedCycle` after that many steps.
    /// This catches cycles that loop back into themselves
    /// somewhere other than the start.
    fn collect_cycle(
        &self,
        start: DartId,
        step: impl Fn(DartId) -> Result<DartId, MalformedError>,
    ) -> Result<Vec<DartId>, MalformedError> {
        let mut cycle = Vec::new();
        let mut curr = start;
        loop {
            cycle.push(curr);
            let next = step(curr).map_err(|err| {
                log::debug!("traversal from {start} failed: {err}");
                err
            })?;
            if next == start {
                return Ok(cycle);
            }
            if cycle.len() >= self.darts.len() {
                log::debug!("traversal from {start} did not close");
                return Err(MalformedError::UnclosedCycle(start));
            }
            curr = next;
        }
    }

    fn face_cycle(&self, start: DartId) -> Result<Vec<DartId>, MalformedError> {
        self.collect_cycle(start, |d| {
            self.darts[d.0].next.ok_or(MalformedError::MissingNext(d))
        })
    }

    /// Outgoing darts around the origin of `start`, stepping with `twin(prev(d))`.
    fn out_rotation(&self, start: DartId) -> Result<Vec<DartId>, MalformedError> {
        self.collect_cycle(start, |d| {
            let prev = self.darts[d.0].prev.ok_or(MalformedError::MissingPrev(d))?;
            self.darts[prev.0].twin.ok_or(MalformedError::MissingTwin(prev))
        })
    }

    /// Incoming darts around the destination of `start`, stepping with `prev(twin(d))`.
    fn in_rotation(&self, start: DartId) -> Result<Vec<DartId>, MalformedError> {
        self.collect_cycle(start, |d| {
            let twin = self.darts[d.0].twin.ok_or(MalformedError::MissingTwin(d))?;
            self.darts[twin.0].prev.ok_or(MalformedError::MissingPrev(twin))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creating a dart links every given entity back to it.
    #[test]
    fn new_dart_links_back() {
        let mut mesh: Dcel<(), (), ()> = Dcel::new(None);
        let v = mesh.new_vertex(());
        let e = mesh.new_edge(());
        let f = mesh.new_face(());

        let a = mesh.new_dart(NewDart {
            origin: Some(v),
            edge: Some(e),
            face: Some(f),
            ..Default::default()
        });
        assert_eq!(mesh.vertices[v.0].dart, Some(a));
        assert_eq!(mesh.edges[e.0].dart, Some(a));
        assert_eq!(mesh.faces[f.0].dart, Some(a));

        let b = mesh.new_dart(NewDart {
            prev: Some(a),
            next: Some(a),
            twin: Some(a),
            ..Default::default()
        });
        assert_eq!(
            mesh.darts[a.0],
            Dart {
                origin: Some(v),
                edge: Some(e),
                face: Some(f),
                next: Some(b),
                prev: Some(b),
                twin: Some(b),
            }
        );
        assert_eq!(
            mesh.darts[b.0],
            Dart {
                next: Some(a),
                prev: Some(a),
                twin: Some(a),
                ..Default::default()
            }
        );
    }

    /// The most recently created dart becomes the representative,
    /// regardless of what was there before.
    #[test]
    fn last_dart_wins_representative() {
        let mut mesh: Dcel<(), (), ()> = Dcel::new(None);
        let v = mesh.new_vertex(());
        let e = mesh.new_edge(());
        let f = mesh.new_face(());
        let links = NewDart {
            origin: Some(v),
            edge: Some(e),
            face: Some(f),
            ..Default::default()
        };

        let _first = mesh.new_dart(links);
        let second = mesh.new_dart(links);
        assert_eq!(mesh.vertices[v.0].dart, Some(second));
        assert_eq!(mesh.edges[e.0].dart, Some(second));
        assert_eq!(mesh.faces[f.0].dart, Some(second));
    }

    /// Relinking operations always set both sides of the link.
    #[test]
    fn relinking_is_reciprocal() {
        let mut mesh: Dcel<(), (), ()> = Dcel::new(None);
        let [a, b, c] = [(); 3].map(|_| mesh.new_dart(NewDart::default()));

        mesh.make_next(a, b);
        assert_eq!(mesh.darts[a.0].next, Some(b));
        assert_eq!(mesh.darts[b.0].prev, Some(a));

        mesh.make_prev(a, c);
        assert_eq!(mesh.darts[a.0].prev, Some(c));
        assert_eq!(mesh.darts[c.0].next, Some(a));

        mesh.make_twin(a, Some(b));
        assert_eq!(mesh.darts[a.0].twin, Some(b));
        assert_eq!(mesh.darts[b.0].twin, Some(a));
    }

    /// Unpairing a dart clears its former twin too,
    /// but only if the former twin still pointed back.
    #[test]
    fn make_twin_none_unpairs() {
        let mut mesh: Dcel<(), (), ()> = Dcel::new(None);
        let [a, b, c] = [(); 3].map(|_| mesh.new_dart(NewDart::default()));

        mesh.make_twin(a, Some(b));
        mesh.make_twin(a, None);
        assert_eq!(mesh.darts[a.0].twin, None);
        assert_eq!(mesh.darts[b.0].twin, None);

        // b points to a, but a has since been twinned with c
        mesh.make_twin(a, Some(b));
        mesh.make_twin(a, Some(c));
        mesh.make_twin(b, None);
        assert_eq!(mesh.darts[b.0].twin, None);
        assert_eq!(mesh.darts[a.0].twin, Some(c));
        assert_eq!(mesh.darts[c.0].twin, Some(a));

        // unpairing something with no twin is a no-op
        mesh.make_twin(b, None);
        assert_eq!(mesh.darts[b.0].twin, None);
    }

    /// The outer face only exists if data for it was given,
    /// and is registered like any other face.
    #[test]
    fn outer_face_is_optional() {
        let mesh: Dcel<(), (), &str> = Dcel::new(None);
        assert!(mesh.outer_face().is_none());
        assert_eq!(mesh.face_count(), 0);

        let mut mesh: Dcel<(), (), &str> = Dcel::new(Some("outside"));
        let inner = mesh.new_face("inside");
        let outer = mesh.outer_face().expect("outer face was requested");
        assert_eq!(outer.id().index(), 0);
        assert_eq!(*outer.data(), "outside");
        assert!(outer.dart().is_none());
        assert_eq!(mesh.face_count(), 2);
        let face_data: Vec<&str> = mesh.faces().map(|f| *f.data()).collect();
        assert_eq!(face_data, ["outside", "inside"]);
        assert_eq!(*mesh.face_data(inner), "inside");
    }

    /// Registries keep creation order and payloads can be edited in place.
    #[test]
    fn registries_and_payloads() {
        let mut mesh: Dcel<char, u32, ()> = Dcel::new(None);
        let ids: Vec<VertexId> = "abc".chars().map(|c| mesh.new_vertex(c)).collect();
        let e = mesh.new_edge(7);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.edge_count(), 1);
        assert_eq!(mesh.dart_count(), 0);
        itertools::assert_equal(mesh.vertices().map(|v| v.id()), ids.iter().cloned());
        itertools::assert_equal(mesh.vertices().map(|v| *v.data()), "abc".chars());

        *mesh.vertex_data_mut(ids[1]) = 'z';
        *mesh.edge_data_mut(e) += 1;
        assert_eq!(*mesh.vertex_data(ids[1]), 'z');
        assert_eq!(*mesh.edge(e).data(), 8);
        assert_eq!(ids[2].to_string(), "VertexId(2)");
    }

    /// A cycle that loops back on itself without returning to the start
    /// is caught instead of walked forever.
    #[test]
    fn rho_shaped_cycle_is_caught() {
        let mut mesh: Dcel<(), (), ()> = Dcel::new(None);
        let [a, b, c] = [(); 3].map(|_| mesh.new_dart(NewDart::default()));
        mesh.make_next(a, b);
        mesh.make_next(b, c);
        mesh.make_next(c, b);

        assert_eq!(mesh.face_cycle(a), Err(MalformedError::UnclosedCycle(a)));
        assert_eq!(mesh.face_cycle(b), Ok(vec![b, c]));
    }

    /// Vertex walks that fall into a loop not containing their start
    /// are caught the same way.
    #[test]
    fn rho_shaped_rotation_is_caught() {
        let mut mesh: Dcel<(), (), ()> = Dcel::new(None);
        let v = mesh.new_vertex(());
        let out = mesh.new_dart(NewDart {
            origin: Some(v),
            ..Default::default()
        });
        let [back, p, q] = [(); 3].map(|_| mesh.new_dart(NewDart::default()));
        mesh.make_twin(out, Some(back));
        mesh.make_twin(p, Some(q));
        // twin(prev(q)) == q and prev(twin(p)) == p,
        // so both walks get stuck before coming back around
        mesh.make_prev(out, p);
        mesh.make_prev(q, p);

        assert_eq!(mesh.out_rotation(out), Err(MalformedError::UnclosedCycle(out)));
        assert_eq!(mesh.in_rotation(back), Err(MalformedError::UnclosedCycle(back)));

        let vertex = mesh.vertex(v);
        assert_eq!(
            vertex.out_darts().map(|_| ()),
            Err(MalformedError::UnclosedCycle(out))
        );
        assert_eq!(
            vertex.in_darts().map(|_| ()),
            Err(MalformedError::UnclosedCycle(back))
        );
        assert_eq!(vertex.degree(), Err(MalformedError::UnclosedCycle(out)));
    }
}

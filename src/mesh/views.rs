use std::fmt;

use super::{Dcel, DartId, EdgeId, FaceId, MalformedError, VertexId};

// views hold a shared reference and a handle, so they're Copy regardless of payload types.
// derives would put bounds on V, E and F, hence the manual impls
macro_rules! view_impls {
    ($view:ident, $id:ident) => {
        impl<'a, V, E, F> Clone for $view<'a, V, E, F> {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl<'a, V, E, F> Copy for $view<'a, V, E, F> {}

        impl<'a, V, E, F> PartialEq for $view<'a, V, E, F> {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }
        impl<'a, V, E, F> Eq for $view<'a, V, E, F> {}

        impl<'a, V, E, F> fmt::Debug for $view<'a, V, E, F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($view)).field(&self.id.0).finish()
            }
        }

        impl<'a, V, E, F> $view<'a, V, E, F> {
            /// Get the handle of the viewed entity,
            /// e.g. for passing to the mesh's building operations.
            #[inline]
            pub fn id(&self) -> $id {
                self.id
            }
        }
    };
}

/// A view into a single vertex of a [`Dcel`].
pub struct VertexView<'a, V, E, F> {
    pub(super) mesh: &'a Dcel<V, E, F>,
    pub(super) id: VertexId,
}
view_impls!(VertexView, VertexId);

impl<'a, V, E, F> VertexView<'a, V, E, F> {
    /// Get the data attached to this vertex.
    #[inline]
    pub fn data(&self) -> &'a V {
        &self.mesh.vertices[self.id.0].data
    }

    /// Get the representative outgoing dart of this vertex, if it has one.
    #[inline]
    pub fn dart(&self) -> Option<DartView<'a, V, E, F>> {
        self.mesh.vertices[self.id.0].dart.map(|id| self.mesh.dart(id))
    }

    /// Collect every dart leaving this vertex.
    ///
    /// The walk starts from the vertex's representative dart
    /// and steps to `twin(prev(d))`, which rotates around the vertex
    /// (counterclockwise when faces are oriented counterclockwise),
    /// until it comes back to the start.
    /// ```
    /// # use dcel::mesh::tiny_triangle;
    /// let mesh = tiny_triangle();
    /// for vertex in mesh.vertices() {
    ///     let out_darts = vertex.out_darts().unwrap();
    ///     assert_eq!(out_darts.len(), 2);
    ///     assert!(out_darts.iter().all(|d| d.origin() == Some(vertex)));
    /// }
    /// ```
    pub fn out_darts(&self) -> Result<Vec<DartView<'a, V, E, F>>, MalformedError> {
        let start = self.start_dart()?;
        let darts = self.mesh.out_rotation(start)?;
        Ok(darts.into_iter().map(|id| self.mesh.dart(id)).collect())
    }

    /// Collect every dart arriving at this vertex.
    ///
    /// The walk starts from the twin of the vertex's representative dart
    /// and steps to `prev(twin(d))` until it comes back to the start.
    pub fn in_darts(&self) -> Result<Vec<DartView<'a, V, E, F>>, MalformedError> {
        let out = self.start_dart()?;
        let start = self.mesh.darts[out.0].twin.ok_or_else(|| {
            log::debug!("{} has an outgoing dart with no twin", self.id);
            MalformedError::MissingTwin(out)
        })?;
        let darts = self.mesh.in_rotation(start)?;
        Ok(darts.into_iter().map(|id| self.mesh.dart(id)).collect())
    }

    /// Collect the edges of every dart leaving this vertex,
    /// in the same order as [`out_darts`][Self::out_darts].
    pub fn edges(&self) -> Result<Vec<EdgeView<'a, V, E, F>>, MalformedError> {
        self.out_darts()?
            .into_iter()
            .map(|dart| dart.edge().ok_or(MalformedError::MissingEdge(dart.id)))
            .collect()
    }

    /// Get the number of darts leaving this vertex.
    pub fn degree(&self) -> Result<usize, MalformedError> {
        Ok(self.out_darts()?.len())
    }

    fn start_dart(&self) -> Result<DartId, MalformedError> {
        self.mesh.vertices[self.id.0].dart.ok_or_else(|| {
            log::debug!("{} has no outgoing dart", self.id);
            MalformedError::MissingVertexDart(self.id)
        })
    }
}

/// A view into a single dart (directed half-edge) of a [`Dcel`].
///
/// Link accessors return `None` for links that were never set.
pub struct DartView<'a, V, E, F> {
    pub(super) mesh: &'a Dcel<V, E, F>,
    pub(super) id: DartId,
}
view_impls!(DartView, DartId);

impl<'a, V, E, F> DartView<'a, V, E, F> {
    /// Get the vertex this dart leaves from.
    #[inline]
    pub fn origin(&self) -> Option<VertexView<'a, V, E, F>> {
        self.links().origin.map(|id| self.mesh.vertex(id))
    }

    /// Get the vertex this dart points to,
    /// which is the origin of its twin.
    #[inline]
    pub fn dest(&self) -> Option<VertexView<'a, V, E, F>> {
        self.twin().and_then(|twin| twin.origin())
    }

    /// Get the edge this dart is a side of.
    #[inline]
    pub fn edge(&self) -> Option<EdgeView<'a, V, E, F>> {
        self.links().edge.map(|id| self.mesh.edge(id))
    }

    /// Get the face this dart bounds.
    #[inline]
    pub fn face(&self) -> Option<FaceView<'a, V, E, F>> {
        self.links().face.map(|id| self.mesh.face(id))
    }

    /// Get the dart following this one on its face cycle.
    #[inline]
    pub fn next(&self) -> Option<DartView<'a, V, E, F>> {
        self.links().next.map(|id| self.mesh.dart(id))
    }

    /// Get the dart preceding this one on its face cycle.
    #[inline]
    pub fn prev(&self) -> Option<DartView<'a, V, E, F>> {
        self.links().prev.map(|id| self.mesh.dart(id))
    }

    /// Get the oppositely directed dart on the same edge.
    #[inline]
    pub fn twin(&self) -> Option<DartView<'a, V, E, F>> {
        self.links().twin.map(|id| self.mesh.dart(id))
    }

    /// Collect the darts of the cycle this dart is on by following `next` links,
    /// starting with this dart.
    /// ```
    /// # use dcel::mesh::tiny_triangle;
    /// let mesh = tiny_triangle();
    /// let dart = mesh.darts().next().unwrap();
    /// let cycle = dart.cycle().unwrap();
    /// assert_eq!(cycle.len(), 3);
    /// assert_eq!(cycle[0], dart);
    /// assert_eq!(cycle[2].next(), Some(dart));
    /// ```
    pub fn cycle(&self) -> Result<Vec<DartView<'a, V, E, F>>, MalformedError> {
        let darts = self.mesh.face_cycle(self.id)?;
        Ok(darts.into_iter().map(|id| self.mesh.dart(id)).collect())
    }

    /// The [`cycle`][Self::cycle] of this dart in reverse order,
    /// so this dart comes last.
    ///
    /// This reverses the forward walk rather than following `prev` links,
    /// so it fails exactly when `cycle` does.
    pub fn reverse_cycle(&self) -> Result<Vec<DartView<'a, V, E, F>>, MalformedError> {
        let mut cycle = self.cycle()?;
        cycle.reverse();
        Ok(cycle)
    }

    #[inline]
    fn links(&self) -> &'a super::Dart {
        &self.mesh.darts[self.id.0]
    }
}

/// A view into a single undirected edge of a [`Dcel`].
pub struct EdgeView<'a, V, E, F> {
    pub(super) mesh: &'a Dcel<V, E, F>,
    pub(super) id: EdgeId,
}
view_impls!(EdgeView, EdgeId);

impl<'a, V, E, F> EdgeView<'a, V, E, F> {
    /// Get the data attached to this edge.
    #[inline]
    pub fn data(&self) -> &'a E {
        &self.mesh.edges[self.id.0].data
    }

    /// Get the representative dart of this edge, if it has one.
    #[inline]
    pub fn dart(&self) -> Option<DartView<'a, V, E, F>> {
        self.mesh.edges[self.id.0].dart.map(|id| self.mesh.dart(id))
    }

    /// Get both darts of this edge:
    /// the representative dart and its twin.
    pub fn darts(&self) -> Result<[DartView<'a, V, E, F>; 2], MalformedError> {
        let dart = self
            .dart()
            .ok_or(MalformedError::MissingEdgeDart(self.id))?;
        let twin = dart.twin().ok_or(MalformedError::MissingTwin(dart.id))?;
        Ok([dart, twin])
    }

    /// Get the two vertices this edge connects,
    /// starting with the origin of the representative dart.
    pub fn endpoints(&self) -> Result<[VertexView<'a, V, E, F>; 2], MalformedError> {
        let [dart, twin] = self.darts()?;
        let origin = dart.origin().ok_or(MalformedError::MissingOrigin(dart.id))?;
        let dest = twin.origin().ok_or(MalformedError::MissingOrigin(twin.id))?;
        Ok([origin, dest])
    }
}

/// A view into a single face of a [`Dcel`].
pub struct FaceView<'a, V, E, F> {
    pub(super) mesh: &'a Dcel<V, E, F>,
    pub(super) id: FaceId,
}
view_impls!(FaceView, FaceId);

impl<'a, V, E, F> FaceView<'a, V, E, F> {
    /// Get the data attached to this face.
    #[inline]
    pub fn data(&self) -> &'a F {
        &self.mesh.faces[self.id.0].data
    }

    /// Get the representative boundary dart of this face, if it has one.
    #[inline]
    pub fn dart(&self) -> Option<DartView<'a, V, E, F>> {
        self.mesh.faces[self.id.0].dart.map(|id| self.mesh.dart(id))
    }

    /// Whether this is the mesh's outer face.
    #[inline]
    pub fn is_outer(&self) -> bool {
        self.mesh.outer_face == Some(self.id)
    }

    /// Collect the darts bounding this face in cycle order,
    /// starting from the face's representative dart.
    pub fn darts(&self) -> Result<Vec<DartView<'a, V, E, F>>, MalformedError> {
        let dart = self.dart().ok_or_else(|| {
            log::debug!("{} has no boundary dart", self.id);
            MalformedError::MissingFaceDart(self.id)
        })?;
        dart.cycle()
    }

    /// Collect the corners of this face,
    /// i.e. the origins of its boundary darts in cycle order.
    ///
    /// This is the polygon to draw for the face:
    /// ```
    /// # use dcel::mesh::tiny_hexagon;
    /// let mesh = tiny_hexagon();
    /// for face in mesh.faces().filter(|f| !f.is_outer()) {
    ///     let polygon: Vec<dcel::Vec2> = face
    ///         .vertices()
    ///         .unwrap()
    ///         .iter()
    ///         .map(|v| *v.data())
    ///         .collect();
    ///     assert_eq!(polygon.len(), 3);
    /// }
    /// ```
    pub fn vertices(&self) -> Result<Vec<VertexView<'a, V, E, F>>, MalformedError> {
        self.darts()?
            .into_iter()
            .map(|dart| dart.origin().ok_or(MalformedError::MissingOrigin(dart.id)))
            .collect()
    }

    /// Get the number of darts bounding this face.
    pub fn degree(&self) -> Result<usize, MalformedError> {
        Ok(self.darts()?.len())
    }
}

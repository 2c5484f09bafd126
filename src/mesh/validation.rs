use fixedbitset as fb;

use super::{Dcel, DartId, EdgeId, FaceId, MalformedError, VertexId};

impl<V, E, F> Dcel<V, E, F> {
    /// Check every structural invariant of the mesh at once.
    ///
    /// Nothing checks these while the mesh is being built,
    /// so a builder can call this when it's done
    /// to catch mistakes close to where they were made
    /// instead of in some later traversal.
    ///
    /// The checks, in the order they're made:
    /// - every dart with a twin is its twin's twin, and shares its edge
    /// - `next` and `prev` links are reciprocal
    /// - every dart with a twin and a next ends where its next starts
    /// - following `next` from any dart closes into a cycle
    ///   whose darts all belong to the same face
    /// - every face's and edge's representative dart belongs to it
    /// - walking around every vertex that has an outgoing dart
    ///   only finds darts leaving that vertex, and finds all of them
    ///
    /// Isolated vertices, edges without darts and faces without darts are allowed.
    /// ```
    /// # use dcel::{mesh::tiny_hexagon, MalformedError};
    /// let mut mesh = tiny_hexagon();
    /// assert_eq!(mesh.validate(), Ok(()));
    ///
    /// let dart = mesh.darts().next().unwrap().id();
    /// mesh.make_twin(dart, None);
    /// assert!(mesh.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), MalformedError> {
        let result = self.validate_impl();
        match &result {
            Ok(()) => log::debug!(
                "validated DCEL with {} vertices, {} darts, {} edges, {} faces",
                self.vertices.len(),
                self.darts.len(),
                self.edges.len(),
                self.faces.len(),
            ),
            Err(err) => log::debug!("DCEL validation failed: {err}"),
        }
        result
    }

    fn validate_impl(&self) -> Result<(), MalformedError> {
        // local links
        for (idx, dart) in self.darts.iter().enumerate() {
            let id = DartId(idx);
            if let Some(twin) = dart.twin {
                let twin = &self.darts[twin.0];
                if twin.twin != Some(id) {
                    return Err(MalformedError::TwinMismatch(id));
                }
                if twin.edge != dart.edge {
                    return Err(MalformedError::EdgeMismatch(id));
                }
            }
            if let Some(next) = dart.next {
                if self.darts[next.0].prev != Some(id) {
                    return Err(MalformedError::NextPrevMismatch(id));
                }
            }
            if let Some(prev) = dart.prev {
                if self.darts[prev.0].next != Some(id) {
                    return Err(MalformedError::NextPrevMismatch(id));
                }
            }
            if let (Some(twin), Some(next)) = (dart.twin, dart.next) {
                if self.darts[twin.0].origin != self.darts[next.0].origin {
                    return Err(MalformedError::OriginMismatch(id));
                }
            }
        }

        // face cycles, visiting each one once
        let mut visited = fb::FixedBitSet::with_capacity(self.darts.len());
        for start in 0..self.darts.len() {
            if visited.contains(start) {
                continue;
            }
            let face = self.darts[start].face;
            for dart in self.face_cycle(DartId(start))? {
                visited.insert(dart.0);
                if self.darts[dart.0].face != face {
                    return Err(MalformedError::FaceMismatch(dart));
                }
            }
        }

        // representatives
        for (idx, face) in self.faces.iter().enumerate() {
            if let Some(dart) = face.dart {
                if self.darts[dart.0].face != Some(FaceId(idx)) {
                    return Err(MalformedError::FaceMismatch(dart));
                }
            }
        }
        for (idx, edge) in self.edges.iter().enumerate() {
            if let Some(dart) = edge.dart {
                if self.darts[dart.0].edge != Some(EdgeId(idx)) {
                    return Err(MalformedError::EdgeMismatch(dart));
                }
            }
        }

        // vertex rotations
        let mut rotated = fb::FixedBitSet::with_capacity(self.darts.len());
        for (idx, vertex) in self.vertices.iter().enumerate() {
            let Some(start) = vertex.dart else {
                continue;
            };
            for dart in self.out_rotation(start)? {
                if self.darts[dart.0].origin != Some(VertexId(idx)) {
                    return Err(MalformedError::OriginMismatch(dart));
                }
                rotated.insert(dart.0);
            }
        }
        // a dart that no rotation reached is cut off from its origin's fan
        for (idx, dart) in self.darts.iter().enumerate() {
            if dart.origin.is_some() && !rotated.contains(idx) {
                return Err(MalformedError::OriginMismatch(DartId(idx)));
            }
        }

        Ok(())
    }
}

//! Triangle-fan mesh of the area a guard can see.

use glam::Vec2;
use log::warn;
use serde::Serialize;

use crate::numeric::mesh_index;
use crate::pose::Pose;

/// Visible area as a triangle fan around the guard.
///
/// Vertices are in the guard's local frame: `vertices[0]` is the apex at the
/// guard itself, the rest follow the scan boundary in angular order.
/// Triangles always reference the apex as their first corner.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VisibilityPolygon {
    vertices: Vec<Vec2>,
    triangles: Vec<[u32; 3]>,
}

impl VisibilityPolygon {
    /// Builds the fan for a boundary trace measured from `pose`.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec2;
    /// use lookout::pose::Pose;
    /// use lookout::vision::VisibilityPolygon;
    /// let guard = Pose::new(Vec2::new(10.0, 10.0), 0.0);
    /// let boundary = [Vec2::new(11.0, 10.0), Vec2::new(11.0, 11.0), Vec2::new(10.0, 11.0)];
    /// let polygon = VisibilityPolygon::from_boundary(&guard, &boundary);
    /// assert_eq!(polygon.vertices()[1], Vec2::new(1.0, 0.0));
    /// assert_eq!(polygon.triangles(), &[[0, 1, 2], [0, 2, 3]]);
    /// ```
    #[must_use]
    pub fn from_boundary(pose: &Pose, boundary: &[Vec2]) -> Self {
        let mut polygon = Self::default();
        polygon.rebuild(pose, boundary);
        polygon
    }

    /// Replaces the mesh with the fan for a new boundary trace.
    ///
    /// Boundary points are moved into the pose's local frame, which undoes
    /// the translation and leaves rotation untouched. Fewer than two boundary points produce
    /// an apex with no triangles.
    pub fn rebuild(&mut self, pose: &Pose, boundary: &[Vec2]) {
        self.vertices.clear();
        self.triangles.clear();

        self.vertices.push(Vec2::ZERO);
        self.vertices
            .extend(boundary.iter().map(|point| pose.to_local(*point)));

        for outer in 1..boundary.len() {
            let (Some(left), Some(right)) = (mesh_index(outer), mesh_index(outer + 1)) else {
                warn!("visibility mesh truncated at {outer} boundary points");
                break;
            };
            self.triangles.push([0, left, right]);
        }
    }

    /// Local-frame vertices, apex first.
    #[must_use]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Fan triangles as vertex index triples.
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Number of triangles in the fan.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` when the fan covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Flat index buffer, three indices per triangle, for mesh upload.
    #[must_use]
    pub fn index_buffer(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Vertices moved back into world space around `origin`.
    pub fn world_vertices(&self, origin: Vec2) -> impl Iterator<Item = Vec2> + '_ {
        self.vertices.iter().map(move |vertex| *vertex + origin)
    }
}

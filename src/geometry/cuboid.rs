use crate::math::Point3;

/// Number of vertices of a cuboid.
pub const CUBOID_VERTEX_COUNT: usize = 8;

/// Number of edges of a cuboid.
pub const CUBOID_EDGE_COUNT: usize = 12;

/// Face index lists in the order bottom, top, front, back, left, right.
///
/// Each quad is listed so consecutive indices share an edge.
pub const CUBOID_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 3, 7, 4],
    [1, 2, 6, 5],
];

/// Edge index pairs, derived from the faces.
pub const CUBOID_EDGES: [[usize; 2]; CUBOID_EDGE_COUNT] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Box dimensions along the x, y and z axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidSpec {
    /// Extent along x.
    pub length: f64,
    /// Extent along y.
    pub width: f64,
    /// Extent along z.
    pub height: f64,
}

impl CuboidSpec {
    /// Creates a new cuboid spec.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Returns the volume `l·w·h`.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns the total surface area `2(lw + lh + wh)`.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.length * self.width + self.length * self.height + self.width * self.height)
    }

    /// Returns the length of the space diagonal.
    #[must_use]
    pub fn space_diagonal(&self) -> f64 {
        (self.length * self.length + self.width * self.width + self.height * self.height).sqrt()
    }
}

/// Euler angles in degrees, each within `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationSpec {
    /// Rotation about the x-axis, in degrees.
    pub x_deg: f64,
    /// Rotation about the y-axis, in degrees.
    pub y_deg: f64,
    /// Rotation about the z-axis, in degrees.
    pub z_deg: f64,
}

impl RotationSpec {
    /// Creates a new rotation spec.
    #[must_use]
    pub fn new(x_deg: f64, y_deg: f64, z_deg: f64) -> Self {
        Self {
            x_deg,
            y_deg,
            z_deg,
        }
    }
}

/// Vertices and quad faces of a box.
///
/// Face topology is the fixed [`CUBOID_FACES`] table; only vertex positions
/// vary between models.
#[derive(Debug, Clone, PartialEq)]
pub struct CuboidModel {
    /// Vertex positions.
    pub vertices: [Point3; CUBOID_VERTEX_COUNT],
    /// Vertex indices of each face.
    pub faces: [[usize; 4]; 6],
}

impl CuboidModel {
    /// Returns the four corner positions of face `index`.
    ///
    /// Returns `None` if `index` is not a face or the face refers to a
    /// vertex that does not exist.
    #[must_use]
    pub fn face_points(&self, index: usize) -> Option<[Point3; 4]> {
        let [a, b, c, d] = *self.faces.get(index)?;
        Some([
            *self.vertices.get(a)?,
            *self.vertices.get(b)?,
            *self.vertices.get(c)?,
            *self.vertices.get(d)?,
        ])
    }

    /// Returns the segment endpoints of every edge.
    #[must_use]
    pub fn edge_segments(&self) -> Vec<[Point3; 2]> {
        CUBOID_EDGES
            .iter()
            .map(|&[a, b]| [self.vertices[a], self.vertices[b]])
            .collect()
    }
}

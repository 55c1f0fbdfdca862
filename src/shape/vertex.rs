use crate::math::{Point, Point2, Real, Vector};
use core::borrow::Borrow;

/// A mesh vertex.
///
/// Only the position takes part in geometric queries. The normal and texture
/// coordinates are carried along for the renderer.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    /// The vertex position.
    pub position: Point<Real>,
    /// The vertex normal, if any.
    pub normal: Option<Vector<Real>>,
    /// The vertex texture coordinates, if any.
    pub tex_coords: Option<Point2<Real>>,
}

impl Vertex {
    /// A vertex with a position only.
    pub fn new(position: Point<Real>) -> Self {
        Self {
            position,
            normal: None,
            tex_coords: None,
        }
    }

    /// Sets the normal of this vertex.
    pub fn with_normal(mut self, normal: Vector<Real>) -> Self {
        self.normal = Some(normal);
        self
    }

    /// Sets the texture coordinates of this vertex.
    pub fn with_tex_coords(mut self, tex_coords: Point2<Real>) -> Self {
        self.tex_coords = Some(tex_coords);
        self
    }
}

impl From<Point<Real>> for Vertex {
    fn from(position: Point<Real>) -> Self {
        Self::new(position)
    }
}

impl Borrow<Point<Real>> for Vertex {
    fn borrow(&self) -> &Point<Real> {
        &self.position
    }
}

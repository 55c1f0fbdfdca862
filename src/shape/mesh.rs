use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::mass_properties::{MassEstimator, MassProperties};
use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexPointSet, Triangle, Vertex};
use crate::GeometryError;

/// An indexed triangle mesh.
///
/// A mesh always has at least one vertex and all its triangles reference existing
/// vertices. Its bounding volumes are computed once at construction.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<[u32; 3]>,
    aabb: Aabb,
    bounding_sphere: BoundingSphere,
}

impl Mesh {
    /// Creates a new mesh.
    ///
    /// Fails if `vertices` is empty or if a triangle references a vertex that does not exist.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<[u32; 3]>) -> Result<Self, GeometryError> {
        let aabb = Aabb::from_points(&vertices).ok_or(GeometryError::EmptyPointSet)?;

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(GeometryError::IndexOutOfBounds {
                    triangle,
                    index: *index,
                });
            }
        }

        Ok(Self::with_aabb(vertices, indices, aabb))
    }

    fn with_aabb(vertices: Vec<Vertex>, indices: Vec<[u32; 3]>, aabb: Aabb) -> Self {
        Self {
            vertices,
            indices,
            bounding_sphere: BoundingSphere::from_aabb(&aabb),
            aabb,
        }
    }

    /// The closed triangle mesh of the box `aabb`.
    ///
    /// Each vertex normal is the normalized direction from the box center to the vertex.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let (points, indices) = aabb.to_trimesh();
        let center = aabb.center();
        let vertices = points
            .into_iter()
            .map(|pt| {
                let vtx = Vertex::new(pt);
                match (pt - center).try_normalize(crate::math::DEFAULT_EPSILON) {
                    Some(n) => vtx.with_normal(n),
                    None => vtx,
                }
            })
            .collect();

        Self::with_aabb(vertices, indices, *aabb)
    }

    /// The closed triangle mesh of a box centered at the origin.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        Self::from_aabb(&Aabb::from_half_extents(Point::origin(), half_extents))
    }

    /// The vertices of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The triangle indices of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The i-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: usize) -> Triangle {
        let idx = self.indices[i];
        Triangle::new(
            self.vertices[idx[0] as usize].position,
            self.vertices[idx[1] as usize].position,
            self.vertices[idx[2] as usize].position,
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len()).map(move |i| self.triangle(i))
    }

    /// The sum of the areas of all the triangles of this mesh.
    pub fn surface_area(&self) -> Real {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// The `Aabb` of this mesh.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The bounding sphere of this mesh.
    #[inline]
    pub fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }

    /// The vertices of this mesh seen as a convex shape.
    pub fn convex_point_set(&self) -> ConvexPointSet<'_, Vertex> {
        ConvexPointSet::new_unchecked(&self.vertices)
    }

    /// The mass properties of this mesh, estimated with `estimator`.
    pub fn mass_properties(&self, density: Real, estimator: MassEstimator) -> MassProperties {
        match estimator {
            MassEstimator::Aabb => MassProperties::from_aabb(density, &self.aabb),
            MassEstimator::Polyhedral => {
                MassProperties::from_trimesh(density, &self.vertices, &self.indices)
            }
        }
    }
}

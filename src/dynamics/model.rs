use crate::math::{Isometry, Matrix4, Point, Real, Rotation, UnitVector, Vector};
use crate::shape::Mesh;
use slab::Slab;

/// A renderable object made of one or several meshes, placed in the world by a
/// translation, a rotation, and a non-uniform scale.
///
/// The meshes are expressed in the local frame of the model.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Model {
    meshes: Vec<Mesh>,
    translation: Vector<Real>,
    rotation: Rotation<Real>,
    scale: Vector<Real>,
}

impl Model {
    /// Creates a model at the origin, with no rotation and a unit scale.
    pub fn new(meshes: Vec<Mesh>) -> Self {
        Self {
            meshes,
            translation: Vector::zeros(),
            rotation: Rotation::identity(),
            scale: Vector::repeat(1.0),
        }
    }

    /// Sets the initial translation of this model.
    #[must_use]
    pub fn with_translation(mut self, translation: Vector<Real>) -> Self {
        self.translation = translation;
        self
    }

    /// The meshes of this model.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// The translation of this model.
    pub fn translation(&self) -> &Vector<Real> {
        &self.translation
    }

    /// The rotation of this model.
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.rotation
    }

    /// The scale of this model.
    pub fn scale(&self) -> &Vector<Real> {
        &self.scale
    }

    /// The position of the model origin in world-space.
    pub fn position(&self) -> Point<Real> {
        Point::from(self.translation)
    }

    /// Moves this model by `delta`.
    pub fn translate(&mut self, delta: &Vector<Real>) {
        self.translation += delta;
    }

    /// Replaces the rotation of this model.
    pub fn rotate(&mut self, rotation: Rotation<Real>) {
        self.rotation = rotation;
    }

    /// Replaces the rotation of this model by a rotation of `angle` radians around `axis`.
    pub fn rotate_axis_angle(&mut self, axis: &UnitVector<Real>, angle: Real) {
        self.rotation = Rotation::from_axis_angle(axis, angle);
    }

    /// Multiplies the scale of this model, componentwise, by `factors`.
    pub fn scale_by(&mut self, factors: &Vector<Real>) {
        self.scale.component_mul_assign(factors);
    }

    /// The rigid part of the model transform.
    pub fn isometry(&self) -> Isometry<Real> {
        Isometry::from_parts(self.translation.into(), self.rotation)
    }

    /// The model matrix: translation, then rotation, then scale, applied right-to-left.
    pub fn model_matrix(&self) -> Matrix4<Real> {
        Matrix4::new_translation(&self.translation)
            * self.rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// The world-space positions of the vertices of all the meshes of this model.
    pub fn world_vertices(&self) -> Vec<Point<Real>> {
        let iso = self.isometry();
        self.meshes
            .iter()
            .flat_map(|mesh| mesh.vertices())
            .map(|v| iso * Point::from(v.position.coords.component_mul(&self.scale)))
            .collect()
    }
}

/// The handle of a [`Model`] inserted into a [`ModelSet`].
///
/// Slots freed by [`ModelSet::remove`] are reused, so a handle also carries the
/// generation of the insertion it was returned by. A handle to a removed model never
/// resolves to the model inserted in its place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ModelHandle {
    index: usize,
    generation: u64,
}

impl ModelHandle {
    /// The slot of the model inside its set.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The insertion this handle was returned by.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug)]
struct ModelEntry {
    generation: u64,
    model: Model,
}

/// The set of models a group of rigid-bodies refer to.
///
/// Each rigid-body owns a [`ModelHandle`] instead of a reference, so that the models
/// can be mutated by only one body update at a time.
#[derive(Clone, Debug, Default)]
pub struct ModelSet {
    models: Slab<ModelEntry>,
    next_generation: u64,
}

impl ModelSet {
    /// An empty set of models.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model to this set.
    pub fn insert(&mut self, model: Model) -> ModelHandle {
        let generation = self.next_generation;
        self.next_generation += 1;
        let index = self.models.insert(ModelEntry { generation, model });
        ModelHandle { index, generation }
    }

    /// Removes a model from this set.
    ///
    /// Rigid-bodies still referring to it fail to update with
    /// [`GeometryError::MissingModel`](crate::GeometryError::MissingModel), even after
    /// another model is inserted in the same slot.
    pub fn remove(&mut self, handle: ModelHandle) -> Option<Model> {
        let _ = self.get(handle)?;
        self.models.try_remove(handle.index).map(|entry| entry.model)
    }

    /// The model with the given handle.
    pub fn get(&self, handle: ModelHandle) -> Option<&Model> {
        self.models
            .get(handle.index)
            .filter(|entry| entry.generation == handle.generation)
            .map(|entry| &entry.model)
    }

    /// The model with the given handle.
    pub fn get_mut(&mut self, handle: ModelHandle) -> Option<&mut Model> {
        self.models
            .get_mut(handle.index)
            .filter(|entry| entry.generation == handle.generation)
            .map(|entry| &mut entry.model)
    }

    /// The number of models in this set.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterates through all the models of this set.
    pub fn iter(&self) -> impl Iterator<Item = (ModelHandle, &Model)> {
        self.models.iter().map(|(index, entry)| {
            let handle = ModelHandle {
                index,
                generation: entry.generation,
            };
            (handle, &entry.model)
        })
    }
}

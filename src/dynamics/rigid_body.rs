use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
use crate::dynamics::{ModelHandle, ModelSet};
use crate::mass_properties::{MassEstimator, MassProperties};
use crate::math::{AngularInertia, Point, Quaternion, Real, Rotation, Vector};
use crate::GeometryError;

/// Parameters of a rigid-body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RigidBodyOptions {
    /// The density of the meshes of the model.
    pub density: Real,
    /// The fraction of momentum a body keeps after one second.
    ///
    /// Both momenta are multiplied by `damping_base.powf(dt)` at each update.
    pub damping_base: Real,
}

impl Default for RigidBodyOptions {
    fn default() -> Self {
        Self {
            density: 1.0,
            damping_base: 0.6,
        }
    }
}

/// The mass of a rigid-body according to one estimator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
struct EstimatedMass {
    mass: Real,
    center_of_mass: Point<Real>,
    inertia: AngularInertia<Real>,
    inv_inertia: AngularInertia<Real>,
}

impl EstimatedMass {
    fn new(estimator: MassEstimator, props: &MassProperties) -> Result<Self, GeometryError> {
        let inv_inertia = props
            .inverse_inertia()
            .ok_or(GeometryError::SingularInertiaTensor(estimator))?;

        if !(props.mass > 0.0 && props.mass.is_finite()) {
            return Err(GeometryError::NonPositiveMass(estimator));
        }

        Ok(Self {
            mass: props.mass,
            center_of_mass: props.local_com,
            inertia: props.inertia,
            inv_inertia,
        })
    }
}

/// A rigid-body driven by impulses, bound to a model of a [`ModelSet`].
///
/// Two mass estimates are maintained side by side: one from the bounding boxes of the
/// meshes, and one from the polyhedra they bound. Each update picks one of them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RigidBody {
    model: ModelHandle,
    options: RigidBodyOptions,
    aabb_mass: EstimatedMass,
    polyhedral_mass: EstimatedMass,
    surface_area: Real,
    aabb: Aabb,
    bounding_sphere: BoundingSphere,
    force: Vector<Real>,
    application_point: Vector<Real>,
    torque: Vector<Real>,
    linear_momentum: Vector<Real>,
    angular_momentum: Vector<Real>,
    angular_velocity: Vector<Real>,
    position_delta: Vector<Real>,
}

impl RigidBody {
    /// Builds a rigid-body at rest from the meshes of a model.
    ///
    /// The masses, centers of mass, and inertia tensors of all the meshes are summed, then
    /// the centers of mass are averaged. The bounding sphere is the one of the last mesh.
    /// Centers of mass and bounding sphere are then moved to the model translation.
    pub fn new(
        models: &ModelSet,
        handle: ModelHandle,
        options: RigidBodyOptions,
    ) -> Result<Self, GeometryError> {
        let model = models.get(handle).ok_or(GeometryError::MissingModel)?;
        let meshes = model.meshes();
        let last_mesh = meshes.last().ok_or(GeometryError::EmptyModel)?;

        let mut surface_area = 0.0;
        let mut aabb = Aabb::new_invalid();
        let mut box_sum = MassProperties::zero();
        let mut poly_sum = MassProperties::zero();

        for (i, mesh) in meshes.iter().enumerate() {
            surface_area += mesh.surface_area();
            aabb.merge(mesh.aabb());

            let box_props = mesh.mass_properties(options.density, MassEstimator::Aabb);
            let poly_props = mesh.mass_properties(options.density, MassEstimator::Polyhedral);

            if poly_props.is_zero() {
                log::warn!(
                    "mesh {} of model {:?} bounds a zero-volume polyhedron",
                    i,
                    handle
                );
            }

            for (sum, props) in [(&mut box_sum, box_props), (&mut poly_sum, poly_props)] {
                sum.mass += props.mass;
                sum.local_com += props.local_com.coords;
                sum.inertia += props.inertia;
            }
        }

        let count = meshes.len() as Real;
        let translation = *model.translation();

        for sum in [&mut box_sum, &mut poly_sum] {
            sum.local_com = Point::from(sum.local_com.coords / count) + translation;
        }

        let mut bounding_sphere = *last_mesh.bounding_sphere();
        bounding_sphere.translate_by(&translation);

        Ok(Self {
            model: handle,
            options,
            aabb_mass: EstimatedMass::new(MassEstimator::Aabb, &box_sum)?,
            polyhedral_mass: EstimatedMass::new(MassEstimator::Polyhedral, &poly_sum)?,
            surface_area,
            aabb,
            bounding_sphere,
            force: Vector::zeros(),
            application_point: Vector::zeros(),
            torque: Vector::zeros(),
            linear_momentum: Vector::zeros(),
            angular_momentum: Vector::zeros(),
            angular_velocity: Vector::zeros(),
            position_delta: Vector::zeros(),
        })
    }

    fn estimated(&self, estimator: MassEstimator) -> &EstimatedMass {
        match estimator {
            MassEstimator::Aabb => &self.aabb_mass,
            MassEstimator::Polyhedral => &self.polyhedral_mass,
        }
    }

    /// The handle of the model this body moves.
    #[inline]
    pub fn model(&self) -> ModelHandle {
        self.model
    }

    /// The parameters of this body.
    #[inline]
    pub fn options(&self) -> &RigidBodyOptions {
        &self.options
    }

    /// The world-space center of mass, according to `estimator`.
    #[inline]
    pub fn center_of_mass(&self, estimator: MassEstimator) -> Point<Real> {
        self.estimated(estimator).center_of_mass
    }

    /// The mass, according to `estimator`.
    #[inline]
    pub fn mass(&self, estimator: MassEstimator) -> Real {
        self.estimated(estimator).mass
    }

    /// The inertia tensor, summed over all the meshes, according to `estimator`.
    #[inline]
    pub fn inertia(&self, estimator: MassEstimator) -> &AngularInertia<Real> {
        &self.estimated(estimator).inertia
    }

    /// The inverse of the inertia tensor, according to `estimator`.
    #[inline]
    pub fn inv_inertia(&self, estimator: MassEstimator) -> &AngularInertia<Real> {
        &self.estimated(estimator).inv_inertia
    }

    /// The linear velocity, according to `estimator`.
    pub fn linear_velocity(&self, estimator: MassEstimator) -> Vector<Real> {
        self.linear_momentum / self.mass(estimator)
    }

    /// The kinetic energy (linear and rotational), according to `estimator`.
    pub fn kinetic_energy(&self, estimator: MassEstimator) -> Real {
        let est = self.estimated(estimator);
        let linear = self.linear_momentum.norm_squared() / est.mass;
        let angular = self
            .angular_momentum
            .dot(&(est.inv_inertia * self.angular_momentum));

        (linear + angular) * 0.5
    }

    /// The sum of the surface areas of the meshes of the model.
    #[inline]
    pub fn surface_area(&self) -> Real {
        self.surface_area
    }

    /// The merged `Aabb` of the meshes, in the local frame of the model.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The world-space bounding sphere of the last mesh of the model.
    #[inline]
    pub fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }

    /// The world-space bounding sphere, mutably. Its position is driven by the updates.
    #[inline]
    pub fn bounding_sphere_mut(&mut self) -> &mut BoundingSphere {
        &mut self.bounding_sphere
    }

    /// The last applied force.
    #[inline]
    pub fn force(&self) -> &Vector<Real> {
        &self.force
    }

    /// The torque of the last applied force.
    #[inline]
    pub fn torque(&self) -> &Vector<Real> {
        &self.torque
    }

    /// The linear momentum.
    #[inline]
    pub fn linear_momentum(&self) -> &Vector<Real> {
        &self.linear_momentum
    }

    /// The angular momentum.
    #[inline]
    pub fn angular_momentum(&self) -> &Vector<Real> {
        &self.angular_momentum
    }

    /// The angular velocity computed by the last update.
    #[inline]
    pub fn angular_velocity(&self) -> &Vector<Real> {
        &self.angular_velocity
    }

    /// The displacement of the center of mass during the last update.
    #[inline]
    pub fn position_delta(&self) -> &Vector<Real> {
        &self.position_delta
    }

    fn update_torque(&mut self) {
        self.torque = self.application_point.cross(&self.force);
    }

    /// Applies `force` during `dt` at `point`, an offset from the center of mass.
    pub fn apply_impulse(&mut self, force: Vector<Real>, point: Vector<Real>, dt: Real) {
        self.force = force;
        self.application_point = point;
        self.update_torque();
        self.angular_momentum += self.torque * dt;
        self.linear_momentum += self.force * dt;
    }

    /// Integrates the motion of this body during `dt` and moves its model accordingly.
    ///
    /// Both momenta are damped. The model rotation is advanced by the angular velocity
    /// and the model is translated by the displacement of the center of mass.
    ///
    /// The rotation update is `q + dt * q * (0, ω)`, without the usual `1/2` factor,
    /// so angular velocities turn the model about twice as fast as the exact rate.
    pub fn update(
        &mut self,
        models: &mut ModelSet,
        dt: Real,
        estimator: MassEstimator,
    ) -> Result<(), GeometryError> {
        let model = models
            .get_mut(self.model)
            .ok_or(GeometryError::MissingModel)?;
        let est = *self.estimated(estimator);

        self.angular_velocity = est.inv_inertia * self.angular_momentum;

        let q = *model.rotation().quaternion();
        let q = q + q * Quaternion::from_imag(self.angular_velocity) * dt;

        self.update_torque();

        let damping = self.options.damping_base.powf(dt);
        self.linear_momentum *= damping;
        self.angular_momentum *= damping;

        let rotation = Rotation::new_normalize(q);
        let delta = self.linear_momentum * dt / est.mass;
        self.position_delta = delta;

        self.aabb_mass.center_of_mass += delta;
        self.polyhedral_mass.center_of_mass += delta;
        self.bounding_sphere.translate_by(&delta);

        model.rotate(rotation);
        model.translate(&delta);

        Ok(())
    }
}

/// Updates all the given bodies, in order, stopping at the first failure.
pub fn step(
    bodies: &mut [RigidBody],
    models: &mut ModelSet,
    dt: Real,
    estimator: MassEstimator,
) -> Result<(), GeometryError> {
    for body in bodies {
        body.update(models, dt, estimator)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dynamics::Model;
    use crate::shape::{Mesh, Vertex};

    fn box_body(translation: Vector<Real>) -> (ModelSet, RigidBody) {
        let mut models = ModelSet::new();
        let model = Model::new(vec![Mesh::cuboid(Vector::new(1.0, 2.0, 3.0))])
            .with_translation(translation);
        let handle = models.insert(model);
        let body = RigidBody::new(&models, handle, RigidBodyOptions::default()).unwrap();
        (models, body)
    }

    #[test]
    fn impulse_torque() {
        let (_, mut body) = box_body(Vector::zeros());
        body.apply_impulse(Vector::y(), Vector::x(), 1.0);

        assert_eq!(*body.torque(), Vector::z());
        assert_eq!(*body.angular_momentum(), Vector::z());
        assert_eq!(*body.linear_momentum(), Vector::y());
    }

    #[test]
    fn single_mesh_estimates_agree() {
        let translation = Vector::new(1.0, -2.0, 3.0);
        let (_, body) = box_body(translation);

        for est in [MassEstimator::Aabb, MassEstimator::Polyhedral] {
            assert_relative_eq!(body.mass(est), 48.0, epsilon = 1.0e-3);
            assert_relative_eq!(
                body.center_of_mass(est),
                Point::from(translation),
                epsilon = 1.0e-5
            );
        }

        assert_relative_eq!(body.surface_area(), 88.0, epsilon = 1.0e-4);
        assert_relative_eq!(
            body.inertia(MassEstimator::Aabb) * body.inv_inertia(MassEstimator::Aabb),
            AngularInertia::identity(),
            epsilon = 1.0e-5
        );
        assert_eq!(*body.bounding_sphere().center(), Point::from(translation));
        assert_eq!(body.kinetic_energy(MassEstimator::Aabb), 0.0);
    }

    #[test]
    fn momentum_decays_monotonically() {
        let (mut models, mut body) = box_body(Vector::zeros());
        body.apply_impulse(Vector::new(10.0, 0.0, 0.0), Vector::new(0.0, 1.0, 0.0), 0.1);

        let mut linear = body.linear_momentum().norm();
        let mut angular = body.angular_momentum().norm();

        for _ in 0..20 {
            body.update(&mut models, 0.1, MassEstimator::Polyhedral)
                .unwrap();
            assert!(body.linear_momentum().norm() < linear);
            assert!(body.angular_momentum().norm() < angular);
            linear = body.linear_momentum().norm();
            angular = body.angular_momentum().norm();
        }

        let rotation = models.get(body.model()).unwrap().rotation();
        assert_relative_eq!(rotation.quaternion().norm(), 1.0, epsilon = 1.0e-6);
    }

    #[test]
    fn update_moves_the_model_with_the_center_of_mass() {
        let (mut models, mut body) = box_body(Vector::zeros());
        body.apply_impulse(Vector::new(48.0, 0.0, 0.0), Vector::zeros(), 1.0);
        body.update(&mut models, 0.5, MassEstimator::Aabb).unwrap();

        let expected = 0.6f32.powf(0.5) * 0.5;
        let model = models.get(body.model()).unwrap();
        assert_relative_eq!(model.translation().x, expected, epsilon = 1.0e-5);
        assert_relative_eq!(
            body.center_of_mass(MassEstimator::Aabb).x,
            expected,
            epsilon = 1.0e-5
        );
        assert_relative_eq!(
            body.center_of_mass(MassEstimator::Polyhedral).x,
            expected,
            epsilon = 1.0e-5
        );
        assert_relative_eq!(body.bounding_sphere().center().x, expected, epsilon = 1.0e-5);
        assert_relative_eq!(body.position_delta().x, expected, epsilon = 1.0e-5);
        assert_eq!(*model.rotation(), Rotation::identity());
    }

    #[test]
    fn zero_time_step_keeps_the_body_still() {
        let (mut models, mut body) = box_body(Vector::zeros());
        body.apply_impulse(Vector::new(1.0, 2.0, 3.0), Vector::new(0.5, 0.0, 0.0), 1.0);
        let momentum = *body.linear_momentum();

        body.update(&mut models, 0.0, MassEstimator::Aabb).unwrap();

        assert_eq!(*body.linear_momentum(), momentum);
        assert_eq!(*models.get(body.model()).unwrap().translation(), Vector::zeros());
    }

    #[test]
    fn invalid_models_are_rejected() {
        let mut models = ModelSet::new();
        let empty = models.insert(Model::new(vec![]));
        assert_eq!(
            RigidBody::new(&models, empty, RigidBodyOptions::default()),
            Err(GeometryError::EmptyModel)
        );

        let handle = models.insert(Model::new(vec![Mesh::cuboid(Vector::repeat(1.0))]));
        let mut body = RigidBody::new(&models, handle, RigidBodyOptions::default()).unwrap();
        let _ = models.remove(handle);

        assert_eq!(
            RigidBody::new(&models, handle, RigidBodyOptions::default()),
            Err(GeometryError::MissingModel)
        );
        assert_eq!(
            body.update(&mut models, 0.1, MassEstimator::Aabb),
            Err(GeometryError::MissingModel)
        );
    }

    #[test]
    fn stale_handle_does_not_move_a_reinserted_model() {
        let mut models = ModelSet::new();
        let handle = models.insert(Model::new(vec![Mesh::cuboid(Vector::repeat(1.0))]));
        let mut body = RigidBody::new(&models, handle, RigidBodyOptions::default()).unwrap();
        let _ = models.remove(handle);

        let other = models.insert(
            Model::new(vec![Mesh::cuboid(Vector::repeat(1.0))])
                .with_translation(Vector::x() * 50.0),
        );
        body.apply_impulse(Vector::x() * 100.0, Vector::zeros(), 1.0);

        assert_eq!(
            body.update(&mut models, 1.0, MassEstimator::Aabb),
            Err(GeometryError::MissingModel)
        );
        assert_eq!(
            *models.get(other).unwrap().translation(),
            Vector::x() * 50.0
        );
    }

    #[test]
    fn flat_meshes_keep_their_center_of_mass() {
        let center = Point::new(10.0, 0.0, 0.0);
        let cube = Mesh::from_aabb(&Aabb::from_half_extents(center, Vector::repeat(1.0)));
        let quad = Mesh::new(
            vec![
                Vertex::new(Point::new(9.0, -1.0, 0.0)),
                Vertex::new(Point::new(11.0, -1.0, 0.0)),
                Vertex::new(Point::new(11.0, 1.0, 0.0)),
                Vertex::new(Point::new(9.0, 1.0, 0.0)),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
        .unwrap();

        let mut models = ModelSet::new();
        let handle = models.insert(Model::new(vec![cube, quad]));
        let body = RigidBody::new(&models, handle, RigidBodyOptions::default()).unwrap();

        for est in [MassEstimator::Aabb, MassEstimator::Polyhedral] {
            assert_relative_eq!(body.center_of_mass(est), center, epsilon = 1.0e-4);
            assert_relative_eq!(body.mass(est), 8.0, epsilon = 1.0e-3);
        }
    }

    #[test]
    fn massless_models_are_rejected() {
        let mut models = ModelSet::new();
        let options = RigidBodyOptions {
            density: 0.0,
            ..RigidBodyOptions::default()
        };
        let handle = models.insert(Model::new(vec![Mesh::cuboid(Vector::repeat(1.0))]));

        assert_eq!(
            RigidBody::new(&models, handle, options),
            Err(GeometryError::SingularInertiaTensor(MassEstimator::Aabb))
        );
    }
}

use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Point, Real};
use crate::shape::Tetrahedron;
use crate::utils;
use core::borrow::Borrow;
use num::Zero;

impl MassProperties {
    /// Computes the mass properties of the solid bounded by a closed triangle mesh.
    ///
    /// The mesh is decomposed into tetrahedra joining each triangle to a reference point.
    /// Triangles are expected to be counter-clockwise when seen from the outside; a mesh
    /// with the opposite winding gives the same result since the total volume sign is
    /// discarded. A mesh enclosing no volume has no mass and no inertia, and its center of
    /// mass is the mean of its vertices.
    pub fn from_trimesh<P: Borrow<Point<Real>>>(
        density: Real,
        vertices: &[P],
        indices: &[[u32; 3]],
    ) -> MassProperties {
        let (volume, com) = trimesh_signed_volume_and_center_of_mass(vertices, indices);

        if volume.is_zero() {
            return MassProperties::new(com, 0.0, AngularInertia::zeros());
        }

        let mut itot = AngularInertia::zeros();

        for t in indices {
            let p2 = vertices[t[0] as usize].borrow();
            let p3 = vertices[t[1] as usize].borrow();
            let p4 = vertices[t[2] as usize].borrow();

            let vol = Tetrahedron::new(com, *p2, *p3, *p4).signed_volume();
            let ipart = tetrahedron_unit_inertia_tensor_wrt_point(&com, &com, p2, p3, p4);

            itot += ipart * vol;
        }

        let sign = volume.signum();
        Self::new(com, volume * density * sign, itot * density * sign)
    }
}

/// Computes the unit inertia tensor of a tetrahedron, with regard to the given `point`.
pub fn tetrahedron_unit_inertia_tensor_wrt_point(
    point: &Point<Real>,
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
    p4: &Point<Real>,
) -> AngularInertia<Real> {
    let p1 = p1 - point;
    let p2 = p2 - point;
    let p3 = p3 - point;
    let p4 = p4 - point;

    // Just for readability.
    let [x1, y1, z1] = [p1.x, p1.y, p1.z];
    let [x2, y2, z2] = [p2.x, p2.y, p2.z];
    let [x3, y3, z3] = [p3.x, p3.y, p3.z];
    let [x4, y4, z4] = [p4.x, p4.y, p4.z];

    // Sum of all the degree-2 monomials of one coordinate.
    let sqr_sum = |a1: Real, a2: Real, a3: Real, a4: Real| {
        a1 * a1
            + a1 * a2
            + a2 * a2
            + a1 * a3
            + a2 * a3
            + a3 * a3
            + a1 * a4
            + a2 * a4
            + a3 * a4
            + a4 * a4
    };

    // Sum of all the products of two coordinates, same-vertex products counted twice.
    let cross_sum = |a: [Real; 4], b: [Real; 4]| {
        let mut res = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                res += if i == j { a[i] * b[j] * 2.0 } else { a[i] * b[j] };
            }
        }
        res
    };

    let diag_x = sqr_sum(x1, x2, x3, x4);
    let diag_y = sqr_sum(y1, y2, y3, y4);
    let diag_z = sqr_sum(z1, z2, z3, z4);

    let a0 = (diag_y + diag_z) * 0.1;
    let b0 = (diag_z + diag_x) * 0.1;
    let c0 = (diag_x + diag_y) * 0.1;

    let xs = [x1, x2, x3, x4];
    let ys = [y1, y2, y3, y4];
    let zs = [z1, z2, z3, z4];

    let a1 = cross_sum(ys, zs) * 0.05;
    let b1 = cross_sum(xs, zs) * 0.05;
    let c1 = cross_sum(xs, ys) * 0.05;

    AngularInertia::new(a0, -c1, -b1, -c1, b0, -a1, -b1, -a1, c0)
}

/// Computes the signed volume and center of mass of the solid bounded by a triangle mesh.
///
/// If the volume is zero, the returned center is the mean of the vertices, or the origin
/// if there is no vertex.
pub fn trimesh_signed_volume_and_center_of_mass<P: Borrow<Point<Real>>>(
    vertices: &[P],
    indices: &[[u32; 3]],
) -> (Real, Point<Real>) {
    // Using a point close to the mesh keeps the tetrahedra small, which limits
    // rounding errors compared to using the origin.
    let geometric_center = utils::center(vertices).unwrap_or_else(Point::origin);

    let mut res = Point::origin();
    let mut vol = 0.0;

    for t in indices {
        let p2 = *vertices[t[0] as usize].borrow();
        let p3 = *vertices[t[1] as usize].borrow();
        let p4 = *vertices[t[2] as usize].borrow();

        let tetra = Tetrahedron::new(geometric_center, p2, p3, p4);
        let volume = tetra.signed_volume();

        res += tetra.center().coords * volume;
        vol += volume;
    }

    if vol.is_zero() {
        (vol, geometric_center)
    } else {
        (vol, res / vol)
    }
}

mod bounding_sphere_overlap;
mod gjk_cuboids;
mod rigid_body_damping;
mod sweep_and_prune;
mod tetrahedron_projection;

use super::mesh::MeshData;
use super::primitives::{
    generate_box, generate_cone, generate_cylinder, generate_plane, generate_polyhedron,
    generate_sphere,
};

/// Parametric description of a renderable primitive, tessellated on demand
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        segments: u32,
        rings: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Polyhedron {
        radius: f32,
        subdivisions: u32,
    },
    Plane {
        width: f32,
        depth: f32,
    },
}

impl Shape {
    pub fn cube(size: f32) -> Self {
        Shape::Box {
            width: size,
            height: size,
            depth: size,
        }
    }

    pub fn tessellate(&self) -> MeshData {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => generate_box(width, height, depth),
            Shape::Sphere {
                radius,
                segments,
                rings,
            } => generate_sphere(radius, segments, rings),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => generate_cylinder(radius_top, radius_bottom, height, segments),
            Shape::Cone {
                radius,
                height,
                segments,
            } => generate_cone(radius, height, segments),
            Shape::Polyhedron {
                radius,
                subdivisions,
            } => generate_polyhedron(radius, subdivisions),
            Shape::Plane { width, depth } => generate_plane(width, depth),
        }
    }
}

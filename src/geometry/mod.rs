mod mesh;
mod primitives;
mod shape;

pub use mesh::{MeshData, Vertex};
pub use primitives::{
    generate_box, generate_cone, generate_cylinder, generate_plane, generate_polyhedron,
    generate_sphere, polyhedron_triangle_count, MAX_SUBDIVISIONS,
};
pub use shape::Shape;

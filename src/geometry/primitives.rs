//! Tessellation of the parametric shapes used by the generators.
//!
//! Every function clamps degenerate parameters (with a warning) instead of
//! returning an empty mesh, so a primitive is always visible.

use glam::{Vec2, Vec3};
use log::warn;
use std::f32::consts::{PI, TAU};

use super::mesh::{MeshData, Vertex};

const MIN_EXTENT: f32 = 0.001;
const MAX_SEGMENTS: u32 = 256;
pub const MAX_SUBDIVISIONS: u32 = 4;

fn positive(name: &str, param: &str, value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!("{}: {} must be > 0.0, clamping to {}", name, param, MIN_EXTENT);
        MIN_EXTENT
    }
}

fn non_negative(name: &str, param: &str, value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("{}: {} must be >= 0.0, clamping to 0.0", name, param);
        0.0
    }
}

/// Axis-aligned box centered on the origin, flat normals, one UV square per face
///
/// Mesh with 24 vertices (4 per face) and 36 indices
pub fn generate_box(width: f32, height: f32, depth: f32) -> MeshData {
    let hx = positive("generate_box", "width", width) * 0.5;
    let hy = positive("generate_box", "height", height) * 0.5;
    let hz = positive("generate_box", "depth", depth) * 0.5;

    let mut mesh = MeshData::new();

    // v0=BL, v1=BR, v2=TR, v3=TL seen from outside
    let mut add_quad = |corners: [Vec3; 4], normal: Vec3| {
        let uvs = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)];
        let base = mesh.vertices.len() as u32;
        for (corner, uv) in corners.into_iter().zip(uvs) {
            mesh.add_vertex(Vertex::with_uv(corner, normal, uv));
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    };

    add_quad(
        [
            Vec3::new(-hx, -hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(-hx, hy, hz),
        ],
        Vec3::Z,
    );
    add_quad(
        [
            Vec3::new(hx, -hy, -hz),
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::new(hx, hy, -hz),
        ],
        Vec3::NEG_Z,
    );
    add_quad(
        [
            Vec3::new(-hx, hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(-hx, hy, -hz),
        ],
        Vec3::Y,
    );
    add_quad(
        [
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(-hx, -hy, hz),
        ],
        Vec3::NEG_Y,
    );
    add_quad(
        [
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(hx, hy, hz),
        ],
        Vec3::X,
    );
    add_quad(
        [
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::new(-hx, hy, hz),
            Vec3::new(-hx, hy, -hz),
        ],
        Vec3::NEG_X,
    );

    mesh
}

/// UV sphere with smooth normals
///
/// The seam column is duplicated so texture coordinates wrap cleanly, giving
/// `(rings + 1) × (segments + 1)` vertices.
pub fn generate_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let radius = positive("generate_sphere", "radius", radius);
    let segments = segments.clamp(3, MAX_SEGMENTS);
    let rings = rings.clamp(2, MAX_SEGMENTS);

    let mut mesh = MeshData::new();

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let phi = v * PI;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();

        for seg in 0..=segments {
            let u = seg as f32 / segments as f32;
            let theta = u * TAU;
            let position = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            let normal = position.normalize();
            mesh.add_vertex(Vertex::with_uv(position, normal, Vec2::new(u, 1.0 - v)));
        }
    }

    let columns = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let i0 = ring * columns + seg;
            let i1 = i0 + 1;
            let i2 = (ring + 1) * columns + seg;
            let i3 = i2 + 1;

            // i0/i1 on the upper ring, i2/i3 below; CCW from outside.
            // Pole rings collapse to a point, so they get one triangle per segment.
            if ring != 0 {
                mesh.add_triangle(i0, i1, i3);
            }
            if ring != rings - 1 {
                mesh.add_triangle(i0, i3, i2);
            }
        }
    }

    mesh
}

/// Cylinder or cone frustum along Y, centered on the origin, with caps for non-zero radii
pub fn generate_cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let radius_top = non_negative("generate_cylinder", "radius_top", radius_top);
    let mut radius_bottom = non_negative("generate_cylinder", "radius_bottom", radius_bottom);
    if radius_top == 0.0 && radius_bottom == 0.0 {
        warn!("generate_cylinder: both radii are zero, widening bottom to {}", MIN_EXTENT);
        radius_bottom = MIN_EXTENT;
    }
    let height = positive("generate_cylinder", "height", height);
    let segments = segments.clamp(3, MAX_SEGMENTS);
    let half_height = height * 0.5;

    let mut mesh = MeshData::new();

    // Side normals tilt with the slope of the frustum
    let slope = (radius_bottom - radius_top) / height;
    for seg in 0..=segments {
        let u = seg as f32 / segments as f32;
        let theta = u * TAU;
        let (sin, cos) = theta.sin_cos();
        let normal = Vec3::new(cos, slope, sin).normalize();

        mesh.add_vertex(Vertex::with_uv(
            Vec3::new(radius_bottom * cos, -half_height, radius_bottom * sin),
            normal,
            Vec2::new(u, 0.0),
        ));
        mesh.add_vertex(Vertex::with_uv(
            Vec3::new(radius_top * cos, half_height, radius_top * sin),
            normal,
            Vec2::new(u, 1.0),
        ));
    }

    for seg in 0..segments {
        let i0 = seg * 2;
        let i1 = i0 + 1;
        let i2 = (seg + 1) * 2;
        let i3 = i2 + 1;

        // i0=bottom, i1=top at seg; i2/i3 at seg + 1. Skip halves that meet at an apex.
        if radius_top > 0.0 {
            mesh.add_triangle(i0, i1, i3);
        }
        if radius_bottom > 0.0 {
            mesh.add_triangle(i0, i3, i2);
        }
    }

    let mut add_cap = |radius: f32, y: f32, normal: Vec3| {
        let center = mesh.add_vertex(Vertex::with_uv(Vec3::new(0.0, y, 0.0), normal, Vec2::splat(0.5)));
        let first = mesh.vertices.len() as u32;
        for seg in 0..segments {
            let theta = seg as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.add_vertex(Vertex::with_uv(
                Vec3::new(radius * cos, y, radius * sin),
                normal,
                Vec2::new(0.5 + cos * 0.5, 0.5 + sin * 0.5),
            ));
        }
        for seg in 0..segments {
            let a = first + seg;
            let b = first + (seg + 1) % segments;
            if normal.y > 0.0 {
                mesh.add_triangle(center, b, a);
            } else {
                mesh.add_triangle(center, a, b);
            }
        }
    };

    if radius_bottom > 0.0 {
        add_cap(radius_bottom, -half_height, Vec3::NEG_Y);
    }
    if radius_top > 0.0 {
        add_cap(radius_top, half_height, Vec3::Y);
    }

    mesh
}

/// Cone with its apex at `+height / 2`
pub fn generate_cone(radius: f32, height: f32, segments: u32) -> MeshData {
    generate_cylinder(0.0, radius, height, segments)
}

/// Flat plane in XZ facing +Y
pub fn generate_plane(width: f32, depth: f32) -> MeshData {
    let hx = positive("generate_plane", "width", width) * 0.5;
    let hz = positive("generate_plane", "depth", depth) * 0.5;

    let mut mesh = MeshData::new();
    let corners = [
        (Vec3::new(-hx, 0.0, hz), Vec2::new(0.0, 0.0)),
        (Vec3::new(hx, 0.0, hz), Vec2::new(1.0, 0.0)),
        (Vec3::new(hx, 0.0, -hz), Vec2::new(1.0, 1.0)),
        (Vec3::new(-hx, 0.0, -hz), Vec2::new(0.0, 1.0)),
    ];
    for (position, uv) in corners {
        mesh.add_vertex(Vertex::with_uv(position, Vec3::Y, uv));
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) * 0.5;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .map(Vec3::normalize)
}

/// Number of triangles in an icosahedron subdivided `subdivisions` times
pub fn polyhedron_triangle_count(subdivisions: u32) -> usize {
    20 * 4usize.pow(subdivisions.min(MAX_SUBDIVISIONS))
}

/// Faceted icosphere: every subdivision splits each face into four and
/// pushes the new corners back onto the sphere. Normals stay flat.
pub fn generate_polyhedron(radius: f32, subdivisions: u32) -> MeshData {
    let radius = positive("generate_polyhedron", "radius", radius);
    if subdivisions > MAX_SUBDIVISIONS {
        warn!(
            "generate_polyhedron: subdivisions {} exceeds {}, clamping",
            subdivisions, MAX_SUBDIVISIONS
        );
    }
    let subdivisions = subdivisions.min(MAX_SUBDIVISIONS);

    let corners = icosahedron_vertices();
    let mut faces: Vec<[Vec3; 3]> = ICOSAHEDRON_FACES
        .iter()
        .map(|f| [corners[f[0]], corners[f[1]], corners[f[2]]])
        .collect();

    for _ in 0..subdivisions {
        faces = faces
            .into_iter()
            .flat_map(|[a, b, c]| {
                let ab = ((a + b) * 0.5).normalize();
                let bc = ((b + c) * 0.5).normalize();
                let ca = ((c + a) * 0.5).normalize();
                [[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]
            })
            .collect();
    }

    let mut mesh = MeshData::new();
    for [a, b, c] in faces {
        let (a, b, c) = (a * radius, b * radius, c * radius);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let i0 = mesh.add_vertex(Vertex::new(a, normal));
        let i1 = mesh.add_vertex(Vertex::new(b, normal));
        let i2 = mesh.add_vertex(Vertex::new(c, normal));
        mesh.add_triangle(i0, i1, i2);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward(mesh: &MeshData) {
        let center = mesh.bounds().center();
        for [a, b, c] in mesh.triangles() {
            let (a, b, c) = (
                mesh.vertices[a as usize].position,
                mesh.vertices[b as usize].position,
                mesh.vertices[c as usize].position,
            );
            let face_normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                face_normal.dot(centroid - center) >= -1e-5,
                "Triangle at {:?} winds inward",
                centroid
            );
        }
    }

    #[test]
    fn test_box_counts_and_extent() {
        let mesh = generate_box(2.0, 4.0, 6.0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.indices.len(), 36);
        let bounds = mesh.bounds();
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 3.0));
        assert!(mesh.has_uvs());
        assert_outward(&mesh);
    }

    #[test]
    fn test_box_clamps_degenerate_size() {
        let mesh = generate_box(0.0, -1.0, 1.0);
        let size = mesh.bounds().size();
        assert!(size.x > 0.0 && size.y > 0.0);
    }

    #[test]
    fn test_sphere_vertex_count() {
        let mesh = generate_sphere(1.0, 16, 8);
        assert_eq!(mesh.vertex_count(), 9 * 17);
        assert_eq!(mesh.triangle_count(), 16 * (2 * 8 - 2));
        assert_outward(&mesh);
    }

    fn assert_no_degenerate_triangles(mesh: &MeshData) {
        for [a, b, c] in mesh.triangles() {
            let (a, b, c) = (
                mesh.vertices[a as usize].position,
                mesh.vertices[b as usize].position,
                mesh.vertices[c as usize].position,
            );
            assert!(
                (b - a).cross(c - a).length_squared() >= 1e-12,
                "Zero-area triangle {:?} {:?} {:?}",
                a,
                b,
                c
            );
        }
    }

    #[test]
    fn test_sphere_poles_have_no_zero_area_triangles() {
        assert_no_degenerate_triangles(&generate_sphere(1.0, 16, 8));
        assert_no_degenerate_triangles(&generate_sphere(0.3, 3, 2));
    }

    #[test]
    fn test_cone_apex_has_no_zero_area_triangles() {
        assert_no_degenerate_triangles(&generate_cone(1.0, 2.0, 8));
        assert_no_degenerate_triangles(&generate_cylinder(1.0, 0.0, 2.0, 8));
    }

    #[test]
    fn test_sphere_normals_are_unit() {
        let mesh = generate_sphere(2.5, 12, 6);
        for v in &mesh.vertices {
            assert!((v.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cylinder_with_caps() {
        let mesh = generate_cylinder(1.0, 1.0, 2.0, 8);
        // Side: 9 columns x 2, caps: (1 + 8) each
        assert_eq!(mesh.vertex_count(), 18 + 9 + 9);
        assert_eq!(mesh.triangle_count(), 16 + 8 + 8);
        assert_outward(&mesh);
    }

    #[test]
    fn test_cone_has_single_cap() {
        let mesh = generate_cone(1.0, 2.0, 8);
        assert_eq!(mesh.triangle_count(), 8 + 8);
        let bounds = mesh.bounds();
        assert!((bounds.max.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_polyhedron_subdivision_counts() {
        for level in 0..=3 {
            let mesh = generate_polyhedron(1.0, level);
            assert_eq!(mesh.triangle_count(), polyhedron_triangle_count(level));
        }
    }

    #[test]
    fn test_polyhedron_vertices_on_sphere() {
        let mesh = generate_polyhedron(3.0, 2);
        for v in &mesh.vertices {
            assert!((v.position.length() - 3.0).abs() < 1e-4);
        }
        assert_outward(&mesh);
    }

    #[test]
    fn test_polyhedron_clamps_subdivisions() {
        let mesh = generate_polyhedron(1.0, 99);
        assert_eq!(mesh.triangle_count(), polyhedron_triangle_count(MAX_SUBDIVISIONS));
    }

    #[test]
    fn test_plane_faces_up() {
        let mesh = generate_plane(10.0, 10.0);
        assert_eq!(mesh.triangle_count(), 2);
        let [a, b, c] = mesh.triangles().next().unwrap();
        let (a, b, c) = (
            mesh.vertices[a as usize].position,
            mesh.vertices[b as usize].position,
            mesh.vertices[c as usize].position,
        );
        assert!((b - a).cross(c - a).y > 0.0);
    }
}

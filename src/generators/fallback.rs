use glam::{Quat, Vec3};

use crate::geometry::Shape;
use crate::math::{color_from_string, string_hash, Rgb};
use crate::router::Category;
use crate::scene::{Material, SceneNode};

use super::{DetailLevel, Generator, Jitter};

/// Half-extent of the debris volume at size factor 1.0
pub const DEBRIS_EXTENT: Vec3 = Vec3::new(4.0, 2.5, 4.0);

/// At least `28 + 18 * detail` pieces
pub fn debris_count(detail: DetailLevel) -> usize {
    (28.0 + 18.0 * detail.value()).ceil() as usize
}

pub fn debris_subdivisions(detail: DetailLevel) -> u32 {
    ((detail.value() * 0.75).floor() as u32).min(3)
}

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Additive recurrence on the 3-D generalized golden ratio (root of x^4 = x + 1):
/// well spread points in the unit cube
fn spread(i: usize, offset: Vec3) -> Vec3 {
    const G: f32 = 1.220_744_1;
    let n = i as f32 + 1.0;
    Vec3::new(
        fract(offset.x + n / G),
        fract(offset.y + n / (G * G)),
        fract(offset.z + n / (G * G * G)),
    )
}

/// Cloud of irregular polyhedra colored from the prompt itself
pub struct FallbackGenerator;

impl Generator for FallbackGenerator {
    fn category(&self) -> Category {
        Category::Fallback
    }

    fn build(&self, detail: DetailLevel, seed: &str, jitter: &mut Jitter) -> SceneNode {
        let s = detail.size_factor();
        let extent = DEBRIS_EXTENT * s;
        let count = debris_count(detail);
        let subdivisions = debris_subdivisions(detail);

        let base = color_from_string(seed);
        let shades = [
            Material::standard("debris", base).shared(),
            Material::standard("debris_light", base.lerp(Rgb::WHITE, 0.25)).shared(),
            Material::standard("debris_dark", base.scale(0.6)).shared(),
        ];

        let hash = string_hash(seed);
        let offset = Vec3::new(
            (hash & 0x3ff) as f32 / 1024.0,
            ((hash >> 10) & 0x3ff) as f32 / 1024.0,
            ((hash >> 20) & 0x3ff) as f32 / 1024.0,
        );

        let pieces = (0..count)
            .map(|i| {
                let cell = spread(i, offset) * 2.0 - Vec3::ONE;
                let position = (cell * extent + jitter.vec3(Vec3::splat(0.3 * s))).clamp(-extent, extent);
                let radius = jitter.vary(0.28 * s, 0.4);
                let stretch = Vec3::new(jitter.vary(1.0, 0.35), jitter.vary(1.0, 0.35), jitter.vary(1.0, 0.35));
                let spin = Quat::from_euler(
                    glam::EulerRot::XYZ,
                    jitter.offset(std::f32::consts::PI),
                    jitter.offset(std::f32::consts::PI),
                    jitter.offset(std::f32::consts::PI),
                );

                SceneNode::mesh(
                    format!("debris_{}", i),
                    Shape::Polyhedron {
                        radius,
                        subdivisions,
                    },
                    shades[i % shades.len()].clone(),
                )
                .at(position)
                .rotated(spin)
                .scaled(stretch)
            })
            .collect::<Vec<_>>();

        SceneNode::group("debris_field")
            .at(Vec3::new(0.0, extent.y + 0.5, 0.0))
            .with_children(pieces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debris_count_lower_bound() {
        for detail in [0.25, 0.5, 1.0, 1.7, 4.0] {
            let level = DetailLevel::new(detail);
            assert!(debris_count(level) as f32 >= 28.0 + 18.0 * detail);
        }
    }

    #[test]
    fn test_subdivisions_grow_with_detail() {
        assert_eq!(debris_subdivisions(DetailLevel::new(0.25)), 0);
        assert!(debris_subdivisions(DetailLevel::new(4.0)) > debris_subdivisions(DetailLevel::new(1.0)));
    }

    #[test]
    fn test_pieces_stay_in_volume() {
        let detail = DetailLevel::new(2.0);
        let field = FallbackGenerator.build(detail, "banana", &mut Jitter::seeded(5));
        let extent = DEBRIS_EXTENT * detail.size_factor();
        for piece in &field.children {
            let p = piece.transform.translation;
            assert!(p.abs().cmple(extent).all(), "{:?} outside {:?}", p, extent);
        }
    }

    #[test]
    fn test_blueprint_positions_depend_on_seed() {
        let a = FallbackGenerator.build(DetailLevel::default(), "banana", &mut Jitter::none());
        let b = FallbackGenerator.build(DetailLevel::default(), "banana", &mut Jitter::none());
        let c = FallbackGenerator.build(DetailLevel::default(), "kiwi", &mut Jitter::none());
        assert_eq!(a, b);
        assert_ne!(a.children[0].transform, c.children[0].transform);
    }
}

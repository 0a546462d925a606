use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::geometry::Shape;
use crate::math::{color_from_string, Rgb};
use crate::router::Category;
use crate::scene::{Material, MaterialRef, SceneNode};

use super::{DetailLevel, Generator, Jitter};

/// Cone fuselage pointing down +Z with two mirrored wing and engine pod assemblies
pub struct SpaceshipGenerator;

impl SpaceshipGenerator {
    fn wing(side: f32, s: f32, detail: DetailLevel, hull: &MaterialRef, exhaust: &MaterialRef) -> SceneNode {
        let label = if side < 0.0 { "left" } else { "right" };
        // Cylinders run along Y; tip them onto Z
        let along_z = Quat::from_rotation_x(FRAC_PI_2);

        SceneNode::group(format!("wing_{}", label))
            .at(Vec3::new(side * 0.6 * s, 0.0, -0.6 * s))
            .with_child(
                SceneNode::mesh(
                    "wing_panel",
                    Shape::Box {
                        width: 2.2 * s,
                        height: 0.1 * s,
                        depth: 1.2 * s,
                    },
                    hull.clone(),
                )
                .at(Vec3::new(side * 1.1 * s, 0.0, 0.0))
                .rotated(Quat::from_rotation_z(side * 0.08)),
            )
            .with_child(
                SceneNode::mesh(
                    "engine_pod",
                    Shape::Cylinder {
                        radius_top: 0.28 * s,
                        radius_bottom: 0.22 * s,
                        height: 1.5 * s,
                        segments: detail.segments(12),
                    },
                    hull.clone(),
                )
                .at(Vec3::new(side * 2.1 * s, 0.0, -0.1 * s))
                .rotated(along_z)
                .with_child(
                    SceneNode::mesh(
                        "exhaust",
                        Shape::Sphere {
                            radius: 0.2 * s,
                            segments: detail.segments(8),
                            rings: detail.segments(4) / 2,
                        },
                        exhaust.clone(),
                    )
                    .at(Vec3::new(0.0, -0.78 * s, 0.0))
                    .scaled(Vec3::new(1.0, 0.5, 1.0)),
                ),
            )
    }
}

impl Generator for SpaceshipGenerator {
    fn category(&self) -> Category {
        Category::Spaceship
    }

    fn build(&self, detail: DetailLevel, seed: &str, _jitter: &mut Jitter) -> SceneNode {
        let s = detail.size_factor();
        let hull_color = Rgb::new(0.82, 0.84, 0.88).lerp(color_from_string(seed), 0.3);
        let hull = Material::metallic("ship_hull", hull_color, 0.3, 0.85).shared();
        let exhaust = Material::glowing("ship_exhaust", Rgb::new(1.0, 0.55, 0.15), 4.0).shared();
        let canopy = Material::metallic("ship_canopy", Rgb::new(0.15, 0.3, 0.5), 0.05, 0.2).shared();

        let fuselage = SceneNode::mesh(
            "fuselage",
            Shape::Cone {
                radius: 0.8 * s,
                height: 4.0 * s,
                segments: detail.segments(16),
            },
            hull.clone(),
        )
        .rotated(Quat::from_rotation_x(FRAC_PI_2))
        .with_child(
            SceneNode::mesh(
                "canopy",
                Shape::Sphere {
                    radius: 0.35 * s,
                    segments: detail.segments(12),
                    rings: detail.segments(6) / 2,
                },
                canopy,
            )
            // Fuselage-local: +Y is the nose, -Z is up
            .at(Vec3::new(0.0, 0.4 * s, -0.45 * s))
            .scaled(Vec3::new(0.8, 1.6, 0.6)),
        );

        SceneNode::group("spaceship")
            .at(Vec3::new(0.0, 2.0 * s, 0.0))
            .with_child(fuselage)
            .with_children([-1.0, 1.0].map(|side| Self::wing(side, s, detail, &hull, &exhaust)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuselage_points_forward() {
        let ship = SpaceshipGenerator.build(DetailLevel::default(), "ship", &mut Jitter::none());
        let fuselage = ship.find("fuselage").unwrap();
        let nose = fuselage.transform.rotation * Vec3::Y;
        assert!((nose - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_wings_are_mirrored() {
        let ship = SpaceshipGenerator.build(DetailLevel::new(2.0), "ship", &mut Jitter::none());
        let left = ship.find("wing_left").unwrap();
        let right = ship.find("wing_right").unwrap();
        assert_eq!(left.transform.translation.x, -right.transform.translation.x);
        assert_eq!(left.primitive_count(), right.primitive_count());
        assert!(left.find("engine_pod").is_some());
    }
}

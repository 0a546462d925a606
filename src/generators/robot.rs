use glam::{Quat, Vec3};

use crate::geometry::Shape;
use crate::math::{color_from_string, Rgb};
use crate::router::Category;
use crate::scene::{Material, MaterialRef, SceneNode};

use super::{DetailLevel, Generator, Jitter};

pub fn finger_count(detail: DetailLevel) -> usize {
    detail.count(2, 1.0).min(5)
}

pub fn plate_count(detail: DetailLevel) -> usize {
    detail.count(4, 4.0)
}

fn bolt_count(detail: DetailLevel) -> usize {
    detail.count(2, 4.0)
}

struct RobotMaterials {
    armor: MaterialRef,
    joint: MaterialRef,
    plate: MaterialRef,
    glow: MaterialRef,
}

impl RobotMaterials {
    fn new(seed: &str) -> Self {
        // Seed color tints the armor so "red robot" and "blue robot" differ
        let tint = color_from_string(seed);
        let silver = Rgb::new(0.75, 0.76, 0.78);
        Self {
            armor: Material::metallic("robot_armor", silver.lerp(tint, 0.25), 0.35, 0.8).shared(),
            joint: Material::metallic("robot_joint", Rgb::new(0.25, 0.25, 0.28), 0.5, 0.9).shared(),
            plate: Material::metallic("robot_plate", silver.lerp(tint, 0.5).scale(0.8), 0.45, 0.7).shared(),
            glow: Material::glowing("robot_glow", Rgb::new(0.2, 0.9, 1.0), 2.5).shared(),
        }
    }
}

/// Humanoid robot: boxy torso and head, articulated arms, legs, antenna and armor plates
pub struct RobotGenerator;

impl RobotGenerator {
    fn arm(side: f32, s: f32, detail: DetailLevel, materials: &RobotMaterials) -> SceneNode {
        let label = if side < 0.0 { "left" } else { "right" };
        let fingers = finger_count(detail);
        let hand_width = 0.34 * s;

        let finger_nodes = (0..fingers).map(|i| {
            let t = if fingers > 1 { i as f32 / (fingers - 1) as f32 } else { 0.5 };
            SceneNode::mesh(
                format!("finger_{}", i),
                Shape::Box {
                    width: 0.05 * s,
                    height: 0.18 * s,
                    depth: 0.06 * s,
                },
                materials.joint.clone(),
            )
            .at(Vec3::new((t - 0.5) * (hand_width - 0.06 * s), -0.2 * s, 0.0))
        });

        let hand = SceneNode::mesh(
            "hand",
            Shape::Box {
                width: hand_width,
                height: 0.24 * s,
                depth: 0.2 * s,
            },
            materials.armor.clone(),
        )
        .at(Vec3::new(0.0, -0.95 * s, 0.0))
        .with_children(finger_nodes);

        let forearm = SceneNode::group("forearm")
            .at(Vec3::new(0.0, -0.9 * s, 0.0))
            .rotated(Quat::from_rotation_x(-0.35))
            .with_child(
                SceneNode::mesh(
                    "elbow",
                    Shape::Sphere {
                        radius: 0.15 * s,
                        segments: detail.segments(8),
                        rings: detail.segments(4) / 2,
                    },
                    materials.joint.clone(),
                ),
            )
            .with_child(
                SceneNode::mesh(
                    "forearm_shell",
                    Shape::Cylinder {
                        radius_top: 0.13 * s,
                        radius_bottom: 0.11 * s,
                        height: 0.8 * s,
                        segments: detail.segments(8),
                    },
                    materials.armor.clone(),
                )
                .at(Vec3::new(0.0, -0.45 * s, 0.0)),
            )
            .with_child(hand);

        SceneNode::group(format!("arm_{}", label))
            .at(Vec3::new(side * 1.0 * s, 3.15 * s, 0.0))
            .rotated(Quat::from_rotation_z(side * 0.12))
            .with_child(
                SceneNode::mesh(
                    "shoulder",
                    Shape::Sphere {
                        radius: 0.22 * s,
                        segments: detail.segments(8),
                        rings: detail.segments(4) / 2,
                    },
                    materials.joint.clone(),
                ),
            )
            .with_child(
                SceneNode::mesh(
                    "upper_arm",
                    Shape::Cylinder {
                        radius_top: 0.15 * s,
                        radius_bottom: 0.14 * s,
                        height: 0.9 * s,
                        segments: detail.segments(8),
                    },
                    materials.armor.clone(),
                )
                .at(Vec3::new(0.0, -0.45 * s, 0.0)),
            )
            .with_child(forearm)
    }

    fn leg(side: f32, s: f32, detail: DetailLevel, materials: &RobotMaterials) -> SceneNode {
        let label = if side < 0.0 { "left" } else { "right" };
        SceneNode::group(format!("leg_{}", label))
            .at(Vec3::new(side * 0.45 * s, 1.4 * s, 0.0))
            .with_child(
                SceneNode::mesh(
                    "thigh",
                    Shape::Cylinder {
                        radius_top: 0.2 * s,
                        radius_bottom: 0.17 * s,
                        height: 1.2 * s,
                        segments: detail.segments(8),
                    },
                    materials.armor.clone(),
                )
                .at(Vec3::new(0.0, -0.6 * s, 0.0)),
            )
            .with_child(
                SceneNode::mesh(
                    "foot",
                    Shape::Box {
                        width: 0.42 * s,
                        height: 0.16 * s,
                        depth: 0.65 * s,
                    },
                    materials.joint.clone(),
                )
                .at(Vec3::new(0.0, -1.28 * s, 0.1 * s)),
            )
    }
}

impl Generator for RobotGenerator {
    fn category(&self) -> Category {
        Category::Robot
    }

    fn build(&self, detail: DetailLevel, seed: &str, jitter: &mut Jitter) -> SceneNode {
        let s = detail.size_factor();
        let materials = RobotMaterials::new(seed);

        let torso_size = Vec3::new(1.6, 2.0, 1.0) * s;
        let torso_center = Vec3::new(0.0, 2.4 * s, 0.0);

        let mut torso = SceneNode::mesh(
            "torso",
            Shape::Box {
                width: torso_size.x,
                height: torso_size.y,
                depth: torso_size.z,
            },
            materials.armor.clone(),
        )
        .at(torso_center);

        // Plates alternate front/back on a 3-column grid; jitter scatters them
        let plates = plate_count(detail);
        for i in 0..plates {
            let column = (i % 3) as f32 - 1.0;
            let row = (i / 6) as f32;
            let face = if (i / 3) % 2 == 0 { 1.0 } else { -1.0 };
            let base = Vec3::new(
                column * torso_size.x * 0.3,
                torso_size.y * 0.3 - row * torso_size.y * 0.18,
                face * (torso_size.z * 0.5 + 0.02 * s),
            );
            let scatter = jitter.vec3(Vec3::new(0.06, 0.06, 0.0) * s);
            let y = (base.y + scatter.y).clamp(-torso_size.y * 0.45, torso_size.y * 0.45);
            torso.add_child(
                SceneNode::mesh(
                    format!("plate_{}", i),
                    Shape::Box {
                        width: jitter.vary(0.3 * s, 0.15),
                        height: jitter.vary(0.22 * s, 0.15),
                        depth: 0.04 * s,
                    },
                    materials.plate.clone(),
                )
                .at(Vec3::new(base.x + scatter.x, y, base.z)),
            );
        }

        for i in 0..bolt_count(detail) {
            let along = (i as f32 + 0.5) / bolt_count(detail) as f32;
            let x = (along - 0.5) * torso_size.x * 0.9 + jitter.offset(0.05 * s);
            let y = -torso_size.y * 0.42 + jitter.offset(0.04 * s);
            torso.add_child(
                SceneNode::mesh(
                    format!("bolt_{}", i),
                    Shape::Sphere {
                        radius: 0.04 * s,
                        segments: 6,
                        rings: 4,
                    },
                    materials.joint.clone(),
                )
                .at(Vec3::new(x, y, torso_size.z * 0.5 + 0.02 * s)),
            );
        }

        let head = SceneNode::mesh(
            "head",
            Shape::Box {
                width: 1.0 * s,
                height: 0.8 * s,
                depth: 0.8 * s,
            },
            materials.armor.clone(),
        )
        .at(Vec3::new(0.0, 3.85 * s, 0.0))
        .with_child(
            SceneNode::mesh(
                "eye_strip",
                Shape::Box {
                    width: 0.7 * s,
                    height: 0.12 * s,
                    depth: 0.05 * s,
                },
                materials.glow.clone(),
            )
            .at(Vec3::new(0.0, 0.08 * s, 0.41 * s)),
        )
        .with_child(
            SceneNode::mesh(
                "antenna",
                Shape::Cylinder {
                    radius_top: 0.025 * s,
                    radius_bottom: 0.035 * s,
                    height: 0.5 * s,
                    segments: 6,
                },
                materials.joint.clone(),
            )
            .at(Vec3::new(0.0, 0.65 * s, 0.0))
            .with_child(
                SceneNode::mesh(
                    "antenna_tip",
                    Shape::Sphere {
                        radius: 0.07 * s,
                        segments: detail.segments(6),
                        rings: detail.segments(2) / 2,
                    },
                    Material::glowing("robot_beacon", Rgb::new(1.0, 0.25, 0.2), 3.0).shared(),
                )
                .at(Vec3::new(0.0, 0.28 * s, 0.0)),
            ),
        );

        SceneNode::group("robot")
            .with_child(torso)
            .with_child(head)
            .with_children([-1.0, 1.0].map(|side| Self::arm(side, s, detail, &materials)))
            .with_children([-1.0, 1.0].map(|side| Self::leg(side, s, detail, &materials)))
    }
}

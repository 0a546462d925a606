use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use crate::geometry::Shape;
use crate::math::{color_from_string, Rgb};
use crate::router::Category;
use crate::scene::{Material, MaterialRef, SceneNode};

use super::{DetailLevel, Generator, Jitter};

pub fn tower_count(detail: DetailLevel) -> usize {
    detail.count(4, 2.0)
}

pub fn crenellations_per_tower(detail: DetailLevel) -> usize {
    detail.count(6, 2.0)
}

/// Ring of crenellated towers around a central keep
pub struct CastleGenerator;

impl CastleGenerator {
    fn tower(
        index: usize,
        angle: f32,
        ring_radius: f32,
        s: f32,
        detail: DetailLevel,
        stone: &MaterialRef,
        jitter: &mut Jitter,
    ) -> SceneNode {
        let radius = 0.9 * s;
        let height = 5.0 * s;
        let bricks = crenellations_per_tower(detail);
        let brick_height = 0.4 * s;

        let crenellations = (0..bricks)
            .map(|i| {
                let theta = i as f32 / bricks as f32 * TAU;
                let rim = radius * 0.85;
                let brick_h = jitter.vary(brick_height, 0.15);
                SceneNode::mesh(
                    format!("crenel_{}", i),
                    Shape::Box {
                        width: 0.3 * s,
                        height: brick_h,
                        depth: 0.2 * s,
                    },
                    stone.clone(),
                )
                .at(Vec3::new(theta.cos() * rim, height + brick_h * 0.5, theta.sin() * rim))
                .rotated(Quat::from_rotation_y(-theta))
            })
            .collect::<Vec<_>>();

        SceneNode::group(format!("tower_{}", index))
            .at(Vec3::new(angle.cos() * ring_radius, 0.0, angle.sin() * ring_radius))
            .with_child(
                SceneNode::mesh(
                    "shaft",
                    Shape::Cylinder {
                        radius_top: radius,
                        radius_bottom: radius,
                        height,
                        segments: detail.segments(12),
                    },
                    stone.clone(),
                )
                .at(Vec3::new(0.0, height * 0.5, 0.0)),
            )
            .with_children(crenellations)
    }
}

impl Generator for CastleGenerator {
    fn category(&self) -> Category {
        Category::Castle
    }

    fn build(&self, detail: DetailLevel, seed: &str, jitter: &mut Jitter) -> SceneNode {
        let s = detail.size_factor();
        let gray = Rgb::new(0.55, 0.55, 0.57);
        let stone = Material::standard("castle_stone", gray.lerp(color_from_string(seed), 0.1)).shared();
        let keep_stone = Material::standard("castle_keep", gray.scale(0.7)).shared();
        let wood = Material::standard("castle_gate", Rgb::new(0.35, 0.22, 0.12)).shared();

        let towers = tower_count(detail);
        let ring_radius = 4.0 * s;

        let mut castle = SceneNode::group("castle");
        for i in 0..towers {
            let angle = i as f32 / towers as f32 * TAU;
            castle.add_child(Self::tower(i, angle, ring_radius, s, detail, &stone, jitter));
        }

        let keep_size = Vec3::new(5.0, 3.0, 5.0) * s;
        castle.add_child(
            SceneNode::mesh(
                "keep",
                Shape::Box {
                    width: keep_size.x,
                    height: keep_size.y,
                    depth: keep_size.z,
                },
                keep_stone,
            )
            .at(Vec3::new(0.0, keep_size.y * 0.5, 0.0))
            .with_child(
                SceneNode::mesh(
                    "gate",
                    Shape::Box {
                        width: 1.0 * s,
                        height: 1.6 * s,
                        depth: 0.1 * s,
                    },
                    wood,
                )
                .at(Vec3::new(0.0, -keep_size.y * 0.5 + 0.8 * s, keep_size.z * 0.5 + 0.05 * s)),
            ),
        );

        castle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn towers_in(castle: &SceneNode) -> usize {
        castle
            .children
            .iter()
            .filter(|child| child.name.starts_with("tower_"))
            .count()
    }

    #[test]
    fn test_default_castle_layout() {
        let detail = DetailLevel::default();
        let castle = CastleGenerator.build(detail, "castle", &mut Jitter::none());
        assert_eq!(towers_in(&castle), tower_count(detail));
        assert!(castle.find("keep").is_some());
    }

    #[test]
    fn test_crenellations_sit_on_rim() {
        let detail = DetailLevel::new(2.0);
        let castle = CastleGenerator.build(detail, "castle", &mut Jitter::none());
        let tower = castle.find("tower_0").unwrap();
        let bricks: Vec<_> = tower.children.iter().filter(|c| c.name.starts_with("crenel_")).collect();
        assert_eq!(bricks.len(), crenellations_per_tower(detail));

        let shaft_top = 5.0 * detail.size_factor();
        for brick in bricks {
            assert!(brick.transform.translation.y > shaft_top);
        }
    }

    #[test]
    fn test_towers_evenly_spaced_on_ring() {
        let detail = DetailLevel::new(3.0);
        let castle = CastleGenerator.build(detail, "castle", &mut Jitter::seeded(3));
        let expected = 4.0 * detail.size_factor();
        for tower in castle.children.iter().filter(|c| c.name.starts_with("tower_")) {
            let distance = tower.transform.translation.length();
            assert!((distance - expected).abs() < 1e-4);
        }
    }
}

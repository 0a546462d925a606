use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::geometry::Shape;
use crate::math::{color_from_string, Rgb};
use crate::router::Category;
use crate::scene::{Material, MaterialRef, SceneNode, StripeBand, StripeTexture};

use super::{DetailLevel, Generator, Jitter};

const TIGER_ORANGE: u32 = 0xe0_7a1f;
const TIGER_STRIPE: u32 = 0x1a_1510;

pub fn stripe_count(detail: DetailLevel) -> usize {
    detail.count(8, 4.0)
}

pub fn tail_segment_count(detail: DetailLevel) -> usize {
    detail.count(6, 4.0)
}

fn whiskers_per_side(detail: DetailLevel) -> usize {
    detail.count(2, 1.0).min(6)
}

/// Evenly spaced bands, each nudged and widened by jitter
fn stripe_texture(detail: DetailLevel, base: Rgb, jitter: &mut Jitter) -> StripeTexture {
    let count = stripe_count(detail);
    let spacing = 1.0 / count as f32;
    let bands = (0..count)
        .map(|i| StripeBand {
            center: ((i as f32 + 0.5) * spacing + jitter.offset(spacing * 0.25)).rem_euclid(1.0),
            half_width: jitter.vary(spacing * 0.18, 0.35),
        })
        .collect();

    StripeTexture {
        base,
        stripe: Rgb::from_hex(TIGER_STRIPE),
        bands,
    }
}

/// Quadruped big cat with a striped body, segmented tail and whiskers
pub struct TigerGenerator;

impl TigerGenerator {
    fn leg(index: usize, s: f32, detail: DetailLevel, fur: &MaterialRef) -> SceneNode {
        let x = if index < 2 { 1.1 } else { -1.1 };
        let z = if index % 2 == 0 { 0.45 } else { -0.45 };
        SceneNode::group(format!("leg_{}", index))
            .at(Vec3::new(x * s, -0.75 * s, z * s))
            .with_child(SceneNode::mesh(
                "shin",
                Shape::Cylinder {
                    radius_top: 0.22 * s,
                    radius_bottom: 0.17 * s,
                    height: 1.1 * s,
                    segments: detail.segments(8),
                },
                fur.clone(),
            ))
            .with_child(
                SceneNode::mesh(
                    "paw",
                    Shape::Sphere {
                        radius: 0.2 * s,
                        segments: detail.segments(8),
                        rings: detail.segments(4) / 2,
                    },
                    fur.clone(),
                )
                .at(Vec3::new(0.08 * s, -0.58 * s, 0.0))
                .scaled(Vec3::new(1.3, 0.55, 1.1)),
            )
    }

    fn tail(s: f32, detail: DetailLevel, fur: &MaterialRef, tip: &MaterialRef) -> SceneNode {
        let segments = tail_segment_count(detail);
        let length = 1.8 * s;
        let step = length / segments as f32;

        let parts = (0..segments).map(|i| {
            let t = i as f32 / segments as f32;
            // Curls upward toward the tip
            let position = Vec3::new(-t * length, (t * t) * 0.9 * s, 0.0);
            let radius = 0.16 * s * (1.0 - 0.65 * t);
            let material = if i + 1 == segments { tip.clone() } else { fur.clone() };
            SceneNode::mesh(
                format!("tail_{}", i),
                Shape::Sphere {
                    radius,
                    segments: detail.segments(6),
                    rings: detail.segments(2) / 2,
                },
                material,
            )
            .at(position)
            .scaled(Vec3::new((step / (2.0 * radius)).max(1.0), 1.0, 1.0))
        });

        SceneNode::group("tail")
            .at(Vec3::new(-1.95 * s, 0.25 * s, 0.0))
            .with_children(parts)
    }

    fn head(s: f32, detail: DetailLevel, fur: &MaterialRef) -> SceneNode {
        let dark = Material::standard("tiger_dark", Rgb::from_hex(TIGER_STRIPE)).shared();
        let eye = Material::glowing("tiger_eye", Rgb::new(0.85, 0.9, 0.2), 0.6).shared();
        let whisker = Material::standard("tiger_whisker", Rgb::new(0.95, 0.95, 0.9)).shared();

        let mut head = SceneNode::mesh(
            "head",
            Shape::Sphere {
                radius: 0.65 * s,
                segments: detail.segments(16),
                rings: detail.segments(8) / 2,
            },
            fur.clone(),
        )
        .at(Vec3::new(2.15 * s, 0.45 * s, 0.0));

        for (label, z) in [("left", -1.0_f32), ("right", 1.0)] {
            head.add_child(
                SceneNode::mesh(
                    format!("ear_{}", label),
                    Shape::Cone {
                        radius: 0.17 * s,
                        height: 0.32 * s,
                        segments: detail.segments(6),
                    },
                    fur.clone(),
                )
                .at(Vec3::new(-0.1 * s, 0.58 * s, z * 0.34 * s)),
            );
            head.add_child(
                SceneNode::mesh(
                    format!("eye_{}", label),
                    Shape::Sphere {
                        radius: 0.08 * s,
                        segments: 8,
                        rings: 6,
                    },
                    eye.clone(),
                )
                .at(Vec3::new(0.52 * s, 0.18 * s, z * 0.22 * s)),
            );

            let count = whiskers_per_side(detail);
            for i in 0..count {
                let fan = (i as f32 - (count as f32 - 1.0) * 0.5) * 0.18;
                head.add_child(
                    SceneNode::mesh(
                        format!("whisker_{}_{}", label, i),
                        Shape::Cylinder {
                            radius_top: 0.006 * s,
                            radius_bottom: 0.012 * s,
                            height: 0.7 * s,
                            segments: 4,
                        },
                        whisker.clone(),
                    )
                    .at(Vec3::new(0.6 * s, -0.05 * s + fan * 0.2 * s, z * 0.45 * s))
                    .rotated(Quat::from_rotation_x(z * FRAC_PI_2) * Quat::from_rotation_z(fan)),
                );
            }
        }

        head.add_child(
            SceneNode::mesh("nose", Shape::cube(0.14 * s), dark).at(Vec3::new(0.63 * s, 0.0, 0.0)),
        );
        head
    }
}

impl Generator for TigerGenerator {
    fn category(&self) -> Category {
        Category::Tiger
    }

    fn build(&self, detail: DetailLevel, seed: &str, jitter: &mut Jitter) -> SceneNode {
        let s = detail.size_factor();
        let base = Rgb::from_hex(TIGER_ORANGE).lerp(color_from_string(seed), 0.15);

        let fur = Material::standard("tiger_fur", base).shared();
        let striped = Material::standard("tiger_body", base)
            .with_texture(stripe_texture(detail, base, jitter))
            .shared();
        let tip = Material::standard("tiger_tail_tip", Rgb::from_hex(TIGER_STRIPE)).shared();

        let body = SceneNode::mesh(
            "body",
            Shape::Sphere {
                radius: s,
                segments: detail.segments(32),
                rings: detail.segments(16) / 2,
            },
            striped,
        )
        .scaled(Vec3::new(2.0, 0.95, 0.85));

        SceneNode::group("tiger")
            .at(Vec3::new(0.0, 1.9 * s, 0.0))
            .with_child(body)
            .with_child(Self::head(s, detail, &fur))
            .with_children((0..4).map(|i| Self::leg(i, s, detail, &fur)))
            .with_child(Self::tail(s, detail, &fur, &tip))
    }
}

use glam::Vec3;
use log::debug;

use crate::config::FixtureConfig;
use crate::generators::GeneratedModel;
use crate::geometry::Shape;
use crate::math::{Rgb, AABB};

use super::material::Material;
use super::node::{FixtureKind, Light, LightKind, SceneNode};

/// Bookkeeping for the model currently attached to the scene
#[derive(Clone, Debug, PartialEq)]
pub struct ModelInfo {
    pub name: String,
    pub seed: String,
    pub primitives: usize,
}

/// The live scene: fixtures plus whatever was generated last.
///
/// Only `clear` and `attach` mutate the node list.
#[derive(Clone, Debug, Default)]
pub struct SceneState {
    children: Vec<SceneNode>,
    current: Option<ModelInfo>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera, lights and ground plane described by `config`
    pub fn with_fixtures(config: &FixtureConfig) -> Self {
        let ground_material = Material::standard("ground", Rgb::new(0.2, 0.2, 0.22)).shared();

        let mut state = Self::new();
        state.add_fixture(
            SceneNode::fixture("camera", FixtureKind::Camera { fov_degrees: 60.0 })
                .at(Vec3::from_array(config.camera_position)),
        );
        state.add_fixture(
            SceneNode::fixture(
                "point_light",
                FixtureKind::Light(Light {
                    kind: LightKind::Point,
                    color: Rgb::WHITE,
                    intensity: config.light_intensity,
                }),
            )
            .at(Vec3::from_array(config.light_position)),
        );
        state.add_fixture(SceneNode::fixture(
            "ambient_light",
            FixtureKind::Light(Light {
                kind: LightKind::Ambient,
                color: Rgb::WHITE,
                intensity: 0.35,
            }),
        ));
        state.add_fixture(
            SceneNode::fixture("ground", FixtureKind::Ground).with_primitive(
                Shape::Plane {
                    width: config.ground_size,
                    depth: config.ground_size,
                },
                ground_material,
            ),
        );
        state
    }

    /// Register a fixture. Non-fixture nodes are ignored, use `attach` for those.
    pub fn add_fixture(&mut self, node: SceneNode) -> bool {
        if !node.is_fixture() {
            return false;
        }
        self.children.push(node);
        true
    }

    /// Remove every non-fixture node, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let before = self.children.len();
        self.children.retain(SceneNode::is_fixture);
        self.current = None;

        let removed = before - self.children.len();
        debug!("Cleared scene: {} node(s) removed", removed);
        removed
    }

    /// Add a generated model as a direct child of the scene root
    pub fn attach(&mut self, model: GeneratedModel) -> &SceneNode {
        let GeneratedModel { root, seed, .. } = model;
        self.current = Some(ModelInfo {
            name: root.name.clone(),
            seed,
            primitives: root.primitive_count(),
        });
        self.children.push(root);
        &self.children[self.children.len() - 1]
    }

    /// `clear` followed by `attach`
    pub fn replace(&mut self, model: GeneratedModel) -> &SceneNode {
        self.clear();
        self.attach(model)
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &SceneNode> {
        self.children.iter().filter(|node| node.is_fixture())
    }

    pub fn generated(&self) -> impl Iterator<Item = &SceneNode> {
        self.children.iter().filter(|node| !node.is_fixture())
    }

    pub fn current_model(&self) -> Option<&ModelInfo> {
        self.current.as_ref()
    }

    pub fn camera(&self) -> Option<&SceneNode> {
        self.fixtures()
            .find(|node| matches!(node.fixture_kind(), Some(FixtureKind::Camera { .. })))
    }

    pub fn generated_primitive_count(&self) -> usize {
        self.generated().map(SceneNode::primitive_count).sum()
    }

    /// Bounds of generated geometry only
    pub fn generated_bounds(&self) -> AABB {
        self.generated()
            .fold(AABB::empty(), |aabb, node| aabb.union(&node.bounds()))
    }
}

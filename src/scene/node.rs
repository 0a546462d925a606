use glam::{Mat4, Quat, Vec3};

use crate::geometry::{MeshData, Shape};
use crate::math::{Rgb, AABB};

use super::material::MaterialRef;
use super::transform::Transform;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightKind {
    Point,
    Ambient,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Rgb,
    pub intensity: f32,
}

/// Persistent scene furniture that survives regeneration
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FixtureKind {
    Camera { fov_degrees: f32 },
    Light(Light),
    Ground,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeRole {
    Fixture(FixtureKind),
    Generated,
}

/// Renderable payload of a node
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material: MaterialRef,
}

/// A flattened primitive with its transform baked in
#[derive(Clone, Debug)]
pub struct WorldMesh {
    pub name: String,
    pub mesh: MeshData,
    pub material: MaterialRef,
}

/// Scene graph node. Children are owned, so dropping a node drops its subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub primitive: Option<Primitive>,
    pub role: NodeRole,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            primitive: None,
            role: NodeRole::Generated,
            children: Vec::new(),
        }
    }

    pub fn mesh(name: impl Into<String>, shape: Shape, material: MaterialRef) -> Self {
        Self {
            primitive: Some(Primitive { shape, material }),
            ..Self::group(name)
        }
    }

    pub fn fixture(name: impl Into<String>, kind: FixtureKind) -> Self {
        Self {
            role: NodeRole::Fixture(kind),
            ..Self::group(name)
        }
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.transform.translation = translation;
        self
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_primitive(mut self, shape: Shape, material: MaterialRef) -> Self {
        self.primitive = Some(Primitive { shape, material });
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SceneNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    pub fn is_fixture(&self) -> bool {
        matches!(self.role, NodeRole::Fixture(_))
    }

    pub fn fixture_kind(&self) -> Option<FixtureKind> {
        match self.role {
            NodeRole::Fixture(kind) => Some(kind),
            NodeRole::Generated => None,
        }
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    /// Number of nodes in this subtree that carry a primitive
    pub fn primitive_count(&self) -> usize {
        usize::from(self.primitive.is_some())
            + self.children.iter().map(SceneNode::primitive_count).sum::<usize>()
    }

    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Depth-first walk over every primitive with its world matrix and slash-joined path
    pub fn visit_primitives<F>(&self, parent: Mat4, visit: &mut F)
    where
        F: FnMut(&str, &Primitive, Mat4),
    {
        self.visit_with_path(parent, "", visit);
    }

    fn visit_with_path<F>(&self, parent: Mat4, prefix: &str, visit: &mut F)
    where
        F: FnMut(&str, &Primitive, Mat4),
    {
        let world = parent * self.transform.matrix();
        let path = if prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", prefix, self.name)
        };

        if let Some(primitive) = &self.primitive {
            visit(&path, primitive, world);
        }
        for child in &self.children {
            child.visit_with_path(world, &path, visit);
        }
    }

    /// Tessellate every primitive in world space
    pub fn world_meshes(&self) -> Vec<WorldMesh> {
        let mut meshes = Vec::new();
        self.visit_primitives(Mat4::IDENTITY, &mut |path, primitive, world| {
            meshes.push(WorldMesh {
                name: path.to_string(),
                mesh: primitive.shape.tessellate().transformed(&world),
                material: primitive.material.clone(),
            });
        });
        meshes
    }

    pub fn bounds(&self) -> AABB {
        self.world_meshes()
            .iter()
            .fold(AABB::empty(), |aabb, world| aabb.union(&world.mesh.bounds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::material::Material;

    fn red() -> MaterialRef {
        Material::standard("red", Rgb::new(1.0, 0.0, 0.0)).shared()
    }

    fn sample_tree() -> SceneNode {
        SceneNode::group("root")
            .at(Vec3::new(0.0, 1.0, 0.0))
            .with_child(SceneNode::mesh("a", Shape::cube(1.0), red()))
            .with_child(
                SceneNode::group("arm")
                    .at(Vec3::new(2.0, 0.0, 0.0))
                    .with_child(SceneNode::mesh("hand", Shape::cube(0.5), red())),
            )
    }

    #[test]
    fn test_counts() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.primitive_count(), 2);
    }

    #[test]
    fn test_visit_paths_and_world_transforms() {
        let tree = sample_tree();
        let mut seen = Vec::new();
        tree.visit_primitives(Mat4::IDENTITY, &mut |path, _, world| {
            seen.push((path.to_string(), world.transform_point3(Vec3::ZERO)));
        });

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "root/a");
        assert_eq!(seen[1].0, "root/arm/hand");
        assert!((seen[1].1 - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_bounds_follow_transforms() {
        let bounds = sample_tree().bounds();
        assert!((bounds.min.y - 0.5).abs() < 1e-5);
        assert!((bounds.max.x - 2.25).abs() < 1e-5);
    }

    #[test]
    fn test_find_nested() {
        let tree = sample_tree();
        assert!(tree.find("hand").is_some());
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_fixture_role() {
        let ground = SceneNode::fixture("ground", FixtureKind::Ground);
        assert!(ground.is_fixture());
        assert_eq!(ground.fixture_kind(), Some(FixtureKind::Ground));
        assert!(!sample_tree().is_fixture());
    }

    #[test]
    fn test_clone_is_deep() {
        let tree = sample_tree();
        let mut copy = tree.clone();
        copy.children.clear();
        assert_eq!(tree.primitive_count(), 2);
        assert_eq!(copy.primitive_count(), 0);
    }
}

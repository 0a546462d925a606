mod material;
mod node;
mod state;
mod transform;

pub use material::{Emissive, Material, MaterialRef, StripeBand, StripeTexture};
pub use node::{FixtureKind, Light, LightKind, NodeRole, Primitive, SceneNode, WorldMesh};
pub use state::{ModelInfo, SceneState};
pub use transform::Transform;

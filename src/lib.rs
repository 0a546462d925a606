pub mod cli;
pub mod config;
pub mod export;
pub mod generators;
pub mod geometry;
pub mod math;
pub mod router;
pub mod scene;
pub mod studio;

pub use config::StudioConfig;
pub use export::{ExportOptions, MeshText};
pub use generators::{DetailLevel, GeneratedModel};
pub use router::{classify, Category};
pub use scene::{SceneNode, SceneState};
pub use studio::{GenerationReport, Studio};

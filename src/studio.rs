use std::path::PathBuf;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::config::StudioConfig;
use crate::export::{self, MeshText};
use crate::generators::{generator_for, DetailLevel, GeneratedModel, Jitter};
use crate::router::{classify, Category};
use crate::scene::{SceneNode, SceneState};

/// Summary of the model currently in the scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub category: Category,
    pub detail: f32,
    pub primitives: usize,
    pub vertices: usize,
    pub triangles: usize,
}

/// Owns the scene and exposes the two entry points: generate and export
pub struct Studio {
    config: StudioConfig,
    state: SceneState,
    jitter: Jitter,
    last: Option<(Category, DetailLevel)>,
}

impl Studio {
    pub fn new(config: StudioConfig) -> Self {
        let state = SceneState::with_fixtures(&config.fixtures);
        let jitter = config.jitter_seed.map(Jitter::seeded).unwrap_or_else(Jitter::random);
        Self {
            config,
            state,
            jitter,
            last: None,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Classify the prompt, build the matching model and swap it into the scene
    pub fn create_model_from_prompt(&mut self, prompt: &str, detail: f32) -> &SceneNode {
        let category = classify(prompt);
        let detail = DetailLevel::new(detail);
        info!("Prompt {:?} -> {}", prompt, category);

        let model: GeneratedModel = generator_for(category).generate(detail, prompt, &mut self.jitter);
        self.last = Some((category, detail));
        self.state.replace(model)
    }

    /// Same as [`Studio::create_model_from_prompt`] at the configured default detail
    pub fn create_model(&mut self, prompt: &str) -> &SceneNode {
        let detail = self.config.default_detail;
        self.create_model_from_prompt(prompt, detail)
    }

    pub fn export(&self) -> MeshText {
        export::export_scene(&self.state, &self.config.export)
    }

    /// Write `text` to `<output_dir>/<file_stem>.obj`
    pub fn deliver(&self, text: &MeshText) -> Result<PathBuf> {
        export::deliver(text, &self.config.output_dir, &self.config.file_stem)
    }

    pub fn report(&self) -> Option<GenerationReport> {
        let (category, detail) = self.last?;
        let meshes: Vec<_> = self.state.generated().flat_map(SceneNode::world_meshes).collect();
        Some(GenerationReport {
            category,
            detail: detail.value(),
            primitives: meshes.len(),
            vertices: meshes.iter().map(|m| m.mesh.vertex_count()).sum(),
            triangles: meshes.iter().map(|m| m.mesh.triangle_count()).sum(),
        })
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

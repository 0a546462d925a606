mod obj;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::scene::SceneState;

pub use obj::{export_nodes, ExportOptions, ObjExporter};

/// Extension given to every delivered file
pub const MESH_EXTENSION: &str = "obj";

/// Serialized OBJ document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshText(String);

impl MeshText {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn count_prefix(&self, prefix: &str) -> usize {
        self.0.lines().filter(|line| line.starts_with(prefix)).count()
    }

    /// Number of `o` blocks, one per exported primitive
    pub fn object_count(&self) -> usize {
        self.count_prefix("o ")
    }

    pub fn vertex_count(&self) -> usize {
        self.count_prefix("v ")
    }

    pub fn face_count(&self) -> usize {
        self.count_prefix("f ")
    }

    pub fn is_empty(&self) -> bool {
        self.object_count() == 0
    }
}

impl fmt::Display for MeshText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialize every generated node in `state`, leaving fixtures and the live tree untouched
pub fn export_scene(state: &SceneState, options: &ExportOptions) -> MeshText {
    let text = export_nodes(state.generated(), options);
    info!(
        "Exported {} object(s), {} vertices, {} faces",
        text.object_count(),
        text.vertex_count(),
        text.face_count()
    );
    text
}

/// `dir/stem.obj`, replacing any extension already on `stem`
pub fn delivery_path(dir: &Path, stem: &str) -> PathBuf {
    let mut path = dir.join(stem);
    path.set_extension(MESH_EXTENSION);
    path
}

/// Write `text` to `dir/stem.obj`, creating `dir` if needed
pub fn deliver(text: &MeshText, dir: &Path, stem: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = delivery_path(dir, stem);
    fs::write(&path, text.as_str())
        .with_context(|| format!("Failed to write mesh file {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(path)
}

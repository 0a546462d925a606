use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::scene::{SceneNode, WorldMesh};

use super::MeshText;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub include_normals: bool,
    pub include_uvs: bool,
    /// Append `r g b` to each `v` line, sampled from the material at the vertex UV
    pub include_colors: bool,
    /// Decimal places for coordinates
    pub precision: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_normals: true,
            include_uvs: true,
            include_colors: false,
            precision: 6,
        }
    }
}

/// Running 1-based offsets for each index stream
struct IndexBase {
    vertex: usize,
    uv: usize,
    normal: usize,
}

/// Wavefront OBJ writer.
///
/// Every primitive becomes its own `o` block inside a single `g generated`
/// group. Vertex, texture and normal indices are 1-based and run across
/// the whole document.
pub struct ObjExporter {
    options: ExportOptions,
}

impl ObjExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn parse(&self, root: &SceneNode) -> MeshText {
        let mut out = String::new();
        // fmt::Write on a String only fails on allocation failure, which aborts anyway
        let _ = self.write_document(&mut out, root);
        MeshText::new(out)
    }

    /// Serialize `root` into any formatter sink
    pub fn write_document<W: Write>(&self, out: &mut W, root: &SceneNode) -> fmt::Result {
        writeln!(out, "# modelgen OBJ export")?;
        writeln!(out, "# {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;

        let meshes: Vec<WorldMesh> = root
            .world_meshes()
            .into_iter()
            .filter(|world| !world.mesh.is_empty())
            .collect();
        if meshes.is_empty() {
            return Ok(());
        }

        writeln!(out, "g generated")?;
        let mut base = IndexBase {
            vertex: 1,
            uv: 1,
            normal: 1,
        };
        for world in &meshes {
            self.write_object(out, world, &mut base)?;
        }
        Ok(())
    }

    fn write_object<W: Write>(&self, out: &mut W, world: &WorldMesh, base: &mut IndexBase) -> fmt::Result {
        let precision = self.options.precision;
        let mesh = &world.mesh;
        let with_uvs = self.options.include_uvs && mesh.has_uvs();
        let with_normals = self.options.include_normals;

        writeln!(out, "o {}", sanitize(&world.name))?;
        for v in &mesh.vertices {
            let p = v.position;
            write!(out, "v {:.*} {:.*} {:.*}", precision, p.x, precision, p.y, precision, p.z)?;
            if self.options.include_colors {
                let uv = v.uv.unwrap_or_default();
                let [r, g, b] = world.material.color_at(uv.x, uv.y).0;
                write!(out, " {:.*} {:.*} {:.*}", precision, r, precision, g, precision, b)?;
            }
            writeln!(out)?;
        }
        if with_uvs {
            for uv in mesh.vertices.iter().filter_map(|v| v.uv) {
                writeln!(out, "vt {:.*} {:.*}", precision, uv.x, precision, uv.y)?;
            }
        }
        if with_normals {
            for v in &mesh.vertices {
                let n = v.normal;
                writeln!(out, "vn {:.*} {:.*} {:.*}", precision, n.x, precision, n.y, precision, n.z)?;
            }
        }

        for triangle in mesh.triangles() {
            write!(out, "f")?;
            for index in triangle {
                let index = index as usize;
                let v = base.vertex + index;
                match (with_uvs, with_normals) {
                    (true, true) => write!(out, " {}/{}/{}", v, base.uv + index, base.normal + index)?,
                    (true, false) => write!(out, " {}/{}", v, base.uv + index)?,
                    (false, true) => write!(out, " {}//{}", v, base.normal + index)?,
                    (false, false) => write!(out, " {}", v)?,
                }
            }
            writeln!(out)?;
        }

        base.vertex += mesh.vertex_count();
        if with_uvs {
            base.uv += mesh.vertex_count();
        }
        if with_normals {
            base.normal += mesh.vertex_count();
        }
        Ok(())
    }
}

impl Default for ObjExporter {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() || c.is_control() { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "mesh".to_string()
    } else {
        cleaned
    }
}

/// Flatten a snapshot of `roots` under one group node, then serialize it
pub fn export_nodes<'a>(roots: impl IntoIterator<Item = &'a SceneNode>, options: &ExportOptions) -> MeshText {
    let group = SceneNode::group("export").with_children(roots.into_iter().cloned());
    ObjExporter::new(options.clone()).parse(&group)
}

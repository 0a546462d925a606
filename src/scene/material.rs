use std::sync::Arc;

use crate::math::Rgb;

/// Shared, immutable surface description
pub type MaterialRef = Arc<Material>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Emissive {
    pub color: Rgb,
    pub intensity: f32,
}

/// One dark band on a stripe texture, in texture-space `u`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StripeBand {
    pub center: f32,
    pub half_width: f32,
}

impl StripeBand {
    /// Distance test that wraps around the `u` seam
    pub fn covers(&self, u: f32) -> bool {
        let d = (u - self.center).rem_euclid(1.0);
        d.min(1.0 - d) <= self.half_width
    }
}

/// Procedural banded texture: stripes run across `u`
#[derive(Clone, Debug, PartialEq)]
pub struct StripeTexture {
    pub base: Rgb,
    pub stripe: Rgb,
    pub bands: Vec<StripeBand>,
}

impl StripeTexture {
    pub fn sample(&self, u: f32, _v: f32) -> Rgb {
        if self.bands.iter().any(|band| band.covers(u)) {
            self.stripe
        } else {
            self.base
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: Option<Emissive>,
    pub texture: Option<StripeTexture>,
}

impl Material {
    pub fn standard(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
            roughness: 0.6,
            metalness: 0.0,
            emissive: None,
            texture: None,
        }
    }

    pub fn metallic(name: impl Into<String>, color: Rgb, roughness: f32, metalness: f32) -> Self {
        Self {
            roughness: roughness.clamp(0.0, 1.0),
            metalness: metalness.clamp(0.0, 1.0),
            ..Self::standard(name, color)
        }
    }

    pub fn glowing(name: impl Into<String>, color: Rgb, intensity: f32) -> Self {
        Self {
            emissive: Some(Emissive {
                color,
                intensity: intensity.max(0.0),
            }),
            ..Self::standard(name, color)
        }
    }

    pub fn with_texture(mut self, texture: StripeTexture) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn shared(self) -> MaterialRef {
        Arc::new(self)
    }

    /// Surface color at a texture coordinate, falling back to the flat color
    pub fn color_at(&self, u: f32, v: f32) -> Rgb {
        match &self.texture {
            Some(texture) => texture.sample(u, v),
            None => self.color,
        }
    }
}

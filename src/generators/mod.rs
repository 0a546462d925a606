//! Procedural model generators, one per [`Category`].
//!
//! Each generator splits its work in two stages. The blueprint (part counts,
//! base sizes and placements) is a pure function of detail and seed. The
//! jitter stage then nudges cosmetic details (bolt positions, plate scatter,
//! stripe bands, debris) through a [`Jitter`] source, which can be seeded
//! for reproducible output or disabled entirely.

mod castle;
mod fallback;
mod robot;
mod spaceship;
mod tiger;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::router::Category;
use crate::scene::SceneNode;

pub use castle::{crenellations_per_tower, tower_count, CastleGenerator};
pub use fallback::{debris_count, debris_subdivisions, FallbackGenerator, DEBRIS_EXTENT};
pub use robot::{finger_count, plate_count, RobotGenerator};
pub use spaceship::SpaceshipGenerator;
pub use tiger::{stripe_count, tail_segment_count, TigerGenerator};

pub const MIN_DETAIL: f32 = 0.25;
pub const MAX_DETAIL: f32 = 4.0;

/// Scale factor for part count and dimensions, always within `[MIN_DETAIL, MAX_DETAIL]`
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct DetailLevel(f32);

impl DetailLevel {
    /// Clamp into range; non-finite input falls back to the default level
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            warn!("Detail level {} is not finite, using {}", value, Self::default().0);
            return Self::default();
        }
        if value < MIN_DETAIL {
            warn!("Detail level {} below minimum, clamping to {}", value, MIN_DETAIL);
            return Self(MIN_DETAIL);
        }
        if value > MAX_DETAIL {
            warn!("Detail level {} above maximum, clamping to {}", value, MAX_DETAIL);
            return Self(MAX_DETAIL);
        }
        Self(value)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Uniform size multiplier; 1.0 at the default level
    pub fn size_factor(&self) -> f32 {
        0.75 + 0.25 * self.0
    }

    /// `base + floor(per_unit * detail)`, non-decreasing in detail
    pub fn count(&self, base: usize, per_unit: f32) -> usize {
        base + (per_unit * self.0).floor() as usize
    }

    /// Tessellation segments for round parts
    pub fn segments(&self, base: u32) -> u32 {
        base + (8.0 * self.0).round() as u32
    }
}

impl Default for DetailLevel {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f32> for DetailLevel {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Source of cosmetic randomness
pub struct Jitter {
    rng: StdRng,
    amount: f32,
}

impl Jitter {
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            amount: 1.0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            amount: 1.0,
        }
    }

    /// Every draw yields the blueprint value
    pub fn none() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            amount: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.amount > 0.0
    }

    /// Uniform offset in `[-range, range]`
    pub fn offset(&mut self, range: f32) -> f32 {
        let draw: f32 = self.rng.gen_range(-1.0..=1.0);
        draw * range * self.amount
    }

    /// `base` scaled by a factor in `[1 - spread, 1 + spread]`
    pub fn vary(&mut self, base: f32, spread: f32) -> f32 {
        base * (1.0 + self.offset(spread))
    }

    pub fn vec3(&mut self, range: glam::Vec3) -> glam::Vec3 {
        glam::Vec3::new(self.offset(range.x), self.offset(range.y), self.offset(range.z))
    }
}

/// A generator's full output
#[derive(Clone, Debug)]
pub struct GeneratedModel {
    pub category: Category,
    pub detail: DetailLevel,
    pub seed: String,
    pub root: SceneNode,
}

impl GeneratedModel {
    pub fn primitive_count(&self) -> usize {
        self.root.primitive_count()
    }
}

pub trait Generator {
    fn category(&self) -> Category;

    /// Build the model tree, drawing cosmetic variation from `jitter`
    fn build(&self, detail: DetailLevel, seed: &str, jitter: &mut Jitter) -> SceneNode;

    fn generate(&self, detail: DetailLevel, seed: &str, jitter: &mut Jitter) -> GeneratedModel {
        let root = self.build(detail, seed, jitter);
        info!(
            "Generated {} (detail {:.2}): {} primitives",
            self.category(),
            detail.value(),
            root.primitive_count()
        );
        GeneratedModel {
            category: self.category(),
            detail,
            seed: seed.to_string(),
            root,
        }
    }
}

pub fn generator_for(category: Category) -> &'static dyn Generator {
    match category {
        Category::Robot => &RobotGenerator,
        Category::Tiger => &TigerGenerator,
        Category::Castle => &CastleGenerator,
        Category::Spaceship => &SpaceshipGenerator,
        Category::Fallback => &FallbackGenerator,
    }
}

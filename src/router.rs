use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed generation classes a prompt can map to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Robot,
    Tiger,
    Castle,
    Spaceship,
    Fallback,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Robot,
        Category::Tiger,
        Category::Castle,
        Category::Spaceship,
        Category::Fallback,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Robot => "robot",
            Category::Tiger => "tiger",
            Category::Castle => "castle",
            Category::Spaceship => "spaceship",
            Category::Fallback => "fallback",
        }
    }

    /// Substrings that select this category; empty for the fallback
    pub fn keywords(&self) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checked in order; the first rule with a matching substring wins
pub const RULES: [(Category, &[&str]); 4] = [
    (Category::Robot, &["robot", "mech"]),
    (Category::Tiger, &["tiger", "cat", "lion"]),
    (Category::Castle, &["castle", "tower"]),
    (Category::Spaceship, &["ship", "spaceship", "rocket"]),
];

/// Map a free-text prompt to a category. Never fails.
pub fn classify(prompt: &str) -> Category {
    let prompt = prompt.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| prompt.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Fallback)
}

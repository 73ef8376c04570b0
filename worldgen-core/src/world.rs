//! World record and the enumerations it is built from.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// THEME
// ============================================================================

/// Top-level content category governing names, cultures, dangers and languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Theme {
    #[serde(rename = "fantasy")]
    Fantasy,
    #[serde(rename = "sci-fi")]
    SciFi,
    #[serde(rename = "post-apocalyptic")]
    PostApocalyptic,
}

impl Theme {
    /// Every theme, in declaration order.
    pub const ALL: [Theme; 3] = [Theme::Fantasy, Theme::SciFi, Theme::PostApocalyptic];

    /// Theme used for empty or unrecognized input.
    pub const DEFAULT: Theme = Theme::Fantasy;

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Fantasy => "fantasy",
            Theme::SciFi => "sci-fi",
            Theme::PostApocalyptic => "post-apocalyptic",
        }
    }

    /// Map arbitrary user input onto a theme.
    ///
    /// Empty or unknown strings silently become [`Theme::Fantasy`]; this never
    /// fails. Matching is exact (case-sensitive), as the lookup tables are.
    pub fn normalize(input: &str) -> Theme {
        input.parse().unwrap_or(Self::DEFAULT)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "theme",
                value: s.to_string(),
            })
    }
}

// ============================================================================
// CLIMATE
// ============================================================================

/// Secondary category governing features, fauna, flora and dangers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Climate {
    Arid,
    Temperate,
    Tropical,
    Arctic,
    Mediterranean,
    Alpine,
    Oceanic,
    Continental,
    Monsoonal,
    Polar,
    Desert,
    Savanna,
    Rainforest,
    Tundra,
    #[serde(rename = "Humid Subtropical")]
    HumidSubtropical,
}

impl Climate {
    /// The fixed set climates are drawn from.
    pub const ALL: [Climate; 15] = [
        Climate::Arid,
        Climate::Temperate,
        Climate::Tropical,
        Climate::Arctic,
        Climate::Mediterranean,
        Climate::Alpine,
        Climate::Oceanic,
        Climate::Continental,
        Climate::Monsoonal,
        Climate::Polar,
        Climate::Desert,
        Climate::Savanna,
        Climate::Rainforest,
        Climate::Tundra,
        Climate::HumidSubtropical,
    ];

    /// Climate of the last-resort fallback entry.
    pub const DEFAULT: Climate = Climate::Temperate;

    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Arid => "Arid",
            Climate::Temperate => "Temperate",
            Climate::Tropical => "Tropical",
            Climate::Arctic => "Arctic",
            Climate::Mediterranean => "Mediterranean",
            Climate::Alpine => "Alpine",
            Climate::Oceanic => "Oceanic",
            Climate::Continental => "Continental",
            Climate::Monsoonal => "Monsoonal",
            Climate::Polar => "Polar",
            Climate::Desert => "Desert",
            Climate::Savanna => "Savanna",
            Climate::Rainforest => "Rainforest",
            Climate::Tundra => "Tundra",
            Climate::HumidSubtropical => "Humid Subtropical",
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Climate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Climate::ALL
            .into_iter()
            .find(|climate| climate.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "climate",
                value: s.to_string(),
            })
    }
}

// ============================================================================
// CATEGORY
// ============================================================================

/// Content categories drawn for every world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Features,
    Fauna,
    Flora,
    Cultures,
    Dangers,
    Languages,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Features,
        Category::Fauna,
        Category::Flora,
        Category::Cultures,
        Category::Dangers,
        Category::Languages,
    ];

    /// Inclusive `(min, max)` number of entries drawn for this category.
    pub fn bounds(&self) -> (usize, usize) {
        match self {
            Category::Features | Category::Fauna | Category::Flora => (2, 4),
            Category::Cultures | Category::Languages => (1, 3),
            Category::Dangers => (1, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Features => "features",
            Category::Fauna => "fauna",
            Category::Flora => "flora",
            Category::Cultures => "cultures",
            Category::Dangers => "dangers",
            Category::Languages => "languages",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// WORLD
// ============================================================================

/// Upper bound (exclusive) for generated populations.
pub const MAX_POPULATION: i64 = 10_000_000;

/// A generated world.
///
/// `id` and `created_at` are assigned by the durable store; a world that was
/// never persisted carries neither. Worlds are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct World {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub population: i64,
    pub climate: Climate,
    pub features: Vec<String>,
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fauna: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flora: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cultures: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dangers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

impl World {
    /// Entries drawn for the given category.
    pub fn category(&self, category: Category) -> &[String] {
        match category {
            Category::Features => &self.features,
            Category::Fauna => &self.fauna,
            Category::Flora => &self.flora,
            Category::Cultures => &self.cultures,
            Category::Dangers => &self.dangers,
            Category::Languages => &self.languages,
        }
    }

    /// Whether the durable store has assigned this world an identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some_and(|id| id > 0)
    }
}

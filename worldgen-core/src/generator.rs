//! Procedural world generation.
//!
//! A [`Generator`] owns validated [`ContentTables`] and a seeded random
//! source. Generation is total: every theme string yields a well-formed
//! world, and nothing here touches a store.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::content::ContentTables;
use crate::error::CoreResult;
use crate::world::{Category, Climate, Theme, World, MAX_POPULATION};

/// Builds random worlds from a fixed set of content tables.
pub struct Generator {
    tables: Arc<ContentTables>,
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

impl Generator {
    /// Create a generator seeded from the operating system.
    pub fn new(tables: Arc<ContentTables>) -> CoreResult<Self> {
        tables.validate()?;
        Ok(Self {
            tables,
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// Create a generator with a fixed seed, for reproducible output.
    pub fn with_seed(tables: Arc<ContentTables>, seed: u64) -> CoreResult<Self> {
        tables.validate()?;
        Ok(Self {
            tables,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    /// Generator over the builtin tables.
    pub fn builtin() -> CoreResult<Self> {
        Self::new(Arc::new(ContentTables::builtin()))
    }

    /// Generate a world for arbitrary theme input.
    ///
    /// Unknown or empty themes are treated as `fantasy`.
    pub fn generate(&self, theme: &str) -> World {
        self.generate_theme(Theme::normalize(theme))
    }

    /// Generate a world for a known theme. The result has no id or timestamp.
    pub fn generate_theme(&self, theme: Theme) -> World {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let rng = &mut *rng;
        let tables = &*self.tables;

        let climate = Climate::ALL.choose(rng).copied().unwrap_or(Climate::DEFAULT);

        let draw = |category: Category, rng: &mut StdRng| {
            draw_distinct(tables.source(category, theme, climate), category, rng)
        };
        let features = draw(Category::Features, rng);
        let fauna = draw(Category::Fauna, rng);
        let flora = draw(Category::Flora, rng);
        let cultures = draw(Category::Cultures, rng);
        let dangers = draw(Category::Dangers, rng);
        let languages = draw(Category::Languages, rng);

        let name = compose_name(tables, theme, rng);
        let description = describe(
            &DescriptionParts {
                theme,
                climate,
                features: &features,
                fauna: &fauna,
                flora: &flora,
            },
            rng,
        );
        let population = rng.random_range(0..MAX_POPULATION);

        World {
            id: None,
            name,
            description,
            population,
            climate,
            features,
            theme,
            created_at: None,
            fauna,
            flora,
            cultures,
            dangers,
            languages,
        }
    }
}

/// Pick a random-sized set of distinct entries from `source`.
///
/// The size is drawn uniformly from the category bounds and capped at the
/// number of distinct entries available.
fn draw_distinct(source: &[String], category: Category, rng: &mut StdRng) -> Vec<String> {
    let (min, max) = category.bounds();
    let count = rng.random_range(min..=max);

    let mut seen = HashSet::new();
    let mut pool: Vec<String> = source
        .iter()
        .filter(|entry| seen.insert(entry.as_str()))
        .cloned()
        .collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

fn compose_name(tables: &ContentTables, theme: Theme, rng: &mut StdRng) -> String {
    let (prefixes, suffixes) = tables.name_parts_for(theme);
    let prefix = prefixes.choose(rng).map(String::as_str).unwrap_or_default();
    let suffix = suffixes.choose(rng).map(String::as_str).unwrap_or_default();
    format!("{}{}", prefix, suffix)
}

// ============================================================================
// DESCRIPTIONS
// ============================================================================

struct DescriptionParts<'a> {
    theme: Theme,
    climate: Climate,
    features: &'a [String],
    fauna: &'a [String],
    flora: &'a [String],
}

impl DescriptionParts<'_> {
    fn feature(&self, index: usize) -> &str {
        self.features.get(index).map(String::as_str).unwrap_or_default()
    }

    fn fauna(&self) -> &str {
        self.fauna.first().map(String::as_str).unwrap_or_default()
    }

    fn flora(&self) -> &str {
        self.flora.first().map(String::as_str).unwrap_or_default()
    }
}

type Template = fn(&DescriptionParts<'_>) -> String;

const TEMPLATES: [Template; 4] = [themed_world, climate_world, defined_world, explore_realm];

fn describe(parts: &DescriptionParts<'_>, rng: &mut StdRng) -> String {
    let template = TEMPLATES[rng.random_range(0..TEMPLATES.len())];
    template(parts)
}

fn themed_world(p: &DescriptionParts<'_>) -> String {
    format!(
        "In this {}-themed world, the {} climate fosters {} and {}. {} roam among the {}.",
        p.theme,
        p.climate,
        p.feature(0),
        p.feature(1),
        p.fauna(),
        p.flora()
    )
}

fn climate_world(p: &DescriptionParts<'_>) -> String {
    format!(
        "A world with {} climate, where {} and {} abound. Home to {} and magnificent {}.",
        p.climate,
        p.feature(0),
        p.feature(1),
        p.fauna(),
        p.flora()
    )
}

fn defined_world(p: &DescriptionParts<'_>) -> String {
    format!(
        "This {} world is defined by its {} climate and {} alongside {}. Travelers may encounter {} near the {}.",
        p.theme,
        p.climate,
        p.feature(0),
        p.feature(1),
        p.fauna(),
        p.flora()
    )
}

fn explore_realm(p: &DescriptionParts<'_>) -> String {
    format!(
        "Explore a {} realm under {} skies, with {} and {}. Beware of {} hiding within the {}.",
        p.theme,
        p.climate,
        p.feature(0),
        p.feature(1),
        p.fauna(),
        p.flora()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Generator {
        Generator::with_seed(Arc::new(ContentTables::builtin()), seed).expect("builtin tables")
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = seeded(7).generate("sci-fi");
        let b = seeded(7).generate("sci-fi");
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_theme_becomes_fantasy() {
        let generator = seeded(1);
        assert_eq!(generator.generate("").theme, Theme::Fantasy);
        assert_eq!(generator.generate("cyberpunk").theme, Theme::Fantasy);
    }

    #[test]
    fn test_generated_world_is_unpersisted() {
        let world = seeded(3).generate("post-apocalyptic");
        assert_eq!(world.id, None);
        assert_eq!(world.created_at, None);
        assert_eq!(world.theme, Theme::PostApocalyptic);
    }

    #[test]
    fn test_description_mentions_climate_and_first_feature() {
        let generator = seeded(11);
        for _ in 0..50 {
            let world = generator.generate("fantasy");
            assert!(world.description.contains(world.climate.as_str()));
            assert!(world.description.contains(&world.features[0]));
        }
    }

    #[test]
    fn test_draw_distinct_caps_at_source_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let source = vec!["Dust".to_string(), "Dust".to_string(), "Ash".to_string()];
        for _ in 0..20 {
            let drawn = draw_distinct(&source, Category::Features, &mut rng);
            assert_eq!(drawn.len(), 2);
            assert_ne!(drawn[0], drawn[1]);
        }
    }

    #[test]
    fn test_rejects_incomplete_tables() {
        let result = Generator::new(Arc::new(ContentTables::default()));
        assert!(result.is_err());
    }

    #[test]
    fn test_every_template_fills_all_placeholders() {
        let features = vec!["Rivers".to_string(), "Lakes".to_string()];
        let fauna = vec!["Deer".to_string()];
        let flora = vec!["Oaks".to_string()];
        let parts = DescriptionParts {
            theme: Theme::SciFi,
            climate: Climate::HumidSubtropical,
            features: &features,
            fauna: &fauna,
            flora: &flora,
        };
        for template in TEMPLATES {
            let text = template(&parts);
            assert!(!text.contains("{}"));
            assert!(text.contains("Humid Subtropical"));
            assert!(text.contains("Rivers") && text.contains("Lakes"));
            assert!(text.contains("Deer") && text.contains("Oaks"));
        }
    }
}

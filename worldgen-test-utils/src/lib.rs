//! World Gen Test Utilities
//!
//! Shared test infrastructure for the workspace:
//! - Proptest generators for themes and climates
//! - Fixtures for content tables and worlds
//! - Assertions for world invariants

// Re-export in-memory stores from their source crate
pub use worldgen_storage::{InMemoryCacheStore, InMemoryDurableStore, WorldFilter};

// Re-export core types for convenience
pub use worldgen_core::{
    Category, Climate, ContentTables, Generator, Theme, World, MAX_POPULATION,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for world inputs.

    use super::*;
    use proptest::prelude::*;

    /// Generate one of the recognized themes.
    pub fn arb_theme() -> impl Strategy<Value = Theme> {
        prop::sample::select(Theme::ALL.to_vec())
    }

    /// Generate one of the fixed climates.
    pub fn arb_climate() -> impl Strategy<Value = Climate> {
        prop::sample::select(Climate::ALL.to_vec())
    }

    /// Generate theme input that does not name a recognized theme.
    pub fn arb_invalid_theme() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("Fantasy".to_string()),
            Just("SCI-FI".to_string()),
            Just(" sci-fi".to_string()),
            Just("steampunk".to_string()),
            "[a-zA-Z0-9 _-]{0,24}",
        ]
        .prop_filter("must not be a known theme", |s| {
            Theme::ALL.iter().all(|theme| theme.as_str() != s)
        })
    }

    /// Generate a free-text search term.
    pub fn arb_query() -> impl Strategy<Value = String> {
        "[a-zA-Z ]{0,12}"
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built fixtures for common scenarios.

    use std::collections::BTreeMap;
    use std::sync::Arc;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Tables holding only the fixed default entries.
    ///
    /// Every lookup for a theme or climate other than the defaults has to fall
    /// back. Names always come out as `Eldvale`.
    pub fn sparse_tables() -> ContentTables {
        ContentTables {
            features: BTreeMap::from([(Climate::Temperate, strings(&["Rivers", "Lakes", "Hills"]))]),
            fauna: BTreeMap::from([(
                Theme::Fantasy,
                BTreeMap::from([(Climate::Temperate, strings(&["Deer", "Foxes"]))]),
            )]),
            flora: BTreeMap::from([(
                Theme::Fantasy,
                BTreeMap::from([(Climate::Temperate, strings(&["Oaks", "Ferns", "Moss"]))]),
            )]),
            dangers: BTreeMap::from([(
                Theme::Fantasy,
                BTreeMap::from([(Climate::Temperate, strings(&["Wolves"]))]),
            )]),
            cultures: BTreeMap::from([(Theme::Fantasy, strings(&["Elves"]))]),
            languages: BTreeMap::from([(Theme::Fantasy, strings(&["Elvish", "Common"]))]),
            name_prefixes: BTreeMap::from([(Theme::Fantasy, strings(&["Eld"]))]),
            name_suffixes: BTreeMap::from([(Theme::Fantasy, strings(&["vale"]))]),
        }
    }

    /// Seeded generator over the built-in tables.
    pub fn seeded_generator(seed: u64) -> Arc<Generator> {
        let tables = Arc::new(ContentTables::builtin());
        match Generator::with_seed(tables, seed) {
            Ok(generator) => Arc::new(generator),
            Err(e) => panic!("built-in content tables rejected: {}", e),
        }
    }

    /// A world shaped like a durable row: only features, no id yet.
    pub fn sample_world(index: usize, theme: Theme, climate: Climate) -> World {
        World {
            id: None,
            name: format!("World {}", index),
            description: format!("A {} world numbered {}", climate, index),
            population: (index as i64 * 1_000) % MAX_POPULATION,
            climate,
            features: strings(&["Rivers", "Lakes"]),
            theme,
            created_at: None,
            fauna: Vec::new(),
            flora: Vec::new(),
            cultures: Vec::new(),
            dangers: Vec::new(),
            languages: Vec::new(),
        }
    }

    /// Durable store pre-filled with `count` worlds of `theme`.
    pub async fn seeded_durable_store(count: usize, theme: Theme) -> InMemoryDurableStore {
        use worldgen_storage::DurableStore;

        let store = InMemoryDurableStore::new();
        for index in 0..count {
            let climate = Climate::ALL[index % Climate::ALL.len()];
            if let Err(e) = store.insert(&sample_world(index, theme, climate)).await {
                panic!("in-memory insert failed: {}", e);
            }
        }
        store
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions over generated worlds.

    use std::collections::HashSet;

    use super::*;

    /// Assert every structural invariant of a freshly generated world.
    #[track_caller]
    pub fn assert_world_invariants(world: &World) {
        assert!(!world.name.is_empty(), "name must not be empty");
        assert!(!world.description.is_empty(), "description must not be empty");
        assert!(
            (0..MAX_POPULATION).contains(&world.population),
            "population {} out of range",
            world.population
        );
        assert!(Climate::ALL.contains(&world.climate));

        for category in Category::ALL {
            let entries = world.category(category);
            let (min, max) = category.bounds();
            assert!(
                (min..=max).contains(&entries.len()),
                "{} has {} entries, expected {}..={}",
                category,
                entries.len(),
                min,
                max
            );
            let unique: HashSet<&String> = entries.iter().collect();
            assert_eq!(unique.len(), entries.len(), "{} has duplicates", category);
        }
    }

    /// Assert a sequence of worlds is ordered newest first.
    #[track_caller]
    pub fn assert_newest_first(worlds: &[World]) {
        for pair in worlds.windows(2) {
            assert!(
                pair[0].created_at >= pair[1].created_at,
                "worlds out of order: {:?} before {:?}",
                pair[0].created_at,
                pair[1].created_at
            );
        }
    }
}

use std::sync::Arc;

use proptest::prelude::*;
use worldgen_core::{Category, ContentTables, Generator, Theme, World};
use worldgen_test_utils::assertions::assert_world_invariants;
use worldgen_test_utils::fixtures::sparse_tables;
use worldgen_test_utils::generators::{arb_invalid_theme, arb_theme};

/// Every drawn entry must come from the list the fallback chain resolves to.
#[track_caller]
fn assert_drawn_from_tables(world: &World, tables: &ContentTables) {
    for category in Category::ALL {
        let source = tables.source(category, world.theme, world.climate);
        for entry in world.category(category) {
            assert!(source.contains(entry), "{} not drawn from {} source", entry, category);
        }
    }
}

#[test]
fn thousand_worlds_per_theme_hold_invariants() {
    let tables = Arc::new(ContentTables::builtin());
    let generator = Generator::with_seed(tables.clone(), 42).expect("builtin tables");

    for theme in Theme::ALL {
        for _ in 0..1000 {
            let world = generator.generate(theme.as_str());
            assert_eq!(world.theme, theme);
            assert_world_invariants(&world);
            assert_drawn_from_tables(&world, &tables);
        }
    }
}

#[test]
fn sparse_tables_fall_back_to_defaults() {
    let tables = Arc::new(sparse_tables());
    let generator = Generator::with_seed(tables.clone(), 9).expect("defaults present");

    for theme in Theme::ALL {
        for _ in 0..200 {
            let world = generator.generate(theme.as_str());
            assert_eq!(world.theme, theme);
            assert_eq!(world.name, "Eldvale");
            assert_eq!(world.dangers, vec!["Wolves".to_string()]);
            assert_world_invariants(&world);
            assert_drawn_from_tables(&world, &tables);
        }
    }
}

proptest! {
    #[test]
    fn unrecognized_theme_input_yields_fantasy(input in arb_invalid_theme(), seed in any::<u64>()) {
        let tables = Arc::new(ContentTables::builtin());
        let generator = Generator::with_seed(tables.clone(), seed).expect("builtin tables");

        let world = generator.generate(&input);
        prop_assert_eq!(world.theme, Theme::Fantasy);
        prop_assert!(world.id.is_none());
        assert_world_invariants(&world);
        assert_drawn_from_tables(&world, &tables);
    }

    #[test]
    fn known_themes_are_preserved(theme in arb_theme(), seed in any::<u64>()) {
        let tables = Arc::new(ContentTables::builtin());
        let generator = Generator::with_seed(tables.clone(), seed).expect("builtin tables");

        let world = generator.generate(theme.as_str());
        prop_assert_eq!(world.theme, theme);
        assert_world_invariants(&world);
        assert_drawn_from_tables(&world, &tables);
    }

    #[test]
    fn sparse_tables_resolve_identically_across_clones(theme in arb_theme(), seed in any::<u64>()) {
        let tables = sparse_tables();
        let copy = tables.clone();
        let generator = Generator::with_seed(Arc::new(tables.clone()), seed).expect("defaults present");

        let world = generator.generate(theme.as_str());
        for category in Category::ALL {
            prop_assert_eq!(
                tables.source(category, world.theme, world.climate),
                copy.source(category, world.theme, world.climate)
            );
        }
    }
}

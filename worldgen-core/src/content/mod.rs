//! Themed content tables.
//!
//! Tables are plain data: a climate-keyed feature table, theme→climate keyed
//! fauna/flora/danger tables, and theme-keyed culture/language/name tables.
//! They are built once, validated, and shared read-only by the generator.
//!
//! # Fallback chain
//!
//! Every lookup resolves through the same ordered attempts, treating a
//! missing or empty list as absent:
//!
//! 1. the exact `(theme, climate)` entry
//! 2. the first non-empty climate entry under the same theme
//! 3. the fixed default entry (`fantasy`, `Temperate`)
//!
//! Climate-only tables skip step 2; theme-only tables skip the climate
//! dimension entirely. Maps are ordered, so step 2 picks the same entry every
//! time for a given table instance.

mod builtin;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::world::{Category, Climate, Theme};

/// Climate-keyed word lists.
pub type ClimateTable = BTreeMap<Climate, Vec<String>>;

/// Theme-then-climate keyed word lists.
pub type ThemedClimateTable = BTreeMap<Theme, ClimateTable>;

/// Theme-keyed word lists.
pub type ThemeTable = BTreeMap<Theme, Vec<String>>;

/// All word lists the generator draws from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTables {
    #[serde(default)]
    pub features: ClimateTable,
    #[serde(default)]
    pub fauna: ThemedClimateTable,
    #[serde(default)]
    pub flora: ThemedClimateTable,
    #[serde(default)]
    pub dangers: ThemedClimateTable,
    #[serde(default)]
    pub cultures: ThemeTable,
    #[serde(default)]
    pub languages: ThemeTable,
    #[serde(default)]
    pub name_prefixes: ThemeTable,
    #[serde(default)]
    pub name_suffixes: ThemeTable,
}

impl ContentTables {
    /// The word lists shipped with the service.
    pub fn builtin() -> Self {
        Self {
            features: climate_table(builtin::FEATURES),
            fauna: themed_climate_table(builtin::FAUNA),
            flora: themed_climate_table(builtin::FLORA),
            dangers: themed_climate_table(builtin::DANGERS),
            cultures: theme_table(builtin::CULTURES),
            languages: theme_table(builtin::LANGUAGES),
            name_prefixes: theme_table(builtin::NAME_PREFIXES),
            name_suffixes: theme_table(builtin::NAME_SUFFIXES),
        }
    }

    /// Parse tables from their JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load substitute tables from a JSON file and validate them.
    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::ContentIo {
            path: path.display().to_string(),
            source,
        })?;
        let tables = Self::from_json(&raw).map_err(|source| CoreError::ContentParse {
            path: path.display().to_string(),
            source,
        })?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check that every fallback chain terminates in a usable entry.
    ///
    /// The fixed defaults must be present, and every non-empty list must hold
    /// enough distinct entries to satisfy its category's minimum draw. Empty
    /// lists are allowed; lookups treat them as absent and fall back.
    pub fn validate(&self) -> CoreResult<()> {
        check_climate_table("features", Category::Features, &self.features)?;
        if self.features.get(&Climate::DEFAULT).is_none_or_empty() {
            return Err(missing_default("features", Climate::DEFAULT.as_str()));
        }

        for (table, category, entries) in [
            ("fauna", Category::Fauna, &self.fauna),
            ("flora", Category::Flora, &self.flora),
            ("dangers", Category::Dangers, &self.dangers),
        ] {
            for climates in entries.values() {
                check_climate_table(table, category, climates)?;
            }
            let default = entries
                .get(&Theme::DEFAULT)
                .and_then(|climates| climates.get(&Climate::DEFAULT));
            if default.is_none_or_empty() {
                return Err(missing_default(
                    table,
                    &format!("{}/{}", Theme::DEFAULT, Climate::DEFAULT),
                ));
            }
        }

        for (table, category, entries) in [
            ("cultures", Some(Category::Cultures), &self.cultures),
            ("languages", Some(Category::Languages), &self.languages),
            ("name_prefixes", None, &self.name_prefixes),
            ("name_suffixes", None, &self.name_suffixes),
        ] {
            if let Some(category) = category {
                for list in entries.values() {
                    check_list(table, category, list)?;
                }
            }
            if entries.get(&Theme::DEFAULT).is_none_or_empty() {
                return Err(missing_default(table, Theme::DEFAULT.as_str()));
            }
        }

        Ok(())
    }

    // ========================================================================
    // RESOLUTION
    // ========================================================================

    /// Resolve the source list for a category.
    pub fn source(&self, category: Category, theme: Theme, climate: Climate) -> &[String] {
        match category {
            Category::Features => self.features_for(climate),
            Category::Fauna => resolve_themed(&self.fauna, theme, climate),
            Category::Flora => resolve_themed(&self.flora, theme, climate),
            Category::Dangers => resolve_themed(&self.dangers, theme, climate),
            Category::Cultures => resolve_theme(&self.cultures, theme),
            Category::Languages => resolve_theme(&self.languages, theme),
        }
    }

    pub fn features_for(&self, climate: Climate) -> &[String] {
        self.features
            .get(&climate)
            .filter(|list| !list.is_empty())
            .or_else(|| self.features.get(&Climate::DEFAULT))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn fauna_for(&self, theme: Theme, climate: Climate) -> &[String] {
        resolve_themed(&self.fauna, theme, climate)
    }

    pub fn flora_for(&self, theme: Theme, climate: Climate) -> &[String] {
        resolve_themed(&self.flora, theme, climate)
    }

    pub fn dangers_for(&self, theme: Theme, climate: Climate) -> &[String] {
        resolve_themed(&self.dangers, theme, climate)
    }

    pub fn cultures_for(&self, theme: Theme) -> &[String] {
        resolve_theme(&self.cultures, theme)
    }

    pub fn languages_for(&self, theme: Theme) -> &[String] {
        resolve_theme(&self.languages, theme)
    }

    /// Name prefix and suffix lists for a theme.
    pub fn name_parts_for(&self, theme: Theme) -> (&[String], &[String]) {
        (
            resolve_theme(&self.name_prefixes, theme),
            resolve_theme(&self.name_suffixes, theme),
        )
    }
}

fn resolve_themed(table: &ThemedClimateTable, theme: Theme, climate: Climate) -> &[String] {
    let climates = table.get(&theme);

    climates
        .and_then(|entries| entries.get(&climate))
        .filter(|list| !list.is_empty())
        .or_else(|| climates.and_then(|entries| entries.values().find(|list| !list.is_empty())))
        .or_else(|| {
            table
                .get(&Theme::DEFAULT)
                .and_then(|entries| entries.get(&Climate::DEFAULT))
        })
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn resolve_theme(table: &ThemeTable, theme: Theme) -> &[String] {
    table
        .get(&theme)
        .filter(|list| !list.is_empty())
        .or_else(|| table.get(&Theme::DEFAULT))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

trait ListPresence {
    fn is_none_or_empty(&self) -> bool;
}

impl ListPresence for Option<&Vec<String>> {
    fn is_none_or_empty(&self) -> bool {
        self.map_or(true, |list| list.is_empty())
    }
}

fn missing_default(table: &'static str, key: &str) -> CoreError {
    CoreError::MissingContent {
        table,
        reason: format!("no default entry for {}", key),
    }
}

fn check_climate_table(table: &'static str, category: Category, climates: &ClimateTable) -> CoreResult<()> {
    climates
        .values()
        .try_for_each(|list| check_list(table, category, list))
}

fn check_list(table: &'static str, category: Category, list: &[String]) -> CoreResult<()> {
    let (min, _) = category.bounds();
    let distinct: BTreeSet<&String> = list.iter().collect();
    if !list.is_empty() && distinct.len() < min {
        return Err(CoreError::MissingContent {
            table,
            reason: format!(
                "list has {} distinct entries, {} needs at least {}",
                distinct.len(),
                category,
                min
            ),
        });
    }
    Ok(())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn climate_table(raw: &[(Climate, &[&str])]) -> ClimateTable {
    raw.iter()
        .map(|(climate, items)| (*climate, to_strings(items)))
        .collect()
}

fn themed_climate_table(raw: &[(Theme, &[(Climate, &[&str])])]) -> ThemedClimateTable {
    raw.iter()
        .map(|(theme, climates)| (*theme, climate_table(climates)))
        .collect()
}

fn theme_table(raw: &[(Theme, &[&str])]) -> ThemeTable {
    raw.iter()
        .map(|(theme, items)| (*theme, to_strings(items)))
        .collect()
}

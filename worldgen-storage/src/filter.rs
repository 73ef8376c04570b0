//! Search filters and their SQL predicate.

use worldgen_core::World;

/// Conjunctive search filter. Empty fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldFilter {
    /// Case-insensitive substring of name or description.
    pub query: String,
    /// Exact theme name.
    pub theme: String,
    /// Exact climate name.
    pub climate: String,
}

/// A `WHERE` clause with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub clause: String,
    pub params: Vec<String>,
}

impl Predicate {
    /// Index of the next positional parameter.
    pub fn next_index(&self) -> usize {
        self.params.len() + 1
    }
}

impl WorldFilter {
    pub fn new(query: impl Into<String>, theme: impl Into<String>, climate: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            theme: theme.into(),
            climate: climate.into(),
        }
    }

    /// Build the `WHERE` clause.
    ///
    /// Clauses are appended in a fixed order (query, theme, climate) and
    /// parameters are numbered in the order they are appended.
    pub fn predicate(&self) -> Predicate {
        let mut clause = String::from(" WHERE 1=1");
        let mut params = Vec::new();

        if !self.query.is_empty() {
            params.push(format!("%{}%", self.query));
            let n = params.len();
            clause.push_str(&format!(" AND (name ILIKE ${n} OR description ILIKE ${n})"));
        }
        if !self.theme.is_empty() {
            params.push(self.theme.clone());
            clause.push_str(&format!(" AND theme = ${}", params.len()));
        }
        if !self.climate.is_empty() {
            params.push(self.climate.clone());
            clause.push_str(&format!(" AND climate = ${}", params.len()));
        }

        Predicate { clause, params }
    }

    /// In-process evaluation of the same predicate.
    pub fn matches(&self, world: &World) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            if !world.name.to_lowercase().contains(&needle)
                && !world.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if !self.theme.is_empty() && world.theme.as_str() != self.theme {
            return false;
        }
        if !self.climate.is_empty() && world.climate.as_str() != self.climate {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldgen_core::{Climate, Theme};

    fn world(name: &str, description: &str, theme: Theme, climate: Climate) -> World {
        World {
            id: Some(1),
            name: name.to_string(),
            description: description.to_string(),
            population: 10,
            climate,
            features: vec!["Rivers".to_string(), "Lakes".to_string()],
            theme,
            created_at: None,
            fauna: vec![],
            flora: vec![],
            cultures: vec![],
            dangers: vec![],
            languages: vec![],
        }
    }

    #[test]
    fn test_empty_filter_is_unconditional() {
        let predicate = WorldFilter::default().predicate();
        assert_eq!(predicate.clause, " WHERE 1=1");
        assert!(predicate.params.is_empty());
        assert_eq!(predicate.next_index(), 1);
    }

    #[test]
    fn test_params_numbered_in_append_order() {
        let predicate = WorldFilter::new("dune", "sci-fi", "Arid").predicate();
        assert_eq!(
            predicate.clause,
            " WHERE 1=1 AND (name ILIKE $1 OR description ILIKE $1) AND theme = $2 AND climate = $3"
        );
        assert_eq!(predicate.params, vec!["%dune%", "sci-fi", "Arid"]);
        assert_eq!(predicate.next_index(), 4);
    }

    #[test]
    fn test_skipped_clauses_shift_numbering() {
        let predicate = WorldFilter::new("", "", "Polar").predicate();
        assert_eq!(predicate.clause, " WHERE 1=1 AND climate = $1");
        assert_eq!(predicate.params, vec!["Polar"]);
    }

    #[test]
    fn test_matches_query_case_insensitively() {
        let w = world("Dunehold", "A sandy place", Theme::SciFi, Climate::Arid);
        assert!(WorldFilter::new("DUNE", "", "").matches(&w));
        assert!(WorldFilter::new("sandy", "", "").matches(&w));
        assert!(!WorldFilter::new("forest", "", "").matches(&w));
    }

    #[test]
    fn test_matches_exact_theme_and_climate() {
        let w = world("Vale", "Green", Theme::Fantasy, Climate::HumidSubtropical);
        assert!(WorldFilter::new("", "fantasy", "Humid Subtropical").matches(&w));
        assert!(!WorldFilter::new("", "Fantasy", "").matches(&w));
        assert!(!WorldFilter::new("", "", "Humid").matches(&w));
    }
}
